use thiserror::Error;

use crate::value::SelectMode;

/// Errors raised when a caller hands the select model inconsistent input.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SelectError {
	/// Two options in the same list share a key.
	#[error("option key '{key}' appears more than once")]
	DuplicateKey { key: String },

	/// A value was supplied for a select running in the other mode.
	#[error("expected a {expected:?} value, got a {actual:?} value")]
	ModeMismatch {
		expected: SelectMode,
		actual: SelectMode,
	},
}
