//! Reconcile a value against the options that are actually available.

use std::collections::HashSet;

use crate::option::SelectOption;
use crate::value::{SelectMode, SelectValue};

/// The part of a value that maps onto known options, in value order.
///
/// Keys without a matching option are dropped silently; they stay in the
/// host's value but are never displayed or reported as checked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
	mode: SelectMode,
	entries: Vec<SelectOption>,
}

impl Selection {
	/// Resolve `value` against `options`.
	pub fn resolve<'a, I>(value: &SelectValue, options: I) -> Self
	where
		I: IntoIterator<Item = &'a SelectOption>,
	{
		let options: Vec<&SelectOption> = options.into_iter().collect();
		let mut seen = HashSet::new();
		let entries = value
			.keys()
			.into_iter()
			.filter(|key| seen.insert(*key))
			.filter_map(|key| {
				options
					.iter()
					.find(|option| option.key == key)
					.map(|option| (*option).clone())
			})
			.collect();

		Self {
			mode: value.mode(),
			entries,
		}
	}

	/// Mode of the value this selection came from.
	#[must_use]
	pub fn mode(&self) -> SelectMode {
		self.mode
	}

	/// Selected options in value order.
	#[must_use]
	pub fn entries(&self) -> &[SelectOption] {
		&self.entries
	}

	/// Whether the row for `key` should render as checked.
	#[must_use]
	pub fn is_checked(&self, key: &str) -> bool {
		self.entries.iter().any(|entry| entry.key == key)
	}

	/// Number of displayed selections.
	#[must_use]
	pub fn len(&self) -> usize {
		self.entries.len()
	}

	/// Whether nothing displayable is selected.
	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	/// The value produced by pressing the row for `key`.
	#[must_use]
	pub fn toggled(&self, key: &str) -> SelectValue {
		match self.mode {
			SelectMode::Single if self.is_checked(key) => SelectValue::Single(None),
			SelectMode::Single => SelectValue::Single(Some(key.to_string())),
			SelectMode::Multi => {
				let mut keys = self.keys();
				if let Some(index) = keys.iter().position(|existing| existing == key) {
					keys.remove(index);
				} else {
					keys.push(key.to_string());
				}
				SelectValue::Multi(keys)
			}
		}
	}

	/// The value with `key` removed, or `None` when `key` is not selected.
	#[must_use]
	pub fn without(&self, key: &str) -> Option<SelectValue> {
		if !self.is_checked(key) {
			return None;
		}
		Some(match self.mode {
			SelectMode::Single => SelectValue::Single(None),
			SelectMode::Multi => SelectValue::Multi(
				self.keys()
					.into_iter()
					.filter(|existing| existing != key)
					.collect(),
			),
		})
	}

	fn keys(&self) -> Vec<String> {
		self.entries.iter().map(|entry| entry.key.clone()).collect()
	}
}
