//! Selectable options and the ordered, key-unique list that holds them.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::SelectError;

/// A single selectable entry: a stable key and the label shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SelectOption {
	/// Identifier reported back through value changes.
	pub key: String,
	/// Text rendered in rows, chips and the anchor.
	pub label: String,
}

impl SelectOption {
	/// Build an option from a key and a label.
	#[must_use]
	pub fn new(key: impl Into<String>, label: impl Into<String>) -> Self {
		Self {
			key: key.into(),
			label: label.into(),
		}
	}

	/// Build an option whose key and label are the same text.
	#[must_use]
	pub fn simple(text: impl Into<String>) -> Self {
		let text = text.into();
		Self {
			key: text.clone(),
			label: text,
		}
	}
}

impl<K, L> From<(K, L)> for SelectOption
where
	K: Into<String>,
	L: Into<String>,
{
	fn from((key, label): (K, L)) -> Self {
		Self::new(key, label)
	}
}

/// Options in display order with unique keys.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OptionList {
	options: Vec<SelectOption>,
}

impl OptionList {
	/// Create an empty list.
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}

	/// Build a list, rejecting the first duplicated key.
	pub fn try_new<I, T>(options: I) -> Result<Self, SelectError>
	where
		I: IntoIterator<Item = T>,
		T: Into<SelectOption>,
	{
		let mut list = Self::new();
		for option in options {
			list.push(option.into())?;
		}
		Ok(list)
	}

	/// Append an option, failing if its key is already present.
	pub fn push(&mut self, option: SelectOption) -> Result<(), SelectError> {
		if self.contains_key(&option.key) {
			return Err(SelectError::DuplicateKey { key: option.key });
		}
		self.options.push(option);
		Ok(())
	}

	/// Look up an option by key.
	#[must_use]
	pub fn get(&self, key: &str) -> Option<&SelectOption> {
		self.options.iter().find(|option| option.key == key)
	}

	/// Whether an option with `key` exists.
	#[must_use]
	pub fn contains_key(&self, key: &str) -> bool {
		self.get(key).is_some()
	}

	/// Iterate options in display order.
	pub fn iter(&self) -> std::slice::Iter<'_, SelectOption> {
		self.options.iter()
	}

	/// Number of options.
	#[must_use]
	pub fn len(&self) -> usize {
		self.options.len()
	}

	/// Whether the list has no options.
	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.options.is_empty()
	}

	/// Borrow the options as a slice.
	#[must_use]
	pub fn as_slice(&self) -> &[SelectOption] {
		&self.options
	}
}

impl<T: Into<SelectOption>> FromIterator<T> for OptionList {
	/// Collect options, keeping the first occurrence of each key.
	fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
		let mut seen = HashSet::new();
		let mut options = Vec::new();
		for option in iter {
			let option = option.into();
			if seen.insert(option.key.clone()) {
				options.push(option);
			} else {
				log::warn!("dropping option with duplicate key '{}'", option.key);
			}
		}
		Self { options }
	}
}

impl<'a> IntoIterator for &'a OptionList {
	type Item = &'a SelectOption;
	type IntoIter = std::slice::Iter<'a, SelectOption>;

	fn into_iter(self) -> Self::IntoIter {
		self.iter()
	}
}

/// Chain supplied options with created ones, skipping created entries whose
/// key is already supplied.
pub fn union<'a>(
	options: &'a OptionList,
	created: &'a [SelectOption],
) -> impl Iterator<Item = &'a SelectOption> + 'a {
	options.iter().chain(
		created
			.iter()
			.filter(move |option| !options.contains_key(&option.key)),
	)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn try_new_rejects_duplicate_keys() {
		let result = OptionList::try_new([("1", "One"), ("1", "Uno")]);
		assert_eq!(
			result,
			Err(SelectError::DuplicateKey {
				key: "1".to_string()
			})
		);
	}

	#[test]
	fn collecting_keeps_first_duplicate() {
		let list: OptionList = [("a", "First"), ("b", "Second"), ("a", "Again")]
			.into_iter()
			.collect();
		assert_eq!(list.len(), 2);
		assert_eq!(list.get("a").map(|o| o.label.as_str()), Some("First"));
	}

	#[test]
	fn union_prefers_supplied_options() {
		let list = OptionList::try_new([("1", "One")]).expect("list");
		let created = vec![SelectOption::simple("1"), SelectOption::simple("new")];
		let keys: Vec<_> = union(&list, &created)
			.map(|o| (o.key.as_str(), o.label.as_str()))
			.collect();
		assert_eq!(keys, vec![("1", "One"), ("new", "new")]);
	}

	#[test]
	fn options_deserialize_from_json_objects() {
		let option: SelectOption =
			serde_json::from_str(r#"{"key":"k","label":"Label"}"#).expect("parse");
		assert_eq!(option, SelectOption::new("k", "Label"));
	}
}
