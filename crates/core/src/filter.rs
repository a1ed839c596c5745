//! Search filtering over option labels.

use crate::option::SelectOption;

/// Case-insensitive substring test of `needle` against `label`.
#[must_use]
pub fn label_matches(label: &str, needle: &str) -> bool {
	needle.is_empty() || label.to_lowercase().contains(&needle.to_lowercase())
}

/// Options whose label contains `search`, ignoring case, in display order.
pub fn filter_options<'a, I>(options: I, search: &str) -> Vec<&'a SelectOption>
where
	I: IntoIterator<Item = &'a SelectOption>,
{
	let needle = search.to_lowercase();
	options
		.into_iter()
		.filter(|option| needle.is_empty() || option.label.to_lowercase().contains(&needle))
		.collect()
}

/// The text a new option would be created from, if creating one makes sense.
///
/// Creation needs non-blank text that no label contains and no key equals.
pub fn creatable_text<'a, 'b, I>(options: I, search: &'b str) -> Option<&'b str>
where
	I: IntoIterator<Item = &'a SelectOption>,
{
	if search.trim().is_empty() {
		return None;
	}
	let clashes = options
		.into_iter()
		.any(|option| option.key == search || label_matches(&option.label, search));
	(!clashes).then_some(search)
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::option::OptionList;

	fn options() -> OptionList {
		OptionList::try_new([
			("1", "One"),
			("2", "Two"),
			("3", "Twenty Three"),
			("4", "ÉCLAIR"),
		])
		.expect("options")
	}

	fn labels<'a>(filtered: &[&'a SelectOption]) -> Vec<&'a str> {
		filtered.iter().map(|o| o.label.as_str()).collect()
	}

	#[test]
	fn empty_search_keeps_everything() {
		let list = options();
		assert_eq!(filter_options(&list, "").len(), list.len());
	}

	#[test]
	fn matching_ignores_case() {
		let list = options();
		assert_eq!(labels(&filter_options(&list, "tw")), vec!["Two", "Twenty Three"]);
		assert_eq!(labels(&filter_options(&list, "THREE")), vec!["Twenty Three"]);
		assert_eq!(labels(&filter_options(&list, "éclair")), vec!["ÉCLAIR"]);
	}

	#[test]
	fn filter_equals_reference_predicate() {
		let list = options();
		for search in ["", "o", "O", "en", "x", "wen", " "] {
			let expected: Vec<&str> = list
				.iter()
				.filter(|o| o.label.to_lowercase().contains(&search.to_lowercase()))
				.map(|o| o.label.as_str())
				.collect();
			assert_eq!(labels(&filter_options(&list, search)), expected, "search {search:?}");
		}
	}

	#[test]
	fn creatable_requires_unmatched_text() {
		let list = options();
		assert_eq!(creatable_text(&list, "Four"), Some("Four"));
		assert_eq!(creatable_text(&list, "one"), None);
		assert_eq!(creatable_text(&list, "1"), None);
		assert_eq!(creatable_text(&list, "   "), None);
	}
}
