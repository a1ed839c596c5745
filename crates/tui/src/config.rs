/// Human-readable text rendered by a select.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectLabels {
	/// Shown on the anchor while nothing is selected.
	pub placeholder: String,
	/// Shown in the empty search box.
	pub search_placeholder: String,
	/// Title on the left of the stats row and in the modal border.
	pub list_title: Option<String>,
	/// Shown when the search text filters out every option.
	pub empty_search_msg: String,
	/// Shown when there are no options at all.
	pub no_options_msg: String,
	/// Verb on the create button, rendered as `+ {create_label} "text"`.
	pub create_label: String,
	/// Prefix of the selection count in multi mode.
	pub selection_count_label: String,
}

impl Default for SelectLabels {
	fn default() -> Self {
		Self {
			placeholder: "Select...".to_string(),
			search_placeholder: "Search...".to_string(),
			list_title: None,
			empty_search_msg: "No option matched your query".to_string(),
			no_options_msg: "No Options".to_string(),
			create_label: "Create".to_string(),
			selection_count_label: "Selections".to_string(),
		}
	}
}

impl SelectLabels {
	/// Replace the anchor placeholder.
	#[must_use]
	pub fn placeholder(mut self, text: impl Into<String>) -> Self {
		self.placeholder = text.into();
		self
	}

	/// Replace the search placeholder.
	#[must_use]
	pub fn search_placeholder(mut self, text: impl Into<String>) -> Self {
		self.search_placeholder = text.into();
		self
	}

	/// Set the list title.
	#[must_use]
	pub fn list_title(mut self, text: impl Into<String>) -> Self {
		self.list_title = Some(text.into());
		self
	}

	/// Replace the message shown when nothing matches the search.
	#[must_use]
	pub fn empty_search_msg(mut self, text: impl Into<String>) -> Self {
		self.empty_search_msg = text.into();
		self
	}

	/// Text of the create button for `text`.
	#[must_use]
	pub fn create_button(&self, text: &str) -> String {
		format!("+ {} \"{text}\"", self.create_label)
	}

	/// Right-hand side of the stats row.
	#[must_use]
	pub fn selection_count(&self, count: usize) -> String {
		format!("{}: {count}", self.selection_count_label)
	}
}
