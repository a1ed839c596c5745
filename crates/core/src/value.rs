use serde::{Deserialize, Serialize};

/// Whether a select holds one key or an ordered set of keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SelectMode {
	/// At most one key; choosing a row closes the list.
	#[default]
	Single,
	/// Any number of keys; rows toggle membership.
	Multi,
}

/// The selection owned by the host application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SelectValue {
	/// Single-select value; `None` when nothing is chosen.
	Single(Option<String>),
	/// Multi-select keys in insertion order.
	Multi(Vec<String>),
}

impl SelectValue {
	/// The empty value for `mode`.
	#[must_use]
	pub fn empty(mode: SelectMode) -> Self {
		match mode {
			SelectMode::Single => Self::Single(None),
			SelectMode::Multi => Self::Multi(Vec::new()),
		}
	}

	/// The mode this value belongs to.
	#[must_use]
	pub fn mode(&self) -> SelectMode {
		match self {
			Self::Single(_) => SelectMode::Single,
			Self::Multi(_) => SelectMode::Multi,
		}
	}

	/// Keys in order.
	#[must_use]
	pub fn keys(&self) -> Vec<&str> {
		match self {
			Self::Single(key) => key.as_deref().into_iter().collect(),
			Self::Multi(keys) => keys.iter().map(String::as_str).collect(),
		}
	}

	/// Whether no key is set.
	#[must_use]
	pub fn is_empty(&self) -> bool {
		match self {
			Self::Single(key) => key.is_none(),
			Self::Multi(keys) => keys.is_empty(),
		}
	}
}

impl Default for SelectValue {
	fn default() -> Self {
		Self::empty(SelectMode::default())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn keys_follow_value_shape() {
		assert!(SelectValue::Single(None).keys().is_empty());
		assert_eq!(SelectValue::Single(Some("a".into())).keys(), vec!["a"]);
		assert_eq!(
			SelectValue::Multi(vec!["b".into(), "a".into()]).keys(),
			vec!["b", "a"]
		);
	}

	#[test]
	fn values_serialize_untagged() {
		let single = serde_json::to_string(&SelectValue::Single(Some("1".into()))).expect("json");
		let multi = serde_json::to_string(&SelectValue::Multi(vec!["1".into()])).expect("json");
		assert_eq!(single, r#""1""#);
		assert_eq!(multi, r#"["1"]"#);
	}
}
