//! Reading the option list from stdin or a file.

use std::fs;
use std::io::{self, IsTerminal, Read};
use std::path::Path;

use anyhow::{Context, Result, bail};
use serde::Deserialize;
use tsel_core::{OptionList, SelectOption};

/// Read and parse options from `path`, or from stdin when `path` is `None`.
pub(crate) fn load(path: Option<&Path>, json: bool) -> Result<OptionList> {
	let text = match path {
		Some(path) => fs::read_to_string(path)
			.with_context(|| format!("failed to read options from {}", path.display()))?,
		None => {
			let mut stdin = io::stdin();
			if stdin.is_terminal() {
				bail!("no options given: pipe them on stdin or pass --input FILE");
			}
			let mut text = String::new();
			stdin
				.read_to_string(&mut text)
				.context("failed to read options from stdin")?;
			text
		}
	};

	let options = if json {
		parse_json(&text)?
	} else {
		parse_lines(&text)?
	};
	log::debug!("loaded {} options", options.len());
	Ok(options)
}

/// Parse `key<TAB>label` lines. Blank lines are skipped and a line without a
/// tab is both key and label.
pub(crate) fn parse_lines(text: &str) -> Result<OptionList> {
	let mut options = OptionList::new();
	for (number, line) in text.lines().enumerate() {
		let line = line.trim_end_matches('\r');
		if line.trim().is_empty() {
			continue;
		}
		let option = match line.split_once('\t') {
			Some((key, label)) => SelectOption::new(key, label),
			None => SelectOption::simple(line),
		};
		options
			.push(option)
			.with_context(|| format!("line {}", number + 1))?;
	}
	Ok(options)
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum JsonOption {
	Pair(String, String),
	Object { key: String, label: String },
}

impl From<JsonOption> for SelectOption {
	fn from(option: JsonOption) -> Self {
		match option {
			JsonOption::Pair(key, label) | JsonOption::Object { key, label } => {
				SelectOption::new(key, label)
			}
		}
	}
}

/// Parse a JSON array of `[key, label]` pairs or `{"key", "label"}` objects.
pub(crate) fn parse_json(text: &str) -> Result<OptionList> {
	let entries: Vec<JsonOption> = serde_json::from_str(text)
		.context("options must be a JSON array of [key, label] pairs or {key, label} objects")?;
	Ok(OptionList::try_new(entries)?)
}

#[cfg(test)]
mod tests {
	use super::*;

	fn keys_and_labels(options: &OptionList) -> Vec<(&str, &str)> {
		options
			.iter()
			.map(|option| (option.key.as_str(), option.label.as_str()))
			.collect()
	}

	#[test]
	fn lines_split_on_the_first_tab() {
		let options = parse_lines("1\tOne\r\n\n  \nplain\n2\tTwo\twith tab\n").unwrap();
		assert_eq!(
			keys_and_labels(&options),
			vec![("1", "One"), ("plain", "plain"), ("2", "Two\twith tab")]
		);
	}

	#[test]
	fn duplicate_keys_name_the_line() {
		let err = parse_lines("a\tA\nb\tB\na\tAgain\n").unwrap_err();
		assert!(format!("{err:#}").contains("line 3"));
	}

	#[test]
	fn json_accepts_pairs_and_objects() {
		let options =
			parse_json(r#"[["1", "One"], {"key": "2", "label": "Two"}]"#).unwrap();
		assert_eq!(keys_and_labels(&options), vec![("1", "One"), ("2", "Two")]);

		assert!(parse_json(r#"{"key": "1"}"#).is_err());
		assert!(parse_json(r#"[["1", "One"], ["1", "Again"]]"#).is_err());
	}

	#[test]
	fn file_input_is_read() {
		let dir = tempfile::tempdir().unwrap();
		let path = dir.path().join("options.txt");
		fs::write(&path, "x\tEx\n").unwrap();
		let options = load(Some(&path), false).unwrap();
		assert_eq!(keys_and_labels(&options), vec![("x", "Ex")]);
		assert!(load(Some(&dir.path().join("missing")), false).is_err());
	}
}
