use anyhow::Result;
use serde_json::json;

use crate::app::PickOutcome;

/// Print the chosen keys, one per line.
pub(crate) fn print_plain(outcome: &PickOutcome) {
	print!("{}", format_plain(outcome));
}

fn format_plain(outcome: &PickOutcome) -> String {
	if !outcome.accepted {
		return "Selection cancelled\n".to_string();
	}
	outcome
		.value
		.keys()
		.into_iter()
		.map(|key| format!("{key}\n"))
		.collect()
}

/// Format the outcome as a JSON string.
pub(crate) fn format_outcome_json(outcome: &PickOutcome) -> Result<String> {
	let payload = json!({
		"accepted": outcome.accepted,
		"value": outcome.value,
		"created": outcome.created,
		"query": outcome.query,
	});

	Ok(serde_json::to_string_pretty(&payload)?)
}

/// Print the JSON representation of the outcome.
pub(crate) fn print_json(outcome: &PickOutcome) -> Result<()> {
	println!("{}", format_outcome_json(outcome)?);
	Ok(())
}

#[cfg(test)]
mod tests {
	use serde_json::Value;
	use tsel_core::SelectValue;

	use super::*;

	fn outcome(accepted: bool, value: SelectValue) -> PickOutcome {
		PickOutcome {
			accepted,
			value,
			created: vec!["Kiwi".into()],
			query: "ki".into(),
		}
	}

	#[test]
	fn json_carries_value_in_its_mode_shape() {
		let json = format_outcome_json(&outcome(
			true,
			SelectValue::Multi(vec!["a".into(), "Kiwi".into()]),
		))
		.expect("json");
		let value: Value = serde_json::from_str(&json).expect("parse");
		assert_eq!(value["accepted"], true);
		assert_eq!(value["value"], serde_json::json!(["a", "Kiwi"]));
		assert_eq!(value["created"], serde_json::json!(["Kiwi"]));
		assert_eq!(value["query"], "ki");

		let json = format_outcome_json(&outcome(false, SelectValue::Single(None))).expect("json");
		let value: Value = serde_json::from_str(&json).expect("parse");
		assert_eq!(value["value"], Value::Null);
	}

	#[test]
	fn plain_lists_keys_or_reports_cancel() {
		let accepted = outcome(true, SelectValue::Multi(vec!["a".into(), "b".into()]));
		assert_eq!(format_plain(&accepted), "a\nb\n");

		let single = outcome(true, SelectValue::Single(Some("a".into())));
		assert_eq!(format_plain(&single), "a\n");

		let cancelled = outcome(false, SelectValue::Single(Some("a".into())));
		assert_eq!(format_plain(&cancelled), "Selection cancelled\n");
	}
}
