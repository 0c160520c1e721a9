use anyhow::Result;
use combobox::{OptionItem, Value, display_label};
use serde_json::json;

/// What the demo reports after each host pass.
#[derive(Debug, Clone)]
pub(crate) struct PassSummary {
	pub(crate) command: &'static str,
	pub(crate) reruns: usize,
	pub(crate) halted: bool,
	pub(crate) value: Option<Value>,
	pub(crate) search: String,
	pub(crate) options: Vec<OptionItem>,
}

/// Print a plain-text representation of the pass.
pub(crate) fn print_plain(summary: &PassSummary) {
	print!("{}", format_plain(summary));
}

pub(crate) fn format_plain(summary: &PassSummary) -> String {
	let mut out = String::new();
	if summary.halted {
		out.push_str("halted\n");
	} else {
		match &summary.value {
			Some(value) => out.push_str(&format!("value: {}\n", display_label(value))),
			None => out.push_str("value: (none)\n"),
		}
	}
	if summary.reruns > 0 {
		out.push_str(&format!("reruns: {}\n", summary.reruns));
	}
	if !summary.search.is_empty() {
		out.push_str(&format!("query: {}\n", summary.search));
	}
	for option in &summary.options {
		out.push_str(&format!("  [{}] {}\n", option.value, option.label));
	}
	out
}

/// Format the pass as a JSON string.
pub(crate) fn format_summary_json(summary: &PassSummary) -> Result<String> {
	let payload = json!({
		"command": summary.command,
		"reruns": summary.reruns,
		"halted": summary.halted,
		"value": summary.value,
		"search": summary.search,
		"options": summary.options,
	});

	Ok(serde_json::to_string(&payload)?)
}

/// Print the JSON representation of the pass.
pub(crate) fn print_json(summary: &PassSummary) -> Result<()> {
	println!("{}", format_summary_json(summary)?);
	Ok(())
}
