use combobox::display_label;

use super::ResolvedConfig;

pub(super) fn print_summary(config: &ResolvedConfig) {
	let widget = &config.widget;
	println!("Effective configuration:");
	println!("  Key: {}", widget.key);
	println!("  Placeholder: {}", widget.placeholder);
	if let Some(label) = &widget.label {
		println!("  Label: {label}");
	}
	println!("  Default: {}", display_label(&widget.default));
	match &widget.blank_search_value {
		Some(query) => println!("  Blank search: {query:?}"),
		None => println!("  Blank search: disabled"),
	}
	println!("  Clear on submit: {}", bool_to_word(widget.clear_on_submit));
	println!("  Rerun on update: {}", bool_to_word(widget.rerun_on_update));
	println!("  Halt on update: {}", bool_to_word(widget.halt_on_update));
	println!(
		"  Return only on submit: {}",
		bool_to_word(widget.return_only_on_submit)
	);
	if !widget.passthrough.is_empty() {
		let keys: Vec<_> = widget.passthrough.keys().map(String::as_str).collect();
		println!("  Passthrough keys: {}", keys.join(", "));
	}
	println!("  Max reruns: {}", config.max_reruns);
	match &config.candidates {
		Some(path) => println!("  Candidates: {}", path.display()),
		None => println!("  Candidates: (built-in)"),
	}
}

fn bool_to_word(value: bool) -> &'static str {
	if value { "enabled" } else { "disabled" }
}
