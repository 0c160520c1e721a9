//! Layered configuration for the demo binary: config files, `COMBOBOX__*`
//! environment variables, then command-line flags.

mod sources;
mod summary;


use std::path::PathBuf;

use anyhow::{Result, anyhow, ensure};
use combobox::host::DEFAULT_MAX_RERUNS;
use combobox::{ComboboxConfig, Value};
use serde::Deserialize;
use serde_json::Map;

use crate::cli::CliArgs;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct RawConfig {
	widget: WidgetSection,
	host: HostSection,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct WidgetSection {
	key: Option<String>,
	placeholder: Option<String>,
	label: Option<String>,
	default: Option<Value>,
	clear_on_submit: Option<bool>,
	rerun_on_update: Option<bool>,
	halt_on_update: Option<bool>,
	blank_search_value: Option<String>,
	return_only_on_submit: Option<bool>,
	passthrough: Option<Map<String, Value>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct HostSection {
	max_reruns: Option<usize>,
	candidates: Option<PathBuf>,
}

/// Configuration the demo session runs with.
#[derive(Debug, Clone)]
pub(crate) struct ResolvedConfig {
	pub(crate) widget: ComboboxConfig,
	pub(crate) max_reruns: usize,
	pub(crate) candidates: Option<PathBuf>,
}

impl ResolvedConfig {
	/// Print a human readable summary of the effective configuration.
	pub(crate) fn print_summary(&self) {
		summary::print_summary(self);
	}
}

pub(crate) fn load(cli: &CliArgs) -> Result<ResolvedConfig> {
	let builder = sources::build_config(cli)?;
	let mut raw: RawConfig = builder
		.try_deserialize()
		.map_err(|err| anyhow!("failed to deserialize configuration: {err}"))?;
	raw.apply_cli_overrides(cli);
	raw.resolve()
}

/// Interpret a command-line value as JSON, falling back to a plain string.
fn parse_loose_value(raw: &str) -> Value {
	serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()))
}

impl RawConfig {
	fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		let widget = &mut self.widget;
		if let Some(key) = cli.key.clone() {
			widget.key = Some(key);
		}
		if let Some(placeholder) = cli.placeholder.clone() {
			widget.placeholder = Some(placeholder);
		}
		if let Some(label) = cli.label.clone() {
			widget.label = Some(label);
		}
		if let Some(default) = cli.default.as_deref() {
			widget.default = Some(parse_loose_value(default));
		}
		if let Some(value) = cli.clear_on_submit {
			widget.clear_on_submit = Some(value);
		}
		if let Some(value) = cli.rerun_on_update {
			widget.rerun_on_update = Some(value);
		}
		if let Some(value) = cli.halt_on_update {
			widget.halt_on_update = Some(value);
		}
		if let Some(query) = cli.blank_search.clone() {
			widget.blank_search_value = Some(query);
		}
		if let Some(value) = cli.return_only_on_submit {
			widget.return_only_on_submit = Some(value);
		}

		if let Some(value) = cli.max_reruns {
			self.host.max_reruns = Some(value);
		}
		if let Some(path) = cli.candidates.clone() {
			self.host.candidates = Some(path);
		}
	}

	fn resolve(self) -> Result<ResolvedConfig> {
		let section = self.widget;
		let mut widget = ComboboxConfig::default();
		if let Some(key) = section.key {
			widget.key = key;
		}
		if let Some(placeholder) = section.placeholder {
			widget.placeholder = placeholder;
		}
		widget.label = section.label;
		if let Some(default) = section.default {
			widget.default = default;
		}
		widget.clear_on_submit = section.clear_on_submit.unwrap_or(false);
		widget.rerun_on_update = section.rerun_on_update.unwrap_or(false);
		widget.halt_on_update = section.halt_on_update.unwrap_or(false);
		widget.blank_search_value = section.blank_search_value;
		widget.return_only_on_submit = section.return_only_on_submit.unwrap_or(false);
		if let Some(passthrough) = section.passthrough {
			widget.passthrough = passthrough;
		}
		widget.validate()?;

		let max_reruns = self.host.max_reruns.unwrap_or(DEFAULT_MAX_RERUNS);
		ensure!(max_reruns > 0, "host.max_reruns must be greater than zero");

		Ok(ResolvedConfig {
			widget,
			max_reruns,
			candidates: self.host.candidates,
		})
	}
}
