use serde::Deserialize;
use serde_json::Map;

use crate::error::ConfigError;
use crate::value::Value;

/// Suffix appended to the widget key to address the visual component's own
/// state.
pub const COMPONENT_KEY_SUFFIX: &str = "_react";

pub const DEFAULT_KEY: &str = "combobox";
pub const DEFAULT_PLACEHOLDER: &str = "Search ...";

/// Configuration bag accepted by the combobox entry point.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ComboboxConfig {
	/// Hint shown inside the empty input.
	pub placeholder: String,
	/// Label shown above the input.
	pub label: Option<String>,
	/// Result returned until something is submitted, and after a reset.
	pub default: Value,
	/// Forwarded to the visual component.
	pub clear_on_submit: bool,
	/// Session key. Must stay stable across reruns for one logical widget.
	pub key: String,
	/// Request a full rerun after every completed search.
	pub rerun_on_update: bool,
	/// Halt the current pass after every completed search.
	pub halt_on_update: bool,
	/// Query dispatched on creation and after each reset.
	pub blank_search_value: Option<String>,
	/// Yield no value unless the pass handled a submit.
	pub return_only_on_submit: bool,
	/// Free-form keys forwarded verbatim to the visual component.
	pub passthrough: Map<String, Value>,
}

impl Default for ComboboxConfig {
	fn default() -> Self {
		Self {
			placeholder: DEFAULT_PLACEHOLDER.to_string(),
			label: None,
			default: Value::Null,
			clear_on_submit: false,
			key: DEFAULT_KEY.to_string(),
			rerun_on_update: false,
			halt_on_update: false,
			blank_search_value: None,
			return_only_on_submit: false,
			passthrough: Map::new(),
		}
	}
}

impl ComboboxConfig {
	pub fn new(key: impl Into<String>) -> Self {
		Self {
			key: key.into(),
			..Self::default()
		}
	}

	#[must_use]
	pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
		self.placeholder = placeholder.into();
		self
	}

	#[must_use]
	pub fn with_label(mut self, label: impl Into<String>) -> Self {
		self.label = Some(label.into());
		self
	}

	#[must_use]
	pub fn with_default(mut self, default: impl Into<Value>) -> Self {
		self.default = default.into();
		self
	}

	#[must_use]
	pub fn with_clear_on_submit(mut self, enabled: bool) -> Self {
		self.clear_on_submit = enabled;
		self
	}

	#[must_use]
	pub fn with_rerun_on_update(mut self, enabled: bool) -> Self {
		self.rerun_on_update = enabled;
		self
	}

	#[must_use]
	pub fn with_halt_on_update(mut self, enabled: bool) -> Self {
		self.halt_on_update = enabled;
		self
	}

	#[must_use]
	pub fn with_blank_search(mut self, query: impl Into<String>) -> Self {
		self.blank_search_value = Some(query.into());
		self
	}

	#[must_use]
	pub fn with_return_only_on_submit(mut self, enabled: bool) -> Self {
		self.return_only_on_submit = enabled;
		self
	}

	/// Forward an extra key to the visual component.
	#[must_use]
	pub fn with_passthrough(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
		self.passthrough.insert(name.into(), value.into());
		self
	}

	/// Key under which the visual component keeps its own state.
	#[must_use]
	pub fn component_key(&self) -> String {
		format!("{}{COMPONENT_KEY_SUFFIX}", self.key)
	}

	pub fn validate(&self) -> Result<(), ConfigError> {
		if self.key.trim().is_empty() {
			return Err(ConfigError::invalid(
				"key",
				self.key.clone(),
				"must not be empty",
			));
		}

		if self.key.ends_with(COMPONENT_KEY_SUFFIX) {
			return Err(ConfigError::invalid(
				"key",
				self.key.clone(),
				"must not end with the component key suffix '_react'",
			));
		}

		Ok(())
	}
}
