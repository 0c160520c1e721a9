use serde::{Deserialize, Serialize};

use crate::value::{OptionItem, Value};

/// Persisted state for one combobox instance within a session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionEntry {
	/// Last committed selection, or the configured default.
	pub result: Value,
	/// Last query actually handed to the search function. `None` until the
	/// first dispatch after creation or reset.
	pub search: Option<String>,
	/// Options rendered by the visual component.
	pub options: Vec<OptionItem>,
	/// Real values backing `options`, in the same order. `None` until the
	/// first completed search.
	pub options_real_type: Option<Vec<Value>>,
}

impl SessionEntry {
	/// Fresh entry holding only the default result.
	#[must_use]
	pub fn new(default: Value) -> Self {
		Self {
			result: default,
			search: None,
			options: Vec::new(),
			options_real_type: None,
		}
	}

	/// The last dispatched query, empty when nothing was dispatched.
	#[must_use]
	pub fn search(&self) -> &str {
		self.search.as_deref().unwrap_or_default()
	}

	/// Real values backing the current options.
	#[must_use]
	pub fn real_values(&self) -> &[Value] {
		self.options_real_type.as_deref().unwrap_or_default()
	}

	/// Whether the option list and the real value list line up.
	#[must_use]
	pub fn is_consistent(&self) -> bool {
		let values = self.real_values();
		if self.options_real_type.is_none() && self.options.is_empty() {
			return true;
		}
		self.options.len() == values.len()
			&& self
				.options
				.iter()
				.enumerate()
				.all(|(index, option)| option.value == index)
	}
}
