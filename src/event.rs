//! Interaction events and the payloads exchanged with the visual component.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};
use serde_json::Map;

use crate::config::ComboboxConfig;
use crate::entry::SessionEntry;
use crate::error::ComboboxError;
use crate::value::{OptionItem, Value};

/// What the user did since the previous render.
#[derive(Debug, Clone, PartialEq)]
pub enum Interaction {
	/// The input text changed.
	Search(String),
	/// An option was picked.
	Submit(SubmitValue),
	/// The input was cleared.
	Reset,
}

/// Value attached to a submit.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitValue {
	/// Position of the picked option.
	Index(usize),
	/// A value sent without reference to the option list.
	Verbatim(Value),
}

impl Interaction {
	pub fn search(query: impl Into<String>) -> Self {
		Self::Search(query.into())
	}

	pub fn submit(index: usize) -> Self {
		Self::Submit(SubmitValue::Index(index))
	}

	#[must_use]
	pub fn kind(&self) -> &'static str {
		match self {
			Self::Search(_) => "search",
			Self::Submit(_) => "submit",
			Self::Reset => "reset",
		}
	}
}

/// Event as sent by the visual component.
#[derive(Debug, Clone, Deserialize)]
struct RawInteraction {
	interaction: String,
	#[serde(default)]
	value: Value,
}

impl TryFrom<RawInteraction> for Interaction {
	type Error = ComboboxError;

	fn try_from(raw: RawInteraction) -> Result<Self, Self::Error> {
		match raw.interaction.as_str() {
			"search" => match raw.value {
				Value::String(query) => Ok(Self::Search(query)),
				other => Err(ComboboxError::MalformedEvent(format!(
					"search value must be a string, got {other}"
				))),
			},
			"submit" => {
				let value = match raw.value.as_u64().and_then(|n| usize::try_from(n).ok()) {
					Some(index) => SubmitValue::Index(index),
					None => SubmitValue::Verbatim(raw.value),
				};
				Ok(Self::Submit(value))
			}
			"reset" => Ok(Self::Reset),
			other => Err(ComboboxError::MalformedEvent(format!(
				"unknown interaction '{other}'"
			))),
		}
	}
}

/// Decode a component event. `null` means nothing happened.
pub fn decode_event(payload: Value) -> Result<Option<Interaction>, ComboboxError> {
	if payload.is_null() {
		return Ok(None);
	}
	log::trace!("decoding component event {payload}");
	let raw: RawInteraction = serde_json::from_value(payload)
		.map_err(|err| ComboboxError::MalformedEvent(err.to_string()))?;
	Interaction::try_from(raw).map(Some)
}

/// Everything the visual component needs to draw itself.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComponentPayload {
	pub options: Vec<OptionItem>,
	pub clear_on_submit: bool,
	pub placeholder: String,
	pub label: Option<String>,
	#[serde(flatten)]
	pub passthrough: Map<String, Value>,
}

impl ComponentPayload {
	#[must_use]
	pub fn new(config: &ComboboxConfig, entry: &SessionEntry) -> Self {
		Self {
			options: entry.options.clone(),
			clear_on_submit: config.clear_on_submit,
			placeholder: config.placeholder.clone(),
			label: config.label.clone(),
			passthrough: config.passthrough.clone(),
		}
	}
}

/// The rendered control. Each render reports the latest interaction, if any.
pub trait Component {
	/// Draw the control under `key` and return its current interaction.
	fn render(
		&mut self,
		key: &str,
		payload: &ComponentPayload,
	) -> Result<Option<Interaction>, ComboboxError>;
}

/// In-memory component driven by queued interactions.
///
/// Like a real frontend component its value is sticky: the last interaction
/// is reported again on every render until a new one is queued. A reset is
/// reported once, after which the component reports nothing.
#[derive(Debug, Default, Clone)]
pub struct ScriptedComponent {
	pending: VecDeque<Interaction>,
	current: Option<Interaction>,
	last_payload: Option<ComponentPayload>,
	last_key: Option<String>,
	renders: usize,
}

impl ScriptedComponent {
	pub fn new() -> Self {
		Self::default()
	}

	/// Queue an interaction for a later render.
	pub fn push(&mut self, interaction: Interaction) {
		self.pending.push_back(interaction);
	}

	/// Queue an interaction given in the component's wire format.
	pub fn push_json(&mut self, payload: Value) -> Result<(), ComboboxError> {
		if let Some(interaction) = decode_event(payload)? {
			self.push(interaction);
		}
		Ok(())
	}

	#[must_use]
	pub fn last_payload(&self) -> Option<&ComponentPayload> {
		self.last_payload.as_ref()
	}

	#[must_use]
	pub fn last_key(&self) -> Option<&str> {
		self.last_key.as_deref()
	}

	#[must_use]
	pub fn renders(&self) -> usize {
		self.renders
	}
}

impl Component for ScriptedComponent {
	fn render(
		&mut self,
		key: &str,
		payload: &ComponentPayload,
	) -> Result<Option<Interaction>, ComboboxError> {
		self.renders += 1;
		self.last_key = Some(key.to_string());
		self.last_payload = Some(payload.clone());

		if let Some(next) = self.pending.pop_front() {
			self.current = Some(next);
		}

		match self.current.take() {
			Some(Interaction::Reset) => Ok(Some(Interaction::Reset)),
			Some(interaction) => {
				self.current = Some(interaction.clone());
				Ok(Some(interaction))
			}
			None => Ok(None),
		}
	}
}
