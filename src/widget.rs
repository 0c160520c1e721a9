//! Entry point host scripts call on every pass.

use crate::config::ComboboxConfig;
use crate::dispatch::{ControlSignal, SearchProvider};
use crate::error::{ComboboxError, StoreError};
use crate::event::{Component, ComponentPayload};
use crate::reconcile::{self, Transition};
use crate::store::SessionStore;
use crate::value::Value;

/// Callback invoked after the user reset the combobox.
pub type ResetCallback = Box<dyn FnMut() -> anyhow::Result<()>>;

/// What the host script should do after calling [`Combobox::run`].
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
	/// Continue with the given value, if any.
	Value(Option<Value>),
	/// Restart the host script from the top.
	Rerun,
	/// Stop the current pass; nothing is returned to the caller.
	Halt,
}

impl Outcome {
	fn from_signal(signal: ControlSignal) -> Option<Self> {
		match signal {
			ControlSignal::Continue => None,
			ControlSignal::Rerun => Some(Self::Rerun),
			ControlSignal::Halt => Some(Self::Halt),
		}
	}

	#[must_use]
	pub fn into_value(self) -> Option<Value> {
		match self {
			Self::Value(value) => value,
			Self::Rerun | Self::Halt => None,
		}
	}
}

/// A searchable combobox bound to one session key.
pub struct Combobox<P> {
	config: ComboboxConfig,
	provider: P,
	on_reset: Option<ResetCallback>,
}

impl<P> Combobox<P>
where
	P: SearchProvider,
{
	pub fn new(config: ComboboxConfig, provider: P) -> Result<Self, ComboboxError> {
		config.validate()?;
		Ok(Self {
			config,
			provider,
			on_reset: None,
		})
	}

	#[must_use]
	pub fn with_reset_callback<F>(mut self, callback: F) -> Self
	where
		F: FnMut() -> anyhow::Result<()> + 'static,
	{
		self.on_reset = Some(Box::new(callback));
		self
	}

	#[must_use]
	pub fn config(&self) -> &ComboboxConfig {
		&self.config
	}

	/// Run one pass: make sure the entry exists, render the component and
	/// apply whatever the user did since the last render.
	///
	/// If the entry disappears from the store while the pass is running the
	/// pass is abandoned and yields no value.
	pub fn run<S, C>(&mut self, store: &mut S, component: &mut C) -> Result<Outcome, ComboboxError>
	where
		S: SessionStore + ?Sized,
		C: Component + ?Sized,
	{
		match self.run_pass(store, component) {
			Err(ComboboxError::Store(StoreError::NotFound { key })) if key == self.config.key => {
				log::debug!("session entry for key '{key}' vanished mid-pass, skipping");
				Ok(Outcome::Value(None))
			}
			other => other,
		}
	}

	fn run_pass<S, C>(&mut self, store: &mut S, component: &mut C) -> Result<Outcome, ComboboxError>
	where
		S: SessionStore + ?Sized,
		C: Component + ?Sized,
	{
		let Self {
			config,
			provider,
			on_reset,
		} = self;
		let key = config.key.as_str();

		if !store.contains(key) {
			log::debug!("creating session entry for key '{key}'");
			let Transition { entry, signal, .. } = reconcile::initialize(config, provider)?;
			store.set(key, entry);
			if let Some(outcome) = Outcome::from_signal(signal) {
				return Ok(outcome);
			}
		}

		let payload = ComponentPayload::new(config, &store.get(key)?);
		let interaction = component.render(&config.component_key(), &payload)?;

		let entry = store.get(key)?;
		let transition = reconcile::reconcile(entry, interaction.as_ref(), config, provider)?;
		if transition.replaces_entry {
			store.reinitialize(key, transition.entry);
		} else {
			store.set(key, transition.entry);
		}

		if let Some(outcome) = Outcome::from_signal(transition.signal) {
			log::debug!("combobox '{key}' requested {outcome:?}");
			return Ok(outcome);
		}

		if transition.run_reset_callback
			&& let Some(callback) = on_reset.as_mut()
		{
			callback().map_err(ComboboxError::ResetCallback)?;
		}

		Ok(Outcome::Value(transition.output))
	}
}
