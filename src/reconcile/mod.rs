//! Pure state transitions for a combobox entry.
//!
//! The reconciler never touches the session store or the host runtime. It
//! receives the persisted entry and the latest interaction and describes the
//! next entry, the value for host code and how the pass should continue.
//! [`Combobox`](crate::Combobox) carries the description out.

use crate::config::ComboboxConfig;
use crate::dispatch::{ControlSignal, DispatchFlags, Dispatched, SearchProvider, dispatch};
use crate::entry::SessionEntry;
use crate::error::ComboboxError;
use crate::event::{Interaction, SubmitValue};
use crate::value::Value;


/// Result of applying one interaction to an entry.
#[derive(Debug, Clone, PartialEq)]
pub struct Transition {
	/// Entry to persist.
	pub entry: SessionEntry,
	/// Value handed back to host code when the pass continues.
	pub output: Option<Value>,
	pub signal: ControlSignal,
	/// The entry starts over and replaces the persisted one wholesale.
	pub replaces_entry: bool,
	/// The host reset callback is due once the entry is persisted.
	pub run_reset_callback: bool,
}

impl Transition {
	fn new(entry: SessionEntry, output: Option<Value>, signal: ControlSignal) -> Self {
		let output = match signal {
			ControlSignal::Continue => output,
			ControlSignal::Rerun | ControlSignal::Halt => None,
		};
		Self {
			entry,
			output,
			signal,
			replaces_entry: false,
			run_reset_callback: false,
		}
	}
}

fn flags<'a>(config: &ComboboxConfig, blank_query: Option<&'a str>) -> DispatchFlags<'a> {
	DispatchFlags {
		rerun_on_update: config.rerun_on_update,
		halt_on_update: config.halt_on_update,
		blank_query,
	}
}

/// Build a fresh entry holding the default result, running the blank search
/// when one is configured.
pub fn initialize<P>(config: &ComboboxConfig, provider: &mut P) -> Result<Transition, ComboboxError>
where
	P: SearchProvider + ?Sized,
{
	let mut entry = SessionEntry::new(config.default.clone());
	let signal = blank_search(&mut entry, config, provider)?;
	Ok(Transition::new(entry, None, signal))
}

fn blank_search<P>(
	entry: &mut SessionEntry,
	config: &ComboboxConfig,
	provider: &mut P,
) -> Result<ControlSignal, ComboboxError>
where
	P: SearchProvider + ?Sized,
{
	let Some(blank) = config.blank_search_value.as_deref() else {
		return Ok(ControlSignal::Continue);
	};

	match dispatch(entry, provider, blank, flags(config, Some(blank)))? {
		Dispatched::Unchanged(_) => Ok(ControlSignal::Continue),
		Dispatched::Updated(signal) => Ok(signal),
	}
}

/// Apply `interaction` to `entry`.
pub fn reconcile<P>(
	mut entry: SessionEntry,
	interaction: Option<&Interaction>,
	config: &ComboboxConfig,
	provider: &mut P,
) -> Result<Transition, ComboboxError>
where
	P: SearchProvider + ?Sized,
{
	let Some(interaction) = interaction else {
		let output = Some(entry.result.clone());
		return Ok(Transition::new(entry, output, ControlSignal::Continue));
	};

	match interaction {
		Interaction::Search(query) => {
			let signal = match dispatch(&mut entry, provider, query, flags(config, None))? {
				Dispatched::Unchanged(_) => ControlSignal::Continue,
				Dispatched::Updated(signal) => signal,
			};
			if signal != ControlSignal::Continue {
				log::debug!("search '{query}' ended the pass with {signal:?}");
			}
			let output = passive_output(config, &entry);
			Ok(Transition::new(entry, output, signal))
		}
		Interaction::Submit(value) => {
			let resolved = resolve_submit(&entry, value)?;
			entry.result = resolved.clone();
			Ok(Transition::new(entry, Some(resolved), ControlSignal::Continue))
		}
		Interaction::Reset => {
			let mut entry = SessionEntry::new(config.default.clone());
			let signal = blank_search(&mut entry, config, provider)?;
			let mut transition = Transition::new(entry, Some(config.default.clone()), signal);
			transition.replaces_entry = true;
			transition.run_reset_callback = signal == ControlSignal::Continue;
			Ok(transition)
		}
	}
}

/// Value returned after a search. Return-only-on-submit hides it.
fn passive_output(config: &ComboboxConfig, entry: &SessionEntry) -> Option<Value> {
	if config.return_only_on_submit {
		None
	} else {
		Some(entry.result.clone())
	}
}

/// Map a submitted value onto the real value it stands for.
fn resolve_submit(entry: &SessionEntry, value: &SubmitValue) -> Result<Value, ComboboxError> {
	let values = entry.real_values();
	match value {
		SubmitValue::Index(index) if !values.is_empty() => {
			values
				.get(*index)
				.cloned()
				.ok_or(ComboboxError::OptionOutOfRange {
					index: *index,
					len: values.len(),
				})
		}
		SubmitValue::Index(index) => Ok(Value::from(*index)),
		SubmitValue::Verbatim(value) => Ok(value.clone()),
	}
}
