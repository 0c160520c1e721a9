//! Minimal host runtime: runs a script until it completes without asking
//! for another rerun.

use crate::error::ComboboxError;
use crate::store::{MemorySessionStore, SessionStore};
use crate::widget::Outcome;

pub const DEFAULT_MAX_RERUNS: usize = 16;

/// What a single execution of the host script ended with.
#[derive(Debug, Clone, PartialEq)]
pub enum Flow<T> {
	Complete(T),
	Rerun,
	Halt,
}

impl From<Outcome> for Flow<Option<serde_json::Value>> {
	fn from(outcome: Outcome) -> Self {
		match outcome {
			Outcome::Value(value) => Self::Complete(value),
			Outcome::Rerun => Self::Rerun,
			Outcome::Halt => Self::Halt,
		}
	}
}

/// How a pass, including all of its reruns, ended.
#[derive(Debug, Clone, PartialEq)]
pub enum PassEnd<T> {
	Completed(T),
	Halted,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PassReport<T> {
	pub end: PassEnd<T>,
	/// Number of reruns requested before the pass settled.
	pub reruns: usize,
}

impl<T> PassReport<T> {
	#[must_use]
	pub fn completed(self) -> Option<T> {
		match self.end {
			PassEnd::Completed(value) => Some(value),
			PassEnd::Halted => None,
		}
	}
}

/// Owns the session store and re-executes host scripts on request.
#[derive(Debug)]
pub struct ScriptHost<S = MemorySessionStore> {
	store: S,
	max_reruns: usize,
}

impl Default for ScriptHost<MemorySessionStore> {
	fn default() -> Self {
		Self::new(MemorySessionStore::new())
	}
}

impl<S> ScriptHost<S>
where
	S: SessionStore,
{
	pub fn new(store: S) -> Self {
		Self {
			store,
			max_reruns: DEFAULT_MAX_RERUNS,
		}
	}

	#[must_use]
	pub fn with_max_reruns(mut self, max_reruns: usize) -> Self {
		self.max_reruns = max_reruns;
		self
	}

	pub fn store(&self) -> &S {
		&self.store
	}

	pub fn store_mut(&mut self) -> &mut S {
		&mut self.store
	}

	/// Execute `script` from the top until it completes or halts.
	pub fn execute<T, F>(&mut self, mut script: F) -> Result<PassReport<T>, ComboboxError>
	where
		F: FnMut(&mut S) -> Result<Flow<T>, ComboboxError>,
	{
		let mut reruns = 0;
		loop {
			match script(&mut self.store)? {
				Flow::Complete(value) => {
					return Ok(PassReport {
						end: PassEnd::Completed(value),
						reruns,
					});
				}
				Flow::Halt => {
					log::debug!("host script halted after {reruns} reruns");
					return Ok(PassReport {
						end: PassEnd::Halted,
						reruns,
					});
				}
				Flow::Rerun if reruns >= self.max_reruns => {
					return Err(ComboboxError::RerunLimit {
						limit: self.max_reruns,
					});
				}
				Flow::Rerun => {
					reruns += 1;
					log::debug!("rerunning host script (rerun {reruns})");
				}
			}
		}
	}
}

impl ScriptHost<MemorySessionStore> {
	/// End the session, dropping every persisted entry.
	pub fn end_session(&mut self) {
		self.store.clear();
	}
}
