use crate::entry::SessionEntry;
use crate::error::ComboboxError;
use crate::value::{Candidate, Value, split_candidates};

/// Host-supplied search function producing candidates for a query.
///
/// Returning `Ok(None)` is treated the same as an empty result list.
pub trait SearchProvider {
	fn search(&mut self, query: &str) -> anyhow::Result<Option<Vec<Candidate>>>;
}

impl<F, C> SearchProvider for F
where
	F: FnMut(&str) -> anyhow::Result<Vec<C>>,
	C: Into<Candidate>,
{
	fn search(&mut self, query: &str) -> anyhow::Result<Option<Vec<Candidate>>> {
		let results = self(query)?;
		Ok(Some(results.into_iter().map(Into::into).collect()))
	}
}

/// How the current pass should proceed after the reconciler ran.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ControlSignal {
	/// Fall through and hand a value back to host code.
	#[default]
	Continue,
	/// Restart the host script from the top, keeping session state.
	Rerun,
	/// Stop the current pass without returning a value.
	Halt,
}

/// Behaviour requested for a single dispatch.
#[derive(Debug, Clone, Copy, Default)]
pub struct DispatchFlags<'a> {
	pub rerun_on_update: bool,
	pub halt_on_update: bool,
	/// Set when dispatching the configured blank search.
	pub blank_query: Option<&'a str>,
}

/// Outcome of a dispatch.
#[derive(Debug, Clone, PartialEq)]
pub enum Dispatched {
	/// The query matched the last dispatched one; carries the current result.
	Unchanged(Value),
	/// The search function ran and the options were replaced.
	Updated(ControlSignal),
}

/// Run `query` through the search function unless it was the last query
/// dispatched for this entry.
///
/// The entry is only touched once the search function succeeded, so a failed
/// query is retried the next time it is dispatched.
pub fn dispatch<P>(
	entry: &mut SessionEntry,
	provider: &mut P,
	query: &str,
	flags: DispatchFlags<'_>,
) -> Result<Dispatched, ComboboxError>
where
	P: SearchProvider + ?Sized,
{
	if entry.search.as_deref() == Some(query) {
		log::debug!("query '{query}' unchanged, skipping search");
		return Ok(Dispatched::Unchanged(entry.result.clone()));
	}

	let candidates = provider
		.search(query)
		.map_err(|source| ComboboxError::Search {
			query: query.to_string(),
			source,
		})?
		.unwrap_or_default();

	let previous_len = entry.options.len();
	let (options, values) = split_candidates(candidates);
	log::debug!(
		"query '{query}' produced {} options (previously {previous_len})",
		options.len()
	);
	entry.search = Some(query.to_string());
	entry.options = options;
	entry.options_real_type = Some(values);

	// A blank search that keeps yielding nothing must not rerun forever.
	let blank_repeat = flags.blank_query == Some(query) && previous_len == 0;

	let signal = if flags.rerun_on_update && !blank_repeat {
		ControlSignal::Rerun
	} else if flags.halt_on_update {
		ControlSignal::Halt
	} else {
		ControlSignal::Continue
	};

	Ok(Dispatched::Updated(signal))
}
