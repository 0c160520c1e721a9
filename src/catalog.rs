//! Candidate catalog backing the demo's search function.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use combobox::{Candidate, Value};
use frizbee::{Config, match_list};

/// Datasets at least this large enable frizbee's prefilter.
const PREFILTER_ENABLE_THRESHOLD: usize = 1_000;

/// Upper bound on the candidates handed back per query.
const MAX_RESULTS: usize = 50;

const BUILTIN: &[&str] = &[
	"apple",
	"apricot",
	"avocado",
	"banana",
	"blackberry",
	"blueberry",
	"cherry",
	"coconut",
	"cranberry",
	"grape",
	"grapefruit",
	"kiwi",
	"lemon",
	"lime",
	"mango",
	"orange",
	"papaya",
	"peach",
	"pear",
	"pineapple",
	"plum",
	"raspberry",
	"strawberry",
	"watermelon",
];

#[derive(Debug, Clone, PartialEq)]
struct CatalogEntry {
	label: String,
	value: Option<Value>,
}

impl CatalogEntry {
	fn candidate(&self) -> Candidate {
		match &self.value {
			Some(value) => Candidate::labeled(self.label.clone(), value.clone()),
			None => Candidate::from(self.label.as_str()),
		}
	}
}

/// Searchable list of candidates.
#[derive(Debug, Clone, Default)]
pub(crate) struct Catalog {
	entries: Vec<CatalogEntry>,
}

impl Catalog {
	pub(crate) fn builtin() -> Self {
		Self::parse(&BUILTIN.join("\n"))
	}

	pub(crate) fn from_file(path: &Path) -> Result<Self> {
		let contents = fs::read_to_string(path)
			.with_context(|| format!("failed to read candidates from {}", path.display()))?;
		Ok(Self::parse(&contents))
	}

	/// One candidate per line. `label<TAB>value` attaches a value, parsed as
	/// JSON when possible.
	pub(crate) fn parse(contents: &str) -> Self {
		let entries = contents
			.lines()
			.map(str::trim_end)
			.filter(|line| !line.trim().is_empty())
			.map(|line| match line.split_once('\t') {
				Some((label, raw)) => CatalogEntry {
					label: label.trim().to_string(),
					value: Some(
						serde_json::from_str(raw.trim())
							.unwrap_or_else(|_| Value::String(raw.trim().to_string())),
					),
				},
				None => CatalogEntry {
					label: line.trim().to_string(),
					value: None,
				},
			})
			.collect();
		Self { entries }
	}

	pub(crate) fn len(&self) -> usize {
		self.entries.len()
	}

	/// Candidates matching `query`, best match first. An empty query lists
	/// the catalog in file order.
	pub(crate) fn search(&self, query: &str) -> Vec<Candidate> {
		let trimmed = query.trim();
		if trimmed.is_empty() {
			return self
				.entries
				.iter()
				.take(MAX_RESULTS)
				.map(CatalogEntry::candidate)
				.collect();
		}

		let haystacks: Vec<&str> = self.entries.iter().map(|entry| entry.label.as_str()).collect();
		let config = config_for_query(trimmed, haystacks.len());
		let mut matches: Vec<(usize, u16)> = match_list(trimmed, &haystacks, &config)
			.into_iter()
			.filter(|entry| entry.score > 0)
			.map(|entry| (entry.index as usize, entry.score))
			.collect();
		matches.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));

		matches
			.into_iter()
			.take(MAX_RESULTS)
			.map(|(index, _)| self.entries[index].candidate())
			.collect()
	}
}

/// Builds fuzzy matching options for the provided query and dataset size.
fn config_for_query(query: &str, dataset_len: usize) -> Config {
	let mut config = Config {
		prefilter: false,
		..Config::default()
	};

	let length = query.chars().count();
	let mut allowed_typos: u16 = match length {
		0 | 1 => 0,
		2..=4 => 1,
		5..=7 => 2,
		8..=12 => 3,
		_ => 4,
	};
	if let Ok(max_reasonable) = u16::try_from(length.saturating_sub(1)) {
		allowed_typos = allowed_typos.min(max_reasonable);
	}

	if dataset_len >= PREFILTER_ENABLE_THRESHOLD {
		config.prefilter = true;
		config.max_typos = Some(allowed_typos);
	} else {
		config.max_typos = None;
	}

	config.sort = false;

	config
}
