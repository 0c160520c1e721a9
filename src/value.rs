//! Candidate values produced by search functions and the display options
//! derived from them.

use serde::{Deserialize, Serialize};

/// Arbitrary host value carried by a combobox.
pub type Value = serde_json::Value;

/// A single search result as returned by a host search function.
///
/// Search functions may return bare values, in which case the value doubles
/// as its own label, or explicit `(label, value)` pairs.
#[derive(Debug, Clone, PartialEq)]
pub enum Candidate {
	Plain(Value),
	Labeled { label: String, value: Value },
}

impl Candidate {
	/// Create a labeled candidate.
	pub fn labeled(label: impl Into<String>, value: impl Into<Value>) -> Self {
		Self::Labeled {
			label: label.into(),
			value: value.into(),
		}
	}

	/// Text shown to the user for this candidate.
	#[must_use]
	pub fn label(&self) -> String {
		match self {
			Self::Plain(value) => display_label(value),
			Self::Labeled { label, .. } => label.clone(),
		}
	}

	/// Real value handed back to host code once the candidate is submitted.
	#[must_use]
	pub fn into_value(self) -> Value {
		match self {
			Self::Plain(value) | Self::Labeled { value, .. } => value,
		}
	}
}

/// Stringify a value for display. Strings are used verbatim, everything else
/// uses its compact JSON rendering.
#[must_use]
pub fn display_label(value: &Value) -> String {
	match value {
		Value::String(text) => text.clone(),
		other => other.to_string(),
	}
}

impl From<Value> for Candidate {
	fn from(value: Value) -> Self {
		Self::Plain(value)
	}
}

impl From<&str> for Candidate {
	fn from(value: &str) -> Self {
		Self::Plain(Value::from(value))
	}
}

impl From<String> for Candidate {
	fn from(value: String) -> Self {
		Self::Plain(Value::from(value))
	}
}

impl<L, V> From<(L, V)> for Candidate
where
	L: Into<Value>,
	V: Into<Value>,
{
	fn from((label, value): (L, V)) -> Self {
		Self::Labeled {
			label: display_label(&label.into()),
			value: value.into(),
		}
	}
}

/// Display-facing option exchanged with the visual component. `value` is
/// the position of the real value in the entry's value list, never the real
/// value itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionItem {
	pub label: String,
	pub value: usize,
}

/// Split candidates into the paired display options and real values.
pub(crate) fn split_candidates(candidates: Vec<Candidate>) -> (Vec<OptionItem>, Vec<Value>) {
	let mut options = Vec::with_capacity(candidates.len());
	let mut values = Vec::with_capacity(candidates.len());
	for (index, candidate) in candidates.into_iter().enumerate() {
		options.push(OptionItem {
			label: candidate.label(),
			value: index,
		});
		values.push(candidate.into_value());
	}
	(options, values)
}

#[cfg(test)]
mod tests {
	use serde_json::json;

	use super::*;

	#[test]
	fn plain_strings_label_without_quotes() {
		let candidate = Candidate::from("apple");
		assert_eq!(candidate.label(), "apple");
		assert_eq!(candidate.into_value(), json!("apple"));
	}

	#[test]
	fn plain_numbers_use_json_rendering() {
		let candidate = Candidate::from(json!(42));
		assert_eq!(candidate.label(), "42");
	}

	#[test]
	fn pairs_keep_label_and_discard_it_on_submit() {
		let candidate = Candidate::from(("New York", 1));
		assert_eq!(candidate.label(), "New York");
		assert_eq!(candidate.into_value(), json!(1));
	}

	#[test]
	fn non_string_pair_labels_are_stringified() {
		let candidate = Candidate::from((7, "seven"));
		assert_eq!(candidate.label(), "7");
	}

	#[test]
	fn split_assigns_dense_indices() {
		let (options, values) = split_candidates(vec![
			Candidate::from("a"),
			Candidate::labeled("Bee", json!({"id": 2})),
		]);
		assert_eq!(
			options,
			vec![
				OptionItem {
					label: "a".into(),
					value: 0
				},
				OptionItem {
					label: "Bee".into(),
					value: 1
				},
			]
		);
		assert_eq!(values, vec![json!("a"), json!({"id": 2})]);
	}
}
