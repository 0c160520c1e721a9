use thiserror::Error;

/// Failures reported by a [`SessionStore`](crate::SessionStore).
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
	/// No entry is stored under the key.
	#[error("no session entry for key '{key}'")]
	NotFound { key: String },
}

impl StoreError {
	pub fn not_found(key: impl Into<String>) -> Self {
		Self::NotFound { key: key.into() }
	}

	/// The key a lookup failed for.
	#[must_use]
	pub fn key(&self) -> &str {
		match self {
			Self::NotFound { key } => key,
		}
	}
}

/// Invalid widget configuration.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("invalid value for {field}: {reason} (value: {value:?})")]
pub struct ConfigError {
	pub field: &'static str,
	pub value: String,
	pub reason: &'static str,
}

impl ConfigError {
	pub(crate) fn invalid(field: &'static str, value: impl Into<String>, reason: &'static str) -> Self {
		Self {
			field,
			value: value.into(),
			reason,
		}
	}
}

/// Errors surfaced to host code by the combobox entry point.
#[derive(Debug, Error)]
pub enum ComboboxError {
	#[error(transparent)]
	Store(#[from] StoreError),

	#[error(transparent)]
	Config(#[from] ConfigError),

	/// The host search function failed.
	#[error("search function failed for query '{query}'")]
	Search {
		query: String,
		#[source]
		source: anyhow::Error,
	},

	/// The host reset callback failed after the entry had been reset.
	#[error("reset callback failed")]
	ResetCallback(#[source] anyhow::Error),

	/// A submitted index does not address any current option.
	#[error("submitted option {index} is out of range ({len} options)")]
	OptionOutOfRange { index: usize, len: usize },

	/// The visual component produced a payload that is not a valid interaction.
	#[error("malformed component event: {0}")]
	MalformedEvent(String),

	/// The host script kept requesting reruns.
	#[error("host script requested more than {limit} consecutive reruns")]
	RerunLimit { limit: usize },
}
