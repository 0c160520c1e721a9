//! Searchable combobox state for pages that re-execute their script on
//! every interaction.
//!
//! A host script calls [`Combobox::run`] on every pass. The widget keeps its
//! query, options and committed result in a [`SessionStore`], asks the host
//! search function for new candidates when the query changes and tells the
//! host whether to continue, rerun or halt.

pub mod app_dirs;
pub mod config;
pub mod dispatch;
pub mod entry;
pub mod error;
pub mod event;
pub mod host;
pub mod logging;
pub mod reconcile;
pub mod store;
pub mod value;
mod widget;

pub use config::ComboboxConfig;
pub use dispatch::{ControlSignal, SearchProvider};
pub use entry::SessionEntry;
pub use error::{ComboboxError, ConfigError, StoreError};
pub use event::{Component, ComponentPayload, Interaction, ScriptedComponent, SubmitValue};
pub use host::{Flow, PassEnd, PassReport, ScriptHost};
pub use store::{MemorySessionStore, SessionStore};
pub use value::{Candidate, OptionItem, Value, display_label};
pub use widget::{Combobox, Outcome, ResetCallback};
