//! Session-scoped storage for combobox entries.
//!
//! Entries survive reruns of the host script but live no longer than the
//! session that owns the store.

use std::collections::HashMap;

use crate::entry::SessionEntry;
use crate::error::StoreError;

/// Key-value store holding one [`SessionEntry`] per widget key.
pub trait SessionStore {
	/// Fetch a copy of the entry stored under `key`.
	fn get(&self, key: &str) -> Result<SessionEntry, StoreError>;

	fn contains(&self, key: &str) -> bool;

	fn set(&mut self, key: &str, entry: SessionEntry);

	fn remove(&mut self, key: &str) -> Option<SessionEntry>;

	/// Drop whatever is stored under `key` and start over with `entry`.
	fn reinitialize(&mut self, key: &str, entry: SessionEntry) {
		self.remove(key);
		self.set(key, entry);
	}
}

/// In-memory store for a single session.
#[derive(Debug, Default, Clone)]
pub struct MemorySessionStore {
	entries: HashMap<String, SessionEntry>,
}

impl MemorySessionStore {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn len(&self) -> usize {
		self.entries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	/// Forget every entry, as happens when the session ends.
	pub fn clear(&mut self) {
		self.entries.clear();
	}
}

impl SessionStore for MemorySessionStore {
	fn get(&self, key: &str) -> Result<SessionEntry, StoreError> {
		self.entries
			.get(key)
			.cloned()
			.ok_or_else(|| StoreError::not_found(key))
	}

	fn contains(&self, key: &str) -> bool {
		self.entries.contains_key(key)
	}

	fn set(&mut self, key: &str, entry: SessionEntry) {
		self.entries.insert(key.to_string(), entry);
	}

	fn remove(&mut self, key: &str) -> Option<SessionEntry> {
		self.entries.remove(key)
	}
}
