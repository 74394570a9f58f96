//! Per-instance override storage
//!
//! A store is a sparse name-to-text map owned by exactly one component
//! instance. It performs no validation: invalid text can legally sit in a
//! store and is re-checked every time the property is resolved.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Sparse property overrides for one component instance
///
/// An absent name means "use the schema default". A stored value equal to
/// the default is harmless; the serializer elides it on write.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OverrideStore {
    entries: HashMap<String, String>,
}

impl OverrideStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the override text for a name, if any
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries.get(name).map(String::as_str)
    }

    /// Store override text verbatim
    pub fn set(&mut self, name: impl Into<String>, text: impl Into<String>) {
        self.entries.insert(name.into(), text.into());
    }

    /// Remove an override, returning the previous text if there was one
    pub fn unset(&mut self, name: &str) -> Option<String> {
        self.entries.remove(name)
    }

    /// Whether an override is stored for the name
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Names with stored overrides, in no particular order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
