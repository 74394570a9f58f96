//! Schema cache and script reload reconciliation
//!
//! Schemas are derived from script source, not persisted, so the editor
//! keeps a cache keyed by script path. When a script is edited and handed
//! back in, [`SchemaRegistry::reload`] swaps in the freshly parsed schema
//! and reports how the declarations changed.
//!
//! Reconciliation never mutates an override store. An override whose name
//! vanished from the schema stays in its store and fails hard the moment it
//! is resolved; [`reconcile`] lists such names for the editor to act on.

use crate::store::OverrideStore;
use kiln_script::PropertySchema;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;

/// How a script's declarations changed across a reload
#[derive(Debug, Clone, Default)]
pub struct ReloadReport {
    /// Script path the reload applied to
    pub script: String,
    /// Names declared now but not before
    pub added: Vec<String>,
    /// Names declared before but not now; overrides of these are orphaned
    pub removed: Vec<String>,
    /// Names whose declared kind changed
    pub retyped: Vec<String>,
}

impl ReloadReport {
    /// Whether every previously declared property survived with its kind
    pub fn is_compatible(&self) -> bool {
        self.removed.is_empty() && self.retyped.is_empty()
    }
}

/// Cache of parsed schemas, keyed by script path
///
/// The cache itself may be shared read-mostly across the editor; override
/// stores stay exclusively owned by their component instances.
#[derive(Default)]
pub struct SchemaRegistry {
    schemas: RwLock<HashMap<String, Arc<PropertySchema>>>,
}

impl SchemaRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse script source and cache its schema
    pub fn insert(&self, path: impl Into<String>, source: &str) -> Arc<PropertySchema> {
        let path = path.into();
        let schema = Arc::new(PropertySchema::parse(path.clone(), source));
        log::debug!(
            "cached schema for '{}' ({} declarations)",
            path,
            schema.len()
        );
        self.schemas.write().insert(path, schema.clone());
        schema
    }

    /// Get the cached schema for a script path
    pub fn get(&self, path: &str) -> Option<Arc<PropertySchema>> {
        self.schemas.read().get(path).cloned()
    }

    /// Whether a schema is cached for the path
    pub fn contains(&self, path: &str) -> bool {
        self.schemas.read().contains_key(path)
    }

    /// Drop a cached schema
    pub fn remove(&self, path: &str) -> Option<Arc<PropertySchema>> {
        self.schemas.write().remove(path)
    }

    pub fn len(&self) -> usize {
        self.schemas.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.schemas.read().is_empty()
    }

    /// Re-parse an edited script and swap its cached schema.
    ///
    /// Returns what changed relative to the previously cached schema. A
    /// path never seen before behaves like [`insert`](Self::insert) with
    /// everything reported as added. No store is touched: overrides
    /// orphaned by the new schema surface as hard failures at access time.
    pub fn reload(&self, path: impl Into<String>, source: &str) -> ReloadReport {
        let path = path.into();
        let new = Arc::new(PropertySchema::parse(path.clone(), source));
        let old = self.schemas.write().insert(path.clone(), new.clone());

        let mut report = ReloadReport {
            script: path.clone(),
            ..ReloadReport::default()
        };

        for decl in new.declarations() {
            match old.as_ref().and_then(|o| o.get(&decl.name)) {
                None => report.added.push(decl.name.clone()),
                Some(prev) if prev.kind != decl.kind => report.retyped.push(decl.name.clone()),
                Some(_) => {}
            }
        }
        if let Some(old) = &old {
            for decl in old.declarations() {
                if !new.contains(&decl.name) {
                    report.removed.push(decl.name.clone());
                }
            }
        }

        if report.is_compatible() {
            log::info!("reloaded schema for '{}'", path);
        } else {
            log::warn!(
                "reloaded schema for '{}': {} removed, {} retyped",
                path,
                report.removed.len(),
                report.retyped.len()
            );
        }

        report
    }
}

/// Names of overrides in `store` that `schema` no longer declares.
///
/// Read-only by contract: the store keeps its entries, and resolving any of
/// the returned names against `schema` fails hard. Sorted for stable
/// presentation.
pub fn reconcile(store: &OverrideStore, schema: &PropertySchema) -> Vec<String> {
    let mut orphaned: Vec<String> = store
        .names()
        .filter(|&name| !schema.contains(name))
        .map(String::from)
        .collect();
    orphaned.sort();
    orphaned
}
