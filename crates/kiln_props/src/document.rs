//! Persisted game object documents
//!
//! The persisted form of a component instance is an ordered list of
//! `(name, text)` entries holding only the overrides whose typed value
//! differs from the schema default. Reading is verbatim and unvalidated:
//! whatever text was persisted lands in the store unchanged and is checked
//! at access time, so a document written while a script was mid-edit still
//! round-trips.
//!
//! The engine works on opaque bytes; locating, opening, and watching files
//! is the caller's business.

use crate::component::{GameObject, ScriptComponent};
use crate::error::{PropError, Result};
use crate::registry::SchemaRegistry;
use crate::store::OverrideStore;
use crate::value::ScalarValue;
use kiln_script::PropertySchema;
use serde::{Deserialize, Serialize};

/// One persisted property override
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyEntry {
    /// Property name
    pub id: String,
    /// Override text as authored
    pub value: String,
}

/// One persisted component instance
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComponentEntry {
    /// Component id, unique within the document
    pub id: String,
    /// Path of the referenced script
    pub component: String,
    /// Non-default overrides, in schema declaration order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub properties: Vec<PropertyEntry>,
}

/// A persisted game object document
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameObjectDoc {
    #[serde(default)]
    pub components: Vec<ComponentEntry>,
}

impl GameObjectDoc {
    /// Parse a document from bytes
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        serde_json::from_slice(bytes).map_err(|e| PropError::DocumentSyntax(e.to_string()))
    }

    /// Serialize the document to bytes
    pub fn to_vec(&self) -> Result<Vec<u8>> {
        serde_json::to_vec_pretty(self).map_err(|e| PropError::DocumentSyntax(e.to_string()))
    }
}

/// Emit the persisted entries for one store.
///
/// Entries follow schema declaration order, never store iteration order.
/// For each declared property the override is emitted only when its typed
/// value differs from the default; empty stored text counts as "no
/// override". Text that fails to parse is emitted verbatim.
pub fn write_overrides(schema: &PropertySchema, store: &OverrideStore) -> Vec<PropertyEntry> {
    let mut entries = Vec::new();

    for decl in schema.declarations() {
        let Some(text) = store.get(&decl.name) else {
            continue;
        };
        if text.is_empty() {
            continue;
        }

        let differs = match ScalarValue::parse(decl.kind, text) {
            Ok(value) => match ScalarValue::parse(decl.kind, &decl.default_text) {
                Ok(default) => value != default,
                Err(_) => true,
            },
            Err(_) => true,
        };

        if differs {
            entries.push(PropertyEntry {
                id: decl.name.clone(),
                value: text.to_string(),
            });
        }
    }

    entries
}

/// Populate a store from persisted entries, one `set` per entry.
///
/// Text is preserved exactly as persisted even if it will fail validation
/// against the current schema; validation is deferred to access time.
pub fn read_overrides(entries: &[PropertyEntry]) -> OverrideStore {
    let mut store = OverrideStore::new();
    for entry in entries {
        store.set(&entry.id, &entry.value);
    }
    store
}

/// Build the in-memory game object from document bytes.
///
/// Component ids must be unique within the document; overrides are taken
/// verbatim.
pub fn load_game_object(bytes: &[u8]) -> Result<GameObject> {
    let doc = GameObjectDoc::from_slice(bytes)?;
    let mut go = GameObject::new();

    for entry in &doc.components {
        if go.component(&entry.id).is_some() {
            return Err(PropError::DuplicateComponentId(entry.id.clone()));
        }
        go.components.push(ScriptComponent {
            id: entry.id.clone(),
            script: entry.component.clone(),
            overrides: read_overrides(&entry.properties),
        });
    }

    Ok(go)
}

/// Serialize a game object to document bytes, eliding default-equal
/// overrides per [`write_overrides`].
///
/// Every referenced script must have a schema in the registry; without one
/// there is no declaration order or default to elide against.
pub fn save_game_object(go: &GameObject, schemas: &SchemaRegistry) -> Result<Vec<u8>> {
    let mut doc = GameObjectDoc::default();

    for component in &go.components {
        let schema = schemas
            .get(&component.script)
            .ok_or_else(|| PropError::SchemaNotLoaded(component.script.clone()))?;

        doc.components.push(ComponentEntry {
            id: component.id.clone(),
            component: component.script.clone(),
            properties: write_overrides(&schema, &component.overrides),
        });
    }

    doc.to_vec()
}
