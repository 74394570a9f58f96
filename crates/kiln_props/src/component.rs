//! Component instances and the game object that owns them
//!
//! A [`ScriptComponent`] is a reference to a script plus that instance's
//! own override store. The schema is not stored here: it is derived from
//! the referenced script on demand (see [`crate::registry`]), so overrides
//! and schema can drift apart when the script is edited. That drift is
//! surfaced at access time, per the accessor's rules.

use crate::accessor::{self, PropertyStatus};
use crate::error::Result;
use crate::store::OverrideStore;
use crate::value::ScalarValue;
use kiln_script::PropertySchema;
use serde::{Deserialize, Serialize};

/// A component instance inside a game object definition
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScriptComponent {
    /// Component id, unique within its game object
    pub id: String,
    /// Path of the referenced script
    pub script: String,
    /// This instance's overrides, never shared with another instance
    pub overrides: OverrideStore,
}

impl ScriptComponent {
    /// Create a component instance with an empty override store
    pub fn new(id: impl Into<String>, script: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            script: script.into(),
            overrides: OverrideStore::new(),
        }
    }

    /// Add an override (builder style)
    pub fn with_override(mut self, name: impl Into<String>, text: impl Into<String>) -> Self {
        self.overrides.set(name, text);
        self
    }

    /// Effective typed value of a property under the given schema
    pub fn property_value(&self, schema: &PropertySchema, name: &str) -> Result<ScalarValue> {
        accessor::effective_value(schema, &self.overrides, name)
    }

    /// Text shown for a property: the override if set, else the default
    pub fn property_text<'a>(&'a self, schema: &'a PropertySchema, name: &str) -> Result<&'a str> {
        accessor::effective_text(schema, &self.overrides, name)
    }

    /// Current Ok/Error status of a property
    pub fn property_status(&self, schema: &PropertySchema, name: &str) -> PropertyStatus {
        accessor::status(schema, &self.overrides, name)
    }

    /// Write raw property text; the empty string resets to the default
    pub fn set_property_text(&mut self, name: &str, text: &str) {
        accessor::set_text(&mut self.overrides, name, text);
    }
}

/// A game object definition: an ordered list of component instances
#[derive(Debug, Clone, Default)]
pub struct GameObject {
    pub components: Vec<ScriptComponent>,
}

impl GameObject {
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a component by id
    pub fn component(&self, id: &str) -> Option<&ScriptComponent> {
        self.components.iter().find(|c| c.id == id)
    }

    /// Look up a component by id, mutably
    pub fn component_mut(&mut self, id: &str) -> Option<&mut ScriptComponent> {
        self.components.iter_mut().find(|c| c.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kiln_script::PropertySchema;

    #[test]
    fn test_component_property_access() {
        let schema = PropertySchema::parse("/unit.kiln", r#"property("speed", 16)"#);
        let mut component = ScriptComponent::new("movement", "/unit.kiln");

        assert_eq!(component.property_text(&schema, "speed").unwrap(), "16");

        component.set_property_text("speed", "20");
        assert_eq!(component.property_text(&schema, "speed").unwrap(), "20");
        assert!(component.property_status(&schema, "speed").is_ok());

        component.set_property_text("speed", "");
        assert_eq!(component.property_text(&schema, "speed").unwrap(), "16");
    }

    #[test]
    fn test_game_object_lookup() {
        let mut go = GameObject::new();
        go.components.push(ScriptComponent::new("a", "/a.kiln"));
        go.components
            .push(ScriptComponent::new("b", "/b.kiln").with_override("speed", "2"));

        assert_eq!(go.component("b").unwrap().overrides.get("speed"), Some("2"));
        assert!(go.component("missing").is_none());

        go.component_mut("a").unwrap().set_property_text("x", "1");
        assert_eq!(go.component("a").unwrap().overrides.get("x"), Some("1"));
    }
}
