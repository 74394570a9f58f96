//! # kiln_props - Script Property Overrides
//!
//! The override engine behind the Kiln editor's component property sheet.
//! A component instance in a game object definition references a script;
//! the script declares typed properties with defaults (`kiln_script`), and
//! the instance may override any of them with a per-instance text value.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────┐     ┌──────────────────┐
//! │  KilnScript src  │────▶│  PropertySchema  │  kiln_script
//! └──────────────────┘     └────────┬─────────┘
//!                                   │
//! ┌──────────────────┐              ▼
//! │  GameObjectDoc   │     ┌──────────────────┐     ┌─────────────────┐
//! │  (opaque bytes)  │◀───▶│     accessor     │◀───▶│  OverrideStore  │
//! └──────────────────┘     │ value / status / │     │  (per instance) │
//!        document          │     set_text     │     └─────────────────┘
//!                          └────────┬─────────┘
//!                                   │
//!                          ┌────────▼─────────┐
//!                          │  SchemaRegistry  │  reload + reconcile
//!                          └──────────────────┘
//! ```
//!
//! ## Resolution contract
//!
//! The editor works in text: it sets raw text by property name and reads
//! back text plus an Ok/Error status. A non-empty override is validated
//! against the declared kind on every access; invalid text is reported but
//! never altered or dropped. The empty string always means "reset to the
//! schema default". A name the current schema does not declare fails hard
//! on direct access; that is how overrides orphaned by a script edit
//! surface instead of silently reverting.
//!
//! ## Example
//!
//! ```
//! use kiln_props::prelude::*;
//!
//! let registry = SchemaRegistry::new();
//! let schema = registry.insert("/unit.kiln", r#"property("speed", 16)"#);
//!
//! let mut unit = ScriptComponent::new("movement", "/unit.kiln");
//! assert_eq!(unit.property_text(&schema, "speed").unwrap(), "16");
//!
//! unit.set_property_text("speed", "20");
//! assert_eq!(
//!     unit.property_value(&schema, "speed").unwrap(),
//!     ScalarValue::Number(20.0)
//! );
//!
//! unit.set_property_text("speed", "");
//! assert_eq!(unit.property_text(&schema, "speed").unwrap(), "16");
//! ```

mod error;

pub mod accessor;
pub mod component;
pub mod document;
pub mod registry;
pub mod store;
pub mod value;

pub use accessor::{effective_text, effective_value, set_text, status, PropertyStatus};
pub use component::{GameObject, ScriptComponent};
pub use document::{
    load_game_object, read_overrides, save_game_object, write_overrides, ComponentEntry,
    GameObjectDoc, PropertyEntry,
};
pub use error::{PropError, Result};
pub use registry::{reconcile, ReloadReport, SchemaRegistry};
pub use store::OverrideStore;
pub use value::{ScalarValue, ValueError};

// The schema types come from kiln_script; re-exported so most callers need
// only this crate.
pub use kiln_script::{PropertyDeclaration, PropertyKind, PropertySchema};

/// Re-export of commonly used types
pub mod prelude {
    pub use crate::accessor::PropertyStatus;
    pub use crate::component::{GameObject, ScriptComponent};
    pub use crate::document::{load_game_object, save_game_object, GameObjectDoc};
    pub use crate::error::{PropError, Result};
    pub use crate::registry::{reconcile, ReloadReport, SchemaRegistry};
    pub use crate::store::OverrideStore;
    pub use crate::value::ScalarValue;
    pub use kiln_script::{PropertyKind, PropertySchema};
}
