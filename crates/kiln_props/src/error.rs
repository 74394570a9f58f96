//! Error types for the property override engine

use crate::value::ValueError;
use thiserror::Error;

/// Result type for property operations
pub type Result<T> = std::result::Result<T, PropError>;

/// Errors that can occur while resolving, editing, or persisting property
/// overrides
#[derive(Debug, Error)]
pub enum PropError {
    /// An override or query names a property the current schema does not
    /// declare. This is the fail-loud path for overrides orphaned by a
    /// script edit; callers must not substitute a default.
    #[error("property '{name}' is not declared by script '{script}'")]
    UnknownProperty { script: String, name: String },

    /// A property's text failed validation against its declared kind
    #[error("property '{name}': {reason}")]
    Invalid {
        name: String,
        #[source]
        reason: ValueError,
    },

    /// No schema is cached for the referenced script
    #[error("no schema loaded for script '{0}'")]
    SchemaNotLoaded(String),

    /// Two components in one game object share an id
    #[error("duplicate component id '{0}' in game object document")]
    DuplicateComponentId(String),

    /// The persisted document could not be parsed
    #[error("malformed game object document: {0}")]
    DocumentSyntax(String),
}

impl PropError {
    /// Create an unknown-property error
    pub fn unknown_property(script: impl Into<String>, name: impl Into<String>) -> Self {
        PropError::UnknownProperty {
            script: script.into(),
            name: name.into(),
        }
    }

    /// Create a validation error for a named property
    pub fn invalid(name: impl Into<String>, reason: ValueError) -> Self {
        PropError::Invalid {
            name: name.into(),
            reason,
        }
    }
}
