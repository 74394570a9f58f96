//! Property resolution
//!
//! The accessor combines a schema, a store, and value validation to answer
//! the editor's three questions about a property: what is its effective
//! value, what text should the UI show, and is it currently valid. Edits go
//! through [`set_text`].
//!
//! Resolution rules:
//!
//! - A non-empty override is parsed against the declared kind. If parsing
//!   fails the stored text is left untouched and the failure is reported;
//!   there is no coercion and no data loss.
//! - An absent or empty override falls back to the declaration default.
//! - A name the schema does not declare is a hard failure, never a silent
//!   default. Such a name signals an override orphaned by a script edit;
//!   see [`crate::registry`].

use crate::error::{PropError, Result};
use crate::store::OverrideStore;
use crate::value::ScalarValue;
use kiln_script::PropertySchema;

/// Ok/Error classification of one property's current resolvability
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PropertyStatus {
    Ok,
    Error { message: String },
}

impl PropertyStatus {
    pub fn is_ok(&self) -> bool {
        matches!(self, PropertyStatus::Ok)
    }

    /// Diagnostic message when the status is an error
    pub fn message(&self) -> Option<&str> {
        match self {
            PropertyStatus::Ok => None,
            PropertyStatus::Error { message } => Some(message),
        }
    }
}

/// Resolve the effective typed value of a property.
///
/// Fails with [`PropError::UnknownProperty`] when `name` is not declared by
/// `schema`, and with [`PropError::Invalid`] when the text in force (the
/// override, or the default when no override is set) does not parse against
/// the declared kind.
pub fn effective_value(
    schema: &PropertySchema,
    store: &OverrideStore,
    name: &str,
) -> Result<ScalarValue> {
    let decl = schema
        .get(name)
        .ok_or_else(|| PropError::unknown_property(schema.script(), name))?;

    let text = match store.get(name) {
        Some(text) if !text.is_empty() => text,
        _ => decl.default_text.as_str(),
    };

    ScalarValue::parse(decl.kind, text).map_err(|reason| PropError::invalid(name, reason))
}

/// The text the editor shows for a property: the override as authored if
/// one is set, else the declaration's default text.
///
/// No validation happens here; pair with [`status`] to decorate the field.
/// Unknown names fail hard, exactly like [`effective_value`].
pub fn effective_text<'a>(
    schema: &'a PropertySchema,
    store: &'a OverrideStore,
    name: &str,
) -> Result<&'a str> {
    let decl = schema
        .get(name)
        .ok_or_else(|| PropError::unknown_property(schema.script(), name))?;

    match store.get(name) {
        Some(text) if !text.is_empty() => Ok(text),
        _ => Ok(decl.default_text.as_str()),
    }
}

/// Classify a property's current resolvability.
///
/// Unlike [`effective_value`] this never escalates: an unknown name and a
/// validation failure both come back as an error status with a message for
/// the UI, local to this property.
pub fn status(schema: &PropertySchema, store: &OverrideStore, name: &str) -> PropertyStatus {
    match effective_value(schema, store, name) {
        Ok(_) => PropertyStatus::Ok,
        Err(e) => PropertyStatus::Error {
            message: e.to_string(),
        },
    }
}

/// Write raw override text into the store.
///
/// The empty string is the reset-to-default operation for every property
/// kind: the override is removed and the property resolves to its schema
/// default again. Any other text is stored verbatim, including text equal
/// to the default (the serializer elides it) and text that will fail
/// validation (status reports it until a valid value is set).
pub fn set_text(store: &mut OverrideStore, name: &str, text: &str) {
    if text.is_empty() {
        store.unset(name);
    } else {
        store.set(name, text);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kiln_script::PropertySchema;

    fn schema() -> PropertySchema {
        PropertySchema::parse(
            "/script/props.kiln",
            r#"
            property("number", 1)
            property("hash", hash("hash"))
            property("url", url())
            "#,
        )
    }

    #[test]
    fn test_defaults_without_overrides() {
        let schema = schema();
        let store = OverrideStore::new();

        assert_eq!(
            effective_value(&schema, &store, "number").unwrap(),
            ScalarValue::Number(1.0)
        );
        assert_eq!(effective_text(&schema, &store, "hash").unwrap(), "hash");
        assert_eq!(effective_text(&schema, &store, "url").unwrap(), "");
        assert!(status(&schema, &store, "number").is_ok());
    }

    #[test]
    fn test_override_wins_and_empty_resets() {
        let schema = schema();
        let mut store = OverrideStore::new();

        set_text(&mut store, "number", "2");
        assert_eq!(effective_text(&schema, &store, "number").unwrap(), "2");
        assert_eq!(
            effective_value(&schema, &store, "number").unwrap(),
            ScalarValue::Number(2.0)
        );

        // Empty string is reset-to-default, not a stored empty override.
        set_text(&mut store, "number", "");
        assert!(!store.contains("number"));
        assert_eq!(effective_text(&schema, &store, "number").unwrap(), "1");
    }

    #[test]
    fn test_invalid_override_reports_error_and_preserves_text() {
        let schema = schema();
        let mut store = OverrideStore::new();

        set_text(&mut store, "number", "invalid");
        assert!(matches!(
            effective_value(&schema, &store, "number"),
            Err(PropError::Invalid { .. })
        ));
        let st = status(&schema, &store, "number");
        assert!(!st.is_ok());
        assert!(st.message().unwrap().contains("number"));

        // The stored text is untouched; the UI still shows what was typed.
        assert_eq!(store.get("number"), Some("invalid"));
        assert_eq!(effective_text(&schema, &store, "number").unwrap(), "invalid");

        // A valid value clears the error.
        set_text(&mut store, "number", "3");
        assert!(status(&schema, &store, "number").is_ok());
    }

    #[test]
    fn test_url_validation_status() {
        let schema = schema();
        let mut store = OverrideStore::new();

        assert!(status(&schema, &store, "url").is_ok());
        set_text(&mut store, "url", "invalid");
        assert!(!status(&schema, &store, "url").is_ok());
        set_text(&mut store, "url", "/url");
        assert!(status(&schema, &store, "url").is_ok());
    }

    #[test]
    fn test_unknown_name_is_a_hard_failure() {
        let schema = schema();
        let mut store = OverrideStore::new();
        set_text(&mut store, "number2", "5");

        // The orphaned override fails hard on direct access...
        assert!(matches!(
            effective_value(&schema, &store, "number2"),
            Err(PropError::UnknownProperty { .. })
        ));
        assert!(matches!(
            effective_text(&schema, &store, "number2"),
            Err(PropError::UnknownProperty { .. })
        ));
        // ...is an error status through the non-escalating path...
        assert!(!status(&schema, &store, "number2").is_ok());
        // ...and leaves sibling properties untouched.
        assert_eq!(effective_text(&schema, &store, "number").unwrap(), "1");
    }

    #[test]
    fn test_setting_the_default_text_is_accepted() {
        let schema = schema();
        let mut store = OverrideStore::new();

        set_text(&mut store, "number", "1");
        assert!(store.contains("number"));
        assert!(status(&schema, &store, "number").is_ok());
        assert_eq!(
            effective_value(&schema, &store, "number").unwrap(),
            ScalarValue::Number(1.0)
        );
    }
}
