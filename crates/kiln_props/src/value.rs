//! Typed property values and text conversion
//!
//! Property values travel as text between the editor, the persisted
//! document, and the script's declared defaults. [`ScalarValue::parse`] is
//! the single place that text is checked against a declared kind and turned
//! into a typed value.

use kiln_script::PropertyKind;
use thiserror::Error;

/// Validation failures for a single value, independent of which property it
/// belongs to
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValueError {
    #[error("'{0}' is not a finite number")]
    NotANumber(String),

    #[error("'{0}' is not a valid reference target")]
    InvalidTarget(String),

    #[error("hash identifier must not be empty")]
    EmptyHash,
}

/// A typed property value
#[derive(Debug, Clone, PartialEq)]
pub enum ScalarValue {
    /// Finite 64-bit float
    Number(f64),
    /// Opaque identifier, compared textually
    Hash(String),
    /// Reference target, possibly empty ("no reference")
    Url(String),
    /// Unrestricted string
    Text(String),
}

impl ScalarValue {
    /// Parse text against a declared kind.
    ///
    /// - `Number`: must parse as a finite decimal. The empty string is not
    ///   a number here; "empty means default" is the accessor's concern.
    /// - `Hash`: any non-empty text, taken verbatim.
    /// - `Url`: empty is valid (no reference). A non-empty target must
    ///   contain no whitespace and be one of: an absolute path starting
    ///   with `/`, a fragment reference starting with `#`, or
    ///   scheme-qualified (a `:` before any `/` or `#`). Plain words such
    ///   as `invalid` are rejected.
    /// - `Text`: identity, always valid.
    pub fn parse(kind: PropertyKind, text: &str) -> Result<Self, ValueError> {
        match kind {
            PropertyKind::Number => match text.parse::<f64>() {
                Ok(n) if n.is_finite() => Ok(ScalarValue::Number(n)),
                _ => Err(ValueError::NotANumber(text.to_string())),
            },
            PropertyKind::Hash => {
                if text.is_empty() {
                    Err(ValueError::EmptyHash)
                } else {
                    Ok(ScalarValue::Hash(text.to_string()))
                }
            }
            PropertyKind::Url => {
                if is_valid_target(text) {
                    Ok(ScalarValue::Url(text.to_string()))
                } else {
                    Err(ValueError::InvalidTarget(text.to_string()))
                }
            }
            PropertyKind::Text => Ok(ScalarValue::Text(text.to_string())),
        }
    }

    /// The kind this value carries
    pub fn kind(&self) -> PropertyKind {
        match self {
            ScalarValue::Number(_) => PropertyKind::Number,
            ScalarValue::Hash(_) => PropertyKind::Hash,
            ScalarValue::Url(_) => PropertyKind::Url,
            ScalarValue::Text(_) => PropertyKind::Text,
        }
    }

    /// Format the value back to text
    pub fn to_text(&self) -> String {
        match self {
            ScalarValue::Number(n) => n.to_string(),
            ScalarValue::Hash(s) | ScalarValue::Url(s) | ScalarValue::Text(s) => s.clone(),
        }
    }

    /// Try to get as f64
    pub fn as_number(&self) -> Option<f64> {
        match self {
            ScalarValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Try to get as a string slice
    pub fn as_str(&self) -> Option<&str> {
        match self {
            ScalarValue::Hash(s) | ScalarValue::Url(s) | ScalarValue::Text(s) => Some(s),
            ScalarValue::Number(_) => None,
        }
    }
}

/// Syntactic check for reference targets.
///
/// Grammar: empty, or whitespace-free and rooted (`/...`), a fragment
/// (`#...`), or scheme-qualified (`scheme:...` with the `:` before any `/`
/// or `#`).
fn is_valid_target(text: &str) -> bool {
    if text.is_empty() {
        return true;
    }
    if text.contains(char::is_whitespace) {
        return false;
    }
    if text.starts_with('/') || text.starts_with('#') {
        return true;
    }
    match text.find(|c| matches!(c, ':' | '/' | '#')) {
        Some(pos) => text.as_bytes()[pos] == b':' && pos > 0,
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_number_parsing() {
        assert_eq!(
            ScalarValue::parse(PropertyKind::Number, "2"),
            Ok(ScalarValue::Number(2.0))
        );
        assert_eq!(
            ScalarValue::parse(PropertyKind::Number, "-0.5"),
            Ok(ScalarValue::Number(-0.5))
        );
        assert_eq!(
            ScalarValue::parse(PropertyKind::Number, "1e3"),
            Ok(ScalarValue::Number(1000.0))
        );
    }

    #[test]
    fn test_number_rejects_non_finite_and_garbage() {
        assert_eq!(
            ScalarValue::parse(PropertyKind::Number, "invalid"),
            Err(ValueError::NotANumber("invalid".to_string()))
        );
        assert!(ScalarValue::parse(PropertyKind::Number, "").is_err());
        assert!(ScalarValue::parse(PropertyKind::Number, "inf").is_err());
        assert!(ScalarValue::parse(PropertyKind::Number, "NaN").is_err());
    }

    #[test]
    fn test_hash_is_verbatim_but_never_empty() {
        assert_eq!(
            ScalarValue::parse(PropertyKind::Hash, "hash2"),
            Ok(ScalarValue::Hash("hash2".to_string()))
        );
        assert_eq!(
            ScalarValue::parse(PropertyKind::Hash, ""),
            Err(ValueError::EmptyHash)
        );
    }

    #[test]
    fn test_target_grammar() {
        for ok in ["", "/url", "/a/b#c", "#fragment", "socket:/path", "kiln:unit"] {
            assert!(
                ScalarValue::parse(PropertyKind::Url, ok).is_ok(),
                "expected '{ok}' to be accepted"
            );
        }
        for bad in ["invalid", "a b", "/a b", "rel/ative", ":nameless"] {
            assert_eq!(
                ScalarValue::parse(PropertyKind::Url, bad),
                Err(ValueError::InvalidTarget(bad.to_string())),
                "expected '{bad}' to be rejected"
            );
        }
    }

    #[test]
    fn test_text_is_identity() {
        assert_eq!(
            ScalarValue::parse(PropertyKind::Text, "anything at all"),
            Ok(ScalarValue::Text("anything at all".to_string()))
        );
        assert!(ScalarValue::parse(PropertyKind::Text, "").is_ok());
    }

    #[test]
    fn test_typed_equality_ignores_spelling() {
        // "2" and "2.0" are different texts but the same number.
        let a = ScalarValue::parse(PropertyKind::Number, "2").unwrap();
        let b = ScalarValue::parse(PropertyKind::Number, "2.0").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_to_text_round_trip() {
        let v = ScalarValue::parse(PropertyKind::Number, "1").unwrap();
        assert_eq!(v.to_text(), "1");
        let v = ScalarValue::parse(PropertyKind::Hash, "red").unwrap();
        assert_eq!(v.to_text(), "red");
        assert_eq!(v.kind(), PropertyKind::Hash);
    }
}
