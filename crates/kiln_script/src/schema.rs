//! Property schema extraction
//!
//! A script declares editor-overridable properties with statement-position
//! `property(...)` calls. [`PropertySchema::parse`] statically scans source
//! text for those declarations; it never executes anything and never fails:
//! a declaration the recognizer cannot classify is skipped, and a script
//! with no declarations yields an empty schema.

use crate::lexer::{Lexer, Token, TokenKind};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// The value kind a property declaration implies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PropertyKind {
    /// 64-bit float
    Number,
    /// Opaque interned identifier, compared textually
    Hash,
    /// Reference target, syntactically checked
    Url,
    /// Unrestricted string
    Text,
}

impl PropertyKind {
    /// Kind name for diagnostics
    pub fn name(&self) -> &'static str {
        match self {
            PropertyKind::Number => "number",
            PropertyKind::Hash => "hash",
            PropertyKind::Url => "url",
            PropertyKind::Text => "text",
        }
    }
}

/// One parsed `property(...)` declaration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertyDeclaration {
    /// Property name, non-empty and unique within its schema
    pub name: String,
    /// Kind implied by the declaration's default argument
    pub kind: PropertyKind,
    /// Default value as text
    pub default_text: String,
}

/// Ordered property declarations of one script version
///
/// Immutable once parsed: editing a script produces a new schema object,
/// never an in-place mutation of an existing one.
#[derive(Debug, Clone)]
pub struct PropertySchema {
    script: String,
    decls: Vec<PropertyDeclaration>,
    index: HashMap<String, usize>,
}

impl PropertySchema {
    /// Create an empty schema for the given script path
    pub fn empty(script: impl Into<String>) -> Self {
        Self {
            script: script.into(),
            decls: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Extract the property declarations from KilnScript source
    ///
    /// Recognized declaration forms and the kinds they imply:
    ///
    /// ```text
    /// property("speed", 16)          // Number (optionally signed literal)
    /// property("team", hash("red"))  // Hash
    /// property("target", url())      // Url, default ""
    /// property("target", url("/a"))  // Url
    /// property("label", "hello")     // Text
    /// ```
    ///
    /// A receiver prefix (`self.property(...)`, `go.property(...)`) is
    /// allowed. Redeclaring a name is last-wins: the later declaration
    /// replaces the earlier one's kind and default but keeps the earlier
    /// declaration's position in schema order.
    pub fn parse(script: impl Into<String>, source: &str) -> Self {
        let mut schema = Self::empty(script);
        let tokens = Lexer::new(source).tokenize();

        let mut i = 0;
        while i < tokens.len() {
            if is_declaration_start(&tokens, i) {
                match parse_declaration(&tokens, i) {
                    Some((decl, next)) => {
                        schema.push(decl);
                        i = next;
                        continue;
                    }
                    None => {
                        log::debug!(
                            "{}: skipping unrecognized property declaration at line {}",
                            schema.script,
                            tokens[i].line
                        );
                    }
                }
            }
            i += 1;
        }

        schema
    }

    /// Path of the owning script
    pub fn script(&self) -> &str {
        &self.script
    }

    /// Look up a declaration by name
    pub fn get(&self, name: &str) -> Option<&PropertyDeclaration> {
        self.index.get(name).map(|&slot| &self.decls[slot])
    }

    /// Whether the schema declares the given name
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Declarations in schema order
    pub fn declarations(&self) -> &[PropertyDeclaration] {
        &self.decls
    }

    pub fn len(&self) -> usize {
        self.decls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.decls.is_empty()
    }

    fn push(&mut self, decl: PropertyDeclaration) {
        match self.index.get(&decl.name) {
            Some(&slot) => self.decls[slot] = decl,
            None => {
                self.index.insert(decl.name.clone(), self.decls.len());
                self.decls.push(decl);
            }
        }
    }
}

fn is_declaration_start(tokens: &[Token], i: usize) -> bool {
    matches!(&tokens[i].kind, TokenKind::Ident(name) if name == "property")
        && matches!(tokens.get(i + 1).map(|t| &t.kind), Some(TokenKind::LParen))
}

/// Try to parse one declaration starting at `tokens[i]`.
///
/// Returns the declaration and the index just past its closing paren, or
/// `None` if the token shapes don't match any recognized form.
fn parse_declaration(tokens: &[Token], i: usize) -> Option<(PropertyDeclaration, usize)> {
    let kind_at = |offset: usize| tokens.get(i + offset).map(|t| &t.kind);

    let name = match kind_at(2) {
        Some(TokenKind::Str(name)) if !name.is_empty() => name.clone(),
        _ => return None,
    };
    if !matches!(kind_at(3), Some(TokenKind::Comma)) {
        return None;
    }

    // Default argument, starting at offset 4. Each arm checks through the
    // declaration's closing paren.
    let (kind, default_text, end) = match kind_at(4) {
        Some(TokenKind::Number(n)) => match kind_at(5) {
            Some(TokenKind::RParen) => (PropertyKind::Number, n.to_string(), i + 6),
            _ => return None,
        },
        Some(TokenKind::Minus) => match (kind_at(5), kind_at(6)) {
            (Some(TokenKind::Number(n)), Some(TokenKind::RParen)) => {
                (PropertyKind::Number, (-n).to_string(), i + 7)
            }
            _ => return None,
        },
        Some(TokenKind::Str(text)) => match kind_at(5) {
            Some(TokenKind::RParen) => (PropertyKind::Text, text.clone(), i + 6),
            _ => return None,
        },
        Some(TokenKind::Ident(callee)) if callee == "hash" => {
            match (kind_at(5), kind_at(6), kind_at(7), kind_at(8)) {
                (
                    Some(TokenKind::LParen),
                    Some(TokenKind::Str(text)),
                    Some(TokenKind::RParen),
                    Some(TokenKind::RParen),
                ) => (PropertyKind::Hash, text.clone(), i + 9),
                _ => return None,
            }
        }
        Some(TokenKind::Ident(callee)) if callee == "url" => {
            match (kind_at(5), kind_at(6), kind_at(7)) {
                (Some(TokenKind::LParen), Some(TokenKind::RParen), Some(TokenKind::RParen)) => {
                    (PropertyKind::Url, String::new(), i + 8)
                }
                (
                    Some(TokenKind::LParen),
                    Some(TokenKind::Str(text)),
                    Some(TokenKind::RParen),
                ) => match kind_at(8) {
                    Some(TokenKind::RParen) => (PropertyKind::Url, text.clone(), i + 9),
                    _ => return None,
                },
                _ => return None,
            }
        }
        _ => return None,
    };

    Some((
        PropertyDeclaration {
            name,
            kind,
            default_text,
        },
        end,
    ))
}
