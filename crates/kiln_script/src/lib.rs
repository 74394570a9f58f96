//! # KilnScript property scanning
//!
//! Static extraction of property declarations from KilnScript source. A
//! script makes its tunable values visible to the editor with
//! `property(...)` statements:
//!
//! ```text
//! // Unit tuning
//! property("speed", 16)            // Number
//! property("team", hash("red"))    // Hash identifier
//! property("target", url())        // Url reference, default empty
//! property("label", "recruit")     // Text
//! ```
//!
//! [`PropertySchema::parse`] scans source text for those statements without
//! executing anything. Extraction is best-effort by contract: declarations
//! the recognizer cannot classify are skipped with a debug log, and a script
//! with no declarations produces an empty schema. Consumers that need
//! override resolution, validation, and persistence live in `kiln_props`.

pub mod lexer;
pub mod schema;

pub use lexer::{Lexer, Token, TokenKind};
pub use schema::{PropertyDeclaration, PropertyKind, PropertySchema};
