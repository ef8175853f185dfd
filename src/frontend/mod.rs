//! Lingo Frontend
//!
//! This module contains all frontend components:
//! - `lexer`: tokenization of source code
//! - `parser`: parsing source into an AST
//! - `ast` / `datum`: syntax tree and literal value definitions
//! - `visitor` / `writer`: tree traversal and source rendering
//! - `diagnostics`: parse error rendering against source text
//! - `script`: splitting scripts into lazily parsed handlers

// Syntax components are provided by the shared lingo_syntax crate.
pub use lingo_syntax::{ast, datum, lexer, parser, visitor, writer};

// Tooling-specific pieces remain local.
pub mod diagnostics;
pub mod script;
