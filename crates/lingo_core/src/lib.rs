//! Provide the canonical language vocabulary for the Lingo front end.
//!
//! This crate is intentionally small and dependency-free. It contains the registries that the lexer, the parser and
//! the source writer share, so that spellings such as `end`, `<>` or `ENTER` live in exactly one place.
//!
//! ## Notes
//!
//! - This is a "vocabulary" crate: **no IO**, no global state, and no AST types.

pub mod lang;
