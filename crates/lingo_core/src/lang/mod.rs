//! Lingo language vocabulary registries.
//!
//! This module is the "front door" for language-level vocabulary: reserved keywords, binary operators, punctuation,
//! and the builtin names the parser treats specially.
//!
//! Callers work with **stable IDs** (e.g. `KeywordId`, `OperatorId`) and look up spellings/metadata via registry
//! tables instead of comparing strings at every call site.
//!
//! ## Notes
//! - Registries are intentionally **pure**: no AST types, no IO, no side effects.
//! - Lingo is case-insensitive for keywords and builtin names; every `from_str` here folds ASCII case.
//!
//! ## Examples
//! ```rust
//! use lingo_core::lang::keywords::{self, KeywordId};
//!
//! assert_eq!(keywords::from_str("If"), Some(KeywordId::If));
//! assert_eq!(keywords::as_str(KeywordId::If), "if");
//! ```

pub mod builtins;
pub mod keywords;
pub mod operators;
pub mod punctuation;
