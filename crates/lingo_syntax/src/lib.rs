//! Syntax front end for the Lingo scripting language: lexer, parser, AST, visitor, Datum, diagnostics.
//!
//! This crate turns Lingo source text into a tree of [`ast::Node`]s rooted at a [`ast::Block`], and renders such a
//! tree back to source text with [`writer::SourceWriter`]. It is intended for reuse by interpreters, compilers and
//! tooling; none of those live here.
//!
//! ## Notes
//! - This crate is intentionally "syntax-only": it does not resolve handlers, check types or execute anything.
//! - Vocabulary identity (keywords/operators/punctuation/builtins) comes from `lingo_core::lang` registries.
//! - Downstream stages walk the tree through the [`visitor::Visitor`] trait.
//!
//! ## Examples
//! ```rust
//! use lingo_syntax::parser;
//!
//! let block = parser::parse("on startMovie\n  put 1 + 2 into x\nend").unwrap();
//! assert_eq!(block.children.len(), 1);
//! ```

pub mod ast;
pub mod datum;
pub mod diagnostics;
pub mod lexer;
pub mod parser;
pub mod token_helpers;
pub mod visitor;
pub mod writer;
