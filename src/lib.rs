#![forbid(unsafe_code)]
//! Lingo scripting-language front end and tooling
//!
//! This crate ties the syntax front end (`lingo_syntax`: lexer, parser, AST, Datum) to the tooling around it:
//! script/handler loading, diagnostic rendering, source formatting and the `lingo` CLI.
//!
//! ## Panic Policy
//!
//! This codebase follows explicit error handling:
//!
//! - **Production code**: Use `Result` or `Option` with `?` / `ok_or` / `map_err`. The `cli` module enforces
//!   `#![deny(clippy::unwrap_used)]`.
//!
//! - **Test code**: `.unwrap()` and `.expect()` are acceptable in tests.

pub mod cli;
pub mod format;
pub mod frontend;
pub mod version;

pub use frontend::ast;
pub use frontend::datum;
pub use frontend::lexer;
pub use frontend::parser;
pub use frontend::script::{Handler, Script, ScriptError};

pub use format::{FormatConfig, check_formatted, format_diff, format_source, format_source_with_config};
