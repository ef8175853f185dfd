//! Parser for the Lingo scripting language
//!
//! A recursive-descent parser with one token of lookahead (two in a couple of places) that pulls tokens from a
//! [`Lexer`] and builds the AST bottom-up within each grammar rule.
//!
//! ## Notes
//! - Hard failures (a required `end`, `then`, `)` ... is missing) abort the parse with a [`ParseError`].
//! - An unrecognised token where a statement or primary expression should start is consumed and replaced by an
//!   [`ErrorNode`]; parsing continues after it.
//! - Binary operators have no precedence tiers: see [`lingo_core::lang::operators`].
//!
//! ## Examples
//!
//! ```rust
//! use lingo_syntax::ast::Node;
//! use lingo_syntax::parser;
//!
//! let block = parser::parse("repeat with i = 1 to 5\n  put i\nend repeat").unwrap();
//! assert!(matches!(block.children[0], Node::RepeatWith(_)));
//! ```

use crate::ast::*;
use crate::datum::Datum;
use crate::diagnostics::ParseError;
use crate::lexer::{Lexer, Token, TokenKind};
use lingo_core::lang::builtins::{self, OfTarget, PseudoCommand, PseudoFunction, PutPlacement};
use lingo_core::lang::keywords::KeywordId;
use lingo_core::lang::operators::{self, OperatorId};
use lingo_core::lang::punctuation::PunctuationId;

// NOTE: This module is split across multiple files using `include!` to keep all parser
// methods in the same Rust module (preserving privacy + call patterns) while avoiding
// a single large source file.

include!("parser/core.rs");
include!("parser/helpers.rs");
include!("parser/stmts.rs");
include!("parser/expr.rs");
include!("parser/api.rs");
include!("parser/tests.rs");
