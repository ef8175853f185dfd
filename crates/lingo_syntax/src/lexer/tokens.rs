//! Token types for the Lingo lexer.
//!
//! The lexer uses **registry-backed IDs** for language vocabulary:
//! - `Keyword(KeywordId)` for reserved words (including the word operators `and`, `or`, `not`)
//! - `Operator(OperatorId)` for symbol operators
//! - `Punctuation(PunctuationId)` for punctuation tokens
//!
//! ## Notes
//! - The token keeps its lexeme as text. For strings it is the unescaped contents, for comments the trimmed body and
//!   for symbols the name without the leading `#`.
//! - Use `crate::token_helpers` for ergonomic token matching at call sites.

use std::fmt;

use lingo_core::lang::keywords::{self, KeywordId};
use lingo_core::lang::operators::{self, OperatorId};
use lingo_core::lang::punctuation::{self, PunctuationId};

// ============================================================================
// TOKEN TYPES
// ============================================================================

/// Kind of token produced by the lexer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // ========== Keyword / operator / punctuation (ID-based) ==========
    Keyword(KeywordId),
    Operator(OperatorId),
    Punctuation(PunctuationId),

    // ========== Identifiers and Literals ==========
    Identifier,
    /// Decimal, float or `$`-prefixed hex literal; the parser interprets the lexeme.
    Number,
    String,
    /// `#name`, or any character the lexer does not otherwise recognise.
    Symbol,

    // ========== Trivia ==========
    Comment,

    // ========== Special ==========
    Eof,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Keyword(id) => write!(f, "'{}'", keywords::as_str(*id)),
            TokenKind::Operator(id) => write!(f, "'{}'", operators::as_str(*id)),
            TokenKind::Punctuation(id) => write!(f, "'{}'", punctuation::as_str(*id)),
            TokenKind::Identifier => f.write_str("identifier"),
            TokenKind::Number => f.write_str("number"),
            TokenKind::String => f.write_str("string"),
            TokenKind::Symbol => f.write_str("symbol"),
            TokenKind::Comment => f.write_str("comment"),
            TokenKind::Eof => f.write_str("end of input"),
        }
    }
}

/// A token with its kind, text and 1-based line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub lexeme: String,
    pub line: usize,
}

impl Token {
    /// Construct a new token.
    pub fn new(kind: TokenKind, lexeme: impl Into<String>, line: usize) -> Self {
        Self {
            kind,
            lexeme: lexeme.into(),
            line,
        }
    }

    /// End-of-input marker at `line`.
    pub fn eof(line: usize) -> Self {
        Self::new(TokenKind::Eof, String::new(), line)
    }
}

/// Resolve an identifier spelling to a keyword id, if reserved.
pub fn keyword_id(name: &str) -> Option<KeywordId> {
    keywords::from_str(name)
}
