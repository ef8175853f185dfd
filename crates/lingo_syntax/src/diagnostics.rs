//! Parse diagnostics for the Lingo front end.
//!
//! The lexer never fails, so every diagnostic here comes from the parser's hard-failure path: a structural token
//! (`end`, `then`, a closing bracket, ...) that is required at the current position but missing. Recoverable
//! problems are not errors at all; they become `Error` nodes in the tree.

use miette::Diagnostic;
use thiserror::Error;

use crate::lexer::{Token, TokenKind};

/// A hard parse failure. Parsing stops at the first one.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum ParseError {
    /// A specific token kind was required.
    #[error("Expected token {expected}, but got {found} at line {line}")]
    #[diagnostic(
        code(lingo::parse::unexpected_token),
        help("check for a missing `end`, `then` or closing bracket near this line")
    )]
    UnexpectedToken {
        expected: TokenKind,
        found: TokenKind,
        lexeme: String,
        line: usize,
    },

    /// One of several token kinds was required.
    #[error("Expected token {expected}, but got {found} at line {line}")]
    #[diagnostic(code(lingo::parse::unexpected_token))]
    UnexpectedTokenOneOf {
        expected: &'static str,
        found: TokenKind,
        lexeme: String,
        line: usize,
    },

    /// Statements or expressions nested past the parser's depth limit.
    #[error("Nesting deeper than {limit} levels at {found} on line {line}")]
    #[diagnostic(
        code(lingo::parse::nesting_too_deep),
        help("split deeply nested expressions or statements into smaller pieces")
    )]
    NestingTooDeep {
        limit: usize,
        found: TokenKind,
        lexeme: String,
        line: usize,
    },
}

impl ParseError {
    pub(crate) fn unexpected(expected: TokenKind, found: &Token) -> Self {
        ParseError::UnexpectedToken {
            expected,
            found: found.kind,
            lexeme: found.lexeme.clone(),
            line: found.line,
        }
    }

    pub(crate) fn unexpected_one_of(expected: &'static str, found: &Token) -> Self {
        ParseError::UnexpectedTokenOneOf {
            expected,
            found: found.kind,
            lexeme: found.lexeme.clone(),
            line: found.line,
        }
    }

    pub(crate) fn nesting_too_deep(limit: usize, found: &Token) -> Self {
        ParseError::NestingTooDeep {
            limit,
            found: found.kind,
            lexeme: found.lexeme.clone(),
            line: found.line,
        }
    }

    /// 1-based line of the offending token.
    pub fn line(&self) -> usize {
        match self {
            ParseError::UnexpectedToken { line, .. }
            | ParseError::UnexpectedTokenOneOf { line, .. }
            | ParseError::NestingTooDeep { line, .. } => *line,
        }
    }

    /// Kind of the offending token.
    pub fn found(&self) -> TokenKind {
        match self {
            ParseError::UnexpectedToken { found, .. }
            | ParseError::UnexpectedTokenOneOf { found, .. }
            | ParseError::NestingTooDeep { found, .. } => *found,
        }
    }

    /// The same error with its line moved down by `offset` lines.
    pub fn with_line_offset(mut self, offset: usize) -> Self {
        match &mut self {
            ParseError::UnexpectedToken { line, .. }
            | ParseError::UnexpectedTokenOneOf { line, .. }
            | ParseError::NestingTooDeep { line, .. } => *line += offset,
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lingo_core::lang::keywords::KeywordId;
    use lingo_core::lang::punctuation::PunctuationId;

    #[test]
    fn message_names_both_kinds_and_line() {
        let found = Token::new(TokenKind::Identifier, "x", 7);
        let err = ParseError::unexpected(TokenKind::Keyword(KeywordId::Then), &found);
        assert_eq!(err.to_string(), "Expected token 'then', but got identifier at line 7");
        assert_eq!(err.line(), 7);
        assert_eq!(err.found(), TokenKind::Identifier);
    }

    #[test]
    fn one_of_message() {
        let err = ParseError::unexpected_one_of("'=' or 'in'", &Token::eof(2));
        assert_eq!(err.to_string(), "Expected token '=' or 'in', but got end of input at line 2");
    }

    #[test]
    fn diagnostic_code_is_namespaced() {
        let err = ParseError::unexpected(TokenKind::Eof, &Token::new(TokenKind::Number, "1", 1));
        let code = err.code().map(|c| c.to_string());
        assert_eq!(code.as_deref(), Some("lingo::parse::unexpected_token"));
    }

    #[test]
    fn line_offset_applies_to_every_variant() {
        let token = Token::new(TokenKind::Punctuation(PunctuationId::LParen), "(", 3);
        let err = ParseError::nesting_too_deep(8, &token).with_line_offset(10);
        assert_eq!(err.line(), 13);
        assert_eq!(err.to_string(), "Nesting deeper than 8 levels at '(' on line 13");

        let err = ParseError::unexpected_one_of("'=' or 'in'", &Token::eof(2)).with_line_offset(1);
        assert_eq!(err.line(), 3);
    }
}
