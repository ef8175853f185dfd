//! Small helper APIs for working with `Token` / `TokenKind`.
//!
//! These helpers exist to reduce repetitive `matches!(...)` at call sites and to make it easy
//! to work with ID-based tokens.

use crate::lexer::{Token, TokenKind};
use lingo_core::lang::keywords::KeywordId;
use lingo_core::lang::operators::OperatorId;
use lingo_core::lang::punctuation::PunctuationId;

impl TokenKind {
    /// Return the keyword id, if this is a keyword token.
    pub fn keyword_id(&self) -> Option<KeywordId> {
        match self {
            TokenKind::Keyword(id) => Some(*id),
            _ => None,
        }
    }

    /// Return `true` if this is the given keyword.
    pub fn is_keyword(&self, id: KeywordId) -> bool {
        matches!(self, TokenKind::Keyword(k) if *k == id)
    }

    /// Return `true` if this is the given operator.
    pub fn is_operator(&self, id: OperatorId) -> bool {
        matches!(self, TokenKind::Operator(o) if *o == id)
    }

    /// Return `true` if this is the given punctuation.
    pub fn is_punctuation(&self, id: PunctuationId) -> bool {
        matches!(self, TokenKind::Punctuation(p) if *p == id)
    }

    /// Binary opcode this token introduces, if any.
    ///
    /// ## Notes
    /// - `and`/`or` are keyword tokens but still map to their opcode.
    pub fn binary_operator(&self) -> Option<OperatorId> {
        match self {
            TokenKind::Operator(id) => Some(*id),
            TokenKind::Keyword(KeywordId::And) => Some(OperatorId::And),
            TokenKind::Keyword(KeywordId::Or) => Some(OperatorId::Or),
            _ => None,
        }
    }

    /// Return `true` for tokens that close a block (`end`, `else`, end of input).
    pub fn ends_block(&self) -> bool {
        matches!(
            self,
            TokenKind::Keyword(KeywordId::End) | TokenKind::Keyword(KeywordId::Else) | TokenKind::Eof
        )
    }
}

impl Token {
    /// Convenience wrapper for `self.kind.is_keyword(id)`.
    pub fn is_keyword(&self, id: KeywordId) -> bool {
        self.kind.is_keyword(id)
    }

    /// Convenience wrapper for `self.kind.is_punctuation(id)`.
    pub fn is_punctuation(&self, id: PunctuationId) -> bool {
        self.kind.is_punctuation(id)
    }

    /// Return `true` if this is an identifier spelled `word` (ASCII case-insensitive).
    pub fn is_word(&self, word: &str) -> bool {
        self.kind == TokenKind::Identifier && self.lexeme.eq_ignore_ascii_case(word)
    }
}
