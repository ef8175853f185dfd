//! Punctuation vocabulary.
//!
//! Punctuation tokens carry no operator semantics: they delimit calls, lists, property-list pairs, ranges and
//! member access.
//!
//! ## Examples
//! ```rust
//! use lingo_core::lang::punctuation::{self, PunctuationId};
//!
//! assert_eq!(punctuation::from_str(".."), Some(PunctuationId::Range));
//! assert_eq!(punctuation::as_str(PunctuationId::Colon), ":");
//! ```

/// Stable identifier for every punctuation token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PunctuationId {
    LParen,
    RParen,
    LBracket,
    RBracket,
    Comma,
    Dot,
    Range,
    Colon,
    Semicolon,
}

/// Metadata for one punctuation token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PunctuationInfo {
    pub id: PunctuationId,
    pub spelling: &'static str,
}

/// Registry of all punctuation tokens, in [`PunctuationId`] declaration order.
pub const PUNCTUATION: &[PunctuationInfo] = &[
    punct(PunctuationId::LParen, "("),
    punct(PunctuationId::RParen, ")"),
    punct(PunctuationId::LBracket, "["),
    punct(PunctuationId::RBracket, "]"),
    punct(PunctuationId::Comma, ","),
    punct(PunctuationId::Dot, "."),
    punct(PunctuationId::Range, ".."),
    punct(PunctuationId::Colon, ":"),
    punct(PunctuationId::Semicolon, ";"),
];

pub fn info_for(id: PunctuationId) -> &'static PunctuationInfo {
    &PUNCTUATION[id as usize]
}

pub fn as_str(id: PunctuationId) -> &'static str {
    info_for(id).spelling
}

pub fn from_str(s: &str) -> Option<PunctuationId> {
    PUNCTUATION.iter().find(|p| p.spelling == s).map(|p| p.id)
}

const fn punct(id: PunctuationId, spelling: &'static str) -> PunctuationInfo {
    PunctuationInfo { id, spelling }
}
