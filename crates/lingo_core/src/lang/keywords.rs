//! Define the reserved keyword vocabulary for the Lingo language.
//!
//! This module is the single source of truth for reserved words: a stable identifier ([`KeywordId`]) plus a const
//! metadata table ([`KEYWORDS`]) that records canonical spellings, aliases and categories.
//!
//! ## Notes
//! - Lookup via [`from_str`] is **case-insensitive**: `END`, `End` and `end` all resolve to [`KeywordId::End`].
//! - `loop` is accepted as an alias of `repeat`.
//! - `and`, `or` and `not` are reserved words that also act as operators. If you need operator associativity, use
//!   [`crate::lang::operators`].
//!
//! ## Examples
//! ```rust
//! use lingo_core::lang::keywords::{self, KeywordId};
//!
//! assert_eq!(keywords::from_str("REPEAT"), Some(KeywordId::Repeat));
//! assert_eq!(keywords::from_str("loop"), Some(KeywordId::Repeat)); // alias
//! assert_eq!(keywords::as_str(KeywordId::Repeat), "repeat");
//! ```

/// Stable identifier for every reserved keyword.
///
/// ## Notes
/// - Variant order matches the order of [`KEYWORDS`]; [`info_for`] relies on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeywordId {
    // Control flow
    If,
    Then,
    Else,
    End,
    Repeat,
    While,
    Until,
    For,
    In,
    To,
    With,
    Exit,
    Next,
    Forever,
    Times,
    Case,
    Otherwise,
    Return,

    // Declarations
    Global,
    On,
    Property,
    Instance,
    Function,
    Handler,

    // Statements
    Put,
    Into,
    Tell,

    // References
    Of,
    The,
    Me,
    My,

    // Word operators
    And,
    Or,
    Not,
}

/// Coarse grouping used by diagnostics and tooling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeywordCategory {
    ControlFlow,
    Declaration,
    Statement,
    Reference,
    Operator,
}

/// Metadata for a reserved keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeywordInfo {
    pub id: KeywordId,
    /// Lowercase canonical spelling.
    pub canonical: &'static str,
    /// Alternate spellings that resolve to the same keyword.
    pub aliases: &'static [&'static str],
    pub category: KeywordCategory,
}

/// Registry of all reserved keywords, in [`KeywordId`] declaration order.
pub const KEYWORDS: &[KeywordInfo] = &[
    // Control flow
    info(KeywordId::If, "if", &[], KeywordCategory::ControlFlow),
    info(KeywordId::Then, "then", &[], KeywordCategory::ControlFlow),
    info(KeywordId::Else, "else", &[], KeywordCategory::ControlFlow),
    info(KeywordId::End, "end", &[], KeywordCategory::ControlFlow),
    info(KeywordId::Repeat, "repeat", &["loop"], KeywordCategory::ControlFlow),
    info(KeywordId::While, "while", &[], KeywordCategory::ControlFlow),
    info(KeywordId::Until, "until", &[], KeywordCategory::ControlFlow),
    info(KeywordId::For, "for", &[], KeywordCategory::ControlFlow),
    info(KeywordId::In, "in", &[], KeywordCategory::ControlFlow),
    info(KeywordId::To, "to", &[], KeywordCategory::ControlFlow),
    info(KeywordId::With, "with", &[], KeywordCategory::ControlFlow),
    info(KeywordId::Exit, "exit", &[], KeywordCategory::ControlFlow),
    info(KeywordId::Next, "next", &[], KeywordCategory::ControlFlow),
    info(KeywordId::Forever, "forever", &[], KeywordCategory::ControlFlow),
    info(KeywordId::Times, "times", &[], KeywordCategory::ControlFlow),
    info(KeywordId::Case, "case", &[], KeywordCategory::ControlFlow),
    info(KeywordId::Otherwise, "otherwise", &[], KeywordCategory::ControlFlow),
    info(KeywordId::Return, "return", &[], KeywordCategory::ControlFlow),
    // Declarations
    info(KeywordId::Global, "global", &[], KeywordCategory::Declaration),
    info(KeywordId::On, "on", &[], KeywordCategory::Declaration),
    info(KeywordId::Property, "property", &[], KeywordCategory::Declaration),
    info(KeywordId::Instance, "instance", &[], KeywordCategory::Declaration),
    info(KeywordId::Function, "function", &[], KeywordCategory::Declaration),
    info(KeywordId::Handler, "handler", &[], KeywordCategory::Declaration),
    // Statements
    info(KeywordId::Put, "put", &[], KeywordCategory::Statement),
    info(KeywordId::Into, "into", &[], KeywordCategory::Statement),
    info(KeywordId::Tell, "tell", &[], KeywordCategory::Statement),
    // References
    info(KeywordId::Of, "of", &[], KeywordCategory::Reference),
    info(KeywordId::The, "the", &[], KeywordCategory::Reference),
    info(KeywordId::Me, "me", &[], KeywordCategory::Reference),
    info(KeywordId::My, "my", &[], KeywordCategory::Reference),
    // Word operators
    info(KeywordId::And, "and", &[], KeywordCategory::Operator),
    info(KeywordId::Or, "or", &[], KeywordCategory::Operator),
    info(KeywordId::Not, "not", &[], KeywordCategory::Operator),
];

/// Canonical spelling.
///
/// ## Parameters
/// - `id`: Keyword identifier.
///
/// ## Returns
/// - The lowercase canonical spelling for `id`.
pub fn as_str(id: KeywordId) -> &'static str {
    info_for(id).canonical
}

/// Aliases.
pub fn aliases(id: KeywordId) -> &'static [&'static str] {
    info_for(id).aliases
}

/// Category.
pub fn category(id: KeywordId) -> KeywordCategory {
    info_for(id).category
}

/// Full metadata.
///
/// ## Returns
/// - The associated [`KeywordInfo`] from [`KEYWORDS`].
pub fn info_for(id: KeywordId) -> &'static KeywordInfo {
    &KEYWORDS[id as usize]
}

/// Lookup by spelling (canonical or alias), ignoring ASCII case.
///
/// ## Parameters
/// - `s`: Candidate keyword spelling.
///
/// ## Returns
/// - `Some(KeywordId)` if the spelling matches this registry.
/// - `None` otherwise; the lexer then classifies the word as an identifier.
pub fn from_str(s: &str) -> Option<KeywordId> {
    KEYWORDS
        .iter()
        .find(|k| k.canonical.eq_ignore_ascii_case(s) || k.aliases.iter().any(|a| a.eq_ignore_ascii_case(s)))
        .map(|k| k.id)
}

// --- helpers -----------------------------------------------------------------

const fn info(
    id: KeywordId,
    canonical: &'static str,
    aliases: &'static [&'static str],
    category: KeywordCategory,
) -> KeywordInfo {
    KeywordInfo {
        id,
        canonical,
        aliases,
        category,
    }
}
