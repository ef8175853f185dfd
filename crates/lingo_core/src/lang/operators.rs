//! Binary operator vocabulary.
//!
//! This module defines the binary opcode set (symbol operators like `+` and word operators like `and`) together
//! with associativity metadata.
//!
//! ## Notes
//! - Lingo has no precedence tiers. Every symbol operator belongs to one flat, left-associative class and is reduced
//!   against the already-built left operand as soon as it is seen, so `1 + 2 * 3` means `(1 + 2) * 3`.
//! - `and`, `or` and `=` parse their right-hand side as a whole new expression, which makes them right-associative.
//!   Their entries have [`Associativity::Right`].
//! - [`OPERATORS`] is ordered the way the parser checks operators.
//! - Lookup via [`from_str`] ignores ASCII case (relevant for `and`/`or`).
//!
//! ## Examples
//! ```rust
//! use lingo_core::lang::operators::{self, Associativity, OperatorId};
//!
//! assert_eq!(operators::from_str("<>"), Some(OperatorId::NotEquals));
//! assert_eq!(operators::info_for(OperatorId::Or).associativity, Associativity::Right);
//! ```

/// Define how operators associate when chained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Associativity {
    Left,
    Right,
}

/// Stable identifier for every binary opcode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperatorId {
    Add,
    Subtract,
    Multiply,
    Divide,
    Concat,
    NotEquals,
    GreaterThan,
    GreaterOrEqual,
    LessThan,
    LessOrEqual,
    And,
    Or,
    Equals,
}

/// Metadata for one binary opcode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OperatorInfo {
    pub id: OperatorId,
    pub spelling: &'static str,
    pub associativity: Associativity,
    /// `true` when the operator is spelled with a reserved word (`and`, `or`).
    pub is_keyword_spelling: bool,
}

/// Registry of binary opcodes in parser-check order.
pub const OPERATORS: &[OperatorInfo] = &[
    op(OperatorId::Add, "+", Associativity::Left, false),
    op(OperatorId::Subtract, "-", Associativity::Left, false),
    op(OperatorId::Multiply, "*", Associativity::Left, false),
    op(OperatorId::Divide, "/", Associativity::Left, false),
    op(OperatorId::Concat, "&", Associativity::Left, false),
    op(OperatorId::NotEquals, "<>", Associativity::Left, false),
    op(OperatorId::GreaterThan, ">", Associativity::Left, false),
    op(OperatorId::GreaterOrEqual, ">=", Associativity::Left, false),
    op(OperatorId::LessThan, "<", Associativity::Left, false),
    op(OperatorId::LessOrEqual, "<=", Associativity::Left, false),
    op(OperatorId::And, "and", Associativity::Right, true),
    op(OperatorId::Or, "or", Associativity::Right, true),
    op(OperatorId::Equals, "=", Associativity::Right, false),
];

/// Full metadata.
pub fn info_for(id: OperatorId) -> &'static OperatorInfo {
    &OPERATORS[id as usize]
}

/// Source spelling of an opcode.
pub fn as_str(id: OperatorId) -> &'static str {
    info_for(id).spelling
}

/// Whether `id` belongs to the flat left-associative class.
pub fn is_flat(id: OperatorId) -> bool {
    info_for(id).associativity == Associativity::Left
}

/// Lookup by spelling, ignoring ASCII case.
///
/// ## Returns
/// - `Some(OperatorId)` for a known spelling, `None` otherwise.
pub fn from_str(spelling: &str) -> Option<OperatorId> {
    OPERATORS
        .iter()
        .find(|o| o.spelling.eq_ignore_ascii_case(spelling))
        .map(|o| o.id)
}

// --- helpers -----------------------------------------------------------------

const fn op(id: OperatorId, spelling: &'static str, associativity: Associativity, is_keyword_spelling: bool) -> OperatorInfo {
    OperatorInfo {
        id,
        spelling,
        associativity,
        is_keyword_spelling,
    }
}
