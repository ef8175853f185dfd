//! Numeric literal scanning.
//!
//! Number tokens keep their source text. The parser decides between integer, float and hex by the lexeme shape.

use super::{Lexer, Token, TokenKind};

impl Lexer<'_> {
    /// Scan a number whose first digit has been consumed.
    ///
    /// ## Notes
    /// - A `$` right after the first digit switches to hex digits, and the `$` stays in the lexeme.
    /// - A `.` is only part of the number when a digit follows, so `4.x` lexes as `4`, `.`, `x`.
    pub(super) fn scan_number(&mut self) -> Token {
        if self.match_char('$') {
            self.advance_while(|c| c.is_ascii_hexdigit());
            return self.token(TokenKind::Number);
        }

        self.advance_while(|c| c.is_ascii_digit());
        if self.peek() == Some('.') && self.peek_next().is_some_and(|c| c.is_ascii_digit()) {
            self.advance();
            self.advance_while(|c| c.is_ascii_digit());
        }
        self.token(TokenKind::Number)
    }

    /// Scan a `$FF` hex literal whose `$` has been consumed.
    pub(super) fn scan_hex(&mut self) -> Token {
        self.advance_while(|c| c.is_ascii_hexdigit());
        self.token(TokenKind::Number)
    }
}
