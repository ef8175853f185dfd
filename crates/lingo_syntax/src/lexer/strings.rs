//! String, symbol and comment scanning.

use super::{Lexer, Token, TokenKind, is_ident_continue};

impl Lexer<'_> {
    /// Scan a string literal whose opening quote has been consumed.
    ///
    /// ## Notes
    /// - `\"`, `\\`, `\n`, `\r` and `\t` are translated; any other escaped character is kept without the backslash.
    /// - An unterminated string runs to the end of input.
    /// - The token reports the line the string starts on.
    pub(super) fn scan_string(&mut self) -> Token {
        let line = self.line;
        let mut value = String::new();

        while let Some(c) = self.advance() {
            match c {
                '"' => break,
                '\\' => {
                    let Some(next) = self.advance() else {
                        break;
                    };
                    value.push(match next {
                        'n' => '\n',
                        'r' => '\r',
                        't' => '\t',
                        other => other,
                    });
                    if next == '\n' {
                        self.line += 1;
                    }
                }
                '\n' => {
                    self.line += 1;
                    value.push(c);
                }
                _ => value.push(c),
            }
        }

        Token::new(TokenKind::String, value, line)
    }

    /// Scan a `#symbol` whose `#` has been consumed; the lexeme omits the `#`.
    pub(super) fn scan_symbol(&mut self) -> Token {
        self.advance_while(is_ident_continue);
        Token::new(TokenKind::Symbol, &self.source[self.start + 1..self.pos], self.line)
    }

    /// Scan a `--` comment whose first `-` has been consumed; the lexeme is the trimmed body.
    pub(super) fn scan_comment(&mut self) -> Token {
        self.advance();
        self.advance_while(|c| c != '\n');
        Token::new(TokenKind::Comment, self.source[self.start + 2..self.pos].trim(), self.line)
    }
}
