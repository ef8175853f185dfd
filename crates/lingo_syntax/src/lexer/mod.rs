//! Lexer for the Lingo scripting language.
//!
//! Handles tokenization including:
//! - Case-insensitive keywords (`if`, `REPEAT`, `End`, ...)
//! - Identifiers, `#symbols` and `"strings"` with backslash escapes
//! - Decimal, float and `$`-prefixed hexadecimal numbers
//! - `--` line comments, kept as tokens so formatters can preserve them
//! - Operators and punctuation (`<>`, `<=`, `..`, `&`, ...)
//!
//! ## Notes
//! - The lexer is pull-based: [`Lexer::next_token`] yields one token per call and keeps returning `Eof` once the
//!   input is exhausted.
//! - The lexer never fails. A character it does not recognise becomes a single-character `Symbol` token and the
//!   parser decides what to do with it.
//!
//! ## Module Structure
//!
//! - `tokens` - Token types (TokenKind, Token)
//! - `strings` - String, symbol and comment scanning
//! - `numbers` - Numeric literal scanning

mod numbers;
mod strings;
pub mod tokens;

pub use tokens::{Token, TokenKind, keyword_id};

use lingo_core::lang::operators::OperatorId;
use lingo_core::lang::punctuation::PunctuationId;

/// Lexer for Lingo source code.
///
/// ## Notes
/// - Cloning a lexer is cheap (a borrowed source plus a cursor); the parser clones it to look two tokens ahead.
#[derive(Debug, Clone)]
pub struct Lexer<'a> {
    source: &'a str,
    /// Byte offset of the next unread character.
    pos: usize,
    /// Byte offset where the token being scanned starts.
    start: usize,
    line: usize,
    finished: bool,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer for the given source code.
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            pos: 0,
            start: 0,
            line: 1,
            finished: false,
        }
    }

    /// Current 1-based line of the cursor.
    pub fn line(&self) -> usize {
        self.line
    }

    /// Scan and return the next token.
    ///
    /// ## Returns
    /// - The next token, or an `Eof` token with an empty lexeme at the end of input. Calls after `Eof` keep returning
    ///   `Eof`.
    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace();
        self.start = self.pos;

        let Some(c) = self.advance() else {
            return Token::eof(self.line);
        };

        match c {
            '"' => self.scan_string(),
            '#' => self.scan_symbol(),
            '(' => self.punct(PunctuationId::LParen),
            ')' => self.punct(PunctuationId::RParen),
            '[' => self.punct(PunctuationId::LBracket),
            ']' => self.punct(PunctuationId::RBracket),
            ',' => self.punct(PunctuationId::Comma),
            ':' => self.punct(PunctuationId::Colon),
            ';' => self.punct(PunctuationId::Semicolon),
            '.' => {
                if self.match_char('.') {
                    self.punct(PunctuationId::Range)
                } else {
                    self.punct(PunctuationId::Dot)
                }
            }
            '-' => {
                if self.peek() == Some('-') {
                    self.scan_comment()
                } else {
                    self.op(OperatorId::Subtract)
                }
            }
            '+' => self.op(OperatorId::Add),
            '*' => self.op(OperatorId::Multiply),
            '/' => self.op(OperatorId::Divide),
            '&' => self.op(OperatorId::Concat),
            '=' => self.op(OperatorId::Equals),
            '<' => {
                if self.match_char('=') {
                    self.op(OperatorId::LessOrEqual)
                } else if self.match_char('>') {
                    self.op(OperatorId::NotEquals)
                } else {
                    self.op(OperatorId::LessThan)
                }
            }
            '>' => {
                if self.match_char('=') {
                    self.op(OperatorId::GreaterOrEqual)
                } else {
                    self.op(OperatorId::GreaterThan)
                }
            }
            '$' if self.peek().is_some_and(|n| n.is_ascii_hexdigit()) => self.scan_hex(),
            _ if c.is_ascii_digit() => self.scan_number(),
            _ if is_ident_start(c) => self.scan_identifier(),
            _ => self.token(TokenKind::Symbol),
        }
    }

    // ========================================================================
    // Core character handling
    // ========================================================================

    fn peek(&self) -> Option<char> {
        self.source[self.pos..].chars().next()
    }

    fn peek_next(&self) -> Option<char> {
        let mut chars = self.source[self.pos..].chars();
        chars.next();
        chars.next()
    }

    fn advance(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    fn match_char(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.advance();
            true
        } else {
            false
        }
    }

    fn advance_while(&mut self, pred: impl Fn(char) -> bool) {
        while self.peek().is_some_and(&pred) {
            self.advance();
        }
    }

    /// Skip spaces, tabs, carriage returns and newlines, counting lines.
    fn skip_whitespace(&mut self) {
        while let Some(c) = self.peek() {
            match c {
                ' ' | '\t' | '\r' => {}
                '\n' => self.line += 1,
                _ => return,
            }
            self.advance();
        }
    }

    // ========================================================================
    // Token construction
    // ========================================================================

    /// Token whose lexeme is the source text scanned since `start`.
    fn token(&self, kind: TokenKind) -> Token {
        Token::new(kind, &self.source[self.start..self.pos], self.line)
    }

    fn op(&self, id: OperatorId) -> Token {
        self.token(TokenKind::Operator(id))
    }

    fn punct(&self, id: PunctuationId) -> Token {
        self.token(TokenKind::Punctuation(id))
    }

    // ========================================================================
    // Identifier scanning
    // ========================================================================

    fn scan_identifier(&mut self) -> Token {
        self.advance_while(is_ident_continue);
        let spelling = &self.source[self.start..self.pos];
        match keyword_id(spelling) {
            Some(id) => self.token(TokenKind::Keyword(id)),
            None => self.token(TokenKind::Identifier),
        }
    }
}

impl Iterator for Lexer<'_> {
    type Item = Token;

    /// Yield tokens up to and including the first `Eof`, then stop.
    fn next(&mut self) -> Option<Token> {
        if self.finished {
            return None;
        }
        let token = self.next_token();
        self.finished = token.kind == TokenKind::Eof;
        Some(token)
    }
}

// ============================================================================
// Helper functions
// ============================================================================

/// Check if a character can start an identifier.
fn is_ident_start(c: char) -> bool {
    c.is_alphabetic() || c == '_'
}

/// Check if a character can continue an identifier.
fn is_ident_continue(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Convenience function to lex a whole source string.
///
/// ## Returns
/// - Every token in source order; the last one is always `Eof`.
#[tracing::instrument(skip_all, fields(source_len = source.len()))]
pub fn lex(source: &str) -> Vec<Token> {
    Lexer::new(source).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use lingo_core::lang::keywords::KeywordId;

    fn kinds(source: &str) -> Vec<TokenKind> {
        lex(source).into_iter().map(|t| t.kind).collect()
    }

    #[test]
    fn test_put_statement() {
        let tokens = lex("put 1 + 2 into x");
        let expected = [
            TokenKind::Keyword(KeywordId::Put),
            TokenKind::Number,
            TokenKind::Operator(OperatorId::Add),
            TokenKind::Number,
            TokenKind::Keyword(KeywordId::Into),
            TokenKind::Identifier,
            TokenKind::Eof,
        ];
        assert_eq!(tokens.iter().map(|t| t.kind).collect::<Vec<_>>(), expected);
        assert_eq!(tokens[1].lexeme, "1");
        assert_eq!(tokens[5].lexeme, "x");
        assert!(tokens.iter().all(|t| t.line == 1));
        assert_eq!(tokens[6].lexeme, "");
    }

    #[test]
    fn test_keywords_are_case_insensitive() {
        assert_eq!(
            kinds("END If rePeat LOOP"),
            vec![
                TokenKind::Keyword(KeywordId::End),
                TokenKind::Keyword(KeywordId::If),
                TokenKind::Keyword(KeywordId::Repeat),
                TokenKind::Keyword(KeywordId::Repeat),
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_keyword_keeps_source_spelling() {
        let tokens = lex("PUT");
        assert_eq!(tokens[0].kind, TokenKind::Keyword(KeywordId::Put));
        assert_eq!(tokens[0].lexeme, "PUT");
    }

    #[test]
    fn test_hex_literal() {
        let tokens = lex("$FF");
        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0].kind, TokenKind::Number);
        assert_eq!(tokens[0].lexeme, "$FF");
    }

    #[test]
    fn test_float_literal_and_member_dot() {
        let tokens = lex("3.25 x.y 4.");
        assert_eq!(tokens[0].lexeme, "3.25");
        assert_eq!(tokens[2].kind, TokenKind::Punctuation(PunctuationId::Dot));
        assert_eq!(tokens[4].kind, TokenKind::Number);
        assert_eq!(tokens[4].lexeme, "4");
        assert_eq!(tokens[5].kind, TokenKind::Punctuation(PunctuationId::Dot));
    }

    #[test]
    fn test_comment_then_statement() {
        let tokens = lex("-- comment\nput 1");
        assert_eq!(tokens[0].kind, TokenKind::Comment);
        assert_eq!(tokens[0].lexeme, "comment");
        assert_eq!(tokens[0].line, 1);
        assert_eq!(tokens[1].kind, TokenKind::Keyword(KeywordId::Put));
        assert_eq!(tokens[1].line, 2);
        assert_eq!(tokens[2].kind, TokenKind::Number);
        assert_eq!(tokens[3].kind, TokenKind::Eof);
    }

    #[test]
    fn test_minus_is_an_operator() {
        assert_eq!(
            kinds("3 - 1"),
            vec![
                TokenKind::Number,
                TokenKind::Operator(OperatorId::Subtract),
                TokenKind::Number,
                TokenKind::Eof
            ]
        );
        assert_eq!(
            kinds("-1"),
            vec![TokenKind::Operator(OperatorId::Subtract), TokenKind::Number, TokenKind::Eof]
        );
    }

    #[test]
    fn test_comparison_operators() {
        assert_eq!(
            kinds("< <= <> > >= ="),
            vec![
                TokenKind::Operator(OperatorId::LessThan),
                TokenKind::Operator(OperatorId::LessOrEqual),
                TokenKind::Operator(OperatorId::NotEquals),
                TokenKind::Operator(OperatorId::GreaterThan),
                TokenKind::Operator(OperatorId::GreaterOrEqual),
                TokenKind::Operator(OperatorId::Equals),
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_range_punctuation() {
        assert_eq!(
            kinds("a[1..2]"),
            vec![
                TokenKind::Identifier,
                TokenKind::Punctuation(PunctuationId::LBracket),
                TokenKind::Number,
                TokenKind::Punctuation(PunctuationId::Range),
                TokenKind::Number,
                TokenKind::Punctuation(PunctuationId::RBracket),
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_symbol_literal_drops_hash() {
        let tokens = lex("#done");
        assert_eq!(tokens[0].kind, TokenKind::Symbol);
        assert_eq!(tokens[0].lexeme, "done");
    }

    #[test]
    fn test_unknown_character_is_symbol() {
        let tokens = lex("a ? b");
        assert_eq!(tokens[1].kind, TokenKind::Symbol);
        assert_eq!(tokens[1].lexeme, "?");
        assert_eq!(tokens[2].kind, TokenKind::Identifier);
    }

    #[test]
    fn test_line_counting() {
        let tokens = lex("a\n\nb\r\n  c");
        assert_eq!(tokens[0].line, 1);
        assert_eq!(tokens[1].line, 3);
        assert_eq!(tokens[2].line, 4);
        assert_eq!(tokens[3].line, 4);
    }

    #[test]
    fn test_next_token_keeps_returning_eof() {
        let mut lexer = Lexer::new("x");
        assert_eq!(lexer.next_token().kind, TokenKind::Identifier);
        assert_eq!(lexer.next_token().kind, TokenKind::Eof);
        assert_eq!(lexer.next_token().kind, TokenKind::Eof);
    }

    #[test]
    fn test_empty_source() {
        let tokens = lex("");
        assert_eq!(tokens, vec![Token::eof(1)]);
    }

    #[test]
    fn test_identifiers_with_underscores_and_digits() {
        let tokens = lex("_my_var2 gSprite");
        assert_eq!(tokens[0].lexeme, "_my_var2");
        assert_eq!(tokens[1].lexeme, "gSprite");
        assert!(tokens[..2].iter().all(|t| t.kind == TokenKind::Identifier));
    }
}
