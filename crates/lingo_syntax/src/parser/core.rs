/// Parser core type and entrypoint.
///
/// This chunk defines the [`Parser`] type and its top-level `parse()` loop.
///
/// ## Notes
/// - This file is `include!`'d into `crate::parser` to keep all parser methods in a
///   single module while avoiding a single "god file".

/// Deepest statement or expression nesting the parser accepts before failing.
const MAX_NESTING_DEPTH: usize = 200;

/// Parser state.
///
/// ## Notes
/// - A parser owns its lexer and the current token, and is consumed by [`Parser::parse`]; every source unit gets a
///   fresh instance, so nothing is shared between parses.
/// - `depth` counts the statements and primary expressions currently being parsed; see [`MAX_NESTING_DEPTH`].
pub struct Parser<'a> {
    lexer: Lexer<'a>,
    current: Token,
    depth: usize,
}

impl<'a> Parser<'a> {
    /// Create a parser over `source` and prime the first token.
    pub fn new(source: &'a str) -> Self {
        let mut lexer = Lexer::new(source);
        let current = lexer.next_token();
        Self {
            lexer,
            current,
            depth: 0,
        }
    }

    /// Parse every top-level construct (handlers, comments, bare statements) into a root [`Block`].
    ///
    /// ## Errors
    /// Returns the first [`ParseError`]; there is no resumption after a hard failure.
    pub fn parse(mut self) -> Result<Block, ParseError> {
        let mut children = Vec::new();
        while !self.check(TokenKind::Eof) {
            if self.check_keyword(KeywordId::On) {
                children.push(self.handler()?);
            } else {
                children.push(self.statement()?);
            }
        }
        Ok(Block::new(children))
    }
}
