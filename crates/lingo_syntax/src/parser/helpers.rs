/// Token-stream helpers.
///
/// This chunk contains the low-level primitives used throughout parsing:
/// - Consuming tokens (`advance`) and two-token lookahead (`peek_next`)
/// - Matching / expecting keywords, operators, and punctuation
/// - Line-sensitivity checks (`on_line`)
/// - Soft recovery (`error_node`)
impl<'a> Parser<'a> {
    // ========================================================================
    // Consuming
    // ========================================================================

    /// Move to the next token and return the one just consumed.
    fn advance(&mut self) -> Token {
        let next = self.lexer.next_token();
        std::mem::replace(&mut self.current, next)
    }

    /// Return the token after the current one without consuming anything.
    fn peek_next(&self) -> Token {
        self.lexer.clone().next_token()
    }

    // ========================================================================
    // Checking
    // ========================================================================

    fn check(&self, kind: TokenKind) -> bool {
        self.current.kind == kind
    }

    fn check_keyword(&self, id: KeywordId) -> bool {
        self.current.kind.is_keyword(id)
    }

    fn check_punct(&self, id: PunctuationId) -> bool {
        self.current.kind.is_punctuation(id)
    }

    fn check_op(&self, id: OperatorId) -> bool {
        self.current.kind.is_operator(id)
    }

    /// Return `true` if the current token is real input on `line` (not `Eof`).
    fn on_line(&self, line: usize) -> bool {
        self.current.line == line && !self.check(TokenKind::Eof)
    }

    /// Return `true` if the current token is on `line` and can begin a statement.
    fn statement_follows_on(&self, line: usize) -> bool {
        self.on_line(line) && !self.check(TokenKind::Comment)
    }

    // ========================================================================
    // Matching
    // ========================================================================

    fn match_keyword(&mut self, id: KeywordId) -> bool {
        if self.check_keyword(id) {
            self.advance();
            true
        } else {
            false
        }
    }

    fn match_punct(&mut self, id: PunctuationId) -> bool {
        if self.check_punct(id) {
            self.advance();
            true
        } else {
            false
        }
    }

    fn match_op(&mut self, id: OperatorId) -> bool {
        if self.check_op(id) {
            self.advance();
            true
        } else {
            false
        }
    }

    // ========================================================================
    // Expecting
    // ========================================================================

    fn expect(&mut self, kind: TokenKind) -> Result<Token, ParseError> {
        if self.check(kind) {
            Ok(self.advance())
        } else {
            Err(ParseError::unexpected(kind, &self.current))
        }
    }

    fn expect_keyword(&mut self, id: KeywordId) -> Result<Token, ParseError> {
        self.expect(TokenKind::Keyword(id))
    }

    fn expect_punct(&mut self, id: PunctuationId) -> Result<Token, ParseError> {
        self.expect(TokenKind::Punctuation(id))
    }

    fn expect_identifier(&mut self) -> Result<Token, ParseError> {
        self.expect(TokenKind::Identifier)
    }

    /// Expect `end <closer>`, e.g. `end repeat`.
    fn expect_end(&mut self, closer: KeywordId) -> Result<(), ParseError> {
        self.expect_keyword(KeywordId::End)?;
        self.expect_keyword(closer)?;
        Ok(())
    }

    /// Expect an identifier spelled `word` (case-insensitive).
    fn expect_word(&mut self, word: &'static str) -> Result<Token, ParseError> {
        if self.current.is_word(word) {
            Ok(self.advance())
        } else {
            Err(ParseError::unexpected_one_of(word, &self.current))
        }
    }

    // ========================================================================
    // Recovery
    // ========================================================================

    /// Consume exactly one token and stand an [`ErrorNode`] in for it.
    /// Run `parse` one nesting level deeper.
    ///
    /// ## Errors
    /// Fails with [`ParseError::NestingTooDeep`] at [`MAX_NESTING_DEPTH`] instead of exhausting the stack.
    fn nested<T>(&mut self, parse: impl FnOnce(&mut Self) -> Result<T, ParseError>) -> Result<T, ParseError> {
        if self.depth >= MAX_NESTING_DEPTH {
            return Err(ParseError::nesting_too_deep(MAX_NESTING_DEPTH, &self.current));
        }
        self.depth += 1;
        let result = parse(self);
        self.depth -= 1;
        result
    }

    fn error_node(&mut self) -> Node {
        let token = self.advance();
        tracing::debug!(lexeme = %token.lexeme, line = token.line, kind = %token.kind, "recovering with error node");
        Node::Error(ErrorNode {
            lexeme: token.lexeme,
            line: token.line,
        })
    }
}

/// Shape a call's argument list: nothing is an empty block, one argument stands alone, more become an `ArgList`.
fn call_arguments(mut args: Vec<Node>) -> Node {
    match args.len() {
        0 => Node::Block(Block::default()),
        1 => args.remove(0),
        _ => Node::Literal(Datum::ArgList(args)),
    }
}
