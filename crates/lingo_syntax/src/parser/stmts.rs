/// Statement parsing.
///
/// This chunk contains handler definitions and every statement form: calls and assignments (including the
/// `cursor`, `go to` and `sendSprite` pseudo-commands), declarations, `put`, `if`, the `repeat` family, `case`,
/// `exit`/`next` and `return`.
///
/// ## Notes
/// - Several rules are line-sensitive: handler arguments, bareword command arguments, single-line `if`, and the
///   optional parts of `exit`/`next`/`return` only take tokens from the line they started on.
impl<'a> Parser<'a> {
    // ========================================================================
    // Handlers and blocks
    // ========================================================================

    /// Parse `on name arg, ... <body> end [name]`.
    ///
    /// ## Notes
    /// - Arguments are every identifier (or `me`) on the declaration line; commas are skipped.
    /// - A missing `end` at end of input is accepted.
    fn handler(&mut self) -> Result<Node, ParseError> {
        let on = self.expect_keyword(KeywordId::On)?;
        let name = self.expect_identifier()?;

        let mut arguments = Vec::new();
        while self.on_line(name.line) && !self.check(TokenKind::Comment) {
            let token = self.advance();
            if matches!(token.kind, TokenKind::Identifier | TokenKind::Keyword(KeywordId::Me)) {
                arguments.push(token.lexeme);
            }
        }

        let mut children = Vec::new();
        while !self.check_keyword(KeywordId::End) && !self.check(TokenKind::Eof) {
            children.push(self.statement()?);
        }
        if self.check_keyword(KeywordId::End) {
            let end = self.advance();
            if self.on_line(end.line) && self.check(TokenKind::Identifier) {
                self.advance();
            }
        }

        Ok(Node::Handler(HandlerNode {
            name: name.lexeme,
            arguments,
            block: Block::new(children),
            line: on.line,
        }))
    }

    /// Parse statements up to `end`, `else` or end of input (not consumed).
    fn block(&mut self) -> Result<Block, ParseError> {
        let mut children = Vec::new();
        while !self.current.kind.ends_block() {
            children.push(self.statement()?);
        }
        Ok(Block::new(children))
    }

    // ========================================================================
    // Statement dispatch
    // ========================================================================

    fn statement(&mut self) -> Result<Node, ParseError> {
        self.nested(Self::statement_form)
    }

    fn statement_form(&mut self) -> Result<Node, ParseError> {
        match self.current.kind {
            TokenKind::Comment => Ok(Node::Comment(self.advance().lexeme)),
            TokenKind::Identifier | TokenKind::Keyword(KeywordId::Me) => self.call_or_assignment(),
            TokenKind::Keyword(KeywordId::Global) => self.declaration(Node::GlobalDecl),
            TokenKind::Keyword(KeywordId::Property) => self.declaration(Node::PropertyDecl),
            TokenKind::Keyword(KeywordId::Instance) => self.declaration(Node::InstanceDecl),
            TokenKind::Keyword(KeywordId::If) => self.if_statement(),
            TokenKind::Keyword(KeywordId::Put) => self.put_statement(),
            TokenKind::Keyword(KeywordId::Exit) => self.loop_control(Node::Exit, Node::ExitRepeat, Node::ExitRepeatIf),
            TokenKind::Keyword(KeywordId::Next) => self.loop_control(Node::Next, Node::NextRepeat, Node::NextRepeatIf),
            TokenKind::Keyword(KeywordId::Repeat) => self.repeat_statement(),
            TokenKind::Keyword(KeywordId::Return) => self.return_statement(),
            TokenKind::Keyword(KeywordId::Case) => self.case_statement(),
            _ => Ok(self.error_node()),
        }
    }

    /// Parse `global a, b` and friends.
    fn declaration(&mut self, make: fn(Vec<String>) -> Node) -> Result<Node, ParseError> {
        self.advance();
        let mut names = vec![self.expect_identifier()?.lexeme];
        while self.match_punct(PunctuationId::Comma) {
            names.push(self.expect_identifier()?.lexeme);
        }
        Ok(make(names))
    }

    // ========================================================================
    // Calls and assignments
    // ========================================================================

    fn call_or_assignment(&mut self) -> Result<Node, ParseError> {
        if self.check(TokenKind::Identifier) {
            match builtins::pseudo_command(&self.current.lexeme) {
                Some(PseudoCommand::Cursor) => {
                    self.advance();
                    return Ok(Node::Cursor(Box::new(self.expression(true)?)));
                }
                Some(PseudoCommand::Go) => {
                    self.advance();
                    self.match_keyword(KeywordId::To);
                    return Ok(Node::GoTo(Box::new(self.expression(true)?)));
                }
                Some(PseudoCommand::SendSprite) => {
                    self.advance();
                    return Ok(Node::SendSpriteStmt(self.send_sprite()?));
                }
                None => {}
            }
        }

        let line = self.current.line;
        let expr = self.expression(false)?;

        if let Node::Var(method) = &expr {
            if self.check_keyword(KeywordId::The) && self.on_line(line) {
                let method = method.clone();
                return self.the_method_call(method);
            }
        }

        if self.match_op(OperatorId::Equals) {
            let value = self.expression(true)?;
            return Ok(Node::Assignment(Assignment {
                target: Box::new(expr),
                value: Box::new(value),
            }));
        }

        if matches!(expr, Node::Var(_)) {
            let args = if self.starts_command_arguments(line) {
                self.expression_list()?
            } else {
                Vec::new()
            };
            return Ok(Node::Call(Call {
                callee: Box::new(expr),
                arguments: Box::new(call_arguments(args)),
            }));
        }

        Ok(expr)
    }

    /// Return `true` if a bareword command started on `line` is followed by arguments.
    fn starts_command_arguments(&self, line: usize) -> bool {
        self.statement_follows_on(line)
            && !matches!(
                self.current.kind,
                TokenKind::Keyword(KeywordId::End | KeywordId::Else | KeywordId::Return)
            )
    }

    /// Parse `method the prop.sub(args)` after `method`.
    fn the_method_call(&mut self, method: String) -> Result<Node, ParseError> {
        self.advance();
        let prop = self.expect_identifier()?;
        let mut object = Node::The(prop.lexeme);
        while self.match_punct(PunctuationId::Dot) {
            let sub = self.expect_identifier()?;
            object = Node::ObjProp(ObjProp {
                object: Box::new(object),
                property: sub.lexeme,
            });
        }
        self.expect_punct(PunctuationId::LParen)?;
        let args = self.paren_arguments()?;
        Ok(Node::Call(Call {
            callee: Box::new(Node::ObjProp(ObjProp {
                object: Box::new(object),
                property: method,
            })),
            arguments: Box::new(call_arguments(args)),
        }))
    }

    /// Parse `[(] sprite, message {, arg} [)]` after the `sendSprite` word.
    fn send_sprite(&mut self) -> Result<SendSprite, ParseError> {
        let parenthesized = self.match_punct(PunctuationId::LParen);
        let sprite = self.expression(true)?;
        self.expect_punct(PunctuationId::Comma)?;
        let message = self.expression(true)?;
        let mut args = Vec::new();
        while self.match_punct(PunctuationId::Comma) {
            args.push(self.expression(true)?);
        }
        if parenthesized {
            self.expect_punct(PunctuationId::RParen)?;
        }
        Ok(SendSprite {
            sprite: Box::new(sprite),
            message: Box::new(message),
            arguments: (!args.is_empty()).then(|| Box::new(Node::Literal(Datum::ArgList(args)))),
        })
    }

    // ========================================================================
    // put / exit / next / return
    // ========================================================================

    fn put_statement(&mut self) -> Result<Node, ParseError> {
        let put = self.advance();
        let value = self.expression(true)?;

        let put_type = if self.match_keyword(KeywordId::Into) {
            PutType::Into
        } else if self.on_line(put.line) && self.check(TokenKind::Identifier) {
            match builtins::put_placement(&self.current.lexeme) {
                Some(PutPlacement::Before) => PutType::Before,
                Some(PutPlacement::After) => PutType::After,
                None => PutType::Message,
            }
        } else {
            PutType::Message
        };

        let target = match put_type {
            PutType::Message => None,
            PutType::Into => Some(Box::new(self.expression(false)?)),
            PutType::Before | PutType::After => {
                self.advance();
                Some(Box::new(self.expression(false)?))
            }
        };

        Ok(Node::Put(PutStmt {
            value: Box::new(value),
            put_type,
            target,
        }))
    }

    /// Parse `exit`/`next` with optional `repeat` and `repeat if <cond>` on the same line.
    fn loop_control(
        &mut self,
        bare: Node,
        repeat: Node,
        repeat_if: fn(Box<Node>) -> Node,
    ) -> Result<Node, ParseError> {
        let keyword = self.advance();
        if !(self.on_line(keyword.line) && self.match_keyword(KeywordId::Repeat)) {
            return Ok(bare);
        }
        if self.on_line(keyword.line) && self.match_keyword(KeywordId::If) {
            return Ok(repeat_if(Box::new(self.expression(true)?)));
        }
        Ok(repeat)
    }

    fn return_statement(&mut self) -> Result<Node, ParseError> {
        let keyword = self.advance();
        let has_value = self.statement_follows_on(keyword.line)
            && !matches!(
                self.current.kind,
                TokenKind::Keyword(KeywordId::End | KeywordId::Else)
            );
        let value = if has_value {
            Some(Box::new(self.expression(true)?))
        } else {
            None
        };
        Ok(Node::Return(value))
    }

    // ========================================================================
    // if
    // ========================================================================

    /// Parse `if` in its single-line and block forms.
    fn if_statement(&mut self) -> Result<Node, ParseError> {
        self.advance();
        let condition = Box::new(self.expression(true)?);
        let then = self.expect_keyword(KeywordId::Then)?;
        while self.check(TokenKind::Comment) && self.current.line == then.line {
            self.advance();
        }

        if self.statement_follows_on(then.line) {
            return self.single_line_if(condition, then.line);
        }

        let then_block = self.block()?;
        let else_block = if self.check_keyword(KeywordId::Else) {
            let else_token = self.advance();
            if self.check_keyword(KeywordId::If) && self.on_line(else_token.line) {
                Some(self.else_if_chain()?)
            } else {
                Some(self.block()?)
            }
        } else {
            None
        };
        self.expect_end(KeywordId::If)?;

        Ok(Node::If(IfStmt {
            condition,
            then_block,
            else_block,
        }))
    }

    /// Parse the rest of `if cond then stmt [else ...]` once `stmt` is known to share the `then` line.
    fn single_line_if(&mut self, condition: Box<Node>, then_line: usize) -> Result<Node, ParseError> {
        let then_block = Block::single(self.statement()?);

        if !self.check_keyword(KeywordId::Else) {
            self.match_trailing_end_if();
            return Ok(Node::If(IfStmt {
                condition,
                then_block,
                else_block: None,
            }));
        }

        let else_token = self.advance();
        let fully_single_line = else_token.line == then_line;
        let else_block = if self.check_keyword(KeywordId::If) && self.on_line(else_token.line) && !fully_single_line {
            let chain = self.else_if_chain()?;
            self.expect_end(KeywordId::If)?;
            chain
        } else if self.statement_follows_on(else_token.line) {
            let stmt = Block::single(self.statement()?);
            if fully_single_line {
                self.match_trailing_end_if();
            } else {
                self.expect_end(KeywordId::If)?;
            }
            stmt
        } else {
            let block = self.block()?;
            self.expect_end(KeywordId::If)?;
            block
        };

        Ok(Node::If(IfStmt {
            condition,
            then_block,
            else_block: Some(else_block),
        }))
    }

    /// Consume an `end if` that directly follows a single-line `if`, on its own line or a later one.
    fn match_trailing_end_if(&mut self) {
        if self.check_keyword(KeywordId::End) && self.peek_next().is_keyword(KeywordId::If) {
            self.advance();
            self.advance();
        }
    }

    /// Parse `if cond then <block> [else ...]` after an `else` on the same line; does not consume `end if`.
    ///
    /// ## Returns
    /// - A block holding exactly one nested `If`.
    fn else_if_chain(&mut self) -> Result<Block, ParseError> {
        self.advance();
        let condition = Box::new(self.expression(true)?);
        self.expect_keyword(KeywordId::Then)?;
        let then_block = self.block()?;
        let else_block = if self.check_keyword(KeywordId::Else) {
            let else_token = self.advance();
            if self.check_keyword(KeywordId::If) && self.on_line(else_token.line) {
                Some(self.else_if_chain()?)
            } else {
                Some(self.block()?)
            }
        } else {
            None
        };
        Ok(Block::single(Node::If(IfStmt {
            condition,
            then_block,
            else_block,
        })))
    }

    // ========================================================================
    // repeat
    // ========================================================================

    fn repeat_statement(&mut self) -> Result<Node, ParseError> {
        let repeat = self.advance();

        let node = match self.current.kind {
            TokenKind::Keyword(KeywordId::While) => {
                self.advance();
                let condition = Box::new(self.expression(true)?);
                Node::RepeatWhile(RepeatCondition {
                    condition,
                    body: self.block()?,
                })
            }
            TokenKind::Keyword(KeywordId::Until) => {
                self.advance();
                let condition = Box::new(self.expression(true)?);
                Node::RepeatUntil(RepeatCondition {
                    condition,
                    body: self.block()?,
                })
            }
            TokenKind::Keyword(KeywordId::With) => {
                self.advance();
                self.repeat_with()?
            }
            TokenKind::Keyword(KeywordId::Forever) => {
                self.advance();
                Node::RepeatForever(self.block()?)
            }
            _ if self.statement_follows_on(repeat.line) => {
                let count = Box::new(self.expression(true)?);
                self.expect_keyword(KeywordId::Times)?;
                Node::RepeatTimes(RepeatTimes {
                    count,
                    body: self.block()?,
                })
            }
            _ => Node::RepeatForever(self.block()?),
        };

        self.expect_end(KeywordId::Repeat)?;
        Ok(node)
    }

    /// Parse `v = start to end <body>` or `v in list <body>` after `repeat with`.
    fn repeat_with(&mut self) -> Result<Node, ParseError> {
        let variable = self.expect_identifier()?.lexeme;
        if self.match_op(OperatorId::Equals) {
            let start = Box::new(self.expression(true)?);
            self.expect_keyword(KeywordId::To)?;
            let end = Box::new(self.expression(true)?);
            Ok(Node::RepeatWith(RepeatWith {
                variable,
                start,
                end,
                body: self.block()?,
            }))
        } else if self.match_keyword(KeywordId::In) {
            let list = Box::new(self.expression(true)?);
            Ok(Node::RepeatWithIn(RepeatWithIn {
                variable,
                list,
                body: self.block()?,
            }))
        } else {
            Err(ParseError::unexpected_one_of("'=' or 'in'", &self.current))
        }
    }

    // ========================================================================
    // case
    // ========================================================================

    fn case_statement(&mut self) -> Result<Node, ParseError> {
        self.advance();
        let value = Box::new(self.expression(true)?);
        self.expect_keyword(KeywordId::Of)?;

        let mut labels = Vec::new();
        self.skip_comments();
        while !matches!(
            self.current.kind,
            TokenKind::Keyword(KeywordId::End | KeywordId::Otherwise) | TokenKind::Eof
        ) {
            labels.push(self.case_label()?);
            self.skip_comments();
        }
        let first_label = labels.into_iter().rev().fold(None, |next_label, mut label: CaseLabel| {
            label.next_label = next_label;
            Some(Box::new(label))
        });

        let otherwise = if self.match_keyword(KeywordId::Otherwise) {
            self.match_punct(PunctuationId::Colon);
            let mut children = Vec::new();
            while !self.check_keyword(KeywordId::End) && !self.check(TokenKind::Eof) {
                children.push(self.statement()?);
            }
            Some(Block::new(children))
        } else {
            None
        };

        self.expect_end(KeywordId::Case)?;
        Ok(Node::Case(CaseStmt {
            value,
            first_label,
            otherwise,
        }))
    }

    /// Parse `value: statement`.
    fn case_label(&mut self) -> Result<CaseLabel, ParseError> {
        let line = self.current.line;
        let value = Box::new(self.expression(true)?);
        self.expect_punct(PunctuationId::Colon)?;
        Ok(CaseLabel {
            value,
            block: Block::single(self.statement()?),
            next_label: None,
            line,
        })
    }

    fn skip_comments(&mut self) {
        while self.check(TokenKind::Comment) {
            self.advance();
        }
    }
}
