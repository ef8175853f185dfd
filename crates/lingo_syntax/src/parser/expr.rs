/// Expression parsing.
///
/// This chunk implements the flat left-to-right operator scan (`expression`), postfix chains (`operand`) and
/// primaries, including the `the ...` property forms and the `sprite`/`member`/`field` pseudo-functions.
impl<'a> Parser<'a> {
    // ========================================================================
    // Binary operators
    // ========================================================================

    /// Parse a binary-operator chain.
    ///
    /// ## Notes
    /// - Every flat operator (`+ - * / & <> > >= < <=`) reduces immediately against the left operand, so
    ///   `1 + 2 * 3` is `(1 + 2) * 3`.
    /// - `and`, `or` and `=` take a whole fresh expression as their right side (right-associative).
    /// - With `allow_equals` off, `=` ends the expression so that the caller can treat it as assignment.
    fn expression(&mut self, allow_equals: bool) -> Result<Node, ParseError> {
        let mut left = self.operand()?;
        while let Some(opcode) = self.current.kind.binary_operator() {
            if opcode == OperatorId::Equals && !allow_equals {
                break;
            }
            self.advance();
            let right = match opcode {
                OperatorId::Equals => self.expression(false)?,
                _ if !operators::is_flat(opcode) => self.expression(true)?,
                _ => self.operand()?,
            };
            left = Node::binary(left, opcode, right);
        }
        Ok(left)
    }

    /// Parse `expr {, expr}`.
    fn expression_list(&mut self) -> Result<Vec<Node>, ParseError> {
        let mut items = vec![self.expression(true)?];
        while self.match_punct(PunctuationId::Comma) {
            items.push(self.expression(true)?);
        }
        Ok(items)
    }

    /// Parse the arguments of a call after its `(`, through the closing `)`.
    fn paren_arguments(&mut self) -> Result<Vec<Node>, ParseError> {
        let args = if self.check_punct(PunctuationId::RParen) {
            Vec::new()
        } else {
            self.expression_list()?
        };
        self.expect_punct(PunctuationId::RParen)?;
        Ok(args)
    }

    // ========================================================================
    // Postfix chains
    // ========================================================================

    /// Parse a primary followed by any chain of `.prop`, `[index]`, `[a..b]` and `(args)`.
    fn operand(&mut self) -> Result<Node, ParseError> {
        let mut node = self.primary()?;
        loop {
            if matches!(&node, Node::Var(name) if builtins::pseudo_command(name) == Some(PseudoCommand::SendSprite)) {
                node = Node::SendSpriteExpr(self.send_sprite()?);
            } else if self.match_punct(PunctuationId::Dot) {
                let property = self.expect_identifier()?.lexeme;
                node = Node::ObjProp(ObjProp {
                    object: Box::new(node),
                    property,
                });
            } else if self.match_punct(PunctuationId::LBracket) {
                let mut index = self.expression(true)?;
                if self.match_punct(PunctuationId::Range) {
                    let end = self.expression(true)?;
                    index = Node::Range(RangeExpr {
                        start: Box::new(index),
                        end: Box::new(end),
                    });
                }
                self.expect_punct(PunctuationId::RBracket)?;
                node = Node::ObjBracket(ObjBracket {
                    object: Box::new(node),
                    index: Box::new(index),
                });
            } else if self.match_punct(PunctuationId::LParen) {
                let args = self.paren_arguments()?;
                node = Node::Call(Call {
                    callee: Box::new(node),
                    arguments: Box::new(call_arguments(args)),
                });
            } else {
                return Ok(node);
            }
        }
    }

    // ========================================================================
    // Primaries
    // ========================================================================

    fn primary(&mut self) -> Result<Node, ParseError> {
        self.nested(Self::primary_form)
    }

    fn primary_form(&mut self) -> Result<Node, ParseError> {
        match self.current.kind {
            TokenKind::Number => {
                let token = self.advance();
                Ok(Node::Literal(number_datum(&token.lexeme, false)))
            }
            TokenKind::String => Ok(Node::literal(self.advance().lexeme)),
            TokenKind::Symbol => Ok(Node::literal(Datum::symbol(self.advance().lexeme))),
            TokenKind::Keyword(KeywordId::Not) => {
                self.advance();
                Ok(Node::Not(Box::new(self.primary()?)))
            }
            TokenKind::Operator(OperatorId::Subtract) => {
                self.advance();
                if self.check(TokenKind::Number) {
                    let token = self.advance();
                    Ok(Node::Literal(number_datum(&token.lexeme, true)))
                } else {
                    let operand = self.primary()?;
                    Ok(Node::binary(Node::literal(0), OperatorId::Subtract, operand))
                }
            }
            TokenKind::Punctuation(PunctuationId::LBracket) => self.list_literal(),
            TokenKind::Punctuation(PunctuationId::LParen) => {
                self.advance();
                let inner = self.expression(true)?;
                self.expect_punct(PunctuationId::RParen)?;
                Ok(inner)
            }
            TokenKind::Keyword(KeywordId::Me) => {
                self.advance();
                Ok(Node::var("me"))
            }
            TokenKind::Keyword(KeywordId::Return) => {
                self.advance();
                Ok(Node::literal("\n"))
            }
            TokenKind::Keyword(KeywordId::The) => self.the_expression(),
            TokenKind::Identifier => self.identifier_expression(),
            _ => Ok(self.error_node()),
        }
    }

    /// Parse `[]`, `[:]`, `[a, b]` or `[k: v, ...]`.
    fn list_literal(&mut self) -> Result<Node, ParseError> {
        self.expect_punct(PunctuationId::LBracket)?;

        if self.match_punct(PunctuationId::Colon) {
            self.expect_punct(PunctuationId::RBracket)?;
            return Ok(Node::Literal(Datum::PropList(Vec::new())));
        }
        if self.match_punct(PunctuationId::RBracket) {
            return Ok(Node::Literal(Datum::List(Vec::new())));
        }

        let first = self.expression(true)?;
        if !self.match_punct(PunctuationId::Colon) {
            let mut items = vec![first];
            while self.match_punct(PunctuationId::Comma) {
                items.push(self.expression(true)?);
            }
            self.expect_punct(PunctuationId::RBracket)?;
            return Ok(Node::Literal(Datum::List(items)));
        }

        let mut pairs = vec![first, self.expression(true)?];
        while self.match_punct(PunctuationId::Comma) {
            pairs.push(self.expression(true)?);
            self.expect_punct(PunctuationId::Colon)?;
            pairs.push(self.expression(true)?);
        }
        self.expect_punct(PunctuationId::RBracket)?;
        Ok(Node::Literal(Datum::PropList(pairs)))
    }

    /// Parse `the prop`, `the prop of sprite|menu|sound x` or `the prop of menuItem i of menu m`.
    fn the_expression(&mut self) -> Result<Node, ParseError> {
        self.expect_keyword(KeywordId::The)?;
        let property = self.expect_identifier()?.lexeme;

        if !self.check_keyword(KeywordId::Of) {
            return Ok(Node::The(property));
        }
        let next = self.peek_next();
        let Some(target) = (next.kind == TokenKind::Identifier)
            .then(|| builtins::of_target(&next.lexeme))
            .flatten()
        else {
            return Ok(Node::The(property));
        };

        self.advance();
        self.advance();
        let node = match target {
            OfTarget::Sprite => Node::SpriteProp(SpriteProp {
                sprite: Box::new(self.operand()?),
                property,
            }),
            OfTarget::Menu => Node::MenuProp(MenuProp {
                menu: Box::new(self.operand()?),
                property,
            }),
            OfTarget::Sound => Node::SoundProp(SoundProp {
                sound: Box::new(self.operand()?),
                property,
            }),
            OfTarget::MenuItem => {
                let item = Box::new(self.operand()?);
                self.expect_keyword(KeywordId::Of)?;
                self.expect_word(builtins::of_target_str(OfTarget::Menu))?;
                let menu = Box::new(self.operand()?);
                Node::MenuItemProp(MenuItemProp { item, menu, property })
            }
        };
        Ok(node)
    }

    /// Parse an identifier: a character constant, a pseudo-function or a plain variable.
    fn identifier_expression(&mut self) -> Result<Node, ParseError> {
        if let Some(value) = builtins::constant_value(&self.current.lexeme) {
            self.advance();
            return Ok(Node::literal(value));
        }

        let function = builtins::pseudo_function(&self.current.lexeme);
        let next = self.peek_next();
        match function {
            Some(PseudoFunction::Sprite) if next.is_punctuation(PunctuationId::LParen) => {
                self.advance();
                self.advance();
                let index = self.expression(true)?;
                self.expect_punct(PunctuationId::RParen)?;
                if self.match_punct(PunctuationId::Dot) {
                    let property = self.expect_identifier()?.lexeme;
                    return Ok(Node::SpriteProp(SpriteProp {
                        sprite: Box::new(index),
                        property,
                    }));
                }
                Ok(Node::Call(Call {
                    callee: Box::new(Node::var(builtins::pseudo_function_str(PseudoFunction::Sprite))),
                    arguments: Box::new(index),
                }))
            }
            Some(PseudoFunction::Member) if next.is_punctuation(PunctuationId::LParen) => {
                self.advance();
                self.advance();
                let expr = Box::new(self.expression(true)?);
                let cast_lib = if self.match_punct(PunctuationId::Comma) {
                    Some(Box::new(self.expression(true)?))
                } else {
                    None
                };
                self.expect_punct(PunctuationId::RParen)?;
                Ok(Node::Member(MemberExpr { expr, cast_lib }))
            }
            Some(PseudoFunction::Field) if starts_operand(next.kind) => {
                self.advance();
                let expr = Box::new(self.expression(true)?);
                Ok(Node::ObjProp(ObjProp {
                    object: Box::new(Node::Member(MemberExpr { expr, cast_lib: None })),
                    property: "Text".to_string(),
                }))
            }
            _ => Ok(Node::Var(self.advance().lexeme)),
        }
    }
}

/// Return `true` if a token of `kind` can begin an operand.
fn starts_operand(kind: TokenKind) -> bool {
    matches!(
        kind,
        TokenKind::Number
            | TokenKind::String
            | TokenKind::Identifier
            | TokenKind::Symbol
            | TokenKind::Punctuation(PunctuationId::LParen | PunctuationId::LBracket)
            | TokenKind::Keyword(KeywordId::Me | KeywordId::The | KeywordId::Not)
    )
}

/// Interpret a `Number` lexeme: `$FF` (or `0$FF`) is hex, a `.` makes a float, anything else is an integer.
///
/// ## Notes
/// - Hex values wrap into `i32`.
/// - A lexeme that does not fit its shape falls back to a string datum holding the raw text.
fn number_datum(lexeme: &str, negative: bool) -> Datum {
    if let Some((_, digits)) = lexeme.split_once('$') {
        return match u32::from_str_radix(digits, 16) {
            Ok(value) if negative => Datum::Integer((value as i32).wrapping_neg()),
            Ok(value) => Datum::Integer(value as i32),
            Err(_) => Datum::String(lexeme.to_string()),
        };
    }

    let text = if negative {
        format!("-{lexeme}")
    } else {
        lexeme.to_string()
    };
    if lexeme.contains('.') {
        text.parse::<f32>().map(Datum::Float).unwrap_or(Datum::String(text))
    } else {
        match text.parse::<i32>() {
            Ok(value) => Datum::Integer(value),
            Err(_) => Datum::String(text),
        }
    }
}
