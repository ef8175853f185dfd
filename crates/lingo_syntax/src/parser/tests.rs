#[cfg(test)]
/// Parser unit tests.
///
/// These tests pin down the tree shape of each statement and expression form, the line-sensitive rules, and the
/// split between hard failures and error-node recovery.
mod tests {
    use super::*;

    fn parse_ok(source: &str) -> Vec<Node> {
        parse(source).expect("source should parse").children
    }

    /// Parse `x = <expr>` and return the right-hand side.
    fn parse_value(expr: &str) -> Node {
        let mut children = parse_ok(&format!("x = {expr}"));
        assert_eq!(children.len(), 1, "expected a single assignment");
        match children.remove(0) {
            Node::Assignment(assignment) => *assignment.value,
            other => panic!("Expected assignment, got {other:?}"),
        }
    }

    fn int(value: i32) -> Node {
        Node::literal(value)
    }

    // ---- statements ---------------------------------------------------------

    #[test]
    fn test_single_line_if() {
        let children = parse_ok("if x then put 1");
        assert_eq!(
            children,
            vec![Node::If(IfStmt {
                condition: Box::new(Node::var("x")),
                then_block: Block::single(Node::Put(PutStmt {
                    value: Box::new(int(1)),
                    put_type: PutType::Message,
                    target: None,
                })),
                else_block: None,
            })]
        );
    }

    #[test]
    fn test_single_line_if_with_else_on_same_line() {
        let children = parse_ok("if a then x = 1 else x = 2");
        let Node::If(stmt) = &children[0] else {
            panic!("Expected if");
        };
        assert_eq!(stmt.then_block.children.len(), 1);
        let else_block = stmt.else_block.as_ref().expect("else branch");
        assert!(matches!(else_block.children[0], Node::Assignment(_)));
    }

    #[test]
    fn test_block_if_else() {
        let source = "if a then\n  x = 1\nelse\n  x = 2\nend if";
        let children = parse_ok(source);
        assert_eq!(children.len(), 1);
        let Node::If(stmt) = &children[0] else {
            panic!("Expected if");
        };
        assert_eq!(*stmt.condition, Node::var("a"));
        assert_eq!(stmt.then_block.children.len(), 1);
        assert_eq!(stmt.else_block.as_ref().map(|b| b.children.len()), Some(1));
    }

    #[test]
    fn test_else_if_chain_nests_in_else_block() {
        let source = "if a then\n  put 1\nelse if b then\n  put 2\nelse\n  put 3\nend if";
        let children = parse_ok(source);
        let Node::If(outer) = &children[0] else {
            panic!("Expected if");
        };
        let else_block = outer.else_block.as_ref().expect("else branch");
        assert_eq!(else_block.children.len(), 1);
        let Node::If(inner) = &else_block.children[0] else {
            panic!("Expected nested if");
        };
        assert_eq!(*inner.condition, Node::var("b"));
        assert_eq!(inner.else_block.as_ref().map(|b| b.children.len()), Some(1));
    }

    #[test]
    fn test_nested_single_line_if_claims_its_own_end_if() {
        let source = "if a then\n  if b then put 1\n  end if\nend if";
        let children = parse_ok(source);
        assert_eq!(children.len(), 1);
        let Node::If(outer) = &children[0] else {
            panic!("Expected if");
        };
        assert!(outer.else_block.is_none());
        assert_eq!(outer.then_block.children.len(), 1);
        assert!(matches!(outer.then_block.children[0], Node::If(ref inner) if inner.else_block.is_none()));
    }

    #[test]
    fn test_single_line_if_end_if_inside_repeat_inside_block_if() {
        let source = "if a then\n  repeat while x\n    if b then c\n    end if\n  end repeat\nend if";
        let children = parse_ok(source);
        assert_eq!(children.len(), 1);
        let Node::If(outer) = &children[0] else {
            panic!("Expected if");
        };
        let Node::RepeatWhile(repeat) = &outer.then_block.children[0] else {
            panic!("Expected repeat while");
        };
        assert_eq!(repeat.body.children.len(), 1);
        assert!(matches!(repeat.body.children[0], Node::If(_)));
    }

    #[test]
    fn test_trailing_end_if_claimed_at_top_level() {
        let children = parse_ok("if b then put 1\nend if\nbeep");
        assert_eq!(children.len(), 2);
        assert!(matches!(children[1], Node::Call(_)));
    }

    #[test]
    fn test_unterminated_if_is_hard_failure() {
        let err = parse("if x then\n  put 1\n").expect_err("missing end if");
        match err {
            ParseError::UnexpectedToken {
                expected, found, line, ..
            } => {
                assert_eq!(expected, TokenKind::Keyword(KeywordId::End));
                assert_eq!(found, TokenKind::Eof);
                assert_eq!(line, 3);
            }
            other => panic!("Expected UnexpectedToken, got {other:?}"),
        }
    }

    #[test]
    fn test_repeat_with_range() {
        let children = parse_ok("repeat with i = 1 to 10\n  put i\nend repeat");
        assert_eq!(
            children,
            vec![Node::RepeatWith(RepeatWith {
                variable: "i".to_string(),
                start: Box::new(int(1)),
                end: Box::new(int(10)),
                body: Block::single(Node::Put(PutStmt {
                    value: Box::new(Node::var("i")),
                    put_type: PutType::Message,
                    target: None,
                })),
            })]
        );
    }

    #[test]
    fn test_repeat_forms() {
        let source = "repeat while a\nend repeat\nrepeat until b\nend repeat\nrepeat with s in items\nend repeat\nrepeat 3 times\n  beep\nend repeat\nrepeat\nend repeat\nrepeat forever\nend repeat";
        let children = parse_ok(source);
        assert!(matches!(children[0], Node::RepeatWhile(_)));
        assert!(matches!(children[1], Node::RepeatUntil(_)));
        assert!(matches!(&children[2], Node::RepeatWithIn(r) if r.variable == "s" && *r.list == Node::var("items")));
        assert!(matches!(&children[3], Node::RepeatTimes(r) if *r.count == int(3) && r.body.children.len() == 1));
        assert!(matches!(children[4], Node::RepeatForever(_)));
        assert!(matches!(children[5], Node::RepeatForever(_)));
        assert_eq!(children.len(), 6);
    }

    #[test]
    fn test_repeat_with_requires_equals_or_in() {
        let err = parse("repeat with i to 3\nend repeat").expect_err("bad repeat with");
        assert!(matches!(err, ParseError::UnexpectedTokenOneOf { expected: "'=' or 'in'", .. }));
    }

    #[test]
    fn test_loop_control() {
        let source = "repeat while x\n  exit repeat if y\n  next repeat\n  exit repeat\n  next\nend repeat\nexit";
        let children = parse_ok(source);
        let Node::RepeatWhile(stmt) = &children[0] else {
            panic!("Expected repeat while");
        };
        assert_eq!(
            stmt.body.children,
            vec![
                Node::ExitRepeatIf(Box::new(Node::var("y"))),
                Node::NextRepeat,
                Node::ExitRepeat,
                Node::Next,
            ]
        );
        assert_eq!(children[1], Node::Exit);
    }

    #[test]
    fn test_case_labels_are_chained() {
        let source = "case x of\n  1: put \"one\"\n  -- comment\n  2: put \"two\"\n  otherwise: put \"other\"\nend case";
        let children = parse_ok(source);
        let Node::Case(stmt) = &children[0] else {
            panic!("Expected case");
        };
        let labels: Vec<_> = stmt.labels().collect();
        assert_eq!(labels.len(), 2);
        assert_eq!(*labels[0].value, int(1));
        assert_eq!(labels[0].line, 2);
        assert_eq!(*labels[1].value, int(2));
        assert_eq!(labels[1].line, 4);
        assert!(labels[1].next_label.is_none());
        assert_eq!(stmt.otherwise.as_ref().map(|b| b.children.len()), Some(1));
    }

    #[test]
    fn test_case_on_the_property() {
        let children = parse_ok("case the mouseH of\n  1: beep\nend case");
        let Node::Case(stmt) = &children[0] else {
            panic!("Expected case");
        };
        assert_eq!(*stmt.value, Node::The("mouseH".to_string()));
        assert!(stmt.otherwise.is_none());
    }

    #[test]
    fn test_put_targets() {
        let children = parse_ok("put 1 into x\nput \"a\" before y\nput \"b\" after z\nput 2");
        let kinds: Vec<_> = children
            .iter()
            .map(|node| match node {
                Node::Put(put) => (put.put_type, put.target.is_some()),
                other => panic!("Expected put, got {other:?}"),
            })
            .collect();
        assert_eq!(
            kinds,
            vec![
                (PutType::Into, true),
                (PutType::Before, true),
                (PutType::After, true),
                (PutType::Message, false),
            ]
        );
    }

    #[test]
    fn test_handler_with_arguments() {
        let children = parse_ok("on mouseUp me, x\n  beep\nend mouseUp");
        let Node::Handler(handler) = &children[0] else {
            panic!("Expected handler");
        };
        assert_eq!(handler.name, "mouseUp");
        assert_eq!(handler.arguments, vec!["me", "x"]);
        assert_eq!(handler.line, 1);
        assert_eq!(
            handler.block.children,
            vec![Node::Call(Call {
                callee: Box::new(Node::var("beep")),
                arguments: Box::new(Node::Block(Block::default())),
            })]
        );
    }

    #[test]
    fn test_return_value_is_line_sensitive() {
        let children = parse_ok("on f\n  return 1\nend\non g\n  return\nend");
        let Node::Handler(f) = &children[0] else {
            panic!("Expected handler");
        };
        assert_eq!(f.block.children, vec![Node::Return(Some(Box::new(int(1))))]);
        let Node::Handler(g) = &children[1] else {
            panic!("Expected handler");
        };
        assert_eq!(g.block.children, vec![Node::Return(None)]);
    }

    #[test]
    fn test_declarations() {
        let children = parse_ok("global gA, gB\nproperty pName\ninstance iX");
        assert_eq!(
            children,
            vec![
                Node::GlobalDecl(vec!["gA".to_string(), "gB".to_string()]),
                Node::PropertyDecl(vec!["pName".to_string()]),
                Node::InstanceDecl(vec!["iX".to_string()]),
            ]
        );
    }

    #[test]
    fn test_pseudo_commands() {
        let children = parse_ok("cursor 4\ngo to \"intro\"\ngo \"outro\"\nsendSprite 1, #hit, 5");
        assert_eq!(children[0], Node::Cursor(Box::new(int(4))));
        assert_eq!(children[1], Node::GoTo(Box::new(Node::literal("intro"))));
        assert_eq!(children[2], Node::GoTo(Box::new(Node::literal("outro"))));
        let Node::SendSpriteStmt(send) = &children[3] else {
            panic!("Expected sendSprite");
        };
        assert_eq!(*send.sprite, int(1));
        assert_eq!(*send.message, Node::literal(Datum::symbol("hit")));
        assert_eq!(send.arguments.as_deref(), Some(&Node::Literal(Datum::ArgList(vec![int(5)]))));
    }

    #[test]
    fn test_sendsprite_expression() {
        let value = parse_value("sendSprite(2, #ask)");
        let Node::SendSpriteExpr(send) = value else {
            panic!("Expected sendSprite expression");
        };
        assert_eq!(*send.sprite, int(2));
        assert!(send.arguments.is_none());
    }

    #[test]
    fn test_bareword_command_arguments() {
        let children = parse_ok("alert \"hi\"\nfoo 1, 2");
        assert_eq!(
            children[0],
            Node::Call(Call {
                callee: Box::new(Node::var("alert")),
                arguments: Box::new(Node::literal("hi")),
            })
        );
        assert_eq!(
            children[1],
            Node::Call(Call {
                callee: Box::new(Node::var("foo")),
                arguments: Box::new(Node::Literal(Datum::ArgList(vec![int(1), int(2)]))),
            })
        );
    }

    #[test]
    fn test_the_method_call() {
        let children = parse_ok("append the actorList(me)");
        assert_eq!(
            children[0],
            Node::Call(Call {
                callee: Box::new(Node::ObjProp(ObjProp {
                    object: Box::new(Node::The("actorList".to_string())),
                    property: "append".to_string(),
                })),
                arguments: Box::new(Node::var("me")),
            })
        );
    }

    #[test]
    fn test_unknown_statement_token_becomes_error_node() {
        let children = parse_ok("put 1\n)\nput 2");
        assert_eq!(children.len(), 3);
        assert_eq!(
            children[1],
            Node::Error(ErrorNode {
                lexeme: ")".to_string(),
                line: 2,
            })
        );
        assert!(matches!(children[2], Node::Put(_)));
    }

    #[test]
    fn test_comments_are_statements() {
        let children = parse_ok("-- setup\nbeep");
        assert_eq!(children[0], Node::Comment("setup".to_string()));
    }

    // ---- calls ------------------------------------------------------------------

    #[test]
    fn test_call_argument_shapes() {
        let children = parse_ok("foo(1,2,3)\nfoo(1)\nfoo()");
        let args: Vec<_> = children
            .iter()
            .map(|node| match node {
                Node::Call(call) => (*call.arguments).clone(),
                other => panic!("Expected call, got {other:?}"),
            })
            .collect();
        assert_eq!(args[0], Node::Literal(Datum::ArgList(vec![int(1), int(2), int(3)])));
        assert_eq!(args[1], int(1));
        assert_eq!(args[2], Node::Block(Block::default()));
    }

    // ---- expressions --------------------------------------------------------

    #[test]
    fn test_list_literals() {
        assert_eq!(parse_value("[1,2,3]"), Node::Literal(Datum::List(vec![int(1), int(2), int(3)])));
        assert_eq!(
            parse_value("[a: 1, b: 2]"),
            Node::Literal(Datum::PropList(vec![Node::var("a"), int(1), Node::var("b"), int(2)]))
        );
        assert_eq!(parse_value("[:]"), Node::Literal(Datum::PropList(vec![])));
        assert_eq!(parse_value("[]"), Node::Literal(Datum::List(vec![])));
    }

    #[test]
    fn test_flat_operators_are_left_associative() {
        assert_eq!(
            parse_value("1 - 2 - 3"),
            Node::binary(Node::binary(int(1), OperatorId::Subtract, int(2)), OperatorId::Subtract, int(3))
        );
        assert_eq!(
            parse_value("1 + 2 * 3"),
            Node::binary(Node::binary(int(1), OperatorId::Add, int(2)), OperatorId::Multiply, int(3))
        );
    }

    #[test]
    fn test_logical_operators_take_whole_right_side() {
        assert_eq!(
            parse_value("a and b or c"),
            Node::binary(
                Node::var("a"),
                OperatorId::And,
                Node::binary(Node::var("b"), OperatorId::Or, Node::var("c"))
            )
        );
    }

    #[test]
    fn test_equals_in_condition_is_comparison() {
        let children = parse_ok("if a = 1 then beep");
        let Node::If(stmt) = &children[0] else {
            panic!("Expected if");
        };
        assert_eq!(*stmt.condition, Node::binary(Node::var("a"), OperatorId::Equals, int(1)));
    }

    #[test]
    fn test_number_forms() {
        assert_eq!(parse_value("$FF"), int(255));
        assert_eq!(parse_value("-5"), int(-5));
        assert_eq!(parse_value("2.5"), Node::literal(2.5_f32));
        assert_eq!(
            parse_value("-y"),
            Node::binary(int(0), OperatorId::Subtract, Node::var("y"))
        );
    }

    #[test]
    fn test_constants_and_strings() {
        assert_eq!(parse_value("TAB"), Node::literal("\t"));
        assert_eq!(parse_value("quote"), Node::literal("\""));
        assert_eq!(parse_value("RETURN"), Node::literal("\n"));
        assert_eq!(parse_value("\"hi\""), Node::literal("hi"));
        assert_eq!(parse_value("#done"), Node::literal(Datum::symbol("done")));
    }

    #[test]
    fn test_postfix_chain() {
        let expected = Node::ObjProp(ObjProp {
            object: Box::new(Node::Call(Call {
                callee: Box::new(Node::ObjBracket(ObjBracket {
                    object: Box::new(Node::ObjProp(ObjProp {
                        object: Box::new(Node::var("a")),
                        property: "b".to_string(),
                    })),
                    index: Box::new(Node::var("c")),
                })),
                arguments: Box::new(Node::var("d")),
            })),
            property: "e".to_string(),
        });
        assert_eq!(parse_value("a.b[c](d).e"), expected);
    }

    #[test]
    fn test_bracket_range() {
        assert_eq!(
            parse_value("s[1..3]"),
            Node::ObjBracket(ObjBracket {
                object: Box::new(Node::var("s")),
                index: Box::new(Node::Range(RangeExpr {
                    start: Box::new(int(1)),
                    end: Box::new(int(3)),
                })),
            })
        );
    }

    #[test]
    fn test_not() {
        assert_eq!(parse_value("not done"), Node::Not(Box::new(Node::var("done"))));
    }

    #[test]
    fn test_pseudo_functions() {
        assert_eq!(
            parse_value("sprite(1).locH"),
            Node::SpriteProp(SpriteProp {
                sprite: Box::new(int(1)),
                property: "locH".to_string(),
            })
        );
        assert_eq!(
            parse_value("sprite(1)"),
            Node::Call(Call {
                callee: Box::new(Node::var("sprite")),
                arguments: Box::new(int(1)),
            })
        );
        assert_eq!(
            parse_value("member(\"a\", 2)"),
            Node::Member(MemberExpr {
                expr: Box::new(Node::literal("a")),
                cast_lib: Some(Box::new(int(2))),
            })
        );
        assert_eq!(
            parse_value("field \"name\""),
            Node::ObjProp(ObjProp {
                object: Box::new(Node::Member(MemberExpr {
                    expr: Box::new(Node::literal("name")),
                    cast_lib: None,
                })),
                property: "Text".to_string(),
            })
        );
        assert_eq!(parse_value("field"), Node::var("field"));
    }

    #[test]
    fn test_field_takes_a_whole_expression() {
        assert_eq!(
            parse_value("field \"name\" & x"),
            Node::ObjProp(ObjProp {
                object: Box::new(Node::Member(MemberExpr {
                    expr: Box::new(Node::binary(Node::literal("name"), OperatorId::Concat, Node::var("x"))),
                    cast_lib: None,
                })),
                property: "Text".to_string(),
            })
        );
    }

    #[test]
    fn test_the_of_forms() {
        assert_eq!(parse_value("the mouseH"), Node::The("mouseH".to_string()));
        assert_eq!(
            parse_value("the name of sprite 3"),
            Node::SpriteProp(SpriteProp {
                sprite: Box::new(int(3)),
                property: "name".to_string(),
            })
        );
        assert_eq!(
            parse_value("the volume of sound 1"),
            Node::SoundProp(SoundProp {
                sound: Box::new(int(1)),
                property: "volume".to_string(),
            })
        );
        assert_eq!(
            parse_value("the enabled of menuItem 2 of menu \"File\""),
            Node::MenuItemProp(MenuItemProp {
                item: Box::new(int(2)),
                menu: Box::new(Node::literal("File")),
                property: "enabled".to_string(),
            })
        );
    }

    #[test]
    fn test_unclosed_paren_is_hard_failure() {
        let err = parse("x = (1 + 2").expect_err("missing )");
        assert_eq!(err.found(), TokenKind::Eof);
        assert_eq!(err.line(), 1);
    }

    #[test]
    fn test_nesting_depth_is_bounded() {
        let shallow = format!("x = {}1{}", "(".repeat(50), ")".repeat(50));
        assert!(parse(&shallow).is_ok());

        let deep = format!("x = {}1{}", "(".repeat(5000), ")".repeat(5000));
        let err = parse(&deep).expect_err("too deep");
        assert!(matches!(err, ParseError::NestingTooDeep { limit: MAX_NESTING_DEPTH, line: 1, .. }));

        let statements = format!("{}beep", "if a then ".repeat(500));
        let err = parse(&statements).expect_err("too deep");
        assert!(matches!(err, ParseError::NestingTooDeep { .. }));
    }
}
