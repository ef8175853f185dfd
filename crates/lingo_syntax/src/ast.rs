//! Abstract Syntax Tree definitions for Lingo
//!
//! This module defines every AST node the parser produces. The tree is strictly owned: each node belongs to exactly
//! one parent (a [`Block`]'s child list, a binary operation's operand slot, ...), there is no shared ownership and
//! there are no parent back-references. Consumers that need context carry it in their [`Visitor`].
//!
//! Nodes fall into three families:
//! - structural: [`Block`], [`HandlerNode`], comments and [`ErrorNode`] placeholders;
//! - statements: assignments, calls, `if`, `put`, the six `repeat` forms, `case`, `exit`/`next`, `return`,
//!   declarations, `cursor`, `go to` and `sendSprite`;
//! - expressions: variables, literals, binary/unary operations, `the` properties, property and bracket access,
//!   ranges and the builtin pseudo-function forms.

use lingo_core::lang::operators::OperatorId;

use crate::datum::Datum;
use crate::visitor::Visitor;

// ============================================================================
// Structural nodes
// ============================================================================

/// An ordered sequence of statements. The parser returns one as the root of every source unit.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Block {
    pub children: Vec<Node>,
}

impl Block {
    pub fn new(children: Vec<Node>) -> Self {
        Self { children }
    }

    /// A block holding a single statement.
    pub fn single(node: Node) -> Self {
        Self { children: vec![node] }
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Dispatch to [`Visitor::visit_block`].
    pub fn accept<V: Visitor + ?Sized>(&self, visitor: &mut V) {
        visitor.visit_block(self);
    }
}

/// `on name arg1, arg2 ... end`
#[derive(Debug, Clone, PartialEq)]
pub struct HandlerNode {
    pub name: String,
    pub arguments: Vec<String>,
    pub block: Block,
    /// Line of the `on` keyword.
    pub line: usize,
}

/// Placeholder for a statement or primary expression that failed to parse.
///
/// The parser consumed exactly one token (`lexeme`) to produce it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorNode {
    pub lexeme: String,
    pub line: usize,
}

// ============================================================================
// Statements
// ============================================================================

/// `target = value`
#[derive(Debug, Clone, PartialEq)]
pub struct Assignment {
    pub target: Box<Node>,
    pub value: Box<Node>,
}

/// A call of `callee` with `arguments`.
///
/// ## Notes
/// - `arguments` is an empty [`Block`] for zero arguments, the argument itself for one, and a literal
///   [`Datum::ArgList`] for two or more.
#[derive(Debug, Clone, PartialEq)]
pub struct Call {
    pub callee: Box<Node>,
    pub arguments: Box<Node>,
}

/// `if condition then ... [else ...] end if`
///
/// An `else if` chain is an `else_block` holding exactly one nested `If`.
#[derive(Debug, Clone, PartialEq)]
pub struct IfStmt {
    pub condition: Box<Node>,
    pub then_block: Block,
    pub else_block: Option<Block>,
}

/// Where `put` sends its value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PutType {
    /// No target: print to the message window.
    Message,
    Into,
    Before,
    After,
}

/// `put value [into|before|after target]`
#[derive(Debug, Clone, PartialEq)]
pub struct PutStmt {
    pub value: Box<Node>,
    pub put_type: PutType,
    pub target: Option<Box<Node>>,
}

/// Body of `repeat while` and `repeat until`.
#[derive(Debug, Clone, PartialEq)]
pub struct RepeatCondition {
    pub condition: Box<Node>,
    pub body: Block,
}

/// `repeat with variable = start to end`
#[derive(Debug, Clone, PartialEq)]
pub struct RepeatWith {
    pub variable: String,
    pub start: Box<Node>,
    pub end: Box<Node>,
    pub body: Block,
}

/// `repeat with variable in list`
#[derive(Debug, Clone, PartialEq)]
pub struct RepeatWithIn {
    pub variable: String,
    pub list: Box<Node>,
    pub body: Block,
}

/// `repeat count times`
#[derive(Debug, Clone, PartialEq)]
pub struct RepeatTimes {
    pub count: Box<Node>,
    pub body: Block,
}

/// `case value of ... end case`
#[derive(Debug, Clone, PartialEq)]
pub struct CaseStmt {
    pub value: Box<Node>,
    /// Head of the label chain, linked through [`CaseLabel::next_label`].
    pub first_label: Option<Box<CaseLabel>>,
    pub otherwise: Option<Block>,
}

impl CaseStmt {
    /// Iterate the label chain in source order.
    pub fn labels(&self) -> CaseLabels<'_> {
        CaseLabels {
            next: self.first_label.as_deref(),
        }
    }
}

/// One `value: statement` entry of a `case`.
#[derive(Debug, Clone, PartialEq)]
pub struct CaseLabel {
    pub value: Box<Node>,
    /// Always exactly one statement.
    pub block: Block,
    pub next_label: Option<Box<CaseLabel>>,
    pub line: usize,
}

impl CaseLabel {
    /// Dispatch to [`Visitor::visit_case_label`].
    pub fn accept<V: Visitor + ?Sized>(&self, visitor: &mut V) {
        visitor.visit_case_label(self);
    }
}

/// Iterator over a `case` label chain.
pub struct CaseLabels<'a> {
    next: Option<&'a CaseLabel>,
}

impl<'a> Iterator for CaseLabels<'a> {
    type Item = &'a CaseLabel;

    fn next(&mut self) -> Option<&'a CaseLabel> {
        let current = self.next?;
        self.next = current.next_label.as_deref();
        Some(current)
    }
}

/// `sendSprite sprite, message {, arg}`
#[derive(Debug, Clone, PartialEq)]
pub struct SendSprite {
    pub sprite: Box<Node>,
    pub message: Box<Node>,
    /// A literal [`Datum::ArgList`] when extra arguments follow the message.
    pub arguments: Option<Box<Node>>,
}

// ============================================================================
// Expressions
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct BinaryOp {
    pub left: Box<Node>,
    pub right: Box<Node>,
    pub opcode: OperatorId,
}

/// `object.property`
#[derive(Debug, Clone, PartialEq)]
pub struct ObjProp {
    pub object: Box<Node>,
    pub property: String,
}

/// `object[index]`; `index` is a [`Node::Range`] for `object[a..b]`.
#[derive(Debug, Clone, PartialEq)]
pub struct ObjBracket {
    pub object: Box<Node>,
    pub index: Box<Node>,
}

/// `start..end` inside brackets.
#[derive(Debug, Clone, PartialEq)]
pub struct RangeExpr {
    pub start: Box<Node>,
    pub end: Box<Node>,
}

/// `member(expr[, castLib])`
#[derive(Debug, Clone, PartialEq)]
pub struct MemberExpr {
    pub expr: Box<Node>,
    pub cast_lib: Option<Box<Node>>,
}

/// `sprite(n).property` or `the property of sprite n`
#[derive(Debug, Clone, PartialEq)]
pub struct SpriteProp {
    pub sprite: Box<Node>,
    pub property: String,
}

/// `the property of menu m`
#[derive(Debug, Clone, PartialEq)]
pub struct MenuProp {
    pub menu: Box<Node>,
    pub property: String,
}

/// `the property of menuItem i of menu m`
#[derive(Debug, Clone, PartialEq)]
pub struct MenuItemProp {
    pub item: Box<Node>,
    pub menu: Box<Node>,
    pub property: String,
}

/// `the property of sound n`
#[derive(Debug, Clone, PartialEq)]
pub struct SoundProp {
    pub sound: Box<Node>,
    pub property: String,
}

// ============================================================================
// Node
// ============================================================================

/// Every node the parser can produce.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    // ========== Structural ==========
    Block(Block),
    Handler(HandlerNode),
    Comment(String),
    Error(ErrorNode),

    // ========== Statements ==========
    Assignment(Assignment),
    Call(Call),
    If(IfStmt),
    Put(PutStmt),
    RepeatWhile(RepeatCondition),
    RepeatUntil(RepeatCondition),
    RepeatWith(RepeatWith),
    RepeatWithIn(RepeatWithIn),
    RepeatTimes(RepeatTimes),
    RepeatForever(Block),
    Case(CaseStmt),
    Exit,
    ExitRepeat,
    ExitRepeatIf(Box<Node>),
    Next,
    NextRepeat,
    NextRepeatIf(Box<Node>),
    Return(Option<Box<Node>>),
    GlobalDecl(Vec<String>),
    PropertyDecl(Vec<String>),
    InstanceDecl(Vec<String>),
    Cursor(Box<Node>),
    GoTo(Box<Node>),
    SendSpriteStmt(SendSprite),

    // ========== Expressions ==========
    SendSpriteExpr(SendSprite),
    Var(String),
    Literal(Datum),
    BinaryOp(BinaryOp),
    Not(Box<Node>),
    /// `the property`
    The(String),
    ObjProp(ObjProp),
    ObjBracket(ObjBracket),
    Range(RangeExpr),
    Member(MemberExpr),
    SpriteProp(SpriteProp),
    MenuProp(MenuProp),
    MenuItemProp(MenuItemProp),
    SoundProp(SoundProp),
}

impl Node {
    pub fn var(name: impl Into<String>) -> Self {
        Node::Var(name.into())
    }

    pub fn literal(datum: impl Into<Datum>) -> Self {
        Node::Literal(datum.into())
    }

    pub fn binary(left: Node, opcode: OperatorId, right: Node) -> Self {
        Node::BinaryOp(BinaryOp {
            left: Box::new(left),
            right: Box::new(right),
            opcode,
        })
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Node::Error(_))
    }

    /// Dispatch to the [`Visitor`] method for this node's kind.
    pub fn accept<V: Visitor + ?Sized>(&self, visitor: &mut V) {
        match self {
            Node::Block(block) => visitor.visit_block(block),
            Node::Handler(handler) => visitor.visit_handler(handler),
            Node::Comment(text) => visitor.visit_comment(text),
            Node::Error(error) => visitor.visit_error(error),
            Node::Assignment(assignment) => visitor.visit_assignment(assignment),
            Node::Call(call) => visitor.visit_call(call),
            Node::If(stmt) => visitor.visit_if(stmt),
            Node::Put(stmt) => visitor.visit_put(stmt),
            Node::RepeatWhile(stmt) => visitor.visit_repeat_while(stmt),
            Node::RepeatUntil(stmt) => visitor.visit_repeat_until(stmt),
            Node::RepeatWith(stmt) => visitor.visit_repeat_with(stmt),
            Node::RepeatWithIn(stmt) => visitor.visit_repeat_with_in(stmt),
            Node::RepeatTimes(stmt) => visitor.visit_repeat_times(stmt),
            Node::RepeatForever(body) => visitor.visit_repeat_forever(body),
            Node::Case(stmt) => visitor.visit_case(stmt),
            Node::Exit => visitor.visit_exit(),
            Node::ExitRepeat => visitor.visit_exit_repeat(),
            Node::ExitRepeatIf(condition) => visitor.visit_exit_repeat_if(condition),
            Node::Next => visitor.visit_next(),
            Node::NextRepeat => visitor.visit_next_repeat(),
            Node::NextRepeatIf(condition) => visitor.visit_next_repeat_if(condition),
            Node::Return(value) => visitor.visit_return(value.as_deref()),
            Node::GlobalDecl(names) => visitor.visit_global_decl(names),
            Node::PropertyDecl(names) => visitor.visit_property_decl(names),
            Node::InstanceDecl(names) => visitor.visit_instance_decl(names),
            Node::Cursor(value) => visitor.visit_cursor(value),
            Node::GoTo(target) => visitor.visit_go_to(target),
            Node::SendSpriteStmt(send) => visitor.visit_send_sprite_stmt(send),
            Node::SendSpriteExpr(send) => visitor.visit_send_sprite_expr(send),
            Node::Var(name) => visitor.visit_var(name),
            Node::Literal(datum) => visitor.visit_literal(datum),
            Node::BinaryOp(op) => visitor.visit_binary_op(op),
            Node::Not(expr) => visitor.visit_not(expr),
            Node::The(prop) => visitor.visit_the(prop),
            Node::ObjProp(prop) => visitor.visit_obj_prop(prop),
            Node::ObjBracket(bracket) => visitor.visit_obj_bracket(bracket),
            Node::Range(range) => visitor.visit_range(range),
            Node::Member(member) => visitor.visit_member(member),
            Node::SpriteProp(prop) => visitor.visit_sprite_prop(prop),
            Node::MenuProp(prop) => visitor.visit_menu_prop(prop),
            Node::MenuItemProp(prop) => visitor.visit_menu_item_prop(prop),
            Node::SoundProp(prop) => visitor.visit_sound_prop(prop),
        }
    }
}

impl From<Block> for Node {
    fn from(block: Block) -> Self {
        Node::Block(block)
    }
}
