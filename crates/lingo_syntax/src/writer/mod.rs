//! Source writer: renders an AST back to Lingo source text.
//!
//! [`SourceWriter`] is a [`Visitor`] that prints statements one per line with block bodies indented one level.
//! Expressions are printed with just enough parentheses that parsing the output yields the same tree under the
//! language's flat operator precedence.
//!
//! ## Notes
//! - Handler bodies, `if`/`repeat`/`case` bodies and `otherwise` blocks are indented; `case` labels are indented
//!   one level under `case ... of`.
//! - `if` is always written in block form; an else-if chain stays nested (`else`, then an indented `if ... end if`).
//! - A bare command (`beep`) prints without parentheses; every other call prints as `callee(args)`.
//! - Comments are preserved, blank lines are not. Top-level handlers are separated by one blank line.

pub mod config;
mod buffer;

use lingo_core::lang::builtins::{self, OfTarget, PseudoCommand, PseudoFunction, PutPlacement};
use lingo_core::lang::operators::{self, OperatorId};

use crate::ast::*;
use crate::datum::Datum;
use crate::visitor::Visitor;
use buffer::OutputBuffer;
pub use config::{FormatConfig, IndentStyle, LineEnding};

/// Render a whole source unit (the root block returned by the parser).
pub fn write_block(block: &Block, config: &FormatConfig) -> String {
    let mut writer = SourceWriter::new(config);
    writer.write_root(block);
    writer.finish()
}

/// Render a single expression on one line.
pub fn expression_to_string(node: &Node) -> String {
    let mut writer = SourceWriter::new(&FormatConfig::default());
    node.accept(&mut writer);
    writer.finish()
}

/// Visitor that accumulates Lingo source text.
pub struct SourceWriter {
    out: OutputBuffer,
}

impl SourceWriter {
    pub fn new(config: &FormatConfig) -> Self {
        Self {
            out: OutputBuffer::new(config),
        }
    }

    /// Get the rendered text
    pub fn finish(self) -> String {
        self.out.finish()
    }

    /// Write top-level children, with a blank line on either side of each handler.
    pub fn write_root(&mut self, block: &Block) {
        let mut previous: Option<&Node> = None;
        for child in &block.children {
            if previous.is_some_and(|prev| matches!(prev, Node::Handler(_)) || matches!(child, Node::Handler(_))) {
                self.out.newline();
            }
            self.statement(child);
            previous = Some(child);
        }
    }

    // ---- statements ---------------------------------------------------------

    fn statement(&mut self, node: &Node) {
        match node {
            Node::Call(call) => self.command(call),
            _ => node.accept(self),
        }
        self.out.end_line();
    }

    fn body(&mut self, block: &Block) {
        self.out.indent();
        for child in &block.children {
            self.statement(child);
        }
        self.out.dedent();
    }

    /// A call in statement position.
    fn command(&mut self, call: &Call) {
        match (call.callee.as_ref(), call.arguments.as_ref()) {
            (Node::Var(name), Node::Block(args)) if args.is_empty() => self.out.write(name),
            (Node::ObjProp(method), args) if is_the_chain(&method.object) => {
                self.out.write(&method.property);
                self.out.write(" ");
                self.expr(&method.object);
                self.out.write("(");
                self.arguments(args);
                self.out.write(")");
            }
            _ => self.visit_call(call),
        }
    }

    fn names(&mut self, keyword: &str, names: &[String]) {
        self.out.write(keyword);
        self.out.write(" ");
        self.out.write(&names.join(", "));
    }

    fn send_sprite(&mut self, send: &SendSprite) {
        self.out.write(builtins::pseudo_command_str(PseudoCommand::SendSprite));
        self.out.write("(");
        self.expr(&send.sprite);
        self.out.write(", ");
        self.expr(&send.message);
        if let Some(args) = &send.arguments {
            self.out.write(", ");
            self.expr(args);
        }
        self.out.write(")");
    }

    // ---- expressions --------------------------------------------------------

    fn expr(&mut self, node: &Node) {
        node.accept(self);
    }

    fn wrapped(&mut self, node: &Node, parenthesize: bool) {
        if parenthesize {
            self.out.write("(");
            self.expr(node);
            self.out.write(")");
        } else {
            self.expr(node);
        }
    }

    /// An expression in a slot the parser fills with a single operand.
    fn operand(&mut self, node: &Node) {
        self.wrapped(node, !is_operand(node));
    }

    /// The object of a `.prop`, `[index]` or `(args)` suffix.
    fn postfix_base(&mut self, node: &Node) {
        self.wrapped(node, !is_postfix_base(node));
    }

    /// Assignment and `put` targets stop at `=`.
    fn target(&mut self, node: &Node) {
        self.wrapped(node, is_equals(node));
    }

    /// Call arguments without the surrounding parentheses.
    fn arguments(&mut self, args: &Node) {
        match args {
            Node::Block(block) if block.is_empty() => {}
            _ => self.expr(args),
        }
    }
}

impl Visitor for SourceWriter {
    fn visit_block(&mut self, block: &Block) {
        for child in &block.children {
            self.statement(child);
        }
    }

    fn visit_handler(&mut self, handler: &HandlerNode) {
        self.out.write("on ");
        self.out.write(&handler.name);
        if !handler.arguments.is_empty() {
            self.out.write(" ");
            self.out.write(&handler.arguments.join(", "));
        }
        self.out.newline();
        self.body(&handler.block);
        self.out.write("end");
    }

    fn visit_comment(&mut self, text: &str) {
        if text.is_empty() {
            self.out.write("--");
        } else {
            self.out.write("-- ");
            self.out.write(text);
        }
    }

    fn visit_error(&mut self, error: &ErrorNode) {
        self.out.write(&error.lexeme);
    }

    fn visit_assignment(&mut self, assignment: &Assignment) {
        self.target(&assignment.target);
        self.out.write(" = ");
        self.expr(&assignment.value);
    }

    fn visit_call(&mut self, call: &Call) {
        self.postfix_base(&call.callee);
        self.out.write("(");
        self.arguments(&call.arguments);
        self.out.write(")");
    }

    fn visit_if(&mut self, stmt: &IfStmt) {
        self.out.write("if ");
        self.expr(&stmt.condition);
        self.out.writeln(" then");
        self.body(&stmt.then_block);
        if let Some(else_block) = &stmt.else_block {
            self.out.writeln("else");
            self.body(else_block);
        }
        self.out.write("end if");
    }

    fn visit_put(&mut self, stmt: &PutStmt) {
        self.out.write("put ");
        self.expr(&stmt.value);
        let keyword = match stmt.put_type {
            PutType::Message => None,
            PutType::Into => Some("into"),
            PutType::Before => Some(builtins::put_placement_str(PutPlacement::Before)),
            PutType::After => Some(builtins::put_placement_str(PutPlacement::After)),
        };
        if let (Some(keyword), Some(target)) = (keyword, &stmt.target) {
            self.out.write(" ");
            self.out.write(keyword);
            self.out.write(" ");
            self.target(target);
        }
    }

    fn visit_repeat_while(&mut self, stmt: &RepeatCondition) {
        self.out.write("repeat while ");
        self.expr(&stmt.condition);
        self.out.newline();
        self.body(&stmt.body);
        self.out.write("end repeat");
    }

    fn visit_repeat_until(&mut self, stmt: &RepeatCondition) {
        self.out.write("repeat until ");
        self.expr(&stmt.condition);
        self.out.newline();
        self.body(&stmt.body);
        self.out.write("end repeat");
    }

    fn visit_repeat_with(&mut self, stmt: &RepeatWith) {
        self.out.write("repeat with ");
        self.out.write(&stmt.variable);
        self.out.write(" = ");
        self.expr(&stmt.start);
        self.out.write(" to ");
        self.expr(&stmt.end);
        self.out.newline();
        self.body(&stmt.body);
        self.out.write("end repeat");
    }

    fn visit_repeat_with_in(&mut self, stmt: &RepeatWithIn) {
        self.out.write("repeat with ");
        self.out.write(&stmt.variable);
        self.out.write(" in ");
        self.expr(&stmt.list);
        self.out.newline();
        self.body(&stmt.body);
        self.out.write("end repeat");
    }

    fn visit_repeat_times(&mut self, stmt: &RepeatTimes) {
        self.out.write("repeat ");
        self.expr(&stmt.count);
        self.out.writeln(" times");
        self.body(&stmt.body);
        self.out.write("end repeat");
    }

    fn visit_repeat_forever(&mut self, body: &Block) {
        self.out.writeln("repeat");
        self.body(body);
        self.out.write("end repeat");
    }

    fn visit_case(&mut self, stmt: &CaseStmt) {
        self.out.write("case ");
        self.expr(&stmt.value);
        self.out.writeln(" of");
        self.out.indent();
        for label in stmt.labels() {
            label.accept(self);
        }
        if let Some(otherwise) = &stmt.otherwise {
            self.out.writeln("otherwise:");
            self.body(otherwise);
        }
        self.out.dedent();
        self.out.write("end case");
    }

    fn visit_case_label(&mut self, label: &CaseLabel) {
        self.expr(&label.value);
        self.out.write(": ");
        for child in &label.block.children {
            self.statement(child);
        }
        self.out.end_line();
    }

    fn visit_exit(&mut self) {
        self.out.write("exit");
    }

    fn visit_exit_repeat(&mut self) {
        self.out.write("exit repeat");
    }

    fn visit_exit_repeat_if(&mut self, condition: &Node) {
        self.out.write("exit repeat if ");
        self.expr(condition);
    }

    fn visit_next(&mut self) {
        self.out.write("next");
    }

    fn visit_next_repeat(&mut self) {
        self.out.write("next repeat");
    }

    fn visit_next_repeat_if(&mut self, condition: &Node) {
        self.out.write("next repeat if ");
        self.expr(condition);
    }

    fn visit_return(&mut self, value: Option<&Node>) {
        self.out.write("return");
        if let Some(value) = value {
            self.out.write(" ");
            self.expr(value);
        }
    }

    fn visit_global_decl(&mut self, names: &[String]) {
        self.names("global", names);
    }

    fn visit_property_decl(&mut self, names: &[String]) {
        self.names("property", names);
    }

    fn visit_instance_decl(&mut self, names: &[String]) {
        self.names("instance", names);
    }

    fn visit_cursor(&mut self, value: &Node) {
        self.out.write(builtins::pseudo_command_str(PseudoCommand::Cursor));
        self.out.write(" ");
        self.expr(value);
    }

    fn visit_go_to(&mut self, target: &Node) {
        self.out.write(builtins::pseudo_command_str(PseudoCommand::Go));
        self.out.write(" to ");
        self.expr(target);
    }

    fn visit_send_sprite_stmt(&mut self, send: &SendSprite) {
        self.send_sprite(send);
    }

    fn visit_send_sprite_expr(&mut self, send: &SendSprite) {
        self.send_sprite(send);
    }

    fn visit_var(&mut self, name: &str) {
        self.out.write(name);
    }

    fn visit_literal(&mut self, datum: &Datum) {
        self.out.write(&datum.write());
    }

    fn visit_binary_op(&mut self, op: &BinaryOp) {
        let left_needs_parens = match op.left.as_ref() {
            Node::BinaryOp(left) => !operators::is_flat(left.opcode),
            other => !is_operand(other),
        };
        self.wrapped(&op.left, left_needs_parens);

        self.out.write(" ");
        self.out.write(operators::as_str(op.opcode));
        self.out.write(" ");

        match op.opcode {
            OperatorId::And | OperatorId::Or => self.expr(&op.right),
            OperatorId::Equals => self.target(&op.right),
            _ => self.operand(&op.right),
        }
    }

    fn visit_not(&mut self, expr: &Node) {
        self.out.write("not ");
        self.wrapped(expr, !is_primary(expr));
    }

    fn visit_the(&mut self, prop: &str) {
        self.out.write("the ");
        self.out.write(prop);
    }

    fn visit_obj_prop(&mut self, prop: &ObjProp) {
        self.postfix_base(&prop.object);
        self.out.write(".");
        self.out.write(&prop.property);
    }

    fn visit_obj_bracket(&mut self, bracket: &ObjBracket) {
        self.postfix_base(&bracket.object);
        self.out.write("[");
        self.expr(&bracket.index);
        self.out.write("]");
    }

    fn visit_range(&mut self, range: &RangeExpr) {
        self.expr(&range.start);
        self.out.write("..");
        self.expr(&range.end);
    }

    fn visit_member(&mut self, member: &MemberExpr) {
        self.out.write(builtins::pseudo_function_str(PseudoFunction::Member));
        self.out.write("(");
        self.expr(&member.expr);
        if let Some(cast_lib) = &member.cast_lib {
            self.out.write(", ");
            self.expr(cast_lib);
        }
        self.out.write(")");
    }

    fn visit_sprite_prop(&mut self, prop: &SpriteProp) {
        self.out.write(builtins::pseudo_function_str(PseudoFunction::Sprite));
        self.out.write("(");
        self.expr(&prop.sprite);
        self.out.write(").");
        self.out.write(&prop.property);
    }

    fn visit_menu_prop(&mut self, prop: &MenuProp) {
        self.the_of(&prop.property, OfTarget::Menu);
        self.operand(&prop.menu);
    }

    fn visit_menu_item_prop(&mut self, prop: &MenuItemProp) {
        self.the_of(&prop.property, OfTarget::MenuItem);
        self.operand(&prop.item);
        self.out.write(" of ");
        self.out.write(builtins::of_target_str(OfTarget::Menu));
        self.out.write(" ");
        self.operand(&prop.menu);
    }

    fn visit_sound_prop(&mut self, prop: &SoundProp) {
        self.the_of(&prop.property, OfTarget::Sound);
        self.operand(&prop.sound);
    }
}

impl SourceWriter {
    /// `the <property> of <target> `
    fn the_of(&mut self, property: &str, target: OfTarget) {
        self.out.write("the ");
        self.out.write(property);
        self.out.write(" of ");
        self.out.write(builtins::of_target_str(target));
        self.out.write(" ");
    }
}

// ---- precedence classes -----------------------------------------------------

/// `the prop` or `the prop.sub...`
fn is_the_chain(node: &Node) -> bool {
    match node {
        Node::The(_) => true,
        Node::ObjProp(prop) => is_the_chain(&prop.object),
        _ => false,
    }
}

fn is_equals(node: &Node) -> bool {
    matches!(node, Node::BinaryOp(op) if op.opcode == OperatorId::Equals)
}

/// Nodes the parser builds entirely inside one primary.
fn is_primary(node: &Node) -> bool {
    matches!(
        node,
        Node::Var(_)
            | Node::Literal(_)
            | Node::The(_)
            | Node::Not(_)
            | Node::Member(_)
            | Node::SpriteProp(_)
            | Node::MenuProp(_)
            | Node::MenuItemProp(_)
            | Node::SoundProp(_)
    )
}

/// Nodes that can take a `.prop`, `[index]` or `(args)` suffix without parentheses.
fn is_postfix_base(node: &Node) -> bool {
    matches!(
        node,
        Node::Var(_)
            | Node::Literal(_)
            | Node::The(_)
            | Node::Call(_)
            | Node::ObjProp(_)
            | Node::ObjBracket(_)
            | Node::Member(_)
            | Node::SpriteProp(_)
            | Node::SendSpriteExpr(_)
    )
}

/// Nodes that read back as a single operand.
fn is_operand(node: &Node) -> bool {
    is_primary(node) || is_postfix_base(node)
}
