//! Visitor contract over the Lingo AST.
//!
//! [`Visitor`] has one `visit_*` method per node kind, and [`Node::accept`](crate::ast::Node::accept) calls exactly
//! the matching one. Every method defaults to the corresponding `walk_*` function, which visits the node's children
//! in source order, so an implementation only overrides the kinds it cares about.
//!
//! ## Examples
//! ```rust
//! use lingo_syntax::parser;
//! use lingo_syntax::visitor::Visitor;
//!
//! #[derive(Default)]
//! struct VarNames(Vec<String>);
//!
//! impl Visitor for VarNames {
//!     fn visit_var(&mut self, name: &str) {
//!         self.0.push(name.to_string());
//!     }
//! }
//!
//! let block = parser::parse("x = y + z").unwrap();
//! let mut names = VarNames::default();
//! block.accept(&mut names);
//! assert_eq!(names.0, ["x", "y", "z"]);
//! ```

use crate::ast::*;
use crate::datum::Datum;

/// One method per node kind.
pub trait Visitor {
    // ========== Structural ==========

    fn visit_block(&mut self, block: &Block) {
        walk_block(self, block);
    }

    fn visit_handler(&mut self, handler: &HandlerNode) {
        walk_block(self, &handler.block);
    }

    fn visit_comment(&mut self, _text: &str) {}

    fn visit_error(&mut self, _error: &ErrorNode) {}

    // ========== Statements ==========

    fn visit_assignment(&mut self, assignment: &Assignment) {
        assignment.target.accept(self);
        assignment.value.accept(self);
    }

    fn visit_call(&mut self, call: &Call) {
        call.callee.accept(self);
        call.arguments.accept(self);
    }

    fn visit_if(&mut self, stmt: &IfStmt) {
        walk_if(self, stmt);
    }

    fn visit_put(&mut self, stmt: &PutStmt) {
        stmt.value.accept(self);
        if let Some(target) = &stmt.target {
            target.accept(self);
        }
    }

    fn visit_repeat_while(&mut self, stmt: &RepeatCondition) {
        walk_repeat_condition(self, stmt);
    }

    fn visit_repeat_until(&mut self, stmt: &RepeatCondition) {
        walk_repeat_condition(self, stmt);
    }

    fn visit_repeat_with(&mut self, stmt: &RepeatWith) {
        stmt.start.accept(self);
        stmt.end.accept(self);
        walk_block(self, &stmt.body);
    }

    fn visit_repeat_with_in(&mut self, stmt: &RepeatWithIn) {
        stmt.list.accept(self);
        walk_block(self, &stmt.body);
    }

    fn visit_repeat_times(&mut self, stmt: &RepeatTimes) {
        stmt.count.accept(self);
        walk_block(self, &stmt.body);
    }

    fn visit_repeat_forever(&mut self, body: &Block) {
        walk_block(self, body);
    }

    fn visit_case(&mut self, stmt: &CaseStmt) {
        walk_case(self, stmt);
    }

    /// Called for each label of a `case` by [`walk_case`]; does not follow `next_label`.
    fn visit_case_label(&mut self, label: &CaseLabel) {
        label.value.accept(self);
        walk_block(self, &label.block);
    }

    fn visit_exit(&mut self) {}

    fn visit_exit_repeat(&mut self) {}

    fn visit_exit_repeat_if(&mut self, condition: &Node) {
        condition.accept(self);
    }

    fn visit_next(&mut self) {}

    fn visit_next_repeat(&mut self) {}

    fn visit_next_repeat_if(&mut self, condition: &Node) {
        condition.accept(self);
    }

    fn visit_return(&mut self, value: Option<&Node>) {
        if let Some(value) = value {
            value.accept(self);
        }
    }

    fn visit_global_decl(&mut self, _names: &[String]) {}

    fn visit_property_decl(&mut self, _names: &[String]) {}

    fn visit_instance_decl(&mut self, _names: &[String]) {}

    fn visit_cursor(&mut self, value: &Node) {
        value.accept(self);
    }

    fn visit_go_to(&mut self, target: &Node) {
        target.accept(self);
    }

    fn visit_send_sprite_stmt(&mut self, send: &SendSprite) {
        walk_send_sprite(self, send);
    }

    // ========== Expressions ==========

    fn visit_send_sprite_expr(&mut self, send: &SendSprite) {
        walk_send_sprite(self, send);
    }

    fn visit_var(&mut self, _name: &str) {}

    fn visit_literal(&mut self, datum: &Datum) {
        walk_datum(self, datum);
    }

    fn visit_binary_op(&mut self, op: &BinaryOp) {
        op.left.accept(self);
        op.right.accept(self);
    }

    fn visit_not(&mut self, expr: &Node) {
        expr.accept(self);
    }

    fn visit_the(&mut self, _prop: &str) {}

    fn visit_obj_prop(&mut self, prop: &ObjProp) {
        prop.object.accept(self);
    }

    fn visit_obj_bracket(&mut self, bracket: &ObjBracket) {
        bracket.object.accept(self);
        bracket.index.accept(self);
    }

    fn visit_range(&mut self, range: &RangeExpr) {
        range.start.accept(self);
        range.end.accept(self);
    }

    fn visit_member(&mut self, member: &MemberExpr) {
        member.expr.accept(self);
        if let Some(cast_lib) = &member.cast_lib {
            cast_lib.accept(self);
        }
    }

    fn visit_sprite_prop(&mut self, prop: &SpriteProp) {
        prop.sprite.accept(self);
    }

    fn visit_menu_prop(&mut self, prop: &MenuProp) {
        prop.menu.accept(self);
    }

    fn visit_menu_item_prop(&mut self, prop: &MenuItemProp) {
        prop.item.accept(self);
        prop.menu.accept(self);
    }

    fn visit_sound_prop(&mut self, prop: &SoundProp) {
        prop.sound.accept(self);
    }
}

// ============================================================================
// Walkers
// ============================================================================

/// Visit every statement of `block` in order.
pub fn walk_block<V: Visitor + ?Sized>(visitor: &mut V, block: &Block) {
    for child in &block.children {
        child.accept(visitor);
    }
}

pub fn walk_if<V: Visitor + ?Sized>(visitor: &mut V, stmt: &IfStmt) {
    stmt.condition.accept(visitor);
    walk_block(visitor, &stmt.then_block);
    if let Some(else_block) = &stmt.else_block {
        walk_block(visitor, else_block);
    }
}

pub fn walk_repeat_condition<V: Visitor + ?Sized>(visitor: &mut V, stmt: &RepeatCondition) {
    stmt.condition.accept(visitor);
    walk_block(visitor, &stmt.body);
}

/// Visit the scrutinee, every label along the `next_label` chain, then the `otherwise` block.
pub fn walk_case<V: Visitor + ?Sized>(visitor: &mut V, stmt: &CaseStmt) {
    stmt.value.accept(visitor);
    for label in stmt.labels() {
        label.accept(visitor);
    }
    if let Some(otherwise) = &stmt.otherwise {
        walk_block(visitor, otherwise);
    }
}

pub fn walk_send_sprite<V: Visitor + ?Sized>(visitor: &mut V, send: &SendSprite) {
    send.sprite.accept(visitor);
    send.message.accept(visitor);
    if let Some(arguments) = &send.arguments {
        arguments.accept(visitor);
    }
}

/// Visit the element nodes of list-shaped literals.
pub fn walk_datum<V: Visitor + ?Sized>(visitor: &mut V, datum: &Datum) {
    if let Some(nodes) = datum.as_nodes() {
        for node in nodes {
            node.accept(visitor);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse;

    /// Records the kind of every node it reaches.
    #[derive(Default)]
    struct Trace(Vec<&'static str>);

    impl Visitor for Trace {
        fn visit_handler(&mut self, handler: &HandlerNode) {
            self.0.push("handler");
            walk_block(self, &handler.block);
        }

        fn visit_case_label(&mut self, label: &CaseLabel) {
            self.0.push("label");
            label.value.accept(self);
            walk_block(self, &label.block);
        }

        fn visit_put(&mut self, stmt: &PutStmt) {
            self.0.push("put");
            stmt.value.accept(self);
        }

        fn visit_var(&mut self, _name: &str) {
            self.0.push("var");
        }

        fn visit_literal(&mut self, datum: &Datum) {
            self.0.push("literal");
            walk_datum(self, datum);
        }

        fn visit_global_decl(&mut self, _names: &[String]) {
            self.0.push("global");
        }
    }

    #[test]
    fn accept_dispatches_to_matching_method() {
        let mut trace = Trace::default();
        Node::var("x").accept(&mut trace);
        Node::literal(1).accept(&mut trace);
        Node::GlobalDecl(vec!["g".into()]).accept(&mut trace);
        assert_eq!(trace.0, ["var", "literal", "global"]);
    }

    #[test]
    fn default_walk_reaches_nested_nodes() {
        let block = parse("on go\n  put [a, 2]\nend").unwrap();
        let mut trace = Trace::default();
        block.accept(&mut trace);
        assert_eq!(trace.0, ["handler", "put", "literal", "var", "literal"]);
    }

    #[test]
    fn case_labels_are_visited_in_chain_order() {
        let block = parse("case x of\n  1: put a\n  2: put b\nend case").unwrap();
        let mut trace = Trace::default();
        block.accept(&mut trace);
        assert_eq!(
            trace.0,
            ["var", "label", "literal", "put", "var", "label", "literal", "put", "var"]
        );
    }
}
