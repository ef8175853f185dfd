//! The dynamic value type carried by literal AST nodes.
//!
//! A [`Datum`] is a tagged union over Lingo's runtime value kinds. The parser builds one for every literal (numbers,
//! strings, symbols, list and property-list brackets) and for argument lists of calls with two or more arguments.
//!
//! ## Notes
//! - A `PropList` stores its entries flat: even indices are keys, odd indices are values. An empty `PropList` and an
//!   empty `List` differ only by their tag.
//! - The `as_*` accessors never fail; they return a zero/empty default when the tag does not match.
//! - [`Datum::write`] renders Lingo literal text. It is a readable encoding, not an exact inverse of parsing: for
//!   example a one-character string becomes a constant name such as `TAB`.

use std::any::Any;
use std::fmt;
use std::sync::Arc;

use lingo_core::lang::builtins;

use crate::ast::Node;
use crate::writer;

/// Discriminant of a [`Datum`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DatumType {
    Void,
    Integer,
    Float,
    String,
    Symbol,
    List,
    PropList,
    ArgList,
    ArgListNoRet,
    Object,
    VarRef,
}

/// A dynamic Lingo value.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Datum {
    #[default]
    Void,
    Integer(i32),
    Float(f32),
    String(String),
    Symbol(String),
    List(Vec<Node>),
    /// Flat key/value sequence.
    PropList(Vec<Node>),
    ArgList(Vec<Node>),
    ArgListNoRet(Vec<Node>),
    Object(OpaqueObject),
    VarRef(String),
}

impl Datum {
    pub fn symbol(name: impl Into<String>) -> Self {
        Datum::Symbol(name.into())
    }

    pub fn datum_type(&self) -> DatumType {
        match self {
            Datum::Void => DatumType::Void,
            Datum::Integer(_) => DatumType::Integer,
            Datum::Float(_) => DatumType::Float,
            Datum::String(_) => DatumType::String,
            Datum::Symbol(_) => DatumType::Symbol,
            Datum::List(_) => DatumType::List,
            Datum::PropList(_) => DatumType::PropList,
            Datum::ArgList(_) => DatumType::ArgList,
            Datum::ArgListNoRet(_) => DatumType::ArgListNoRet,
            Datum::Object(_) => DatumType::Object,
            Datum::VarRef(_) => DatumType::VarRef,
        }
    }

    /// The integer value, or `0`.
    pub fn as_int(&self) -> i32 {
        match self {
            Datum::Integer(value) => *value,
            _ => 0,
        }
    }

    /// The float value, or `0.0`.
    pub fn as_float(&self) -> f32 {
        match self {
            Datum::Float(value) => *value,
            _ => 0.0,
        }
    }

    /// The string value, or `""`.
    pub fn as_string(&self) -> &str {
        match self {
            Datum::String(value) => value,
            _ => "",
        }
    }

    /// The symbol name (without `#`), or `""`.
    pub fn as_symbol(&self) -> &str {
        match self {
            Datum::Symbol(name) => name,
            _ => "",
        }
    }

    /// Element nodes of a list-shaped datum.
    pub fn as_nodes(&self) -> Option<&[Node]> {
        match self {
            Datum::List(nodes) | Datum::PropList(nodes) | Datum::ArgList(nodes) | Datum::ArgListNoRet(nodes) => {
                Some(nodes)
            }
            _ => None,
        }
    }

    /// Render as Lingo literal text.
    ///
    /// ## Notes
    /// - Argument lists render without brackets (`a, b`), ready to follow a command word.
    /// - Element nodes are rendered with [`writer::expression_to_string`].
    pub fn write(&self) -> String {
        match self {
            Datum::Void => "VOID".to_string(),
            Datum::Integer(value) => value.to_string(),
            Datum::Float(value) => write_float(*value),
            Datum::String(value) => write_string(value),
            Datum::Symbol(name) => format!("#{name}"),
            Datum::VarRef(name) => name.clone(),
            Datum::List(nodes) => format!("[{}]", join(nodes)),
            Datum::ArgList(nodes) | Datum::ArgListNoRet(nodes) => join(nodes),
            Datum::PropList(nodes) if nodes.is_empty() => "[:]".to_string(),
            Datum::PropList(nodes) => {
                let pairs: Vec<String> = nodes
                    .chunks(2)
                    .map(|pair| match pair {
                        [key, value] => format!(
                            "{}: {}",
                            writer::expression_to_string(key),
                            writer::expression_to_string(value)
                        ),
                        [key] => writer::expression_to_string(key),
                        _ => String::new(),
                    })
                    .collect();
                format!("[{}]", pairs.join(", "))
            }
            Datum::Object(_) => "<object>".to_string(),
        }
    }
}

impl fmt::Display for Datum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.write())
    }
}

impl From<i32> for Datum {
    fn from(value: i32) -> Self {
        Datum::Integer(value)
    }
}

impl From<f32> for Datum {
    fn from(value: f32) -> Self {
        Datum::Float(value)
    }
}

impl From<&str> for Datum {
    fn from(value: &str) -> Self {
        Datum::String(value.to_string())
    }
}

impl From<String> for Datum {
    fn from(value: String) -> Self {
        Datum::String(value)
    }
}

/// A host object carried through the tree without inspection.
///
/// Two handles are equal only when they share the same allocation.
#[derive(Clone)]
pub struct OpaqueObject(Arc<dyn Any + Send + Sync>);

impl OpaqueObject {
    pub fn new<T: Any + Send + Sync>(value: T) -> Self {
        Self(Arc::new(value))
    }

    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.0.downcast_ref::<T>()
    }
}

impl fmt::Debug for OpaqueObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("<object>")
    }
}

impl PartialEq for OpaqueObject {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

// --- helpers -----------------------------------------------------------------

fn join(nodes: &[Node]) -> String {
    nodes
        .iter()
        .map(writer::expression_to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Shortest text that reads back as the same float; whole values keep a `.0`.
fn write_float(value: f32) -> String {
    let text = value.to_string();
    if value.is_finite() && !text.contains('.') {
        format!("{text}.0")
    } else {
        text
    }
}

fn write_string(value: &str) -> String {
    if value.chars().count() <= 1 {
        if let Some(name) = builtins::constant_name(value) {
            return name.to_string();
        }
    }

    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for c in value.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            _ => out.push(c),
        }
    }
    out.push('"');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accessors_default_on_tag_mismatch() {
        let five = Datum::Integer(5);
        assert_eq!(five.as_int(), 5);
        assert_eq!(five.as_float(), 0.0);
        assert_eq!(five.as_string(), "");
        assert_eq!(five.as_symbol(), "");
        assert_eq!(Datum::symbol("go").as_symbol(), "go");
        assert_eq!(Datum::from("hi").as_string(), "hi");
        assert_eq!(Datum::Void.as_int(), 0);
        assert!(five.as_nodes().is_none());
    }

    #[test]
    fn write_scalars() {
        assert_eq!(Datum::Integer(5).write(), "5");
        assert_eq!(Datum::Integer(-12).write(), "-12");
        assert_eq!(Datum::Float(1.5).write(), "1.5");
        assert_eq!(Datum::Float(2.0).write(), "2.0");
        assert_eq!(Datum::Void.write(), "VOID");
        assert_eq!(Datum::symbol("done").write(), "#done");
        assert_eq!(Datum::VarRef("x".into()).write(), "x");
    }

    #[test]
    fn write_single_character_strings_as_constants() {
        assert_eq!(Datum::from("\t").write(), "TAB");
        assert_eq!(Datum::from("").write(), "EMPTY");
        assert_eq!(Datum::from("\n").write(), "RETURN");
        assert_eq!(Datum::from("\u{3}").write(), "ENTER");
        assert_eq!(Datum::from("\u{8}").write(), "BACKSPACE");
        assert_eq!(Datum::from("\"").write(), "QUOTE");
        assert_eq!(Datum::from(" ").write(), "SPACE");
        assert_eq!(Datum::from("a").write(), "\"a\"");
    }

    #[test]
    fn write_escapes_longer_strings() {
        assert_eq!(Datum::from("say \"hi\"").write(), r#""say \"hi\"""#);
        assert_eq!(Datum::from("a\tb").write(), r#""a\tb""#);
    }

    #[test]
    fn write_lists() {
        let list = Datum::List(vec![Node::literal(1), Node::literal("a")]);
        assert_eq!(list.write(), "[1, \"a\"]");
        assert_eq!(Datum::List(vec![]).write(), "[]");

        let props = Datum::PropList(vec![
            Node::literal(Datum::symbol("a")),
            Node::literal(1),
            Node::var("b"),
            Node::literal(2),
        ]);
        assert_eq!(props.write(), "[#a: 1, b: 2]");
        assert_eq!(Datum::PropList(vec![]).write(), "[:]");

        let args = Datum::ArgList(vec![Node::var("x"), Node::literal(3)]);
        assert_eq!(args.write(), "x, 3");
    }

    #[test]
    fn empty_list_and_prop_list_differ_only_by_tag() {
        let list = Datum::List(vec![]);
        let props = Datum::PropList(vec![]);
        assert_ne!(list, props);
        assert_eq!(list.as_nodes(), props.as_nodes());
        assert_eq!(props.datum_type(), DatumType::PropList);
    }

    #[test]
    fn opaque_objects_compare_by_identity() {
        let a = OpaqueObject::new(42_u8);
        let b = a.clone();
        assert_eq!(Datum::Object(a.clone()), Datum::Object(b));
        assert_ne!(Datum::Object(a.clone()), Datum::Object(OpaqueObject::new(42_u8)));
        assert_eq!(a.downcast_ref::<u8>(), Some(&42));
        assert_eq!(Datum::Object(a).write(), "<object>");
    }
}
