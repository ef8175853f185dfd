//! Builtin names the parser treats specially.
//!
//! Lingo has a handful of identifiers that are not reserved words but still change how the parser reads the
//! surrounding tokens: character constants (`ENTER`, `TAB`, ...), pseudo-commands (`go to`, `sendSprite`),
//! pseudo-functions (`sprite(1)`, `member "x"`, `field 3`), and the targets of `the <prop> of <target>`.
//!
//! ## Notes
//! - Every lookup here ignores ASCII case, like the language itself.
//! - The character-constant table is shared by the parser (name to text) and by literal serialisation (text to name).
//!
//! ## Examples
//! ```rust
//! use lingo_core::lang::builtins::{self, PseudoFunction};
//!
//! assert_eq!(builtins::constant_value("tab"), Some("\t"));
//! assert_eq!(builtins::constant_name("\n"), Some("RETURN"));
//! assert_eq!(builtins::pseudo_function("Sprite"), Some(PseudoFunction::Sprite));
//! ```

/// A named character constant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CharConstant {
    /// Uppercase spelling used in source.
    pub name: &'static str,
    pub value: &'static str,
    /// `true` when the parser reads `name` as an identifier and replaces it with `value`.
    ///
    /// `RETURN` is a keyword and `EMPTY` is an ordinary variable to the parser, so both are write-only names.
    pub is_identifier: bool,
}

pub const CHAR_CONSTANTS: &[CharConstant] = &[
    constant("BACKSPACE", "\u{8}", true),
    constant("ENTER", "\u{3}", true),
    constant("QUOTE", "\"", true),
    constant("SPACE", " ", true),
    constant("TAB", "\t", true),
    constant("RETURN", "\n", false),
    constant("EMPTY", "", false),
];

/// Text of an identifier-spelled character constant.
pub fn constant_value(name: &str) -> Option<&'static str> {
    CHAR_CONSTANTS
        .iter()
        .find(|c| c.is_identifier && c.name.eq_ignore_ascii_case(name))
        .map(|c| c.value)
}

/// Symbolic name for a string that has one.
pub fn constant_name(value: &str) -> Option<&'static str> {
    CHAR_CONSTANTS.iter().find(|c| c.value == value).map(|c| c.name)
}

/// Bare command words with their own statement syntax.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PseudoCommand {
    /// `cursor <expr>`
    Cursor,
    /// `go [to] <expr>`
    Go,
    /// `sendSprite <sprite>, <message> {, <arg>}`
    SendSprite,
}

const PSEUDO_COMMANDS: &[(PseudoCommand, &str)] = &[
    (PseudoCommand::Cursor, "cursor"),
    (PseudoCommand::Go, "go"),
    (PseudoCommand::SendSprite, "sendSprite"),
];

pub fn pseudo_command(name: &str) -> Option<PseudoCommand> {
    lookup(PSEUDO_COMMANDS, name)
}

pub fn pseudo_command_str(id: PseudoCommand) -> &'static str {
    spelling(PSEUDO_COMMANDS, id)
}

/// Identifiers with call-like syntax that build property expressions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PseudoFunction {
    /// `sprite(<expr>)`
    Sprite,
    /// `member(<expr>[, <castLib>])`
    Member,
    /// `field <expr>`
    Field,
}

const PSEUDO_FUNCTIONS: &[(PseudoFunction, &str)] = &[
    (PseudoFunction::Sprite, "sprite"),
    (PseudoFunction::Member, "member"),
    (PseudoFunction::Field, "field"),
];

pub fn pseudo_function(name: &str) -> Option<PseudoFunction> {
    lookup(PSEUDO_FUNCTIONS, name)
}

pub fn pseudo_function_str(id: PseudoFunction) -> &'static str {
    spelling(PSEUDO_FUNCTIONS, id)
}

/// Targets accepted after `the <prop> of`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OfTarget {
    Sprite,
    Menu,
    MenuItem,
    Sound,
}

const OF_TARGETS: &[(OfTarget, &str)] = &[
    (OfTarget::Sprite, "sprite"),
    (OfTarget::Menu, "menu"),
    (OfTarget::MenuItem, "menuItem"),
    (OfTarget::Sound, "sound"),
];

pub fn of_target(name: &str) -> Option<OfTarget> {
    lookup(OF_TARGETS, name)
}

pub fn of_target_str(id: OfTarget) -> &'static str {
    spelling(OF_TARGETS, id)
}

/// Placement words accepted after `put <value>` besides the `into` keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PutPlacement {
    Before,
    After,
}

const PUT_PLACEMENTS: &[(PutPlacement, &str)] = &[(PutPlacement::Before, "before"), (PutPlacement::After, "after")];

pub fn put_placement(name: &str) -> Option<PutPlacement> {
    lookup(PUT_PLACEMENTS, name)
}

pub fn put_placement_str(id: PutPlacement) -> &'static str {
    spelling(PUT_PLACEMENTS, id)
}

// --- helpers -----------------------------------------------------------------

const fn constant(name: &'static str, value: &'static str, is_identifier: bool) -> CharConstant {
    CharConstant {
        name,
        value,
        is_identifier,
    }
}

fn lookup<T: Copy>(table: &[(T, &'static str)], name: &str) -> Option<T> {
    table
        .iter()
        .find(|(_, spelling)| spelling.eq_ignore_ascii_case(name))
        .map(|(id, _)| *id)
}

fn spelling<T: Copy + PartialEq>(table: &[(T, &'static str)], id: T) -> &'static str {
    table
        .iter()
        .find(|(candidate, _)| *candidate == id)
        .map_or("", |(_, spelling)| spelling)
}
