//! Scripts and handlers
//!
//! A [`Script`] is one source file of Lingo code. Loading it splits the text into [`Handler`]s eagerly using only
//! the lexer; each handler's AST is parsed on first use and cached.
//!
//! ## Notes
//! - An `on` token that starts a line opens a handler; an `end` that starts a line and is not followed on the same
//!   line by a keyword (`end if`, `end repeat`, ...) closes it.
//! - Parse errors from a handler report lines of the whole script, not of the handler's own text.

use std::cell::OnceCell;
use std::fs;
use std::path::{Path, PathBuf};

use lingo_core::lang::keywords::KeywordId;
use lingo_syntax::ast::{Block, Node};
use lingo_syntax::diagnostics::ParseError;
use lingo_syntax::lexer::{self, Token, TokenKind};
use lingo_syntax::parser;
use lingo_syntax::visitor::Visitor;
use thiserror::Error;

/// Errors raised while loading or checking a script.
#[derive(Debug, Error)]
pub enum ScriptError {
    #[error("Error reading '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("{handler}: {source}")]
    Parse {
        handler: String,
        #[source]
        source: ParseError,
    },
}

/// A named handler and its lazily parsed body.
#[derive(Debug)]
pub struct Handler {
    name: String,
    arguments: Vec<String>,
    source: String,
    /// 1-based script line of the `on` keyword.
    first_line: usize,
    ast: OnceCell<Result<Block, ParseError>>,
}

impl Handler {
    fn new(name: String, arguments: Vec<String>, source: String, first_line: usize) -> Self {
        Self {
            name,
            arguments,
            source,
            first_line,
            ast: OnceCell::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn arguments(&self) -> &[String] {
        &self.arguments
    }

    /// The handler's text, from `on` through its closing `end`.
    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn first_line(&self) -> usize {
        self.first_line
    }

    /// Parse the handler on first call and return its body.
    ///
    /// ## Errors
    /// The [`ParseError`] of the first (and every later) call, with lines relative to the script.
    pub fn ast(&self) -> Result<&Block, ParseError> {
        self.ast
            .get_or_init(|| {
                tracing::debug!(handler = %self.name, line = self.first_line, "parsing handler");
                parser::parse(&self.source)
                    .map(handler_body)
                    .map_err(|err| err.with_line_offset(self.first_line - 1))
            })
            .as_ref()
            .map_err(Clone::clone)
    }

    /// Names declared by `global` statements anywhere in the handler body, in source order, without duplicates.
    pub fn globals(&self) -> Result<Vec<String>, ParseError> {
        let mut collector = DeclarationCollector::default();
        self.ast()?.accept(&mut collector);
        Ok(collector.globals)
    }
}

/// Script-level `global` and `property` declarations (outside handlers).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Declarations {
    pub globals: Vec<String>,
    pub properties: Vec<String>,
}

/// A loaded script: its text and its handlers in source order.
#[derive(Debug)]
pub struct Script {
    name: String,
    source: String,
    handlers: Vec<Handler>,
}

impl Script {
    pub fn new(name: impl Into<String>, source: impl Into<String>) -> Self {
        let source = source.into();
        let handlers = split_handlers(&source);
        Self {
            name: name.into(),
            source,
            handlers,
        }
    }

    /// Read a script from disk; the file stem becomes its name.
    pub fn load(path: &Path) -> Result<Self, ScriptError> {
        let source = fs::read_to_string(path).map_err(|source| ScriptError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let name = path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_default();
        Ok(Self::new(name, source))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn handlers(&self) -> &[Handler] {
        &self.handlers
    }

    /// Find a handler by name (ASCII case-insensitive, like every Lingo identifier).
    pub fn handler(&self, name: &str) -> Option<&Handler> {
        self.handlers.iter().find(|h| h.name.eq_ignore_ascii_case(name))
    }

    /// Parse every handler, stopping at the first failure.
    pub fn check(&self) -> Result<(), ScriptError> {
        for handler in &self.handlers {
            handler.ast().map_err(|source| ScriptError::Parse {
                handler: handler.name.clone(),
                source,
            })?;
        }
        Ok(())
    }

    /// Collect `global`/`property` declarations made outside any handler.
    pub fn declarations(&self) -> Result<Declarations, ParseError> {
        let root = parser::parse(&self.source)?;
        let mut declarations = Declarations::default();
        for child in &root.children {
            match child {
                Node::GlobalDecl(names) => extend_unique(&mut declarations.globals, names),
                Node::PropertyDecl(names) => extend_unique(&mut declarations.properties, names),
                _ => {}
            }
        }
        Ok(declarations)
    }
}

// ---- splitting ----------------------------------------------------------------

fn split_handlers(source: &str) -> Vec<Handler> {
    let tokens = lexer::lex(source);
    let lines: Vec<&str> = source.lines().collect();
    let mut handlers = Vec::new();
    let mut open: Option<(usize, String, Vec<String>)> = None;

    let mut previous_line = 0;
    for (index, token) in tokens.iter().enumerate() {
        let starts_line = token.line != previous_line;
        previous_line = token.line;
        if !starts_line {
            continue;
        }

        if open.is_none() && token.is_keyword(KeywordId::On) {
            let (name, arguments) = handler_signature(&tokens[index + 1..], token.line);
            open = Some((token.line, name, arguments));
        } else if token.is_keyword(KeywordId::End) && closes_handler(tokens.get(index + 1), token.line) {
            if let Some((start, name, arguments)) = open.take() {
                let text = slice_lines(&lines, start, token.line);
                handlers.push(Handler::new(name, arguments, text, start));
            }
        }
    }

    if let Some((start, name, arguments)) = open {
        let text = slice_lines(&lines, start, lines.len());
        handlers.push(Handler::new(name, arguments, text, start));
    }
    handlers
}

/// Name and argument names from the tokens after `on`, on the `on` line.
fn handler_signature(rest: &[Token], line: usize) -> (String, Vec<String>) {
    let mut on_line = rest.iter().take_while(|t| t.line == line && t.kind != TokenKind::Eof);
    let name = on_line.next().map(|t| t.lexeme.clone()).unwrap_or_default();
    let arguments = on_line
        .filter(|t| matches!(t.kind, TokenKind::Identifier | TokenKind::Keyword(KeywordId::Me)))
        .map(|t| t.lexeme.clone())
        .collect();
    (name, arguments)
}

/// A bare `end` (or `end name`) closes a handler; `end if` and friends do not.
fn closes_handler(next: Option<&Token>, line: usize) -> bool {
    match next {
        Some(token) if token.line == line => !matches!(token.kind, TokenKind::Keyword(_)),
        _ => true,
    }
}

/// Lines `first..=last` (1-based) joined with `\n`.
fn slice_lines(lines: &[&str], first: usize, last: usize) -> String {
    lines
        .get(first.saturating_sub(1)..last.min(lines.len()))
        .map(|slice| slice.join("\n"))
        .unwrap_or_default()
}

// ---- parsing ------------------------------------------------------------------

/// The body of the first handler in a parsed handler text.
fn handler_body(root: Block) -> Block {
    root.children
        .into_iter()
        .find_map(|node| match node {
            Node::Handler(handler) => Some(handler.block),
            _ => None,
        })
        .unwrap_or_default()
}

fn extend_unique(into: &mut Vec<String>, names: &[String]) {
    for name in names {
        if !into.iter().any(|existing| existing.eq_ignore_ascii_case(name)) {
            into.push(name.clone());
        }
    }
}

#[derive(Default)]
struct DeclarationCollector {
    globals: Vec<String>,
}

impl Visitor for DeclarationCollector {
    fn visit_global_decl(&mut self, names: &[String]) {
        extend_unique(&mut self.globals, names);
    }
}
