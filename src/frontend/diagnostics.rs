//! Diagnostics and error reporting for Lingo
//!
//! Renders a [`ParseError`] against the script it came from, with the failing line highlighted.

use miette::{Diagnostic, GraphicalReportHandler, GraphicalTheme, NamedSource, SourceSpan};
use thiserror::Error;

pub use lingo_syntax::diagnostics::ParseError;

/// A [`ParseError`] bound to its source text, for rendering.
#[derive(Debug, Error, Diagnostic)]
#[error("{message}")]
#[diagnostic(code(lingo::parse::unexpected_token))]
pub struct SourceParseError {
    message: String,
    #[source_code]
    source_code: NamedSource<String>,
    #[label("parsing stopped on this line")]
    span: SourceSpan,
    #[help]
    help: Option<String>,
}

impl SourceParseError {
    pub fn new(file_name: &str, source: &str, error: &ParseError) -> Self {
        Self {
            message: error.to_string(),
            source_code: NamedSource::new(file_name, source.to_string()),
            span: line_span(source, error.line()),
            help: error.help().map(|help| help.to_string()),
        }
    }
}

/// Render `error` as a plain-text report (no colors) naming `file_name`.
pub fn render_parse_error(file_name: &str, source: &str, error: &ParseError) -> String {
    let report = SourceParseError::new(file_name, source, error);
    let mut out = String::new();
    let handler = GraphicalReportHandler::new_themed(GraphicalTheme::unicode_nocolor()).with_width(200);
    match handler.render_report(&mut out, &report) {
        Ok(()) => out,
        Err(_) => format!("{file_name}: {}", report.message),
    }
}

/// Byte span of 1-based `line` (without its terminator); past-the-end lines map to an empty span at EOF.
fn line_span(source: &str, line: usize) -> SourceSpan {
    let mut offset = 0;
    for (index, text) in source.split('\n').enumerate() {
        if index + 1 == line {
            let len = text.trim_end_matches('\r').len();
            return (offset, len).into();
        }
        offset += text.len() + 1;
    }
    (source.len(), 0).into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use lingo_syntax::parser;

    #[test]
    fn test_line_span_covers_requested_line() {
        let source = "on a\r\n  beep\nend";
        assert_eq!(line_span(source, 1), (0, 4).into());
        assert_eq!(line_span(source, 2), (6, 6).into());
        assert_eq!(line_span(source, 3), (13, 3).into());
        assert_eq!(line_span(source, 9), (16, 0).into());
    }

    #[test]
    fn test_render_names_file_code_and_message() {
        let source = "if x then\n  put 1\n";
        let error = parser::parse(source).expect_err("missing end if");
        let rendered = render_parse_error("demo.ls", source, &error);
        assert!(rendered.contains("lingo::parse::unexpected_token"), "got: {rendered}");
        assert!(
            rendered.contains("Expected token 'end', but got end of input at line 3"),
            "got: {rendered}"
        );
        assert!(rendered.contains("demo.ls"), "got: {rendered}");
    }
}
