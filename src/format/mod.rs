//! Lingo Code Formatter
//!
//! This module provides source formatting for Lingo scripts: parse, then print the tree back with
//! [`lingo_syntax::writer`]. Defaults follow the authoring tool's script editor:
//! - tab indentation
//! - one statement per line, block bodies indented one level
//! - `if` always in block form

pub use lingo_syntax::writer::{FormatConfig, IndentStyle, LineEnding};

use crate::frontend::diagnostics::ParseError;
use crate::frontend::{parser, writer};

/// Format Lingo source code with default settings
pub fn format_source(source: &str) -> Result<String, ParseError> {
    format_source_with_config(source, &FormatConfig::default())
}

/// Format Lingo source code with custom configuration
pub fn format_source_with_config(source: &str, config: &FormatConfig) -> Result<String, ParseError> {
    let ast = parser::parse(source)?;
    Ok(writer::write_block(&ast, config))
}

/// Check if source code is already formatted
pub fn check_formatted(source: &str) -> Result<bool, ParseError> {
    let formatted = format_source(source)?;
    Ok(source == formatted)
}

/// Get the diff between original and formatted source
pub fn format_diff(source: &str, config: &FormatConfig) -> Result<Option<String>, ParseError> {
    let formatted = format_source_with_config(source, config)?;

    if source == formatted {
        return Ok(None);
    }

    // Simple line-by-line diff
    let mut diff = String::new();
    let original_lines: Vec<&str> = source.lines().collect();
    let formatted_lines: Vec<&str> = formatted.lines().collect();

    let max_lines = original_lines.len().max(formatted_lines.len());

    for i in 0..max_lines {
        let orig = original_lines.get(i).copied().unwrap_or("");
        let fmt = formatted_lines.get(i).copied().unwrap_or("");

        if orig != fmt {
            if !orig.is_empty() {
                diff.push_str(&format!("-{:4} | {}\n", i + 1, orig));
            }
            if !fmt.is_empty() {
                diff.push_str(&format!("+{:4} | {}\n", i + 1, fmt));
            }
        }
    }

    Ok(Some(diff))
}

#[cfg(test)]
mod tests {
    use super::*;

    // ========================================
    // format_source tests
    // ========================================

    #[test]
    fn test_format_source_handler() {
        let source = "on startMovie\n  put 1 into x\nend startMovie\n";
        let result = format_source(source).expect("formats");
        assert_eq!(result, "on startMovie\n\tput 1 into x\nend\n");
    }

    #[test]
    fn test_format_source_invalid_syntax() {
        let err = format_source("repeat while x\n").expect_err("missing end repeat");
        assert_eq!(err.line(), 2);
    }

    #[test]
    fn test_format_source_empty() {
        assert_eq!(format_source("").expect("formats"), "");
    }

    #[test]
    fn test_format_source_with_custom_config() {
        let config = FormatConfig::new().with_spaces(2).with_line_ending(LineEnding::CrLf);
        let result = format_source_with_config("on a\nbeep\nend", &config).expect("formats");
        assert_eq!(result, "on a\r\n  beep\r\nend\r\n");
    }

    // ========================================
    // check_formatted tests
    // ========================================

    #[test]
    fn test_check_formatted() {
        assert!(check_formatted("on a\n\tbeep\nend\n").expect("parses"));
        assert!(!check_formatted("on a\n  beep\nend\n").expect("parses"));
    }

    // ========================================
    // format_diff tests
    // ========================================

    #[test]
    fn test_format_diff_none_when_formatted() {
        let diff = format_diff("x = 1\n", &FormatConfig::default()).expect("parses");
        assert!(diff.is_none());
    }

    #[test]
    fn test_format_diff_lists_changed_lines() {
        let diff = format_diff("x=1\ny = 2\n", &FormatConfig::default())
            .expect("parses")
            .expect("needs formatting");
        assert_eq!(diff, "-   1 | x=1\n+   1 | x = 1\n");
    }
}
