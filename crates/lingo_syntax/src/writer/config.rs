//! Formatting configuration for Lingo source output.

/// Formatting configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatConfig {
    /// Tabs or spaces for one indentation level
    pub indent_style: IndentStyle,
    /// Number of spaces per indentation level (ignored for tabs)
    pub indent_width: usize,
    /// Line terminator written after every line
    pub line_ending: LineEnding,
}

/// Indentation character
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndentStyle {
    Tabs,
    Spaces,
}

/// Line terminator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineEnding {
    Lf,
    CrLf,
}

impl LineEnding {
    pub fn as_str(self) -> &'static str {
        match self {
            LineEnding::Lf => "\n",
            LineEnding::CrLf => "\r\n",
        }
    }
}

impl Default for FormatConfig {
    fn default() -> Self {
        // Tab indentation, as in the authoring tool's script editor.
        Self {
            indent_style: IndentStyle::Tabs,
            indent_width: 4,
            line_ending: LineEnding::Lf,
        }
    }
}

impl FormatConfig {
    /// Create a new config with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Indent with `width` spaces per level
    pub fn with_spaces(mut self, width: usize) -> Self {
        self.indent_style = IndentStyle::Spaces;
        self.indent_width = width;
        self
    }

    /// Set the indentation style
    pub fn with_indent_style(mut self, style: IndentStyle) -> Self {
        self.indent_style = style;
        self
    }

    /// Set the indentation width
    pub fn with_indent_width(mut self, width: usize) -> Self {
        self.indent_width = width;
        self
    }

    /// Set the line ending
    pub fn with_line_ending(mut self, line_ending: LineEnding) -> Self {
        self.line_ending = line_ending;
        self
    }

    /// Text for one indentation level
    pub fn indent_unit(&self) -> String {
        match self.indent_style {
            IndentStyle::Tabs => "\t".to_string(),
            IndentStyle::Spaces => " ".repeat(self.indent_width),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = FormatConfig::default();
        assert_eq!(config.indent_style, IndentStyle::Tabs);
        assert_eq!(config.indent_width, 4);
        assert_eq!(config.line_ending, LineEnding::Lf);
        assert_eq!(config.indent_unit(), "\t");
    }

    #[test]
    fn test_new_equals_default() {
        assert_eq!(FormatConfig::new(), FormatConfig::default());
    }

    #[test]
    fn test_with_spaces() {
        let config = FormatConfig::new().with_spaces(2);
        assert_eq!(config.indent_style, IndentStyle::Spaces);
        assert_eq!(config.indent_unit(), "  ");
    }

    #[test]
    fn test_builder_chain() {
        let config = FormatConfig::new()
            .with_indent_style(IndentStyle::Spaces)
            .with_indent_width(3)
            .with_line_ending(LineEnding::CrLf);
        assert_eq!(config.indent_unit(), "   ");
        assert_eq!(config.line_ending.as_str(), "\r\n");
    }

    #[test]
    fn test_indent_width_ignored_for_tabs() {
        let config = FormatConfig::new().with_indent_width(8);
        assert_eq!(config.indent_unit(), "\t");
    }
}
