//! Output buffer with indentation tracking

use super::config::FormatConfig;

/// Buffer that tracks indentation and builds formatted output
pub(crate) struct OutputBuffer {
    /// The output buffer
    output: String,
    /// Current indentation level
    indent_level: usize,
    /// Text for one indentation level
    indent_unit: String,
    line_ending: &'static str,
    /// Whether we're at the start of a line
    at_line_start: bool,
}

impl OutputBuffer {
    pub(crate) fn new(config: &FormatConfig) -> Self {
        Self {
            output: String::new(),
            indent_level: 0,
            indent_unit: config.indent_unit(),
            line_ending: config.line_ending.as_str(),
            at_line_start: true,
        }
    }

    /// Get the formatted output
    pub(crate) fn finish(self) -> String {
        self.output
    }

    pub(crate) fn indent(&mut self) {
        self.indent_level += 1;
    }

    pub(crate) fn dedent(&mut self) {
        self.indent_level = self.indent_level.saturating_sub(1);
    }

    /// Write indentation if at line start
    fn write_indent(&mut self) {
        if self.at_line_start {
            for _ in 0..self.indent_level {
                self.output.push_str(&self.indent_unit);
            }
            self.at_line_start = false;
        }
    }

    /// Write a string (with auto-indent)
    pub(crate) fn write(&mut self, s: &str) {
        if s.is_empty() {
            return;
        }
        self.write_indent();
        self.output.push_str(s);
    }

    /// Write a string and newline
    pub(crate) fn writeln(&mut self, s: &str) {
        self.write(s);
        self.newline();
    }

    pub(crate) fn newline(&mut self) {
        self.output.push_str(self.line_ending);
        self.at_line_start = true;
    }

    /// End the current line unless nothing has been written on it yet
    pub(crate) fn end_line(&mut self) {
        if !self.at_line_start {
            self.newline();
        }
    }

    #[cfg(test)]
    fn current_indent(&self) -> usize {
        self.indent_level
    }
}
