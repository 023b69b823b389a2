//! Output sink with indentation tracking
//!
//! Append-only: text is never rewritten once written. Indentation is applied at the start of every non-empty
//! line, including lines that begin inside a multi-line string. Preprocessor lines stay in column 0.

use std::fmt;

/// Default indentation step in spaces.
pub const DEFAULT_INDENT_WIDTH: usize = 2;

/// Writer that builds emitted C/C++ text
#[derive(Debug, Clone)]
pub struct CodeWriter {
    /// The output buffer
    output: String,
    /// Current indentation level
    indent_level: usize,
    /// Spaces per indentation level
    indent_width: usize,
    /// Whether we're at the start of a line
    at_line_start: bool,
}

impl Default for CodeWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl CodeWriter {
    pub fn new() -> Self {
        Self::with_indent_width(DEFAULT_INDENT_WIDTH)
    }

    pub fn with_indent_width(indent_width: usize) -> Self {
        Self {
            output: String::new(),
            indent_level: 0,
            indent_width,
            at_line_start: true,
        }
    }

    /// Get the emitted text
    pub fn finish(self) -> String {
        self.output
    }

    pub fn indent(&mut self) {
        self.indent_level += 1;
    }

    pub fn dedent(&mut self) {
        if self.indent_level > 0 {
            self.indent_level -= 1;
        }
    }

    pub fn current_indent(&self) -> usize {
        self.indent_level
    }

    /// Write a string (with auto-indent at line starts)
    pub fn write(&mut self, s: &str) {
        for piece in s.split_inclusive('\n') {
            if self.at_line_start && piece != "\n" && !piece.starts_with('#') {
                self.output.extend(std::iter::repeat_n(' ', self.indent_level * self.indent_width));
            }
            self.output.push_str(piece);
            self.at_line_start = piece.ends_with('\n');
        }
    }

    /// Write a string and newline
    pub fn writeln(&mut self, s: &str) {
        self.write(s);
        self.newline();
    }

    /// Write just a newline
    pub fn newline(&mut self) {
        self.output.push('\n');
        self.at_line_start = true;
    }

    /// Write multiple blank lines
    pub fn blank_lines(&mut self, count: usize) {
        for _ in 0..count {
            self.newline();
        }
    }
}

impl fmt::Write for CodeWriter {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.write(s);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fmt::Write as _;

    // ========================================
    // Write tests
    // ========================================

    #[test]
    fn test_new_writer_empty_output() {
        assert_eq!(CodeWriter::new().finish(), "");
    }

    #[test]
    fn test_write_multiple() {
        let mut writer = CodeWriter::new();
        writer.write("namespace");
        writer.write(" ");
        writer.write("Shapes");
        assert_eq!(writer.finish(), "namespace Shapes");
    }

    #[test]
    fn test_write_empty_string() {
        let mut writer = CodeWriter::new();
        writer.write("");
        assert_eq!(writer.finish(), "");
    }

    #[test]
    fn test_fmt_write() {
        let mut writer = CodeWriter::new();
        write!(writer, "T_{}_{}", 0, 1).unwrap();
        assert_eq!(writer.finish(), "T_0_1");
    }

    // ========================================
    // Indentation tests
    // ========================================

    #[test]
    fn test_indent_applies_to_every_line() {
        let mut writer = CodeWriter::new();
        writer.indent();
        writer.write("a;\nb;\n\nc;");
        assert_eq!(writer.finish(), "  a;\n  b;\n\n  c;");
    }

    #[test]
    fn test_indent_only_at_line_start() {
        let mut writer = CodeWriter::with_indent_width(4);
        writer.indent();
        writer.write("int ");
        writer.writeln("x;");
        writer.dedent();
        writer.writeln("}");
        assert_eq!(writer.finish(), "    int x;\n}\n");
    }

    #[test]
    fn test_directives_stay_flush_left() {
        let mut writer = CodeWriter::new();
        writer.indent();
        writer.write("#ifdef __arm64e__\nauto *p = q;\n#endif\n");
        assert_eq!(writer.finish(), "#ifdef __arm64e__\n  auto *p = q;\n#endif\n");
    }

    #[test]
    fn test_dedent_saturates() {
        let mut writer = CodeWriter::new();
        writer.dedent();
        assert_eq!(writer.current_indent(), 0);
    }

    #[test]
    fn test_blank_lines() {
        let mut writer = CodeWriter::new();
        writer.write("a");
        writer.blank_lines(2);
        writer.write("b");
        assert_eq!(writer.finish(), "a\n\nb");
    }
}
