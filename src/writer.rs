// Helper to accumulate code text with indentation
pub struct CodeWriter {
    code: String,
    indent_unit: String,
    indent_level: usize,
    base_level: usize,
}

/// Indent unit used when none is configured explicitly.
pub const DEFAULT_INDENT_UNIT: &str = "  ";

impl CodeWriter {
    pub fn new(indent_unit: impl Into<String>) -> Self {
        Self::with_level(indent_unit, 0)
    }

    /// Creates a writer that starts emitting at the given indent level. The
    /// level must be restored before `build()` is called.
    pub fn with_level(indent_unit: impl Into<String>, indent_level: usize) -> Self {
        CodeWriter {
            code: String::new(),
            indent_unit: indent_unit.into(),
            indent_level,
            base_level: indent_level,
        }
    }

    pub fn push_indent(&mut self) {
        self.indent_level += 1;
    }

    pub fn pop_indent(&mut self) {
        assert!(self.indent_level > 0, "Indent level cannot be negative");
        self.indent_level -= 1;
    }

    pub fn line(&mut self, line: &str) {
        self.code.push_str(&self.indent_unit.repeat(self.indent_level));
        self.code.push_str(line);
        self.code.push('\n');
    }

    pub fn build(self) -> String {
        assert!(
            self.indent_level == self.base_level,
            "Unmatched indent level"
        );
        self.code
    }
}
