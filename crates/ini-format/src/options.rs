//! Formatting options for INI output.

/// Options for INI output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatOptions {
    /// Quote every value (default: true).
    /// When false, values that read back unchanged are written bare.
    pub always_quote: bool,

    /// Write an empty line before each section header that follows other
    /// output (default: false)
    pub blank_line_between_sections: bool,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            always_quote: true,
            blank_line_between_sections: false,
        }
    }
}

impl FormatOptions {
    /// Create new default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Write values bare where that survives a reload.
    pub fn bare_when_possible(mut self) -> Self {
        self.always_quote = false;
        self
    }

    /// Separate sections with an empty line.
    pub fn spaced_sections(mut self) -> Self {
        self.blank_line_between_sections = true;
        self
    }
}
