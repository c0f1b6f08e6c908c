//! Low-level INI output writer.

use std::io::{self, Write};

use crate::options::FormatOptions;
use crate::scalar::{can_be_bare, quote};

/// Low-level INI output writer.
///
/// Section headers are written lazily: [`IniWriter::begin_section`] only
/// records the name, and the `[name]` line is written right before the
/// section's first entry. A section without entries leaves no trace.
/// The default section (`""`) never gets a header.
pub struct IniWriter<W> {
    out: W,
    options: FormatOptions,
    /// Header waiting for the first entry of its section.
    pending_section: Option<String>,
    written: u64,
}

impl<W: Write> IniWriter<W> {
    /// Create a new writer with default options.
    pub fn new(out: W) -> Self {
        Self::with_options(out, FormatOptions::default())
    }

    /// Create a new writer with the given options.
    pub fn with_options(out: W, options: FormatOptions) -> Self {
        Self {
            out,
            options,
            pending_section: None,
            written: 0,
        }
    }

    /// Number of bytes written so far.
    pub fn bytes_written(&self) -> u64 {
        self.written
    }

    /// Consume the writer and return the underlying sink.
    pub fn into_inner(self) -> W {
        self.out
    }

    /// Start a new section. Following entries belong to it.
    pub fn begin_section(&mut self, name: &str) {
        self.pending_section = if name.is_empty() {
            None
        } else {
            Some(name.to_string())
        };
    }

    /// Write one `key=value` line, preceded by a pending section header.
    pub fn write_entry(&mut self, key: &str, value: &str) -> io::Result<()> {
        if let Some(name) = self.pending_section.take() {
            if self.options.blank_line_between_sections && self.written > 0 {
                self.write_str("\n")?;
            }
            self.write_str(&format!("[{name}]\n"))?;
        }

        let line = if !self.options.always_quote && can_be_bare(value) {
            format!("{key}={value}\n")
        } else {
            format!("{key}={}\n", quote(value))
        };
        self.write_str(&line)
    }

    /// Flush the underlying sink and return the total bytes written.
    pub fn finish(mut self) -> io::Result<u64> {
        self.out.flush()?;
        Ok(self.written)
    }

    fn write_str(&mut self, s: &str) -> io::Result<()> {
        self.out.write_all(s.as_bytes())?;
        self.written += s.len() as u64;
        Ok(())
    }
}
