//! Event and error types for the INI parser.

use std::borrow::Cow;
use std::fmt;

use crate::{Position, Span};

/// Events emitted by the parser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event<'src> {
    /// A `;` or `#` comment line.
    Comment {
        /// Span of the comment, including its line terminator.
        span: Span,
        /// Comment text without the line terminator.
        text: &'src str,
    },

    /// A section header `[name]`.
    ///
    /// Entries that follow belong to this section until the next header.
    Section {
        /// Span from `[` to `]`.
        span: Span,
        /// Section name between the brackets.
        name: Cow<'src, str>,
    },

    /// A `key=value` entry.
    Entry {
        /// Span of the key text (up to, not including, `=`).
        key_span: Span,
        /// Key with spaces removed.
        key: Cow<'src, str>,
        /// Span of the value text.
        value_span: Span,
        /// Value, with quotes stripped for quoted values.
        value: Cow<'src, str>,
        /// How the value was written.
        kind: ValueKind,
    },
}

/// How a value was written in the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    /// Unquoted text up to the end of the line.
    Bare,
    /// Double-quoted string. Escapes are kept verbatim.
    Quoted,
}

/// Parse error kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// A section header reached a line break (or end of input) before `]`.
    UnterminatedSection,
    /// Input ended before the `=` of a key.
    UnexpectedEofInKey,
    /// A quoted string appeared where a key was expected.
    QuotedStringInKey,
}

impl ParseErrorKind {
    /// Short description of the error.
    pub fn message(&self) -> &'static str {
        match self {
            ParseErrorKind::UnterminatedSection => "unterminated section header",
            ParseErrorKind::UnexpectedEofInKey => "unexpected end of input while reading key",
            ParseErrorKind::QuotedStringInKey => "unexpected quoted string in key position",
        }
    }
}

impl fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// A syntax error with its location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    /// The kind of error.
    pub kind: ParseErrorKind,
    /// Span of the offending token.
    pub span: Span,
    /// Line and column of the offending token.
    pub position: Position,
}

impl ParseError {
    /// Create a new parse error.
    pub fn new(kind: ParseErrorKind, span: Span, position: Position) -> Self {
        Self {
            kind,
            span,
            position,
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at {}", self.kind, self.position)
    }
}

impl std::error::Error for ParseError {}
