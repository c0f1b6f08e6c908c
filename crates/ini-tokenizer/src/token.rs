//! Token types for the INI scanner.

use crate::{Position, Span};

/// The kind of a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// A single character (including `\n` and `\r`).
    Char(char),
    /// Quoted string: `"hello"`. The token text includes the quotes; the
    /// closing one is missing when the string was not closed on its line.
    QuotedString,
    /// End of input
    Eof,
}

/// A token with its kind, span, position, and source text slice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token<'src> {
    /// The kind of token.
    pub kind: TokenKind,
    /// The span in the source text.
    pub span: Span,
    /// Line and column of the first character.
    pub position: Position,
    /// The source text of this token.
    pub text: &'src str,
}

impl<'src> Token<'src> {
    /// Create a new token.
    pub fn new(kind: TokenKind, span: Span, position: Position, text: &'src str) -> Self {
        Self {
            kind,
            span,
            position,
            text,
        }
    }
}
