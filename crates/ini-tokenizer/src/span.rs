//! Span and position tracking for source locations.

use std::fmt;

/// Longest source, in bytes, whose offsets fit a [`Span`].
pub const MAX_SOURCE_LEN: usize = u32::MAX as usize;

/// A span representing a range in the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Span {
    /// Byte offset of the start (inclusive)
    pub start: u32,
    /// Byte offset of the end (exclusive)
    pub end: u32,
}

impl Span {
    /// Create a new span from start and end byte offsets.
    #[inline]
    pub fn new(start: u32, end: u32) -> Self {
        debug_assert!(start <= end);
        Self { start, end }
    }

    /// Get the source text for this span.
    #[inline]
    pub fn slice<'a>(&self, source: &'a str) -> &'a str {
        &source[std::ops::Range::from(*self)]
    }
}

impl From<Span> for std::ops::Range<usize> {
    fn from(span: Span) -> Self {
        span.start as usize..span.end as usize
    }
}

/// A human-readable location: 1-based line and column.
///
/// Columns count characters, not bytes. Offsets are `u32`, so a source may be
/// at most [`MAX_SOURCE_LEN`] bytes long.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    /// Byte offset into the source.
    pub offset: u32,
    /// Line number, starting at 1.
    pub line: u32,
    /// Column number, starting at 1.
    pub column: u32,
}

impl Position {
    /// The position of the first character of a source.
    pub const START: Position = Position {
        offset: 0,
        line: 1,
        column: 1,
    };

    /// Position after consuming `c`.
    #[inline]
    pub(crate) fn advance(self, c: char) -> Position {
        let offset = self.offset + c.len_utf8() as u32;
        if c == '\n' {
            Position {
                offset,
                line: self.line + 1,
                column: 1,
            }
        } else {
            Position {
                offset,
                line: self.line,
                column: self.column + 1,
            }
        }
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::START
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}
