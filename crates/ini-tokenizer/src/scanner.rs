//! Scanner for INI source text.

use crate::{MAX_SOURCE_LEN, Position, Span, Token, TokenKind};
use tracing::trace;

/// A scanner that produces one token at a time from INI source text.
///
/// Horizontal tabs are insignificant: they are skipped before every token,
/// but [`Scanner::peek`] sees them.
#[derive(Clone)]
pub struct Scanner<'src> {
    /// The source text being scanned.
    source: &'src str,
    /// The remaining source text (suffix of `source`).
    remaining: &'src str,
    /// Position of the next character.
    pos: Position,
}

impl<'src> Scanner<'src> {
    /// Create a new scanner for the given source text.
    ///
    /// `source` must be at most [`MAX_SOURCE_LEN`] bytes long.
    pub fn new(source: &'src str) -> Self {
        debug_assert!(source.len() <= MAX_SOURCE_LEN);
        Self {
            source,
            remaining: source,
            pos: Position::START,
        }
    }

    /// Get the position of the next character.
    #[inline]
    pub fn position(&self) -> Position {
        self.pos
    }

    /// The source text for a span produced by this scanner.
    #[inline]
    pub fn slice(&self, span: Span) -> &'src str {
        span.slice(self.source)
    }

    /// Peek at the next raw character without consuming it.
    ///
    /// Returns `None` at end of input. Unlike [`Scanner::next_token`], this
    /// does not skip whitespace.
    #[inline]
    pub fn peek(&self) -> Option<char> {
        self.remaining.chars().next()
    }

    /// Advance by one character and return it.
    #[inline]
    fn advance(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos = self.pos.advance(c);
        self.remaining = &self.remaining[c.len_utf8()..];
        Some(c)
    }

    /// Create a token from the given start position to current position.
    fn token(&self, kind: TokenKind, start: Position) -> Token<'src> {
        let span = Span::new(start.offset, self.pos.offset);
        let text = span.slice(self.source);
        trace!("Token {:?} at {}: {:?}", kind, start, text);
        Token::new(kind, span, start, text)
    }

    fn skip_whitespace(&mut self) {
        while let Some(c) = self.peek() {
            if is_whitespace(c) {
                self.advance();
            } else {
                break;
            }
        }
    }

    /// Get the next token.
    pub fn next_token(&mut self) -> Token<'src> {
        self.skip_whitespace();

        let start = self.pos;
        match self.peek() {
            None => self.token(TokenKind::Eof, start),
            Some('"') => self.scan_quoted_string(),
            Some(c) => {
                self.advance();
                self.token(TokenKind::Char(c), start)
            }
        }
    }

    /// Consume raw characters up to and including the next `\n`, or to the
    /// end of input when there is none. Returns the consumed span.
    pub fn skip_line(&mut self) -> Span {
        let start = self.pos.offset;
        while let Some(c) = self.advance() {
            if c == '\n' {
                break;
            }
        }
        Span::new(start, self.pos.offset)
    }

    /// Scan a quoted string: `"..."`.
    ///
    /// A backslash escapes the next character. A string left open ends before
    /// the line feed or at end of input, so its token has no closing quote.
    fn scan_quoted_string(&mut self) -> Token<'src> {
        let start = self.pos;

        // Consume opening quote
        self.advance();

        loop {
            match self.peek() {
                None | Some('\n') => {
                    trace!("Quoted string at {} not closed", start);
                    break;
                }
                Some('"') => {
                    self.advance();
                    break;
                }
                Some('\\') => {
                    self.advance();
                    if matches!(self.peek(), Some(c) if c != '\n') {
                        self.advance();
                    }
                }
                Some(_) => {
                    self.advance();
                }
            }
        }

        self.token(TokenKind::QuotedString, start)
    }
}

impl<'src> Iterator for Scanner<'src> {
    type Item = Token<'src>;

    fn next(&mut self) -> Option<Self::Item> {
        let token = self.next_token();
        if token.kind == TokenKind::Eof {
            None
        } else {
            Some(token)
        }
    }
}

/// Characters skipped between tokens.
fn is_whitespace(c: char) -> bool {
    c == '\t'
}
