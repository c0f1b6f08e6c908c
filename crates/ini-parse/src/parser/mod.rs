//! Pull-based event parser for INI.

use std::borrow::Cow;

use ini_tokenizer::{Scanner, Span, Token, TokenKind};

use crate::event::{ParseError, ParseErrorKind, ValueKind};
use crate::{Event, ParseCallback};
#[allow(unused_imports)]
use crate::trace;


/// Event parser for INI documents.
///
/// Each line is classified by peeking at its first raw character:
/// `;` and `#` start a comment, `[` starts a section header, line breaks are
/// skipped, and anything else starts a `key=value` entry.
///
/// The first syntax error ends the parse.
#[derive(Clone)]
pub struct Parser<'src> {
    scanner: Scanner<'src>,
}

impl<'src> Parser<'src> {
    /// Create a new parser for the given source text.
    pub fn new(source: &'src str) -> Self {
        Self {
            scanner: Scanner::new(source),
        }
    }

    /// Parse the whole input, sending every event to `callback`.
    ///
    /// Stops early when the callback returns `false`.
    pub fn parse<C: ParseCallback<'src>>(mut self, callback: &mut C) -> Result<(), ParseError> {
        while let Some(event) = self.next_event()? {
            if !callback.event(event) {
                trace!("Callback stopped parsing at {}", self.scanner.position());
                break;
            }
        }
        Ok(())
    }

    /// Parse the whole input and collect the events.
    pub fn parse_to_vec(self) -> Result<Vec<Event<'src>>, ParseError> {
        let mut events = Vec::new();
        self.parse(&mut events)?;
        Ok(events)
    }

    /// Read the next event, or `None` at end of input.
    pub fn next_event(&mut self) -> Result<Option<Event<'src>>, ParseError> {
        loop {
            match self.scanner.peek() {
                None => return Ok(None),
                Some(';' | '#') => return Ok(Some(self.read_comment())),
                Some('\n' | '\r') => {
                    self.scanner.next_token();
                }
                Some('[') => return self.read_section().map(Some),
                Some(_) => return self.read_entry().map(Some),
            }
        }
    }

    fn error(&self, kind: ParseErrorKind, token: &Token<'src>) -> ParseError {
        trace!("{} at {}", kind, token.position);
        ParseError::new(kind, token.span, token.position)
    }

    fn read_comment(&mut self) -> Event<'src> {
        let span = self.scanner.skip_line();
        let text = self.scanner.slice(span).trim_end_matches(['\n', '\r']);
        trace!("Comment {:?}", text);
        Event::Comment { span, text }
    }

    /// Read `[name]`. Any `[` inside the header is ignored.
    fn read_section(&mut self) -> Result<Event<'src>, ParseError> {
        let start = self.scanner.position().offset;
        let mut name = String::new();
        loop {
            let token = self.scanner.next_token();
            match token.kind {
                TokenKind::Char('[') => {}
                TokenKind::Char(']') => {
                    // Everything between the brackets, if nothing was dropped.
                    let raw = self.scanner.slice(Span::new(start, token.span.start));
                    let raw = raw.strip_prefix('[').unwrap_or(raw);
                    let name = borrow_if_same(raw, name);
                    trace!("Section {:?}", name);
                    return Ok(Event::Section {
                        span: Span::new(start, token.span.end),
                        name,
                    });
                }
                TokenKind::Char('\n' | '\r') | TokenKind::Eof => {
                    return Err(self.error(ParseErrorKind::UnterminatedSection, &token));
                }
                TokenKind::QuotedString => name.push_str(token.text),
                TokenKind::Char(c) => name.push(c),
            }
        }
    }

    fn read_entry(&mut self) -> Result<Event<'src>, ParseError> {
        let (key, key_span) = self.read_key()?;
        let (value, value_span, kind) = self.read_value()?;
        trace!("Entry {:?} = {:?} ({:?})", key, value, kind);
        Ok(Event::Entry {
            key_span,
            key,
            value_span,
            value,
            kind,
        })
    }

    /// Read a key up to and including `=`. Spaces are dropped.
    fn read_key(&mut self) -> Result<(Cow<'src, str>, Span), ParseError> {
        let start = self.scanner.position().offset;
        let mut key = String::new();
        loop {
            let token = self.scanner.next_token();
            match token.kind {
                TokenKind::Eof => {
                    return Err(self.error(ParseErrorKind::UnexpectedEofInKey, &token));
                }
                TokenKind::Char(' ') => {}
                TokenKind::Char('=') => {
                    let span = Span::new(start, token.span.start);
                    let key = borrow_if_same(self.scanner.slice(span), key);
                    return Ok((key, span));
                }
                TokenKind::QuotedString => {
                    return Err(self.error(ParseErrorKind::QuotedStringInKey, &token));
                }
                TokenKind::Char(c) => key.push(c),
            }
        }
    }

    /// Read a value up to and including the line feed.
    ///
    /// A quoted string ends the value immediately and replaces anything read
    /// before it, even when it was never closed. Otherwise carriage returns
    /// and leading spaces are dropped.
    fn read_value(&mut self) -> Result<(Cow<'src, str>, Span, ValueKind), ParseError> {
        let start = self.scanner.position().offset;
        let mut value = String::new();
        loop {
            let token = self.scanner.next_token();
            match token.kind {
                TokenKind::Eof | TokenKind::Char('\n') => {
                    let span = Span::new(start, token.span.start);
                    let raw = self.scanner.slice(span).trim_start_matches(' ');
                    return Ok((borrow_if_same(raw, value), span, ValueKind::Bare));
                }
                TokenKind::QuotedString => {
                    return Ok((
                        Cow::Borrowed(strip_quotes(token.text)),
                        token.span,
                        ValueKind::Quoted,
                    ));
                }
                TokenKind::Char('\r') => {}
                TokenKind::Char(' ') if value.is_empty() => {}
                TokenKind::Char(c) => value.push(c),
            }
        }
    }
}

/// Strip one leading and one trailing `"` where present. Escapes are left alone.
fn strip_quotes(text: &str) -> &str {
    let text = text.strip_prefix('"').unwrap_or(text);
    text.strip_suffix('"').unwrap_or(text)
}

/// Borrow `raw` from the source when it spells the same text as `owned`.
fn borrow_if_same<'src>(raw: &'src str, owned: String) -> Cow<'src, str> {
    if raw == owned {
        Cow::Borrowed(raw)
    } else {
        Cow::Owned(owned)
    }
}
