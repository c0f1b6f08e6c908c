//! Event-based parser for INI configuration files.
//!
//! The parser peeks at the next character of each line to decide whether it
//! holds a comment, a section header, or a `key=value` entry, and reports
//! what it read as [`Event`]s.

pub use ini_tokenizer::{MAX_SOURCE_LEN, Position, Span, Token, TokenKind};

mod tracing_macros;

mod event;
pub use event::{Event, ParseError, ParseErrorKind, ValueKind};

mod callback;
pub use callback::ParseCallback;

mod parser;
pub use parser::Parser;
