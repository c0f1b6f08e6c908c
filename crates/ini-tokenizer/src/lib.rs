//! A rune scanner for INI text.
//!
//! The scanner yields one character at a time, recognizes double-quoted
//! strings as a single token, and skips horizontal tabs between tokens.

mod span;
pub use span::{MAX_SOURCE_LEN, Position, Span};

mod token;
pub use token::{Token, TokenKind};

mod scanner;
pub use scanner::Scanner;
