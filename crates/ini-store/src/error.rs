//! Error type for loading a store.

use std::fmt;
use std::io;

use ini_parse::ParseError;

/// Why a load failed.
#[derive(Debug)]
pub enum Error {
    /// The input is not valid INI.
    Syntax(ParseError),
    /// Reading the input failed, or it was not UTF-8.
    Io(io::Error),
}

impl Error {
    /// The syntax error, if this is one.
    pub fn as_syntax(&self) -> Option<&ParseError> {
        match self {
            Error::Syntax(e) => Some(e),
            Error::Io(_) => None,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Syntax(e) => write!(f, "syntax error: {}", e),
            Error::Io(e) => write!(f, "I/O error: {}", e),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Syntax(e) => Some(e),
            Error::Io(e) => Some(e),
        }
    }
}

impl From<ParseError> for Error {
    fn from(e: ParseError) -> Self {
        Error::Syntax(e)
    }
}

impl From<io::Error> for Error {
    fn from(e: io::Error) -> Self {
        Error::Io(e)
    }
}
