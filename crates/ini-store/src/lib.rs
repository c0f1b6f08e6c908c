#![doc = include_str!("../README.md")]

use std::io::{self, Read, Write};

mod builder;
mod diagnostic;
mod error;
mod store;

pub use builder::StoreBuilder;
pub use error::Error;
pub use ini_format::FormatOptions;
pub use ini_parse::{ParseError, ParseErrorKind, Position, Span};
pub use store::{Store, StoreReader, StoreWriter};

/// Read INI text from `reader` until end of input and build a new store.
pub fn load<R: Read>(reader: R) -> Result<Store, Error> {
    let store = Store::new();
    store.read_from(reader)?;
    Ok(store)
}

/// Parse INI text into a new store.
pub fn parse(source: &str) -> Result<Store, Error> {
    let store = Store::new();
    store.merge_source(source)?;
    Ok(store)
}

/// Write `store` to `writer` in INI format. Returns the number of bytes written.
pub fn save<W: Write>(store: &Store, writer: W) -> io::Result<u64> {
    store.write_to(writer)
}

#[cfg(test)]
mod tests;
