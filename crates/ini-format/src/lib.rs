//! Output primitives for INI serialization.
//!
//! This crate knows how to quote values and lay out `[section]` headers and
//! `key="value"` lines. It does not know where the data comes from.

mod options;
mod scalar;
mod writer;

pub use options::FormatOptions;
pub use scalar::{can_be_bare, escape_quoted, quote};
pub use writer::IniWriter;
