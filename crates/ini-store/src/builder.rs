//! Store contents from parse events.

use ini_parse::{Event, ParseCallback, ParseError, Parser};

use crate::store::{Sections, Store};

/// Collects parse events into section → key → value maps.
///
/// Tracks the current section: entries go to the last `[section]` seen, or to
/// the default section `""` before any header. A header alone does not create
/// a section; its first entry does.
pub struct StoreBuilder {
    sections: Sections,
    current: String,
    entries: usize,
}

impl StoreBuilder {
    /// Create a new builder positioned in the default section.
    pub fn new() -> Self {
        Self {
            sections: Sections::new(),
            current: String::new(),
            entries: 0,
        }
    }

    /// Parse `source` into a fresh builder.
    pub fn from_source(source: &str) -> Result<Self, ParseError> {
        let mut builder = Self::new();
        Parser::new(source).parse(&mut builder)?;
        Ok(builder)
    }

    /// Number of entries seen, counting overwritten ones.
    pub fn entries(&self) -> usize {
        self.entries
    }

    /// Turn the collected entries into a store.
    pub fn build(self) -> Store {
        let store = Store::new();
        store.write().merge(self.finish());
        store
    }

    pub(crate) fn finish(self) -> Sections {
        self.sections
    }
}

impl Default for StoreBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl<'src> ParseCallback<'src> for StoreBuilder {
    fn event(&mut self, event: Event<'src>) -> bool {
        match event {
            Event::Comment { .. } => {}
            Event::Section { name, .. } => {
                self.current = name.into_owned();
            }
            Event::Entry { key, value, .. } => {
                self.sections
                    .entry(self.current.clone())
                    .or_default()
                    .insert(key.into_owned(), value.into_owned());
                self.entries += 1;
            }
        }
        true
    }
}
