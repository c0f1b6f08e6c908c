//! The concurrent section → key → value store.

use std::fmt;
use std::io::{self, Read, Write};
use std::str::FromStr;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use indexmap::IndexMap;
use ini_format::{FormatOptions, IniWriter};
use ini_parse::MAX_SOURCE_LEN;
use tracing::debug;

use crate::builder::StoreBuilder;
use crate::error::Error;

/// Keys of one section, in insertion order.
pub(crate) type Section = IndexMap<String, String>;
/// All sections, in insertion order. The default section is `""`.
pub(crate) type Sections = IndexMap<String, Section>;

/// A thread-safe INI store: section name → key → value.
///
/// Reads ([`Store::get`], [`Store::has`], ...) share a read lock; writes
/// ([`Store::set`], [`Store::read_from`]) take the lock exclusively. Each
/// call locks on its own, so a `get` followed by a `set` is not atomic; use
/// [`Store::write`] to hold the lock across several operations.
///
/// The default section `""` always exists and always comes first.
pub struct Store {
    data: RwLock<Sections>,
}

impl Store {
    /// Create an empty store holding only the default section.
    pub fn new() -> Self {
        let mut data = Sections::new();
        data.insert(String::new(), Section::new());
        Self {
            data: RwLock::new(data),
        }
    }

    /// Take the shared lock for several reads in a row.
    pub fn read(&self) -> StoreReader<'_> {
        StoreReader {
            data: self.data.read().unwrap_or_else(PoisonError::into_inner),
        }
    }

    /// Take the exclusive lock for several writes in a row.
    pub fn write(&self) -> StoreWriter<'_> {
        StoreWriter {
            data: self.data.write().unwrap_or_else(PoisonError::into_inner),
        }
    }

    /// Get a value, or `""` when the section or key does not exist.
    pub fn get(&self, section: &str, key: &str) -> String {
        self.read().get(section, key).to_string()
    }

    /// Whether `key` exists in `section`, even with an empty value.
    pub fn has(&self, section: &str, key: &str) -> bool {
        self.read().has(section, key)
    }

    /// Insert or overwrite a value, creating the section if needed.
    pub fn set(&self, section: &str, key: &str, value: &str) {
        self.write().set(section, key, value);
    }

    /// Section names in insertion order, starting with `""`.
    pub fn sections(&self) -> Vec<String> {
        self.read().sections().map(str::to_string).collect()
    }

    /// Keys of a section in insertion order. Empty if the section is missing.
    pub fn keys(&self, section: &str) -> Vec<String> {
        self.read()
            .entries(section)
            .map(|(key, _)| key.to_string())
            .collect()
    }

    /// A copy of one section's entries, or `None` if it does not exist.
    pub fn section(&self, section: &str) -> Option<Vec<(String, String)>> {
        let reader = self.read();
        let entries = reader.data.get(section)?;
        Some(
            entries
                .iter()
                .map(|(k, v)| (k.clone(), v.clone()))
                .collect(),
        )
    }

    /// Total number of key/value pairs across all sections.
    pub fn len(&self) -> usize {
        self.read().len()
    }

    /// Whether no section holds any key.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Read INI text from `reader` until end of input and merge it in.
    ///
    /// The write lock is held for the whole parse. On a syntax error nothing
    /// is merged. Returns the number of bytes read.
    pub fn read_from<R: Read>(&self, mut reader: R) -> Result<usize, Error> {
        let mut source = String::new();
        let read = reader.read_to_string(&mut source)?;
        self.merge_source(&source)?;
        Ok(read)
    }

    pub(crate) fn merge_source(&self, source: &str) -> Result<(), Error> {
        check_source_len(source.len())?;
        let mut writer = self.write();
        let builder = StoreBuilder::from_source(source)?;
        let entries = builder.entries();
        writer.merge(builder.finish());
        debug!(bytes = source.len(), entries, "loaded INI source");
        Ok(())
    }

    /// Write the store in INI format. Returns the number of bytes written.
    pub fn write_to<W: Write>(&self, writer: W) -> io::Result<u64> {
        self.read().write_to(writer, FormatOptions::default())
    }

    /// Write the store in INI format with the given options.
    pub fn write_to_with_options<W: Write>(
        &self,
        writer: W,
        options: FormatOptions,
    ) -> io::Result<u64> {
        self.read().write_to(writer, options)
    }

    /// Render the store as INI text.
    pub fn to_ini_string(&self) -> String {
        let mut out = Vec::new();
        // Writing into a Vec cannot fail.
        let _ = self.write_to(&mut out);
        String::from_utf8_lossy(&out).into_owned()
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for Store {
    fn clone(&self) -> Self {
        Self {
            data: RwLock::new(self.read().data.clone()),
        }
    }
}

impl PartialEq for Store {
    /// Same (section, key) → value pairs, in any order.
    fn eq(&self, other: &Self) -> bool {
        if std::ptr::eq(self, other) {
            return true;
        }
        // Never hold both locks at once.
        let ours = self.read().data.clone();
        ours == *other.read().data
    }
}

impl fmt::Debug for Store {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.read().data.iter()).finish()
    }
}

impl FromStr for Store {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::parse(s)
    }
}

/// Shared access to a [`Store`], holding its read lock.
pub struct StoreReader<'a> {
    data: RwLockReadGuard<'a, Sections>,
}

impl StoreReader<'_> {
    /// Get a value, or `""` when the section or key does not exist.
    pub fn get(&self, section: &str, key: &str) -> &str {
        lookup(&self.data, section, key).unwrap_or("")
    }

    /// Whether `key` exists in `section`.
    pub fn has(&self, section: &str, key: &str) -> bool {
        lookup(&self.data, section, key).is_some()
    }

    /// Section names in insertion order, starting with `""`.
    pub fn sections(&self) -> impl Iterator<Item = &str> {
        self.data.keys().map(String::as_str)
    }

    /// Entries of a section in insertion order.
    pub fn entries(&self, section: &str) -> impl Iterator<Item = (&str, &str)> {
        self.data
            .get(section)
            .into_iter()
            .flat_map(|entries| entries.iter().map(|(k, v)| (k.as_str(), v.as_str())))
    }

    /// Total number of key/value pairs across all sections.
    pub fn len(&self) -> usize {
        self.data.values().map(IndexMap::len).sum()
    }

    /// Whether no section holds any key.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Write the default section, then every other section that has keys.
    pub fn write_to<W: Write>(&self, writer: W, options: FormatOptions) -> io::Result<u64> {
        let mut out = IniWriter::with_options(writer, options);
        for (key, value) in self.entries("") {
            out.write_entry(key, value)?;
        }
        for (name, entries) in self.data.iter().filter(|(name, _)| !name.is_empty()) {
            out.begin_section(name);
            for (key, value) in entries {
                out.write_entry(key, value)?;
            }
        }
        let written = out.finish()?;
        debug!(bytes = written, "saved INI store");
        Ok(written)
    }
}

/// Exclusive access to a [`Store`], holding its write lock.
pub struct StoreWriter<'a> {
    data: RwLockWriteGuard<'a, Sections>,
}

impl StoreWriter<'_> {
    /// Get a value, or `""` when the section or key does not exist.
    pub fn get(&self, section: &str, key: &str) -> &str {
        lookup(&self.data, section, key).unwrap_or("")
    }

    /// Whether `key` exists in `section`.
    pub fn has(&self, section: &str, key: &str) -> bool {
        lookup(&self.data, section, key).is_some()
    }

    /// Insert or overwrite a value, creating the section if needed.
    pub fn set(&mut self, section: &str, key: &str, value: &str) {
        let entries = match self.data.get_index_of(section) {
            Some(index) => &mut self.data[index],
            None => self.data.entry(section.to_string()).or_default(),
        };
        match entries.get_mut(key) {
            Some(slot) => value.clone_into(slot),
            None => {
                entries.insert(key.to_string(), value.to_string());
            }
        }
    }

    /// Merge parsed sections in; later values win.
    pub(crate) fn merge(&mut self, sections: Sections) {
        for (name, entries) in sections {
            self.data.entry(name).or_default().extend(entries);
        }
    }
}

/// Reject sources too long for the parser's `u32` offsets.
pub(crate) fn check_source_len(len: usize) -> io::Result<()> {
    if len > MAX_SOURCE_LEN {
        return Err(io::Error::new(
            io::ErrorKind::InvalidData,
            format!("INI source is {len} bytes, the limit is {MAX_SOURCE_LEN}"),
        ));
    }
    Ok(())
}

fn lookup<'a>(data: &'a Sections, section: &str, key: &str) -> Option<&'a str> {
    data.get(section)?.get(key).map(String::as_str)
}
