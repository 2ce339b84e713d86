//! Binary `.mo` catalogs.
//!
//! - `writer`: serializes a [`Catalog`] into the little-endian layout
//! - `reader`: loads a compiled catalog back for lookups
//!
//! Layout (all integers `u32`):
//!
//! ```text
//! 0   magic            0x950412de
//! 4   revision         0
//! 8   string count     N (metadata entry included)
//! 12  key table        28
//! 16  value table      28 + 8 * N
//! 20  hash table size  0
//! 24  hash table       0
//! key table, value table: N x (length, offset)
//! string pool: keys then values, each NUL terminated
//! ```

use std::collections::BTreeMap;

use thiserror::Error;

mod reader;
mod writer;

pub use reader::{CompiledCatalog, ReadError, read_catalog_file};
pub use writer::{encode, write_catalog_file};

pub const MAGIC: u32 = 0x950412de;

/// The magic number as it appears when a big-endian catalog is read little-endian.
pub const MAGIC_SWAPPED: u32 = 0xde120495;

pub const HEADER_SIZE: u32 = 28;

/// Metadata written when the source header is not kept.
pub const DEFAULT_METADATA: &str = "Content-Type: text/plain; charset=UTF-8\n";

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalog too large: {0} does not fit in 32 bits")]
    TooLarge(&'static str),
    #[error("failed to write catalog: {0}")]
    Io(#[from] std::io::Error),
}

/// The translations of one (language, domain) pair plus its metadata entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    entries: BTreeMap<String, String>,
    metadata: String,
}

impl Catalog {
    /// Build a catalog. An empty key in `entries` is dropped; metadata lives in `metadata`.
    pub fn new(mut entries: BTreeMap<String, String>, metadata: impl Into<String>) -> Self {
        entries.remove("");
        Self {
            entries,
            metadata: metadata.into(),
        }
    }

    pub fn entries(&self) -> &BTreeMap<String, String> {
        &self.entries
    }

    pub fn metadata(&self) -> &str {
        &self.metadata
    }

    /// Number of translations, metadata excluded.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All strings in table order: the metadata entry first, then keys ascending.
    pub(crate) fn sorted_pairs(&self) -> impl Iterator<Item = (&str, &str)> {
        std::iter::once(("", self.metadata.as_str()))
            .chain(self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str())))
    }
}
