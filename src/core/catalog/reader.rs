use std::{collections::HashMap, fs, path::Path};

use thiserror::Error;

use super::{MAGIC, MAGIC_SWAPPED};

#[derive(Debug, Error)]
pub enum ReadError {
    #[error("not a catalog file (magic {0:#010x})")]
    BadMagic(u32),
    #[error("unsupported catalog revision {0:#x}")]
    UnsupportedRevision(u32),
    #[error("catalog truncated: {0} lies outside the file")]
    Truncated(&'static str),
    #[error("string #{index} is not valid UTF-8")]
    InvalidUtf8 { index: usize },
    #[error("failed to read catalog: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Clone, Copy)]
enum ByteOrder {
    Little,
    Big,
}

/// Bounds-checked `u32` access in the catalog's byte order.
struct Words<'a> {
    bytes: &'a [u8],
    order: ByteOrder,
}

impl Words<'_> {
    fn at(&self, offset: usize, what: &'static str) -> Result<u32, ReadError> {
        let raw: [u8; 4] = offset
            .checked_add(4)
            .and_then(|end| self.bytes.get(offset..end))
            .and_then(|slice| slice.try_into().ok())
            .ok_or(ReadError::Truncated(what))?;
        Ok(match self.order {
            ByteOrder::Little => u32::from_le_bytes(raw),
            ByteOrder::Big => u32::from_be_bytes(raw),
        })
    }

    fn string(&self, table: usize, index: usize, what: &'static str) -> Result<String, ReadError> {
        let entry = index
            .checked_mul(8)
            .and_then(|step| table.checked_add(step))
            .ok_or(ReadError::Truncated(what))?;
        let length = self.at(entry, what)? as usize;
        let offset = entry
            .checked_add(4)
            .ok_or(ReadError::Truncated(what))
            .and_then(|at| self.at(at, what))? as usize;
        let data = offset
            .checked_add(length)
            .and_then(|end| self.bytes.get(offset..end))
            .ok_or(ReadError::Truncated(what))?;
        String::from_utf8(data.to_vec()).map_err(|_| ReadError::InvalidUtf8 { index })
    }
}

/// A catalog loaded from its binary form.
///
/// The metadata entry is held apart from the translations and is never
/// returned by [`CompiledCatalog::get`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompiledCatalog {
    translations: HashMap<String, String>,
    metadata: Option<String>,
}

impl CompiledCatalog {
    /// Decode a catalog in either byte order.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, ReadError> {
        let probe = Words {
            bytes,
            order: ByteOrder::Little,
        };
        let order = match probe.at(0, "magic")? {
            MAGIC => ByteOrder::Little,
            MAGIC_SWAPPED => ByteOrder::Big,
            other => return Err(ReadError::BadMagic(other)),
        };
        let words = Words { bytes, order };

        let revision = words.at(4, "revision")?;
        // Major revisions 0 and 1 share the string table layout.
        if revision >> 16 > 1 {
            return Err(ReadError::UnsupportedRevision(revision));
        }

        let count = words.at(8, "string count")? as usize;
        let keys_at = words.at(12, "key table")? as usize;
        let values_at = words.at(16, "value table")? as usize;

        // Every string has an 8-byte table entry inside the file.
        let mut translations = HashMap::with_capacity(count.min(bytes.len() / 8));
        let mut metadata = None;
        for index in 0..count {
            let key = words.string(keys_at, index, "key")?;
            let value = words.string(values_at, index, "value")?;
            if key.is_empty() {
                metadata = Some(value);
            } else {
                translations.insert(key, value);
            }
        }

        Ok(Self {
            translations,
            metadata,
        })
    }

    /// Exact-match lookup of a translated string.
    pub fn get(&self, key: &str) -> Option<&str> {
        if key.is_empty() {
            return None;
        }
        self.translations.get(key).map(String::as_str)
    }

    /// The metadata entry (the empty key), if present.
    pub fn metadata(&self) -> Option<&str> {
        self.metadata.as_deref()
    }

    /// Number of translations, metadata excluded.
    pub fn len(&self) -> usize {
        self.translations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.translations.is_empty()
    }

    /// Translation keys in ascending byte order.
    pub fn keys(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self.translations.keys().map(String::as_str).collect();
        keys.sort_unstable();
        keys
    }
}

/// Read and decode the catalog at `path`.
pub fn read_catalog_file(path: &Path) -> Result<CompiledCatalog, ReadError> {
    let bytes = fs::read(path)?;
    CompiledCatalog::from_bytes(&bytes)
}
