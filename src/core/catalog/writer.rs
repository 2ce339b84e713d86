use std::{fs, path::Path};

use super::{Catalog, CatalogError, HEADER_SIZE, MAGIC};

/// Serialize a catalog into the little-endian `.mo` layout.
///
/// The output depends only on the catalog contents, never on insertion order.
pub fn encode(catalog: &Catalog) -> Result<Vec<u8>, CatalogError> {
    let pairs: Vec<(&str, &str)> = catalog.sorted_pairs().collect();
    let count = to_u32(pairs.len(), "string count")?;

    let key_table = HEADER_SIZE;
    let table_size = count
        .checked_mul(8)
        .ok_or(CatalogError::TooLarge("table size"))?;
    let value_table = key_table
        .checked_add(table_size)
        .ok_or(CatalogError::TooLarge("value table offset"))?;
    let pool_start = value_table
        .checked_add(table_size)
        .ok_or(CatalogError::TooLarge("string pool offset"))?;

    let mut offset = pool_start;
    let mut key_entries = Vec::with_capacity(pairs.len());
    for (key, _) in &pairs {
        key_entries.push(next_entry(key, &mut offset)?);
    }
    let mut value_entries = Vec::with_capacity(pairs.len());
    for (_, value) in &pairs {
        value_entries.push(next_entry(value, &mut offset)?);
    }

    let mut out = Vec::with_capacity(offset as usize);
    for word in [MAGIC, 0, count, key_table, value_table, 0, 0] {
        out.extend_from_slice(&word.to_le_bytes());
    }
    for (length, string_offset) in key_entries.iter().chain(&value_entries) {
        out.extend_from_slice(&length.to_le_bytes());
        out.extend_from_slice(&string_offset.to_le_bytes());
    }
    for (key, _) in &pairs {
        out.extend_from_slice(key.as_bytes());
        out.push(0);
    }
    for (_, value) in &pairs {
        out.extend_from_slice(value.as_bytes());
        out.push(0);
    }

    debug_assert_eq!(out.len(), offset as usize);
    Ok(out)
}

/// Encode `catalog` and replace the file at `path` with it.
pub fn write_catalog_file(catalog: &Catalog, path: &Path) -> Result<(), CatalogError> {
    let bytes = encode(catalog)?;
    fs::write(path, bytes)?;
    Ok(())
}

/// Reserve pool space for `s` and its NUL, returning its (length, offset) entry.
fn next_entry(s: &str, offset: &mut u32) -> Result<(u32, u32), CatalogError> {
    let length = to_u32(s.len(), "string length")?;
    let entry = (length, *offset);
    *offset = offset
        .checked_add(length)
        .and_then(|o| o.checked_add(1))
        .ok_or(CatalogError::TooLarge("string pool"))?;
    Ok(entry)
}

fn to_u32(value: usize, what: &'static str) -> Result<u32, CatalogError> {
    u32::try_from(value).map_err(|_| CatalogError::TooLarge(what))
}
