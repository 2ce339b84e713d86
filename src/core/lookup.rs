//! Runtime lookups over compiled catalogs.
//!
//! [`Translations`] is built once from a locale tree and handed to whatever
//! needs translated strings. There is no global catalog state.

use std::collections::BTreeMap;

use anyhow::{Context, Result};

use super::{
    catalog::{CompiledCatalog, read_catalog_file},
    scanner::{LocaleLayout, discover_languages},
};

/// Exact-match translation lookup for a single language.
pub trait Lookup {
    fn lookup(&self, key: &str) -> Option<&str>;

    /// Translate `key`, falling back to the key itself.
    ///
    /// An empty translation counts as untranslated.
    fn translate<'a>(&'a self, key: &'a str) -> &'a str {
        self.lookup(key).filter(|s| !s.is_empty()).unwrap_or(key)
    }
}

impl Lookup for CompiledCatalog {
    fn lookup(&self, key: &str) -> Option<&str> {
        self.get(key)
    }
}

/// Compiled catalogs for every language of one domain.
#[derive(Debug, Default)]
pub struct Translations {
    catalogs: BTreeMap<String, CompiledCatalog>,
}

impl Translations {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load every compiled catalog found under `layout`.
    ///
    /// Languages without a compiled catalog are skipped. A catalog that
    /// exists but cannot be decoded is an error.
    pub fn load(layout: &LocaleLayout) -> Result<Self> {
        let mut translations = Self::new();
        for language in discover_languages(layout)? {
            let path = layout.compiled_path(&language);
            if !path.is_file() {
                tracing::debug!(language = %language, path = %path.display(), "no compiled catalog");
                continue;
            }
            let catalog = read_catalog_file(&path)
                .with_context(|| format!("Failed to load catalog: {}", path.display()))?;
            tracing::debug!(language = %language, entries = catalog.len(), "loaded catalog");
            translations.insert(language, catalog);
        }
        Ok(translations)
    }

    pub fn insert(&mut self, language: impl Into<String>, catalog: CompiledCatalog) {
        self.catalogs.insert(language.into(), catalog);
    }

    pub fn catalog(&self, language: &str) -> Option<&CompiledCatalog> {
        self.catalogs.get(language)
    }

    /// Look up `key` in the catalog for `language`.
    pub fn lookup(&self, language: &str, key: &str) -> Option<&str> {
        self.catalog(language)?.lookup(key)
    }

    /// Loaded language codes in sorted order.
    pub fn languages(&self) -> impl Iterator<Item = &str> {
        self.catalogs.keys().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.catalogs.is_empty()
    }
}
