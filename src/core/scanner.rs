use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use glob::Pattern;
use walkdir::WalkDir;

/// Where sources and catalogs live: `<root>/<language>/<messages_dir>/<domain>.{po,mo}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleLayout {
    pub root: PathBuf,
    pub messages_dir: String,
    pub domain: String,
}

impl LocaleLayout {
    pub fn new(
        root: impl Into<PathBuf>,
        messages_dir: impl Into<String>,
        domain: impl Into<String>,
    ) -> Self {
        Self {
            root: root.into(),
            messages_dir: messages_dir.into(),
            domain: domain.into(),
        }
    }

    fn messages_path(&self, language: &str) -> PathBuf {
        self.root.join(language).join(&self.messages_dir)
    }

    pub fn source_path(&self, language: &str) -> PathBuf {
        self.messages_path(language)
            .join(format!("{}.po", self.domain))
    }

    pub fn compiled_path(&self, language: &str) -> PathBuf {
        self.messages_path(language)
            .join(format!("{}.mo", self.domain))
    }
}

/// A source file and the catalog it compiles to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    pub language: String,
    pub source: PathBuf,
    pub output: PathBuf,
}

/// Which language directories to visit.
#[derive(Debug, Default)]
pub struct LanguageFilter {
    /// Directory names matching any of these are skipped.
    pub ignores: Vec<Pattern>,
    /// If non-empty, only these languages are visited.
    pub allowed: Vec<String>,
}

impl LanguageFilter {
    pub fn new(ignores: &[String], allowed: Vec<String>) -> Result<Self> {
        let ignores = ignores
            .iter()
            .map(|p| {
                Pattern::new(p).with_context(|| format!("Invalid glob pattern in 'ignores': \"{}\"", p))
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { ignores, allowed })
    }

    pub fn accepts(&self, language: &str) -> bool {
        if self.ignores.iter().any(|p| p.matches(language)) {
            return false;
        }
        self.allowed.is_empty() || self.allowed.iter().any(|code| code == language)
    }
}

/// List language directory names directly under the root, sorted by name.
pub fn discover_languages(layout: &LocaleLayout) -> Result<Vec<String>> {
    let mut languages = Vec::new();
    let walker = WalkDir::new(&layout.root)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name();

    for entry in walker {
        let entry = entry
            .with_context(|| format!("Failed to read locale directory: {}", layout.root.display()))?;
        // Symlinked language directories count too.
        if !entry.path().is_dir() {
            continue;
        }
        match entry.file_name().to_str() {
            Some(name) => languages.push(name.to_string()),
            None => tracing::warn!(path = %entry.path().display(), "skipping non UTF-8 directory name"),
        }
    }

    Ok(languages)
}

/// Find every source file under the layout that passes `filter`.
///
/// A language directory without a source file is skipped silently.
pub fn discover_sources(layout: &LocaleLayout, filter: &LanguageFilter) -> Result<Vec<SourceFile>> {
    let mut sources = Vec::new();

    for language in discover_languages(layout)? {
        if !filter.accepts(&language) {
            tracing::debug!(language = %language, "language filtered out");
            continue;
        }

        let source = layout.source_path(&language);
        if !source.is_file() {
            tracing::debug!(language = %language, path = %source.display(), "no source file");
            continue;
        }

        let output = layout.compiled_path(&language);
        sources.push(SourceFile {
            language,
            source,
            output,
        });
    }

    Ok(sources)
}

/// True if `path` exists and is a directory.
pub fn root_exists(path: &Path) -> bool {
    path.is_dir()
}
