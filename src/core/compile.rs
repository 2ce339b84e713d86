//! Build driver: compiles discovered sources one file at a time.
//!
//! A failure in one file never stops the others.

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use thiserror::Error;

use super::{
    catalog::{Catalog, CatalogError, DEFAULT_METADATA, write_catalog_file},
    po::{ParseError, parse_po},
    scanner::SourceFile,
};

#[derive(Debug, Error)]
pub enum CompileError {
    #[error("failed to read source: {0}")]
    Read(#[source] io::Error),
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

/// How catalogs are built from sources.
#[derive(Debug, Clone)]
pub struct CompileOptions {
    /// Metadata written into every catalog.
    pub metadata: String,
    /// Prefer the source file's own header over `metadata` when it has one.
    pub keep_source_header: bool,
}

impl Default for CompileOptions {
    fn default() -> Self {
        Self {
            metadata: DEFAULT_METADATA.to_string(),
            keep_source_header: false,
        }
    }
}

#[derive(Debug)]
pub struct CompiledFile {
    pub language: String,
    pub source: PathBuf,
    pub output: PathBuf,
    pub translation_count: usize,
}

#[derive(Debug)]
pub struct FailedFile {
    pub language: String,
    pub source: PathBuf,
    pub error: CompileError,
}

#[derive(Debug)]
pub enum FileOutcome {
    Compiled(CompiledFile),
    Failed(FailedFile),
}

impl FileOutcome {
    pub fn source(&self) -> &Path {
        match self {
            FileOutcome::Compiled(file) => &file.source,
            FileOutcome::Failed(file) => &file.source,
        }
    }
}

/// Outcomes of a batch, in the order the files were compiled.
#[derive(Debug, Default)]
pub struct CompileReport {
    pub outcomes: Vec<FileOutcome>,
}

impl CompileReport {
    pub fn compiled_count(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| matches!(o, FileOutcome::Compiled(_)))
            .count()
    }

    pub fn failed_count(&self) -> usize {
        self.outcomes.len() - self.compiled_count()
    }
}

/// Build the catalog for one source without touching the output path.
pub fn build_catalog(content: &str, options: &CompileOptions) -> Result<Catalog, CompileError> {
    let source = parse_po(content)?;
    let metadata = match source.header {
        Some(header) if options.keep_source_header => header,
        _ => options.metadata.clone(),
    };
    Ok(Catalog::new(source.entries, metadata))
}

/// Read, parse, serialize and write one source file.
pub fn compile_file(file: &SourceFile, options: &CompileOptions) -> Result<usize, CompileError> {
    let content = fs::read_to_string(&file.source).map_err(CompileError::Read)?;
    let catalog = build_catalog(&content, options)?;
    write_catalog_file(&catalog, &file.output)?;
    Ok(catalog.len())
}

/// Compile every file, collecting failures instead of stopping at them.
pub fn compile_all(files: &[SourceFile], options: &CompileOptions) -> CompileReport {
    let mut report = CompileReport::default();

    for file in files {
        let outcome = match compile_file(file, options) {
            Ok(translation_count) => {
                tracing::debug!(
                    language = %file.language,
                    translations = translation_count,
                    "compiled catalog"
                );
                FileOutcome::Compiled(CompiledFile {
                    language: file.language.clone(),
                    source: file.source.clone(),
                    output: file.output.clone(),
                    translation_count,
                })
            }
            Err(error) => {
                tracing::debug!(language = %file.language, error = %error, "compile failed");
                FileOutcome::Failed(FailedFile {
                    language: file.language.clone(),
                    source: file.source.clone(),
                    error,
                })
            }
        };
        report.outcomes.push(outcome);
    }

    report
}
