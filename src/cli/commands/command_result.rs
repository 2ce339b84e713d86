use std::path::PathBuf;

use crate::core::CompileReport;

#[derive(Debug)]
pub enum CommandSummary {
    Compile(CompileSummary),
    Init(InitSummary),
    Lookup(LookupSummary),
}

#[derive(Debug)]
pub enum CompileSummary {
    /// The locale root does not exist; nothing was attempted.
    MissingRoot(PathBuf),
    Finished(CompileReport),
}

#[derive(Debug)]
pub struct InitSummary {
    pub path: PathBuf,
    /// Set when the config file already existed.
    pub error: Option<String>,
}

#[derive(Debug)]
pub struct LookupSummary {
    pub language: String,
    pub key: String,
    pub translation: Option<String>,
    /// False when no compiled catalog exists for the language.
    pub catalog_found: bool,
}

/// Result of running pomo commands
#[derive(Debug)]
pub struct CommandResult {
    pub summary: CommandSummary,
    pub error_count: usize,
    /// If true, exit code 1 should be returned when error_count > 0.
    /// If false, always exit 0 (compile reports failures without escalating them).
    pub exit_on_errors: bool,
}
