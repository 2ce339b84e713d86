//! Report formatting and printing utilities.
//!
//! Separate from core logic to allow pomo to be used as a library.

use std::{
    io::{self, Write},
    path::Path,
};

use colored::Colorize;
use unicode_width::UnicodeWidthStr;

use super::commands::{
    CommandResult, CommandSummary, CompileSummary, InitSummary, LookupSummary,
};
use crate::core::{
    CompileReport, FileOutcome, ParseError,
    compile::{CompileError, FailedFile},
};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

/// Print a command result to stdout/stderr.
pub fn print(result: &CommandResult) {
    print_to(result, &mut io::stdout().lock(), &mut io::stderr().lock());
}

/// Print a command result to custom writers.
///
/// Useful for testing or redirecting output.
pub fn print_to<W: Write, E: Write>(result: &CommandResult, out: &mut W, err: &mut E) {
    match &result.summary {
        CommandSummary::Compile(CompileSummary::MissingRoot(root)) => {
            print_missing_root(root, err);
        }
        CommandSummary::Compile(CompileSummary::Finished(report)) => {
            print_compile_report(report, out);
        }
        CommandSummary::Init(summary) => print_init(summary, out, err),
        CommandSummary::Lookup(summary) => print_lookup(summary, out, err),
    }
}

fn print_missing_root<E: Write>(root: &Path, err: &mut E) {
    let _ = writeln!(
        err,
        "{} No locale directory found: {}",
        "error:".bold().red(),
        root.display()
    );
}

/// One status line per file, then the total.
pub fn print_compile_report<W: Write>(report: &CompileReport, writer: &mut W) {
    for outcome in &report.outcomes {
        let _ = writeln!(writer, "Compiling {}...", outcome.source().display());
        match outcome {
            FileOutcome::Compiled(file) => {
                let _ = writeln!(
                    writer,
                    "{} {}",
                    SUCCESS_MARK.green(),
                    format!(
                        "Created {} with {} translations",
                        file.output.display(),
                        file.translation_count
                    )
                    .green()
                );
            }
            FileOutcome::Failed(file) => print_failure(file, writer),
        }
    }

    let _ = writeln!(writer);
    let _ = writeln!(
        writer,
        "Compiled {} translation file(s).",
        report.compiled_count()
    );
}

fn print_failure<W: Write>(file: &FailedFile, writer: &mut W) {
    let _ = writeln!(
        writer,
        "{} {}",
        FAILURE_MARK.red(),
        format!("Error compiling {}: {}", file.source.display(), file.error).red()
    );

    if let CompileError::Parse(parse_error) = &file.error {
        print_snippet(parse_error, writer);
    }
}

/// Cargo-style source excerpt with a caret under the error column.
fn print_snippet<W: Write>(error: &ParseError, writer: &mut W) {
    let width = error.line.to_string().len();
    let prefix: String = error
        .source_line
        .chars()
        .take(error.column.saturating_sub(1))
        .collect();
    let caret_padding = UnicodeWidthStr::width(prefix.as_str());

    let _ = writeln!(writer, "{:>width$} {}", "", "|".blue(), width = width);
    let _ = writeln!(
        writer,
        "{} {} {}",
        error.line.to_string().blue(),
        "|".blue(),
        error.source_line
    );
    let _ = writeln!(
        writer,
        "{:>width$} {} {:>padding$}{}",
        "",
        "|".blue(),
        "",
        "^".red(),
        width = width,
        padding = caret_padding
    );
}

fn print_init<W: Write, E: Write>(summary: &InitSummary, out: &mut W, err: &mut E) {
    match &summary.error {
        Some(message) => {
            let _ = writeln!(err, "Error: {}", message);
        }
        None => {
            let _ = writeln!(
                out,
                "{} {}",
                SUCCESS_MARK.green(),
                format!("Created {}", summary.path.display()).green()
            );
        }
    }
}

fn print_lookup<W: Write, E: Write>(summary: &LookupSummary, out: &mut W, err: &mut E) {
    match &summary.translation {
        Some(translation) => {
            let _ = writeln!(out, "{}", translation);
        }
        None if !summary.catalog_found => {
            let _ = writeln!(
                err,
                "{} no compiled catalog for language \"{}\"",
                "error:".bold().red(),
                summary.language
            );
        }
        None => {
            let _ = writeln!(
                err,
                "{} no translation for \"{}\" in \"{}\"",
                "error:".bold().red(),
                summary.key,
                summary.language
            );
        }
    }
}
