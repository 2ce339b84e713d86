use std::path::Path;

use anyhow::{Ok, Result};

use super::super::args::CompileCommand;
use super::{CommandContext, CommandResult, CommandSummary, CompileSummary};
use crate::core::{LanguageFilter, compile_all, discover_sources, scanner::root_exists};

pub fn compile(cmd: CompileCommand) -> Result<CommandResult> {
    let ctx = CommandContext::new(&cmd.common)?;
    compile_with(&ctx, cmd.strict)
}

pub fn compile_with(ctx: &CommandContext, strict: bool) -> Result<CommandResult> {
    let layout = ctx.config.layout();

    if !root_exists(&layout.root) {
        return Ok(CommandResult {
            summary: CommandSummary::Compile(CompileSummary::MissingRoot(layout.root)),
            error_count: 1,
            exit_on_errors: true,
        });
    }

    let filter = LanguageFilter::new(&ctx.config.ignores, ctx.config.language_codes())?;
    let sources = discover_sources(&layout, &filter)?;
    warn_unlisted_languages(&layout.root, &filter);

    let report = compile_all(&sources, &ctx.config.compile_options());
    let error_count = report.failed_count();

    Ok(CommandResult {
        summary: CommandSummary::Compile(CompileSummary::Finished(report)),
        error_count,
        exit_on_errors: strict,
    })
}

/// Languages listed in the config without a directory are probably typos.
fn warn_unlisted_languages(root: &Path, filter: &LanguageFilter) {
    for code in &filter.allowed {
        if !root.join(code).is_dir() {
            tracing::warn!(
                language = %code,
                root = %root.display(),
                "configured language has no directory"
            );
        }
    }
}
