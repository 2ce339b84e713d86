use anyhow::{Ok, Result};

use super::super::args::LookupCommand;
use super::{CommandContext, CommandResult, CommandSummary, LookupSummary};
use crate::core::Translations;

pub fn lookup(cmd: LookupCommand) -> Result<CommandResult> {
    let ctx = CommandContext::new(&cmd.common)?;
    let translations = Translations::load(&ctx.config.layout())?;
    Ok(lookup_in(&translations, cmd.language, cmd.key))
}

/// Resolve one key against an already loaded set of catalogs.
pub fn lookup_in(translations: &Translations, language: String, key: String) -> CommandResult {
    let catalog_found = translations.catalog(&language).is_some();
    let translation = translations.lookup(&language, &key).map(str::to_string);
    let error_count = usize::from(translation.is_none());

    CommandResult {
        summary: CommandSummary::Lookup(LookupSummary {
            language,
            key,
            translation,
            catalog_found,
        }),
        error_count,
        exit_on_errors: true,
    }
}
