use std::{env, path::Path};

use anyhow::{Context as _, Result};

use super::super::args::CommonArgs;
use crate::config::{CONFIG_FILE_NAME, Config, load_config};

/// Configuration resolved for one command run: config file plus CLI overrides.
pub struct CommandContext {
    pub config: Config,
}

impl CommandContext {
    /// Load config starting from the current directory.
    pub fn new(args: &CommonArgs) -> Result<Self> {
        let cwd = env::current_dir().context("Failed to resolve current directory")?;
        Self::from_dir(&cwd, args)
    }

    pub fn from_dir(dir: &Path, args: &CommonArgs) -> Result<Self> {
        let config_result = load_config(dir)?;
        if !config_result.from_file {
            tracing::debug!("no {} found, using default configuration", CONFIG_FILE_NAME);
        }

        let mut config = config_result.config;
        if let Some(root) = &args.locale_root {
            config.locale_root = root.to_string_lossy().into_owned();
        }
        if let Some(domain) = &args.domain {
            config.domain = domain.clone();
        }
        config.validate()?;

        Ok(Self { config })
    }
}
