use std::{
    collections::HashSet,
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Ok, Result, bail};
use glob::Pattern;
use serde::{Deserialize, Serialize};

use crate::core::{CompileOptions, LocaleLayout, catalog::DEFAULT_METADATA};

pub const CONFIG_FILE_NAME: &str = ".pomorc.json";

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default = "default_locale_root")]
    pub locale_root: String,
    #[serde(default = "default_messages_dir")]
    pub messages_dir: String,
    #[serde(default = "default_domain")]
    pub domain: String,
    /// Metadata entry written into every catalog.
    #[serde(default = "default_header")]
    pub header: String,
    #[serde(default)]
    pub keep_source_header: bool,
    /// Glob patterns for language directories to skip.
    #[serde(default)]
    pub ignores: Vec<String>,
    /// Languages to compile. Empty means every language directory.
    #[serde(default)]
    pub languages: Vec<LanguageRecord>,
}

/// A supported language and the regions it serves.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LanguageRecord {
    /// Directory name under the locale root, e.g. `hi` or `pt_BR`.
    pub code: String,
    pub name: String,
    #[serde(default)]
    pub regions: Vec<String>,
}

fn default_locale_root() -> String {
    "locale".to_string()
}

fn default_messages_dir() -> String {
    "LC_MESSAGES".to_string()
}

fn default_domain() -> String {
    "django".to_string()
}

fn default_header() -> String {
    DEFAULT_METADATA.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            locale_root: default_locale_root(),
            messages_dir: default_messages_dir(),
            domain: default_domain(),
            header: default_header(),
            keep_source_header: false,
            ignores: Vec::new(),
            languages: Vec::new(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Returns an error for invalid glob patterns, malformed or duplicate
    /// language codes, and malformed region codes.
    pub fn validate(&self) -> Result<()> {
        if self.domain.is_empty() || self.domain.contains(['/', '\\']) {
            bail!("Invalid 'domain': \"{}\"", self.domain);
        }

        for pattern in &self.ignores {
            Pattern::new(pattern)
                .with_context(|| format!("Invalid glob pattern in 'ignores': \"{}\"", pattern))?;
        }

        let mut seen = HashSet::new();
        for language in &self.languages {
            language.validate()?;
            if !seen.insert(language.code.as_str()) {
                bail!("Duplicate language code in 'languages': \"{}\"", language.code);
            }
        }

        Ok(())
    }

    pub fn layout(&self) -> LocaleLayout {
        LocaleLayout::new(&self.locale_root, &self.messages_dir, &self.domain)
    }

    pub fn compile_options(&self) -> CompileOptions {
        CompileOptions {
            metadata: self.header.clone(),
            keep_source_header: self.keep_source_header,
        }
    }

    pub fn language_codes(&self) -> Vec<String> {
        self.languages.iter().map(|l| l.code.clone()).collect()
    }
}

impl LanguageRecord {
    pub fn validate(&self) -> Result<()> {
        if !is_language_code(&self.code) {
            bail!("Invalid language code: \"{}\"", self.code);
        }
        if self.name.trim().is_empty() {
            bail!("Language \"{}\" has an empty name", self.code);
        }
        for region in &self.regions {
            if region.len() != 2 || !region.chars().all(|c| c.is_ascii_uppercase()) {
                bail!(
                    "Invalid region code \"{}\" for language \"{}\"",
                    region,
                    self.code
                );
            }
        }
        Ok(())
    }
}

/// `hi`, `kok`, `pt_BR`, `zh-Hans`: a 2-3 letter lowercase code and an optional subtag.
fn is_language_code(code: &str) -> bool {
    let (primary, subtag) = match code.find(['_', '-']) {
        Some(pos) => (&code[..pos], Some(&code[pos + 1..])),
        None => (code, None),
    };

    let primary_ok = (2..=3).contains(&primary.len())
        && primary.chars().all(|c| c.is_ascii_lowercase());
    let subtag_ok = subtag.is_none_or(|s| !s.is_empty() && s.chars().all(|c| c.is_ascii_alphanumeric()));

    primary_ok && subtag_ok
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// True if config was loaded from a file, false if using defaults.
    pub from_file: bool,
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            config.validate()?;
            Ok(ConfigLoadResult {
                config,
                from_file: true,
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            from_file: false,
        }),
    }
}
