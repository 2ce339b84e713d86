//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `compile`: Compile every `.po` source under the locale root (default)
//! - `init`: Initialize pomo configuration file
//! - `lookup`: Look up a key in a compiled catalog

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// The command to run. Running without a subcommand compiles.
    pub fn command_or_default(self) -> Command {
        self.command
            .unwrap_or_else(|| Command::Compile(CompileCommand::default()))
    }

    /// Get the verbose flag from the command's common args.
    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::Compile(cmd)) => cmd.common.verbose,
            Some(Command::Lookup(cmd)) => cmd.common.verbose,
            Some(Command::Init) | None => false,
        }
    }
}

/// Common arguments shared by commands that read the locale tree.
#[derive(Debug, Clone, Default, Args)]
pub struct CommonArgs {
    /// Locale root directory (overrides config file)
    #[arg(long, env = "POMO_LOCALE_ROOT")]
    pub locale_root: Option<PathBuf>,

    /// Translation domain, the `<domain>.po` file name (overrides config file)
    #[arg(long)]
    pub domain: Option<String>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Default, Args)]
pub struct CompileCommand {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Exit with status 1 if any file failed to compile
    #[arg(long)]
    pub strict: bool,
}

#[derive(Debug, Args)]
pub struct LookupCommand {
    /// Language directory name, e.g. `hi`
    pub language: String,

    /// Untranslated source string
    pub key: String,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Compile .po sources into .mo catalogs (default when no command is given)
    Compile(CompileCommand),
    /// Initialize a new .pomorc.json configuration file
    Init,
    /// Print the translation of a key from a compiled catalog
    Lookup(LookupCommand),
}
