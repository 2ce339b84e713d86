use anyhow::Result;

use super::{
    args::{Arguments, Command},
    commands::{CommandResult, compile::compile, init::init, lookup::lookup},
};

/// Dispatch to the command handler. No subcommand means `compile`.
pub fn run(args: Arguments) -> Result<CommandResult> {
    match args.command_or_default() {
        Command::Compile(cmd) => compile(cmd),
        Command::Init => init(),
        Command::Lookup(cmd) => lookup(cmd),
    }
}
