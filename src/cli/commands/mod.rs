mod command_result;
pub mod compile;
mod context;
pub mod init;
pub mod lookup;

pub use command_result::*;
pub use context::CommandContext;
