pub mod commands;
pub mod handlers;

pub use commands::{CategoryArg, Cli, Commands, LayoutCommand};
