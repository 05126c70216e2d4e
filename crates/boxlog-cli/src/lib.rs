mod args;
mod commands;
mod handlers;
pub mod types;

pub use args::{Cli, Commands, LogArgs};
pub use commands::{resolve_settings, run};
