pub mod commands;
pub mod core;
mod forms;
pub mod help;
pub mod io;
pub mod output;
mod shell;
pub mod shell_context;
pub mod ui;

pub use self::core::{CliError, CommandError, CommandResult};
pub use shell::run_cli;
pub use shell_context::{CliMode, ShellContext};
