//! Shell errors, dispatch and error reporting.

use std::io;

use rustyline::error::ReadlineError;
use store_config::ConfigError;
use strsim::levenshtein;
use thiserror::Error;

use crate::errors::{ApiError, StoreError};

use super::commands;
use super::io as cli_io;
use super::shell_context::{CliMode, ShellContext};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LoopControl {
    Continue,
    Exit,
}

/// Fatal shell failures; anything here ends the session.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Readline(#[from] ReadlineError),
    #[error(transparent)]
    Prompt(#[from] dialoguer::Error),
}

impl From<ConfigError> for CliError {
    fn from(err: ConfigError) -> Self {
        CliError::Store(err.into())
    }
}

/// Failures of a single command, reported inline by the shell.
#[derive(Debug, Error)]
pub enum CommandError {
    #[error("{0}")]
    InvalidArguments(String),
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Dialoguer(#[from] dialoguer::Error),
    #[error("exit requested")]
    ExitRequested,
}

impl From<ApiError> for CommandError {
    fn from(err: ApiError) -> Self {
        CommandError::Store(err.into())
    }
}

impl From<ConfigError> for CommandError {
    fn from(err: ConfigError) -> Self {
        CommandError::Store(err.into())
    }
}

impl From<CliError> for CommandError {
    fn from(err: CliError) -> Self {
        match err {
            CliError::Store(err) => CommandError::Store(err),
            CliError::Io(err) => CommandError::Io(err),
            CliError::Prompt(err) => CommandError::Dialoguer(err),
            CliError::Readline(err) => CommandError::Io(io::Error::other(err.to_string())),
        }
    }
}

pub type CommandResult = Result<(), CommandError>;

impl ShellContext {
    /// Runs `name` with `args`; unknown names get a suggestion instead.
    pub(crate) fn dispatch(
        &mut self,
        name: &str,
        args: &[&str],
    ) -> Result<LoopControl, CommandError> {
        let Some(command) = commands::find(name) else {
            self.suggest_command(name);
            return Ok(LoopControl::Continue);
        };
        match (command.handler)(self, args) {
            Ok(()) => Ok(LoopControl::Continue),
            Err(CommandError::ExitRequested) => Ok(LoopControl::Exit),
            Err(err) => Err(err),
        }
    }

    pub(crate) fn suggest_command(&self, input: &str) {
        cli_io::print_warning(format!(
            "Unknown command `{input}`. Type `help` to see available commands."
        ));

        let needle = input.to_lowercase();
        let closest = commands::names()
            .map(|name| (levenshtein(name, &needle), name))
            .filter(|(distance, _)| *distance <= 3)
            .min_by_key(|(distance, _)| *distance);
        if let Some((_, name)) = closest {
            cli_io::print_info(format!("Suggestion: `{name}`?"));
        }
    }

    pub(crate) fn confirm_exit(&self) -> Result<bool, CliError> {
        if self.mode == CliMode::Script {
            return Ok(true);
        }
        Ok(cli_io::confirm_action(&self.theme, "Exit shell?", false).unwrap_or(true))
    }

    /// Deletions always ask first; script mode answers yes.
    pub(crate) fn confirm(&self, prompt: &str) -> Result<bool, CommandError> {
        if self.mode == CliMode::Script {
            return Ok(true);
        }
        cli_io::confirm_action(&self.theme, prompt, false)
    }

    pub(crate) fn report_error(&mut self, err: CommandError) -> Result<(), CliError> {
        match err {
            CommandError::ExitRequested => Ok(()),
            CommandError::InvalidArguments(message) => {
                cli_io::print_error(&message);
                cli_io::print_hint("Use `help <command>` for usage details.");
                Ok(())
            }
            CommandError::Store(StoreError::NotAuthenticated) => {
                cli_io::print_error(StoreError::NotAuthenticated);
                self.redirect_to_login();
                Ok(())
            }
            CommandError::Store(StoreError::Api(err)) if err.is_unauthorized() => {
                cli_io::print_error(&err);
                if let Err(err) = self.app.auth.logout() {
                    cli_io::print_warning(err);
                }
                self.redirect_to_login();
                Ok(())
            }
            other => {
                cli_io::print_error(other);
                Ok(())
            }
        }
    }

    /// Sends the user back to sign-in: the login form, or a hint in script mode.
    pub(crate) fn redirect_to_login(&mut self) {
        match self.mode {
            CliMode::Script => {
                cli_io::print_hint("Use `login <username> <password>` to sign in.");
            }
            CliMode::Interactive => {
                if let Err(err) = commands::auth::login_form(self, &[]) {
                    cli_io::print_error(err);
                }
            }
        }
    }
}
