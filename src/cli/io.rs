use std::fmt;

use dialoguer::{theme::ColorfulTheme, Confirm, Input, Password, Select};

use crate::cli::core::CommandError;
use crate::cli::output;

pub fn print_info(message: impl fmt::Display) {
    output::info(message);
}

pub fn print_warning(message: impl fmt::Display) {
    output::warning(message);
}

pub fn print_error(message: impl fmt::Display) {
    output::error(message);
}

pub fn print_success(message: impl fmt::Display) {
    output::success(message);
}

pub fn print_hint(message: impl fmt::Display) {
    output::hint(message);
}

/// Prompt the user for confirmation with a yes/no question.
pub fn confirm_action(
    theme: &ColorfulTheme,
    prompt: &str,
    default: bool,
) -> Result<bool, CommandError> {
    Confirm::with_theme(theme)
        .with_prompt(prompt)
        .default(default)
        .interact()
        .map_err(CommandError::from)
}

/// Prompt the user for free-form text input.
pub fn prompt_text(theme: &ColorfulTheme, prompt: &str) -> Result<String, CommandError> {
    Input::<String>::with_theme(theme)
        .with_prompt(prompt)
        .interact_text()
        .map_err(CommandError::from)
}

/// Same as [`prompt_text`] but pre-filled with the current value.
pub fn prompt_with_default(
    theme: &ColorfulTheme,
    prompt: &str,
    current: &str,
) -> Result<String, CommandError> {
    Input::<String>::with_theme(theme)
        .with_prompt(prompt)
        .default(current.to_string())
        .interact_text()
        .map_err(CommandError::from)
}

pub fn prompt_password(theme: &ColorfulTheme, prompt: &str) -> Result<String, CommandError> {
    Password::with_theme(theme)
        .with_prompt(prompt)
        .interact()
        .map_err(CommandError::from)
}

/// Lets the user pick one entry; `None` when the prompt is dismissed.
pub fn select_index(
    theme: &ColorfulTheme,
    prompt: &str,
    items: &[String],
) -> Result<Option<usize>, CommandError> {
    Select::with_theme(theme)
        .with_prompt(prompt)
        .items(items)
        .default(0)
        .interact_opt()
        .map_err(CommandError::from)
}
