//! Form fields read from positional arguments, or prompted for when the
//! shell is interactive and the argument is missing.

use std::str::FromStr;

use rust_decimal::Decimal;
use store_domain::{Displayable, Identifiable, RecordId};

use super::core::CommandError;
use super::io as cli_io;
use super::shell_context::{CliMode, ShellContext};

pub(crate) fn text(
    context: &ShellContext,
    args: &[&str],
    index: usize,
    label: &str,
) -> Result<String, CommandError> {
    if let Some(value) = args.get(index) {
        return Ok(value.to_string());
    }
    match context.mode {
        CliMode::Script => Err(CommandError::InvalidArguments(format!("missing {label}"))),
        CliMode::Interactive => cli_io::prompt_text(&context.theme, label),
    }
}

/// Like [`text`] but an interactive prompt starts from `current`.
pub(crate) fn text_or(
    context: &ShellContext,
    args: &[&str],
    index: usize,
    label: &str,
    current: &str,
) -> Result<String, CommandError> {
    if let Some(value) = args.get(index) {
        return Ok(value.to_string());
    }
    match context.mode {
        CliMode::Script => Ok(current.to_string()),
        CliMode::Interactive => cli_io::prompt_with_default(&context.theme, label, current),
    }
}

pub(crate) fn parse<T: FromStr>(raw: &str, label: &str) -> Result<T, CommandError> {
    raw.trim()
        .parse()
        .map_err(|_| CommandError::InvalidArguments(format!("invalid {label}: `{raw}`")))
}

/// Accepts both `10.50` and `10,50`.
pub(crate) fn parse_amount(raw: &str, label: &str) -> Result<Decimal, CommandError> {
    let normalized = raw.trim().replace(',', ".");
    Decimal::from_str(&normalized)
        .map_err(|_| CommandError::InvalidArguments(format!("invalid {label}: `{raw}`")))
}

pub(crate) fn record_id(args: &[&str], index: usize, usage: &str) -> Result<RecordId, CommandError> {
    let raw = args
        .get(index)
        .ok_or_else(|| CommandError::InvalidArguments(format!("usage: {usage}")))?;
    parse(raw, "id")
}

/// Picks a record by id argument, or from a list when interactive.
pub(crate) fn choose<T>(
    context: &ShellContext,
    args: &[&str],
    index: usize,
    label: &str,
    records: &[T],
) -> Result<Option<RecordId>, CommandError>
where
    T: Identifiable + Displayable,
{
    if let Some(raw) = args.get(index) {
        return parse(raw, label).map(Some);
    }
    if context.mode == CliMode::Script {
        return Err(CommandError::InvalidArguments(format!("missing {label}")));
    }
    if records.is_empty() {
        return Err(CommandError::InvalidArguments(format!(
            "no {label} available to choose from"
        )));
    }
    let labels: Vec<String> = records.iter().map(Displayable::display_label).collect();
    let picked = cli_io::select_index(&context.theme, label, &labels)?;
    Ok(picked.and_then(|idx| records.get(idx)).map(Identifiable::id))
}
