use store_config::API_BASE_URL_ENV;

use crate::cli::core::{CommandError, CommandResult};
use crate::cli::io as cli_io;
use crate::cli::shell_context::ShellContext;
use crate::view::DetailView;

pub(crate) const USAGE: &str = "config <show|set <key> <value>>";

pub(crate) fn cmd_config(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    match args {
        [] => handle_show(context),
        [action] if action.eq_ignore_ascii_case("show") => handle_show(context),
        [action, key, value] if action.eq_ignore_ascii_case("set") => {
            handle_set(context, key, value)
        }
        _ => Err(CommandError::InvalidArguments(format!("usage: {USAGE}"))),
    }
}

fn handle_show(context: &mut ShellContext) -> CommandResult {
    let view = context.config.entries().into_iter().fold(
        DetailView::new("Configuration"),
        |view, (key, value)| view.field(key, value),
    );
    let view = view.field(
        "config file",
        context.config_manager.config_path().display().to_string(),
    );
    super::show(context, view);
    Ok(())
}

fn handle_set(context: &mut ShellContext, key: &str, value: &str) -> CommandResult {
    let mut updated = context.config.clone();
    updated.set(key, value)?;
    context.config_manager.save(&updated)?;
    cli_io::print_success(format!("Updated `{key}`."));
    if key == "api_base_url" && api_base_url_overridden() {
        cli_io::print_warning(format!(
            "{API_BASE_URL_ENV} is set and overrides the saved `api_base_url`."
        ));
    }
    context.apply_config(updated)?;
    Ok(())
}

fn api_base_url_overridden() -> bool {
    std::env::var(API_BASE_URL_ENV).is_ok_and(|value| !value.trim().is_empty())
}
