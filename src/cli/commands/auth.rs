use crate::app::Section;
use crate::cli::core::{CommandError, CommandResult};
use crate::cli::forms;
use crate::cli::io as cli_io;
use crate::cli::shell_context::{CliMode, ShellContext};

/// Collects credentials, signs in and lands on the dashboard.
pub(crate) fn login_form(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let username = forms::text(context, args, 0, "Username")?;
    let password = match (args.get(1), context.mode) {
        (Some(password), _) => password.to_string(),
        (None, CliMode::Script) => {
            return Err(CommandError::InvalidArguments("missing password".into()))
        }
        (None, CliMode::Interactive) => cli_io::prompt_password(&context.theme, "Password")?,
    };

    let user = context
        .runtime
        .block_on(context.app.auth.login(&username, &password))?
        .to_string();
    cli_io::print_success(format!("Logged in as {user}."));

    let view = context.block_on(context.app.open(Section::Dashboard))?;
    super::show(context, view);
    Ok(())
}

pub(crate) fn cmd_logout(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    context.app.auth.logout()?;
    cli_io::print_success("Logged out.");
    context.redirect_to_login();
    Ok(())
}

pub(crate) fn cmd_whoami(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let user = context
        .runtime
        .block_on(context.app.auth.refresh_profile())?
        .to_string();
    cli_io::print_info(format!("Logged in as {user}."));
    Ok(())
}

pub(crate) fn cmd_dashboard(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let view = context.block_on(context.app.open(Section::Dashboard))?;
    super::show(context, view);
    Ok(())
}
