use crate::cli::core::{CommandError, CommandResult};
use crate::cli::help;
use crate::cli::shell_context::ShellContext;
use crate::utils::build_info;
use crate::view::DetailView;

pub(crate) fn cmd_version(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let meta = build_info::current();
    let view = meta.rows().into_iter().fold(
        DetailView::new(format!("Store Client {}", meta.version)),
        |view, (label, value)| view.field(label, value),
    );
    super::show(context, view);
    Ok(())
}

pub(crate) fn cmd_help(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let style = context.style();
    if let Some(name) = args.first() {
        match super::find(name) {
            Some(command) => help::print_command(command, &style),
            None => context.suggest_command(name),
        }
        return Ok(());
    }

    help::print_overview(&style);
    Ok(())
}

pub(crate) fn cmd_exit(_context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    Err(CommandError::ExitRequested)
}
