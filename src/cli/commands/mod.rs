pub mod auth;
pub mod charge;
pub mod config;
pub mod expense;
pub mod report;
pub mod sale;
pub mod system;
pub mod warehouse;

use crate::cli::core::{CommandError, CommandResult};
use crate::cli::shell_context::ShellContext;
use crate::cli::ui;
use crate::view::View;

pub type CommandHandler = fn(&mut ShellContext, &[&str]) -> CommandResult;

/// A root command of the shell and the action words it accepts.
pub struct Command {
    pub name: &'static str,
    pub description: &'static str,
    pub usage: &'static str,
    pub actions: &'static [&'static str],
    pub handler: CommandHandler,
}

/// Every root command, in the order `help` lists them.
pub const COMMANDS: &[Command] = &[
    Command {
        name: "login",
        description: "Sign in to the store backend",
        usage: "login [username] [password]",
        actions: &[],
        handler: auth::login_form,
    },
    Command {
        name: "logout",
        description: "Sign out and forget the token",
        usage: "logout",
        actions: &[],
        handler: auth::cmd_logout,
    },
    Command {
        name: "whoami",
        description: "Show the signed-in user",
        usage: "whoami",
        actions: &[],
        handler: auth::cmd_whoami,
    },
    Command {
        name: "dashboard",
        description: "Show the store sections",
        usage: "dashboard",
        actions: &[],
        handler: auth::cmd_dashboard,
    },
    Command {
        name: "warehouse",
        description: "Manage warehouse stock",
        usage: warehouse::USAGE,
        actions: &["list", "show", "add", "edit", "remove"],
        handler: warehouse::cmd_warehouse,
    },
    Command {
        name: "sale",
        description: "Manage sales",
        usage: sale::USAGE,
        actions: &["list", "add", "remove"],
        handler: sale::cmd_sale,
    },
    Command {
        name: "expense",
        description: "Manage expense items",
        usage: expense::USAGE,
        actions: &["list", "add", "remove"],
        handler: expense::cmd_expense,
    },
    Command {
        name: "charge",
        description: "Record spending against expense items",
        usage: charge::USAGE,
        actions: &["list", "add", "remove"],
        handler: charge::cmd_charge,
    },
    Command {
        name: "report",
        description: "Monthly profit and top products by revenue",
        usage: report::USAGE,
        actions: &["profit", "top"],
        handler: report::cmd_report,
    },
    Command {
        name: "config",
        description: "Show or change client settings",
        usage: config::USAGE,
        actions: &["show", "set"],
        handler: config::cmd_config,
    },
    Command {
        name: "help",
        description: "Show available commands",
        usage: "help [command]",
        actions: &[],
        handler: system::cmd_help,
    },
    Command {
        name: "version",
        description: "Show build metadata",
        usage: "version",
        actions: &[],
        handler: system::cmd_version,
    },
    Command {
        name: "exit",
        description: "Exit the shell",
        usage: "exit",
        actions: &[],
        handler: system::cmd_exit,
    },
];

pub fn find(name: &str) -> Option<&'static Command> {
    COMMANDS
        .iter()
        .find(|command| command.name.eq_ignore_ascii_case(name))
}

pub fn names() -> impl Iterator<Item = &'static str> {
    COMMANDS.iter().map(|command| command.name)
}

/// Replaces the visible content with `view`.
pub(crate) fn show(context: &ShellContext, view: impl Into<View>) {
    ui::render_view(&view.into(), &context.style());
}

/// Gate for actions that talk to the backend.
pub(crate) fn require_login(context: &ShellContext) -> Result<(), CommandError> {
    context.app.auth.require_session()?;
    Ok(())
}

/// First argument as a lowercase subcommand, `list` when absent.
pub(crate) fn subcommand<'a>(args: &'a [&'a str]) -> (String, &'a [&'a str]) {
    match args.split_first() {
        Some((action, rest)) => (action.to_lowercase(), rest),
        None => ("list".to_string(), &[]),
    }
}
