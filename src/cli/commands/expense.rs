use store_domain::ExpenseItemDraft;

use crate::app::Section;
use crate::cli::core::{CommandError, CommandResult};
use crate::cli::forms;
use crate::cli::io as cli_io;
use crate::cli::shell_context::ShellContext;
use crate::managers::ResourceManager;

pub(crate) const USAGE: &str = "expense <list|add|remove>";

pub(crate) fn cmd_expense(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let (action, rest) = super::subcommand(args);
    match action.as_str() {
        "list" => {
            let view = context.block_on(context.app.open(Section::ExpenseItems))?;
            super::show(context, view);
            Ok(())
        }
        "add" => {
            super::require_login(context)?;
            let name = forms::text(context, rest, 0, "Name")?;
            let table =
                context.block_on(context.app.expense_items.create(ExpenseItemDraft::new(name)))?;
            cli_io::print_success("Expense item added.");
            super::show(context, table);
            Ok(())
        }
        "remove" => {
            super::require_login(context)?;
            let id = forms::record_id(rest, 0, "expense remove <id>")?;
            if !context.confirm(&format!("Delete expense item #{id}?"))? {
                cli_io::print_info("Cancelled.");
                return Ok(());
            }
            let table = context.block_on(context.app.expense_items.delete(id))?;
            cli_io::print_success(format!("Expense item #{id} deleted."));
            super::show(context, table);
            Ok(())
        }
        other => Err(CommandError::InvalidArguments(format!(
            "unknown expense subcommand `{other}`; {USAGE}"
        ))),
    }
}
