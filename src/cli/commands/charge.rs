use store_domain::ChargeDraft;

use crate::app::Section;
use crate::cli::core::{CommandError, CommandResult};
use crate::cli::forms;
use crate::cli::io as cli_io;
use crate::cli::shell_context::{CliMode, ShellContext};
use crate::managers::ResourceManager;

pub(crate) const USAGE: &str = "charge <list|add|remove>";

pub(crate) fn cmd_charge(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let (action, rest) = super::subcommand(args);
    match action.as_str() {
        "list" => {
            let view = context.block_on(context.app.open(Section::Charges))?;
            super::show(context, view);
            Ok(())
        }
        "add" => handle_add(context, rest),
        "remove" => handle_remove(context, rest),
        other => Err(CommandError::InvalidArguments(format!(
            "unknown charge subcommand `{other}`; {USAGE}"
        ))),
    }
}

fn handle_add(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    super::require_login(context)?;
    let items = if args.is_empty() && context.mode == CliMode::Interactive {
        context.block_on(context.app.expense_items.list())?
    } else {
        Vec::new()
    };
    let Some(item_id) = forms::choose(context, args, 0, "expense item", &items)? else {
        cli_io::print_info("Cancelled.");
        return Ok(());
    };
    let amount = forms::parse_amount(&forms::text(context, args, 1, "Amount")?, "amount")?;

    let table = context.block_on(context.app.charges.create(ChargeDraft::new(item_id, amount)))?;
    cli_io::print_success("Charge recorded.");
    super::show(context, table);
    Ok(())
}

fn handle_remove(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    super::require_login(context)?;
    let id = forms::record_id(args, 0, "charge remove <id>")?;
    if !context.confirm(&format!("Delete charge #{id}?"))? {
        cli_io::print_info("Cancelled.");
        return Ok(());
    }
    let table = context.block_on(context.app.charges.delete(id))?;
    cli_io::print_success(format!("Charge #{id} deleted."));
    super::show(context, table);
    Ok(())
}
