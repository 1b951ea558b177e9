use store_domain::SaleDraft;

use crate::app::Section;
use crate::cli::core::{CommandError, CommandResult};
use crate::cli::forms;
use crate::cli::io as cli_io;
use crate::cli::shell_context::{CliMode, ShellContext};
use crate::managers::ResourceManager;

pub(crate) const USAGE: &str = "sale <list|add|remove>";

pub(crate) fn cmd_sale(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let (action, rest) = super::subcommand(args);
    match action.as_str() {
        "list" => {
            let view = context.block_on(context.app.open(Section::Sales))?;
            super::show(context, view);
            Ok(())
        }
        "add" => handle_add(context, rest),
        "remove" => handle_remove(context, rest),
        other => Err(CommandError::InvalidArguments(format!(
            "unknown sale subcommand `{other}`; {USAGE}"
        ))),
    }
}

fn handle_add(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    super::require_login(context)?;
    let items = if args.is_empty() && context.mode == CliMode::Interactive {
        context.block_on(context.app.warehouses.list())?
    } else {
        Vec::new()
    };
    let Some(item_id) = forms::choose(context, args, 0, "item", &items)? else {
        cli_io::print_info("Cancelled.");
        return Ok(());
    };
    let quantity = forms::parse(&forms::text(context, args, 1, "Quantity")?, "quantity")?;

    let table = context.block_on(context.app.sales.create(SaleDraft::new(item_id, quantity)))?;
    cli_io::print_success("Sale recorded.");
    super::show(context, table);
    Ok(())
}

fn handle_remove(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    super::require_login(context)?;
    let id = forms::record_id(args, 0, "sale remove <id>")?;
    if !context.confirm(&format!("Delete sale #{id}? The units return to stock."))? {
        cli_io::print_info("Cancelled.");
        return Ok(());
    }
    let table = context.block_on(context.app.sales.delete(id))?;
    cli_io::print_success(format!("Sale #{id} deleted."));
    super::show(context, table);
    Ok(())
}
