use store_domain::WarehouseDraft;

use crate::app::Section;
use crate::cli::core::{CommandError, CommandResult};
use crate::cli::forms;
use crate::cli::io as cli_io;
use crate::cli::shell_context::ShellContext;
use crate::format::format_amount;
use crate::managers::ResourceManager;

pub(crate) const USAGE: &str = "warehouse <list|show|add|edit|remove>";

pub(crate) fn cmd_warehouse(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let (action, rest) = super::subcommand(args);
    match action.as_str() {
        "list" => handle_list(context),
        "show" => handle_show(context, rest),
        "add" => handle_add(context, rest),
        "edit" => handle_edit(context, rest),
        "remove" => handle_remove(context, rest),
        other => Err(CommandError::InvalidArguments(format!(
            "unknown warehouse subcommand `{other}`; {USAGE}"
        ))),
    }
}

fn handle_list(context: &mut ShellContext) -> CommandResult {
    let view = context.block_on(context.app.open(Section::Warehouses))?;
    super::show(context, view);
    Ok(())
}

fn handle_show(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    super::require_login(context)?;
    let id = forms::record_id(args, 0, "warehouse show <id>")?;
    let view = context.block_on(context.app.warehouses.show(id))?;
    super::show(context, view);
    Ok(())
}

fn handle_add(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    super::require_login(context)?;
    let name = forms::text(context, args, 0, "Name")?;
    let quantity = forms::parse(&forms::text(context, args, 1, "Quantity")?, "quantity")?;
    let price = forms::parse_amount(&forms::text(context, args, 2, "Price")?, "price")?;

    let table = context.block_on(
        context
            .app
            .warehouses
            .create(WarehouseDraft::new(name, quantity, price)),
    )?;
    cli_io::print_success("Item added.");
    super::show(context, table);
    Ok(())
}

fn handle_edit(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    super::require_login(context)?;
    let id = forms::record_id(args, 0, "warehouse edit <id> [name] [quantity] [price]")?;
    let current = context.block_on(context.app.warehouses.get(id))?;

    let name = forms::text_or(context, args, 1, "Name", &current.name)?;
    let quantity = forms::text_or(context, args, 2, "Quantity", &current.quantity.to_string())?;
    let price = forms::text_or(context, args, 3, "Price", &format_amount(current.amount))?;
    let draft = WarehouseDraft::new(
        name,
        forms::parse(&quantity, "quantity")?,
        forms::parse_amount(&price, "price")?,
    );

    let table = context.block_on(context.app.warehouses.update(id, draft))?;
    cli_io::print_success(format!("Item #{id} updated."));
    super::show(context, table);
    Ok(())
}

fn handle_remove(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    super::require_login(context)?;
    let id = forms::record_id(args, 0, "warehouse remove <id>")?;
    if !context.confirm(&format!("Delete item #{id}?"))? {
        cli_io::print_info("Cancelled.");
        return Ok(());
    }
    let table = context.block_on(context.app.warehouses.delete(id))?;
    cli_io::print_success(format!("Item #{id} deleted."));
    super::show(context, table);
    Ok(())
}
