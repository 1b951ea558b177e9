use chrono::Local;

use crate::cli::core::{CommandError, CommandResult};
use crate::cli::shell_context::ShellContext;
use crate::format::month_bounds;
use crate::reports::{current_period, parse_date, parse_year_month};

pub(crate) const USAGE: &str = "report <profit [YYYY-MM]|top [YYYY-MM-DD] [YYYY-MM-DD]>";

pub(crate) fn cmd_report(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    super::require_login(context)?;
    let (action, rest) = match args.split_first() {
        Some((action, rest)) => (action.to_lowercase(), rest),
        None => ("profit".to_string(), &[][..]),
    };
    match action.as_str() {
        "profit" => handle_profit(context, rest),
        "top" => handle_top(context, rest),
        other => Err(CommandError::InvalidArguments(format!(
            "unknown report `{other}`; {USAGE}"
        ))),
    }
}

fn handle_profit(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let (year, month) = match args.first() {
        Some(raw) => parse_year_month(raw)?,
        None => current_period(Local::now().date_naive()),
    };
    let view = context.block_on(context.app.reports.profit(year, month))?;
    super::show(context, view);
    Ok(())
}

/// Defaults to the current month; a lone start date runs to the end of its month.
fn handle_top(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let (start, end) = match args {
        [] => month_bounds(Local::now().date_naive()),
        [start] => {
            let start = parse_date(start)?;
            (start, month_bounds(start).1)
        }
        [start, end, ..] => (parse_date(start)?, parse_date(end)?),
    };
    let table = context.block_on(context.app.reports.top_products(start, end))?;
    super::show(context, table);
    Ok(())
}
