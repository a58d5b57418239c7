//! Command handlers. Every mutation runs the same pipeline afterwards:
//! persist, recompute the review, re-render the summary line.

use chrono::{Local, NaiveDate};
use uuid::Uuid;

use crate::charts;
use crate::cli::charts_view;
use crate::cli::core::{
    CommandEntry, CommandError, CommandRegistry, CommandResult, ShellContext,
};
use crate::cli::help;
use crate::cli::io::{self, DATE_FORMAT};
use crate::cli::output;

pub(crate) fn register_all(registry: &mut CommandRegistry) {
    registry.register(CommandEntry {
        name: "earn",
        aliases: &["income"],
        description: "Record an income entry",
        usage: "earn [<source> <amount> <YYYY-MM-DD>]",
        handler: cmd_earn,
    });
    registry.register(CommandEntry {
        name: "spend",
        aliases: &["expense"],
        description: "Record a spending entry",
        usage: "spend [<category> <amount> <YYYY-MM-DD>]",
        handler: cmd_spend,
    });
    registry.register(CommandEntry {
        name: "delete",
        aliases: &[],
        description: "Delete a listed entry",
        usage: "delete earning|expense <position>",
        handler: cmd_delete,
    });
    registry.register(CommandEntry {
        name: "budget",
        aliases: &[],
        description: "Show or change the budget target",
        usage: "budget [show|set <amount>|clear]",
        handler: cmd_budget,
    });
    registry.register(CommandEntry {
        name: "list",
        aliases: &["transactions"],
        description: "List all earnings and expenses",
        usage: "list",
        handler: cmd_list,
    });
    registry.register(CommandEntry {
        name: "balance",
        aliases: &[],
        description: "Show totals and the running balance",
        usage: "balance",
        handler: cmd_balance,
    });
    registry.register(CommandEntry {
        name: "advice",
        aliases: &["recommend"],
        description: "Show expense reductions that meet the budget",
        usage: "advice",
        handler: cmd_advice,
    });
    registry.register(CommandEntry {
        name: "charts",
        aliases: &[],
        description: "Render the bar and pie charts",
        usage: "charts",
        handler: cmd_charts,
    });
    registry.register(CommandEntry {
        name: "config",
        aliases: &[],
        description: "Show or change configuration values",
        usage: "config [show|set <locale|currency> <value>]",
        handler: cmd_config,
    });
    registry.register(CommandEntry {
        name: "help",
        aliases: &["?"],
        description: "Show command help",
        usage: "help [<command>]",
        handler: cmd_help,
    });
    registry.register(CommandEntry {
        name: "exit",
        aliases: &["quit"],
        description: "Leave the shell",
        usage: "exit",
        handler: cmd_exit,
    });
}

fn cmd_earn(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let (source, amount, date) = entry_input(context, args, "Income source", "earn")?;
    context.ledger.add_earning(source.as_str(), amount, date)?;
    output::success(format!(
        "Earning `{}` recorded: +{} ({})",
        source,
        context.format_amount(amount),
        date
    ));
    context.commit()
}

fn cmd_spend(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let (category, amount, date) = entry_input(context, args, "Expense category", "spend")?;
    context.ledger.add_expense(category.as_str(), amount, date)?;
    output::success(format!(
        "Expense `{}` recorded: -{} ({})",
        category,
        context.format_amount(amount),
        date
    ));
    context.commit()
}

fn entry_input(
    context: &ShellContext,
    args: &[&str],
    label_prompt: &str,
    verb: &str,
) -> Result<(String, f64, NaiveDate), CommandError> {
    match args {
        [] if context.is_interactive() => {
            let label = io::prompt_label(&context.theme, label_prompt)?;
            let amount = io::prompt_amount(&context.theme, "Amount")?;
            let date = io::prompt_date(&context.theme, "Date", Local::now().date_naive())?;
            Ok((label, amount, date))
        }
        [label, amount, date] => Ok((
            label.to_string(),
            parse_amount(amount)?,
            parse_date(date)?,
        )),
        _ => Err(CommandError::InvalidArguments(format!(
            "usage: {verb} <label> <amount> <YYYY-MM-DD>"
        ))),
    }
}

fn cmd_delete(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    const USAGE: &str = "usage: delete earning|expense <position>";
    let (kind, position) = match args {
        [kind, position] => (kind.to_lowercase(), parse_position(position)?),
        _ => return Err(CommandError::InvalidArguments(USAGE.into())),
    };

    match kind.as_str() {
        "earning" => {
            let id = earning_id_at(context, position)?;
            let removed = context.ledger.remove_earning(id)?;
            output::success(format!(
                "Earning `{}` removed: +{} ({})",
                removed.source,
                context.format_amount(removed.amount),
                removed.date
            ));
        }
        "expense" => {
            let id = expense_id_at(context, position)?;
            let removed = context.ledger.remove_expense(id)?;
            output::success(format!(
                "Expense `{}` removed: -{} ({})",
                removed.category,
                context.format_amount(removed.amount),
                removed.date
            ));
        }
        _ => return Err(CommandError::InvalidArguments(USAGE.into())),
    }
    context.commit()
}

// Positions are resolved against the same ordering `list` renders, then the
// removal itself goes through the entry's stable id.
fn earning_id_at(context: &ShellContext, position: usize) -> Result<Uuid, CommandError> {
    context
        .ledger
        .earnings
        .get(position - 1)
        .map(|entry| entry.id)
        .ok_or_else(|| {
            CommandError::InvalidArguments(format!(
                "no earning at position {position}; `list` shows current positions"
            ))
        })
}

fn expense_id_at(context: &ShellContext, position: usize) -> Result<Uuid, CommandError> {
    context
        .ledger
        .expenses
        .get(position - 1)
        .map(|entry| entry.id)
        .ok_or_else(|| {
            CommandError::InvalidArguments(format!(
                "no expense at position {position}; `list` shows current positions"
            ))
        })
}

fn cmd_budget(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    match args {
        [] | ["show"] => {
            if context.ledger.budget_active() {
                output::info(format!(
                    "Budget target: {}",
                    context.format_amount(context.ledger.budget)
                ));
                output::info(context.review().message);
            } else {
                output::info("No budget target is set.");
            }
            Ok(())
        }
        ["set", amount] => {
            let amount = parse_amount(amount)?;
            context.ledger.set_budget(amount)?;
            output::success(format!(
                "Budget target set to {}.",
                context.format_amount(amount)
            ));
            context.commit()
        }
        ["clear"] => {
            context.ledger.clear_budget();
            output::success("Budget target cleared.");
            context.commit()
        }
        _ => Err(CommandError::InvalidArguments(
            "usage: budget [show|set <amount>|clear]".into(),
        )),
    }
}

fn cmd_list(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    expect_no_args(args, "list")?;

    output::section("Earnings");
    if context.ledger.earnings.is_empty() {
        output::info("  (none)");
    }
    for (index, entry) in context.ledger.earnings.iter().enumerate() {
        output::info(format!(
            "  {:>2}. {:<20} +{:<12} ({})",
            index + 1,
            entry.source,
            context.format_amount(entry.amount),
            entry.date
        ));
    }

    output::section("Expenses");
    if context.ledger.expenses.is_empty() {
        output::info("  (none)");
    }
    for (index, entry) in context.ledger.expenses.iter().enumerate() {
        output::info(format!(
            "  {:>2}. {:<20} -{:<12} ({})",
            index + 1,
            entry.category,
            context.format_amount(entry.amount),
            entry.date
        ));
    }

    output::hint("Use `delete earning <position>` or `delete expense <position>` to remove one.");
    context.await_view_escape()
}

fn cmd_balance(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    expect_no_args(args, "balance")?;
    output::info(format!(
        "Total earnings: {}",
        context.format_amount(context.ledger.total_earnings())
    ));
    output::info(format!(
        "Total expenses: {}",
        context.format_amount(context.ledger.total_expenses())
    ));
    output::info(format!(
        "Balance: {}",
        context.format_amount(context.ledger.balance())
    ));
    Ok(())
}

fn cmd_advice(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    expect_no_args(args, "advice")?;
    let review = context.review();

    output::section("Budget Advice");
    output::info(format!("Balance: {}", context.format_amount(review.balance)));
    if let Some(shortfall) = review.shortfall {
        output::info(format!(
            "Headroom vs budget: {}",
            context.format_amount(shortfall)
        ));
    }

    if review.over_budget() {
        output::warning(&review.message);
    } else {
        output::info(&review.message);
    }
    for (index, recommendation) in review.recommendations.iter().enumerate() {
        output::info(format!(
            "  {}. Reduce {} by {}",
            index + 1,
            recommendation.category,
            context.format_amount(recommendation.reduce_by)
        ));
    }
    Ok(())
}

fn cmd_charts(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    expect_no_args(args, "charts")?;

    let series = charts::bar_series(&context.ledger);
    output::section("Earnings vs Expenses");
    for line in charts_view::render_bar(&series) {
        output::info(line);
    }

    let slices = charts::pie_slices(&context.ledger.expenses);
    output::section("Expenses by Group");
    for line in charts_view::render_pie(&slices) {
        output::info(line);
    }

    context.await_view_escape()
}

fn cmd_config(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    match args {
        [] | ["show"] => {
            output::section("Configuration");
            output::info(format!("  Locale: {}", context.config.locale));
            output::info(format!("  Currency: {}", context.config.currency));
            Ok(())
        }
        ["set", key, value] => {
            match key.to_lowercase().as_str() {
                "locale" => context.config.locale = value.to_string(),
                "currency" => context.config.currency = value.to_uppercase(),
                other => {
                    return Err(CommandError::InvalidArguments(format!(
                        "unknown config key `{other}`"
                    )))
                }
            }
            context.persist_config()?;
            output::success("Configuration updated.");
            Ok(())
        }
        _ => Err(CommandError::InvalidArguments(
            "usage: config [show|set <locale|currency> <value>]".into(),
        )),
    }
}

fn cmd_help(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    match args {
        [] => help::print_overview(context),
        [name] => match context.command(&name.to_lowercase()) {
            Some(entry) => help::print_command(entry),
            None => context.suggest_command(name),
        },
        _ => {
            return Err(CommandError::InvalidArguments(
                "usage: help [<command>]".into(),
            ))
        }
    }
    Ok(())
}

fn cmd_exit(_context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    Err(CommandError::ExitRequested)
}

fn expect_no_args(args: &[&str], command: &str) -> CommandResult {
    if args.is_empty() {
        Ok(())
    } else {
        Err(CommandError::InvalidArguments(format!(
            "usage: {command}"
        )))
    }
}

fn parse_amount(raw: &str) -> Result<f64, CommandError> {
    raw.parse::<f64>()
        .map_err(|_| CommandError::InvalidArguments(format!("amount `{raw}` must be numeric")))
}

fn parse_date(raw: &str) -> Result<NaiveDate, CommandError> {
    NaiveDate::parse_from_str(raw, DATE_FORMAT).map_err(|_| {
        CommandError::InvalidArguments(format!("date `{raw}` must use the YYYY-MM-DD format"))
    })
}

fn parse_position(raw: &str) -> Result<usize, CommandError> {
    let position = raw
        .parse::<usize>()
        .map_err(|_| CommandError::InvalidArguments("position must be numeric".into()))?;
    if position == 0 {
        return Err(CommandError::InvalidArguments(
            "positions start at 1".into(),
        ));
    }
    Ok(position)
}
