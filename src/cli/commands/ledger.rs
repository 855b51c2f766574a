use crate::cli::core::{CliMode, CommandError, CommandResult};
use crate::cli::output;
use crate::cli::registry::CommandEntry;
use crate::cli::shell_context::{PendingUndo, ShellContext};
use crate::currency::{format_money, format_spend, format_timestamp, parse_amount};
use crate::ledger::{BalanceLedger, BudgetStatus, HistoryEntry};
use crate::theme::{Rgb, Theme};

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new("limit", "Set your spending limit", "limit <amount>", cmd_limit),
        CommandEntry::new("spend", "Record a spend", "spend <amount>", cmd_spend),
        CommandEntry::new("undo", "Revert the latest spend", "undo", cmd_undo),
        CommandEntry::new("status", "Show what is left", "status", cmd_status),
        CommandEntry::new("history", "List spends, newest first", "history", cmd_history),
        CommandEntry::new(
            "reset",
            "Clear the limit and all history",
            "reset [--yes]",
            cmd_reset,
        ),
    ]
}

fn amount_arg(args: &[&str], usage: &str) -> Result<f64, CommandError> {
    let raw = args
        .first()
        .ok_or_else(|| CommandError::InvalidArguments(format!("Usage: {}", usage)))?;
    parse_amount(raw).ok_or_else(|| {
        CommandError::InvalidArguments(format!("`{}` is not an amount greater than 0", raw))
    })
}

fn cmd_limit(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    if context.state.is_active() {
        return Err(CommandError::InvalidArguments(
            "A limit is already running. Use `reset` to start over.".into(),
        ));
    }
    let amount = amount_arg(args, "limit <amount>")?;
    let state = BalanceLedger::start_limit(amount, context.clock.now())?;
    context.commit(state)?;
    context.pending_undo = None;
    output::success(format!("Limit set: {}", format_money(amount)));
    Ok(())
}

fn cmd_spend(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    if !context.state.is_active() {
        return Err(CommandError::NoActiveLimit);
    }
    let amount = amount_arg(args, "spend <amount>")?;
    let now = context.clock.now();
    let outcome = BalanceLedger::record_spend(&context.state, amount, now)?;
    context.commit(outcome.state)?;
    context.pending_undo = Some(PendingUndo {
        transaction: outcome.transaction,
        balance_before: outcome.balance_before,
        offered_at: now,
    });

    if outcome.was_over_budget {
        output::warning(format!("{} (over budget!)", format_spend(amount)));
    } else {
        output::success(format_spend(amount));
    }
    output::hint(format!(
        "Left: {}. Type `undo` within {}s to revert.",
        format_money(context.state.balance),
        context.config.undo_window_secs
    ));
    Ok(())
}

fn cmd_undo(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let Some(pending) = context.take_open_undo() else {
        output::info("Nothing to undo.");
        return Ok(());
    };
    let state = BalanceLedger::undo(
        context.state.clone(),
        &pending.transaction,
        pending.balance_before,
    );
    context.commit(state)?;
    output::success(format!(
        "Undone {}. Left: {}",
        format_spend(pending.transaction.amount),
        format_money(context.state.balance)
    ));
    Ok(())
}

fn status_color(status: BudgetStatus) -> fn(&Theme) -> Rgb {
    fn accent(theme: &Theme) -> Rgb {
        theme.accent
    }
    fn warning(theme: &Theme) -> Rgb {
        theme.warning
    }
    fn danger(theme: &Theme) -> Rgb {
        theme.danger
    }
    match status {
        BudgetStatus::Healthy => accent,
        BudgetStatus::Warning => warning,
        BudgetStatus::Critical => danger,
    }
}

fn cmd_status(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let state = &context.state;
    if !state.is_active() {
        return Err(CommandError::NoActiveLimit);
    }
    let status = state.status();
    output::info(format!(
        "{} of {}",
        output::tint(format_money(state.balance), status_color(status)),
        format_money(state.initial_limit)
    ));
    output::hint(format!(
        "{:.0}% left ({}), {} spent across {} transaction(s)",
        state.percent_remaining(),
        status.label(),
        format_money(state.spent()),
        state.transaction_count()
    ));
    Ok(())
}

fn cmd_history(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    output::section("History");
    let history = context.state.history();
    if history.is_empty() {
        output::hint("No transactions yet");
        return Ok(());
    }
    for entry in history {
        match entry {
            HistoryEntry::Started { limit, at } => output::info(format!(
                "{:<20}{}",
                format!("Started: {}", format_money(limit)),
                format_timestamp(at)
            )),
            HistoryEntry::Spend(txn) => output::info(format!(
                "{:<20}{}",
                format_spend(txn.amount),
                format_timestamp(txn.timestamp)
            )),
        }
    }
    Ok(())
}

fn cmd_reset(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let forced = args.iter().any(|arg| matches!(*arg, "--yes" | "-y"));
    if !forced {
        if context.mode == CliMode::Script {
            output::warning("Reset needs confirmation: use `reset --yes` in scripts.");
            return Ok(());
        }
        let question = "Reset everything? This clears your limit and all transaction history.";
        if !context.confirm(question)? {
            output::info("Reset cancelled.");
            return Ok(());
        }
    }
    context.commit(BalanceLedger::reset())?;
    context.pending_undo = None;
    output::success("Everything cleared. Set a new limit with `limit <amount>`.");
    Ok(())
}
