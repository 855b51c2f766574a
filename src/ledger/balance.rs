//! State transitions for the balance ledger.
//!
//! Every operation takes the current [`LedgerState`] by value or reference and
//! returns the next one; nothing here touches storage or remembers the last
//! spend. Callers persist the returned state and own any undo bookkeeping.

use chrono::{DateTime, Utc};

use crate::errors::{LedgerError, Result};

use super::{state::LedgerState, transaction::Transaction};

/// Result of recording a spend.
#[derive(Debug, Clone, PartialEq)]
pub struct SpendOutcome {
    pub state: LedgerState,
    pub transaction: Transaction,
    /// Balance before the spend was applied, for handing back to [`BalanceLedger::undo`].
    pub balance_before: f64,
    pub was_over_budget: bool,
}

/// Namespace for the ledger operations.
pub struct BalanceLedger;

impl BalanceLedger {
    /// Begins a new limit period, discarding the previous one.
    pub fn start_limit(amount: f64, now: DateTime<Utc>) -> Result<LedgerState> {
        ensure_positive(amount)?;
        tracing::info!(limit = amount, "limit period started");
        Ok(LedgerState {
            balance: amount,
            initial_limit: amount,
            limit_started_at: Some(now),
            transactions: Vec::new(),
        })
    }

    /// Records a spend. Spends larger than the balance are allowed; the balance
    /// floors at zero and the outcome is flagged as over budget.
    pub fn record_spend(
        state: &LedgerState,
        amount: f64,
        now: DateTime<Utc>,
    ) -> Result<SpendOutcome> {
        ensure_positive(amount)?;
        let balance_before = state.balance;
        let was_over_budget = amount > balance_before;
        let transaction = Transaction::new(amount, now);

        let mut next = state.clone();
        next.balance = (balance_before - amount).max(0.0);
        next.transactions.push(transaction);

        tracing::debug!(
            amount,
            balance = next.balance,
            over_budget = was_over_budget,
            "spend recorded"
        );
        Ok(SpendOutcome {
            state: next,
            transaction,
            balance_before,
            was_over_budget,
        })
    }

    /// Reverts `transaction`, restoring the exact balance captured before it.
    ///
    /// Returns the state unchanged when the transaction is no longer present,
    /// so repeated undo requests are harmless.
    pub fn undo(
        mut state: LedgerState,
        transaction: &Transaction,
        balance_before: f64,
    ) -> LedgerState {
        let Some(position) = state
            .transactions
            .iter()
            .rposition(|candidate| candidate == transaction)
        else {
            tracing::debug!(
                amount = transaction.amount,
                "undo ignored: transaction not found"
            );
            return state;
        };
        state.transactions.remove(position);
        state.balance = balance_before;
        tracing::debug!(
            amount = transaction.amount,
            balance = balance_before,
            "spend undone"
        );
        state
    }

    /// Returns the empty, awaiting-limit state.
    pub fn reset() -> LedgerState {
        tracing::info!("ledger reset");
        LedgerState::empty()
    }

    pub fn percent_remaining(state: &LedgerState) -> f64 {
        state.percent_remaining()
    }
}

fn ensure_positive(amount: f64) -> Result<()> {
    if amount.is_finite() && amount > 0.0 {
        Ok(())
    } else {
        Err(LedgerError::InvalidAmount(amount))
    }
}
