use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::transaction::Transaction;

const HEALTHY_THRESHOLD: f64 = 50.0;
const WARNING_THRESHOLD: f64 = 20.0;

/// Spending-limit state for one limit period.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LedgerState {
    pub balance: f64,
    pub initial_limit: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit_started_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub transactions: Vec<Transaction>,
}

/// Whether the ledger is waiting for a limit or tracking an active period.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LedgerMode {
    AwaitingLimit,
    Active,
}

/// Health tier derived from the share of the limit still available.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BudgetStatus {
    Healthy,
    Warning,
    Critical,
}

impl BudgetStatus {
    pub fn from_percent(percent: f64) -> Self {
        if percent > HEALTHY_THRESHOLD {
            BudgetStatus::Healthy
        } else if percent > WARNING_THRESHOLD {
            BudgetStatus::Warning
        } else {
            BudgetStatus::Critical
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            BudgetStatus::Healthy => "healthy",
            BudgetStatus::Warning => "warning",
            BudgetStatus::Critical => "critical",
        }
    }
}

/// One row of the newest-first history view.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HistoryEntry {
    Started {
        limit: f64,
        at: DateTime<Utc>,
    },
    Spend(Transaction),
}

impl LedgerState {
    /// The state before any limit has been set.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> LedgerMode {
        if self.initial_limit > 0.0 {
            LedgerMode::Active
        } else {
            LedgerMode::AwaitingLimit
        }
    }

    pub fn is_active(&self) -> bool {
        self.mode() == LedgerMode::Active
    }

    /// Percentage of the limit still available, clamped to `[0, 100]`.
    pub fn percent_remaining(&self) -> f64 {
        if self.initial_limit <= 0.0 {
            return 0.0;
        }
        (self.balance / self.initial_limit * 100.0).clamp(0.0, 100.0)
    }

    pub fn status(&self) -> BudgetStatus {
        BudgetStatus::from_percent(self.percent_remaining())
    }

    /// Sum of every recorded spend, including amounts absorbed past zero.
    pub fn spent(&self) -> f64 {
        self.transactions.iter().map(|txn| txn.amount).sum()
    }

    pub fn transaction_count(&self) -> usize {
        self.transactions.len()
    }

    /// Newest-first history: the period start, then spends in reverse order.
    pub fn history(&self) -> Vec<HistoryEntry> {
        let mut entries: Vec<HistoryEntry> = self
            .transactions
            .iter()
            .rev()
            .copied()
            .map(HistoryEntry::Spend)
            .collect();
        if let Some(at) = self.limit_started_at {
            entries.insert(
                0,
                HistoryEntry::Started {
                    limit: self.initial_limit,
                    at,
                },
            );
        }
        entries
    }
}
