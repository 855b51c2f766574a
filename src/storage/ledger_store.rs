use chrono::{TimeZone, Utc};

use crate::errors::Result;
use crate::ledger::LedgerState;

use super::{
    codec::{decode_transactions, encode_transactions},
    KeyValueStore, KEY_BALANCE, KEY_INITIAL_LIMIT, KEY_LIMIT_START_DATE, KEY_THEME,
    KEY_TRANSACTIONS,
};

/// Everything restored at startup.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Snapshot {
    pub state: LedgerState,
    pub theme_index: i64,
}

/// Maps [`LedgerState`] onto the flat preference keys.
#[derive(Debug, Clone)]
pub struct LedgerStore<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> LedgerStore<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Restores the persisted snapshot. Stored values that would violate the
    /// ledger invariants are normalised: without a positive limit the state
    /// is empty.
    pub fn load(&self) -> Snapshot {
        let theme_index = self.store.get_i64(KEY_THEME, 0);
        let initial_limit = self.store.get_f64(KEY_INITIAL_LIMIT, 0.0);
        if !(initial_limit.is_finite() && initial_limit > 0.0) {
            return Snapshot {
                state: LedgerState::empty(),
                theme_index,
            };
        }

        let balance = self.store.get_f64(KEY_BALANCE, 0.0).max(0.0);
        let started_millis = self.store.get_i64(KEY_LIMIT_START_DATE, 0);
        let limit_started_at = if started_millis > 0 {
            Utc.timestamp_millis_opt(started_millis).single()
        } else {
            None
        };
        let transactions = self
            .store
            .get_string(KEY_TRANSACTIONS)
            .map(|data| decode_transactions(&data))
            .unwrap_or_default();

        tracing::debug!(
            balance,
            initial_limit,
            transactions = transactions.len(),
            "ledger state loaded"
        );
        Snapshot {
            state: LedgerState {
                balance,
                initial_limit,
                limit_started_at,
                transactions,
            },
            theme_index,
        }
    }

    /// Writes every ledger key and flushes.
    pub fn save(&mut self, state: &LedgerState) -> Result<()> {
        self.store.set_f64(KEY_BALANCE, state.balance);
        self.store.set_f64(KEY_INITIAL_LIMIT, state.initial_limit);
        let started = state
            .limit_started_at
            .map(|at| at.timestamp_millis())
            .unwrap_or(0);
        self.store.set_i64(KEY_LIMIT_START_DATE, started);
        self.store
            .set_string(KEY_TRANSACTIONS, &encode_transactions(&state.transactions));
        self.store.flush()
    }

    pub fn save_theme(&mut self, index: i64) -> Result<()> {
        self.store.set_i64(KEY_THEME, index);
        self.store.flush()
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}
