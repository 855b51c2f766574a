//! Key-value persistence for ledger state.
//!
//! The ledger itself never touches storage; callers hand the state to
//! [`LedgerStore`] after each transition.

pub mod codec;
pub mod json_backend;
pub mod ledger_store;
pub mod memory;

use serde_json::Value;

use crate::errors::Result;

pub const KEY_BALANCE: &str = "balance";
pub const KEY_INITIAL_LIMIT: &str = "initial_limit";
pub const KEY_LIMIT_START_DATE: &str = "limit_start_date";
pub const KEY_THEME: &str = "theme";
pub const KEY_TRANSACTIONS: &str = "transactions";

/// A flat store of string and number preferences.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<&Value>;
    fn set(&mut self, key: &str, value: Value);
    fn remove(&mut self, key: &str);

    /// Persists pending writes. In-memory stores have nothing to do.
    fn flush(&mut self) -> Result<()> {
        Ok(())
    }

    fn get_f64(&self, key: &str, default: f64) -> f64 {
        self.get(key).and_then(Value::as_f64).unwrap_or(default)
    }

    fn get_i64(&self, key: &str, default: i64) -> i64 {
        self.get(key).and_then(Value::as_i64).unwrap_or(default)
    }

    fn get_string(&self, key: &str) -> Option<String> {
        self.get(key).and_then(Value::as_str).map(str::to_string)
    }

    fn set_f64(&mut self, key: &str, value: f64) {
        match serde_json::Number::from_f64(value) {
            Some(number) => self.set(key, Value::Number(number)),
            None => self.remove(key),
        }
    }

    fn set_i64(&mut self, key: &str, value: i64) {
        self.set(key, Value::from(value));
    }

    fn set_string(&mut self, key: &str, value: &str) {
        self.set(key, Value::String(value.to_string()));
    }
}

pub use codec::{decode_transactions, encode_transactions};
pub use json_backend::JsonFileStore;
pub use ledger_store::{LedgerStore, Snapshot};
pub use memory::MemoryStore;
