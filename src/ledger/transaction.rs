use chrono::{DateTime, SubsecRound, Utc};
use serde::{Deserialize, Serialize};

/// A single recorded spend. Two transactions are the same record when both
/// the amount and the timestamp match.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub amount: f64,
    pub timestamp: DateTime<Utc>,
}

impl Transaction {
    /// Creates a transaction, truncating the timestamp to millisecond
    /// precision so it survives the persisted epoch-millis encoding unchanged.
    pub fn new(amount: f64, timestamp: DateTime<Utc>) -> Self {
        Self {
            amount,
            timestamp: timestamp.trunc_subsecs(3),
        }
    }

    pub fn timestamp_millis(&self) -> i64 {
        self.timestamp.timestamp_millis()
    }
}
