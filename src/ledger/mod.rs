//! Balance ledger: spending-limit state, spends, undo and reset.

pub mod balance;
pub mod clock;
pub mod state;
pub mod transaction;

pub use balance::{BalanceLedger, SpendOutcome};
pub use clock::{Clock, FixedClock, SystemClock};
pub use state::{BudgetStatus, HistoryEntry, LedgerMode, LedgerState};
pub use transaction::Transaction;
