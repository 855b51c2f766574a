#![doc(test(attr(deny(warnings))))]

//! 1Left: a single spending limit, the spends recorded against it, and what is
//! left. The [`ledger`] module holds the pure state transitions; [`storage`]
//! persists them as flat key-value preferences; [`cli`] is a terminal front
//! end that drives both.

pub mod cli;
pub mod config;
pub mod currency;
pub mod errors;
pub mod ledger;
pub mod storage;
pub mod theme;
pub mod utils;

pub use errors::{LedgerError, Result};
pub use ledger::{BalanceLedger, LedgerState, SpendOutcome, Transaction};

/// Initializes global tracing. Repeated calls are no-ops.
pub fn init() {
    utils::init_tracing();
}
