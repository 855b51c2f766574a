//! Terminal front end: a line-oriented shell over the balance ledger.

pub mod commands;
pub mod core;
pub mod help;
pub mod output;
pub mod registry;
pub mod shell;
pub mod shell_context;

pub use shell::run_cli;
