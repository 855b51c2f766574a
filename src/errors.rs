use thiserror::Error;

/// Error type that captures ledger and persistence failures.
#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("Invalid amount: {0} (must be greater than 0)")]
    InvalidAmount(f64),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("Storage error: {0}")]
    Storage(String),
}

pub type Result<T> = std::result::Result<T, LedgerError>;
