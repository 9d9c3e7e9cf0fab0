use thiserror::Error;

#[derive(Error, Debug)]
pub enum LedgerError {
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    #[error("Unknown transaction type: {0}")]
    UnknownTransactionType(String),

    #[error("Storage error: {0}")]
    Storage(#[from] anyhow::Error),
}
