//! Error types for txkv
//!
//! Provides a unified error type for all operations.

use thiserror::Error;

/// Result type alias using TxError
pub type Result<T> = std::result::Result<T, TxError>;

/// Unified error type for txkv operations
#[derive(Debug, Error)]
pub enum TxError {
    // -------------------------------------------------------------------------
    // Transaction Lifecycle Errors
    // -------------------------------------------------------------------------
    #[error("A transaction is already in progress")]
    TransactionAlreadyInProgress,

    #[error("No transaction in progress")]
    NoTransactionInProgress,

    #[error("No transaction to commit")]
    NoTransactionToCommit,

    #[error("No transaction to rollback")]
    NoTransactionToRollback,

    // -------------------------------------------------------------------------
    // Protocol Errors
    // -------------------------------------------------------------------------
    #[error("Protocol error: {0}")]
    Protocol(String),

    // -------------------------------------------------------------------------
    // I/O Errors
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl TxError {
    /// True for the four illegal-state-transition errors
    pub fn is_state_error(&self) -> bool {
        matches!(
            self,
            TxError::TransactionAlreadyInProgress
                | TxError::NoTransactionInProgress
                | TxError::NoTransactionToCommit
                | TxError::NoTransactionToRollback
        )
    }
}
