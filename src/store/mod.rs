//! Store Module
//!
//! The transactional key-value store.
//!
//! ## Responsibilities
//! - Hold committed state for the lifetime of the store
//! - Stage writes of the single open transaction in isolation
//! - Overlay staged writes on committed state for reads
//! - Reject lifecycle calls made from the wrong state
//!
//! ## State Machine
//! ```text
//!            begin_transaction
//!   ┌──────┐ ─────────────────▶ ┌───────────────┐
//!   │ Idle │                    │ InTransaction │ ◀─┐ put
//!   └──────┘ ◀───────────────── └───────────────┘ ──┘
//!            commit / rollback
//! ```
//!
//! Only one transaction may be open at a time. Nesting and concurrent
//! transactions are deliberately unsupported: there is a single staging
//! area and no conflict detection between writers.

mod kv_store;
mod staging;

pub use kv_store::Store;
pub use staging::StagingArea;

use std::fmt;

/// Lifecycle state of a store
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TransactionState {
    /// No transaction open; staging is empty
    #[default]
    Idle,

    /// A transaction is open and accepting writes
    InTransaction,
}

impl TransactionState {
    pub fn is_active(self) -> bool {
        self == TransactionState::InTransaction
    }
}

impl fmt::Display for TransactionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransactionState::Idle => f.write_str("IDLE"),
            TransactionState::InTransaction => f.write_str("IN_TRANSACTION"),
        }
    }
}
