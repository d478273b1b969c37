//! Response definitions
//!
//! Represents the successful outcome of a command.

use crate::store::TransactionState;

/// Outcome of a successfully executed command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Response {
    /// Lifecycle call or put accepted
    Ok,

    /// Result of a read; `None` when the key is absent
    Value(Option<String>),

    /// Current transaction state
    State(TransactionState),
}
