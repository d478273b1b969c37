//! # txkv
//!
//! An in-memory key-value store with single-transaction semantics:
//! - Writes are staged inside an explicit transaction
//! - Commit applies all staged writes at once, rollback discards them
//! - Reads overlay staged writes on committed state
//! - At most one transaction is open at a time
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │              Shell / Demo (txkv binary)                      │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │ text protocol
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │             Store (optionally behind SharedStore)            │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//!          ┌────────────┴────────────┐
//!          │                         │
//!          ▼                         ▼
//!   ┌─────────────┐          ┌─────────────┐
//!   │   Staging   │──commit─▶│  Committed  │
//!   │ (open txn)  │          │    (map)    │
//!   └─────────────┘          └─────────────┘
//! ```
//!
//! ## Example
//!
//! ```
//! use txkv::Store;
//!
//! let mut store: Store<&str, i32> = Store::new();
//! store.begin_transaction().unwrap();
//! store.put("A", 5).unwrap();
//! store.commit().unwrap();
//! assert_eq!(store.get("A"), Some(&5));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod store;
pub mod shared;
pub mod protocol;
pub mod shell;
pub mod demo;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{TxError, Result};
pub use config::StoreConfig;
pub use store::{Store, TransactionState};
pub use shared::SharedStore;

// =============================================================================
// Version Info
// =============================================================================

/// Current version of txkv
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
