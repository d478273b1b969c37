//! Store implementation
//!
//! HashMap-backed committed state with a single staging area on top.

use std::borrow::Borrow;
use std::collections::HashMap;
use std::hash::Hash;

use super::{StagingArea, TransactionState};
use crate::config::StoreConfig;
use crate::error::{Result, TxError};
use crate::protocol::{Command, Response};

/// In-memory key-value store with single-transaction semantics
///
/// ## Read Resolution
/// `get` consults the staging area first, then the committed map. When no
/// transaction is open the staging area is always empty, so reads fall
/// straight through to committed state.
///
/// ## Ownership
/// Reads hand out shared borrows (`Option<&V>`), so nothing outside the
/// store can mutate committed or staged values. Use [`Store::get_cloned`]
/// for an owned copy.
///
/// ## Concurrency
/// Mutating operations take `&mut self`; there is no internal locking.
/// Wrap the store in [`crate::SharedStore`] to share it across threads.
#[derive(Debug)]
pub struct Store<K, V> {
    /// Store configuration
    config: StoreConfig,

    /// Durable state as of the last commit
    committed: HashMap<K, V>,

    /// Writes of the open transaction (empty while idle)
    staging: StagingArea<K, V>,

    /// Lifecycle state
    state: TransactionState,
}

impl<K: Eq + Hash, V> Store<K, V> {
    /// Create an empty store with the default config
    pub fn new() -> Self {
        Self::with_config(StoreConfig::default())
    }

    /// Create an empty store with the given config
    pub fn with_config(config: StoreConfig) -> Self {
        Self {
            committed: HashMap::with_capacity(config.initial_capacity),
            staging: StagingArea::new(),
            state: TransactionState::Idle,
            config,
        }
    }

    /// Open a transaction
    ///
    /// Fails with `TransactionAlreadyInProgress` if one is already open.
    pub fn begin_transaction(&mut self) -> Result<()> {
        if self.state.is_active() {
            tracing::warn!(store = %self.config.name, "begin rejected: transaction already open");
            return Err(TxError::TransactionAlreadyInProgress);
        }

        self.staging.reset(self.config.staging_capacity);
        self.state = TransactionState::InTransaction;

        tracing::debug!(store = %self.config.name, "transaction started");
        Ok(())
    }

    /// Stage a write in the open transaction
    ///
    /// The value stays invisible to committed state until `commit`.
    /// Fails with `NoTransactionInProgress` while idle.
    pub fn put(&mut self, key: K, value: V) -> Result<()> {
        if !self.state.is_active() {
            tracing::warn!(store = %self.config.name, "put rejected: no transaction open");
            return Err(TxError::NoTransactionInProgress);
        }

        let overwritten = self.staging.stage(key, value);

        tracing::trace!(
            store = %self.config.name,
            overwritten,
            staged = self.staging.len(),
            "write staged"
        );
        Ok(())
    }

    /// Get a value by key
    ///
    /// Search order:
    /// 1. Staging area (writes of the open transaction)
    /// 2. Committed map
    ///
    /// Absence is `None`, never an error.
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.staging.get(key).or_else(|| self.committed.get(key))
    }

    /// Get a value as seen by a reader outside the open transaction
    pub fn get_committed<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.committed.get(key)
    }

    /// True if `get` would return a value for this key
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.get(key).is_some()
    }

    /// Apply every staged write to the committed map and close the transaction
    ///
    /// Fails with `NoTransactionToCommit` while idle.
    pub fn commit(&mut self) -> Result<()> {
        if !self.state.is_active() {
            tracing::warn!(store = %self.config.name, "commit rejected: no transaction open");
            return Err(TxError::NoTransactionToCommit);
        }

        let applied = self.staging.len();
        self.staging.merge_into(&mut self.committed);
        self.state = TransactionState::Idle;

        tracing::debug!(
            store = %self.config.name,
            applied,
            committed = self.committed.len(),
            "transaction committed"
        );
        Ok(())
    }

    /// Discard every staged write and close the transaction
    ///
    /// Fails with `NoTransactionToRollback` while idle.
    pub fn rollback(&mut self) -> Result<()> {
        if !self.state.is_active() {
            tracing::warn!(store = %self.config.name, "rollback rejected: no transaction open");
            return Err(TxError::NoTransactionToRollback);
        }

        let discarded = self.staging.len();
        self.staging.reset(0);
        self.state = TransactionState::Idle;

        tracing::debug!(store = %self.config.name, discarded, "transaction rolled back");
        Ok(())
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn state(&self) -> TransactionState {
        self.state
    }

    pub fn is_transaction_active(&self) -> bool {
        self.state.is_active()
    }

    /// Number of committed keys
    pub fn len(&self) -> usize {
        self.committed.len()
    }

    /// True if nothing has been committed
    pub fn is_empty(&self) -> bool {
        self.committed.is_empty()
    }

    /// Number of distinct keys written in the open transaction
    pub fn staged_len(&self) -> usize {
        self.staging.len()
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }
}

impl<K: Eq + Hash, V: Clone> Store<K, V> {
    /// Get an owned copy of a value (same resolution as `get`)
    pub fn get_cloned<Q>(&self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.get(key).cloned()
    }
}

impl Store<String, String> {
    /// Execute a protocol command
    ///
    /// Routes commands to the matching store operation.
    pub fn execute(&mut self, command: Command) -> Result<Response> {
        match command {
            Command::Begin => self.begin_transaction().map(|_| Response::Ok),
            Command::Put { key, value } => self.put(key, value).map(|_| Response::Ok),
            Command::Get { key } => Ok(Response::Value(self.get_cloned(&key))),
            Command::Commit => self.commit().map(|_| Response::Ok),
            Command::Rollback => self.rollback().map(|_| Response::Ok),
            Command::Status => Ok(Response::State(self.state)),
        }
    }
}

impl<K: Eq + Hash, V> Default for Store<K, V> {
    fn default() -> Self {
        Self::new()
    }
}
