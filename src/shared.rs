//! Shared store handle
//!
//! Thread-safe wrapper around a [`Store`].
//!
//! The store itself assumes one logical caller. Here one mutex guards the
//! whole store, so a begin/put/commit sequence run under a single guard is
//! never interleaved with another thread's calls.

use std::borrow::Borrow;
use std::hash::Hash;
use std::sync::Arc;

use parking_lot::{Mutex, MutexGuard};

use crate::config::StoreConfig;
use crate::error::Result;
use crate::store::Store;

/// Clonable, thread-safe handle to a store
pub struct SharedStore<K, V> {
    inner: Arc<Mutex<Store<K, V>>>,
}

impl<K: Eq + Hash, V> SharedStore<K, V> {
    /// Wrap an existing store
    pub fn new(store: Store<K, V>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(store)),
        }
    }

    /// Create a shared store with the given config
    pub fn with_config(config: StoreConfig) -> Self {
        Self::new(Store::with_config(config))
    }

    /// Lock the store for a sequence of calls
    pub fn lock(&self) -> MutexGuard<'_, Store<K, V>> {
        self.inner.lock()
    }

    /// Run `f` inside a transaction, holding the lock throughout
    ///
    /// Commits if `f` returns `Ok`; otherwise rolls back and returns the
    /// error from `f`. If `f` closes the transaction itself, that outcome
    /// stands. If `f` panics, staged writes are rolled back while unwinding.
    pub fn transaction<T, F>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&mut Store<K, V>) -> Result<T>,
    {
        let mut store = self.inner.lock();
        store.begin_transaction()?;

        let mut open = RollbackOnDrop { store };

        match f(&mut *open.store) {
            Ok(value) => {
                if open.store.is_transaction_active() {
                    open.store.commit()?;
                }
                Ok(value)
            }
            Err(e) => {
                tracing::debug!(error = %e, "transaction body failed, rolling back");
                if open.store.is_transaction_active() {
                    open.store.rollback()?;
                }
                Err(e)
            }
        }
    }

    pub fn is_transaction_active(&self) -> bool {
        self.inner.lock().is_transaction_active()
    }
}

impl<K: Eq + Hash, V: Clone> SharedStore<K, V> {
    /// Read a value (staged first), returning an owned copy
    pub fn get_cloned<Q>(&self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.inner.lock().get_cloned(key)
    }

    /// Read a committed value, ignoring any open transaction
    pub fn get_committed_cloned<Q>(&self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.inner.lock().get_committed(key).cloned()
    }
}

/// Rolls back a transaction still open when dropped (e.g. on panic)
struct RollbackOnDrop<'a, K: Eq + Hash, V> {
    store: MutexGuard<'a, Store<K, V>>,
}

impl<K: Eq + Hash, V> Drop for RollbackOnDrop<'_, K, V> {
    fn drop(&mut self) {
        if self.store.is_transaction_active() {
            tracing::warn!("transaction abandoned, rolling back");
            let _ = self.store.rollback();
        }
    }
}

impl<K, V> Clone for SharedStore<K, V> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<K: Eq + Hash, V> Default for SharedStore<K, V> {
    fn default() -> Self {
        Self::new(Store::new())
    }
}
