//! Staging area
//!
//! Holds the uncommitted writes of the open transaction.

use std::borrow::Borrow;
use std::collections::HashMap;
use std::hash::Hash;

/// Writes accumulated during the current transaction
#[derive(Debug)]
pub struct StagingArea<K, V> {
    writes: HashMap<K, V>,
}

impl<K: Eq + Hash, V> StagingArea<K, V> {
    /// Create an empty staging area
    pub fn new() -> Self {
        Self {
            writes: HashMap::new(),
        }
    }

    /// Drop every staged write and reserve room for the next transaction
    pub fn reset(&mut self, capacity: usize) {
        self.writes.clear();
        self.writes.reserve(capacity);
    }

    /// Stage a write, replacing any earlier write to the same key
    ///
    /// Returns true if the key was already staged.
    pub fn stage(&mut self, key: K, value: V) -> bool {
        self.writes.insert(key, value).is_some()
    }

    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.writes.get(key)
    }

    /// Move every staged write into `target`, staged values winning on collision
    ///
    /// Leaves the staging area empty.
    pub fn merge_into(&mut self, target: &mut HashMap<K, V>) {
        target.reserve(self.writes.len());
        target.extend(self.writes.drain());
    }

    pub fn len(&self) -> usize {
        self.writes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.writes.is_empty()
    }
}

impl<K: Eq + Hash, V> Default for StagingArea<K, V> {
    fn default() -> Self {
        Self::new()
    }
}
