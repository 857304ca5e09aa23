//! A single-entry (last-arguments / last-result) memoization cell.

use std::sync::Arc;

use crate::Catalog;

/// Remembers the most recent key and the value computed for it.
///
/// Asking again with an equal key returns a clone of the cached value without
/// running the computation; any other key replaces the entry.
#[derive(Debug)]
pub struct Memo<K, V> {
    last: Option<(K, V)>,
    computations: u64,
}

impl<K: PartialEq, V: Clone> Memo<K, V> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            last: None,
            computations: 0,
        }
    }

    pub fn get_or_compute<F>(&mut self, key: K, compute: F) -> V
    where
        F: FnOnce(&K) -> V,
    {
        if let Some((last_key, last_value)) = &self.last {
            if *last_key == key {
                return last_value.clone();
            }
        }
        let value = compute(&key);
        self.computations += 1;
        self.last = Some((key, value.clone()));
        value
    }

    /// How many times the computation has actually run.
    #[must_use]
    pub fn computations(&self) -> u64 {
        self.computations
    }

    pub fn clear(&mut self) {
        self.last = None;
    }
}

impl<K: PartialEq, V: Clone> Default for Memo<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

/// Identity key for a catalog snapshot: two keys are equal when they point at
/// the same allocation (or are both "not loaded"), not when their contents
/// happen to match.
#[derive(Debug, Clone)]
pub struct SnapshotKey(pub Option<Catalog>);

impl PartialEq for SnapshotKey {
    fn eq(&self, other: &Self) -> bool {
        match (&self.0, &other.0) {
            (Some(a), Some(b)) => Arc::ptr_eq(a, b),
            (None, None) => true,
            _ => false,
        }
    }
}
