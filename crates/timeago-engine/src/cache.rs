//! Memoizing lookup for per-locale derived data

use std::collections::HashMap;
use std::hash::Hash;
use std::sync::{Arc, Mutex, PoisonError};

/// Read-through cache without eviction.
///
/// Each entry remembers the registry generation it was built under and is
/// rebuilt once the generation moves on.
#[derive(Debug)]
pub struct Memo<K, V> {
    entries: Mutex<HashMap<K, (u64, Arc<V>)>>,
}

impl<K, V> Default for Memo<K, V> {
    fn default() -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
        }
    }
}

impl<K: Hash + Eq, V> Memo<K, V> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cached value for `key`, built with `build` when missing or stale
    pub fn get_or_insert_with<F>(&self, key: K, generation: u64, build: F) -> Arc<V>
    where
        F: FnOnce() -> V,
    {
        let mut entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some((built, value)) = entries.get(&key) {
            if *built == generation {
                return Arc::clone(value);
            }
        }
        let value = Arc::new(build());
        entries.insert(key, (generation, Arc::clone(&value)));
        value
    }

    pub fn len(&self) -> usize {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_builds_once_per_generation() {
        let memo: Memo<&str, usize> = Memo::new();
        let builds = Cell::new(0);
        let build = || {
            builds.set(builds.get() + 1);
            builds.get()
        };

        assert_eq!(*memo.get_or_insert_with("en", 1, build), 1);
        assert_eq!(*memo.get_or_insert_with("en", 1, build), 1);
        assert_eq!(*memo.get_or_insert_with("en", 2, build), 2);
        assert_eq!(memo.len(), 1);
        assert_eq!(builds.get(), 2);
    }
}
