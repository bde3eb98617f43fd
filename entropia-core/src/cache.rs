//! cache.rs - Keyed memoization shared by the corpus and n-gram caches.
//!
//! Each key owns a `OnceCell`, so the first caller for a key computes the
//! value while later callers for the same key block on that cell and reuse
//! the result. The map lock is only held long enough to find or insert the
//! cell; computation happens outside it, and different keys never wait on
//! each other.
//!
//! Entries are never evicted: the cache grows by one entry per distinct key
//! for as long as its owner lives. An analyzer kept alive in a long-running
//! service therefore holds every corpus and table it has ever seen.
//!
//! License: MIT OR APACHE 2.0

use log::debug;
use once_cell::sync::OnceCell;
use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;
use std::sync::{Arc, PoisonError, RwLock};

type Slot<V> = Arc<OnceCell<Arc<V>>>;

/// A thread-safe, unbounded, insert-once cache.
pub struct KeyedCache<K, V> {
    name: &'static str,
    slots: RwLock<HashMap<K, Slot<V>>>,
}

impl<K, V> fmt::Debug for KeyedCache<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyedCache")
            .field("name", &self.name)
            .field("entries", &self.len())
            .finish()
    }
}

impl<K, V> KeyedCache<K, V> {
    /// Creates an empty cache. `name` only shows up in logs.
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            slots: RwLock::new(HashMap::new()),
        }
    }

    /// Number of populated entries. Keys whose computation failed are not counted.
    pub fn len(&self) -> usize {
        let slots = self.slots.read().unwrap_or_else(PoisonError::into_inner);
        slots.values().filter(|slot| slot.get().is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<K, V> KeyedCache<K, V>
where
    K: Eq + Hash + Clone + fmt::Debug,
{
    /// Returns the cached value for `key`, if one has been computed.
    pub fn get(&self, key: &K) -> Option<Arc<V>> {
        let slots = self.slots.read().unwrap_or_else(PoisonError::into_inner);
        slots.get(key).and_then(|slot| slot.get()).map(Arc::clone)
    }

    pub fn contains(&self, key: &K) -> bool {
        self.get(key).is_some()
    }

    /// Returns the cached value for `key`, computing it with `init` on first use.
    ///
    /// A failed `init` drops the key's slot and hands the error back, so a
    /// later call retries and failed keys do not accumulate.
    pub fn get_or_try_insert_with<E, F>(&self, key: &K, init: F) -> Result<Arc<V>, E>
    where
        F: FnOnce() -> Result<V, E>,
    {
        if let Some(value) = self.get(key) {
            debug!("{} cache hit for {:?}", self.name, key);
            return Ok(value);
        }

        let slot = {
            let mut slots = self.slots.write().unwrap_or_else(PoisonError::into_inner);
            Arc::clone(slots.entry(key.clone()).or_default())
        };

        let result = slot.get_or_try_init(|| {
            debug!("{} cache miss for {:?}, computing", self.name, key);
            init().map(Arc::new)
        });

        match result {
            Ok(value) => Ok(Arc::clone(value)),
            Err(e) => {
                self.discard_empty_slot(key, &slot);
                Err(e)
            }
        }
    }

    /// Removes `key` if it still maps to `slot` and nobody has filled it since.
    fn discard_empty_slot(&self, key: &K, slot: &Slot<V>) {
        let mut slots = self.slots.write().unwrap_or_else(PoisonError::into_inner);
        let stale = slots
            .get(key)
            .is_some_and(|current| Arc::ptr_eq(current, slot) && current.get().is_none());
        if stale {
            slots.remove(key);
            debug!("{} cache dropped failed entry for {:?}", self.name, key);
        }
    }
}
