//! In-memory document cache for GraphQL results.

use std::collections::{HashMap, HashSet};
use std::sync::{Mutex, PoisonError};
use std::time::Instant;

/// Number of results kept when no capacity is configured.
pub const DEFAULT_CACHE_CAPACITY: usize = 256;

/// A cached operation result.
#[derive(Clone, Debug)]
pub struct CachedResult {
    /// The cached `data` member.
    pub data: Option<serde_json::Value>,
    /// When the entry was written.
    pub stored_at: Instant,
}

/// Operation results keyed by [`GraphqlRequest::cache_key`](super::GraphqlRequest::cache_key).
///
/// Locks are held only for map operations, never across an await point.
/// The cache also tracks keys with a background refresh in flight so that
/// concurrent stale reads trigger at most one refresh per key.
///
/// The cache holds at most `capacity` entries. Inserting a new key into a
/// full cache evicts the entry with the oldest `stored_at`.
#[derive(Debug)]
pub struct DocumentCache {
    entries: Mutex<HashMap<String, CachedResult>>,
    refreshing: Mutex<HashSet<String>>,
    capacity: usize,
}

impl Default for DocumentCache {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_CACHE_CAPACITY)
    }
}

impl DocumentCache {
    /// Creates an empty cache holding up to [`DEFAULT_CACHE_CAPACITY`] entries.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty cache holding up to `capacity` entries (at least one).
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
            refreshing: Mutex::new(HashSet::new()),
            capacity: capacity.max(1),
        }
    }

    /// Returns the maximum number of entries.
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns the entry for `key`, if any.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<CachedResult> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .cloned()
    }

    /// Stores `data` under `key`, replacing any previous entry.
    ///
    /// When `key` is new and the cache is full, the oldest entry is evicted.
    pub fn insert(&self, key: impl Into<String>, data: Option<serde_json::Value>) {
        let key = key.into();
        let mut entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);

        if !entries.contains_key(&key) && entries.len() >= self.capacity {
            let oldest = entries
                .iter()
                .min_by_key(|(_, entry)| entry.stored_at)
                .map(|(k, _)| k.clone());
            if let Some(oldest) = oldest {
                entries.remove(&oldest);
                tracing::debug!(
                    capacity = self.capacity,
                    "GraphQL cache full, evicted oldest entry"
                );
            }
        }

        entries.insert(
            key,
            CachedResult {
                data,
                stored_at: Instant::now(),
            },
        );
    }

    /// Removes every entry.
    pub fn clear(&self) {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }

    /// Returns the number of cached entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Returns `true` if nothing is cached.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Marks `key` as refreshing.
    ///
    /// Returns `false` if a refresh for `key` is already in flight.
    pub fn begin_refresh(&self, key: &str) -> bool {
        self.refreshing
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.to_string())
    }

    /// Clears the refreshing mark for `key`.
    pub fn end_refresh(&self, key: &str) {
        self.refreshing
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_insert_replaces_entry() {
        let cache = DocumentCache::new();
        cache.insert("k", Some(json!({"v": 1})));
        cache.insert("k", Some(json!({"v": 2})));

        assert_eq!(cache.len(), 1);
        assert_eq!(cache.get("k").unwrap().data, Some(json!({"v": 2})));
    }

    #[test]
    fn test_clear_empties_cache() {
        let cache = DocumentCache::new();
        cache.insert("a", None);
        cache.insert("b", None);
        assert!(!cache.is_empty());

        cache.clear();
        assert!(cache.is_empty());
        assert!(cache.get("a").is_none());
    }

    #[test]
    fn test_capacity_bounds_entries() {
        let cache = DocumentCache::with_capacity(3);
        for i in 0..50 {
            cache.insert(format!("k{i}"), Some(json!(i)));
        }

        assert_eq!(cache.len(), 3);
        assert!(cache.get("k0").is_none());
        assert_eq!(cache.get("k49").unwrap().data, Some(json!(49)));
    }

    #[test]
    fn test_full_cache_evicts_oldest_entry() {
        let cache = DocumentCache::with_capacity(2);
        cache.insert("a", Some(json!(1)));
        std::thread::sleep(std::time::Duration::from_millis(2));
        cache.insert("b", Some(json!(2)));
        std::thread::sleep(std::time::Duration::from_millis(2));

        // Replacing an existing key never evicts
        cache.insert("a", Some(json!(3)));
        assert_eq!(cache.len(), 2);
        std::thread::sleep(std::time::Duration::from_millis(2));

        cache.insert("c", Some(json!(4)));
        assert_eq!(cache.len(), 2);
        assert!(cache.get("b").is_none());
        assert_eq!(cache.get("a").unwrap().data, Some(json!(3)));
        assert!(cache.get("c").is_some());
    }

    #[test]
    fn test_zero_capacity_keeps_one_entry() {
        let cache = DocumentCache::with_capacity(0);
        cache.insert("a", None);
        cache.insert("b", None);

        assert_eq!(cache.capacity(), 1);
        assert_eq!(cache.len(), 1);
        assert!(cache.get("b").is_some());
    }

    #[test]
    fn test_refresh_marks_are_exclusive() {
        let cache = DocumentCache::new();

        assert!(cache.begin_refresh("k"));
        assert!(!cache.begin_refresh("k"));
        assert!(cache.begin_refresh("other"));

        cache.end_refresh("k");
        assert!(cache.begin_refresh("k"));
    }
}
