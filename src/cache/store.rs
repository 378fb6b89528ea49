// In-memory cache store with TTL expiration.
// Entries past their TTL read as absent; overwrites replace wholesale.

use std::collections::HashMap;
use std::sync::RwLock;
use std::time::Duration;

use chrono::{DateTime, Utc};

use crate::hackernews::Story;

/// TTL-expiring key-value store for story lists.
///
/// Implementations must be safe for concurrent use; callers never lock
/// around them. Concurrent writers to the same key race benignly (last
/// write wins).
pub trait StoryCache: Send + Sync {
    /// Look up a key. Absent or expired entries return `None`.
    fn get(&self, key: &str) -> Option<Vec<Story>>;

    /// Store a value under a key, replacing any previous entry.
    fn set(&self, key: &str, value: Vec<Story>, ttl: Duration);
}

/// A cached value with its write time and TTL.
#[derive(Debug, Clone)]
struct CacheEntry {
    value: Vec<Story>,
    cached_at: DateTime<Utc>,
    ttl: Duration,
}

impl CacheEntry {
    fn new(value: Vec<Story>, ttl: Duration) -> Self {
        Self {
            value,
            cached_at: Utc::now(),
            ttl,
        }
    }

    /// Check whether this entry has outlived its TTL.
    fn is_expired(&self) -> bool {
        let elapsed = Utc::now()
            .signed_duration_since(self.cached_at)
            .to_std()
            .unwrap_or(Duration::MAX);

        elapsed > self.ttl
    }
}

/// Process-local `StoryCache` backed by a `HashMap`.
#[derive(Default)]
pub struct MemoryCache {
    entries: RwLock<HashMap<String, CacheEntry>>,
}

impl MemoryCache {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StoryCache for MemoryCache {
    fn get(&self, key: &str) -> Option<Vec<Story>> {
        let entries = self.entries.read().unwrap_or_else(|e| e.into_inner());
        match entries.get(key) {
            Some(entry) if !entry.is_expired() => Some(entry.value.clone()),
            _ => None,
        }
    }

    fn set(&self, key: &str, value: Vec<Story>, ttl: Duration) {
        let mut entries = self.entries.write().unwrap_or_else(|e| e.into_inner());
        entries.insert(key.to_string(), CacheEntry::new(value, ttl));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn story(id: u64, title: &str) -> Story {
        Story {
            id,
            title: title.to_string(),
            url: None,
        }
    }

    #[test]
    fn test_set_and_get() {
        let cache = MemoryCache::new();
        let stories = vec![story(1, "one"), story(2, "two")];

        cache.set("newest", stories.clone(), Duration::from_secs(600));

        assert_eq!(cache.get("newest"), Some(stories));
    }

    #[test]
    fn test_get_missing_key() {
        let cache = MemoryCache::new();

        assert_eq!(cache.get("newest"), None);
    }

    #[test]
    fn test_expired_entry_reads_as_absent() {
        let cache = MemoryCache::new();
        cache.set("newest", vec![story(1, "one")], Duration::from_secs(600));

        // Backdate the entry past its TTL.
        {
            let mut entries = cache.entries.write().unwrap();
            let entry = entries.get_mut("newest").unwrap();
            entry.cached_at = Utc::now() - chrono::Duration::seconds(601);
        }

        assert_eq!(cache.get("newest"), None);
    }

    #[test]
    fn test_set_overwrites_wholesale() {
        let cache = MemoryCache::new();
        cache.set("newest", vec![story(1, "one")], Duration::from_secs(600));
        cache.set("newest", vec![story(2, "two")], Duration::from_secs(600));

        assert_eq!(cache.get("newest"), Some(vec![story(2, "two")]));
    }

    #[test]
    fn test_zero_ttl_expires_immediately() {
        let cache = MemoryCache::new();
        cache.set("newest", vec![story(1, "one")], Duration::ZERO);

        std::thread::sleep(Duration::from_millis(5));
        assert_eq!(cache.get("newest"), None);
    }
}
