//! In-memory cache store.
//!
//! Fast, thread-safe storage suitable for development, testing,
//! and single-process deployments.

use std::time::{Duration, Instant};

use async_trait::async_trait;
use dashmap::DashMap;

use locus_core::error::Result;
use locus_core::traits::CacheStore;

/// A stored value with its absolute expiry.
#[derive(Clone, Debug)]
struct Entry {
    value: Vec<u8>,
    expires_at: Instant,
}

impl Entry {
    fn is_expired(&self) -> bool {
        Instant::now() >= self.expires_at
    }
}

/// In-memory cache store.
///
/// Keys are used verbatim: no trimming, no case folding. `"Boston"` and
/// `"boston"` are different entries. Expired entries read as absent and
/// are dropped lazily on the next access to their key.
///
/// # Thread Safety
///
/// All operations are thread-safe and can be called concurrently.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: DashMap<String, Entry>,
}

impl MemoryStore {
    /// Creates a new empty store.
    pub fn new() -> Self {
        Self {
            entries: DashMap::new(),
        }
    }

    /// Returns the number of entries, including expired ones not yet dropped.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the store holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Clears all entries.
    pub fn clear(&self) {
        self.entries.clear();
    }
}

#[async_trait]
impl CacheStore for MemoryStore {
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>> {
        let value = self.entries.get(key).and_then(|entry| {
            if entry.is_expired() {
                None
            } else {
                Some(entry.value.clone())
            }
        });

        if value.is_none() {
            self.entries.remove_if(key, |_, entry| entry.is_expired());
        }

        Ok(value)
    }

    async fn set(&self, key: &str, value: &[u8], ttl: Duration) -> Result<()> {
        self.entries.insert(
            key.to_string(),
            Entry {
                value: value.to_vec(),
                expires_at: Instant::now() + ttl,
            },
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TTL: Duration = Duration::from_secs(15);

    #[tokio::test]
    async fn test_set_get() {
        let store = MemoryStore::new();
        store.set("boston", b"payload", TTL).await.unwrap();

        let value = store.get("boston").await.unwrap();
        assert_eq!(value.as_deref(), Some(&b"payload"[..]));
    }

    #[tokio::test]
    async fn test_miss_is_none_not_error() {
        let store = MemoryStore::new();
        assert_eq!(store.get("nowhere").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_keys_are_verbatim() {
        let store = MemoryStore::new();
        store.set("Boston", b"upper", TTL).await.unwrap();

        assert!(store.get("boston").await.unwrap().is_none());
        assert!(store.get(" Boston ").await.unwrap().is_none());
        assert!(store.get("Boston").await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_expired_entry_reads_as_absent() {
        let store = MemoryStore::new();
        store
            .set("boston", b"payload", Duration::from_millis(10))
            .await
            .unwrap();

        tokio::time::sleep(Duration::from_millis(30)).await;

        assert_eq!(store.get("boston").await.unwrap(), None);
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn test_read_does_not_extend_ttl() {
        let store = MemoryStore::new();
        store
            .set("boston", b"payload", Duration::from_millis(60))
            .await
            .unwrap();

        tokio::time::sleep(Duration::from_millis(30)).await;
        assert!(store.get("boston").await.unwrap().is_some());

        tokio::time::sleep(Duration::from_millis(50)).await;
        assert_eq!(store.get("boston").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_overwrite_resets_expiry() {
        let store = MemoryStore::new();
        store
            .set("boston", b"old", Duration::from_millis(20))
            .await
            .unwrap();
        store.set("boston", b"new", TTL).await.unwrap();

        tokio::time::sleep(Duration::from_millis(40)).await;

        let value = store.get("boston").await.unwrap();
        assert_eq!(value.as_deref(), Some(&b"new"[..]));
    }

    #[tokio::test]
    async fn test_empty_string_is_a_normal_key() {
        let store = MemoryStore::new();
        store.set("", b"empty query", TTL).await.unwrap();
        assert_eq!(store.get("").await.unwrap().as_deref(), Some(&b"empty query"[..]));
    }
}
