use super::{Table, TabularStore};
use crate::common::error::Result;
use async_trait::async_trait;
use std::collections::HashMap;
use std::time::{Duration, Instant};
use tokio::sync::Mutex;
use tracing::debug;

/// Wraps a store and reuses each query's result for a fixed time window.
///
/// Entries are keyed by the exact query text. Failed queries are never
/// cached, so the next call after an error goes back to the inner store.
pub struct CachedStore<S: TabularStore> {
    inner: S,
    ttl: Duration,
    entries: Mutex<HashMap<String, (Instant, Table)>>,
}

impl<S: TabularStore> CachedStore<S> {
    pub fn new(inner: S, ttl: Duration) -> Self {
        Self {
            inner,
            ttl,
            entries: Mutex::new(HashMap::new()),
        }
    }

    pub fn inner(&self) -> &S {
        &self.inner
    }

    pub async fn clear(&self) {
        self.entries.lock().await.clear();
    }
}

#[async_trait]
impl<S: TabularStore> TabularStore for CachedStore<S> {
    async fn query(&self, sql: &str) -> Result<Table> {
        if let Some((stored_at, table)) = self.entries.lock().await.get(sql) {
            if stored_at.elapsed() < self.ttl {
                debug!("Cache hit ({} rows)", table.len());
                return Ok(table.clone());
            }
        }

        // Not locked while the inner store runs; concurrent misses on one key may both query
        let table = self.inner.query(sql).await?;
        self.entries
            .lock()
            .await
            .insert(sql.to_string(), (Instant::now(), table.clone()));
        Ok(table)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::InMemoryStore;
    use tokio::sync::Notify;

    /// Holds `"SLOW"` until released; answers anything else at once
    struct GatedStore {
        release: Notify,
    }

    #[async_trait]
    impl TabularStore for GatedStore {
        async fn query(&self, sql: &str) -> Result<Table> {
            if sql == "SLOW" {
                self.release.notified().await;
            }
            Ok(table())
        }
    }

    fn table() -> Table {
        let mut table = Table::new(vec!["NAME".to_string()]);
        table.push_row(vec![Some("Chhau".to_string())]);
        table
    }

    #[tokio::test]
    async fn test_repeated_query_within_window_hits_cache() {
        let store = InMemoryStore::new();
        store.insert("Q", table());
        let cached = CachedStore::new(store, Duration::from_secs(3600));

        assert_eq!(cached.query("Q").await.unwrap(), table());
        assert_eq!(cached.query("Q").await.unwrap(), table());
        assert_eq!(cached.inner().query_count(), 1);
    }

    #[tokio::test]
    async fn test_expired_entry_requeries() {
        let store = InMemoryStore::new();
        store.insert("Q", table());
        let cached = CachedStore::new(store, Duration::ZERO);

        cached.query("Q").await.unwrap();
        cached.query("Q").await.unwrap();
        assert_eq!(cached.inner().query_count(), 2);
    }

    #[tokio::test]
    async fn test_failures_are_not_cached() {
        let store = InMemoryStore::new();
        store.insert_failure("Q", "timeout");
        let cached = CachedStore::new(store, Duration::from_secs(3600));

        assert!(cached.query("Q").await.is_err());
        cached.inner().insert("Q", table());
        assert_eq!(cached.query("Q").await.unwrap(), table());
        assert_eq!(cached.inner().query_count(), 2);
    }

    #[tokio::test]
    async fn test_entries_are_keyed_by_query() {
        let store = InMemoryStore::new();
        store.insert("A", table());
        store.insert("B", Table::new(vec!["OTHER".to_string()]));
        let cached = CachedStore::new(store, Duration::from_secs(3600));

        assert_eq!(cached.query("A").await.unwrap().len(), 1);
        assert!(cached.query("B").await.unwrap().is_empty());

        cached.clear().await;
        cached.query("A").await.unwrap();
        assert_eq!(cached.inner().query_count(), 3);
    }

    #[tokio::test]
    async fn test_slow_miss_does_not_block_other_queries() {
        let cached = CachedStore::new(
            GatedStore {
                release: Notify::new(),
            },
            Duration::from_secs(3600),
        );

        let slow = cached.query("SLOW");
        let fast = async {
            let table = cached.query("FAST").await;
            cached.inner().release.notify_one();
            table
        };

        let (slow, fast) = tokio::time::timeout(Duration::from_secs(5), async { tokio::join!(slow, fast) })
            .await
            .expect("a pending miss held the cache lock");
        assert_eq!(slow.unwrap(), table());
        assert_eq!(fast.unwrap(), table());
    }
}
