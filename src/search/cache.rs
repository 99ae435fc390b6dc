//! Per-search result cache with in-flight request de-duplication.

use std::collections::HashMap;
use std::future::Future;
use std::sync::{Arc, Mutex, PoisonError};
use std::time::{Duration, Instant};

use tokio::sync::OnceCell;

use crate::error::SearchError;
use crate::issue::NormalizedIssue;

/// A populated cache entry.
struct Entry {
    issues: Arc<Vec<NormalizedIssue>>,
    fetched_at: Instant,
}

/// Caches filtered search results by canonical search key.
///
/// Each key owns a single populate-once slot, so concurrent lookups of the
/// same key share one backend call instead of racing duplicates. The cache
/// exclusively owns the stored lists; callers get shared read-only views.
///
/// Entries live for `ttl`, or for the whole process when `ttl` is `None`
/// (the historical behavior, kept as the default at the call sites).
/// A failed fetch leaves the slot empty, so the next lookup retries.
pub struct SearchCache {
    ttl: Option<Duration>,
    slots: Mutex<HashMap<String, Arc<OnceCell<Entry>>>>,
}

impl SearchCache {
    /// Creates a cache whose entries expire after `ttl`, or never.
    #[must_use]
    pub fn new(ttl: Option<Duration>) -> Self {
        Self { ttl, slots: Mutex::new(HashMap::new()) }
    }

    /// Returns the cached list for `key`, running `fetch` to populate the
    /// entry if it is absent or expired.
    ///
    /// # Errors
    ///
    /// Propagates the error of `fetch` unchanged.
    pub async fn get_or_fetch<F, Fut>(
        &self,
        key: &str,
        fetch: F,
    ) -> Result<Arc<Vec<NormalizedIssue>>, SearchError>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<Vec<NormalizedIssue>, SearchError>>,
    {
        let slot = {
            let mut slots = self.slots.lock().unwrap_or_else(PoisonError::into_inner);
            let expired = slots
                .get(key)
                .and_then(|slot| slot.get())
                .is_some_and(|entry| self.is_expired(entry));
            if expired {
                log::debug!("cache: entry expired for {key}");
                slots.remove(key);
            }
            Arc::clone(slots.entry(key.to_string()).or_default())
        };

        let entry = slot
            .get_or_try_init(|| async {
                log::debug!("cache: populating {key}");
                let issues = fetch().await?;
                Ok(Entry { issues: Arc::new(issues), fetched_at: Instant::now() })
            })
            .await?;

        Ok(Arc::clone(&entry.issues))
    }

    fn is_expired(&self, entry: &Entry) -> bool {
        self.ttl.is_some_and(|ttl| entry.fetched_at.elapsed() >= ttl)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn issue(id: &str) -> NormalizedIssue {
        NormalizedIssue {
            id: id.into(),
            assignee: None,
            is_assigned: false,
            title: "t".into(),
            url: "u".into(),
            whiteboard: String::new(),
            priority: None,
            points: None,
            project: "p".into(),
            is_pull_request: false,
            last_change_date: None,
        }
    }

    #[tokio::test]
    async fn second_lookup_reuses_the_cached_list() {
        let cache = SearchCache::new(None);
        let calls = AtomicUsize::new(0);

        for _ in 0..2 {
            let list = cache
                .get_or_fetch("key", || async {
                    calls.fetch_add(1, Ordering::SeqCst);
                    Ok(vec![issue("gh:1")])
                })
                .await
                .unwrap();
            assert_eq!(list.len(), 1);
        }

        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn distinct_keys_fetch_independently() {
        let cache = SearchCache::new(None);
        let calls = AtomicUsize::new(0);

        for key in ["a", "b"] {
            cache
                .get_or_fetch(key, || async {
                    calls.fetch_add(1, Ordering::SeqCst);
                    Ok(vec![])
                })
                .await
                .unwrap();
        }

        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn concurrent_lookups_of_one_key_share_a_single_fetch() {
        let cache = SearchCache::new(None);
        let calls = AtomicUsize::new(0);

        let fetch = || async {
            calls.fetch_add(1, Ordering::SeqCst);
            // Yield so the sibling future gets polled while this one is
            // still in flight.
            tokio::task::yield_now().await;
            Ok(vec![issue("gh:1")])
        };

        let (a, b) = futures::join!(
            cache.get_or_fetch("key", fetch),
            cache.get_or_fetch("key", fetch),
        );
        assert_eq!(a.unwrap(), b.unwrap());
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn zero_ttl_expires_entries_immediately() {
        let cache = SearchCache::new(Some(Duration::ZERO));
        let calls = AtomicUsize::new(0);

        for _ in 0..2 {
            cache
                .get_or_fetch("key", || async {
                    calls.fetch_add(1, Ordering::SeqCst);
                    Ok(vec![])
                })
                .await
                .unwrap();
        }

        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn failed_fetch_is_not_cached() {
        let cache = SearchCache::new(None);
        let calls = AtomicUsize::new(0);

        let err = cache
            .get_or_fetch("key", || async {
                calls.fetch_add(1, Ordering::SeqCst);
                Err(SearchError::Network("boom".into()))
            })
            .await;
        assert!(err.is_err());

        let list = cache
            .get_or_fetch("key", || async {
                calls.fetch_add(1, Ordering::SeqCst);
                Ok(vec![issue("bz:1")])
            })
            .await
            .unwrap();
        assert_eq!(list.len(), 1);
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }
}
