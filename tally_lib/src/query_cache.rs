use crate::accounts::AccountId;
use chrono::{DateTime, Duration, Local};
use std::collections::HashMap;

/// Identifies one query sent to the server, e.g. ["transactions", "3"].
/// Keys are hierarchical, so that invalidating ["transactions"] also drops
/// the per-account queries.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct QueryKey(Vec<String>);

impl QueryKey {
    pub fn new<S: Into<String>>(segments: impl IntoIterator<Item = S>) -> Self {
        QueryKey(segments.into_iter().map(Into::into).collect())
    }

    pub fn accounts() -> Self {
        QueryKey::new(["accounts"])
    }

    pub fn account(id: AccountId) -> Self {
        QueryKey::new(["accounts".to_string(), id.to_string()])
    }

    /// All transactions, or only those of one account
    pub fn transactions(account: Option<AccountId>) -> Self {
        match account {
            None => QueryKey::new(["transactions"]),
            Some(id) => {
                QueryKey::new(["transactions".to_string(), id.to_string()])
            }
        }
    }

    pub fn goals() -> Self {
        QueryKey::new(["goals"])
    }

    pub fn summary() -> Self {
        QueryKey::new(["summary"])
    }

    pub fn starts_with(&self, prefix: &QueryKey) -> bool {
        self.0.starts_with(&prefix.0)
    }
}

impl std::fmt::Display for QueryKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.join("/"))
    }
}

struct Entry<V> {
    stored_at: DateTime<Local>,
    value: V,
}

/// Results of previous queries, kept for a fixed amount of time.
/// The caller owns the cache and passes the current time explicitly.
pub struct QueryCache<V> {
    ttl: Duration,
    entries: HashMap<QueryKey, Entry<V>>,
}

impl<V> QueryCache<V> {
    pub fn new(ttl: Duration) -> Self {
        QueryCache {
            ttl,
            entries: HashMap::new(),
        }
    }

    fn is_fresh(&self, stored_at: DateTime<Local>, now: DateTime<Local>) -> bool {
        now - stored_at < self.ttl
    }

    /// The cached value, unless it has expired.
    pub fn get(&self, key: &QueryKey, now: DateTime<Local>) -> Option<&V> {
        match self.entries.get(key) {
            Some(e) if self.is_fresh(e.stored_at, now) => {
                log::debug!("query cache hit {key}");
                Some(&e.value)
            }
            Some(_) | None => {
                log::debug!("query cache miss {key}");
                None
            }
        }
    }

    pub fn insert(&mut self, key: QueryKey, value: V, now: DateTime<Local>) {
        self.entries.insert(
            key,
            Entry {
                stored_at: now,
                value,
            },
        );
    }

    /// Drop every entry whose key starts with `prefix`.  Returns the number
    /// of entries removed.
    pub fn invalidate(&mut self, prefix: &QueryKey) -> usize {
        let before = self.entries.len();
        self.entries.retain(|k, _| !k.starts_with(prefix));
        let removed = before - self.entries.len();
        log::debug!("query cache: invalidated {removed} entries under {prefix}");
        removed
    }

    pub fn purge_expired(&mut self, now: DateTime<Local>) {
        let ttl = self.ttl;
        self.entries.retain(|_, e| now - e.stored_at < ttl);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod test {
    use crate::accounts::AccountId;
    use crate::query_cache::{QueryCache, QueryKey};
    use chrono::{Duration, Local};

    #[test]
    fn test_keys() {
        let all = QueryKey::transactions(None);
        let one = QueryKey::transactions(Some(AccountId(3)));
        assert!(one.starts_with(&all));
        assert!(!all.starts_with(&one));
        assert!(!QueryKey::account(AccountId(3)).starts_with(&all));
        assert_eq!(one.to_string(), "transactions/3");
        assert_eq!(QueryKey::new(["accounts", "3"]), QueryKey::account(AccountId(3)));
    }

    #[test]
    fn test_expiry() {
        let now = Local::now();
        let mut cache = QueryCache::new(Duration::minutes(5));
        cache.insert(QueryKey::accounts(), vec![1, 2], now);
        cache.insert(QueryKey::goals(), vec![], now - Duration::minutes(10));

        assert_eq!(cache.get(&QueryKey::accounts(), now), Some(&vec![1, 2]));
        assert_eq!(
            cache.get(&QueryKey::accounts(), now + Duration::minutes(5)),
            None
        );
        assert_eq!(cache.get(&QueryKey::goals(), now), None);
        assert_eq!(cache.get(&QueryKey::summary(), now), None);

        assert_eq!(cache.len(), 2);
        cache.purge_expired(now);
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_invalidate() {
        let now = Local::now();
        let mut cache = QueryCache::new(Duration::hours(1));
        cache.insert(QueryKey::transactions(None), "all", now);
        cache.insert(QueryKey::transactions(Some(AccountId(1))), "one", now);
        cache.insert(QueryKey::transactions(Some(AccountId(2))), "two", now);
        cache.insert(QueryKey::summary(), "summary", now);

        assert_eq!(cache.invalidate(&QueryKey::transactions(None)), 3);
        assert_eq!(cache.len(), 1);
        assert_eq!(cache.get(&QueryKey::summary(), now), Some(&"summary"));
        assert_eq!(cache.invalidate(&QueryKey::goals()), 0);

        // Replacing an entry refreshes it
        cache.insert(QueryKey::summary(), "newer", now + Duration::hours(2));
        assert_eq!(
            cache.get(&QueryKey::summary(), now + Duration::hours(2)),
            Some(&"newer")
        );
        assert!(!cache.is_empty());
    }
}
