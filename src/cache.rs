use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Results stay fresh for an hour, matching how long a count stays meaningful
/// between content-team triage passes.
pub const RESULT_TTL: Duration = Duration::from_secs(3600);

/// Time-bounded result cache keyed by the exact JQL string. Invalidation is
/// caller-controlled; there is no background eviction.
pub struct TtlCache<T> {
    ttl: Duration,
    entries: HashMap<String, (Instant, T)>,
}

impl<T: Clone> TtlCache<T> {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            entries: HashMap::new(),
        }
    }

    /// Fresh value for `jql`, if any. Expired entries are dropped on access.
    pub fn get(&mut self, jql: &str) -> Option<T> {
        match self.entries.get(jql) {
            Some((stored, value)) if stored.elapsed() < self.ttl => Some(value.clone()),
            Some(_) => {
                self.entries.remove(jql);
                None
            }
            None => None,
        }
    }

    pub fn insert(&mut self, jql: &str, value: T) {
        self.entries.insert(jql.to_string(), (Instant::now(), value));
    }

    pub fn invalidate(&mut self, jql: &str) {
        self.entries.remove(jql);
    }
}

impl<T: Clone> Default for TtlCache<T> {
    fn default() -> Self {
        Self::new(RESULT_TTL)
    }
}
