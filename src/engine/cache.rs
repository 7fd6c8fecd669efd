//! Memoization wrapper for per-keystroke invocations
//!
//! The engine itself is pure and recomputes from scratch on every call.
//! Dashboards that re-run the filter on each keystroke can wrap it in a
//! `FilterCache` keyed on `(records_version, query, fields, threshold)`:
//! a hit returns the cached match list without rescoring. The caller owns
//! the version counter and bumps it whenever the record list changes
//! (e.g. after a fresh REST fetch).

use std::sync::Arc;

use ahash::AHashMap;
use parking_lot::RwLock;

use crate::algorithms::normalize::fold;
use crate::engine::filter::{rank, RankedMatch};
use crate::engine::record::Searchable;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct CacheKey {
    version: u64,
    /// Folded query, so case and whitespace variants share an entry
    query: String,
    fields: Vec<String>,
    /// Threshold bit pattern; f64 itself is not Hash
    threshold_bits: u64,
}

/// Thread-safe memo cache over [`rank`].
///
/// Clones share the same underlying store. Read hits take a shared lock,
/// so concurrent views can serve from one cache.
#[derive(Clone, Debug, Default)]
pub struct FilterCache {
    entries: Arc<RwLock<AHashMap<CacheKey, Arc<Vec<RankedMatch>>>>>,
}

impl FilterCache {
    /// Create an empty cache
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Rank through the cache.
    ///
    /// `version` must change whenever the record list changes; entries
    /// computed under an older version are never returned for a newer
    /// one. The match list is shared, not cloned, on a hit.
    pub fn rank<S, F>(
        &self,
        version: u64,
        records: &[S],
        query: &str,
        fields: &[F],
        threshold: f64,
    ) -> Arc<Vec<RankedMatch>>
    where
        S: Searchable + Sync,
        F: AsRef<str> + Sync,
    {
        let key = CacheKey {
            version,
            query: fold(query),
            fields: fields.iter().map(|f| f.as_ref().to_string()).collect(),
            threshold_bits: threshold.to_bits(),
        };

        if let Some(hit) = self.entries.read().get(&key) {
            return Arc::clone(hit);
        }

        let computed = Arc::new(rank(records, query, fields, threshold));
        self.entries
            .write()
            .insert(key, Arc::clone(&computed));
        computed
    }

    /// Number of cached entries
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }

    /// Drop entries computed for record versions older than `version`.
    ///
    /// Call after a refetch to keep the cache from growing across data
    /// refreshes.
    pub fn evict_before(&self, version: u64) {
        self.entries.write().retain(|key, _| key.version >= version);
    }

    /// Drop all entries
    pub fn clear(&self) {
        self.entries.write().clear();
    }
}
