//! Usage ranking — most used first, alphabetical among ties.

use std::cmp::Ordering;
use std::collections::HashMap;
use std::hash::Hash;

/// Something that can be ordered by a [`UsageRanker`].
pub trait Ranked {
    type Key: Eq + Hash;

    /// Identifier usage is counted against.
    fn rank_key(&self) -> Self::Key;

    /// Tie-break name, compared case-sensitively.
    fn rank_name(&self) -> &str;
}

/// Counts activations per identifier and orders entities accordingly.
///
/// Identifiers that were never registered have an implicit count of zero.
#[derive(Debug, Clone)]
pub struct UsageRanker<K> {
    counts: HashMap<K, u64>,
}

impl<K> Default for UsageRanker<K> {
    fn default() -> Self {
        Self {
            counts: HashMap::new(),
        }
    }
}

impl<K: Eq + Hash> UsageRanker<K> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one more use of `key`.
    pub fn register_usage(&mut self, key: K) {
        *self.counts.entry(key).or_insert(0) += 1;
    }

    #[must_use]
    pub fn usage(&self, key: &K) -> u64 {
        self.counts.get(key).copied().unwrap_or(0)
    }

    /// Order by usage descending, then name ascending.
    ///
    /// The sort is stable, so entities with equal usage and equal names keep
    /// their input order.
    #[must_use]
    pub fn sort<T>(&self, mut items: Vec<T>) -> Vec<T>
    where
        T: Ranked<Key = K>,
    {
        items.sort_by(|a, b| self.compare(a, b));
        items
    }

    fn compare<T>(&self, a: &T, b: &T) -> Ordering
    where
        T: Ranked<Key = K>,
    {
        let usage_a = self.usage(&a.rank_key());
        let usage_b = self.usage(&b.rank_key());
        usage_b
            .cmp(&usage_a)
            .then_with(|| a.rank_name().cmp(b.rank_name()))
    }
}
