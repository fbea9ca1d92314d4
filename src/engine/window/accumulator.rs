use std::collections::HashMap;

use ahash::RandomState as AHashRandomState;

use super::group_key::GroupKey;

/// Per-group event counts for the window that is currently open.
#[derive(Debug)]
pub struct WindowAccumulator {
    counts: HashMap<GroupKey, u64, AHashRandomState>,
}

impl WindowAccumulator {
    pub fn new() -> Self {
        Self {
            counts: HashMap::with_hasher(AHashRandomState::new()),
        }
    }

    pub fn increment(&mut self, key: &GroupKey) {
        match self.counts.get_mut(key) {
            Some(count) => *count += 1,
            None => {
                self.counts.insert(key.clone(), 1);
            }
        }
    }

    pub fn count(&self, key: &GroupKey) -> u64 {
        self.counts.get(key).copied().unwrap_or(0)
    }

    /// Counts for `keys` in the given order; keys without events read as 0.
    pub fn snapshot<'a>(&self, keys: impl IntoIterator<Item = &'a GroupKey>) -> Vec<u64> {
        keys.into_iter().map(|key| self.count(key)).collect()
    }

    pub fn clear(&mut self) {
        self.counts.clear();
    }

    /// Total number of events counted in the open window.
    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}

impl Default for WindowAccumulator {
    fn default() -> Self {
        Self::new()
    }
}
