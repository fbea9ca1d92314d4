use std::collections::{BTreeSet, HashSet};

use ahash::RandomState as AHashRandomState;

use super::group_key::GroupKey;

/// Every group key a running statement has seen.
///
/// Keys are never removed. Repeat sightings are answered by the hash set in
/// O(1); a new key also goes into the ordered set in O(log n), which keeps
/// the flush-time walk in key order linear.
#[derive(Debug)]
pub struct GroupRegistry {
    known: HashSet<GroupKey, AHashRandomState>,
    ordered: BTreeSet<GroupKey>,
}

impl GroupRegistry {
    pub fn new() -> Self {
        Self {
            known: HashSet::with_hasher(AHashRandomState::new()),
            ordered: BTreeSet::new(),
        }
    }

    /// Records `key`, returning true when it had not been seen before.
    pub fn observe(&mut self, key: &GroupKey) -> bool {
        if self.known.contains(key) {
            return false;
        }
        self.known.insert(key.clone());
        self.ordered.insert(key.clone());
        true
    }

    pub fn contains(&self, key: &GroupKey) -> bool {
        self.known.contains(key)
    }

    /// Known keys, null first, then strings in ascending order.
    pub fn keys(&self) -> impl ExactSizeIterator<Item = &GroupKey> + Clone + '_ {
        self.ordered.iter()
    }

    pub fn len(&self) -> usize {
        self.ordered.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ordered.is_empty()
    }
}

impl Default for GroupRegistry {
    fn default() -> Self {
        Self::new()
    }
}
