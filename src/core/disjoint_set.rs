//! Union-find over arbitrary hashable keys.
//!
//! Supports the Kruskal sweep in the spanning-tree rebuild. Union by rank with
//! path halving; elements are added lazily on first touch.

use rustc_hash::FxHashMap;
use std::hash::Hash;

/// A disjoint-set forest keyed by copyable identifiers.
#[derive(Clone, Debug, Default)]
pub struct DisjointSet<K> {
    parent: FxHashMap<K, K>,
    rank: FxHashMap<K, u32>,
}

impl<K: Copy + Eq + Hash> DisjointSet<K> {
    /// Creates an empty forest.
    #[must_use]
    pub fn new() -> Self {
        Self {
            parent: FxHashMap::default(),
            rank: FxHashMap::default(),
        }
    }

    /// Returns the representative of `key`'s set, inserting `key` as a
    /// singleton if it was not yet present.
    pub fn find(&mut self, key: K) -> K {
        if !self.parent.contains_key(&key) {
            self.parent.insert(key, key);
            return key;
        }
        let mut current = key;
        // Path halving: point every other node at its grandparent.
        loop {
            let parent = self.parent[&current];
            if parent == current {
                return current;
            }
            let grandparent = self.parent[&parent];
            self.parent.insert(current, grandparent);
            current = grandparent;
        }
    }

    /// Merges the sets containing `a` and `b`.
    ///
    /// Returns `true` if the sets were distinct, `false` if `a` and `b` were
    /// already connected.
    pub fn union(&mut self, a: K, b: K) -> bool {
        let root_a = self.find(a);
        let root_b = self.find(b);
        if root_a == root_b {
            return false;
        }
        let rank_a = self.rank.get(&root_a).copied().unwrap_or(0);
        let rank_b = self.rank.get(&root_b).copied().unwrap_or(0);
        if rank_a < rank_b {
            self.parent.insert(root_a, root_b);
        } else if rank_a > rank_b {
            self.parent.insert(root_b, root_a);
        } else {
            self.parent.insert(root_b, root_a);
            self.rank.insert(root_a, rank_a + 1);
        }
        true
    }

    /// True iff `a` and `b` are in the same set.
    pub fn connected(&mut self, a: K, b: K) -> bool {
        self.find(a) == self.find(b)
    }
}
