//! Generic undirected adjacency graph.
//!
//! Backs both the triangle-adjacency structure (nodes are triangle keys) and
//! the three derived proximity graphs (nodes are site keys). Unweighted, set
//! semantics, no parallel edges.

use rustc_hash::{FxHashMap, FxHashSet};
use std::hash::Hash;

/// An undirected graph over copyable node identifiers.
#[derive(Clone, Debug, Default)]
pub struct Graph<N> {
    adjacency: FxHashMap<N, FxHashSet<N>>,
}

impl<N: Copy + Eq + Hash> Graph<N> {
    /// Creates an empty graph.
    #[must_use]
    pub fn new() -> Self {
        Self {
            adjacency: FxHashMap::default(),
        }
    }

    /// Adds `node` with no incident edges. No effect if already present.
    pub fn insert_node(&mut self, node: N) {
        self.adjacency.entry(node).or_default();
    }

    /// Adds the undirected edge `{a, b}`, creating either endpoint as needed.
    pub fn insert_edge(&mut self, a: N, b: N) {
        self.adjacency.entry(a).or_default().insert(b);
        self.adjacency.entry(b).or_default().insert(a);
    }

    /// Removes `node` and detaches all its incident edges.
    pub fn remove_node(&mut self, node: N) {
        if let Some(neighbors) = self.adjacency.remove(&node) {
            for neighbor in neighbors {
                if let Some(back) = self.adjacency.get_mut(&neighbor) {
                    back.remove(&node);
                }
            }
        }
    }

    /// Removes the edge `{a, b}` if present, leaving both endpoints as nodes.
    pub fn remove_edge(&mut self, a: N, b: N) {
        if let Some(set) = self.adjacency.get_mut(&a) {
            set.remove(&b);
        }
        if let Some(set) = self.adjacency.get_mut(&b) {
            set.remove(&a);
        }
    }

    /// Iterates the neighbors of `node`; empty if the node is absent.
    pub fn neighbors(&self, node: N) -> impl Iterator<Item = N> + '_ {
        self.adjacency.get(&node).into_iter().flatten().copied()
    }

    /// Iterates all nodes.
    pub fn nodes(&self) -> impl Iterator<Item = N> + '_ {
        self.adjacency.keys().copied()
    }

    /// True iff the edge `{a, b}` is present.
    #[must_use]
    pub fn has_edge(&self, a: N, b: N) -> bool {
        self.adjacency.get(&a).is_some_and(|set| set.contains(&b))
    }

    /// True iff `node` is present.
    #[must_use]
    pub fn contains_node(&self, node: N) -> bool {
        self.adjacency.contains_key(&node)
    }

    /// Number of nodes.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of undirected edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(|set| set.len()).sum::<usize>() / 2
    }

    /// Removes every node and edge.
    pub fn clear(&mut self) {
        self.adjacency.clear();
    }
}
