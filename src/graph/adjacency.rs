use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use crate::errors::{GraphError, Result};
use crate::types::Edge;

/// An undirected graph stored as an adjacency map.
///
/// Node ids map to the ordered set of their neighbors, so every neighbor
/// listing comes out in ascending order without re-sorting. Every link is
/// stored in both directions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Graph {
    adjacency: BTreeMap<String, BTreeSet<String>>,
}

impl Graph {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts `id` as an isolated node. Does nothing if it already exists.
    pub fn add_node(&mut self, id: &str) {
        if !self.adjacency.contains_key(id) {
            self.adjacency.insert(id.to_string(), BTreeSet::new());
        }
    }

    /// Links `a` and `b`, creating either node if needed.
    ///
    /// Adding an existing edge is a no-op. `add_edge(a, a)` records a
    /// self-loop.
    pub fn add_edge(&mut self, a: &str, b: &str) {
        self.add_node(a);
        self.add_node(b);
        if let Some(ns) = self.adjacency.get_mut(a) {
            ns.insert(b.to_string());
        }
        if let Some(ns) = self.adjacency.get_mut(b) {
            ns.insert(a.to_string());
        }
    }

    /// Removes `id` together with every edge touching it.
    pub fn remove_node(&mut self, id: &str) -> Result<()> {
        let neighbors = self
            .adjacency
            .remove(id)
            .ok_or_else(|| GraphError::node_not_found(id))?;

        for neighbor in &neighbors {
            if let Some(ns) = self.adjacency.get_mut(neighbor) {
                ns.remove(id);
            }
        }
        Ok(())
    }

    /// Removes the edge between `a` and `b`. Both nodes stay in the graph.
    pub fn remove_edge(&mut self, a: &str, b: &str) -> Result<()> {
        if !self.has_edge(a, b) {
            return Err(GraphError::EdgeNotFound {
                a: a.to_string(),
                b: b.to_string(),
            });
        }
        if let Some(ns) = self.adjacency.get_mut(a) {
            ns.remove(b);
        }
        if let Some(ns) = self.adjacency.get_mut(b) {
            ns.remove(a);
        }
        Ok(())
    }

    /// Returns the neighbors of `id` in ascending order.
    ///
    /// The returned vector is a fresh copy; mutating it does not affect the
    /// graph.
    pub fn neighbors(&self, id: &str) -> Result<Vec<String>> {
        self.adjacency
            .get(id)
            .map(|ns| ns.iter().cloned().collect())
            .ok_or_else(|| GraphError::node_not_found(id))
    }

    /// Borrowing variant of [`Graph::neighbors`] used by the traversals.
    pub(crate) fn neighbor_set(&self, id: &str) -> Option<&BTreeSet<String>> {
        self.adjacency.get(id)
    }

    /// Returns `true` if `id` is a node of the graph.
    pub fn has_node(&self, id: &str) -> bool {
        self.adjacency.contains_key(id)
    }

    /// Returns `true` if `a` and `b` are linked, in either order.
    pub fn has_edge(&self, a: &str, b: &str) -> bool {
        self.adjacency
            .get(a)
            .map(|ns| ns.contains(b))
            .unwrap_or(false)
    }

    /// Returns all node ids in ascending order.
    pub fn nodes(&self) -> Vec<String> {
        self.adjacency.keys().cloned().collect()
    }

    /// Returns every edge once, normalized as `(min, max)` and sorted.
    pub fn edges(&self) -> Vec<Edge> {
        // Keys and neighbor sets are both ordered, so keeping only the
        // `a <= b` half yields a sorted, duplicate-free listing.
        let mut edges = Vec::new();
        for (a, ns) in &self.adjacency {
            for b in ns.range(a.clone()..) {
                edges.push((a.clone(), b.clone()));
            }
        }
        edges
    }

    /// Number of nodes.
    pub fn size(&self) -> usize {
        self.adjacency.len()
    }

    /// Same as [`Graph::size`].
    pub fn len(&self) -> usize {
        self.size()
    }

    /// Returns `true` if the graph has no nodes.
    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    /// Number of distinct undirected edges.
    pub fn edge_count(&self) -> usize {
        self.adjacency
            .iter()
            .map(|(a, ns)| ns.range(a.clone()..).count())
            .sum()
    }

    /// Number of neighbors of `id`.
    pub fn degree(&self, id: &str) -> Result<usize> {
        self.adjacency
            .get(id)
            .map(BTreeSet::len)
            .ok_or_else(|| GraphError::node_not_found(id))
    }
}

impl fmt::Display for Graph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Graph(nodes={}, edges={})", self.size(), self.edge_count())
    }
}
