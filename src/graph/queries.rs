use std::collections::BTreeSet;

use crate::errors::Result;
use crate::graph::{Graph, GraphTraverser};
use crate::types::{GraphInfo, GraphPath};

/// Provides connectivity and path queries over a graph.
pub struct GraphQueryManager<'a> {
    graph: &'a Graph,
}

impl<'a> GraphQueryManager<'a> {
    /// Creates a new `GraphQueryManager` over the given graph.
    pub fn new(graph: &'a Graph) -> Self {
        Self { graph }
    }

    /// Returns `true` if every node is reachable from every other node.
    ///
    /// An empty graph is connected by convention. The traversal starts at
    /// the smallest node id.
    pub fn is_connected(&self) -> bool {
        let nodes = self.graph.nodes();
        let Some(root) = nodes.first() else {
            return true;
        };
        match GraphTraverser::new(self.graph).bfs(root) {
            Ok(visited) => visited.len() == nodes.len(),
            Err(_) => false,
        }
    }

    /// Returns every node reachable from `start`, including `start` itself.
    pub fn reachable_from(&self, start: &str) -> Result<BTreeSet<String>> {
        let visited = GraphTraverser::new(self.graph).bfs(start)?;
        Ok(visited.into_iter().collect())
    }

    /// Finds the path with the fewest edges between `start` and `goal`.
    pub fn shortest_path(&self, start: &str, goal: &str) -> Result<Option<GraphPath>> {
        GraphTraverser::new(self.graph).bfs_path(start, goal)
    }

    /// Splits the graph into its connected components.
    ///
    /// Each component is sorted, and components are ordered by their
    /// smallest member.
    pub fn connected_components(&self) -> Vec<Vec<String>> {
        let traverser = GraphTraverser::new(self.graph);
        let mut seen: BTreeSet<String> = BTreeSet::new();
        let mut components: Vec<Vec<String>> = Vec::new();

        for node in self.graph.nodes() {
            if seen.contains(&node) {
                continue;
            }
            // `node` comes from the graph itself, so the traversal cannot miss.
            let Ok(visited) = traverser.bfs(&node) else {
                continue;
            };
            let mut component = visited;
            component.sort();
            seen.extend(component.iter().cloned());
            components.push(component);
        }

        components
    }

    /// Builds the summary shown by the CLI.
    pub fn info(&self) -> GraphInfo {
        GraphInfo {
            node_count: self.graph.size(),
            edge_count: self.graph.edge_count(),
            connected: self.is_connected(),
            component_count: self.connected_components().len(),
            nodes: self.graph.nodes(),
        }
    }
}
