/// The adjacency-map graph container.
pub mod adjacency;

/// Graph traversal algorithms.
pub mod traversal;

/// Connectivity and path queries built on the traversals.
pub mod queries;

use std::collections::BTreeSet;

use crate::errors::Result;
use crate::types::GraphPath;

pub use adjacency::Graph;
pub use queries::GraphQueryManager;
pub use traversal::GraphTraverser;

/// Depth-first visitation order from `start`.
pub fn dfs(graph: &Graph, start: &str) -> Result<Vec<String>> {
    GraphTraverser::new(graph).dfs(start)
}

/// Path from `start` to `goal` along the DFS visitation tree.
pub fn dfs_path(graph: &Graph, start: &str, goal: &str) -> Result<Option<GraphPath>> {
    GraphTraverser::new(graph).dfs_path(start, goal)
}

/// Breadth-first visitation order from `start`.
pub fn bfs(graph: &Graph, start: &str) -> Result<Vec<String>> {
    GraphTraverser::new(graph).bfs(start)
}

/// Shortest path from `start` to `goal` found by BFS.
pub fn bfs_path(graph: &Graph, start: &str, goal: &str) -> Result<Option<GraphPath>> {
    GraphTraverser::new(graph).bfs_path(start, goal)
}

/// Whether every node is reachable from every other; `true` for an empty graph.
pub fn is_connected(graph: &Graph) -> bool {
    GraphQueryManager::new(graph).is_connected()
}

/// Nodes reachable from `start`, including `start`.
pub fn reachable_from(graph: &Graph, start: &str) -> Result<BTreeSet<String>> {
    GraphQueryManager::new(graph).reachable_from(start)
}

/// Path with the fewest edges between `start` and `goal`.
pub fn shortest_path(graph: &Graph, start: &str, goal: &str) -> Result<Option<GraphPath>> {
    GraphQueryManager::new(graph).shortest_path(start, goal)
}

/// Connected components, each sorted, ordered by their smallest node.
pub fn connected_components(graph: &Graph) -> Vec<Vec<String>> {
    GraphQueryManager::new(graph).connected_components()
}
