use serde::{Deserialize, Serialize};

/// A normalized undirected edge: `(min(a, b), max(a, b))`.
pub type Edge = (String, String);

/// A sequence of node ids where consecutive entries are adjacent.
pub type GraphPath = Vec<String>;

/// Returns the number of edges in a path: `len - 1`, so both a missing path
/// and an empty one give `-1`.
pub fn path_length(path: Option<&[String]>) -> i64 {
    path.map_or(-1, |p| p.len() as i64 - 1)
}

/// The persisted form of a graph.
///
/// Serialized as `{"nodes": [...], "edges": [[a, b], ...]}` with nodes sorted
/// and every edge normalized so that `a <= b`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GraphRecord {
    /// Sorted node identifiers.
    pub nodes: Vec<String>,
    /// Normalized, sorted edge pairs.
    pub edges: Vec<[String; 2]>,
}

/// Summary of a graph, as shown by the CLI `--info` flag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphInfo {
    /// Number of nodes.
    pub node_count: usize,
    /// Number of distinct undirected edges.
    pub edge_count: usize,
    /// Whether every node is reachable from every other node.
    pub connected: bool,
    /// Number of connected components.
    pub component_count: usize,
    /// Sorted node identifiers.
    pub nodes: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn path_length_counts_edges() {
        let path = vec!["A".to_string(), "B".to_string(), "C".to_string()];
        assert_eq!(path_length(Some(&path)), 2);
        assert_eq!(path_length(Some(&path[..1])), 0);
        assert_eq!(path_length(None), -1);
        assert_eq!(path_length(Some(&[])), -1);
    }
}
