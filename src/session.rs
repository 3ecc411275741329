use std::path::Path;

use tracing::info;

use crate::config::GraphwalkConfig;
use crate::errors::{GraphError, Result};
use crate::graph::{Graph, GraphQueryManager, GraphTraverser};
use crate::io;
use crate::types::{GraphInfo, GraphPath};

/// State owned by one front-end run: the graph being explored and the
/// settings it was opened with.
pub struct Session {
    graph: Graph,
    config: GraphwalkConfig,
}

impl Session {
    /// Starts a session on an empty graph.
    pub fn new(config: GraphwalkConfig) -> Self {
        Self::from_graph(Graph::new(), config)
    }

    pub fn from_graph(graph: Graph, config: GraphwalkConfig) -> Self {
        Self { graph, config }
    }

    /// Opens a session on a graph loaded from `path`.
    pub fn load(path: &Path, config: GraphwalkConfig) -> Result<Self> {
        let graph = io::load_graph(path)?;
        info!(path = %path.display(), nodes = graph.size(), "loaded graph");
        Ok(Self::from_graph(graph, config))
    }

    /// Opens a session on a graph built from a node list and `A-B` edge specs.
    pub fn create(nodes: &[String], edges: &[String], config: GraphwalkConfig) -> Result<Self> {
        let graph = build_graph_from_args(nodes, edges, &config.edge_separator)?;
        info!(nodes = graph.size(), edges = graph.edge_count(), "created graph");
        Ok(Self::from_graph(graph, config))
    }

    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    pub fn graph_mut(&mut self) -> &mut Graph {
        &mut self.graph
    }

    pub fn config(&self) -> &GraphwalkConfig {
        &self.config
    }

    /// Writes the graph to `path`, honoring the `pretty_json` setting.
    pub fn save(&self, path: &Path) -> Result<()> {
        io::save_graph_with(&self.graph, path, self.config.pretty_json)?;
        info!(path = %path.display(), "saved graph");
        Ok(())
    }

    pub fn info(&self) -> GraphInfo {
        GraphQueryManager::new(&self.graph).info()
    }

    pub fn dfs(&self, start: &str) -> Result<Vec<String>> {
        GraphTraverser::new(&self.graph).dfs(start)
    }

    pub fn dfs_path(&self, start: &str, goal: &str) -> Result<Option<GraphPath>> {
        GraphTraverser::new(&self.graph).dfs_path(start, goal)
    }

    pub fn bfs(&self, start: &str) -> Result<Vec<String>> {
        GraphTraverser::new(&self.graph).bfs(start)
    }

    pub fn shortest_path(&self, start: &str, goal: &str) -> Result<Option<GraphPath>> {
        GraphQueryManager::new(&self.graph).shortest_path(start, goal)
    }

    pub fn is_connected(&self) -> bool {
        GraphQueryManager::new(&self.graph).is_connected()
    }
}

/// Splits an edge spec such as `A-B` at the first occurrence of `separator`.
pub fn parse_edge_spec(spec: &str, separator: &str) -> Result<(String, String)> {
    let invalid = || GraphError::InvalidEdgeSpec {
        spec: spec.to_string(),
        separator: separator.to_string(),
    };

    if separator.is_empty() {
        return Err(invalid());
    }
    let (a, b) = spec.split_once(separator).ok_or_else(invalid)?;
    let (a, b) = (a.trim(), b.trim());
    if a.is_empty() || b.is_empty() {
        return Err(invalid());
    }
    Ok((a.to_string(), b.to_string()))
}

/// Builds a graph from a node list and a list of edge specs.
///
/// Edge endpoints that are not in `nodes` are added as nodes. All specs are
/// parsed before the graph is touched, so a bad spec yields no graph at all.
pub fn build_graph_from_args(nodes: &[String], edges: &[String], separator: &str) -> Result<Graph> {
    let pairs = edges
        .iter()
        .map(|spec| parse_edge_spec(spec, separator))
        .collect::<Result<Vec<_>>>()?;

    let mut graph = Graph::new();
    for node in nodes {
        graph.add_node(node);
    }
    for (a, b) in &pairs {
        graph.add_edge(a, b);
    }
    Ok(graph)
}
