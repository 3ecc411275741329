//! JSON persistence for graphs.
//!
//! The on-disk format is a flat node list plus an edge list:
//!
//! ```json
//! { "nodes": ["A", "B", "C"], "edges": [["A", "B"], ["B", "C"]] }
//! ```

use std::collections::HashSet;
use std::fs;
use std::io::Write;
use std::path::Path;

use serde_json::Value;
use tempfile::NamedTempFile;
use tracing::debug;

use crate::errors::{GraphError, Result};
use crate::graph::Graph;
use crate::types::GraphRecord;

/// Converts a graph into its persisted record form.
pub fn graph_to_dict(graph: &Graph) -> GraphRecord {
    GraphRecord {
        nodes: graph.nodes(),
        edges: graph.edges().into_iter().map(|(a, b)| [a, b]).collect(),
    }
}

/// Builds a graph from a decoded JSON record.
///
/// Both `nodes` and `edges` must be present. Node entries must be strings,
/// each edge must be a two-element array of strings, and every edge endpoint
/// must be listed in `nodes`. Nothing is built unless the whole record is
/// valid.
pub fn dict_to_graph(data: &Value) -> Result<Graph> {
    let obj = data.as_object().ok_or_else(|| GraphError::MalformedRecord {
        message: format!("expected a JSON object, got {}", json_kind(data)),
    })?;

    let nodes_value = obj.get("nodes").ok_or_else(|| missing("nodes"))?;
    let edges_value = obj.get("edges").ok_or_else(|| missing("edges"))?;

    let node_entries = nodes_value
        .as_array()
        .ok_or_else(|| GraphError::MalformedRecord {
            message: format!("'nodes' must be an array, got {}", json_kind(nodes_value)),
        })?;
    let edge_entries = edges_value
        .as_array()
        .ok_or_else(|| GraphError::MalformedRecord {
            message: format!("'edges' must be an array, got {}", json_kind(edges_value)),
        })?;

    let mut nodes: Vec<&str> = Vec::with_capacity(node_entries.len());
    for (index, entry) in node_entries.iter().enumerate() {
        let id = entry.as_str().ok_or_else(|| GraphError::InvalidIdentifier {
            message: format!(
                "node at index {index} must be a string, got {}",
                json_kind(entry)
            ),
        })?;
        nodes.push(id);
    }

    let mut edges: Vec<(&str, &str)> = Vec::with_capacity(edge_entries.len());
    for (index, entry) in edge_entries.iter().enumerate() {
        edges.push(parse_edge_entry(index, entry)?);
    }

    build_graph(&nodes, &edges)
}

/// Validates references and assembles a graph from already-typed parts.
pub fn record_to_graph(record: &GraphRecord) -> Result<Graph> {
    let nodes: Vec<&str> = record.nodes.iter().map(String::as_str).collect();
    let edges: Vec<(&str, &str)> = record
        .edges
        .iter()
        .map(|[a, b]| (a.as_str(), b.as_str()))
        .collect();
    build_graph(&nodes, &edges)
}

/// Serializes a graph as JSON text.
pub fn graph_to_json(graph: &Graph, pretty: bool) -> Result<String> {
    let record = graph_to_dict(graph);
    let json = if pretty {
        serde_json::to_string_pretty(&record)?
    } else {
        serde_json::to_string(&record)?
    };
    Ok(json)
}

/// Parses JSON text into a graph, applying the same validation as
/// [`dict_to_graph`].
pub fn graph_from_json(text: &str) -> Result<Graph> {
    let value: Value = serde_json::from_str(text).map_err(|e| GraphError::Parse {
        message: e.to_string(),
        path: "<string>".to_string(),
    })?;
    dict_to_graph(&value)
}

/// Saves a graph to `path` as pretty-printed JSON.
pub fn save_graph(graph: &Graph, path: &Path) -> Result<()> {
    save_graph_with(graph, path, true)
}

/// Saves a graph to `path` using an atomic write.
///
/// The JSON goes to a uniquely named temporary file in the destination's
/// directory, which then replaces `path`. Other files in that directory are
/// never touched, and the temporary file is removed if the replace fails.
pub fn save_graph_with(graph: &Graph, path: &Path, pretty: bool) -> Result<()> {
    let json = graph_to_json(graph, pretty)?;
    write_atomic(path, json.as_bytes())?;

    debug!(
        path = %path.display(),
        nodes = graph.size(),
        edges = graph.edge_count(),
        "graph saved"
    );
    Ok(())
}

/// Loads a graph previously written by [`save_graph`].
pub fn load_graph(path: &Path) -> Result<Graph> {
    if !path.exists() {
        return Err(GraphError::FileNotFound {
            path: path.display().to_string(),
        });
    }

    let contents = fs::read_to_string(path).map_err(|e| GraphError::File {
        message: format!("failed to read graph file: {}", e),
        path: path.display().to_string(),
    })?;

    let value: Value = serde_json::from_str(&contents).map_err(|e| GraphError::Parse {
        message: e.to_string(),
        path: path.display().to_string(),
    })?;

    let graph = dict_to_graph(&value)?;
    debug!(
        path = %path.display(),
        nodes = graph.size(),
        edges = graph.edge_count(),
        "graph loaded"
    );
    Ok(graph)
}

/// Replaces the contents of `path` in one step.
pub(crate) fn write_atomic(path: &Path, contents: &[u8]) -> Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let file_error = |message: String| GraphError::File {
        message,
        path: path.display().to_string(),
    };

    let mut tmp = NamedTempFile::new_in(dir)
        .map_err(|e| file_error(format!("failed to create temporary file: {}", e)))?;
    tmp.write_all(contents)
        .and_then(|()| tmp.as_file().sync_all())
        .map_err(|e| file_error(format!("failed to write temporary file: {}", e)))?;

    // On failure the returned error owns the temporary file and deletes it on drop.
    tmp.persist(path)
        .map_err(|e| file_error(format!("failed to replace file: {}", e.error)))?;
    Ok(())
}

// ---------------------------------------------------------------------------
// Private helpers
// ---------------------------------------------------------------------------

fn build_graph(nodes: &[&str], edges: &[(&str, &str)]) -> Result<Graph> {
    let known: HashSet<&str> = nodes.iter().copied().collect();

    for (index, (a, b)) in edges.iter().enumerate() {
        for endpoint in [a, b] {
            if !known.contains(endpoint) {
                return Err(GraphError::InvalidReference {
                    index,
                    node: endpoint.to_string(),
                });
            }
        }
    }

    let mut graph = Graph::new();
    for id in nodes {
        graph.add_node(id);
    }
    for (a, b) in edges {
        graph.add_edge(a, b);
    }
    Ok(graph)
}

fn parse_edge_entry(index: usize, entry: &Value) -> Result<(&str, &str)> {
    let malformed = |message: String| GraphError::MalformedEdge { index, message };

    let pair = entry
        .as_array()
        .ok_or_else(|| malformed(format!("expected an array, got {}", json_kind(entry))))?;

    match pair.as_slice() {
        [a, b] => {
            let a = a
                .as_str()
                .ok_or_else(|| malformed("endpoints must be strings".to_string()))?;
            let b = b
                .as_str()
                .ok_or_else(|| malformed("endpoints must be strings".to_string()))?;
            Ok((a, b))
        }
        other => Err(malformed(format!(
            "expected exactly 2 endpoints, got {}",
            other.len()
        ))),
    }
}

fn missing(field: &str) -> GraphError {
    GraphError::MissingField {
        field: field.to_string(),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
