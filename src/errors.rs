use thiserror::Error;

/// Errors that can occur during graph operations.
#[derive(Error, Debug)]
pub enum GraphError {
    #[error("node not found: {node}")]
    NodeNotFound { node: String },

    #[error("edge not found: {a} - {b}")]
    EdgeNotFound { a: String, b: String },

    #[error("missing field: {field}")]
    MissingField { field: String },

    #[error("malformed edge at index {index}: {message}")]
    MalformedEdge { index: usize, message: String },

    #[error("edge at index {index} references unknown node '{node}'")]
    InvalidReference { index: usize, node: String },

    #[error("malformed record: {message}")]
    MalformedRecord { message: String },

    #[error("invalid identifier: {message}")]
    InvalidIdentifier { message: String },

    #[error("invalid edge spec '{spec}': expected two node ids joined by '{separator}'")]
    InvalidEdgeSpec { spec: String, separator: String },

    #[error("parse error: {message} (path: {path})")]
    Parse { message: String, path: String },

    #[error("file not found: {path}")]
    FileNotFound { path: String },

    #[error("file error: {message} (path: {path})")]
    File { message: String, path: String },

    #[error("config error: {message}")]
    Config { message: String },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

impl GraphError {
    /// Returns `true` for the missing-node and missing-edge variants.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            GraphError::NodeNotFound { .. } | GraphError::EdgeNotFound { .. }
        )
    }

    pub(crate) fn node_not_found(node: &str) -> Self {
        GraphError::NodeNotFound {
            node: node.to_string(),
        }
    }
}

/// Convenience alias for results using `GraphError`.
pub type Result<T> = std::result::Result<T, GraphError>;
