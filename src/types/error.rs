//! Error types for the weighted graph library.

use thiserror::Error;

use super::NodeId;

/// All errors that can occur in the weighted graph library.
#[derive(Error, Debug)]
pub enum GraphError {
    /// Node is already present in the graph.
    #[error("Node {0} already exists")]
    AlreadyExists(NodeId),

    /// Node not found by ID.
    #[error("Node {0} does not exist")]
    NotFound(NodeId),

    /// An edge operation referenced at least one absent endpoint.
    #[error("One or both nodes do not exist: {a}, {b}")]
    NodeMissing { a: NodeId, b: NodeId },

    /// Self-loop rejected by the graph policy.
    #[error("Self-loop not allowed on node {0}")]
    SelfLoop(NodeId),

    /// Parallel edge rejected by the graph policy.
    #[error("Edge between {a} and {b} already exists")]
    DuplicateEdge { a: NodeId, b: NodeId },

    /// No edge between the two nodes (strict policy only).
    #[error("No edge between {a} and {b}")]
    EdgeNotFound { a: NodeId, b: NodeId },

    /// Malformed bulk-load input.
    #[error("Parse error on line {line}: {message}")]
    Parse { line: usize, message: String },

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration file could not be parsed.
    #[error("Config error: {0}")]
    Config(String),
}

impl GraphError {
    /// True for errors that reference node presence (rather than input or IO).
    pub fn is_missing_node(&self) -> bool {
        matches!(self, Self::NotFound(_) | Self::NodeMissing { .. })
    }
}

/// Convenience result type for graph operations.
pub type GraphResult<T> = Result<T, GraphError>;
