//! Weighted graph — an in-memory undirected weighted graph.
//!
//! Nodes are integer ids; every edge is mirrored in both endpoints'
//! adjacency lists. Supports node/edge mutation, BFS and DFS traversal,
//! and bulk initialization from a small text format.

pub mod cli;
pub mod config;
pub mod format;
pub mod graph;
pub mod types;

// Re-export commonly used types at the crate root
pub use config::AppConfig;
pub use format::{GraphLoader, GraphScript, LoadReport};
pub use graph::{AdjacencyGraph, AdjacencyRow, AdjacencyView, Bfs, Dfs, GraphBuilder};
pub use types::{
    AdjacencyEntry, Edge, GraphError, GraphPolicy, GraphResult, NodeId, Weight, DEFAULT_DATA_FILE,
};
