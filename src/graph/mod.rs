//! In-memory graph operations — the core data structure.

pub mod adjacency_graph;
pub mod builder;
pub mod traversal;
pub mod view;

pub use adjacency_graph::AdjacencyGraph;
pub use builder::GraphBuilder;
pub use traversal::{Bfs, Dfs};
pub use view::{AdjacencyRow, AdjacencyView};
