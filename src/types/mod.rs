//! All data types for the weighted graph library.

pub mod edge;
pub mod error;
pub mod policy;

pub use edge::{AdjacencyEntry, Edge};
pub use error::{GraphError, GraphResult};
pub use policy::GraphPolicy;

/// Integer node identifier.
pub type NodeId = i64;

/// Integer edge weight.
pub type Weight = i64;

/// Default bulk-load file read at startup.
pub const DEFAULT_DATA_FILE: &str = "graph_data.txt";
