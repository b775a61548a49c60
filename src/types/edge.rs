//! Adjacency entries and the undirected edge struct.

use serde::Serialize;

use super::{NodeId, Weight};

/// One directed half of an undirected edge, stored in a node's adjacency list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct AdjacencyEntry {
    /// The node at the other end of the edge.
    pub neighbor: NodeId,
    /// Edge weight. Any integer, including zero and negative values.
    pub weight: Weight,
}

impl AdjacencyEntry {
    pub fn new(neighbor: NodeId, weight: Weight) -> Self {
        Self { neighbor, weight }
    }
}

impl std::fmt::Display for AdjacencyEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.neighbor, self.weight)
    }
}

/// An unordered weighted edge. `a <= b` for edges produced by enumeration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Edge {
    pub a: NodeId,
    pub b: NodeId,
    pub weight: Weight,
}

impl Edge {
    /// Create an edge, normalising the endpoint order.
    pub fn new(a: NodeId, b: NodeId, weight: Weight) -> Self {
        if a <= b {
            Self { a, b, weight }
        } else {
            Self { a: b, b: a, weight }
        }
    }

    /// True if this edge joins `x` and `y` in either direction.
    pub fn joins(&self, x: NodeId, y: NodeId) -> bool {
        (self.a == x && self.b == y) || (self.a == y && self.b == x)
    }

    pub fn is_self_loop(&self) -> bool {
        self.a == self.b
    }
}

impl std::fmt::Display for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} - {} ({})", self.a, self.b, self.weight)
    }
}
