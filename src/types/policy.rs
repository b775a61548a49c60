//! Graph policy: which edge shapes are accepted and how absent edges are reported.

use serde::{Deserialize, Serialize};

/// Explicit switches for the behaviours that are otherwise ambiguous
/// for an undirected adjacency-list graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphPolicy {
    /// Repeated `add_edge` calls for the same pair append parallel entries.
    pub allow_parallel_edges: bool,
    /// `add_edge(a, a, w)` appends two entries to `a`'s own list.
    pub allow_self_loops: bool,
    /// `delete_edge` / `update_weight` on a pair with no edge fail with
    /// `EdgeNotFound` instead of reporting zero affected edges.
    pub strict_edges: bool,
}

impl GraphPolicy {
    /// Permissive policy: parallel edges, self-loops, no absent-edge errors.
    pub const fn permissive() -> Self {
        Self {
            allow_parallel_edges: true,
            allow_self_loops: true,
            strict_edges: false,
        }
    }

    /// Simple-graph policy: one edge per pair, no self-loops, absent edges reported.
    pub const fn strict() -> Self {
        Self {
            allow_parallel_edges: false,
            allow_self_loops: false,
            strict_edges: true,
        }
    }
}

impl Default for GraphPolicy {
    fn default() -> Self {
        Self::permissive()
    }
}
