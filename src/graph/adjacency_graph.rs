//! Core graph structure — node ids mapped to mirrored adjacency lists.

use std::collections::BTreeMap;

use log::debug;

use crate::types::{
    AdjacencyEntry, Edge, GraphError, GraphPolicy, GraphResult, NodeId, Weight,
};

use super::traversal::{Bfs, Dfs};
use super::view::AdjacencyView;

/// An undirected weighted graph stored as an adjacency list.
///
/// Every edge `{a, b}` is held twice: `(b, w)` under `a` and `(a, w)` under `b`.
/// All mutations keep both halves in step.
#[derive(Debug, Clone, Default)]
pub struct AdjacencyGraph {
    /// Adjacency lists, ordered by node id.
    adjacency: BTreeMap<NodeId, Vec<AdjacencyEntry>>,
    /// Edge acceptance rules.
    policy: GraphPolicy,
}

impl AdjacencyGraph {
    /// Create a new empty graph with the default (permissive) policy.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new empty graph with an explicit policy.
    pub fn with_policy(policy: GraphPolicy) -> Self {
        Self {
            adjacency: BTreeMap::new(),
            policy,
        }
    }

    pub fn policy(&self) -> GraphPolicy {
        self.policy
    }

    /// Number of nodes.
    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of undirected edges (parallel edges counted individually).
    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum::<usize>() / 2
    }

    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    pub fn contains_node(&self, id: NodeId) -> bool {
        self.adjacency.contains_key(&id)
    }

    /// All node ids in ascending order.
    pub fn nodes(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.adjacency.keys().copied()
    }

    /// Adjacency entries of a node, in insertion order.
    pub fn neighbors(&self, id: NodeId) -> GraphResult<&[AdjacencyEntry]> {
        self.adjacency
            .get(&id)
            .map(Vec::as_slice)
            .ok_or(GraphError::NotFound(id))
    }

    /// Number of adjacency entries held by a node.
    pub fn degree(&self, id: NodeId) -> GraphResult<usize> {
        self.neighbors(id).map(<[AdjacencyEntry]>::len)
    }

    /// Weight of the first edge from `a` to `b`, if any.
    pub fn weight(&self, a: NodeId, b: NodeId) -> Option<Weight> {
        self.adjacency
            .get(&a)?
            .iter()
            .find(|e| e.neighbor == b)
            .map(|e| e.weight)
    }

    /// Every undirected edge exactly once, ordered by lower endpoint.
    ///
    /// Taken from the lower endpoint's list so parallel edges keep their
    /// multiplicity; a self-loop contributes one edge per pair of entries.
    pub fn edges(&self) -> Vec<Edge> {
        let mut edges = Vec::new();
        for (&id, entries) in &self.adjacency {
            let mut self_entries = 0usize;
            for entry in entries {
                if entry.neighbor == id {
                    self_entries += 1;
                    if self_entries % 2 == 1 {
                        edges.push(Edge::new(id, id, entry.weight));
                    }
                } else if id < entry.neighbor {
                    edges.push(Edge::new(id, entry.neighbor, entry.weight));
                }
            }
        }
        edges
    }

    /// Add a node with an empty adjacency list.
    pub fn add_node(&mut self, id: NodeId) -> GraphResult<()> {
        if self.adjacency.contains_key(&id) {
            return Err(GraphError::AlreadyExists(id));
        }
        self.adjacency.insert(id, Vec::new());
        debug!("added node {id}");
        Ok(())
    }

    /// Remove a node and strip every entry that points at it.
    ///
    /// Returns the number of entries removed from other nodes' lists.
    pub fn delete_node(&mut self, id: NodeId) -> GraphResult<usize> {
        if self.adjacency.remove(&id).is_none() {
            return Err(GraphError::NotFound(id));
        }

        let mut stripped = 0;
        for entries in self.adjacency.values_mut() {
            let before = entries.len();
            entries.retain(|e| e.neighbor != id);
            stripped += before - entries.len();
        }

        debug!("deleted node {id}, stripped {stripped} mirror entries");
        Ok(stripped)
    }

    /// Add an undirected edge between two existing nodes.
    pub fn add_edge(&mut self, a: NodeId, b: NodeId, weight: Weight) -> GraphResult<()> {
        self.require_endpoints(a, b)?;

        if a == b && !self.policy.allow_self_loops {
            return Err(GraphError::SelfLoop(a));
        }
        if !self.policy.allow_parallel_edges && self.weight(a, b).is_some() {
            return Err(GraphError::DuplicateEdge { a, b });
        }

        self.list_mut(a).push(AdjacencyEntry::new(b, weight));
        self.list_mut(b).push(AdjacencyEntry::new(a, weight));

        debug!("added edge {a} - {b} with weight {weight}");
        Ok(())
    }

    /// Remove every edge between `a` and `b`, collapsing parallel edges.
    ///
    /// Returns the number of edges removed.
    pub fn delete_edge(&mut self, a: NodeId, b: NodeId) -> GraphResult<usize> {
        self.require_endpoints(a, b)?;

        let removed = {
            let list = self.list_mut(a);
            let before = list.len();
            list.retain(|e| e.neighbor != b);
            before - list.len()
        };
        if a != b {
            self.list_mut(b).retain(|e| e.neighbor != a);
        }

        // A self-loop occupies two entries in the same list.
        let removed = if a == b { removed / 2 } else { removed };

        if removed == 0 && self.policy.strict_edges {
            return Err(GraphError::EdgeNotFound { a, b });
        }

        debug!("deleted {removed} edge(s) between {a} and {b}");
        Ok(removed)
    }

    /// Set the weight of every edge between `a` and `b` on both sides.
    ///
    /// Never adds entries. Returns the number of edges updated.
    pub fn update_weight(&mut self, a: NodeId, b: NodeId, weight: Weight) -> GraphResult<usize> {
        self.require_endpoints(a, b)?;

        let mut updated = 0;
        for entry in self.list_mut(a).iter_mut().filter(|e| e.neighbor == b) {
            entry.weight = weight;
            updated += 1;
        }
        if a != b {
            for entry in self.list_mut(b).iter_mut().filter(|e| e.neighbor == a) {
                entry.weight = weight;
            }
        }

        let updated = if a == b { updated / 2 } else { updated };

        if updated == 0 && self.policy.strict_edges {
            return Err(GraphError::EdgeNotFound { a, b });
        }

        debug!("updated {updated} edge(s) between {a} and {b} to weight {weight}");
        Ok(updated)
    }

    /// Breadth-first traversal from `start`.
    pub fn bfs(&self, start: NodeId) -> GraphResult<Bfs<'_>> {
        if !self.contains_node(start) {
            return Err(GraphError::NotFound(start));
        }
        Ok(Bfs::new(self, start))
    }

    /// Depth-first traversal from `start`.
    pub fn dfs(&self, start: NodeId) -> GraphResult<Dfs<'_>> {
        if !self.contains_node(start) {
            return Err(GraphError::NotFound(start));
        }
        Ok(Dfs::new(self, start))
    }

    /// Lazy read-only enumeration of every node and its adjacency entries.
    pub fn display(&self) -> AdjacencyView<'_> {
        AdjacencyView::new(&self.adjacency)
    }

    /// Check the symmetry invariant: every entry `a -> (b, w)` has a
    /// matching `b -> (a, w)`, with equal multiplicity.
    pub fn is_symmetric(&self) -> bool {
        self.adjacency.iter().all(|(&a, entries)| {
            entries.iter().all(|entry| {
                let b = entry.neighbor;
                if a == b {
                    let count = entries.iter().filter(|e| *e == entry).count();
                    return count % 2 == 0;
                }
                let Some(mirror) = self.adjacency.get(&b) else {
                    return false;
                };
                let here = entries.iter().filter(|e| *e == entry).count();
                let there = mirror
                    .iter()
                    .filter(|e| e.neighbor == a && e.weight == entry.weight)
                    .count();
                here == there
            })
        })
    }

    /// Raw adjacency access for traversal iterators.
    pub(crate) fn entries(&self, id: NodeId) -> &[AdjacencyEntry] {
        self.adjacency.get(&id).map(Vec::as_slice).unwrap_or(&[])
    }

    fn require_endpoints(&self, a: NodeId, b: NodeId) -> GraphResult<()> {
        if self.contains_node(a) && self.contains_node(b) {
            Ok(())
        } else {
            Err(GraphError::NodeMissing { a, b })
        }
    }

    fn list_mut(&mut self, id: NodeId) -> &mut Vec<AdjacencyEntry> {
        // Endpoints are checked by require_endpoints before any call.
        self.adjacency.entry(id).or_default()
    }
}
