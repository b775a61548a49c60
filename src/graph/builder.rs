//! Fluent API for building AdjacencyGraph instances.

use crate::types::{GraphPolicy, GraphResult, NodeId, Weight};

use super::AdjacencyGraph;

/// Fluent builder for constructing an AdjacencyGraph.
///
/// Nodes are inserted before edges regardless of call order, so an edge may
/// be declared before its endpoints.
#[derive(Debug, Default)]
pub struct GraphBuilder {
    policy: GraphPolicy,
    nodes: Vec<NodeId>,
    edges: Vec<(NodeId, NodeId, Weight)>,
}

impl GraphBuilder {
    /// Create a new builder with the default policy.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn policy(mut self, policy: GraphPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Add a node.
    pub fn node(mut self, id: NodeId) -> Self {
        self.nodes.push(id);
        self
    }

    /// Add several nodes.
    pub fn nodes(mut self, ids: impl IntoIterator<Item = NodeId>) -> Self {
        self.nodes.extend(ids);
        self
    }

    /// Add an undirected edge.
    pub fn edge(mut self, a: NodeId, b: NodeId, weight: Weight) -> Self {
        self.edges.push((a, b, weight));
        self
    }

    /// Build the final graph. Fails on the first rejected node or edge.
    pub fn build(self) -> GraphResult<AdjacencyGraph> {
        let mut graph = AdjacencyGraph::with_policy(self.policy);
        for id in self.nodes {
            graph.add_node(id)?;
        }
        for (a, b, weight) in self.edges {
            graph.add_edge(a, b, weight)?;
        }
        Ok(graph)
    }
}
