//! Graph traversal algorithms (BFS, DFS) as lazy iterators.

use std::collections::{HashSet, VecDeque};

use crate::types::NodeId;

use super::AdjacencyGraph;

/// Breadth-first traversal. Nodes are marked visited when enqueued,
/// so each reachable node is yielded exactly once in discovery order.
pub struct Bfs<'a> {
    graph: &'a AdjacencyGraph,
    visited: HashSet<NodeId>,
    queue: VecDeque<NodeId>,
}

impl<'a> Bfs<'a> {
    pub(crate) fn new(graph: &'a AdjacencyGraph, start: NodeId) -> Self {
        let mut visited = HashSet::new();
        visited.insert(start);
        Self {
            graph,
            visited,
            queue: VecDeque::from([start]),
        }
    }
}

impl Iterator for Bfs<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let current = self.queue.pop_front()?;
        for entry in self.graph.entries(current) {
            if self.visited.insert(entry.neighbor) {
                self.queue.push_back(entry.neighbor);
            }
        }
        Some(current)
    }
}

/// Depth-first traversal over a LIFO stack.
///
/// Unvisited neighbours are pushed in adjacency order and a node is marked
/// visited only when popped, so the stack may hold stale duplicates that are
/// skipped on pop.
pub struct Dfs<'a> {
    graph: &'a AdjacencyGraph,
    visited: HashSet<NodeId>,
    stack: Vec<NodeId>,
}

impl<'a> Dfs<'a> {
    pub(crate) fn new(graph: &'a AdjacencyGraph, start: NodeId) -> Self {
        Self {
            graph,
            visited: HashSet::new(),
            stack: vec![start],
        }
    }
}

impl Iterator for Dfs<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        while let Some(current) = self.stack.pop() {
            if !self.visited.insert(current) {
                continue;
            }
            for entry in self.graph.entries(current) {
                if !self.visited.contains(&entry.neighbor) {
                    self.stack.push(entry.neighbor);
                }
            }
            return Some(current);
        }
        None
    }
}
