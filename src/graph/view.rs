//! Read-only adjacency enumeration used to display the graph.

use std::collections::btree_map;
use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

use crate::types::{AdjacencyEntry, NodeId};

/// One node and its adjacency entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AdjacencyRow<'a> {
    pub node: NodeId,
    pub entries: &'a [AdjacencyEntry],
}

impl fmt::Display for AdjacencyRow<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Node {} ->", self.node)?;
        for entry in self.entries {
            write!(f, " {entry}")?;
        }
        Ok(())
    }
}

/// Lazy iterator over every node in ascending id order.
///
/// Consumed once; call `AdjacencyGraph::display` again to restart.
#[derive(Clone)]
pub struct AdjacencyView<'a> {
    inner: btree_map::Iter<'a, NodeId, Vec<AdjacencyEntry>>,
}

impl<'a> AdjacencyView<'a> {
    pub(crate) fn new(adjacency: &'a BTreeMap<NodeId, Vec<AdjacencyEntry>>) -> Self {
        Self {
            inner: adjacency.iter(),
        }
    }
}

impl<'a> Iterator for AdjacencyView<'a> {
    type Item = AdjacencyRow<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(&node, entries)| AdjacencyRow {
            node,
            entries: entries.as_slice(),
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for AdjacencyView<'_> {}

impl fmt::Display for AdjacencyView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Graph Representation:")?;
        for row in self.clone() {
            writeln!(f, "{row}")?;
        }
        Ok(())
    }
}
