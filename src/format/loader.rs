//! Loads bulk-load files into an in-memory graph.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::info;

use crate::graph::AdjacencyGraph;
use crate::types::GraphResult;

use super::script::{GraphScript, LoadReport};

/// Reader for bulk-load graph files.
pub struct GraphLoader;

impl GraphLoader {
    /// Load a file into `graph`.
    ///
    /// An unreadable file or a parse error leaves `graph` unchanged.
    pub fn load_file(path: &Path, graph: &mut AdjacencyGraph) -> GraphResult<LoadReport> {
        let file = File::open(path)?;
        let report = Self::load_from(BufReader::new(file), graph)?;
        info!(
            "loaded {}: {} node(s), {} edge(s), {} rejected",
            path.display(),
            report.nodes_added,
            report.edges_added,
            report.rejected.len()
        );
        Ok(report)
    }

    /// Load from any buffered reader into `graph`.
    pub fn load_from(reader: impl BufRead, graph: &mut AdjacencyGraph) -> GraphResult<LoadReport> {
        let script = GraphScript::parse(reader)?;
        Ok(script.apply(graph))
    }
}
