//! Parser for the line-oriented bulk-load format.
//!
//! ```text
//! # comment
//! NODES 1 2 3
//! EDGES
//! 1 2 5
//! 2 3 7
//! ```
//!
//! The whole input is parsed before anything touches a graph, so a parse
//! error never leaves a half-loaded graph behind.

use std::io::BufRead;

use log::{debug, warn};

use crate::graph::AdjacencyGraph;
use crate::types::{GraphError, GraphResult, NodeId, Weight};

/// A single graph mutation read from the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Instruction {
    AddNode(NodeId),
    AddEdge { a: NodeId, b: NodeId, weight: Weight },
}

/// An instruction tagged with its 1-based source line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    pub line: usize,
    pub instruction: Instruction,
}

/// An instruction the graph refused while applying a script.
#[derive(Debug)]
pub struct Rejection {
    pub line: usize,
    pub instruction: Instruction,
    pub error: GraphError,
}

/// Outcome of applying a script to a graph.
#[derive(Debug, Default)]
pub struct LoadReport {
    /// Number of nodes inserted.
    pub nodes_added: usize,
    /// Number of edges inserted.
    pub edges_added: usize,
    /// Instructions the graph rejected, in file order.
    pub rejected: Vec<Rejection>,
}

impl LoadReport {
    pub fn is_clean(&self) -> bool {
        self.rejected.is_empty()
    }
}

/// A parsed bulk-load file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GraphScript {
    steps: Vec<Step>,
}

impl GraphScript {
    /// Parse from any buffered reader.
    pub fn parse(reader: impl BufRead) -> GraphResult<Self> {
        let mut steps = Vec::new();
        let mut in_edges = false;

        for (idx, line) in reader.lines().enumerate() {
            let line_no = idx + 1;
            let line = line?;
            let trimmed = line.trim();

            if in_edges {
                if trimmed.is_empty() {
                    in_edges = false;
                    continue;
                }
                if trimmed.starts_with('#') {
                    continue;
                }
                steps.push(Step {
                    line: line_no,
                    instruction: parse_edge_line(trimmed, line_no)?,
                });
                continue;
            }

            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }

            let mut tokens = trimmed.split_whitespace();
            match tokens.next() {
                Some("NODES") => {
                    for token in tokens {
                        steps.push(Step {
                            line: line_no,
                            instruction: Instruction::AddNode(parse_int(token, line_no)?),
                        });
                    }
                }
                Some("EDGES") => in_edges = true,
                Some(other) => debug!("ignoring line {line_no} starting with {other:?}"),
                None => {}
            }
        }

        Ok(Self { steps })
    }

    /// Parse from a string.
    pub fn parse_str(input: &str) -> GraphResult<Self> {
        Self::parse(input.as_bytes())
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Replay every instruction against `graph`.
    ///
    /// Rejected instructions are recorded and skipped; they never abort the load.
    pub fn apply(&self, graph: &mut AdjacencyGraph) -> LoadReport {
        let mut report = LoadReport::default();

        for step in &self.steps {
            let result = match step.instruction {
                Instruction::AddNode(id) => graph.add_node(id).map(|()| report.nodes_added += 1),
                Instruction::AddEdge { a, b, weight } => graph
                    .add_edge(a, b, weight)
                    .map(|()| report.edges_added += 1),
            };
            if let Err(error) = result {
                warn!("line {}: {}", step.line, error);
                report.rejected.push(Rejection {
                    line: step.line,
                    instruction: step.instruction,
                    error,
                });
            }
        }

        report
    }
}

fn parse_edge_line(line: &str, line_no: usize) -> GraphResult<Instruction> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.len() != 3 {
        return Err(GraphError::Parse {
            line: line_no,
            message: format!("expected `node1 node2 weight`, got {} token(s)", tokens.len()),
        });
    }
    Ok(Instruction::AddEdge {
        a: parse_int(tokens[0], line_no)?,
        b: parse_int(tokens[1], line_no)?,
        weight: parse_int(tokens[2], line_no)?,
    })
}

fn parse_int(token: &str, line_no: usize) -> GraphResult<i64> {
    token.parse().map_err(|_| GraphError::Parse {
        line: line_no,
        message: format!("invalid integer {token:?}"),
    })
}
