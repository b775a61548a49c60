//! Numbered interactive menu over a graph.
//!
//! Answers are read as whitespace-separated tokens, so `3` followed by
//! `1 2 5` on one line or across several lines both work.

use std::collections::VecDeque;
use std::io::Write;
use std::path::Path;

use crate::format::GraphLoader;
use crate::graph::AdjacencyGraph;
use crate::types::{GraphError, GraphResult, NodeId};

use super::input::LineInput;
use super::render::{describe, Style, Tone, CLEAR_SCREEN};

const MENU: &str = "\n1. Add Node\n2. Delete Node\n3. Add Edge\n4. Delete Edge\n5. Update Weight\n6. BFS Traversal\n7. DFS Traversal\n8. Display Graph\n9. Exit";

/// Result of asking for one or more integers.
enum Answer {
    Values(Vec<i64>),
    Invalid(String),
    Eof,
}

/// Menu session state.
pub struct Menu<'g, I, W> {
    graph: &'g mut AdjacencyGraph,
    input: I,
    out: W,
    style: Style,
    clear_screen: bool,
    pending: VecDeque<String>,
}

impl<'g, I: LineInput, W: Write> Menu<'g, I, W> {
    pub fn new(graph: &'g mut AdjacencyGraph, input: I, out: W, style: Style) -> Self {
        Self {
            graph,
            input,
            out,
            style,
            clear_screen: false,
            pending: VecDeque::new(),
        }
    }

    pub fn clear_screen(mut self, enabled: bool) -> Self {
        self.clear_screen = enabled;
        self
    }

    /// Consume the menu and return the output sink.
    pub fn into_output(self) -> W {
        self.out
    }

    /// Load the bulk-load file and show the resulting graph.
    ///
    /// A missing or malformed file is reported and the graph is left as is.
    pub fn initialize(&mut self, data_file: &Path) -> GraphResult<()> {
        match GraphLoader::load_file(data_file, self.graph) {
            Ok(report) => {
                for rejection in &report.rejected {
                    self.say(
                        Tone::Error,
                        &format!("Line {}: {}", rejection.line, describe(&rejection.error)),
                    )?;
                }
                self.say(Tone::Success, "Graph initialized from file!")?;
            }
            Err(GraphError::Io(e)) => {
                log::warn!("cannot open {}: {e}", data_file.display());
                self.say(Tone::Error, "Error opening file!")?;
            }
            Err(e) => self.say(Tone::Error, &describe(&e))?,
        }
        self.display()
    }

    /// Run until choice 9 or end of input.
    pub fn run(&mut self) -> GraphResult<()> {
        loop {
            writeln!(self.out, "{MENU}")?;
            self.out.flush()?;

            let Some(token) = self.next_token("Enter choice: ") else {
                return Ok(());
            };
            if self.clear_screen {
                write!(self.out, "{CLEAR_SCREEN}")?;
            }

            match token.parse::<u8>() {
                Ok(1) => self.add_node()?,
                Ok(2) => self.delete_node()?,
                Ok(3) => self.add_edge()?,
                Ok(4) => self.delete_edge()?,
                Ok(5) => self.update_weight()?,
                Ok(6) => self.traverse(Traversal::Bfs)?,
                Ok(7) => self.traverse(Traversal::Dfs)?,
                Ok(8) => self.display()?,
                Ok(9) => return Ok(()),
                _ => self.pending.clear(),
            }
        }
    }

    fn add_node(&mut self) -> GraphResult<()> {
        let Some([id]) = self.ask::<1>("Enter node ID: ")? else {
            return Ok(());
        };
        match self.graph.add_node(id) {
            Ok(()) => self.say(Tone::Success, &format!("Node {id} added successfully!")),
            Err(e) => self.say(Tone::Error, &describe(&e)),
        }
    }

    fn delete_node(&mut self) -> GraphResult<()> {
        let Some([id]) = self.ask::<1>("Enter node ID to delete: ")? else {
            return Ok(());
        };
        match self.graph.delete_node(id) {
            Ok(_) => self.say(Tone::Warning, &format!("Node {id} deleted.")),
            Err(e) => self.say(Tone::Error, &describe(&e)),
        }
    }

    fn add_edge(&mut self) -> GraphResult<()> {
        let Some([a, b, w]) = self.ask::<3>("Enter two nodes and weight: ")? else {
            return Ok(());
        };
        match self.graph.add_edge(a, b, w) {
            Ok(()) => self.say(
                Tone::Success,
                &format!("Edge added between {a} and {b} with weight {w}"),
            ),
            Err(e) => self.say(Tone::Error, &describe(&e)),
        }
    }

    fn delete_edge(&mut self) -> GraphResult<()> {
        let Some([a, b]) = self.ask::<2>("Enter two nodes: ")? else {
            return Ok(());
        };
        match self.graph.delete_edge(a, b) {
            Ok(0) => self.say(Tone::Info, &format!("No edge between {a} and {b}.")),
            Ok(_) => self.say(Tone::Warning, &format!("Edge between {a} and {b} deleted.")),
            Err(e) => self.say(Tone::Error, &describe(&e)),
        }
    }

    fn update_weight(&mut self) -> GraphResult<()> {
        let Some([a, b, w]) = self.ask::<3>("Enter two nodes and new weight: ")? else {
            return Ok(());
        };
        match self.graph.update_weight(a, b, w) {
            Ok(0) => self.say(Tone::Info, &format!("No edge between {a} and {b}.")),
            Ok(_) => self.say(
                Tone::Info,
                &format!("Weight updated for edge {a} - {b} to {w}"),
            ),
            Err(e) => self.say(Tone::Error, &describe(&e)),
        }
    }

    fn traverse(&mut self, kind: Traversal) -> GraphResult<()> {
        let Some([start]) = self.ask::<1>("Enter starting node: ")? else {
            return Ok(());
        };
        let order: GraphResult<Vec<NodeId>> = match kind {
            Traversal::Bfs => self.graph.bfs(start).map(|it| it.collect()),
            Traversal::Dfs => self.graph.dfs(start).map(|it| it.collect()),
        };
        match order {
            Ok(order) => {
                let joined: Vec<String> = order.iter().map(ToString::to_string).collect();
                writeln!(self.out, "{} Traversal: {}", kind.label(), joined.join(" "))?;
                Ok(())
            }
            Err(e) => self.say(Tone::Error, &describe(&e)),
        }
    }

    fn display(&mut self) -> GraphResult<()> {
        write!(self.out, "{}", self.graph.display())?;
        Ok(())
    }

    fn say(&mut self, tone: Tone, message: &str) -> GraphResult<()> {
        writeln!(self.out, "{}", self.style.paint(tone, message))?;
        Ok(())
    }

    /// Ask for `N` integers. `Ok(None)` means the answer was invalid (already
    /// reported) or input ended.
    fn ask<const N: usize>(&mut self, prompt: &str) -> GraphResult<Option<[i64; N]>> {
        match self.read_ints(prompt, N) {
            Answer::Values(values) => Ok(values.try_into().ok()),
            Answer::Invalid(token) => {
                self.pending.clear();
                self.say(Tone::Error, &format!("Invalid number: {token}"))?;
                Ok(None)
            }
            Answer::Eof => Ok(None),
        }
    }

    fn read_ints(&mut self, prompt: &str, count: usize) -> Answer {
        let mut values = Vec::with_capacity(count);
        while values.len() < count {
            let Some(token) = self.next_token(prompt) else {
                return Answer::Eof;
            };
            match token.parse() {
                Ok(value) => values.push(value),
                Err(_) => return Answer::Invalid(token),
            }
        }
        Answer::Values(values)
    }

    /// Next whitespace-separated token, reading more lines as needed.
    fn next_token(&mut self, prompt: &str) -> Option<String> {
        while self.pending.is_empty() {
            let line = self.input.read_line(prompt)?;
            self.pending
                .extend(line.split_whitespace().map(str::to_string));
        }
        self.pending.pop_front()
    }
}

#[derive(Clone, Copy)]
enum Traversal {
    Bfs,
    Dfs,
}

impl Traversal {
    fn label(self) -> &'static str {
        match self {
            Self::Bfs => "BFS",
            Self::Dfs => "DFS",
        }
    }
}
