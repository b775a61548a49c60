//! CLI command implementations.

use std::io::Write;
use std::path::Path;

use crate::format::GraphLoader;
use crate::graph::AdjacencyGraph;
use crate::types::{GraphPolicy, GraphResult, NodeId};

use super::render::{describe, Style, Tone};

/// Print every node with its adjacency entries.
pub fn cmd_display(graph: &AdjacencyGraph, out: &mut impl Write, json: bool) -> GraphResult<()> {
    if json {
        let rows: Vec<serde_json::Value> = graph
            .display()
            .map(|row| serde_json::json!({"node": row.node, "adjacent": row.entries}))
            .collect();
        let info = serde_json::json!({
            "nodes": graph.node_count(),
            "edges": graph.edge_count(),
            "adjacency": rows,
        });
        writeln!(
            out,
            "{}",
            serde_json::to_string_pretty(&info).unwrap_or_default()
        )?;
    } else {
        write!(out, "{}", graph.display())?;
    }
    Ok(())
}

/// Breadth-first traversal from `start`.
pub fn cmd_bfs(
    graph: &AdjacencyGraph,
    start: NodeId,
    out: &mut impl Write,
    json: bool,
) -> GraphResult<()> {
    let order: Vec<NodeId> = graph.bfs(start)?.collect();
    print_traversal(out, "BFS", start, &order, json)
}

/// Depth-first traversal from `start`.
pub fn cmd_dfs(
    graph: &AdjacencyGraph,
    start: NodeId,
    out: &mut impl Write,
    json: bool,
) -> GraphResult<()> {
    let order: Vec<NodeId> = graph.dfs(start)?.collect();
    print_traversal(out, "DFS", start, &order, json)
}

/// Load a data file into a fresh graph and report what happened.
///
/// Returns `Ok(false)` if any line was rejected or the result is asymmetric.
pub fn cmd_check(
    path: &Path,
    policy: GraphPolicy,
    style: &Style,
    out: &mut impl Write,
    json: bool,
) -> GraphResult<bool> {
    let mut graph = AdjacencyGraph::with_policy(policy);
    let report = GraphLoader::load_file(path, &mut graph)?;
    let symmetric = graph.is_symmetric();
    let ok = report.is_clean() && symmetric;

    if json {
        let rejected: Vec<serde_json::Value> = report
            .rejected
            .iter()
            .map(|r| serde_json::json!({"line": r.line, "error": r.error.to_string()}))
            .collect();
        let info = serde_json::json!({
            "file": path.display().to_string(),
            "nodes_added": report.nodes_added,
            "edges_added": report.edges_added,
            "rejected": rejected,
            "symmetric": symmetric,
            "ok": ok,
        });
        writeln!(
            out,
            "{}",
            serde_json::to_string_pretty(&info).unwrap_or_default()
        )?;
    } else {
        writeln!(out, "File: {}", path.display())?;
        writeln!(out, "Nodes added: {}", report.nodes_added)?;
        writeln!(out, "Edges added: {}", report.edges_added)?;
        for r in &report.rejected {
            writeln!(
                out,
                "{}",
                style.paint(Tone::Error, &format!("Line {}: {}", r.line, describe(&r.error)))
            )?;
        }
        if !symmetric {
            writeln!(out, "{}", style.paint(Tone::Error, "Adjacency lists are not symmetric!"))?;
        }
        let (tone, verdict) = if ok {
            (Tone::Success, "OK")
        } else {
            (Tone::Warning, "Problems found")
        };
        writeln!(out, "{}", style.paint(tone, verdict))?;
    }
    Ok(ok)
}

fn print_traversal(
    out: &mut impl Write,
    label: &str,
    start: NodeId,
    order: &[NodeId],
    json: bool,
) -> GraphResult<()> {
    if json {
        let info = serde_json::json!({
            "traversal": label.to_lowercase(),
            "start": start,
            "order": order,
        });
        writeln!(out, "{info}")?;
    } else {
        let joined: Vec<String> = order.iter().map(ToString::to_string).collect();
        writeln!(out, "{label} Traversal: {}", joined.join(" "))?;
    }
    Ok(())
}
