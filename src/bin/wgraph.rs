//! CLI entry point for the `wgraph` command-line tool.

use std::io::{self, IsTerminal};
use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

use weighted_graph::cli::{commands, EditorInput, Menu, ReaderInput};
use weighted_graph::config::{self, AppConfig};
use weighted_graph::types::{GraphError, GraphPolicy, GraphResult, NodeId};
use weighted_graph::{AdjacencyGraph, GraphLoader};

#[derive(Parser)]
#[command(
    name = "wgraph",
    about = "Interactive undirected weighted graph editor"
)]
struct Cli {
    /// Path to a TOML config file (default: $WGRAPH_CONFIG, then ./wgraph.toml)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Bulk-load file read at startup (overrides the config)
    #[arg(long)]
    data: Option<PathBuf>,

    /// Output format: "text" (default) or "json"
    #[arg(long, default_value = "text")]
    format: String,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Reject parallel edges and self-loops; report absent edges
    #[arg(long)]
    strict: bool,

    /// Enable debug logging
    #[arg(long)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive numbered menu (default)
    Menu,
    /// Print the adjacency lists of the loaded graph
    Display,
    /// Breadth-first traversal from a node
    Bfs {
        /// Starting node ID
        start: NodeId,
    },
    /// Depth-first traversal from a node
    Dfs {
        /// Starting node ID
        start: NodeId,
    },
    /// Validate the data file and report rejected lines
    Check,
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();
}

fn resolve_config(cli: &Cli) -> GraphResult<AppConfig> {
    let mut cfg = config::load_or_default(cli.config.as_deref())?;
    if let Some(data) = &cli.data {
        cfg.data_file = data.clone();
    }
    if cli.no_color || std::env::var_os("NO_COLOR").is_some() || !io::stdout().is_terminal() {
        cfg.style.color = false;
    }
    if cli.strict {
        cfg.policy = GraphPolicy::strict();
    }
    Ok(cfg)
}

/// Load the data file for one-shot commands. Unreadable files are fatal here.
fn load_graph(cfg: &AppConfig) -> GraphResult<AdjacencyGraph> {
    let mut graph = AdjacencyGraph::with_policy(cfg.policy);
    let report = GraphLoader::load_file(&cfg.data_file, &mut graph)?;
    for r in &report.rejected {
        eprintln!("Line {}: {}", r.line, r.error);
    }
    Ok(graph)
}

fn run_menu(cfg: &AppConfig) -> GraphResult<()> {
    let mut graph = AdjacencyGraph::with_policy(cfg.policy);
    let stdout = io::stdout().lock();

    if io::stdin().is_terminal() {
        let input = EditorInput::new().map_err(|e| GraphError::Io(io::Error::other(e.to_string())))?;
        let mut menu =
            Menu::new(&mut graph, input, stdout, cfg.style.clone()).clear_screen(cfg.clear_screen);
        menu.initialize(&cfg.data_file)?;
        menu.run()
    } else {
        let input = ReaderInput::new(io::stdin().lock());
        let mut menu = Menu::new(&mut graph, input, stdout, cfg.style.clone());
        menu.initialize(&cfg.data_file)?;
        menu.run()
    }
}

fn run(cli: Cli) -> GraphResult<bool> {
    let json = cli.format == "json";
    let cfg = resolve_config(&cli)?;
    let mut out = io::stdout().lock();

    match cli.command.unwrap_or(Commands::Menu) {
        Commands::Menu => {
            drop(out);
            run_menu(&cfg)?;
        }
        Commands::Display => commands::cmd_display(&load_graph(&cfg)?, &mut out, json)?,
        Commands::Bfs { start } => commands::cmd_bfs(&load_graph(&cfg)?, start, &mut out, json)?,
        Commands::Dfs { start } => commands::cmd_dfs(&load_graph(&cfg)?, start, &mut out, json)?,
        Commands::Check => {
            return commands::cmd_check(&cfg.data_file, cfg.policy, &cfg.style, &mut out, json)
        }
    }
    Ok(true)
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli) {
        Ok(true) => {}
        Ok(false) => process::exit(1),
        Err(e) => {
            eprintln!("Error: {}", e);
            let code = match &e {
                GraphError::Io(_) => 1,
                GraphError::Parse { .. } | GraphError::Config(_) => 2,
                e if e.is_missing_node() => 4,
                _ => 5,
            };
            process::exit(code);
        }
    }
}
