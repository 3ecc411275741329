use clap::{ArgGroup, Parser};
use std::path::PathBuf;
use std::process;

use graphwalk::config::{load_config, save_config, GraphwalkConfig};
use graphwalk::errors::Result;
use graphwalk::logging::init_logging;
use graphwalk::session::Session;

/// Explore undirected graphs from the command line.
#[derive(Parser)]
#[command(
    name = "graphwalk",
    version,
    about = "Explore undirected graphs: traversals, connectivity and shortest paths",
    group(
        ArgGroup::new("input")
            .required(true)
            .multiple(true)
            .args(["load", "create", "write_config"])
    )
)]
struct Cli {
    /// Load a graph from a JSON file
    #[arg(long, value_name = "FILE", conflicts_with = "create")]
    load: Option<PathBuf>,
    /// Build a new graph from --nodes and --edges
    #[arg(long, requires = "nodes")]
    create: bool,
    /// Node ids (with --create)
    #[arg(long, num_args = 1.., value_name = "ID", conflicts_with = "load")]
    nodes: Vec<String>,
    /// Edges written as A-B (with --create)
    #[arg(long, num_args = 1.., value_name = "A-B", conflicts_with = "load")]
    edges: Vec<String>,
    /// Save the graph to a JSON file
    #[arg(long, value_name = "FILE")]
    save: Option<PathBuf>,
    /// Print a summary of the graph
    #[arg(long)]
    info: bool,
    /// Print the summary as JSON (with --info)
    #[arg(long, requires = "info")]
    json: bool,
    /// Depth-first traversal from a node
    #[arg(long, value_name = "ID")]
    dfs: Option<String>,
    /// Breadth-first traversal from a node
    #[arg(long, value_name = "ID")]
    bfs: Option<String>,
    /// Target node: prints a path instead of a full traversal
    #[arg(long, value_name = "ID")]
    goal: Option<String>,
    /// Check whether the graph is connected
    #[arg(long)]
    connected: bool,
    /// Directory holding the .graphwalk config (default: current directory)
    #[arg(long, value_name = "DIR")]
    config_dir: Option<String>,
    /// Write the active configuration to the config directory
    #[arg(long)]
    write_config: bool,
}

fn main() {
    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config_root = resolve_path(cli.config_dir.clone());
    let config = load_config(&config_root)?;
    init_logging(&config.log_filter);

    if cli.write_config {
        let written = save_config(&config_root, &config)?;
        println!("Wrote config to {}", written.display());
    }

    let Some(session) = open_session(&cli, config)? else {
        return Ok(());
    };

    if cli.info {
        print_info(&session, cli.json)?;
    }

    if let Some(start) = &cli.dfs {
        match &cli.goal {
            Some(goal) => print_path("DFS path", start, goal, session.dfs_path(start, goal)?),
            None => println!("DFS from {}: {}", start, session.dfs(start)?.join(" -> ")),
        }
    }

    if let Some(start) = &cli.bfs {
        match &cli.goal {
            Some(goal) => print_path(
                "Shortest path",
                start,
                goal,
                session.shortest_path(start, goal)?,
            ),
            None => println!("BFS from {}: {}", start, session.bfs(start)?.join(" -> ")),
        }
    }

    if cli.connected {
        if session.is_connected() {
            println!("The graph is connected");
        } else {
            println!("The graph is not connected");
        }
    }

    if let Some(path) = &cli.save {
        session.save(path)?;
        println!("Saved graph to {}", path.display());
    }

    Ok(())
}

/// Loads or builds the graph the rest of the command works on.
///
/// Returns `None` when the command only writes the config.
fn open_session(cli: &Cli, config: GraphwalkConfig) -> Result<Option<Session>> {
    if let Some(path) = &cli.load {
        return Session::load(path, config).map(Some);
    }
    if cli.create {
        return Session::create(&cli.nodes, &cli.edges, config).map(Some);
    }
    Ok(None)
}

fn print_info(session: &Session, json: bool) -> Result<()> {
    let info = session.info();
    if json {
        println!("{}", serde_json::to_string_pretty(&info)?);
        return Ok(());
    }
    println!("Graph Info");
    println!("  Nodes:      {}", info.node_count);
    println!("  Edges:      {}", info.edge_count);
    println!("  Connected:  {}", if info.connected { "yes" } else { "no" });
    println!("  Components: {}", info.component_count);
    if !info.nodes.is_empty() {
        println!("  Node list:  {}", info.nodes.join(", "));
    }
    Ok(())
}

fn print_path(label: &str, start: &str, goal: &str, path: Option<Vec<String>>) {
    match path {
        Some(p) => println!(
            "{} {} -> {} ({} edges): {}",
            label,
            start,
            goal,
            p.len().saturating_sub(1),
            p.join(" -> ")
        ),
        None => println!("No path from {} to {}", start, goal),
    }
}

/// Resolves an optional path argument to a `PathBuf`.
///
/// Defaults to the current working directory if no path is provided.
fn resolve_path(path: Option<String>) -> PathBuf {
    match path {
        Some(p) => PathBuf::from(p),
        None => std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
    }
}
