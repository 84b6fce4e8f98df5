use anyhow::{Context, Result};
use serde::Deserialize;

use common::config::Config;
use common::types::{FocusPattern, Transaction, Wallet};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Compute and print the view-model for a graph file.
    Render {
        graph: String,
        pattern: Option<String>,
        select: Option<String>,
    },
    /// Print the role/degree table for a graph file.
    Roles { graph: String },
}

const USAGE: &str =
    "usage: explorer render <graph.json> [--pattern <pattern.json>] [--select <wallet-id>]\n       explorer roles <graph.json>";

pub fn parse_args<I>(mut args: I) -> std::result::Result<Command, String>
where
    I: Iterator<Item = String>,
{
    // Drop argv[0].
    let _ = args.next();

    let Some(cmd) = args.next() else {
        return Err(USAGE.to_string());
    };

    match cmd.as_str() {
        "render" => {
            let graph = args.next().ok_or_else(|| USAGE.to_string())?;
            let mut pattern = None;
            let mut select = None;
            while let Some(flag) = args.next() {
                match flag.as_str() {
                    "--pattern" => {
                        pattern = Some(
                            args.next()
                                .ok_or_else(|| "--pattern requires a file path".to_string())?,
                        );
                    }
                    "--select" => {
                        select = Some(
                            args.next()
                                .ok_or_else(|| "--select requires a wallet id".to_string())?,
                        );
                    }
                    other => return Err(format!("unknown flag: {other}")),
                }
            }
            Ok(Command::Render {
                graph,
                pattern,
                select,
            })
        }
        "roles" => {
            let graph = args.next().ok_or_else(|| USAGE.to_string())?;
            Ok(Command::Roles { graph })
        }
        other => Err(format!("unknown command: {other}\n{USAGE}")),
    }
}

/// On-disk graph snapshot: the same shapes the upstream feed supplies.
#[derive(Debug, Deserialize)]
struct GraphFile {
    wallets: Vec<Wallet>,
    transactions: Vec<Transaction>,
}

fn load_graph(path: &str) -> Result<GraphFile> {
    let content =
        std::fs::read_to_string(path).with_context(|| format!("reading graph file {path}"))?;
    serde_json::from_str(&content).with_context(|| format!("parsing graph file {path}"))
}

fn load_pattern(path: &str) -> Result<FocusPattern> {
    let content =
        std::fs::read_to_string(path).with_context(|| format!("reading pattern file {path}"))?;
    serde_json::from_str(&content).with_context(|| format!("parsing pattern file {path}"))
}

pub fn run_command(config: &Config, cmd: Command) -> Result<()> {
    match cmd {
        Command::Render {
            graph,
            pattern,
            select,
        } => render(config, &graph, pattern.as_deref(), select.as_deref()),
        Command::Roles { graph } => show_roles(config, &graph),
    }
}

fn render(config: &Config, graph: &str, pattern: Option<&str>, select: Option<&str>) -> Result<()> {
    let graph = load_graph(graph)?;
    let pattern = pattern.map(load_pattern).transpose()?;

    let vm = engine::compute_view_model(
        &graph.wallets,
        &graph.transactions,
        pattern.as_ref(),
        select,
        config,
    );
    engine::view_metrics::record_view_counts(&vm);

    println!("{}", serde_json::to_string_pretty(&vm)?);
    Ok(())
}

fn show_roles(config: &Config, graph: &str) -> Result<()> {
    let graph = load_graph(graph)?;
    let edges = engine::graph::resolve_edges(&graph.wallets, &graph.transactions);
    let nodes = engine::roles::classify_roles(&graph.wallets, &edges, config);

    println!("Wallet roles:");
    for n in &nodes {
        println!(
            "{role:>6}  in={in_degree:>3}  out={out_degree:>3}  risk={risk_score:>3}  {id}",
            role = n.role.as_str(),
            in_degree = n.in_degree,
            out_degree = n.out_degree,
            risk_score = n.risk_score,
            id = n.id,
        );
    }
    Ok(())
}
