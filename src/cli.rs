//! Command line arguments for the `shortpath` binary.

use crate::config::OutputFormat;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;


#[derive(Parser, Debug)]
#[command(name = "shortpath", version)]
#[command(about = "Build a weighted undirected graph and query single-source shortest paths", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// TOML configuration file
    #[arg(short, long, global = true, env = "SHORTPATH_CONFIG")]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Interactive session on stdin/stdout (default)
    Repl,
    /// Add the given edges, run one query and print the report
    Run(RunArgs),
}

#[derive(Args, Debug)]
pub struct RunArgs {
    /// Edge as `A,B,WEIGHT`, repeat for more edges
    #[arg(short, long = "edge", value_parser = parse_edge_spec, allow_hyphen_values = true)]
    pub edges: Vec<EdgeSpec>,

    /// Lone node with no edges, repeatable
    #[arg(short, long = "node")]
    pub nodes: Vec<String>,

    /// Start node of the query
    #[arg(short, long)]
    pub start: String,

    /// Report format, overrides the config file
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Also print one shortest path per node
    #[arg(short, long)]
    pub paths: bool,
}

/// Raw edge as typed on the command line, the weight is validated later
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EdgeSpec {
    pub a: String,
    pub b: String,
    pub weight: String,
}

fn parse_edge_spec(text: &str) -> Result<EdgeSpec, String> {
    let parts: Vec<&str> = text.split(',').collect();
    match parts.as_slice() {
        [a, b, weight] if !a.is_empty() && !b.is_empty() => Ok(EdgeSpec {
            a: a.to_string(),
            b: b.to_string(),
            weight: weight.to_string(),
        }),
        _ => Err(format!("expected A,B,WEIGHT, got {text:?}")),
    }
}
