//! Line-oriented front end for a [`Session`].
//!
//! Each input line is one command, parsed with clap:
//!
//! ```text
//! edge A B 4
//! node Z
//! query A --paths --format text
//! edges
//! nodes
//! quit
//! ```
//!
//! Bad input prints a message and the loop carries on. Only I/O failures and
//! internal graph faults end it with an error.

use crate::config::{Config, OutputFormat};
use crate::errors::{GraphError, ReplError};
use crate::render;
use crate::session::Session;

use clap::{Parser, Subcommand};
use std::io::{BufRead, Write};


const HELP: &str = "\
Commands:
  edge <a> <b> <weight>              add an undirected edge
  node <name>                        add a node with no edges
  query <start> [--paths] [--format text|json|dot]
                                     shortest distances from <start>
  edges                              list added edges
  nodes                              list known nodes
  help                               show this message
  quit | exit                        leave
";


#[derive(Parser, Debug)]
#[command(multicall = true, disable_help_subcommand = true)]
struct ReplLine {
    #[command(subcommand)]
    command: ReplCommand,
}

#[derive(Subcommand, Debug, PartialEq)]
enum ReplCommand {
    /// Add an undirected edge
    Edge {
        #[arg(allow_hyphen_values = true)]
        a: String,
        #[arg(allow_hyphen_values = true)]
        b: String,
        /// Validated by the graph store, not by the parser
        #[arg(allow_hyphen_values = true)]
        weight: String,
    },
    /// Add a node with no edges
    Node {
        #[arg(allow_hyphen_values = true)]
        name: String,
    },
    /// Shortest distances from a start node
    Query {
        #[arg(allow_hyphen_values = true)]
        start: String,
        /// Also print one shortest path per node
        #[arg(long)]
        paths: bool,
        #[arg(long, value_enum)]
        format: Option<OutputFormat>,
    },
    /// List added edges
    Edges,
    /// List known nodes
    Nodes,
    Help,
    #[command(alias = "exit")]
    Quit,
}

enum Flow {
    Continue,
    Quit,
}


/// Read commands from `input` until EOF or `quit`, writing responses to `output`
pub fn run<R, W>(session: &mut Session, config: &Config, mut input: R, mut output: W) -> Result<(), ReplError>
where
    R: BufRead,
    W: Write,
{
    let mut line = String::new();

    loop {
        write!(output, "{}", config.prompt)?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            break;
        }

        let words: Vec<&str> = line.split_whitespace().collect();
        if words.is_empty() {
            continue;
        }

        let command = match ReplLine::try_parse_from(words.iter().copied()) {
            Ok(parsed) => parsed.command,
            Err(e) => {
                write!(output, "{}", e.render())?;
                continue;
            }
        };

        if let Flow::Quit = execute(session, config, command, &mut output)? {
            break;
        }
    }

    tracing::debug!(nodes = session.graph().node_count(), edges = session.edges().len(), "repl finished");
    Ok(())
}

fn execute<W: Write>(session: &mut Session, config: &Config, command: ReplCommand, output: &mut W) -> Result<Flow, ReplError> {
    match command {
        ReplCommand::Edge { a, b, weight } => match session.add_edge(&a, &b, &weight) {
            Ok(edge) => writeln!(output, "{}", render::edge_line(&edge))?,
            Err(e) => report_user_error(e, output)?,
        },
        ReplCommand::Node { name } => {
            session.add_node(&name);
            writeln!(output, "{name}")?;
        }
        ReplCommand::Query { start, paths, format } => match session.query(&start) {
            Ok(result) => {
                let format = format.unwrap_or(config.output);
                let text = render::report(format, session.graph(), &result, paths, &config.render)?;
                write!(output, "{text}")?;
            }
            Err(e) => report_user_error(e, output)?,
        },
        ReplCommand::Edges => {
            for edge in session.edges() {
                writeln!(output, "{}", render::edge_line(edge))?;
            }
        }
        ReplCommand::Nodes => {
            for node in session.nodes() {
                writeln!(output, "{node}")?;
            }
        }
        ReplCommand::Help => write!(output, "{HELP}")?,
        ReplCommand::Quit => return Ok(Flow::Quit),
    }

    Ok(Flow::Continue)
}

/// Print recoverable errors, hand internal faults back to the caller
fn report_user_error<W: Write>(error: GraphError, output: &mut W) -> Result<(), ReplError> {
    if error.is_user_error() {
        writeln!(output, "error: {error}")?;
        Ok(())
    } else {
        Err(error.into())
    }
}
