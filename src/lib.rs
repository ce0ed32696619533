//! Build a weighted undirected graph one edge at a time and query
//! single-source shortest paths over it.
//!
//! ```
//! use shortpath::{Distance, Session};
//!
//! let mut session = Session::new();
//! session.add_edge("A", "B", "4").unwrap();
//! session.add_edge("A", "C", "1").unwrap();
//! session.add_edge("C", "B", "1").unwrap();
//!
//! let result = session.query("A").unwrap();
//! assert_eq!(result.distance("B"), Some(Distance::Finite(2)));
//! assert_eq!(result.path("B").unwrap(), ["A", "C", "B"]);
//! ```

pub mod cli;
pub mod collections;
pub mod config;
pub mod errors;
pub mod graph;
pub mod graph_algos;
pub mod render;
pub mod repl;
pub mod session;

pub use config::{Config, OutputFormat};
pub use errors::{ConfigError, GraphError, ReplError, Result};
pub use graph::{Edge, GraphStore, NodeId, Weight};
pub use graph_algos::{compute, Cost, Distance, ShortestPaths};
pub use session::Session;
