//! Text, JSON and Graphviz renderings of a query result.

use crate::config::{OutputFormat, RenderConfig};
use crate::graph::{Edge, GraphStore, Weight};
use crate::graph_algos::{Cost, ShortestPaths};

use petgraph::dot::{Config as DotConfig, Dot};
use petgraph::graph::{NodeIndex, UnGraph};
use petgraph::visit::EdgeRef;
use rustc_hash::{FxHashMap, FxHashSet};
use std::fmt::Write;


/// One accepted edge, `A --(4)--> B`
pub fn edge_line(edge: &Edge) -> String {
    format!("{} --({})--> {}", edge.a, edge.weight, edge.b)
}

/// Render `result` in the requested format
pub fn report(
    format: OutputFormat,
    graph: &GraphStore,
    result: &ShortestPaths,
    with_paths: bool,
    colors: &RenderConfig,
) -> serde_json::Result<String> {
    match format {
        OutputFormat::Text => Ok(text_report(result, with_paths)),
        OutputFormat::Json => json_report(result),
        OutputFormat::Dot => Ok(dot_diagram(graph, result, colors)),
    }
}

/// One `<start> -> <node>: <distance>` line per node, optionally followed by the paths
pub fn text_report(result: &ShortestPaths, with_paths: bool) -> String {
    let start = result.start();
    let mut out = format!("Shortest distances from node {start}:\n");

    for (node, distance) in result.distances() {
        let _ = writeln!(out, "{start} -> {node}: {distance}");
    }

    if with_paths {
        out.push_str("Paths:\n");
        for (node, path) in result.paths() {
            if path.is_empty() {
                let _ = writeln!(out, "{node}: unreachable");
            } else {
                let _ = writeln!(out, "{node}: {}", path.join(" -> "));
            }
        }
    }

    out
}

pub fn json_report(result: &ShortestPaths) -> serde_json::Result<String> {
    serde_json::to_string_pretty(result)
}

/// Undirected Graphviz document of the whole graph
/// Edges used by any reported path are drawn in `path_color`.
pub fn dot_diagram(graph: &GraphStore, result: &ShortestPaths, colors: &RenderConfig) -> String {
    let mut diagram: UnGraph<&str, Weight> = UnGraph::with_capacity(graph.node_count(), graph.edge_count());
    let mut indices: FxHashMap<&str, NodeIndex> = FxHashMap::default();

    for node in graph.nodes() {
        indices.insert(node.as_str(), diagram.add_node(node.as_str()));
    }
    for edge in graph.edges() {
        if let (Some(&a), Some(&b)) = (indices.get(edge.a.as_str()), indices.get(edge.b.as_str())) {
            diagram.add_edge(a, b, edge.weight);
        }
    }

    let on_path = path_edges(result);

    let edge_attrs = |_: &UnGraph<&str, Weight>, e: petgraph::graph::EdgeReference<Weight>| {
        let a = diagram[e.source()];
        let b = diagram[e.target()];
        let highlighted = on_path.contains(&undirected_key(a, b, Cost::from(*e.weight())));
        if highlighted {
            format!("label=\"{}\" color={:?} penwidth=2", e.weight(), colors.path_color)
        } else {
            format!("label=\"{}\" color={:?}", e.weight(), colors.edge_color)
        }
    };
    let node_attrs = |_: &UnGraph<&str, Weight>, (_, name): (NodeIndex, &&str)| {
        format!("label={:?} style=filled fillcolor={:?}", name, colors.node_color)
    };

    let body = Dot::with_attr_getters(
        &diagram,
        &[DotConfig::GraphContentOnly, DotConfig::NodeNoLabel, DotConfig::EdgeNoLabel],
        &edge_attrs,
        &node_attrs,
    );

    let title = format!("Shortest paths from node {}", result.start());
    format!("graph {{\n    label={title:?}\n{body}}}\n")
}

/// (node, node, weight) for every step along every path, endpoint order normalized
fn path_edges(result: &ShortestPaths) -> FxHashSet<(&str, &str, Cost)> {
    result
        .path_steps()
        .filter_map(|(a, b)| {
            let da = result.distance(a)?.finite()?;
            let db = result.distance(b)?.finite()?;
            Some(undirected_key(a, b, db.abs_diff(da)))
        })
        .collect()
}

fn undirected_key<'a>(a: &'a str, b: &'a str, weight: Cost) -> (&'a str, &'a str, Cost) {
    if a <= b { (a, b, weight) } else { (b, a, weight) }
}
