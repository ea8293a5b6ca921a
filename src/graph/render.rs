use std::fmt::Write;

use crate::graph::{DualGraph, Graph, Weight};

/// Text used for a missing matrix entry
pub const NO_EDGE: &str = "INF";

/// Renders the adjacency matrix, one row per line, `INF` where there is no edge
pub fn render_matrix<W: Weight + std::fmt::Display>(graph: &DualGraph<W>) -> String {
    let mut out = String::from("Adjacency matrix:\n");
    for u in 0..graph.vertex_count() {
        let row = graph.matrix_row(u).unwrap_or_default();
        let cells: Vec<String> = row
            .iter()
            .map(|cell| match cell {
                Some(weight) => weight.to_string(),
                None => NO_EDGE.to_string(),
            })
            .collect();
        let _ = writeln!(out, "{}", cells.join(" "));
    }
    out
}

/// Renders the adjacency lists as `u: (v, w) (v, w) ...`
pub fn render_list<W: Weight + std::fmt::Display>(graph: &DualGraph<W>) -> String {
    let mut out = String::from("Adjacency list:\n");
    for u in 0..graph.vertex_count() {
        let _ = write!(out, "{}:", u);
        for (v, weight) in graph.list().outgoing_edges(u) {
            let _ = write!(out, " ({}, {})", v, weight);
        }
        out.push('\n');
    }
    out
}

/// Both representations, matrix first
pub fn render_graph<W: Weight + std::fmt::Display>(graph: &DualGraph<W>) -> String {
    format!("{}\n{}", render_matrix(graph), render_list(graph))
}
