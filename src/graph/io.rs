//! Plain-text graph format
//!
//! Whitespace-separated integers: the vertex count `V` and edge count `E`, then
//! exactly `E` triples `from to weight`, each inserted as a directed edge.
//! Line breaks carry no meaning beyond separating tokens.

use std::fs::File;
use std::io::{BufWriter, Read, Write};
use std::path::Path;
use std::str::FromStr;

use crate::graph::{DualGraph, Graph, MutableGraph};
use crate::{Error, Result};

/// Whitespace tokens tagged with their 1-based line number
struct Tokens<'a> {
    inner: Box<dyn Iterator<Item = (usize, &'a str)> + 'a>,
    last_line: usize,
}

impl<'a> Tokens<'a> {
    fn new(text: &'a str) -> Self {
        let inner = text
            .lines()
            .enumerate()
            .flat_map(|(idx, line)| line.split_whitespace().map(move |tok| (idx + 1, tok)));
        Tokens {
            inner: Box::new(inner),
            last_line: 1,
        }
    }

    fn next_value<T: FromStr>(&mut self, what: &str) -> Result<(usize, T)> {
        let (line, token) = self.inner.next().ok_or_else(|| Error::MalformedInput {
            line: self.last_line,
            reason: format!("unexpected end of input, expected {}", what),
        })?;
        self.last_line = line;

        token
            .parse()
            .map(|value| (line, value))
            .map_err(|_| Error::MalformedInput {
                line,
                reason: format!("expected {}, found {:?}", what, token),
            })
    }

    fn remaining(&mut self) -> usize {
        self.inner.by_ref().count()
    }
}

/// Parses a graph from text
pub fn parse_graph(text: &str) -> Result<DualGraph<u32>> {
    let mut tokens = Tokens::new(text);

    let (line, vertex_count) = tokens.next_value::<usize>("vertex count")?;
    if vertex_count == 0 {
        return Err(Error::MalformedInput {
            line,
            reason: "vertex count must be positive".to_string(),
        });
    }
    let (_, edge_count) = tokens.next_value::<usize>("edge count")?;

    let mut graph = DualGraph::new(vertex_count).map_err(|err| match err {
        Error::InvalidParameter(reason) => Error::MalformedInput { line, reason },
        other => other,
    })?;
    for i in 0..edge_count {
        let (line, from) = tokens.next_value::<usize>("source vertex")?;
        let (_, to) = tokens.next_value::<usize>("target vertex")?;
        let (_, weight) = tokens.next_value::<u32>("non-negative weight")?;

        graph.add_edge(from, to, weight).map_err(|err| match err {
            Error::OutOfRange { vertex, vertex_count } => Error::MalformedInput {
                line,
                reason: format!(
                    "edge {} ({} {} {}) uses vertex {} outside 0..{}",
                    i + 1,
                    from,
                    to,
                    weight,
                    vertex,
                    vertex_count
                ),
            },
            other => other,
        })?;
    }

    let extra = tokens.remaining();
    if extra > 0 {
        log::warn!("Ignoring {} tokens after the last declared edge", extra);
    }

    log::info!(
        "Loaded graph: {} vertices, {} declared edges, {} distinct",
        vertex_count,
        edge_count,
        graph.edge_count()
    );

    Ok(graph)
}

/// Reads a graph from any reader
pub fn read_graph<R: Read>(mut reader: R) -> Result<DualGraph<u32>> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;
    let text = String::from_utf8(bytes).map_err(|err| {
        let valid = &err.as_bytes()[..err.utf8_error().valid_up_to()];
        Error::MalformedInput {
            line: 1 + valid.iter().filter(|&&b| b == b'\n').count(),
            reason: "input is not valid UTF-8".to_string(),
        }
    })?;
    parse_graph(&text)
}

/// Reads a graph from a file
pub fn read_graph_file<P: AsRef<Path>>(path: P) -> Result<DualGraph<u32>> {
    let path = path.as_ref();
    log::debug!("Reading graph from {}", path.display());
    read_graph(File::open(path)?)
}

/// Writes a graph in the format accepted by [`parse_graph`]
pub fn write_graph<W: Write>(graph: &DualGraph<u32>, mut writer: W) -> Result<()> {
    writeln!(writer, "{} {}", graph.vertex_count(), graph.edge_count())?;
    for (from, to, weight) in graph.edges() {
        writeln!(writer, "{} {} {}", from, to, weight)?;
    }
    writer.flush()?;
    Ok(())
}

/// Writes a graph to a file, replacing it if it exists
pub fn write_graph_file<P: AsRef<Path>>(graph: &DualGraph<u32>, path: P) -> Result<()> {
    let file = File::create(path.as_ref())?;
    write_graph(graph, BufWriter::new(file))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_graph() {
        let graph = parse_graph("3 3\n0 1 4\n0 2 1\n2 1 1\n").unwrap();
        assert_eq!(graph.vertex_count(), 3);
        assert_eq!(graph.edge_count(), 3);
        assert_eq!(graph.get_edge_weight(2, 1), Some(1));
    }

    #[test]
    fn test_tokens_may_span_lines_freely() {
        let graph = parse_graph("2\n1 0 1\n5").unwrap();
        assert_eq!(graph.get_edge_weight(0, 1), Some(5));
    }

    #[test]
    fn test_missing_triple_reports_line() {
        let err = parse_graph("3 2\n0 1 4\n").unwrap_err();
        match err {
            Error::MalformedInput { line, reason } => {
                assert_eq!(line, 2);
                assert!(reason.contains("source vertex"), "{}", reason);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_negative_weight_is_malformed() {
        let err = parse_graph("2 1\n0 1 -3\n").unwrap_err();
        assert!(matches!(err, Error::MalformedInput { line: 2, .. }));
    }

    #[test]
    fn test_out_of_range_vertex_is_malformed() {
        let err = parse_graph("2 1\n0 2 3\n").unwrap_err();
        assert!(matches!(err, Error::MalformedInput { line: 2, .. }));
    }

    #[test]
    fn test_zero_vertices_is_malformed() {
        assert!(matches!(parse_graph("0 0"), Err(Error::MalformedInput { line: 1, .. })));
    }

    #[test]
    fn test_huge_vertex_count_is_malformed() {
        for text in ["2305843009213693952 0", "3000000000 0\n"] {
            assert!(matches!(parse_graph(text), Err(Error::MalformedInput { line: 1, .. })));
        }
    }

    #[test]
    fn test_invalid_utf8_is_malformed() {
        let bytes: &[u8] = b"2 1\n0 1 \xff\n";
        let err = read_graph(bytes).unwrap_err();
        assert!(matches!(err, Error::MalformedInput { line: 2, .. }), "{}", err);
    }

    #[test]
    fn test_write_then_parse_keeps_edges() {
        let graph = DualGraph::from_edges(4, [(0, 3, 9), (3, 1, 0), (1, 2, 5)]).unwrap();
        let mut buffer = Vec::new();
        write_graph(&graph, &mut buffer).unwrap();

        let text = String::from_utf8(buffer).unwrap();
        assert_eq!(text, "4 3\n0 3 9\n1 2 5\n3 1 0\n");
        let reloaded = parse_graph(&text).unwrap();
        assert_eq!(reloaded.edges().collect::<Vec<_>>(), graph.edges().collect::<Vec<_>>());
    }
}
