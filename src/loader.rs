use crate::errors::GraphLoadError;
use crate::grid::{Node, WeightedGraph};

use std::fs::File;
use std::io::{BufRead, BufReader};


/// Parse one edge description line
/// Format: `toX toY fromX fromY weight`, five space-separated
/// non-negative integers. Anything else is malformed and yields None.
fn parse_edge_line(line: &str) -> Option<(Node, Node, i32)> {
    let fields: Vec<i32> = line
        .split(' ')
        .map(str::parse)
        .collect::<Result<_, _>>()
        .ok()?;

    if fields.len() != 5 || fields.iter().any(|&value| value < 0) {
        return None;
    }

    // The visual field order is to-first; the edge is stored from -> to
    let to = Node::new(fields[0], fields[1]);
    let from = Node::new(fields[2], fields[3]);

    Some((from, to, fields[4]))
}

/// Read edge description lines into the graph, one edge per line
/// Malformed lines are skipped silently. An I/O failure stops reading
/// and leaves the graph with whatever edges were loaded before it.
pub fn read_edges<R: BufRead>(graph: &mut WeightedGraph<i32>, reader: R) -> Result<(), GraphLoadError> {
    for line in reader.lines() {
        let line = line?;

        if let Some((from, to, weight)) = parse_edge_line(&line) {
            graph.add_edge(from, to, weight);
        }
    }

    Ok(())
}

/// Read an edge description file into the graph
pub fn read_edges_from_file(graph: &mut WeightedGraph<i32>, path: &str) -> Result<(), GraphLoadError> {
    let file = File::open(path)?;
    read_edges(graph, BufReader::new(file))
}
