use crate::grid::{Node, WeightedGraph};

use std::fmt::Display;


// Fixed cell width of the rendered path grid
const CELL_WIDTH: usize = 6;

/// Mark a cell, ignoring coordinates outside the grid
fn mark(rows: &mut [Vec<char>], node: Node, marker: char) {
    if let Some(cell) = rows
        .get_mut(node.y as usize)
        .and_then(|row| row.get_mut(node.x as usize))
    {
        *cell = marker;
    }
}

/// Render a path on the grid as a fixed-width character grid
///
/// `.` unvisited cell, `+` cell on the path, `A` start, `Z` goal.
/// The start and goal markers take precedence over the path marker.
/// Rows are emitted top to bottom, each cell padded to a fixed width.
pub fn path_grid<W: Copy>(graph: &WeightedGraph<W>, path: &[Node], start: Node, goal: Node) -> String {
    let width = graph.width() as usize;
    let height = graph.height() as usize;

    let mut rows = vec![vec!['.'; width]; height];

    for step in path {
        mark(&mut rows, *step, '+');
    }
    mark(&mut rows, start, 'A');
    mark(&mut rows, goal, 'Z');

    let mut out = String::new();
    for row in rows {
        let mut line = String::new();
        for cell in row {
            line.push_str(&format!("{:<CELL_WIDTH$}", cell));
        }
        out.push_str(line.trim_end());
        out.push('\n');
    }

    out
}

fn fmt_weight<W: Display>(weight: Option<W>) -> String {
    match weight {
        Some(weight) => weight.to_string(),
        None => "-".to_string(),
    }
}

/// Render the edge weights of the grid
///
/// Node cells are drawn as `.` with the horizontal edge weights between
/// them; the rows in between carry the vertical edge weights. Missing
/// edges render as `-`.
pub fn weight_grid<W: Copy + Display>(graph: &WeightedGraph<W>) -> String {
    let mut out = String::new();

    for y in 0..graph.height() {
        // Node row: dots separated by horizontal weights
        let mut line = String::new();
        for x in 0..graph.width() {
            line.push_str(&format!("{:<3}", "."));
            if x + 1 < graph.width() {
                let weight = graph.weight(Node::new(x, y), Node::new(x + 1, y));
                line.push_str(&format!("{:<3}", fmt_weight(weight)));
            }
        }
        out.push_str(line.trim_end());
        out.push('\n');

        // Vertical weights down to the next node row
        if y + 1 < graph.height() {
            let mut line = String::new();
            for x in 0..graph.width() {
                let weight = graph.weight(Node::new(x, y), Node::new(x, y + 1));
                line.push_str(&format!("{:<6}", fmt_weight(weight)));
            }
            out.push_str(line.trim_end());
            out.push('\n');
        }
    }

    out
}
