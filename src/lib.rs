//! Grid path planning modules
//!
//! A small weighted-grid model with an A* path finder on top of it.
//! Edge weights are loaded from a line-oriented text description and
//! paths can be rendered as fixed-width character grids for visual
//! inspection.

pub(crate) mod collections;
pub mod errors;
pub mod geometry;
pub mod graph_algos;
pub mod grid;
pub mod loader;
pub mod render;

pub use graph_algos::a_star::PathFinder;
pub use graph_algos::priority_queue::PriorityQueue;
pub use grid::{Node, WeightedGraph};
