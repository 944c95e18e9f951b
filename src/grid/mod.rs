use crate::collections::{FxIndexMap, FxIndexSet};


/// Cell of the grid, identified by its integer coordinates
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Node {
    pub x: i32,
    pub y: i32,
}

impl Node {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Normalize an unordered node pair into a canonical key
/// Looking up (a, b) and (b, a) lands on the same entry
fn edge_key(a: Node, b: Node) -> (Node, Node) {
    if a <= b { (a, b) } else { (b, a) }
}


/// Rectangular grid with explicit edge weights between adjacent cells
///
/// Edges are logically undirected: the weight between two nodes is the
/// same in both directions. Grid bounds are derived from the endpoints
/// of the loaded edges, one more than the largest coordinate seen.
/// The first edge added between a pair of nodes wins; later duplicates
/// are ignored.
#[derive(Debug)]
pub struct WeightedGraph<W = i32> {
    edges: FxIndexMap<(Node, Node), W>,
    nodes: FxIndexSet<Node>,
    width: i32,
    height: i32,
}

impl<W> Default for WeightedGraph<W> {
    fn default() -> Self {
        Self {
            edges: FxIndexMap::default(),
            nodes: FxIndexSet::default(),
            width: 0,
            height: 0,
        }
    }
}

impl<W: Copy> WeightedGraph<W> {

    pub fn new() -> Self {
        Self::default()
    }

    /// Add an edge between two nodes and register its endpoints
    /// Grid bounds grow to cover both endpoints
    pub fn add_edge(&mut self, from: Node, to: Node, weight: W) {
        self.edges.entry(edge_key(from, to)).or_insert(weight);

        for node in [from, to] {
            if self.nodes.insert(node) {
                self.width = self.width.max(node.x + 1);
                self.height = self.height.max(node.y + 1);
            }
        }
    }

    /// Weight of the edge between two nodes, in either endpoint order
    /// None means the nodes are not connected, even if grid-adjacent
    pub fn weight(&self, a: Node, b: Node) -> Option<W> {
        self.edges.get(&edge_key(a, b)).copied()
    }

    /// Grid neighbors of a node, in left / right / up / down order,
    /// skipping coordinates that fall outside the derived bounds.
    /// The fixed order keeps tie-breaking in the search deterministic.
    pub fn neighbors(&self, node: Node) -> impl Iterator<Item = Node> {
        let (width, height) = (self.width, self.height);

        [(-1, 0), (1, 0), (0, -1), (0, 1)]
            .into_iter()
            .map(move |(dx, dy)| Node::new(node.x + dx, node.y + dy))
            .filter(move |n| n.x >= 0 && n.x < width && n.y >= 0 && n.y < height)
    }

    /// Whether the node appeared as an endpoint of any loaded edge
    pub fn has_node(&self, node: Node) -> bool {
        self.nodes.contains(&node)
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    // 3x3 grid with unit weights on every adjacent pair
    fn unit_grid() -> WeightedGraph<i32> {
        let mut graph = WeightedGraph::new();
        for y in 0..3 {
            for x in 0..3 {
                if x + 1 < 3 {
                    graph.add_edge(Node::new(x, y), Node::new(x + 1, y), 1);
                }
                if y + 1 < 3 {
                    graph.add_edge(Node::new(x, y), Node::new(x, y + 1), 1);
                }
            }
        }
        graph
    }

    #[test]
    fn test_bounds_derived_from_edge_endpoints() {
        let mut graph = WeightedGraph::new();
        graph.add_edge(Node::new(0, 0), Node::new(1, 0), 3);
        graph.add_edge(Node::new(4, 2), Node::new(4, 3), 7);

        assert_eq!(graph.width(), 5);
        assert_eq!(graph.height(), 4);
    }

    #[test]
    fn test_weight_is_symmetric() {
        let mut graph = WeightedGraph::new();
        graph.add_edge(Node::new(0, 0), Node::new(1, 0), 5);

        assert_eq!(graph.weight(Node::new(0, 0), Node::new(1, 0)), Some(5));
        assert_eq!(graph.weight(Node::new(1, 0), Node::new(0, 0)), Some(5));
    }

    #[test]
    fn test_weight_missing_edge_is_none() {
        let graph = unit_grid();

        // (0,0) and (2,2) are known nodes but not adjacent in the edge set
        assert_eq!(graph.weight(Node::new(0, 0), Node::new(2, 2)), None);
    }

    #[test]
    fn test_first_edge_between_a_pair_wins() {
        let mut graph = WeightedGraph::new();
        graph.add_edge(Node::new(0, 0), Node::new(1, 0), 2);
        graph.add_edge(Node::new(1, 0), Node::new(0, 0), 9);

        assert_eq!(graph.weight(Node::new(0, 0), Node::new(1, 0)), Some(2));
    }

    #[test]
    fn test_neighbors_order_left_right_up_down() {
        let graph = unit_grid();

        let neighbors: Vec<Node> = graph.neighbors(Node::new(1, 1)).collect();
        assert_eq!(
            neighbors,
            vec![
                Node::new(0, 1), // left
                Node::new(2, 1), // right
                Node::new(1, 0), // up
                Node::new(1, 2), // down
            ]
        );
    }

    #[test]
    fn test_neighbors_clipped_at_bounds() {
        let graph = unit_grid();

        let corner: Vec<Node> = graph.neighbors(Node::new(0, 0)).collect();
        assert_eq!(corner, vec![Node::new(1, 0), Node::new(0, 1)]);

        let far_corner: Vec<Node> = graph.neighbors(Node::new(2, 2)).collect();
        assert_eq!(far_corner, vec![Node::new(1, 2), Node::new(2, 1)]);
    }

    #[test]
    fn test_has_node() {
        let mut graph = WeightedGraph::new();
        graph.add_edge(Node::new(0, 0), Node::new(1, 0), 1);

        assert!(graph.has_node(Node::new(0, 0)));
        assert!(graph.has_node(Node::new(1, 0)));
        assert!(!graph.has_node(Node::new(2, 0)));
    }
}
