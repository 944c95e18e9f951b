use crate::errors::PathPlannerError;
use crate::geometry::manhattan_distance;
use crate::grid::{Node, WeightedGraph};
use super::{trace_path, GraphNodeMap};
use super::priority_queue::PriorityQueue;

use std::fmt::Debug;
use num_traits::PrimInt;
use indexmap::map::Entry::{Occupied, Vacant};



/// A* search over a weighted grid
/// https://en.wikipedia.org/wiki/A*_search_algorithm
pub struct PathFinder {}

impl PathFinder {

    /// Find a lowest-cost path from start to goal on the graph
    ///
    /// The returned path is ordered goal-first, start-last; reverse it
    /// for start-to-goal order. When start equals goal the path is the
    /// single node. An unreachable goal returns
    /// `PathPlannerError::NoPathFound`.
    ///
    /// Contract notes:
    /// - The loop stops as soon as the goal is popped from the
    ///   frontier, not when the whole frontier is settled. With the
    ///   non-negative weights this crate loads, the popped cost is
    ///   minimal.
    /// - Grid-adjacent nodes without a declared edge weight are not
    ///   traversable; the search skips them.
    pub fn find_path<W>(&self, start: Node, goal: Node, graph: &WeightedGraph<W>) -> Result<Vec<Node>, PathPlannerError>
    where
        W: PrimInt + Debug,
    {

        let (node_map, goal_index) = self.explore(start, goal, graph);

        // Trace the chain of predecessors that reached the goal
        match goal_index {
            Some(goal_index) => {
                let path = trace_path(&node_map, goal_index)?;
                Ok(path)
            }
            None => Err(PathPlannerError::NoPathFound)
        }
    }


    /// Expand the frontier until the goal is popped or the frontier runs dry
    /// Returns the map of nodes with their best known costs along with the
    /// index of the goal node, if it was reached
    fn explore<W>(&self, start: Node, goal: Node, graph: &WeightedGraph<W>) -> (GraphNodeMap<Node, W>, Option<usize>)
    where
        W: PrimInt + Debug,
    {
        // Frontier of nodes pending expansion, cheapest estimate first
        let mut queue: PriorityQueue<Node, W> = PriorityQueue::new();

        // Best known costs from the start, plus the predecessor that
        // achieved them. The tuple is (parent_index, cost); the start
        // node's parent is usize::MAX to mark it has no parent.
        let mut visited: GraphNodeMap<Node, W> = GraphNodeMap::default();

        visited.insert_full(start, (usize::MAX, W::zero()));
        queue.put(start, W::zero());

        while let Some(current) = queue.pop_min() {

            // Early exit: the first time the goal leaves the frontier,
            // the search is done and the rest of the queue is discarded
            if current == goal {
                let (index, _, _) = visited.get_full(&current).unwrap();
                return (visited, Some(index));
            }

            // Anything popped from the queue was inserted here first
            let (index, _, &(_, current_cost)) = visited.get_full(&current).unwrap();

            for neighbor in graph.neighbors(current) {

                // Grid adjacency does not imply connectivity: without a
                // declared edge the neighbor cannot be stepped onto
                let Some(edge_weight) = graph.weight(current, neighbor) else {
                    continue;
                };

                let new_cost = current_cost + edge_weight;

                match visited.entry(neighbor) {
                    Vacant(e) => {
                        // First time this neighbor is seen
                        e.insert((index, new_cost));
                    }
                    Occupied(mut e) => {
                        if e.get().1 > new_cost {
                            // Found a cheaper way to this neighbor
                            e.insert((index, new_cost));
                        } else {
                            // The existing path is better, do nothing
                            continue;
                        }
                    }
                }

                // Estimate is measured between the current node and the
                // neighbor, a constant grid step, so the frontier orders
                // like Dijkstra with a uniform offset
                let h = manhattan_distance(current.x, current.y, neighbor.x, neighbor.y);
                let h = W::from(h).unwrap_or_else(W::zero);

                queue.put(neighbor, new_cost + h);
            }
        }

        (visited, None)
    }
}
