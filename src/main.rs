use gridpath::{loader, render, Node, PathFinder, WeightedGraph};


const GRAPH_FILE: &str = "test.txt";

fn main() {
    let mut graph: WeightedGraph = WeightedGraph::new();

    // A failed load is reported but not fatal: the search runs on
    // whatever part of the graph made it in
    if let Err(error) = loader::read_edges_from_file(&mut graph, GRAPH_FILE) {
        println!("failed to read {GRAPH_FILE}: {error:?}");
    }

    println!("{}", render::weight_grid(&graph));

    let start = Node::new(0, 0);
    let goal = Node::new(4, 4);

    let path_finder = PathFinder {};
    match path_finder.find_path(start, goal, &graph) {
        Ok(path) => {
            println!("{}", render::path_grid(&graph, &path, start, goal));
            for step in &path {
                println!("x: {}   y: {}", step.x, step.y);
            }
        }
        Err(error) => {
            println!("no path from {start:?} to {goal:?}: {error:?}");
        }
    }
}
