use colored::*;
use dual_sssp::graph::{DualGraph, Graph, MutableGraph};
use dual_sssp::graph::render::render_graph;
use dual_sssp::{shortest_path, Representation};

fn main() {
    // Create a simple directed graph with 5 vertices (0-4)
    let mut graph: DualGraph<u32> = DualGraph::new(5).unwrap();

    // Add edges with weights
    let edges = [
        (0, 1, 10), (0, 2, 5), (1, 3, 1), (2, 1, 3), (2, 3, 9),
        (2, 4, 2), (3, 4, 4), (4, 0, 7), (4, 3, 6),
    ];
    for (u, v, w) in edges {
        graph.add_edge(u, v, w).unwrap();
    }

    println!("{}", "--- Graph ---".bold());
    println!("{} vertices, {} edges\n", graph.vertex_count(), graph.edge_count());
    print!("{}", render_graph(&graph));

    for representation in Representation::ALL {
        println!("\n{}", format!("--- Dijkstra ({}) from 0 ---", representation).bold());
        for target in 0..graph.vertex_count() {
            let query = shortest_path(&graph, representation, 0, target).unwrap();
            match (query.distance, query.path) {
                (Some(distance), Some(path)) => {
                    let hops: Vec<String> = path.iter().map(|v| v.to_string()).collect();
                    println!(
                        "  {} {:>3}  via {}  ({:.2?})",
                        format!("to {}:", target).green(),
                        distance,
                        hops.join(" -> ").cyan(),
                        query.elapsed
                    );
                }
                _ => println!("  {}", format!("to {}: unreachable", target).red()),
            }
        }
    }
}
