use std::env;

use dual_sssp::benchmark::{compare_representations, ComparisonReport};
use dual_sssp::config::BenchmarkConfig;
use dual_sssp::graph::generators::generate_random_graph;
use dual_sssp::graph::Graph;
use rand::rngs::StdRng;
use rand::SeedableRng;

// Command line flags override the environment: --json, --instances N, --seed N
fn apply_args(config: &mut BenchmarkConfig) -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = env::args().skip(1).collect();
    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--json" => config.json_output = true,
            "--instances" => {
                let value = iter.next().ok_or("--instances needs a value")?;
                config.instances = value.parse()?;
            }
            "--seed" => {
                let value = iter.next().ok_or("--seed needs a value")?;
                config.seed = Some(value.parse()?);
            }
            other => return Err(format!("unknown argument: {}", other).into()),
        }
    }
    config.validate()?;
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let mut config = BenchmarkConfig::from_env()?;
    apply_args(&mut config)?;

    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    if !config.json_output {
        println!("=====================================================");
        println!("Benchmark: Dijkstra over adjacency matrix vs adjacency list");
        println!("{} random queries per graph", config.instances);
        println!("=====================================================");
    }

    let mut reports: Vec<ComparisonReport> = Vec::new();
    for &size in &config.vertex_counts {
        for &density in &config.densities {
            let graph = generate_random_graph(size, density, &mut rng)?;
            if !config.json_output {
                println!(
                    "\nGraph with {} vertices, {} edges ({}% density)",
                    graph.vertex_count(),
                    graph.edge_count(),
                    density
                );
            }

            let report =
                compare_representations(&graph, config.instances, &mut rng)?.with_density(density);
            if !config.json_output {
                println!("  - matrix average: {:.6} s", report.matrix.average.as_secs_f64());
                println!("  - list average:   {:.6} s", report.list.average.as_secs_f64());
                println!("  - list speedup:   {:.2}x", report.list_speedup());
            }
            reports.push(report);
        }
    }

    if config.json_output {
        println!("{}", serde_json::to_string_pretty(&reports)?);
        return Ok(());
    }

    // Print summary table
    println!("\n=====================================================");
    println!("Summary of Results");
    println!("=====================================================");
    println!(
        "{:<10} | {:<8} | {:<8} | {:<15} | {:<15} | {:<10}",
        "Vertices", "Density", "Edges", "Matrix avg (s)", "List avg (s)", "Speedup"
    );
    println!("-----------------------------------------------------------------------------");

    for report in &reports {
        println!(
            "{:<10} | {:<8} | {:<8} | {:<15.6} | {:<15.6} | {:<10.2}",
            report.vertex_count,
            report.density_percent.map_or_else(|| "-".to_string(), |d| format!("{}%", d)),
            report.edge_count,
            report.matrix.average.as_secs_f64(),
            report.list.average.as_secs_f64(),
            report.list_speedup()
        );
    }

    let disagreements: usize = reports.iter().map(|r| r.disagreements).sum();
    if disagreements > 0 {
        println!("\nWARNING: {} queries disagreed between representations", disagreements);
    }

    Ok(())
}
