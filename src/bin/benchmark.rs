use indexed_dijkstra::graph::generators::generate_random_digraph;
use indexed_dijkstra::{DijkstraShortestPath, Graph, RunStats};
use log::info;
use serde::Serialize;
use std::env;
use std::time::Instant;

/// Parameters of a benchmark run, overridable by positional arguments:
/// `benchmark [vertices] [edge_factor] [seed] [repetitions]`
#[derive(Debug, Clone, Serialize)]
struct BenchmarkConfig {
    vertices: usize,
    edge_factor: f64,
    max_weight: f64,
    seed: u64,
    repetitions: usize,
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        Self {
            vertices: 100_000,
            edge_factor: 4.0,
            max_weight: 100.0,
            seed: 42,
            repetitions: 5,
        }
    }
}

impl BenchmarkConfig {
    fn from_args(args: &[String]) -> Result<Self, Box<dyn std::error::Error>> {
        let mut config = Self::default();
        if let Some(arg) = args.get(1) {
            config.vertices = arg.parse()?;
        }
        if let Some(arg) = args.get(2) {
            config.edge_factor = arg.parse()?;
        }
        if let Some(arg) = args.get(3) {
            config.seed = arg.parse()?;
        }
        if let Some(arg) = args.get(4) {
            config.repetitions = arg.parse()?;
        }
        Ok(config)
    }
}

#[derive(Debug, Serialize)]
struct BenchmarkReport {
    config: BenchmarkConfig,
    edges: usize,
    reachable: usize,
    run_times_ms: Vec<f64>,
    mean_time_ms: f64,
    stats: RunStats,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let config = BenchmarkConfig::from_args(&args)?;
    info!("Benchmark configuration: {:?}", config);

    let edge_count = (config.edge_factor * config.vertices as f64) as usize;
    let graph = generate_random_digraph(config.vertices, edge_count, config.max_weight, config.seed)?;
    info!(
        "Generated graph with {} vertices and {} edges",
        graph.vertex_count(),
        graph.edge_count()
    );

    let mut run_times_ms = Vec::with_capacity(config.repetitions);
    let mut last = None;
    for _ in 0..config.repetitions.max(1) {
        let start = Instant::now();
        let sp = DijkstraShortestPath::new(&graph, 0)?;
        run_times_ms.push(start.elapsed().as_secs_f64() * 1000.0);
        last = Some(sp);
    }

    let (reachable, stats) = match &last {
        Some(sp) => (
            (0..sp.vertex_count())
                .filter(|&v| sp.has_path_to(v).unwrap_or(false))
                .count(),
            sp.stats(),
        ),
        None => (0, RunStats::default()),
    };

    let mean_time_ms = run_times_ms.iter().sum::<f64>() / run_times_ms.len() as f64;
    let report = BenchmarkReport {
        config,
        edges: graph.edge_count(),
        reachable,
        run_times_ms,
        mean_time_ms,
        stats,
    };

    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
