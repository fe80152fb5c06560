//! training_paths — build a road graph and its path corpus for one query.
//!
//! Ways come from a CSV extract (`way_id,node_id,lon,lat`) standing in for
//! a live map-data service.  The query string is still what names the cache
//! entries, so re-running with the same query is served from disk.
//!
//! ```text
//! RUST_LOG=info cargo run -p training_paths -- --ways demos/training_paths/data/dundee_ways.csv
//! ```

mod progress;

use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;

use tp_core::PipelineConfig;
use tp_graph::CsvWaySource;
use tp_pipeline::TrainingPipeline;

use progress::BarProgress;

// ── Constants ─────────────────────────────────────────────────────────────────

/// Highways inside a small bounding box in central Dundee.
const DEFAULT_QUERY: &str = r#"[out:json];
way["highway"](56.459124,-2.985106,56.464221,-2.977424);
(._;>;);
out body;"#;

// ── CLI ───────────────────────────────────────────────────────────────────────

#[derive(Parser)]
#[command(name = "training_paths")]
#[command(about = "Build a split road graph and enumerate its shortest-hop paths")]
struct Cli {
    /// Query string; hashed into the cache keys
    #[arg(default_value = DEFAULT_QUERY)]
    query: String,

    /// CSV extract with columns way_id,node_id,lon,lat
    #[arg(long, default_value = "demos/training_paths/data/dundee_ways.csv")]
    ways: PathBuf,

    /// Longest edge in metres before a segment is split
    #[arg(long, default_value_t = 100.0)]
    max_dist: f64,

    /// Maximum hop count per path
    #[arg(long, default_value_t = 40)]
    depth: usize,

    #[arg(long, default_value = "Saved Training Graphs")]
    graph_cache: PathBuf,

    #[arg(long, default_value = "Saved Generated Graphs")]
    path_cache: PathBuf,

    /// Rebuild the graph even if it is cached
    #[arg(long)]
    regenerate_graph: bool,

    /// Re-enumerate paths even if they are cached
    #[arg(long)]
    regenerate_paths: bool,

    /// Include threshold and depth in the cache keys
    #[arg(long)]
    parameterised_keys: bool,

    /// Shuffle the corpus with this seed
    #[arg(long)]
    shuffle_seed: Option<u64>,

    /// Number of sample paths to print
    #[arg(long, default_value_t = 5)]
    show: usize,
}

impl Cli {
    fn config(&self) -> PipelineConfig {
        PipelineConfig {
            max_dist_between_nodes_m: self.max_dist,
            depth_limit:              self.depth,
            graph_cache_dir:          self.graph_cache.clone(),
            path_cache_dir:           self.path_cache.clone(),
            regenerate_graph:         self.regenerate_graph,
            regenerate_paths:         self.regenerate_paths,
            parameterised_cache_keys: self.parameterised_keys,
            shuffle_seed:             self.shuffle_seed,
        }
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let cli = Cli::parse();

    env_logger::Builder::from_default_env()
        .target(env_logger::Target::Stderr)
        .init();

    println!("=== training_paths ===");
    println!(
        "Ways: {}  |  Max edge: {} m  |  Depth limit: {}",
        cli.ways.display(),
        cli.max_dist,
        cli.depth
    );
    println!();

    let source = CsvWaySource::new(cli.ways.clone());
    let mut pipeline = TrainingPipeline::new(cli.config(), source).context("invalid configuration")?;
    let mut progress = BarProgress::default();

    let t0 = Instant::now();
    let data = pipeline
        .run(&cli.query, &mut progress)
        .with_context(|| format!("generating training data from {}", cli.ways.display()))?;
    let elapsed = t0.elapsed();

    let synthetic = data.graph.nodes().iter().filter(|n| n.key.is_synthetic()).count();
    let longest = data.paths.iter().map(|p| p.hops()).max().unwrap_or(0);

    println!();
    println!("Graph: {} nodes ({synthetic} synthetic), {} edges", data.graph.node_count(), data.graph.edge_count());
    println!("Paths: {} (longest {longest} hops)", data.paths.len());
    println!("Graph key: {}", pipeline.graph_key(&cli.query));
    println!("Elapsed: {:.2?}", elapsed);

    if cli.show > 0 && !data.paths.is_empty() {
        println!();
        for path in data.paths.iter().take(cli.show) {
            println!("  {path}");
        }
    }
    Ok(())
}
