//! The `TrainingPipeline` struct and its two cached stages.

use tp_cache::{CacheKey, GraphCache, PathCache};
use tp_core::config::validate_query;
use tp_core::{CacheKind, PipelineConfig, ProgressObserver};
use tp_graph::{GraphBuilder, TrainingGraph, WaySource};
use tp_paths::{shuffle_paths, PathEnumerator, TrainingPath};

use crate::{PipelineError, PipelineResult};

/// Output of one full run.
#[derive(Clone, Debug, PartialEq)]
pub struct TrainingData {
    pub graph: TrainingGraph,
    pub paths: Vec<TrainingPath>,
}

// ── TrainingPipeline ──────────────────────────────────────────────────────────

/// Drives the sequential pipeline for one or more queries:
///
/// ```text
/// query ─► graph cache? ─hit──────────────────────────► graph
///               │ miss
///               └─► source.fetch_ways ─► GraphBuilder ─► save ─► graph
///
/// graph ─► path cache? ─hit───────────────────────────► paths
///               │ miss
///               └─► PathEnumerator (─► shuffle) ─► save ─► paths
/// ```
///
/// Every stage runs to completion or fails; nothing is retried.
pub struct TrainingPipeline<S: WaySource> {
    config:     PipelineConfig,
    source:     S,
    graphs:     GraphCache,
    paths:      PathCache,
    enumerator: PathEnumerator,
}

impl<S: WaySource> TrainingPipeline<S> {
    /// Validate `config` and open both caches.  No I/O happens here; the
    /// cache directories are created on the first save.
    pub fn new(config: PipelineConfig, source: S) -> PipelineResult<Self> {
        config.validate()?;
        let graphs = GraphCache::new(config.graph_cache_dir.clone())?;
        let paths = PathCache::new(config.path_cache_dir.clone())?;
        let enumerator = PathEnumerator::new(config.depth_limit)?;
        Ok(Self { config, source, graphs, paths, enumerator })
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn graph_cache(&self) -> &GraphCache {
        &self.graphs
    }

    pub fn path_cache(&self) -> &PathCache {
        &self.paths
    }

    /// Cache key for the graph built from `query`.
    pub fn graph_key(&self, query: &str) -> CacheKey {
        if self.config.parameterised_cache_keys {
            CacheKey::for_query_with(query, &[
                ("max_dist_between_nodes_m", self.config.max_dist_between_nodes_m.to_string()),
            ])
        } else {
            CacheKey::for_query(query)
        }
    }

    /// Cache key for the path corpus generated from `query`.
    pub fn paths_key(&self, query: &str) -> CacheKey {
        if self.config.parameterised_cache_keys {
            let mut params = vec![
                ("max_dist_between_nodes_m", self.config.max_dist_between_nodes_m.to_string()),
                ("depth_limit", self.config.depth_limit.to_string()),
            ];
            if let Some(seed) = self.config.shuffle_seed {
                params.push(("shuffle_seed", seed.to_string()));
            }
            CacheKey::for_query_with(query, &params)
        } else {
            CacheKey::for_query(query)
        }
    }

    /// Return the graph for `query`, from the cache if possible.
    ///
    /// On a miss (or with `regenerate_graph`) the ways are fetched from the
    /// source, built into a graph and saved.  Zero ways is
    /// [`PipelineError::NoDataFound`] and nothing is written.
    pub fn training_graph<O: ProgressObserver>(
        &mut self,
        query:    &str,
        observer: &mut O,
    ) -> PipelineResult<TrainingGraph> {
        validate_query(query)?;
        let key = self.graph_key(query);

        if !self.config.regenerate_graph {
            if let Some(graph) = self.graphs.load(&key)? {
                log::info!(
                    "Using cached training graph: {} nodes, {} edges",
                    graph.node_count(),
                    graph.edge_count()
                );
                observer.on_cache_hit(CacheKind::Graph);
                return Ok(graph);
            }
        }

        log::info!("Fetching ways for query");
        let ways = self.source.fetch_ways(query)?;
        if ways.is_empty() {
            return Err(PipelineError::NoDataFound { query: query.to_owned() });
        }
        log::info!("Fetched {} ways", ways.len());
        observer.on_ways_fetched(ways.len());

        let mut builder = GraphBuilder::new(self.config.max_dist_between_nodes_m)?;
        builder.build_from_ways(&ways, observer)?;
        let graph = builder.finish();
        log::info!(
            "Built training graph: {} nodes, {} edges",
            graph.node_count(),
            graph.edge_count()
        );

        self.graphs.save(&key, &graph)?;
        observer.on_cache_saved(CacheKind::Graph);
        Ok(graph)
    }

    /// Return the path corpus for `query`, from the cache if possible.
    ///
    /// `graph` is only walked on a miss (or with `regenerate_paths`).
    pub fn training_paths<O: ProgressObserver>(
        &mut self,
        query:    &str,
        graph:    &TrainingGraph,
        observer: &mut O,
    ) -> PipelineResult<Vec<TrainingPath>> {
        validate_query(query)?;
        let key = self.paths_key(query);

        if !self.config.regenerate_paths {
            if let Some(paths) = self.paths.load(&key)? {
                log::info!("Using cached path corpus: {} paths", paths.len());
                observer.on_cache_hit(CacheKind::Paths);
                return Ok(paths);
            }
        }

        log::info!(
            "Enumerating paths from {} nodes (depth limit {})",
            graph.node_count(),
            self.enumerator.depth_limit()
        );
        let mut paths = self.enumerator.enumerate(graph, observer);
        if let Some(seed) = self.config.shuffle_seed {
            log::debug!("shuffling {} paths with seed {seed}", paths.len());
            shuffle_paths(&mut paths, seed);
        }
        log::info!("Generated {} paths", paths.len());

        self.paths.save(&key, &paths)?;
        observer.on_cache_saved(CacheKind::Paths);
        Ok(paths)
    }

    /// Both stages back to back.
    pub fn run<O: ProgressObserver>(&mut self, query: &str, observer: &mut O) -> PipelineResult<TrainingData> {
        let graph = self.training_graph(query, observer)?;
        let paths = self.training_paths(query, &graph, observer)?;
        Ok(TrainingData { graph, paths })
    }
}
