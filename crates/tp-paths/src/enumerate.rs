//! Depth-bounded breadth-first path enumeration.
//!
//! # Ordering
//!
//! The corpus order is fully determined by the graph:
//!
//! 1. Sources are visited in [`SourceOrder`] (node insertion order by
//!    default, which the graph and its cache snapshot both preserve).
//! 2. Within one source, paths appear in BFS discovery order: by hop count,
//!    and within a hop count by the neighbour order of the previous level.
//!
//! Because BFS reaches every node first along a minimum-hop walk and records
//! a single parent per node, each reachable node contributes exactly one
//! path per source.

use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use tp_core::{NodeIdx, ProgressObserver, TpError};
use tp_graph::TrainingGraph;

use crate::path::TrainingPath;
use crate::PathResult;

/// Hop limit used when none is configured.
pub const DEFAULT_DEPTH_LIMIT: usize = 40;

/// Order in which source nodes are enumerated.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
pub enum SourceOrder {
    /// Graph insertion order.
    #[default]
    Insertion,
    /// Lexicographic order of node keys.
    ByKey,
}

/// Generates the training-path corpus for a graph.
///
/// The graph is borrowed immutably for the whole run.
#[derive(Clone, Debug)]
pub struct PathEnumerator {
    depth_limit: usize,
    order:       SourceOrder,
}

impl Default for PathEnumerator {
    fn default() -> Self {
        Self { depth_limit: DEFAULT_DEPTH_LIMIT, order: SourceOrder::Insertion }
    }
}

impl PathEnumerator {
    /// Fails with `InvalidArgument` for a zero depth limit.
    pub fn new(depth_limit: usize) -> PathResult<Self> {
        if depth_limit == 0 {
            return Err(TpError::InvalidArgument("depth_limit must be at least 1".into()).into());
        }
        Ok(Self { depth_limit, ..Self::default() })
    }

    pub fn with_order(mut self, order: SourceOrder) -> Self {
        self.order = order;
        self
    }

    pub fn depth_limit(&self) -> usize {
        self.depth_limit
    }

    /// Enumerate paths from every node of `graph`.
    pub fn enumerate<O: ProgressObserver>(&self, graph: &TrainingGraph, observer: &mut O) -> Vec<TrainingPath> {
        let sources = self.sources(graph);
        let total = sources.len();
        let mut scratch = Bfs::new(graph.node_count());
        let mut paths = Vec::new();

        for (i, &source) in sources.iter().enumerate() {
            scratch.run(graph, source, self.depth_limit);
            scratch.materialize(graph, &mut paths);
            observer.on_source_enumerated(i + 1, total, paths.len());
        }

        log::debug!(
            "enumerated {} paths from {total} sources (depth limit {})",
            paths.len(),
            self.depth_limit
        );
        paths
    }

    /// Paths from a single source node, in discovery order.
    pub fn paths_from(&self, graph: &TrainingGraph, source: NodeIdx) -> Vec<TrainingPath> {
        let mut scratch = Bfs::new(graph.node_count());
        let mut paths = Vec::new();
        scratch.run(graph, source, self.depth_limit);
        scratch.materialize(graph, &mut paths);
        paths
    }

    fn sources(&self, graph: &TrainingGraph) -> Vec<NodeIdx> {
        let mut sources: Vec<NodeIdx> = graph.node_indices().collect();
        if self.order == SourceOrder::ByKey {
            sources.sort_by(|&a, &b| graph.node(a).key.cmp(&graph.node(b).key));
        }
        sources
    }
}

/// Shuffle a corpus deterministically.
pub fn shuffle_paths(paths: &mut [TrainingPath], seed: u64) {
    let mut rng = SmallRng::seed_from_u64(seed);
    paths.shuffle(&mut rng);
}

// ── BFS internals ─────────────────────────────────────────────────────────────

/// Reusable BFS buffers.  `seen` holds the run number that last visited a
/// node, so nothing needs clearing between sources.
struct Bfs {
    parent: Vec<NodeIdx>,
    seen:   Vec<u32>,
    run:    u32,
    /// Nodes in discovery order, source first.
    order:  Vec<NodeIdx>,
}

impl Bfs {
    fn new(node_count: usize) -> Self {
        Self {
            parent: vec![NodeIdx::INVALID; node_count],
            seen:   vec![0; node_count],
            run:    0,
            order:  Vec::new(),
        }
    }

    fn run(&mut self, graph: &TrainingGraph, source: NodeIdx, depth_limit: usize) {
        self.run += 1;
        self.order.clear();

        self.seen[source.index()] = self.run;
        self.parent[source.index()] = NodeIdx::INVALID;
        self.order.push(source);

        // Level-synchronous: `order[level_start..]` is the frontier.
        let mut level_start = 0;
        for _ in 0..depth_limit {
            let level_end = self.order.len();
            if level_start == level_end {
                break;
            }
            for i in level_start..level_end {
                let node = self.order[i];
                for next in graph.neighbors(node) {
                    if self.seen[next.index()] != self.run {
                        self.seen[next.index()] = self.run;
                        self.parent[next.index()] = node;
                        self.order.push(next);
                    }
                }
            }
            level_start = level_end;
        }
    }

    /// Append one path per discovered node, skipping the source itself.
    fn materialize(&self, graph: &TrainingGraph, out: &mut Vec<TrainingPath>) {
        for &target in self.order.iter().skip(1) {
            let mut walk = Vec::new();
            let mut cur = target;
            while cur != NodeIdx::INVALID {
                walk.push(graph.node(cur).key.clone());
                cur = self.parent[cur.index()];
            }
            walk.reverse();
            // At least source and target, so construction cannot fail.
            if let Ok(path) = TrainingPath::new(walk) {
                out.push(path);
            }
        }
    }
}
