//! Incremental graph construction with edge splitting.
//!
//! Each consecutive node pair of a way becomes one edge if the pair is at
//! most `max_dist_m` apart.  Longer segments are cut into
//! `n = ceil(len / max_dist_m)` edges by projecting `n - 1` intermediate
//! points from the first endpoint along the segment's initial bearing:
//!
//! ```text
//!   a ───────────────────────────── b          len = 250 m, max = 100 m
//!   a ──── a-split-0 ──── a-split-1 ──── b     n = 3, step ≈ 83.3 m
//! ```
//!
//! Every edge of the chain stores a [`Distance`] recomputed from the actual
//! projected coordinates, so projection rounding shows up in the stored
//! lengths rather than being hidden behind a uniform step.
//!
//! Both the split decision and `n` allow a relative slack of
//! [`SPLIT_TOLERANCE`], so a segment whose measured length exceeds an exact
//! multiple of the threshold only by rounding is not given an extra edge.
//! "Within the threshold" means [`within_threshold`] throughout.
//!
//! # Synthetic ids
//!
//! Split ids are `"<origin>-split-<n>"`, with `n` drawn from a per-origin
//! counter that only ever increases.  When two ways both split a segment
//! starting at the same node the second chain continues the numbering
//! instead of colliding.  The counter also skips any id already present in
//! the graph, so a loaded graph or an upstream id that happens to look
//! synthetic cannot cause a duplicate.

use rustc_hash::FxHashMap;

use tp_core::config::validate_threshold;
use tp_core::geo::{bearing, decompose, destination_point};
use tp_core::{Distance, NodeKey, ProgressObserver, TpError, TpResult};

use crate::graph::TrainingGraph;
use crate::way::{Way, WayNode};
use crate::GraphResult;

/// Relative slack on the split threshold.  Geodesic lengths carry rounding
/// of a few ulps, so a segment measured at `max_dist_m * (1 + 1e-12)` still
/// counts as within it.
pub const SPLIT_TOLERANCE: f64 = 1e-9;

/// Most edges a single segment may be split into.
pub const MAX_EDGES_PER_SEGMENT: u32 = 1_000_000;

/// `true` if an edge of `xy` metres needs no splitting at `max_dist_m`.
pub fn within_threshold(xy: f64, max_dist_m: f64) -> bool {
    xy <= max_dist_m * (1.0 + SPLIT_TOLERANCE)
}

/// Number of edges a segment of `xy` metres is cut into at `max_dist_m`:
/// `ceil(xy / max_dist_m)`, with the same slack as [`within_threshold`].
///
/// Fails with `InvalidArgument` above [`MAX_EDGES_PER_SEGMENT`].
pub fn split_edge_count(xy: f64, max_dist_m: f64) -> TpResult<u32> {
    let n = (xy / (max_dist_m * (1.0 + SPLIT_TOLERANCE))).ceil().max(1.0);
    if n > f64::from(MAX_EDGES_PER_SEGMENT) {
        return Err(TpError::InvalidArgument(format!(
            "segment of {xy} m needs {n} edges at {max_dist_m} m, limit is {MAX_EDGES_PER_SEGMENT}"
        )));
    }
    Ok(n as u32)
}

/// Build a [`TrainingGraph`] way by way, then call [`finish`](Self::finish).
///
/// # Example
///
/// ```
/// use tp_core::NoopProgress;
/// use tp_graph::{GraphBuilder, Way, WayNode};
///
/// let way = Way::new("1", vec![
///     WayNode::new("a", 0.0, 0.0).unwrap(),
///     WayNode::new("b", 0.0, 0.0017).unwrap(), // ≈ 189 m north
/// ]);
/// let mut b = GraphBuilder::new(100.0).unwrap();
/// b.add_way(&way, &mut NoopProgress).unwrap();
/// let graph = b.finish();
/// assert_eq!(graph.node_count(), 3); // a, a-split-0, b
/// assert_eq!(graph.edge_count(), 2);
/// ```
pub struct GraphBuilder {
    graph:          TrainingGraph,
    max_dist_m:     f64,
    split_counters: FxHashMap<NodeKey, u32>,
}

impl GraphBuilder {
    /// Fails with `InvalidArgument` unless `max_dist_m` is finite and > 0.
    pub fn new(max_dist_m: f64) -> GraphResult<Self> {
        Self::extend(TrainingGraph::new(), max_dist_m)
    }

    /// Continue building on top of an existing graph.
    pub fn extend(graph: TrainingGraph, max_dist_m: f64) -> GraphResult<Self> {
        validate_threshold(max_dist_m)?;
        Ok(Self { graph, max_dist_m, split_counters: FxHashMap::default() })
    }

    /// Consume the builder and return the graph.
    pub fn finish(self) -> TrainingGraph {
        self.graph
    }

    /// Add every way in order, reporting progress after each one.
    ///
    /// An empty slice adds nothing.
    pub fn build_from_ways<O: ProgressObserver>(&mut self, ways: &[Way], observer: &mut O) -> GraphResult<()> {
        let total = ways.len();
        for (i, way) in ways.iter().enumerate() {
            self.add_way(way, observer)?;
            observer.on_way_processed(i + 1, total);
        }
        log::debug!(
            "graph now has {} nodes and {} edges",
            self.graph.node_count(),
            self.graph.edge_count()
        );
        Ok(())
    }

    /// Add the edges of one way, splitting any segment longer than the
    /// threshold.
    pub fn add_way<O: ProgressObserver>(&mut self, way: &Way, observer: &mut O) -> GraphResult<()> {
        if way.nodes.len() < 2 {
            log::debug!("way {} has {} node(s); nothing to add", way.id, way.nodes.len());
            return Ok(());
        }

        for pair in way.nodes.windows(2) {
            let (a, b) = (&pair[0], &pair[1]);
            let d = decompose(a.position, b.position);

            if within_threshold(d.xy, self.max_dist_m) {
                let ia = self.graph.add_node(a.key.clone(), a.position)?;
                let ib = self.graph.add_node(b.key.clone(), b.position)?;
                if self.graph.add_edge(ia, ib, d)?.is_none() {
                    log::trace!("way {}: skipped self-loop at node {}", way.id, a.key);
                }
            } else {
                self.split_segment(a, b, d, observer)?;
            }
        }
        Ok(())
    }

    /// Replace the segment `a`–`b` of length `d.xy` with a chain of
    /// [`split_edge_count`] edges through synthetic nodes.
    pub fn split_segment<O: ProgressObserver>(
        &mut self,
        a:        &WayNode,
        b:        &WayNode,
        d:        Distance,
        observer: &mut O,
    ) -> GraphResult<()> {
        let n = split_edge_count(d.xy, self.max_dist_m)?;
        let step_km = d.xy / f64::from(n) / 1000.0;
        let heading = bearing(a.position, b.position);

        let mut prev = self.graph.add_node(a.key.clone(), a.position)?;
        let mut prev_pos = a.position;

        for _ in 1..n {
            let pos = destination_point(prev_pos, heading, step_km);
            let key = self.next_split_key(&a.key);
            observer.on_split_node(&key);

            let idx = self.graph.add_node(key, pos)?;
            self.graph.add_edge(prev, idx, decompose(prev_pos, pos))?;
            prev = idx;
            prev_pos = pos;
        }

        let end = self.graph.add_node(b.key.clone(), b.position)?;
        self.graph.add_edge(prev, end, decompose(prev_pos, b.position))?;

        log::trace!("split {}-{} ({:.1} m) into {n} edges", a.key, b.key, d.xy);
        Ok(())
    }

    fn next_split_key(&mut self, origin: &NodeKey) -> NodeKey {
        let counter = self.split_counters.entry(origin.clone()).or_insert(0);
        loop {
            let key = NodeKey::split(origin, *counter);
            *counter += 1;
            if !self.graph.contains_node(key.as_str()) {
                return key;
            }
        }
    }
}
