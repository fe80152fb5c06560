//! Versioned on-disk schemas.
//!
//! # Graph snapshot (`kind = "training-graph"`, version 1)
//!
//! ```json
//! {
//!   "format_version": 1,
//!   "kind": "training-graph",
//!   "nodes": [ { "id": "21529183", "lon": -2.9851, "lat": 56.4591 }, … ],
//!   "edges": [ { "a": "21529183", "b": "21529183-split-0",
//!                "x": 41.2, "y": 88.7, "xy": 97.8 }, … ]
//! }
//! ```
//!
//! Nodes and edges are written in graph insertion order and replayed in the
//! same order on load, which reproduces node order and every adjacency list
//! exactly.
//!
//! # Path corpus (`kind = "training-paths"`, version 1)
//!
//! ```json
//! { "format_version": 1, "kind": "training-paths",
//!   "paths": [ ["A", "B"], ["A", "B", "C"], … ] }
//! ```

use serde::{Deserialize, Serialize};

use tp_core::{CacheKind, Distance, GeographicCoords, NodeKey};
use tp_graph::TrainingGraph;
use tp_paths::TrainingPath;

use crate::store::CacheCodec;
use crate::{CacheError, CacheResult};

pub const GRAPH_FORMAT_VERSION: u32 = 1;
pub const PATHS_FORMAT_VERSION: u32 = 1;

const GRAPH_KIND: &str = "training-graph";
const PATHS_KIND: &str = "training-paths";

// ── Graph snapshot ────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NodeRecord {
    pub id:  String,
    pub lon: f64,
    pub lat: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EdgeRecord {
    pub a:  String,
    pub b:  String,
    pub x:  f64,
    pub y:  f64,
    pub xy: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GraphSnapshot {
    pub format_version: u32,
    pub kind:           String,
    pub nodes:          Vec<NodeRecord>,
    pub edges:          Vec<EdgeRecord>,
}

impl GraphSnapshot {
    pub fn from_graph(graph: &TrainingGraph) -> Self {
        let nodes = graph
            .nodes()
            .iter()
            .map(|n| NodeRecord {
                id:  n.key.as_str().to_owned(),
                lon: n.position.lon(),
                lat: n.position.lat(),
            })
            .collect();

        let edges = graph
            .edges()
            .iter()
            .map(|e| EdgeRecord {
                a:  graph.node(e.a).key.as_str().to_owned(),
                b:  graph.node(e.b).key.as_str().to_owned(),
                x:  e.distance.x,
                y:  e.distance.y,
                xy: e.distance.xy,
            })
            .collect();

        Self { format_version: GRAPH_FORMAT_VERSION, kind: GRAPH_KIND.to_owned(), nodes, edges }
    }

    /// Rebuild the graph, validating every coordinate and distance.
    pub fn into_graph(self) -> CacheResult<TrainingGraph> {
        check_header(self.format_version, GRAPH_FORMAT_VERSION, &self.kind, GRAPH_KIND)?;

        let mut graph = TrainingGraph::with_capacity(self.nodes.len(), self.edges.len());
        for n in self.nodes {
            if graph.contains_node(&n.id) {
                return Err(CacheError::DuplicateNode(n.id));
            }
            let pos = GeographicCoords::new(n.lon, n.lat)?;
            graph.add_node(NodeKey::from(n.id), pos)?;
        }
        for e in self.edges {
            let d = Distance::new(e.x, e.y, e.xy)?;
            graph.add_edge_by_key(&e.a, &e.b, d)?;
        }
        Ok(graph)
    }
}

// ── Path corpus ───────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PathCorpus {
    pub format_version: u32,
    pub kind:           String,
    pub paths:          Vec<Vec<String>>,
}

impl PathCorpus {
    pub fn from_paths(paths: &[TrainingPath]) -> Self {
        let paths = paths
            .iter()
            .map(|p| p.nodes().iter().map(|k| k.as_str().to_owned()).collect())
            .collect();
        Self { format_version: PATHS_FORMAT_VERSION, kind: PATHS_KIND.to_owned(), paths }
    }

    /// Rebuild the corpus; any path shorter than two nodes is rejected.
    pub fn into_paths(self) -> CacheResult<Vec<TrainingPath>> {
        check_header(self.format_version, PATHS_FORMAT_VERSION, &self.kind, PATHS_KIND)?;
        self.paths
            .into_iter()
            .map(|p| TrainingPath::new(p.into_iter().map(NodeKey::from).collect()).map_err(CacheError::from))
            .collect()
    }
}

fn check_header(found_version: u32, expected_version: u32, found_kind: &str, expected_kind: &'static str) -> CacheResult<()> {
    if found_kind != expected_kind {
        return Err(CacheError::WrongKind { found: found_kind.to_owned(), expected: expected_kind });
    }
    if found_version != expected_version {
        return Err(CacheError::UnsupportedVersion { found: found_version, expected: expected_version });
    }
    Ok(())
}

// ── Codecs ────────────────────────────────────────────────────────────────────

/// [`CacheCodec`] for [`TrainingGraph`] via [`GraphSnapshot`].
#[derive(Debug)]
pub struct GraphCodec;

impl CacheCodec for GraphCodec {
    type Value = TrainingGraph;
    const KIND: CacheKind = CacheKind::Graph;

    fn encode(value: &TrainingGraph) -> CacheResult<Vec<u8>> {
        Ok(serde_json::to_vec(&GraphSnapshot::from_graph(value))?)
    }

    fn decode(bytes: &[u8]) -> CacheResult<TrainingGraph> {
        serde_json::from_slice::<GraphSnapshot>(bytes)?.into_graph()
    }
}

/// [`CacheCodec`] for a path corpus via [`PathCorpus`].
#[derive(Debug)]
pub struct PathCodec;

impl CacheCodec for PathCodec {
    type Value = Vec<TrainingPath>;
    const KIND: CacheKind = CacheKind::Paths;

    fn encode(value: &Vec<TrainingPath>) -> CacheResult<Vec<u8>> {
        Ok(serde_json::to_vec(&PathCorpus::from_paths(value))?)
    }

    fn decode(bytes: &[u8]) -> CacheResult<Vec<TrainingPath>> {
        serde_json::from_slice::<PathCorpus>(bytes)?.into_paths()
    }
}
