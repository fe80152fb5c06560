//! Undirected training graph.
//!
//! # Data layout
//!
//! Nodes live in a `Vec` in insertion order and are addressed internally by
//! [`NodeIdx`].  A hash index maps each [`NodeKey`] to its position, and an
//! adjacency list per node holds `(neighbour, edge)` pairs in the order the
//! edges were added.  Both orders are part of the graph's observable
//! behaviour: path enumeration walks nodes and neighbours in exactly this
//! order, and the cache snapshot preserves it.
//!
//! Every node carries a finite position from the moment it is inserted, so an
//! edge can never reference a node without geometry.

use rustc_hash::FxHashMap;

use tp_core::{Distance, EdgeIdx, GeographicCoords, NodeIdx, NodeKey};

use crate::{GraphError, GraphResult};

// ── Node / Edge ───────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct Node {
    pub key:      NodeKey,
    pub position: GeographicCoords,
}

/// Undirected edge between `a` and `b`.  `a` is the endpoint that was
/// supplied first when the edge was added.
#[derive(Clone, Debug, PartialEq)]
pub struct Edge {
    pub a:        NodeIdx,
    pub b:        NodeIdx,
    pub distance: Distance,
}

impl Edge {
    /// The endpoint opposite `n`.
    #[inline]
    pub fn other(&self, n: NodeIdx) -> NodeIdx {
        if self.a == n { self.b } else { self.a }
    }
}

// ── TrainingGraph ─────────────────────────────────────────────────────────────

/// Mutable, undirected graph of road nodes and distance-annotated edges.
#[derive(Clone, Debug, Default)]
pub struct TrainingGraph {
    nodes:     Vec<Node>,
    index:     FxHashMap<NodeKey, NodeIdx>,
    edges:     Vec<Edge>,
    adjacency: Vec<Vec<(NodeIdx, EdgeIdx)>>,
}

impl TrainingGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-allocate for the expected number of nodes and edges.
    pub fn with_capacity(nodes: usize, edges: usize) -> Self {
        let mut index = FxHashMap::default();
        index.reserve(nodes);
        Self {
            nodes: Vec::with_capacity(nodes),
            index,
            edges: Vec::with_capacity(edges),
            adjacency: Vec::with_capacity(nodes),
        }
    }

    // ── Dimensions ────────────────────────────────────────────────────────

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    // ── Lookup ────────────────────────────────────────────────────────────

    pub fn contains_node(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    pub fn idx_of(&self, key: &str) -> Option<NodeIdx> {
        self.index.get(key).copied()
    }

    /// # Panics
    /// Panics if `idx` was not issued by this graph.
    #[inline]
    pub fn node(&self, idx: NodeIdx) -> &Node {
        &self.nodes[idx.index()]
    }

    pub fn position(&self, key: &str) -> Option<GeographicCoords> {
        self.idx_of(key).map(|idx| self.nodes[idx.index()].position)
    }

    /// All nodes in insertion order.
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Index of every node, in insertion order.
    pub fn node_indices(&self) -> impl Iterator<Item = NodeIdx> + '_ {
        (0..self.nodes.len()).filter_map(|i| NodeIdx::try_from(i).ok())
    }

    /// All edges in insertion order.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Neighbours of `idx` in edge-insertion order.
    #[inline]
    pub fn neighbors(&self, idx: NodeIdx) -> impl Iterator<Item = NodeIdx> + '_ {
        self.adjacency[idx.index()].iter().map(|&(n, _)| n)
    }

    pub fn degree(&self, idx: NodeIdx) -> usize {
        self.adjacency[idx.index()].len()
    }

    pub fn edge_between(&self, a: NodeIdx, b: NodeIdx) -> Option<&Edge> {
        self.adjacency
            .get(a.index())?
            .iter()
            .find(|&&(n, _)| n == b)
            .map(|&(_, e)| &self.edges[e.index()])
    }

    // ── Mutation ──────────────────────────────────────────────────────────

    /// Insert a node, or return the existing index if `key` is already
    /// present.  An existing node keeps its original position.
    ///
    /// Fails with [`GraphError::Capacity`] once every `NodeIdx` below the
    /// `INVALID` sentinel is taken.
    pub fn add_node(&mut self, key: NodeKey, position: GeographicCoords) -> GraphResult<NodeIdx> {
        if let Some(&idx) = self.index.get(&key) {
            return Ok(idx);
        }
        let idx = NodeIdx::try_from(self.nodes.len())
            .ok()
            .filter(|&i| i != NodeIdx::INVALID)
            .ok_or(GraphError::Capacity("nodes"))?;
        self.index.insert(key.clone(), idx);
        self.nodes.push(Node { key, position });
        self.adjacency.push(Vec::new());
        Ok(idx)
    }

    /// Connect `a` and `b`.
    ///
    /// - Self-loops are ignored and return `Ok(None)`.
    /// - If the pair is already connected (in either direction) the stored
    ///   distance is replaced and the existing edge index is returned.
    pub fn add_edge(&mut self, a: NodeIdx, b: NodeIdx, distance: Distance) -> GraphResult<Option<EdgeIdx>> {
        for n in [a, b] {
            if n.index() >= self.nodes.len() {
                return Err(GraphError::InvalidIndex(n));
            }
        }
        if a == b {
            return Ok(None);
        }

        if let Some(&(_, e)) = self.adjacency[a.index()].iter().find(|&&(n, _)| n == b) {
            self.edges[e.index()].distance = distance;
            return Ok(Some(e));
        }

        let e = EdgeIdx::try_from(self.edges.len())
            .ok()
            .filter(|&i| i != EdgeIdx::INVALID)
            .ok_or(GraphError::Capacity("edges"))?;
        self.edges.push(Edge { a, b, distance });
        self.adjacency[a.index()].push((b, e));
        self.adjacency[b.index()].push((a, e));
        Ok(Some(e))
    }

    /// [`add_edge`](Self::add_edge) addressed by node keys.
    pub fn add_edge_by_key(&mut self, a: &str, b: &str, distance: Distance) -> GraphResult<Option<EdgeIdx>> {
        let ia = self.idx_of(a).ok_or_else(|| GraphError::UnknownNode(a.to_owned()))?;
        let ib = self.idx_of(b).ok_or_else(|| GraphError::UnknownNode(b.to_owned()))?;
        self.add_edge(ia, ib, distance)
    }
}

/// Structural equality: same nodes (keys and positions) in the same order and
/// the same edges with the same distances.
impl PartialEq for TrainingGraph {
    fn eq(&self, other: &Self) -> bool {
        self.nodes == other.nodes && self.edges == other.edges
    }
}
