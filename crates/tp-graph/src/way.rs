//! Way geometry and the external query seam.
//!
//! Resolving a query string into ways is the job of an external map-data
//! service.  The builder only ever sees the result: a list of [`Way`]s, each
//! an ordered list of [`WayNode`]s.  [`WaySource`] is the trait at that
//! boundary so the pipeline can be driven by a live service, a CSV extract
//! or an in-memory fixture.

use tp_core::{GeographicCoords, NodeKey, TpResult};

use crate::GraphResult;

/// One node of a way: upstream id plus position.
#[derive(Clone, Debug, PartialEq)]
pub struct WayNode {
    pub key:      NodeKey,
    pub position: GeographicCoords,
}

impl WayNode {
    /// Fails with `InvalidArgument` if either coordinate is not finite.
    pub fn new(id: impl Into<NodeKey>, lon: f64, lat: f64) -> TpResult<Self> {
        Ok(Self { key: id.into(), position: GeographicCoords::new(lon, lat)? })
    }
}

/// An ordered sequence of nodes describing one road segment.
#[derive(Clone, Debug, PartialEq)]
pub struct Way {
    pub id:    String,
    pub nodes: Vec<WayNode>,
}

impl Way {
    pub fn new(id: impl Into<String>, nodes: Vec<WayNode>) -> Self {
        Self { id: id.into(), nodes }
    }
}

/// Resolves an opaque query string into ways.
///
/// Implementations own query syntax, networking and retries.  Returning an
/// empty list is not an error at this level; the pipeline turns it into
/// `NoDataFound`.
pub trait WaySource {
    fn fetch_ways(&mut self, query: &str) -> GraphResult<Vec<Way>>;
}

/// A [`WaySource`] that serves the same fixed list for every query.
#[derive(Clone, Debug, Default)]
pub struct StaticWaySource {
    ways: Vec<Way>,
}

impl StaticWaySource {
    pub fn new(ways: Vec<Way>) -> Self {
        Self { ways }
    }
}

impl WaySource for StaticWaySource {
    fn fetch_ways(&mut self, _query: &str) -> GraphResult<Vec<Way>> {
        Ok(self.ways.clone())
    }
}
