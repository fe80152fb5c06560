//! Progress reporting hooks for graph building and path enumeration.

use std::fmt;

use crate::NodeKey;

/// Which of the two caches an event refers to.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum CacheKind {
    Graph,
    Paths,
}

impl fmt::Display for CacheKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CacheKind::Graph => f.write_str("training graph"),
            CacheKind::Paths => f.write_str("generated paths"),
        }
    }
}

/// Callbacks invoked by the graph builder, the path enumerator and the
/// pipeline at well-defined points.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.  The observer is passed explicitly into
/// every long-running call; nothing in the workspace keeps progress state in
/// a global.
///
/// # Example: progress printer
///
/// ```rust,ignore
/// struct Printer;
///
/// impl ProgressObserver for Printer {
///     fn on_way_processed(&mut self, done: usize, total: usize) {
///         if done % 100 == 0 {
///             println!("{done}/{total} ways");
///         }
///     }
/// }
/// ```
pub trait ProgressObserver {
    /// The way source returned `total` ways.
    fn on_ways_fetched(&mut self, _total: usize) {}

    /// `done` of `total` ways have been added to the graph.
    fn on_way_processed(&mut self, _done: usize, _total: usize) {}

    /// A synthetic split node was inserted.
    fn on_split_node(&mut self, _key: &NodeKey) {}

    /// Paths from `done` of `total` source nodes have been enumerated;
    /// `paths` is the running corpus size.
    fn on_source_enumerated(&mut self, _done: usize, _total: usize, _paths: usize) {}

    /// A cached artifact was loaded instead of being regenerated.
    fn on_cache_hit(&mut self, _kind: CacheKind) {}

    /// A freshly generated artifact was written to the cache.
    fn on_cache_saved(&mut self, _kind: CacheKind) {}
}

/// A [`ProgressObserver`] that does nothing.
pub struct NoopProgress;

impl ProgressObserver for NoopProgress {}
