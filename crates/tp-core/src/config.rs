//! Pipeline configuration.
//!
//! # Cache keys
//!
//! By default the cache key is derived from the query string alone.
//! Changing `max_dist_between_nodes_m` or `depth_limit` without changing the
//! query therefore returns the previously cached graph or corpus.  Set
//! `parameterised_cache_keys` to fold both values into the key instead.

use std::path::PathBuf;

use crate::{TpError, TpResult};

/// Tunables for one graph-building and path-generation run.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PipelineConfig {
    /// Longest edge the builder may emit, metres.  Longer way segments are
    /// split by interpolation.
    pub max_dist_between_nodes_m: f64,

    /// Maximum hop count for path enumeration.
    pub depth_limit: usize,

    /// Directory holding cached graphs.
    pub graph_cache_dir: PathBuf,

    /// Directory holding cached path corpora.
    pub path_cache_dir: PathBuf,

    /// Rebuild the graph even when a cached copy exists.
    pub regenerate_graph: bool,

    /// Re-enumerate paths even when a cached corpus exists.
    pub regenerate_paths: bool,

    /// Include threshold and depth limit in cache keys.
    pub parameterised_cache_keys: bool,

    /// Shuffle the corpus with this seed after enumeration.  `None` keeps
    /// BFS discovery order.
    pub shuffle_seed: Option<u64>,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            max_dist_between_nodes_m: 100.0,
            depth_limit:              40,
            graph_cache_dir:          PathBuf::from("Saved Training Graphs"),
            path_cache_dir:           PathBuf::from("Saved Generated Graphs"),
            regenerate_graph:         false,
            regenerate_paths:         false,
            parameterised_cache_keys: false,
            shuffle_seed:             None,
        }
    }
}

impl PipelineConfig {
    /// Reject malformed values before any I/O happens.
    pub fn validate(&self) -> TpResult<()> {
        validate_threshold(self.max_dist_between_nodes_m)?;
        if self.depth_limit == 0 {
            return Err(TpError::InvalidArgument("depth_limit must be at least 1".into()));
        }
        if self.graph_cache_dir.as_os_str().is_empty() {
            return Err(TpError::InvalidConfiguration("graph cache directory is empty".into()));
        }
        if self.path_cache_dir.as_os_str().is_empty() {
            return Err(TpError::InvalidConfiguration("path cache directory is empty".into()));
        }
        Ok(())
    }
}

/// A split threshold must be a finite, strictly positive number of metres.
pub fn validate_threshold(max_dist_m: f64) -> TpResult<()> {
    if !max_dist_m.is_finite() || max_dist_m <= 0.0 {
        return Err(TpError::InvalidArgument(format!(
            "max distance between nodes must be finite and positive, got {max_dist_m}"
        )));
    }
    Ok(())
}

/// Reject an empty query before it reaches the cache or the way source.
///
/// Only emptiness is checked.  Query syntax, whitespace included, is the way
/// source's concern.
pub fn validate_query(query: &str) -> TpResult<()> {
    if query.is_empty() {
        return Err(TpError::InvalidConfiguration("query string is empty".into()));
    }
    Ok(())
}
