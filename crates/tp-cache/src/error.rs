//! Error types for tp-cache.

use std::path::PathBuf;

use thiserror::Error;

use tp_core::TpError;
use tp_graph::GraphError;
use tp_paths::PathError;

/// Errors raised while reading, writing or decoding cache entries.
///
/// A missing entry is not an error: [`ContentCache::load`] returns `Ok(None)`.
/// An entry that exists but cannot be read or decoded is always an error.
///
/// [`ContentCache::load`]: crate::ContentCache::load
#[derive(Debug, Error)]
pub enum CacheError {
    #[error(transparent)]
    Core(#[from] TpError),

    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path:   PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("corrupt cache entry {}: {reason}", path.display())]
    Corrupt { path: PathBuf, reason: String },

    #[error("unsupported cache format version {found} (expected {expected})")]
    UnsupportedVersion { found: u32, expected: u32 },

    #[error("cache entry holds {found:?}, expected {expected:?}")]
    WrongKind { found: String, expected: &'static str },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid graph snapshot: {0}")]
    Graph(#[from] GraphError),

    #[error("invalid path corpus: {0}")]
    Path(#[from] PathError),

    #[error("duplicate node {0} in graph snapshot")]
    DuplicateNode(String),
}

pub type CacheResult<T> = Result<T, CacheError>;
