//! Graph-subsystem error type.

use thiserror::Error;

use tp_core::{NodeIdx, TpError};

/// Errors produced by `tp-graph`.
#[derive(Debug, Error)]
pub enum GraphError {
    #[error(transparent)]
    Core(#[from] TpError),

    #[error("node {0} not found in graph")]
    UnknownNode(String),

    #[error("node index {0} out of range")]
    InvalidIndex(NodeIdx),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV parse error: {0}")]
    Csv(#[from] csv::Error),

    #[error("graph cannot hold more {0}")]
    Capacity(&'static str),
}

pub type GraphResult<T> = Result<T, GraphError>;
