use thiserror::Error;

use tp_cache::CacheError;
use tp_core::TpError;
use tp_graph::GraphError;
use tp_paths::PathError;

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// The way source answered with zero ways.  The caller decides whether
    /// to change the query; nothing here retries.
    #[error("no ways found for query {query:?}")]
    NoDataFound { query: String },

    #[error("graph error: {0}")]
    Graph(#[from] GraphError),

    #[error("path error: {0}")]
    Path(#[from] PathError),

    #[error("cache error: {0}")]
    Cache(#[from] CacheError),
}

impl PipelineError {
    /// Whether repeating the same call could succeed.  Always `false`: every
    /// error is terminal for the operation that raised it.
    pub fn is_retryable(&self) -> bool {
        false
    }
}

impl From<TpError> for PipelineError {
    fn from(e: TpError) -> Self {
        match e {
            TpError::InvalidArgument(m)      => PipelineError::InvalidArgument(m),
            TpError::InvalidConfiguration(m) => PipelineError::InvalidConfiguration(m),
        }
    }
}

pub type PipelineResult<T> = Result<T, PipelineError>;
