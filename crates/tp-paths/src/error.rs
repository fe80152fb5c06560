use thiserror::Error;
use tp_core::TpError;

#[derive(Debug, Error)]
pub enum PathError {
    #[error(transparent)]
    Core(#[from] TpError),

    #[error("a training path needs at least 2 nodes, got {0}")]
    TooShort(usize),
}

pub type PathResult<T> = Result<T, PathError>;
