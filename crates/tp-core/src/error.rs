//! Workspace base error type.
//!
//! Sub-crates define their own error enums and wrap `TpError` as one variant
//! via `#[from]`, so a malformed coordinate raised deep in the geodesy code
//! surfaces unchanged at the pipeline boundary.

use thiserror::Error;

/// Argument and configuration failures shared by every `tp-*` crate.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum TpError {
    /// A coordinate, distance or tuning value is missing, non-numeric or
    /// otherwise malformed.  Never coerced to a default.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// An empty query string or cache directory name.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),
}

/// Shorthand result type for `tp-core`.
pub type TpResult<T> = Result<T, TpError>;
