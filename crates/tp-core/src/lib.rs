//! `tp-core` — foundational types for the `trainpath` workspace.
//!
//! This crate is a dependency of every other `tp-*` crate.  It has no
//! `tp-*` dependencies and only `thiserror` (plus optional `serde`) outside
//! the standard library.
//!
//! # What lives here
//!
//! | Module       | Contents                                                  |
//! |--------------|-----------------------------------------------------------|
//! | [`geo`]      | `GeographicCoords`, `Distance`, spherical geodesy         |
//! | [`ids`]      | `NodeKey` (string node ids), `NodeIdx`, `EdgeIdx`         |
//! | [`config`]   | `PipelineConfig` and its validation                       |
//! | [`progress`] | `ProgressObserver`, `NoopProgress`, `CacheKind`           |
//! | [`error`]    | `TpError`, `TpResult`                                     |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to value and config types.  |

pub mod config;
pub mod error;
pub mod geo;
pub mod ids;
pub mod progress;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::PipelineConfig;
pub use error::{TpError, TpResult};
pub use geo::{Distance, GeographicCoords};
pub use ids::{EdgeIdx, NodeIdx, NodeKey};
pub use progress::{CacheKind, NoopProgress, ProgressObserver};
