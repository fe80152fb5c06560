//! `tp-paths` — training-path corpus generation.
//!
//! For every node of a [`TrainingGraph`](tp_graph::TrainingGraph) a
//! breadth-first search bounded to `depth_limit` hops yields the minimum-hop
//! path to each reachable node.  Paths from all sources are concatenated
//! into one corpus; overlapping sub-paths from different sources are kept on
//! purpose, since downstream training consumes them as separate examples.
//!
//! | Module        | Contents                                             |
//! |---------------|------------------------------------------------------|
//! | [`path`]      | `TrainingPath` (≥ 2 node keys)                       |
//! | [`enumerate`] | `PathEnumerator`, `SourceOrder`, `shuffle_paths`     |
//! | [`error`]     | `PathError`, `PathResult<T>`                         |

pub mod enumerate;
pub mod error;
pub mod path;

#[cfg(test)]
mod tests;

pub use enumerate::{DEFAULT_DEPTH_LIMIT, PathEnumerator, SourceOrder, shuffle_paths};
pub use error::{PathError, PathResult};
pub use path::TrainingPath;
