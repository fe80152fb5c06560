//! `tp-graph` — distance-bounded training graphs built from road ways.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                    |
//! |-------------|-------------------------------------------------------------|
//! | [`graph`]   | `TrainingGraph` (undirected, insertion-ordered), `Node`, `Edge` |
//! | [`builder`] | `GraphBuilder`: `add_way`, `split_segment`                  |
//! | [`way`]     | `Way`, `WayNode`, the `WaySource` seam                      |
//! | [`loader`]  | CSV way loading, `CsvWaySource`                             |
//! | [`error`]   | `GraphError`, `GraphResult<T>`                              |

pub mod builder;
pub mod error;
pub mod graph;
pub mod loader;
pub mod way;


pub use builder::{GraphBuilder, MAX_EDGES_PER_SEGMENT, SPLIT_TOLERANCE, split_edge_count, within_threshold};
pub use error::{GraphError, GraphResult};
pub use graph::{Edge, Node, TrainingGraph};
pub use loader::{CsvWaySource, load_ways_csv, load_ways_reader};
pub use way::{StaticWaySource, Way, WayNode, WaySource};
