//! `tp-cache` — content-addressed persistence for graphs and path corpora.
//!
//! One file per distinct query per cache kind:
//!
//! ```text
//! <graph_cache_dir>/<sha256(query)>.json   ← GraphCache  (TrainingGraph)
//! <path_cache_dir>/<sha256(query)>.json    ← PathCache   (Vec<TrainingPath>)
//! ```
//!
//! Payloads are encoded through explicit, versioned schemas ([`schema`])
//! rather than a generic object serializer, so the on-disk format is
//! controlled here and can be read by other tools.
//!
//! | Module     | Contents                                                  |
//! |------------|-----------------------------------------------------------|
//! | [`key`]    | `CacheKey` (hex SHA-256 of the query)                     |
//! | [`store`]  | `ContentCache<C>`, the `CacheCodec` trait                 |
//! | [`schema`] | `GraphSnapshot`, `PathCorpus`, `GraphCodec`, `PathCodec`  |
//! | [`error`]  | `CacheError`, `CacheResult<T>`                            |
//!
//! # Usage
//!
//! ```rust,ignore
//! use tp_cache::{CacheKey, GraphCache};
//!
//! let cache = GraphCache::new("Saved Training Graphs")?;
//! let key = CacheKey::for_query(query);
//! let graph = match cache.load(&key)? {
//!     Some(g) => g,
//!     None => { let g = build(); cache.save(&key, &g)?; g }
//! };
//! ```

pub mod error;
pub mod key;
pub mod schema;
pub mod store;


pub use error::{CacheError, CacheResult};
pub use key::CacheKey;
pub use schema::{GraphCodec, GraphSnapshot, PathCodec, PathCorpus};
pub use store::{CacheCodec, ContentCache};

/// Cache of built training graphs.
pub type GraphCache = ContentCache<GraphCodec>;

/// Cache of generated path corpora.
pub type PathCache = ContentCache<PathCodec>;
