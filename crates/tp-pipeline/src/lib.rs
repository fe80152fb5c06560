//! `tp-pipeline` — orchestration for training-path generation.
//!
//! # Stages
//!
//! ```text
//! for one query:
//!   ① Graph:  GraphCache hit, or WaySource::fetch_ways → GraphBuilder
//!               → GraphCache::save.
//!   ② Paths:  PathCache hit, or PathEnumerator::enumerate (→ shuffle)
//!               → PathCache::save.
//! ```
//!
//! Both stages take the same `&mut impl ProgressObserver`; pass
//! [`tp_core::NoopProgress`] when no reporting is needed.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use tp_core::{NoopProgress, PipelineConfig};
//! use tp_graph::CsvWaySource;
//! use tp_pipeline::TrainingPipeline;
//!
//! let source = CsvWaySource::new("ways.csv");
//! let mut pipeline = TrainingPipeline::new(PipelineConfig::default(), source)?;
//! let data = pipeline.run(query, &mut NoopProgress)?;
//! println!("{} paths", data.paths.len());
//! ```

pub mod error;
pub mod pipeline;


pub use error::{PipelineError, PipelineResult};
pub use pipeline::{TrainingData, TrainingPipeline};
