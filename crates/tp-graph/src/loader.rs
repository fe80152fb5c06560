//! CSV way loader.
//!
//! # CSV format
//!
//! One row per way node.  Rows belonging to the same way must be contiguous
//! and in traversal order.
//!
//! ```csv
//! way_id,node_id,lon,lat
//! 4019,21529183,-2.9851,56.4591
//! 4019,21529190,-2.9838,56.4603
//! 4020,21529190,-2.9838,56.4603
//! 4020,30511722,-2.9810,56.4622
//! ```
//!
//! A way id that reappears after another way has started begins a new way;
//! nothing is merged across non-contiguous rows.

use std::io::Read;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::way::{Way, WayNode, WaySource};
use crate::GraphResult;

// ── CSV record ────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct WayRecord {
    way_id:  String,
    node_id: String,
    lon:     f64,
    lat:     f64,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load ways from a CSV file.
pub fn load_ways_csv(path: &Path) -> GraphResult<Vec<Way>> {
    let file = std::fs::File::open(path)?;
    load_ways_reader(file)
}

/// Like [`load_ways_csv`] but accepts any `Read` source.
pub fn load_ways_reader<R: Read>(reader: R) -> GraphResult<Vec<Way>> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut ways: Vec<Way> = Vec::new();

    for result in csv_reader.deserialize() {
        let rec: WayRecord = result?;
        let node = WayNode::new(rec.node_id, rec.lon, rec.lat)?;

        match ways.last_mut() {
            Some(way) if way.id == rec.way_id => way.nodes.push(node),
            _ => ways.push(Way::new(rec.way_id, vec![node])),
        }
    }

    Ok(ways)
}

// ── CsvWaySource ──────────────────────────────────────────────────────────────

/// A [`WaySource`] backed by a pre-extracted CSV file.
///
/// The query string is not interpreted; it only names the extract for cache
/// purposes.  The file is re-read on every fetch.
#[derive(Clone, Debug)]
pub struct CsvWaySource {
    path: PathBuf,
}

impl CsvWaySource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl WaySource for CsvWaySource {
    fn fetch_ways(&mut self, query: &str) -> GraphResult<Vec<Way>> {
        log::debug!("reading ways for {query:?} from {}", self.path.display());
        load_ways_csv(&self.path)
    }
}
