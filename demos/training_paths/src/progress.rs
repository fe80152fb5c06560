//! Terminal progress for the pipeline stages.

use indicatif::{ProgressBar, ProgressStyle};

use tp_core::{CacheKind, NodeKey, ProgressObserver};

fn bar(len: u64, unit: &str) -> ProgressBar {
    let pb = ProgressBar::new(len);
    let template = format!("{{spinner:.green}} [{{elapsed_precise}}] [{{wide_bar:.cyan/blue}}] {{pos}}/{{len}} {unit} {{msg}}");
    pb.set_style(
        ProgressStyle::with_template(&template)
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("#>-"),
    );
    pb
}

/// Drives one bar for graph building and one for path enumeration.
#[derive(Default)]
pub struct BarProgress {
    ways:    Option<ProgressBar>,
    sources: Option<ProgressBar>,
    pub splits: u64,
}

impl ProgressObserver for BarProgress {
    fn on_ways_fetched(&mut self, total: usize) {
        self.ways = Some(bar(total as u64, "ways"));
    }

    fn on_way_processed(&mut self, done: usize, total: usize) {
        if let Some(pb) = &self.ways {
            pb.set_position(done as u64);
            pb.set_message(format!("{} split nodes", self.splits));
            if done == total {
                pb.finish();
            }
        }
    }

    fn on_split_node(&mut self, _key: &NodeKey) {
        self.splits += 1;
    }

    fn on_source_enumerated(&mut self, done: usize, total: usize, paths: usize) {
        let pb = self.sources.get_or_insert_with(|| bar(total as u64, "sources"));
        pb.set_position(done as u64);
        pb.set_message(format!("{paths} paths"));
        if done == total {
            pb.finish();
        }
    }

    fn on_cache_hit(&mut self, kind: CacheKind) {
        eprintln!("Loaded {kind} from cache");
    }

    fn on_cache_saved(&mut self, kind: CacheKind) {
        eprintln!("Saved {kind} to cache");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bars_track_positions() {
        let mut p = BarProgress::default();
        p.on_ways_fetched(3);
        p.on_split_node(&NodeKey::split(&NodeKey::from("1"), 0));
        p.on_way_processed(2, 3);
        assert_eq!(p.ways.as_ref().unwrap().position(), 2);
        assert_eq!(p.splits, 1);

        p.on_source_enumerated(1, 4, 3);
        assert_eq!(p.sources.as_ref().unwrap().length(), Some(4));
        assert_eq!(p.sources.as_ref().unwrap().position(), 1);
    }
}
