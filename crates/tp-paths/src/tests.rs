//! Unit tests for tp-paths.

#[cfg(test)]
mod helpers {
    use tp_core::{Distance, GeographicCoords, NodeKey};
    use tp_graph::TrainingGraph;

    use crate::TrainingPath;

    /// Graph with the given node ids (positions along the equator) and
    /// undirected edges, all 10 m long.
    pub fn graph(ids: &[&str], edges: &[(&str, &str)]) -> TrainingGraph {
        let mut g = TrainingGraph::new();
        for (i, id) in ids.iter().enumerate() {
            let pos = GeographicCoords::new(i as f64 * 1e-4, 0.0).unwrap();
            g.add_node(NodeKey::from(*id), pos).unwrap();
        }
        let d = Distance::new(10.0, 0.0, 10.0).unwrap();
        for (a, b) in edges {
            g.add_edge_by_key(a, b, d).unwrap();
        }
        g
    }

    /// `A–B–C–D`
    pub fn line() -> TrainingGraph {
        graph(&["A", "B", "C", "D"], &[("A", "B"), ("B", "C"), ("C", "D")])
    }

    pub fn keys(path: &TrainingPath) -> Vec<&str> {
        path.nodes().iter().map(|k| k.as_str()).collect()
    }
}

// ── TrainingPath ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod path {
    use tp_core::NodeKey;

    use crate::{PathError, TrainingPath};

    #[test]
    fn rejects_trivial_paths() {
        assert!(matches!(TrainingPath::new(vec![]), Err(PathError::TooShort(0))));
        assert!(matches!(TrainingPath::new(vec![NodeKey::from("a")]), Err(PathError::TooShort(1))));
    }

    #[test]
    fn accessors() {
        let p = TrainingPath::new(vec!["a".into(), "b".into(), "c".into()]).unwrap();
        assert_eq!(p.len(), 3);
        assert_eq!(p.hops(), 2);
        assert_eq!(p.source().as_str(), "a");
        assert_eq!(p.target().as_str(), "c");
        assert_eq!(p.to_string(), "a → b → c");
    }
}

// ── Enumeration ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod enumerate {
    use tp_core::{NoopProgress, NodeIdx, ProgressObserver, TpError};
    use tp_graph::TrainingGraph;

    use super::helpers::{graph, keys, line};
    use crate::{PathEnumerator, PathError, SourceOrder, DEFAULT_DEPTH_LIMIT};

    #[test]
    fn default_depth_limit() {
        assert_eq!(PathEnumerator::default().depth_limit(), DEFAULT_DEPTH_LIMIT);
        assert_eq!(DEFAULT_DEPTH_LIMIT, 40);
    }

    #[test]
    fn zero_depth_rejected() {
        assert!(matches!(
            PathEnumerator::new(0),
            Err(PathError::Core(TpError::InvalidArgument(_)))
        ));
    }

    #[test]
    fn empty_graph_has_no_paths() {
        let paths = PathEnumerator::default().enumerate(&TrainingGraph::new(), &mut NoopProgress);
        assert!(paths.is_empty());
    }

    #[test]
    fn line_graph_scenario() {
        let g = line();
        let paths = PathEnumerator::new(40).unwrap().enumerate(&g, &mut NoopProgress);

        assert_eq!(paths.len(), 12);
        assert!(paths.iter().all(|p| p.len() >= 2));

        let from_a: Vec<_> = paths.iter().filter(|p| p.source().as_str() == "A").map(keys).collect();
        assert_eq!(from_a, vec![vec!["A", "B"], vec!["A", "B", "C"], vec!["A", "B", "C", "D"]]);

        let from_d: Vec<_> = paths.iter().filter(|p| p.source().as_str() == "D").map(keys).collect();
        assert_eq!(from_d, vec![vec!["D", "C"], vec!["D", "C", "B"], vec!["D", "C", "B", "A"]]);

        // Sources appear in insertion order, each as one contiguous block.
        let sources: Vec<_> = paths.iter().map(|p| p.source().as_str()).collect();
        assert_eq!(sources, ["A", "A", "A", "B", "B", "B", "C", "C", "C", "D", "D", "D"]);
    }

    #[test]
    fn connected_component_contributes_n_minus_one_per_source() {
        // 3x3 grid, 9 nodes, diameter 4.
        let ids = ["0", "1", "2", "3", "4", "5", "6", "7", "8"];
        let edges = [
            ("0", "1"), ("1", "2"), ("3", "4"), ("4", "5"), ("6", "7"), ("7", "8"),
            ("0", "3"), ("3", "6"), ("1", "4"), ("4", "7"), ("2", "5"), ("5", "8"),
        ];
        let g = graph(&ids, &edges);
        let e = PathEnumerator::new(ids.len() - 1).unwrap();
        for idx in g.node_indices() {
            assert_eq!(e.paths_from(&g, idx).len(), ids.len() - 1);
        }
        assert_eq!(e.enumerate(&g, &mut NoopProgress).len(), 9 * 8);
    }

    #[test]
    fn depth_limit_cuts_off() {
        let g = line();
        let one = PathEnumerator::new(1).unwrap().enumerate(&g, &mut NoopProgress);
        assert_eq!(one.len(), 6); // every edge, both directions
        assert!(one.iter().all(|p| p.hops() == 1));

        let two = PathEnumerator::new(2).unwrap().enumerate(&g, &mut NoopProgress);
        assert_eq!(two.len(), 2 + 3 + 3 + 2);
        assert!(two.iter().all(|p| p.hops() <= 2));
    }

    #[test]
    fn paths_are_minimum_hop() {
        // 5-cycle: 0 reaches 3 in two hops via 4.
        let g = graph(
            &["0", "1", "2", "3", "4"],
            &[("0", "1"), ("1", "2"), ("2", "3"), ("3", "4"), ("4", "0")],
        );
        let paths = PathEnumerator::default().paths_from(&g, NodeIdx(0));
        let to_3 = paths.iter().find(|p| p.target().as_str() == "3").unwrap();
        assert_eq!(keys(to_3), ["0", "4", "3"]);
        assert!(paths.iter().all(|p| p.hops() <= 2));
    }

    #[test]
    fn discovery_order_follows_neighbour_order() {
        // Star centred on "c", leaves added z, a, m; then a tail off "a".
        let g = graph(
            &["c", "z", "a", "m", "t"],
            &[("c", "z"), ("c", "a"), ("c", "m"), ("a", "t")],
        );
        let paths = PathEnumerator::default().paths_from(&g, NodeIdx(0));
        let targets: Vec<_> = paths.iter().map(|p| p.target().as_str()).collect();
        assert_eq!(targets, ["z", "a", "m", "t"]);
    }

    #[test]
    fn components_stay_separate() {
        let g = graph(&["a", "b", "x", "y", "lonely"], &[("a", "b"), ("x", "y")]);
        let paths = PathEnumerator::default().enumerate(&g, &mut NoopProgress);
        assert_eq!(paths.len(), 4);
        assert!(paths.iter().all(|p| p.source().as_str() != "lonely"));
    }

    #[test]
    fn by_key_order() {
        let g = graph(&["b", "a"], &[("b", "a")]);
        let paths = PathEnumerator::default()
            .with_order(SourceOrder::ByKey)
            .enumerate(&g, &mut NoopProgress);
        let sources: Vec<_> = paths.iter().map(|p| p.source().as_str()).collect();
        assert_eq!(sources, ["a", "b"]);
    }

    #[test]
    fn duplicate_subpaths_are_retained() {
        let paths = PathEnumerator::default().enumerate(&line(), &mut NoopProgress);
        let bc = paths.iter().filter(|p| keys(p) == ["B", "C"]).count();
        let cb = paths.iter().filter(|p| keys(p) == ["C", "B"]).count();
        assert_eq!((bc, cb), (1, 1));
        // [A,B,C] from A and [B,C] from B both walk the B–C edge.
        assert!(paths.iter().any(|p| keys(p) == ["A", "B", "C"]));
    }

    #[test]
    fn observer_counts_sources() {
        #[derive(Default)]
        struct Recorder(Vec<(usize, usize, usize)>);
        impl ProgressObserver for Recorder {
            fn on_source_enumerated(&mut self, done: usize, total: usize, paths: usize) {
                self.0.push((done, total, paths));
            }
        }

        let mut rec = Recorder::default();
        PathEnumerator::default().enumerate(&line(), &mut rec);
        assert_eq!(rec.0, vec![(1, 4, 3), (2, 4, 6), (3, 4, 9), (4, 4, 12)]);
    }
}

// ── Shuffling ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod shuffle {
    use tp_core::NoopProgress;

    use super::helpers::line;
    use crate::{shuffle_paths, PathEnumerator};

    #[test]
    fn same_seed_same_order() {
        let base = PathEnumerator::default().enumerate(&line(), &mut NoopProgress);
        let mut a = base.clone();
        let mut b = base.clone();
        shuffle_paths(&mut a, 7);
        shuffle_paths(&mut b, 7);
        assert_eq!(a, b);
    }

    #[test]
    fn shuffle_is_a_permutation() {
        let base = PathEnumerator::default().enumerate(&line(), &mut NoopProgress);
        let mut shuffled = base.clone();
        shuffle_paths(&mut shuffled, 99);

        let mut x: Vec<_> = base.iter().map(|p| p.to_string()).collect();
        let mut y: Vec<_> = shuffled.iter().map(|p| p.to_string()).collect();
        x.sort();
        y.sort();
        assert_eq!(x, y);
    }
}
