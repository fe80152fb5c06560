//! Unit tests for tp-core primitives.

#[cfg(test)]
mod ids {
    use crate::{EdgeIdx, NodeIdx, NodeKey};

    #[test]
    fn index_roundtrip() {
        let idx = NodeIdx(42);
        assert_eq!(idx.index(), 42);
        assert_eq!(NodeIdx::try_from(42usize).unwrap(), idx);
    }

    #[test]
    fn invalid_sentinels_are_max() {
        assert_eq!(NodeIdx::INVALID.0, u32::MAX);
        assert_eq!(EdgeIdx::INVALID.0, u32::MAX);
    }

    #[test]
    fn split_key_format() {
        let origin = NodeKey::from(123456789_i64);
        let split = NodeKey::split(&origin, 3);
        assert_eq!(split.as_str(), "123456789-split-3");
        assert!(split.is_synthetic());
        assert!(!origin.is_synthetic());
    }

    #[test]
    fn display_is_raw_id() {
        assert_eq!(NodeKey::from("42").to_string(), "42");
        assert_eq!(NodeIdx(7).to_string(), "NodeIdx(7)");
    }
}

#[cfg(test)]
mod geo {
    use crate::geo::{
        bearing, decompose, destination_point, geodesic_distance, geodesic_distance_with_radius,
        EARTH_RADIUS_KM, MEAN_EARTH_RADIUS_KM,
    };
    use crate::{Distance, GeographicCoords, TpError};

    fn pt(lon: f64, lat: f64) -> GeographicCoords {
        GeographicCoords::new(lon, lat).unwrap()
    }

    #[test]
    fn rejects_non_finite_coords() {
        assert!(matches!(GeographicCoords::new(f64::NAN, 1.0), Err(TpError::InvalidArgument(_))));
        assert!(matches!(GeographicCoords::new(1.0, f64::INFINITY), Err(TpError::InvalidArgument(_))));
        assert!(GeographicCoords::new(-2.98, 56.46).is_ok());
    }

    #[test]
    fn rejects_bad_distance() {
        assert!(Distance::new(1.0, 2.0, f64::NAN).is_err());
        assert!(Distance::new(-1.0, 2.0, 3.0).is_err());
        assert!(Distance::new(1.0, 2.0, 3.0).is_ok());
    }

    #[test]
    fn zero_distance() {
        let p = pt(-2.98, 56.46);
        assert_eq!(geodesic_distance(p, p), 0.0);
    }

    #[test]
    fn one_degree_of_latitude() {
        // 6373 km * pi / 180
        let d = geodesic_distance(pt(0.0, 0.0), pt(0.0, 1.0));
        let expected = EARTH_RADIUS_KM * 1000.0 * std::f64::consts::PI / 180.0;
        assert!((d - expected).abs() < 1e-6, "got {d}");
    }

    #[test]
    fn mean_radius_is_shorter() {
        let a = pt(0.0, 0.0);
        let b = pt(0.0, 1.0);
        let mean = geodesic_distance_with_radius(a, b, MEAN_EARTH_RADIUS_KM);
        assert!(mean < geodesic_distance(a, b));
    }

    #[test]
    fn decompose_xy_matches_direct_distance() {
        let pairs = [
            (pt(-2.985106, 56.459124), pt(-2.977424, 56.464221)),
            (pt(0.0, 0.0), pt(0.001, 0.001)),
            (pt(179.9, -45.0), pt(-179.9, -45.1)),
        ];
        for (a, b) in pairs {
            let d = decompose(a, b);
            let direct = geodesic_distance(a, b);
            assert!(((d.xy - direct) / direct).abs() < 1e-6);
        }
    }

    #[test]
    fn decompose_axis_components() {
        // Pure north-south segment: no longitude component.
        let d = decompose(pt(10.0, 50.0), pt(10.0, 50.01));
        assert_eq!(d.x, 0.0);
        assert!((d.y - d.xy).abs() < 1e-9);

        // Pure east-west segment: no latitude component.
        let d = decompose(pt(10.0, 50.0), pt(10.01, 50.0));
        assert_eq!(d.y, 0.0);
        assert!((d.x - d.xy).abs() < 1e-9);
    }

    #[test]
    fn bearing_cardinal_directions() {
        let origin = pt(0.0, 0.0);
        assert!(bearing(origin, pt(0.0, 1.0)).abs() < 1e-9);
        assert!((bearing(origin, pt(1.0, 0.0)) - 90.0).abs() < 1e-9);
        // Raw atan2 output: west is -90, not 270.
        assert!((bearing(origin, pt(-1.0, 0.0)) + 90.0).abs() < 1e-9);
        assert!((bearing(origin, pt(0.0, -1.0)).abs() - 180.0).abs() < 1e-9);
    }

    #[test]
    fn destination_point_inverts_distance_and_bearing() {
        let start = pt(-2.985106, 56.459124);
        let end = destination_point(start, 37.5, 0.250);
        let d = geodesic_distance(start, end);
        assert!((d - 250.0).abs() < 1e-3, "got {d}");
        assert!((bearing(start, end) - 37.5).abs() < 1e-6);
    }

    #[test]
    fn destination_point_zero_distance_is_identity() {
        let start = pt(12.5, -33.25);
        let end = destination_point(start, 123.0, 0.0);
        assert!((end.lon() - start.lon()).abs() < 1e-12);
        assert!((end.lat() - start.lat()).abs() < 1e-12);
    }
}

#[cfg(test)]
mod config {
    use std::path::PathBuf;

    use crate::config::{validate_query, validate_threshold};
    use crate::{PipelineConfig, TpError};

    #[test]
    fn defaults() {
        let cfg = PipelineConfig::default();
        assert_eq!(cfg.max_dist_between_nodes_m, 100.0);
        assert_eq!(cfg.depth_limit, 40);
        assert!(!cfg.parameterised_cache_keys);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn empty_cache_dir_is_configuration_error() {
        let cfg = PipelineConfig { path_cache_dir: PathBuf::new(), ..Default::default() };
        assert!(matches!(cfg.validate(), Err(TpError::InvalidConfiguration(_))));
    }

    #[test]
    fn bad_threshold_is_argument_error() {
        for bad in [0.0, -5.0, f64::NAN, f64::INFINITY] {
            assert!(matches!(validate_threshold(bad), Err(TpError::InvalidArgument(_))));
        }
        let cfg = PipelineConfig { depth_limit: 0, ..Default::default() };
        assert!(matches!(cfg.validate(), Err(TpError::InvalidArgument(_))));
    }

    #[test]
    fn empty_query_rejected() {
        assert!(validate_query("").is_err());
        assert!(validate_query("   ").is_ok());
        assert!(validate_query("way[\"highway\"]; out body;").is_ok());
    }
}
