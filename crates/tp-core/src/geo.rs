//! Geographic value types and spherical-earth geodesy.
//!
//! All computations use `f64` and a fixed spherical Earth.  The radius is
//! [`EARTH_RADIUS_KM`] (6373 km), not the more common 6371 km mean radius:
//! previously generated graphs and path corpora were produced with 6373 km,
//! and edge lengths stored in those artifacts only line up with freshly
//! built ones when the same constant is used.  [`MEAN_EARTH_RADIUS_KM`] is
//! exposed for callers who do not need that compatibility; pass it to the
//! `*_with_radius` variants.
//!
//! # Functions
//!
//! | Function                  | Result                                      |
//! |---------------------------|---------------------------------------------|
//! | [`geodesic_distance`]     | haversine great-circle distance, metres     |
//! | [`decompose`]             | [`Distance`] with axis components           |
//! | [`bearing`]               | initial bearing, raw `atan2` degrees        |
//! | [`destination_point`]     | direct projection from start/bearing/km     |

use std::fmt;

use crate::{TpError, TpResult};

/// Earth radius used for every stored distance, kilometres.
pub const EARTH_RADIUS_KM: f64 = 6373.0;

/// IUGG mean Earth radius, kilometres.  Documented alternative only.
pub const MEAN_EARTH_RADIUS_KM: f64 = 6371.0;

// ── GeographicCoords ──────────────────────────────────────────────────────────

/// A longitude/latitude pair in decimal degrees.
///
/// Construction through [`GeographicCoords::new`] rejects NaN and infinite
/// components, so every value in circulation is finite.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeographicCoords {
    lon: f64,
    lat: f64,
}

impl GeographicCoords {
    pub fn new(lon: f64, lat: f64) -> TpResult<Self> {
        if !lon.is_finite() || !lat.is_finite() {
            return Err(TpError::InvalidArgument(format!(
                "coordinates must be finite, got lon={lon} lat={lat}"
            )));
        }
        Ok(Self { lon, lat })
    }

    #[inline]
    pub fn lon(self) -> f64 {
        self.lon
    }

    #[inline]
    pub fn lat(self) -> f64 {
        self.lat
    }
}

impl fmt::Display for GeographicCoords {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.7}, {:.7})", self.lon, self.lat)
    }
}

// ── Distance ──────────────────────────────────────────────────────────────────

/// Edge attribute: true geodesic length plus two axis components, metres.
///
/// `xy` is authoritative.  `x` and `y` are auxiliary diagnostics produced by
/// [`decompose`]; they are not expected to satisfy `x² + y² = xy²`.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Distance {
    pub x:  f64,
    pub y:  f64,
    pub xy: f64,
}

impl Distance {
    pub fn new(x: f64, y: f64, xy: f64) -> TpResult<Self> {
        for (name, v) in [("x", x), ("y", y), ("xy", xy)] {
            if !v.is_finite() || v < 0.0 {
                return Err(TpError::InvalidArgument(format!(
                    "distance component {name} must be finite and non-negative, got {v}"
                )));
            }
        }
        Ok(Self { x, y, xy })
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.xy)
    }
}

// ── Geodesy ───────────────────────────────────────────────────────────────────

/// Haversine great-circle distance in metres on a sphere of radius
/// [`EARTH_RADIUS_KM`].
pub fn geodesic_distance(a: GeographicCoords, b: GeographicCoords) -> f64 {
    geodesic_distance_with_radius(a, b, EARTH_RADIUS_KM)
}

/// [`geodesic_distance`] with an explicit radius in kilometres.
pub fn geodesic_distance_with_radius(a: GeographicCoords, b: GeographicCoords, radius_km: f64) -> f64 {
    let lat1 = a.lat.to_radians();
    let lat2 = b.lat.to_radians();
    let d_lat = lat2 - lat1;
    let d_lon = b.lon.to_radians() - a.lon.to_radians();

    let h = (d_lat * 0.5).sin().powi(2)
        + lat1.cos() * lat2.cos() * (d_lon * 0.5).sin().powi(2);

    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());
    radius_km * c * 1000.0
}

/// Geodesic length from `a` to `b` plus axis components.
///
/// - `x`: distance from `a` to `(b.lon, a.lat)`, longitude varying only.
/// - `y`: distance from `(a.lon, b.lat)` to `a`, latitude varying only.
/// - `xy`: [`geodesic_distance`]`(a, b)`.
///
/// The component formula mixes the endpoints' axes asymmetrically; it is kept
/// bit-for-bit so distances in previously cached graphs stay comparable.
pub fn decompose(a: GeographicCoords, b: GeographicCoords) -> Distance {
    let x = geodesic_distance(a, GeographicCoords { lon: b.lon, lat: a.lat });
    let y = geodesic_distance(GeographicCoords { lon: a.lon, lat: b.lat }, a);
    Distance { x, y, xy: geodesic_distance(a, b) }
}

/// Initial great-circle bearing from `from` to `to`, in degrees.
///
/// Not normalised: the result is `atan2` converted to degrees and lies in
/// `(-180, 180]`.
pub fn bearing(from: GeographicCoords, to: GeographicCoords) -> f64 {
    let lat1 = from.lat.to_radians();
    let lat2 = to.lat.to_radians();
    let d_lon = to.lon.to_radians() - from.lon.to_radians();

    let y = d_lon.sin() * lat2.cos();
    let x = lat1.cos() * lat2.sin() - lat1.sin() * lat2.cos() * d_lon.cos();
    y.atan2(x).to_degrees()
}

/// Point reached by travelling `distance_km` from `start` along the initial
/// heading `bearing_deg` on a sphere of radius [`EARTH_RADIUS_KM`].
pub fn destination_point(start: GeographicCoords, bearing_deg: f64, distance_km: f64) -> GeographicCoords {
    destination_point_with_radius(start, bearing_deg, distance_km, EARTH_RADIUS_KM)
}

/// [`destination_point`] with an explicit radius in kilometres.
pub fn destination_point_with_radius(
    start:       GeographicCoords,
    bearing_deg: f64,
    distance_km: f64,
    radius_km:   f64,
) -> GeographicCoords {
    let brng = bearing_deg.to_radians();
    let lat1 = start.lat.to_radians();
    let lon1 = start.lon.to_radians();
    let angular = distance_km / radius_km;

    let lat2 = (lat1.sin() * angular.cos() + lat1.cos() * angular.sin() * brng.cos()).asin();
    let lon2 = lon1
        + (brng.sin() * angular.sin() * lat1.cos()).atan2(angular.cos() - lat1.sin() * lat2.sin());

    GeographicCoords { lon: lon2.to_degrees(), lat: lat2.to_degrees() }
}
