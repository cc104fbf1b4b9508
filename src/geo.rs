//! Great-circle distance math.
//!
//! # Purpose
//! Provides the haversine distance used to filter webcam records by
//! proximity to the requested coordinates.
//!
//! # Notes
//! The functions here are pure and accept any real-valued input; coordinate
//! range validation belongs to the HTTP boundary, not to this module.
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Mean Earth radius in kilometers, as used by the haversine formula.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// A latitude/longitude pair in degrees.
///
/// # What it does
/// Carries a point on the sphere by value into distance computations.
///
/// # Invariants
/// - None enforced here; callers validate ranges before trusting a value.
#[derive(Debug, Serialize, Deserialize, ToSchema, Clone, Copy, PartialEq)]
pub struct Coordinate {
    pub lat: f64,
    pub lon: f64,
}

impl Coordinate {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// True when both components are inside the conventional degree ranges.
    pub fn in_range(&self) -> bool {
        self.lat.abs() <= 90.0 && self.lon.abs() <= 180.0
    }
}

/// Great-circle distance in kilometers between two coordinates.
///
/// # What it does
/// Computes the orthodromic distance with the haversine formula on a sphere
/// of mean Earth radius.
///
/// # Why it exists
/// The relay filters upstream webcam records to those within the caller's
/// requested radius; this is the distance that filter compares against.
///
/// # Errors
/// - Does not fail; any real inputs yield a finite non-negative result.
pub fn haversine_km(a: Coordinate, b: Coordinate) -> f64 {
    let lat1 = a.lat.to_radians();
    let lat2 = b.lat.to_radians();
    let dlat = (b.lat - a.lat).to_radians();
    let dlon = (b.lon - a.lon).to_radians();

    let h = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlon / 2.0).sin().powi(2);
    // Clamp guards against h creeping past 1.0 from rounding near antipodes.
    let c = 2.0 * h.sqrt().min(1.0).atan2((1.0 - h).max(0.0).sqrt());
    EARTH_RADIUS_KM * c
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-6;

    #[test]
    fn identical_points_have_zero_distance() {
        let paris = Coordinate::new(48.8566, 2.3522);
        assert!(haversine_km(paris, paris).abs() < EPS);
        let origin = Coordinate::new(0.0, 0.0);
        assert!(haversine_km(origin, origin).abs() < EPS);
    }

    #[test]
    fn distance_is_symmetric() {
        let a = Coordinate::new(48.8566, 2.3522);
        let b = Coordinate::new(51.5074, -0.1278);
        let ab = haversine_km(a, b);
        let ba = haversine_km(b, a);
        assert!((ab - ba).abs() < EPS * ab.max(1.0));
    }

    #[test]
    fn one_degree_of_longitude_at_equator() {
        let d = haversine_km(Coordinate::new(0.0, 0.0), Coordinate::new(0.0, 1.0));
        // One degree of arc on the 6371 km sphere is ~111.19 km.
        assert!((d - 111.19).abs() < 0.01, "got {d}");
    }

    #[test]
    fn distances_add_along_a_meridian() {
        // Three points on the same great circle: B lies between A and C.
        let a = Coordinate::new(0.0, 10.0);
        let b = Coordinate::new(20.0, 10.0);
        let c = Coordinate::new(45.0, 10.0);
        let direct = haversine_km(a, c);
        let via_b = haversine_km(a, b) + haversine_km(b, c);
        assert!((direct - via_b).abs() < 1e-6 * direct);
    }

    #[test]
    fn monotonic_in_angular_separation() {
        let origin = Coordinate::new(0.0, 0.0);
        let mut previous = 0.0;
        for degrees in 1..=179 {
            let d = haversine_km(origin, Coordinate::new(0.0, f64::from(degrees)));
            assert!(d > previous, "distance must grow with separation");
            previous = d;
        }
    }

    #[test]
    fn out_of_range_inputs_stay_finite() {
        // Range validation is the caller's job; the math must still behave.
        let weird = Coordinate::new(123.0, 500.0);
        let d = haversine_km(weird, Coordinate::new(-200.0, 181.0));
        assert!(d.is_finite());
        assert!(d >= 0.0);
    }
}
