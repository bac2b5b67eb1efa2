//! Geographic point type with great-circle distance.

use serde::{Deserialize, Serialize};

/// Mean Earth radius in kilometers.
const EARTH_RADIUS_KM: f64 = 6371.0;

/// A WGS84 point as `(longitude, latitude)` in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    /// Longitude in decimal degrees, -180..=180.
    pub lon: f64,
    /// Latitude in decimal degrees, -90..=90.
    pub lat: f64,
}

impl GeoPoint {
    /// Create a point from longitude and latitude.
    pub fn new(lon: f64, lat: f64) -> Self {
        Self { lon, lat }
    }

    /// Great-circle distance to another point in kilometers (haversine).
    pub fn distance_km(&self, other: &GeoPoint) -> f64 {
        let lat1 = self.lat.to_radians();
        let lat2 = other.lat.to_radians();
        let dlat = (other.lat - self.lat).to_radians();
        let dlon = (other.lon - self.lon).to_radians();

        let a = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlon / 2.0).sin().powi(2);
        let c = 2.0 * a.sqrt().asin();

        EARTH_RADIUS_KM * c
    }

    /// Check whether another point lies within `radius_km` of this one.
    pub fn within_km(&self, other: &GeoPoint, radius_km: f64) -> bool {
        self.distance_km(other) <= radius_km
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_distance_to_self() {
        let p = GeoPoint::new(-122.42, 37.77);
        assert!(p.distance_km(&p) < 1e-9);
    }

    #[test]
    fn test_known_distance_sf_to_la() {
        // San Francisco to Los Angeles is roughly 559 km.
        let sf = GeoPoint::new(-122.4194, 37.7749);
        let la = GeoPoint::new(-118.2437, 34.0522);
        let d = sf.distance_km(&la);
        assert!((d - 559.0).abs() < 5.0, "got {d}");
    }

    #[test]
    fn test_within_km() {
        let center = GeoPoint::new(0.0, 0.0);
        // ~111 km per degree of latitude at the equator.
        let near = GeoPoint::new(0.0, 0.5);
        let far = GeoPoint::new(0.0, 2.0);
        assert!(center.within_km(&near, 60.0));
        assert!(!center.within_km(&far, 60.0));
    }
}
