use serde::{Deserialize, Serialize};

// Same mean radius Leaflet uses for `LatLng.distanceTo`.
pub const EARTH_RADIUS_M: f64 = 6371000.0;
pub const METERS_PER_NAUTICAL_MILE: f64 = 1852.0;
// 1 m/s expressed in knots.
pub const KNOTS_PER_METER_PER_SECOND: f64 = 1.94384;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub latitude: f64,
    pub longitude: f64,
}

impl Point {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Point {
            latitude,
            longitude,
        }
    }

    pub fn is_valid(&self) -> bool {
        self.latitude.is_finite()
            && self.longitude.is_finite()
            && (-90.0..=90.0).contains(&self.latitude)
            && (-180.0..=180.0).contains(&self.longitude)
    }

    /// Great-circle distance in meters on a spherical earth.
    pub fn haversine_distance(&self, other: &Point) -> f64 {
        let lat1 = self.latitude.to_radians();
        let lat2 = other.latitude.to_radians();
        let d_lat = (other.latitude - self.latitude).to_radians();
        let d_lon = (other.longitude - self.longitude).to_radians();

        let a = (d_lat / 2.0).sin().powi(2)
            + lat1.cos() * lat2.cos() * (d_lon / 2.0).sin().powi(2);
        // `a` can drift slightly above 1 for antipodal points
        let c = 2.0 * a.sqrt().min(1.0).asin();
        EARTH_RADIUS_M * c
    }

    /// Initial great-circle bearing towards `other`, in degrees within [0, 360).
    /// Identical points yield 0.
    pub fn initial_bearing(&self, other: &Point) -> f64 {
        let lat1 = self.latitude.to_radians();
        let lat2 = other.latitude.to_radians();
        let d_lon = (other.longitude - self.longitude).to_radians();

        let y = d_lon.sin() * lat2.cos();
        let x = lat1.cos() * lat2.sin() - lat1.sin() * lat2.cos() * d_lon.cos();
        normalize_degrees(y.atan2(x).to_degrees())
    }
}

pub fn bearing(from: &Point, to: &Point) -> f64 {
    from.initial_bearing(to)
}

pub fn distance_meters(from: &Point, to: &Point) -> f64 {
    from.haversine_distance(to)
}

pub fn distance_nautical_miles(from: &Point, to: &Point) -> f64 {
    meters_to_nautical_miles(distance_meters(from, to))
}

pub fn meters_to_nautical_miles(meters: f64) -> f64 {
    meters / METERS_PER_NAUTICAL_MILE
}

pub fn meters_per_second_to_knots(speed_m_s: f64) -> f64 {
    speed_m_s * KNOTS_PER_METER_PER_SECOND
}

/// Wraps any finite angle into [0, 360).
pub fn normalize_degrees(degrees: f64) -> f64 {
    let wrapped = degrees.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360 for tiny negative inputs
    if wrapped >= 360.0 {
        0.0
    } else {
        wrapped
    }
}

#[cfg(test)]
mod tests {
    use super::normalize_degrees;

    #[test]
    fn normalize() {
        assert_eq!(normalize_degrees(0.0), 0.0);
        assert_eq!(normalize_degrees(360.0), 0.0);
        assert_eq!(normalize_degrees(-90.0), 270.0);
        assert_eq!(normalize_degrees(725.0), 5.0);
        assert_eq!(normalize_degrees(-1e-20), 0.0);
        assert_eq!(normalize_degrees(-0.0), 0.0);
    }
}
