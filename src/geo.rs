//! Great-circle distance between geographic points.

use crate::types::GeoPoint;

/// Mean Earth radius in kilometers.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Haversine great-circle distance between two points, in kilometers.
pub fn haversine_km(from: &GeoPoint, to: &GeoPoint) -> f64 {
    let d_lat = (to.latitude - from.latitude).to_radians();
    let d_lon = (to.longitude - from.longitude).to_radians();

    let a = (d_lat / 2.0).sin().powi(2)
        + from.latitude.to_radians().cos()
            * to.latitude.to_radians().cos()
            * (d_lon / 2.0).sin().powi(2);

    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
    EARTH_RADIUS_KM * c
}

#[cfg(test)]
mod tests {
    use super::*;

    const NEW_YORK: GeoPoint = GeoPoint {
        latitude: 40.7128,
        longitude: -74.0060,
    };
    const LOS_ANGELES: GeoPoint = GeoPoint {
        latitude: 34.0522,
        longitude: -118.2437,
    };

    #[test]
    fn identical_points_are_zero_distance() {
        assert_eq!(haversine_km(&NEW_YORK, &NEW_YORK), 0.0);
    }

    #[test]
    fn known_city_pair_distance() {
        // NYC to LA is roughly 3936 km along the great circle.
        let d = haversine_km(&NEW_YORK, &LOS_ANGELES);
        assert!((d - 3936.0).abs() < 10.0, "got {d}");
    }

    #[test]
    fn distance_is_symmetric() {
        let forward = haversine_km(&NEW_YORK, &LOS_ANGELES);
        let backward = haversine_km(&LOS_ANGELES, &NEW_YORK);
        assert!((forward - backward).abs() < 1e-9);
    }
}
