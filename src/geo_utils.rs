//! Geographic utility functions.
//!
//! Great-circle distance on a sphere of radius 6371 km. Inputs are not
//! validated here; out-of-range coordinates give defined but meaningless
//! results.

use crate::{Coordinate, Location};

/// Earth radius in kilometers.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Calculate the Haversine distance between two coordinates in kilometers.
///
/// # Example
/// ```
/// use life_atlas::{haversine_km, Coordinate};
/// let new_york = Coordinate::new(40.7128, -74.0060);
/// let london = Coordinate::new(51.5074, -0.1278);
/// let distance = haversine_km(&new_york, &london);
/// assert!((distance - 5570.0).abs() < 20.0);
/// ```
pub fn haversine_km(a: &Coordinate, b: &Coordinate) -> f64 {
    let lat1 = a.latitude.to_radians();
    let lat2 = b.latitude.to_radians();
    let delta_lat = (b.latitude - a.latitude).to_radians();
    let delta_lng = (b.longitude - a.longitude).to_radians();

    let h = (delta_lat / 2.0).sin().powi(2)
        + lat1.cos() * lat2.cos() * (delta_lng / 2.0).sin().powi(2);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());

    EARTH_RADIUS_KM * c
}

/// Haversine distance between two locations in kilometers.
pub fn distance_between(a: &Location, b: &Location) -> f64 {
    haversine_km(&a.coordinate(), &b.coordinate())
}
