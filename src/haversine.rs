//! Great-circle distance between points.
//!
//! Distances here ignore the street network entirely. The route keeps
//! its total from these numbers rather than from the routing service, so
//! the label stays correct when a routing call fails.

use crate::point::Point;

/// Mean Earth radius in meters (IUGG).
pub const EARTH_RADIUS_M: f64 = 6_371_008.8;

/// Threshold above which distances are rendered in kilometers.
const KM_THRESHOLD_M: f64 = 1000.0;

/// Haversine distance between two points in meters.
///
/// Non-negative, symmetric and zero for identical points.
pub fn distance(from: Point, to: Point) -> f64 {
    let lat1_rad = from.lat().to_radians();
    let lat2_rad = to.lat().to_radians();
    let delta_lat = (to.lat() - from.lat()).to_radians();
    let delta_lng = (to.lng() - from.lng()).to_radians();

    let a = (delta_lat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (delta_lng / 2.0).sin().powi(2);
    // rounding can push `a` a hair past 1.0 for antipodal points
    let c = 2.0 * a.sqrt().min(1.0).asin();

    EARTH_RADIUS_M * c
}

/// Render a distance the way the distance label shows it.
///
/// Below one kilometer: `"<m> meters"`, otherwise `"<km> km"`, both with
/// two decimals.
pub fn format_distance(meters: f64) -> String {
    if meters >= KM_THRESHOLD_M {
        format!("{:.2} km", meters / 1000.0)
    } else {
        format!("{:.2} meters", meters)
    }
}
