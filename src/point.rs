//! Geographic value types.

use serde::{Deserialize, Serialize};

/// A WGS84 coordinate in degrees.
///
/// Longitude is kept in `[-180, 180)` and is 0 at the poles, so two
/// points compare equal exactly when they name the same place.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawPoint")]
pub struct Point {
    lat: f64,
    lng: f64,
}

impl Point {
    pub fn new(lat: f64, lng: f64) -> Self {
        let lng = if lat.abs() == 90.0 {
            0.0
        } else if (-180.0..180.0).contains(&lng) {
            lng
        } else {
            (lng + 180.0).rem_euclid(360.0) - 180.0
        };
        Self { lat, lng }
    }

    pub fn lat(&self) -> f64 {
        self.lat
    }

    pub fn lng(&self) -> f64 {
        self.lng
    }
}

#[derive(Deserialize)]
struct RawPoint {
    lat: f64,
    lng: f64,
}

impl From<RawPoint> for Point {
    fn from(raw: RawPoint) -> Self {
        Self::new(raw.lat, raw.lng)
    }
}

impl From<(f64, f64)> for Point {
    fn from((lat, lng): (f64, f64)) -> Self {
        Self::new(lat, lng)
    }
}

impl From<Point> for (f64, f64) {
    fn from(point: Point) -> Self {
        (point.lat, point.lng)
    }
}

/// A point the route must pass through.
///
/// `stopover` asks the routing service to actually visit the location
/// instead of using it as a shaping hint. Routes built by clicking always
/// set it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Waypoint {
    pub location: Point,
    pub stopover: bool,
}

impl Waypoint {
    pub fn stopover(location: Point) -> Self {
        Self {
            location,
            stopover: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tuple_conversions() {
        let point = Point::from((37.8715, -122.2730));
        assert_eq!(point.lat(), 37.8715);
        assert_eq!(point.lng(), -122.2730);

        let (lat, lng): (f64, f64) = point.into();
        assert_eq!((lat, lng), (37.8715, -122.2730));
    }

    #[test]
    fn test_longitude_wraps_to_one_representation() {
        assert_eq!(Point::new(0.0, 180.0), Point::new(0.0, -180.0));
        assert_eq!(Point::new(10.0, 190.0).lng(), -170.0);
        assert_eq!(Point::new(10.0, -540.0).lng(), -180.0);
        assert_eq!(Point::new(10.0, 179.5).lng(), 179.5);
    }

    #[test]
    fn test_poles_have_one_longitude() {
        assert_eq!(Point::new(90.0, 45.0), Point::new(90.0, -120.0));
        assert_eq!(Point::new(-90.0, 10.0).lng(), 0.0);
    }

    #[test]
    fn test_deserialize_normalizes() {
        let point: Point = serde_json::from_str(r#"{"lat": 0.0, "lng": 180.0}"#).expect("point json");
        assert_eq!(point, Point::new(0.0, -180.0));
    }

    #[test]
    fn test_waypoint_is_stopover() {
        let waypoint = Waypoint::stopover(Point::new(1.0, 2.0));
        assert!(waypoint.stopover);
        assert_eq!(waypoint.location, Point::new(1.0, 2.0));
    }
}
