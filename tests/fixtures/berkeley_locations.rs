//! Real Berkeley locations for walking-route fixtures.
//!
//! Coordinates sourced from OpenStreetMap. All are reachable on foot and
//! routable with the OSRM foot profile on the Northern California extract.

use walk_route::Point;

/// A named location with coordinates.
#[derive(Debug, Clone)]
pub struct Location {
    pub name: &'static str,
    pub lat: f64,
    pub lng: f64,
}

impl Location {
    pub const fn new(name: &'static str, lat: f64, lng: f64) -> Self {
        Self { name, lat, lng }
    }

    pub fn point(&self) -> Point {
        Point::new(self.lat, self.lng)
    }
}

// ============================================================================
// Downtown Berkeley
// ============================================================================

pub const DOWNTOWN_BART: Location = Location::new("Downtown Berkeley BART", 37.8701, -122.2681);
pub const CIVIC_CENTER_PARK: Location = Location::new("MLK Jr. Civic Center Park", 37.8690, -122.2727);
pub const BERKELEY_HIGH: Location = Location::new("Berkeley High School", 37.8676, -122.2722);

// ============================================================================
// UC Berkeley campus
// ============================================================================

pub const SATHER_GATE: Location = Location::new("Sather Gate", 37.8703, -122.2595);
pub const SATHER_TOWER: Location = Location::new("Sather Tower", 37.8721, -122.2578);
pub const MEMORIAL_STADIUM: Location = Location::new("California Memorial Stadium", 37.8713, -122.2508);

pub const WALK: &[Location] = &[DOWNTOWN_BART, SATHER_GATE, SATHER_TOWER, MEMORIAL_STADIUM];
