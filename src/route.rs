//! Route state: the ordered waypoint sequence and its total distance.

use std::fmt;

use crate::haversine::{distance, format_distance};
use crate::point::{Point, Waypoint};

/// Total great-circle length of a route.
///
/// Routes with fewer than two waypoints have no length at all and report
/// `Zero`, which the label shows as a bare `0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TotalDistance {
    Zero,
    Meters(f64),
}

impl TotalDistance {
    pub fn meters(&self) -> f64 {
        match self {
            TotalDistance::Zero => 0.0,
            TotalDistance::Meters(meters) => *meters,
        }
    }
}

impl Default for TotalDistance {
    fn default() -> Self {
        TotalDistance::Zero
    }
}

impl fmt::Display for TotalDistance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TotalDistance::Zero => f.write_str("0"),
            TotalDistance::Meters(meters) => f.write_str(&format_distance(*meters)),
        }
    }
}

/// Waypoints in click order. First is the start, last is the current end.
///
/// The total is recomputed from scratch after every mutation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Route {
    waypoints: Vec<Waypoint>,
    total: TotalDistance,
}

impl Route {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a stopover at `point`. Repeating the previous point is legal.
    pub fn append(&mut self, point: Point) {
        self.waypoints.push(Waypoint::stopover(point));
        self.recompute();
    }

    /// Drop the last waypoint. Returns `false` when the route was empty.
    pub fn remove_last(&mut self) -> bool {
        let removed = self.waypoints.pop().is_some();
        if removed {
            self.recompute();
        }
        removed
    }

    pub fn reset(&mut self) {
        self.waypoints.clear();
        self.total = TotalDistance::Zero;
    }

    pub fn total_distance(&self) -> TotalDistance {
        self.total
    }

    pub fn total_distance_meters(&self) -> f64 {
        self.total.meters()
    }

    /// Great-circle length of each consecutive pair of waypoints.
    pub fn segment_distances(&self) -> Vec<f64> {
        self.waypoints
            .windows(2)
            .map(|pair| distance(pair[0].location, pair[1].location))
            .collect()
    }

    pub fn waypoints(&self) -> &[Waypoint] {
        &self.waypoints
    }

    pub fn points(&self) -> Vec<Point> {
        self.waypoints.iter().map(|waypoint| waypoint.location).collect()
    }

    pub fn last(&self) -> Option<&Waypoint> {
        self.waypoints.last()
    }

    pub fn len(&self) -> usize {
        self.waypoints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.waypoints.is_empty()
    }

    fn recompute(&mut self) {
        self.total = if self.waypoints.len() < 2 {
            TotalDistance::Zero
        } else {
            TotalDistance::Meters(self.segment_distances().iter().sum())
        };
    }
}
