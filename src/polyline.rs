//! Polyline representation for path geometries.
//!
//! Geometries are kept as decoded coordinate sequences. Whatever wire
//! format the routing service speaks is converted at the adapter boundary.

use serde::{Deserialize, Serialize};

use crate::haversine::distance;
use crate::point::Point;

/// A line through decoded coordinates, in drawing order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Polyline {
    points: Vec<Point>,
}

impl Polyline {
    pub fn new(points: Vec<Point>) -> Self {
        Self { points }
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn into_points(self) -> Vec<Point> {
        self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Append `other`, keeping a shared junction point only once.
    pub fn join(&mut self, other: &Polyline) {
        let skip = match (self.points.last(), other.points.first()) {
            (Some(last), Some(first)) if last == first => 1,
            _ => 0,
        };
        self.points.extend(other.points.iter().skip(skip).copied());
    }

    /// Great-circle length along the line in meters.
    pub fn length_m(&self) -> f64 {
        self.points
            .windows(2)
            .map(|pair| distance(pair[0], pair[1]))
            .sum()
    }
}

impl FromIterator<Point> for Polyline {
    fn from_iter<I: IntoIterator<Item = Point>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
