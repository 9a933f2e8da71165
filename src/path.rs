//! Paths returned by the routing service.

use serde::{Deserialize, Serialize};

use crate::polyline::Polyline;

/// How the route is travelled. Routes built here are always walked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TravelMode {
    #[default]
    Walking,
}

/// One leg of a path, between two consecutive requested stops.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathLeg {
    /// Network distance reported by the service, in meters.
    pub distance_m: f64,
    /// Travel time reported by the service, in seconds.
    pub duration_s: f64,
    pub geometry: Polyline,
}

/// A routed path through every requested stop, in visiting order.
///
/// Only used for drawing. Route distance is never taken from here.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Path {
    legs: Vec<PathLeg>,
}

impl Path {
    pub fn new(legs: Vec<PathLeg>) -> Self {
        Self { legs }
    }

    pub fn legs(&self) -> &[PathLeg] {
        &self.legs
    }

    pub fn distance_m(&self) -> f64 {
        self.legs.iter().map(|leg| leg.distance_m).sum()
    }

    pub fn duration_s(&self) -> f64 {
        self.legs.iter().map(|leg| leg.duration_s).sum()
    }

    /// All leg geometries joined into one line.
    pub fn geometry(&self) -> Polyline {
        let mut line = Polyline::default();
        for leg in &self.legs {
            line.join(&leg.geometry);
        }
        line
    }
}
