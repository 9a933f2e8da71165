//! Test fixtures for walk-route.
//!
//! Provides:
//! - Real Berkeley locations (from OpenStreetMap)
//! - Recording map surface and distance label
//! - Routing clients with scripted answers

#![allow(dead_code)]

pub mod berkeley_locations;

use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::mpsc::Receiver;

use walk_route::{
    DistanceLabel, MapSurface, Path, PathLeg, Point, RouteError, RouteRequest, RoutingClient,
    TotalDistance,
};

pub use berkeley_locations::*;

// ============================================================================
// Collaborators
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub enum SurfaceEvent {
    Drawn(Path),
    Cleared,
    OverlayRemoved,
}

#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub events: Vec<SurfaceEvent>,
}

impl RecordingSurface {
    pub fn drawn(&self) -> Vec<&Path> {
        self.events
            .iter()
            .filter_map(|event| match event {
                SurfaceEvent::Drawn(path) => Some(path),
                _ => None,
            })
            .collect()
    }

    pub fn last(&self) -> Option<&SurfaceEvent> {
        self.events.last()
    }
}

impl MapSurface for RecordingSurface {
    fn draw_path(&mut self, path: &Path) {
        self.events.push(SurfaceEvent::Drawn(path.clone()));
    }

    fn clear_path(&mut self) {
        self.events.push(SurfaceEvent::Cleared);
    }

    fn remove_overlay(&mut self) {
        self.events.push(SurfaceEvent::OverlayRemoved);
    }
}

#[derive(Debug, Default)]
pub struct RecordingLabel {
    pub shown: Vec<TotalDistance>,
}

impl RecordingLabel {
    pub fn text(&self) -> Option<String> {
        self.shown.last().map(|distance| distance.to_string())
    }
}

impl DistanceLabel for RecordingLabel {
    fn show_distance(&mut self, distance: TotalDistance) {
        self.shown.push(distance);
    }
}

// ============================================================================
// Routing clients
// ============================================================================

/// A straight-line path through the request's stops, one leg per hop.
pub fn straight_path(request: &RouteRequest) -> Path {
    let stops = request.coordinates();
    let legs = stops
        .windows(2)
        .map(|pair| PathLeg {
            distance_m: walk_route::haversine::distance(pair[0], pair[1]),
            duration_s: 0.0,
            geometry: vec![pair[0], pair[1]].into_iter().collect(),
        })
        .collect();
    Path::new(legs)
}

/// Answers every request with a straight-line path, recording what it saw.
#[derive(Default)]
pub struct StraightLineClient {
    pub requests: Mutex<Vec<RouteRequest>>,
}

impl RoutingClient for StraightLineClient {
    fn route(&self, request: &RouteRequest) -> Result<Path, RouteError> {
        self.requests.lock().expect("requests lock").push(request.clone());
        Ok(straight_path(request))
    }
}

/// Always fails with the configured error.
pub struct FailingClient(pub RouteError);

impl RoutingClient for FailingClient {
    fn route(&self, _request: &RouteRequest) -> Result<Path, RouteError> {
        Err(self.0.clone())
    }
}

/// A client with a bug: every call panics.
pub struct PanickingClient;

impl RoutingClient for PanickingClient {
    fn route(&self, _request: &RouteRequest) -> Result<Path, RouteError> {
        panic!("client bug");
    }
}

/// Holds the first call until the gate is opened; later calls answer at once.
pub struct GatedClient {
    gate: Mutex<Receiver<()>>,
    calls: AtomicUsize,
}

impl GatedClient {
    pub fn new(gate: Receiver<()>) -> Self {
        Self {
            gate: Mutex::new(gate),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl RoutingClient for GatedClient {
    fn route(&self, request: &RouteRequest) -> Result<Path, RouteError> {
        if self.calls.fetch_add(1, Ordering::SeqCst) == 0 {
            let _ = self.gate.lock().expect("gate lock").recv();
        }
        Ok(straight_path(request))
    }
}

pub fn points(locations: &[Location]) -> Vec<Point> {
    locations.iter().map(Location::point).collect()
}
