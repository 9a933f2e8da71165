//! Route controller: turns clicks and undos into route mutations and
//! routing requests, and keeps the map consistent with the waypoints.
//!
//! The controller does no I/O of its own. `click` and `undo` hand back the
//! request to run, and the caller reports the outcome through `complete`
//! tagged with the request's id. Every topology change clears the drawn
//! path before the new request goes out, and only the newest request may
//! draw, so a slow response for an older waypoint set is discarded.

use std::fmt;

use tracing::{debug, trace, warn};

use crate::error::RouteError;
use crate::path::{Path, TravelMode};
use crate::point::{Point, Waypoint};
use crate::route::{Route, TotalDistance};
use crate::traits::{DistanceLabel, MapSurface};

/// Monotonic tag attached to every issued request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestId(u64);

impl RequestId {
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A walking route query. Which waypoints land in `intermediate` depends
/// on the [`RequestLayout`]; every one of them is a stopover.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteRequest {
    pub id: RequestId,
    pub origin: Point,
    pub destination: Point,
    pub intermediate: Vec<Waypoint>,
    pub mode: TravelMode,
}

impl RouteRequest {
    /// Stops in visiting order: origin, intermediates, destination.
    pub fn coordinates(&self) -> Vec<Point> {
        let mut points = Vec::with_capacity(self.intermediate.len() + 2);
        points.push(self.origin);
        points.extend(self.intermediate.iter().map(|waypoint| waypoint.location));
        points.push(self.destination);
        points
    }
}

/// How a waypoint sequence is laid out as a routing request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RequestLayout {
    /// Origin is the second-to-last waypoint, destination the last, and
    /// every waypoint before the last rides along as an intermediate.
    #[default]
    TrailingLeg,
    /// Origin is the first waypoint, destination the last, and the
    /// waypoints strictly between are intermediates.
    Stopovers,
}

impl RequestLayout {
    fn build(&self, id: RequestId, waypoints: &[Waypoint]) -> Option<RouteRequest> {
        let n = waypoints.len();
        if n < 2 {
            return None;
        }

        let (origin, intermediate) = match self {
            RequestLayout::TrailingLeg => (waypoints[n - 2].location, &waypoints[..n - 1]),
            RequestLayout::Stopovers => (waypoints[0].location, &waypoints[1..n - 1]),
        };

        Some(RouteRequest {
            id,
            origin,
            destination: waypoints[n - 1].location,
            intermediate: intermediate.iter().map(|waypoint| Waypoint::stopover(waypoint.location)).collect(),
            mode: TravelMode::Walking,
        })
    }
}

#[derive(Debug, Clone, Default)]
pub struct ControllerConfig {
    pub layout: RequestLayout,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControllerState {
    /// Fewer than two waypoints; nothing to route.
    Idle,
    /// Two or more waypoints. `in_flight` is the request whose response
    /// may still be drawn, if any.
    Building { in_flight: Option<RequestId> },
}

/// User input the controller reacts to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    Click(Point),
    Undo,
}

/// What happened to a routing response handed to [`RouteController::complete`].
#[derive(Debug, Clone, PartialEq)]
pub enum ResponseOutcome {
    /// The path was drawn.
    Displayed,
    /// The service failed; the map keeps no path.
    Failed(RouteError),
    /// A newer request superseded this one; the response was dropped.
    Stale,
}

pub struct RouteController<S, L> {
    route: Route,
    surface: S,
    label: L,
    config: ControllerConfig,
    state: ControllerState,
    next_id: u64,
    displayed: Option<Path>,
}

impl<S, L> RouteController<S, L>
where
    S: MapSurface,
    L: DistanceLabel,
{
    pub fn new(surface: S, label: L) -> Self {
        Self::with_config(surface, label, ControllerConfig::default())
    }

    pub fn with_config(surface: S, label: L, config: ControllerConfig) -> Self {
        Self {
            route: Route::new(),
            surface,
            label,
            config,
            state: ControllerState::Idle,
            next_id: 0,
            displayed: None,
        }
    }

    pub fn handle(&mut self, event: InputEvent) -> Option<RouteRequest> {
        match event {
            InputEvent::Click(point) => self.click(point),
            InputEvent::Undo => self.undo(),
        }
    }

    /// Append a waypoint at `point`. Returns the request to run once the
    /// route has at least two waypoints.
    pub fn click(&mut self, point: Point) -> Option<RouteRequest> {
        let had_start = !self.route.is_empty();
        self.route.append(point);
        self.label.show_distance(self.route.total_distance());

        if !had_start {
            debug!(lat = point.lat(), lng = point.lng(), "route started");
            self.state = ControllerState::Idle;
            return None;
        }

        self.clear_displayed();
        self.issue()
    }

    /// Remove the last waypoint. Returns the request for the shortened
    /// route while it still has two or more waypoints.
    pub fn undo(&mut self) -> Option<RouteRequest> {
        if !self.route.remove_last() {
            trace!("undo on empty route ignored");
            return None;
        }

        self.clear_displayed();
        self.label.show_distance(self.route.total_distance());

        if self.route.len() >= 2 {
            return self.issue();
        }

        if self.route.is_empty() {
            self.surface.remove_overlay();
        }
        debug!(waypoints = self.route.len(), "route back to idle");
        self.state = ControllerState::Idle;
        None
    }

    /// Drop every waypoint and take the route off the map.
    pub fn reset(&mut self) {
        self.route.reset();
        self.clear_displayed();
        self.surface.remove_overlay();
        self.label.show_distance(TotalDistance::Zero);
        self.state = ControllerState::Idle;
        debug!("route reset");
    }

    /// Apply the response for request `id`.
    pub fn complete(&mut self, id: RequestId, result: Result<Path, RouteError>) -> ResponseOutcome {
        if self.in_flight() != Some(id) {
            debug!(request = %id, "discarding stale route response");
            return ResponseOutcome::Stale;
        }

        self.state = ControllerState::Building { in_flight: None };
        match result {
            Ok(path) => {
                debug!(request = %id, legs = path.legs().len(), "drawing route path");
                self.surface.draw_path(&path);
                self.displayed = Some(path);
                ResponseOutcome::Displayed
            }
            Err(err) => {
                warn!(request = %id, error = %err, "route request failed");
                ResponseOutcome::Failed(err)
            }
        }
    }

    pub fn state(&self) -> ControllerState {
        self.state
    }

    pub fn in_flight(&self) -> Option<RequestId> {
        match self.state {
            ControllerState::Building { in_flight } => in_flight,
            ControllerState::Idle => None,
        }
    }

    pub fn route(&self) -> &Route {
        &self.route
    }

    pub fn total_distance(&self) -> TotalDistance {
        self.route.total_distance()
    }

    pub fn displayed_path(&self) -> Option<&Path> {
        self.displayed.as_ref()
    }

    pub fn config(&self) -> &ControllerConfig {
        &self.config
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn label(&self) -> &L {
        &self.label
    }

    fn clear_displayed(&mut self) {
        self.displayed = None;
        self.surface.clear_path();
    }

    fn issue(&mut self) -> Option<RouteRequest> {
        self.next_id += 1;
        let id = RequestId(self.next_id);
        let request = self.config.layout.build(id, self.route.waypoints())?;

        debug!(
            request = %id,
            waypoints = self.route.len(),
            intermediate = request.intermediate.len(),
            "issuing route request"
        );
        self.state = ControllerState::Building { in_flight: Some(id) };
        Some(request)
    }
}
