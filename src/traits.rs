//! Collaborator seams for the route controller.
//!
//! The controller only talks to the outside world through these traits.
//! Apps implement them for their own map widget and routing backend.

use crate::controller::RouteRequest;
use crate::error::RouteError;
use crate::path::Path;
use crate::route::TotalDistance;

/// Computes a walking path through an ordered set of stops.
///
/// Implementations may block for as long as the network takes. Failures
/// are returned, never panicked, and never touch route state.
pub trait RoutingClient {
    fn route(&self, request: &RouteRequest) -> Result<Path, RouteError>;
}

impl<T: RoutingClient + ?Sized> RoutingClient for &T {
    fn route(&self, request: &RouteRequest) -> Result<Path, RouteError> {
        (**self).route(request)
    }
}

impl<T: RoutingClient + ?Sized> RoutingClient for std::sync::Arc<T> {
    fn route(&self, request: &RouteRequest) -> Result<Path, RouteError> {
        (**self).route(request)
    }
}

/// The map the route is drawn on.
pub trait MapSurface {
    /// Replace any drawn path with `path`.
    fn draw_path(&mut self, path: &Path);

    /// Remove the drawn path, leaving the map ready for a new one.
    fn clear_path(&mut self);

    /// Detach the whole route overlay from the map.
    fn remove_overlay(&mut self);
}

/// Whatever shows the running distance to the user.
pub trait DistanceLabel {
    fn show_distance(&mut self, distance: TotalDistance);
}
