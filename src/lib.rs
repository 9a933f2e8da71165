//! walk-route core
//!
//! Builds a walking route from successive map clicks: the waypoint
//! sequence, its great-circle length, and the routing requests that keep
//! a drawn path in step with it.

pub mod point;
pub mod haversine;
pub mod route;
pub mod path;
pub mod polyline;
pub mod error;
pub mod traits;
pub mod controller;
pub mod session;
pub mod osrm;
pub mod osrm_data;

pub use controller::{
    ControllerConfig, ControllerState, InputEvent, RequestId, RequestLayout, ResponseOutcome,
    RouteController, RouteRequest,
};
pub use error::RouteError;
pub use path::{Path, PathLeg, TravelMode};
pub use point::{Point, Waypoint};
pub use route::{Route, TotalDistance};
pub use session::{RouteSession, SessionConfig};
pub use traits::{DistanceLabel, MapSurface, RoutingClient};
