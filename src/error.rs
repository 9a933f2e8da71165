//! Errors reported by routing clients.

use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum RouteError {
    /// The service found no walkable path through the requested stops.
    RouteNotFound,
    /// The service could not be reached or failed internally.
    ServiceUnavailable(String),
    /// The service rejected the request itself.
    InvalidRequest(String),
}

impl fmt::Display for RouteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RouteError::RouteNotFound => write!(f, "no route found"),
            RouteError::ServiceUnavailable(reason) => write!(f, "routing service unavailable: {}", reason),
            RouteError::InvalidRequest(reason) => write!(f, "invalid route request: {}", reason),
        }
    }
}

impl std::error::Error for RouteError {}

impl From<reqwest::Error> for RouteError {
    fn from(err: reqwest::Error) -> Self {
        RouteError::ServiceUnavailable(err.to_string())
    }
}
