//! OSRM HTTP adapter for walking routes.

use std::env;

use reqwest::StatusCode;
use serde::Deserialize;

use crate::controller::RouteRequest;
use crate::error::RouteError;
use crate::path::{Path, PathLeg};
use crate::point::Point;
use crate::polyline::Polyline;
use crate::traits::RoutingClient;

#[derive(Debug, Clone)]
pub struct OsrmConfig {
    pub base_url: String,
    pub profile: String,
    pub timeout_secs: u64,
}

impl Default for OsrmConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:5000".to_string(),
            profile: "foot".to_string(),
            timeout_secs: 10,
        }
    }
}

impl OsrmConfig {
    /// Read `OSRM_BASE_URL`, `OSRM_PROFILE` and `OSRM_TIMEOUT_SECS`,
    /// falling back to the defaults for anything unset or unparsable.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        Self {
            base_url: lookup("OSRM_BASE_URL")
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or(defaults.base_url),
            profile: lookup("OSRM_PROFILE").unwrap_or(defaults.profile),
            timeout_secs: lookup("OSRM_TIMEOUT_SECS")
                .and_then(|secs| secs.parse().ok())
                .unwrap_or(defaults.timeout_secs),
        }
    }
}

#[derive(Debug, Clone)]
pub struct OsrmClient {
    config: OsrmConfig,
    client: reqwest::blocking::Client,
}

impl OsrmClient {
    pub fn new(config: OsrmConfig) -> Result<Self, reqwest::Error> {
        let client = reqwest::blocking::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self { config, client })
    }

    pub fn config(&self) -> &OsrmConfig {
        &self.config
    }

    fn route_url(&self, points: &[Point]) -> String {
        let coords = points
            .iter()
            .map(|point| format!("{:.6},{:.6}", point.lng(), point.lat()))
            .collect::<Vec<_>>()
            .join(";");

        format!(
            "{}/route/v1/{}/{}?overview=false&steps=true&geometries=geojson",
            self.config.base_url, self.config.profile, coords
        )
    }
}

impl RoutingClient for OsrmClient {
    #[tracing::instrument(skip_all, fields(request = %request.id))]
    fn route(&self, request: &RouteRequest) -> Result<Path, RouteError> {
        let points = request.coordinates();
        if points.len() < 2 {
            return Err(RouteError::InvalidRequest("need at least two coordinates".to_string()));
        }

        let response = self.client.get(self.route_url(&points)).send()?;
        let status = response.status();
        let body = response.text()?;
        path_from_http(status, &body)
    }
}

fn path_from_http(status: StatusCode, body: &str) -> Result<Path, RouteError> {
    // rate limiting and timeouts are the service's trouble, not the query's
    if status.is_server_error()
        || status == StatusCode::TOO_MANY_REQUESTS
        || status == StatusCode::REQUEST_TIMEOUT
    {
        return Err(RouteError::ServiceUnavailable(format!("HTTP {}", status)));
    }

    // OSRM reports NoRoute and friends as 400s with a JSON body
    let body = match serde_json::from_str::<OsrmRouteResponse>(body) {
        Ok(body) => body,
        Err(_) if status.is_client_error() => {
            return Err(RouteError::InvalidRequest(format!("HTTP {}", status)));
        }
        Err(err) => {
            return Err(RouteError::ServiceUnavailable(format!("malformed response: {}", err)));
        }
    };

    tracing::debug!(code = %body.code, routes = body.routes.len(), "OSRM response");
    path_from_response(body)
}

fn path_from_response(body: OsrmRouteResponse) -> Result<Path, RouteError> {
    let reason = || body.message.clone().unwrap_or_else(|| body.code.clone());

    match body.code.as_str() {
        "Ok" => {}
        "NoRoute" | "NoSegment" => return Err(RouteError::RouteNotFound),
        "InvalidQuery" | "InvalidValue" | "InvalidUrl" | "InvalidOptions" | "InvalidService"
        | "InvalidVersion" | "TooBig" => return Err(RouteError::InvalidRequest(reason())),
        _ => return Err(RouteError::ServiceUnavailable(reason())),
    }

    let route = body.routes.into_iter().next().ok_or(RouteError::RouteNotFound)?;
    let legs = route
        .legs
        .into_iter()
        .map(|leg| {
            let mut geometry = Polyline::default();
            for step in &leg.steps {
                geometry.join(&step.geometry.to_polyline());
            }
            PathLeg {
                distance_m: leg.distance,
                duration_s: leg.duration,
                geometry,
            }
        })
        .collect();

    Ok(Path::new(legs))
}

#[derive(Debug, Deserialize)]
struct OsrmRouteResponse {
    code: String,
    message: Option<String>,
    #[serde(default)]
    routes: Vec<OsrmRoute>,
}

#[derive(Debug, Deserialize)]
struct OsrmRoute {
    #[serde(default)]
    legs: Vec<OsrmLeg>,
}

#[derive(Debug, Deserialize)]
struct OsrmLeg {
    distance: f64,
    duration: f64,
    #[serde(default)]
    steps: Vec<OsrmStep>,
}

#[derive(Debug, Deserialize)]
struct OsrmStep {
    geometry: OsrmGeometry,
}

/// GeoJSON LineString; positions are `[lng, lat]`.
#[derive(Debug, Deserialize)]
struct OsrmGeometry {
    coordinates: Vec<[f64; 2]>,
}

impl OsrmGeometry {
    fn to_polyline(&self) -> Polyline {
        self.coordinates
            .iter()
            .map(|[lng, lat]| Point::new(*lat, *lng))
            .collect()
    }
}
