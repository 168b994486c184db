//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::planner::{PathSegment, RouteResult};

/// Message attached to the zero-length route.
pub const ALREADY_THERE: &str = "You are already at your destination.";

/// Request to calculate a route.
///
/// Both fields are optional at the wire level so that a missing field is
/// reported as a bad request rather than a deserialization failure.
#[derive(Debug, Default, Deserialize)]
pub struct CalculateRouteRequest {
    /// Origin station name
    pub start: Option<String>,

    /// Destination station name
    pub end: Option<String>,
}

/// One station on a returned route.
#[derive(Debug, Serialize)]
pub struct PathStep {
    /// Station name
    pub station: String,

    /// Line used to arrive; null for the origin
    pub line: Option<String>,

    /// Direction of travel, e.g. "towards Maze Road"; null for the origin
    pub direction: Option<String>,
}

/// Response for route calculation.
#[derive(Debug, Serialize)]
pub struct RouteResponse {
    /// Stations visited, origin first
    pub path: Vec<PathStep>,

    /// Estimated travel time in minutes
    pub time: i64,

    /// Hops plus line-change penalties
    pub cost: u32,

    /// Informational message, present for the zero-length route
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}

// Conversion implementations

impl PathStep {
    /// Create from a route segment.
    pub fn from_segment(segment: &PathSegment) -> Self {
        Self {
            station: segment.station.to_string(),
            line: segment.line.as_ref().map(ToString::to_string),
            direction: segment.direction.as_ref().map(ToString::to_string),
        }
    }
}

impl RouteResponse {
    /// Create from a route result.
    pub fn from_route(route: &RouteResult) -> Self {
        let message = route.is_trivial().then(|| ALREADY_THERE.to_string());

        Self {
            path: route.segments().iter().map(PathStep::from_segment).collect(),
            time: route.time_minutes(),
            cost: route.cost(),
            message,
        }
    }
}
