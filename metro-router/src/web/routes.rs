//! HTTP route handlers.

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use crate::planner::{RouteError, RouteRequest};

use super::dto::*;
use super::state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/stations", get(list_stations))
        .route("/calculate-route", post(calculate_route))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// List every station once, in line declaration order.
async fn list_stations(State(state): State<AppState>) -> Json<Vec<String>> {
    Json(
        state
            .network
            .stations()
            .iter()
            .map(ToString::to_string)
            .collect(),
    )
}

/// Calculate the least-cost route between two stations.
async fn calculate_route(
    State(state): State<AppState>,
    body: Result<Json<CalculateRouteRequest>, JsonRejection>,
) -> Result<Json<RouteResponse>, AppError> {
    let Json(req) = body.map_err(|e| AppError::BadRequest {
        message: format!("Invalid request body: {}", e.body_text()),
    })?;

    let (Some(start), Some(end)) = (req.start, req.end) else {
        return Err(AppError::BadRequest {
            message: "Both start and end stations are required".to_string(),
        });
    };

    let request = RouteRequest::new(start, end);
    let route = state.planner().find_route(&request)?;

    info!(
        start = %route.origin(),
        end = %route.destination(),
        hops = route.hops(),
        cost = route.cost(),
        "Route calculated"
    );

    Ok(Json(RouteResponse::from_route(&route)))
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    NotFound { message: String },
}

impl From<RouteError> for AppError {
    fn from(e: RouteError) -> Self {
        match e {
            RouteError::InvalidInput(_) | RouteError::UnknownStation(_) => AppError::BadRequest {
                message: e.to_string(),
            },
            RouteError::NoRouteFound { .. } => AppError::NotFound {
                message: e.to_string(),
            },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message),
        };

        warn!(%status, %message, "Request rejected");

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
