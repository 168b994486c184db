//! Web layer for the route planner.
//!
//! Provides HTTP endpoints for listing stations and calculating routes.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
