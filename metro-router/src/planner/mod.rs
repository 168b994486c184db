//! Route planner.
//!
//! Finds the least-cost route between two stations, where cost counts
//! hops plus a penalty for every change of line, and reports the path with
//! per-step line and direction labels.

mod config;
mod route;
mod search;


pub use config::RouteConfig;
pub use route::{PathSegment, RouteResult};
pub use search::{RouteError, RoutePlanner, RouteRequest};
