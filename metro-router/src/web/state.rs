//! Application state for the web layer.

use std::sync::Arc;

use crate::network::Network;
use crate::planner::{RouteConfig, RoutePlanner};

/// Shared application state.
///
/// The network is built once at startup and only read afterwards, so
/// handlers share it without locking.
#[derive(Clone)]
pub struct AppState {
    /// The transit network
    pub network: Arc<Network>,

    /// Route weighting configuration
    pub config: Arc<RouteConfig>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(network: Network, config: RouteConfig) -> Self {
        Self {
            network: Arc::new(network),
            config: Arc::new(config),
        }
    }

    /// A planner borrowing this state.
    pub fn planner(&self) -> RoutePlanner<'_> {
        RoutePlanner::new(&self.network, &self.config)
    }
}
