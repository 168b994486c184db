use std::process::ExitCode;

use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use metro_router::config::ServerConfig;
use metro_router::network::Network;
use metro_router::planner::RouteConfig;
use metro_router::web::{AppState, create_router};

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let server_config = match ServerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!(error = %e, "Invalid configuration");
            return ExitCode::FAILURE;
        }
    };

    // A malformed network makes the service meaningless, so refuse to start.
    let network = match Network::city() {
        Ok(network) => network,
        Err(e) => {
            error!(error = %e, "Invalid transit network");
            return ExitCode::FAILURE;
        }
    };
    info!(
        lines = network.lines().len(),
        stations = network.station_count(),
        "Loaded transit network"
    );

    let state = AppState::new(network, RouteConfig::default());
    let app = create_router(state);

    let addr = server_config.socket_addr();
    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(listener) => listener,
        Err(e) => {
            error!(%addr, error = %e, "Failed to bind");
            return ExitCode::FAILURE;
        }
    };

    info!("Metro route planner listening on http://{addr}");
    info!("  GET  /health          - Health check");
    info!("  GET  /stations        - List stations");
    info!("  POST /calculate-route - Calculate a route");

    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        error!(error = %e, "Server error");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("Shutting down");
}
