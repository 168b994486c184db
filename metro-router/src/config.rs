//! Server configuration.
//!
//! The only environment-driven settings are where to listen. Route
//! weights live in [`crate::planner::RouteConfig`].

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

/// Default listening port.
pub const DEFAULT_PORT: u16 = 3000;

/// Errors reading server configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// `PORT` is not a valid port number
    #[error("invalid PORT {0:?}: expected an integer between 0 and 65535")]
    InvalidPort(String),

    /// `BIND_ADDR` is not a valid IP address
    #[error("invalid BIND_ADDR {0:?}: expected an IP address")]
    InvalidBindAddr(String),
}

/// Where the HTTP server listens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Address to bind.
    pub bind_addr: IpAddr,

    /// Port to listen on.
    pub port: u16,
}

impl ServerConfig {
    /// Read configuration from the process environment.
    ///
    /// `PORT` defaults to 3000 and `BIND_ADDR` to 127.0.0.1.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through a variable lookup function.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port = match lookup("PORT") {
            Some(raw) => raw
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidPort(raw))?,
            None => DEFAULT_PORT,
        };

        let bind_addr = match lookup("BIND_ADDR") {
            Some(raw) => raw
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidBindAddr(raw))?,
            None => IpAddr::V4(Ipv4Addr::LOCALHOST),
        };

        Ok(Self { bind_addr, port })
    }

    /// Returns the socket address to bind.
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind_addr, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: IpAddr::V4(Ipv4Addr::LOCALHOST),
            port: DEFAULT_PORT,
        }
    }
}
