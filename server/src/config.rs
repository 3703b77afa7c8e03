//! Server configuration parsed from environment variables.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_LOG_FILTER: &str = "folio_server=info,tower_http=info";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid PORT: {0}")]
    InvalidPort(String),
    #[error("invalid FOLIO_BIND_ADDR: {0}")]
    InvalidBindAddr(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub bind_addr: IpAddr,
    pub port: u16,
    pub log_filter: String,
}

impl ServerConfig {
    /// Build typed server config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `FOLIO_BIND_ADDR`: default `0.0.0.0`
    /// - `RUST_LOG`: tracing filter, default `folio_server=info,tower_http=info`
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` when `PORT` or `FOLIO_BIND_ADDR` is set but
    /// does not parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        let port = match std::env::var("PORT") {
            Ok(raw) => raw.trim().parse::<u16>().map_err(|_| ConfigError::InvalidPort(raw))?,
            Err(_) => DEFAULT_PORT,
        };
        let bind_addr = match std::env::var("FOLIO_BIND_ADDR") {
            Ok(raw) => raw.trim().parse::<IpAddr>().map_err(|_| ConfigError::InvalidBindAddr(raw))?,
            Err(_) => IpAddr::V4(Ipv4Addr::UNSPECIFIED),
        };
        let log_filter = std::env::var("RUST_LOG")
            .ok()
            .filter(|f| !f.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_owned());

        Ok(Self { bind_addr, port, log_filter })
    }

    #[must_use]
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind_addr, self.port)
    }
}
