//! Server configuration read from the environment.
//!
//! | Variable | Default |
//! |---|---|
//! | `HOST` | `0.0.0.0` |
//! | `PORT` | `8080` |
//!
//! Empty or whitespace-only values fall back to the default.

use std::env;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use thiserror::Error;

/// Default listening port.
pub const DEFAULT_PORT: u16 = 8080;

/// Errors raised while reading configuration.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// `HOST` is not an IP address.
    #[error("invalid HOST '{0}', expected an IP address")]
    InvalidHost(String),

    /// `PORT` is not a valid port number.
    #[error("invalid PORT '{0}', expected an integer between 0 and 65535")]
    InvalidPort(String),
}

/// Address the HTTP server binds to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServerConfig {
    /// Interface to listen on.
    pub host: IpAddr,
    /// Port to listen on.
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
        }
    }
}

impl ServerConfig {
    /// Reads the configuration from process environment variables.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a variable is set to an unparsable value.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Reads the configuration through `lookup`, which maps a variable name
    /// to its value.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a variable is set to an unparsable value.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        let non_empty = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_owned())
                .filter(|value| !value.is_empty())
        };

        let host = match non_empty("HOST") {
            Some(value) => value
                .parse()
                .map_err(|_| ConfigError::InvalidHost(value.clone()))?,
            None => defaults.host,
        };
        let port = match non_empty("PORT") {
            Some(value) => value
                .parse()
                .map_err(|_| ConfigError::InvalidPort(value.clone()))?,
            None => defaults.port,
        };

        Ok(Self { host, port })
    }

    /// Returns the socket address to bind.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}
