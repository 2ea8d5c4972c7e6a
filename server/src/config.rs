//! Server configuration parsed from environment variables.
//!
//! `HOST` and `PORT` override the matching halves of the Leptos `site_addr`
//! (set by cargo-leptos or `[workspace.metadata.leptos]`). Parsing works on
//! raw `Option<&str>` values so it can be tested without touching the
//! process environment.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::net::{IpAddr, SocketAddr};

use thiserror::Error;

pub const DEFAULT_LOG_FILTER: &str = "portal_server=info,tower_http=info,info";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid HOST {value:?}: expected an IP address")]
    InvalidHost { value: String },
    #[error("invalid PORT {value:?}: expected an integer in 0..=65535")]
    InvalidPort { value: String },
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: Option<IpAddr>,
    pub port: Option<u16>,
}

impl ServerConfig {
    /// Build config from `HOST` and `PORT`. Both are optional.
    ///
    /// # Errors
    ///
    /// Returns an error if either variable is set but does not parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        let host = std::env::var("HOST").ok();
        let port = std::env::var("PORT").ok();
        Self::from_values(host.as_deref(), port.as_deref())
    }

    /// # Errors
    ///
    /// Returns an error if `host` is not an IP address or `port` is not a `u16`.
    pub fn from_values(host: Option<&str>, port: Option<&str>) -> Result<Self, ConfigError> {
        Ok(Self { host: parse_host(host)?, port: parse_port(port)? })
    }

    /// Address to bind, starting from the Leptos `site_addr`.
    #[must_use]
    pub fn bind_addr(&self, site_addr: SocketAddr) -> SocketAddr {
        SocketAddr::new(self.host.unwrap_or(site_addr.ip()), self.port.unwrap_or(site_addr.port()))
    }
}

fn non_empty(raw: Option<&str>) -> Option<&str> {
    raw.map(str::trim).filter(|v| !v.is_empty())
}

fn parse_host(raw: Option<&str>) -> Result<Option<IpAddr>, ConfigError> {
    non_empty(raw)
        .map(|value| value.parse::<IpAddr>().map_err(|_| ConfigError::InvalidHost { value: value.to_owned() }))
        .transpose()
}

fn parse_port(raw: Option<&str>) -> Result<Option<u16>, ConfigError> {
    non_empty(raw)
        .map(|value| value.parse::<u16>().map_err(|_| ConfigError::InvalidPort { value: value.to_owned() }))
        .transpose()
}
