//! Server settings read from the environment.

use std::net::SocketAddr;
use std::time::Duration;

pub const DEFAULT_ALLOWED_ORIGIN: &str = "http://localhost:3000";
pub const DEFAULT_FETCH_TIMEOUT_SECS: u64 = 15;
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 60;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{var} is not a valid socket address: {value}")]
    InvalidAddr { var: &'static str, value: String },

    #[error("{var} must be a positive number of seconds, got {value}")]
    InvalidSeconds { var: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub addr: SocketAddr,
    /// Origins allowed by CORS.
    pub allowed_origins: Vec<String>,
    /// Timeout for each upstream request (page, robots.txt, sitemap).
    pub fetch_timeout: Duration,
    /// Upper bound for one `/analyze` call as a whole.
    pub request_timeout: Duration,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: SocketAddr::from(([0, 0, 0, 0], 8000)),
            allowed_origins: vec![DEFAULT_ALLOWED_ORIGIN.to_string()],
            fetch_timeout: Duration::from_secs(DEFAULT_FETCH_TIMEOUT_SECS),
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
        }
    }
}

impl ServerConfig {
    /// Reads `SEOLENS_ADDR`, `SEOLENS_ALLOWED_ORIGINS`, `SEOLENS_TIMEOUT_SECS`
    /// and `SEOLENS_REQUEST_TIMEOUT_SECS`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let addr = match lookup("SEOLENS_ADDR") {
            Some(value) => value
                .trim()
                .parse::<SocketAddr>()
                .map_err(|_| ConfigError::InvalidAddr { var: "SEOLENS_ADDR", value: value.clone() })?,
            None => defaults.addr,
        };

        let allowed_origins = lookup("SEOLENS_ALLOWED_ORIGINS")
            .map(|value| {
                value
                    .split(',')
                    .map(str::trim)
                    .filter(|origin| !origin.is_empty())
                    .map(String::from)
                    .collect::<Vec<_>>()
            })
            .filter(|origins| !origins.is_empty())
            .unwrap_or(defaults.allowed_origins);

        let fetch_timeout = seconds(&lookup, "SEOLENS_TIMEOUT_SECS", DEFAULT_FETCH_TIMEOUT_SECS)?;
        let request_timeout = seconds(&lookup, "SEOLENS_REQUEST_TIMEOUT_SECS", DEFAULT_REQUEST_TIMEOUT_SECS)?;

        Ok(Self { addr, allowed_origins, fetch_timeout, request_timeout })
    }
}

fn seconds(lookup: &impl Fn(&str) -> Option<String>, var: &'static str, default: u64) -> Result<Duration, ConfigError> {
    let Some(value) = lookup(var) else {
        return Ok(Duration::from_secs(default));
    };

    let parsed = value.trim().parse::<u64>();
    match parsed {
        Ok(secs) if secs > 0 => Ok(Duration::from_secs(secs)),
        _ => Err(ConfigError::InvalidSeconds { var, value }),
    }
}
