//! Runtime configuration for the server and CLI.
//!
//! Values come from the environment (a `.env` file is honoured by `main`),
//! and command-line flags override them.

use std::net::SocketAddr;
use std::time::Duration;

use crate::{
    error::{LookupError, Result},
    mlb::{DEFAULT_TIMEOUT, MLB_BASE_URL},
};

pub const BIND_ENV_VAR: &str = "MLB_LOOKUP_BIND";
pub const API_BASE_URL_ENV_VAR: &str = "MLB_API_BASE_URL";
pub const TIMEOUT_ENV_VAR: &str = "MLB_HTTP_TIMEOUT_SECS";

pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:5000";

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub bind_addr: SocketAddr,
    pub api_base_url: String,
    pub http_timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 5000)),
            api_base_url: MLB_BASE_URL.to_string(),
            http_timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable lookup; blank values count as unset.
    pub fn from_vars<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let mut config = Self::default();

        if let Some(bind) = get(BIND_ENV_VAR) {
            config.bind_addr = parse_bind_addr(&bind)?;
        }
        if let Some(url) = get(API_BASE_URL_ENV_VAR) {
            config.api_base_url = url.trim().to_string();
        }
        if let Some(secs) = get(TIMEOUT_ENV_VAR) {
            config.http_timeout = parse_timeout_secs(&secs)?;
        }

        Ok(config)
    }

    pub fn with_overrides(
        mut self,
        bind_addr: Option<SocketAddr>,
        api_base_url: Option<String>,
        timeout_secs: Option<u64>,
    ) -> Result<Self> {
        if let Some(addr) = bind_addr {
            self.bind_addr = addr;
        }
        if let Some(url) = api_base_url {
            self.api_base_url = url;
        }
        if let Some(secs) = timeout_secs {
            self.http_timeout = timeout_from_secs(secs)?;
        }
        Ok(self)
    }
}

fn parse_bind_addr(raw: &str) -> Result<SocketAddr> {
    raw.trim().parse().map_err(|_| {
        LookupError::validation(format!(
            "{BIND_ENV_VAR} must be a socket address like {DEFAULT_BIND_ADDR}, got '{raw}'"
        ))
    })
}

fn parse_timeout_secs(raw: &str) -> Result<Duration> {
    let secs: u64 = raw.trim().parse()?;
    timeout_from_secs(secs)
}

fn timeout_from_secs(secs: u64) -> Result<Duration> {
    if secs == 0 {
        return Err(LookupError::validation("HTTP timeout must be at least one second"));
    }
    Ok(Duration::from_secs(secs))
}
