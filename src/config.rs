//! Runtime configuration read from environment variables.
//!
//! - `TRANSIT_REPORTS_PORT` - listen port (default 3000)
//! - `TRANSIT_REPORTS_BACKEND_URL` - reports backend base URL

use std::env;

use crate::client::DEFAULT_BACKEND_URL;

/// Default port if not specified via environment variable.
pub const DEFAULT_PORT: u16 = 3000;

pub const PORT_VAR: &str = "TRANSIT_REPORTS_PORT";
pub const BACKEND_URL_VAR: &str = "TRANSIT_REPORTS_BACKEND_URL";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub port: u16,
    pub backend_url: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            backend_url: DEFAULT_BACKEND_URL.to_string(),
        }
    }
}

impl Config {
    /// Load configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    ///
    /// An unparsable port or blank URL falls back to its default.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = lookup(PORT_VAR)
            .and_then(|p| p.trim().parse().ok())
            .unwrap_or(DEFAULT_PORT);

        let backend_url = lookup(BACKEND_URL_VAR)
            .map(|url| url.trim().trim_end_matches('/').to_string())
            .filter(|url| !url.is_empty())
            .unwrap_or_else(|| DEFAULT_BACKEND_URL.to_string());

        Self { port, backend_url }
    }
}
