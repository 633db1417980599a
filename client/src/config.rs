//! Client configuration resolved at build time.
//!
//! Optional overrides (read with `option_env!` when the WASM bundle is built):
//! - `PORTFOLIO_API_BASE`: backend origin, default `http://localhost:5000`
//! - `PORTFOLIO_LOADING_DELAY_MS`: loading-screen duration, default 2500

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::time::Duration;

pub const DEFAULT_API_BASE: &str = "http://localhost:5000";
pub const DEFAULT_LOADING_DELAY_MS: u64 = 2500;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Backend origin without a trailing slash.
    pub api_base: String,
    pub loading_delay: Duration,
}

impl ClientConfig {
    pub fn from_build_env() -> Self {
        Self::from_values(option_env!("PORTFOLIO_API_BASE"), option_env!("PORTFOLIO_LOADING_DELAY_MS"))
    }

    fn from_values(api_base: Option<&str>, loading_delay_ms: Option<&str>) -> Self {
        let api_base = api_base
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .unwrap_or(DEFAULT_API_BASE)
            .trim_end_matches('/')
            .to_owned();
        let delay_ms = loading_delay_ms
            .and_then(|v| v.trim().parse::<u64>().ok())
            .unwrap_or(DEFAULT_LOADING_DELAY_MS);
        Self { api_base, loading_delay: Duration::from_millis(delay_ms) }
    }

    /// Absolute URL for an API path such as `/api/portfolio/profile`.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.api_base)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::from_values(None, None)
    }
}
