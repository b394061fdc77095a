//! Host configuration parsed from environment variables.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use crate::error::HostError;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_BACKEND_BASE_URL: &str = "https://localhost:7081";
pub const DEFAULT_BACKEND_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostConfig {
    pub port: u16,
    pub backend_base_url: String,
    pub accept_invalid_certs: bool,
    pub timeout_secs: u64,
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            backend_base_url: DEFAULT_BACKEND_BASE_URL.to_owned(),
            accept_invalid_certs: false,
            timeout_secs: DEFAULT_BACKEND_TIMEOUT_SECS,
        }
    }
}

impl HostConfig {
    /// Build typed host config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `BACKEND_BASE_URL`: default `https://localhost:7081`
    /// - `BACKEND_ACCEPT_INVALID_CERTS`: `true`/`false`, default false
    /// - `BACKEND_TIMEOUT_SECS`: default 30
    ///
    /// # Errors
    ///
    /// Returns [`HostError::Config`] when a set variable does not parse.
    pub fn from_env() -> Result<Self, HostError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`Self::from_env`] over an arbitrary variable source.
    ///
    /// # Errors
    ///
    /// Returns [`HostError::Config`] when a set variable does not parse.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, HostError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let value = |key: &str| lookup(key).map(|v| v.trim().to_owned()).filter(|v| !v.is_empty());

        let port = match value("PORT") {
            Some(raw) => raw.parse::<u16>().map_err(|e| config_error("PORT", &e))?,
            None => DEFAULT_PORT,
        };
        let backend_base_url = value("BACKEND_BASE_URL")
            .unwrap_or_else(|| DEFAULT_BACKEND_BASE_URL.to_owned())
            .trim_end_matches('/')
            .to_owned();
        if !backend_base_url.starts_with("http://") && !backend_base_url.starts_with("https://") {
            return Err(HostError::Config {
                var: "BACKEND_BASE_URL",
                reason: format!("expected an http(s) URL, got {backend_base_url:?}"),
            });
        }
        let accept_invalid_certs = match value("BACKEND_ACCEPT_INVALID_CERTS") {
            Some(raw) => parse_bool(&raw).ok_or_else(|| HostError::Config {
                var: "BACKEND_ACCEPT_INVALID_CERTS",
                reason: format!("expected true/false, got {raw:?}"),
            })?,
            None => false,
        };
        let timeout_secs = match value("BACKEND_TIMEOUT_SECS") {
            Some(raw) => raw
                .parse::<u64>()
                .map_err(|e| config_error("BACKEND_TIMEOUT_SECS", &e))?,
            None => DEFAULT_BACKEND_TIMEOUT_SECS,
        };

        Ok(Self { port, backend_base_url, accept_invalid_certs, timeout_secs })
    }
}

fn config_error(var: &'static str, err: &dyn std::fmt::Display) -> HostError {
    HostError::Config { var, reason: err.to_string() }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
