//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! holds the parsed config and one pooled HTTP client for the backend.

use std::sync::Arc;
use std::time::Duration;

use crate::config::HostConfig;
use crate::error::HostError;

/// Clone is required by Axum; the config is Arc-wrapped and `reqwest::Client`
/// is a shared handle.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<HostConfig>,
    pub http: reqwest::Client,
}

impl AppState {
    /// # Errors
    ///
    /// Returns [`HostError::HttpClient`] if the TLS backend cannot be set up.
    pub fn new(config: HostConfig) -> Result<Self, HostError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .danger_accept_invalid_certs(config.accept_invalid_certs)
            .redirect(reqwest::redirect::Policy::none())
            .build()
            .map_err(|e| HostError::HttpClient(e.to_string()))?;
        Ok(Self { config: Arc::new(config), http })
    }
}
