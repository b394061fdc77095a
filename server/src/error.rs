//! Host error type and its HTTP mapping.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// Errors produced while starting the host or forwarding a request.
#[derive(Debug, thiserror::Error)]
pub enum HostError {
    /// An environment variable is set but does not parse.
    #[error("invalid config {var}: {reason}")]
    Config { var: &'static str, reason: String },
    /// The backend HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    HttpClient(String),
    /// The Leptos options could not be loaded.
    #[error("leptos configuration: {0}")]
    Leptos(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    /// The backend could not be reached or its response could not be read.
    #[error("backend request failed: {0}")]
    Upstream(String),
}

impl HostError {
    #[must_use]
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Upstream(_) => StatusCode::BAD_GATEWAY,
            Self::Config { .. } | Self::HttpClient(_) | Self::Leptos(_) | Self::Io(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for HostError {
    fn into_response(self) -> Response {
        let status = self.status();
        tracing::warn!(%status, error = %self, "request failed");
        (status, Json(serde_json::json!({ "message": self.to_string() }))).into_response()
    }
}
