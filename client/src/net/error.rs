//! REST failure taxonomy and how each failure surfaces in the UI.
//!
//! ERROR HANDLING
//! ==============
//! Nothing here is fatal. A 401 sends the user to the audience login page;
//! every other failure becomes an inline message on the current page.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use crate::net::types::Role;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("unauthorized")]
    Unauthorized,
    #[error("not allowed")]
    Forbidden,
    #[error("not found: {0}")]
    NotFound(String),
    /// 400/409 validation or conflict. Carries the backend's message.
    #[error("{0}")]
    Rejected(String),
    #[error("request failed ({status}): {message}")]
    Status { status: u16, message: String },
    #[error("network error: {0}")]
    Network(String),
    #[error("unexpected response: {0}")]
    Decode(String),
    #[error("not available on server")]
    Unavailable,
}

/// What the page should do with a failed call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ErrorOutcome {
    Redirect(&'static str),
    Inline(String),
}

impl ApiError {
    /// Classify a non-2xx response by status and body text.
    #[must_use]
    pub fn from_response(status: u16, body: &str) -> Self {
        let message = response_message(body);
        match status {
            401 => Self::Unauthorized,
            403 => Self::Forbidden,
            404 => Self::NotFound(message.unwrap_or_else(|| "not found".to_owned())),
            400 | 409 | 422 => Self::Rejected(message.unwrap_or_else(|| "request rejected".to_owned())),
            _ => Self::Status { status, message: message.unwrap_or_default() },
        }
    }

    /// Validation failure whose message says the record was already handled
    /// (double cancel, completing a cancelled visit, ...).
    #[must_use]
    pub fn is_already_processed(&self) -> bool {
        matches!(self, Self::Rejected(msg) if msg.to_ascii_lowercase().contains("already"))
    }

    /// Message shown inline, with `fallback` for failures that carry nothing
    /// useful for a person to read.
    #[must_use]
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            Self::Forbidden => "Not allowed".to_owned(),
            Self::NotFound(_) => "Not found".to_owned(),
            Self::Rejected(_) if self.is_already_processed() => "This appointment was already processed".to_owned(),
            Self::Rejected(msg) => msg.clone(),
            Self::Status { message, .. } if !message.is_empty() => message.clone(),
            Self::Unauthorized
            | Self::Status { .. }
            | Self::Network(_)
            | Self::Decode(_)
            | Self::Unavailable => fallback.to_owned(),
        }
    }

    /// Map to a page outcome for a visitor of the given audience.
    #[must_use]
    pub fn outcome(&self, audience: Role, fallback: &str) -> ErrorOutcome {
        match self {
            Self::Unauthorized => ErrorOutcome::Redirect(audience.login_path()),
            other => ErrorOutcome::Inline(other.user_message(fallback)),
        }
    }
}

/// Pull a human-readable message out of an error body.
///
/// Accepts `{"message": ..}`, `{"title": ..}`, `{"error": ..}`, a bare JSON
/// string, or plain text.
fn response_message(body: &str) -> Option<String> {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return None;
    }
    match serde_json::from_str::<serde_json::Value>(trimmed) {
        Ok(serde_json::Value::String(s)) => Some(s).filter(|s| !s.is_empty()),
        Ok(serde_json::Value::Object(map)) => ["message", "title", "error", "detail"]
            .iter()
            .find_map(|key| map.get(*key).and_then(serde_json::Value::as_str))
            .filter(|s| !s.is_empty())
            .map(str::to_owned),
        Ok(_) => None,
        Err(_) => Some(trimmed.to_owned()),
    }
}
