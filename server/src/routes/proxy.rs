//! Pass-through proxy from `/api-backend/*` to the appointment backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser calls same-origin `/api-backend/api/...`; this handler replays
//! the request against `BACKEND_BASE_URL/api/...` with method, query, body
//! and end-to-end headers intact. It holds no logic of its own: auth is the
//! backend's job.

#[cfg(test)]
#[path = "proxy_test.rs"]
mod proxy_test;

use axum::body::{Body, Bytes};
use axum::extract::{Path, State};
use axum::http::{HeaderMap, Method, Uri};
use axum::response::Response;

use crate::error::HostError;
use crate::state::AppState;

/// Hop-by-hop headers plus the ones the client library recomputes.
const SKIPPED_HEADERS: [&str; 10] = [
    "connection",
    "keep-alive",
    "host",
    "content-length",
    "transfer-encoding",
    "te",
    "trailer",
    "upgrade",
    "proxy-authorization",
    "proxy-authenticate",
];

/// Target URL for a proxied path and optional query string.
#[must_use]
pub fn backend_url(base_url: &str, path: &str, query: Option<&str>) -> String {
    let base = base_url.trim_end_matches('/');
    let path = path.trim_start_matches('/');
    match query.filter(|q| !q.is_empty()) {
        Some(query) => format!("{base}/{path}?{query}"),
        None => format!("{base}/{path}"),
    }
}

/// Copy end-to-end headers, dropping hop-by-hop ones.
#[must_use]
pub fn forwarded_headers(incoming: &HeaderMap) -> HeaderMap {
    let mut out = HeaderMap::with_capacity(incoming.len());
    for (name, value) in incoming {
        if SKIPPED_HEADERS.contains(&name.as_str()) {
            continue;
        }
        out.append(name.clone(), value.clone());
    }
    out
}

/// Proxy one request.
///
/// # Errors
///
/// Returns [`HostError::Upstream`] (502) when the backend is unreachable or
/// the response body cannot be read. Backend error statuses pass through.
pub async fn forward(
    State(state): State<AppState>,
    Path(path): Path<String>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Response, HostError> {
    let url = backend_url(&state.config.backend_base_url, &path, uri.query());
    tracing::debug!(%method, %url, "proxying request");

    let upstream = state
        .http
        .request(method.clone(), &url)
        .headers(forwarded_headers(&headers))
        .body(body)
        .send()
        .await
        .map_err(|e| {
            tracing::warn!(%method, %url, error = %e, "backend unreachable");
            HostError::Upstream(e.to_string())
        })?;

    let status = upstream.status();
    let response_headers = forwarded_headers(upstream.headers());
    let bytes = upstream
        .bytes()
        .await
        .map_err(|e| HostError::Upstream(e.to_string()))?;
    tracing::debug!(%method, %url, %status, bytes = bytes.len(), "backend responded");

    let mut response = Response::new(Body::from(bytes));
    *response.status_mut() = status;
    *response.headers_mut() = response_headers;
    Ok(response)
}
