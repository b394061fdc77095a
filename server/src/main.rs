mod config;
mod error;
mod routes;
mod state;

use crate::config::HostConfig;
use crate::error::HostError;

#[tokio::main]
async fn main() -> Result<(), HostError> {
    // A missing .env file is normal outside local development.
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let config = HostConfig::from_env()?;
    let port = config.port;
    tracing::info!(
        backend = %config.backend_base_url,
        accept_invalid_certs = config.accept_invalid_certs,
        timeout_secs = config.timeout_secs,
        "host configured"
    );
    if config.accept_invalid_certs {
        tracing::warn!("backend TLS certificate validation is disabled");
    }

    let state = state::AppState::new(config)?;
    let app = routes::app(state)?;
    let listener = tokio::net::TcpListener::bind(("0.0.0.0", port)).await?;

    tracing::info!(%port, "medbook listening");
    axum::serve(listener, app).await?;
    Ok(())
}
