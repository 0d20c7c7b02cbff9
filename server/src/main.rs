//! AETHER site server: Leptos SSR, compiled client assets and public files.

#![recursion_limit = "256"]

mod config;
mod error;
mod routes;

use tracing_subscriber::EnvFilter;

use crate::config::{LogFormat, ServerConfig};
use crate::error::ServerError;

#[tokio::main]
async fn main() {
    // A missing .env is normal outside local development.
    let dotenv = dotenvy::dotenv();

    let config = match ServerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            init_tracing(LogFormat::Text);
            tracing::error!(error = %e, "invalid configuration");
            std::process::exit(1);
        }
    };
    init_tracing(config.log_format);
    if let Ok(path) = dotenv {
        tracing::debug!(path = %path.display(), "loaded .env");
    }

    if let Err(e) = run(config).await {
        tracing::error!(error = %e, "server stopped");
        std::process::exit(1);
    }
}

/// Install the global subscriber. `RUST_LOG` overrides the default filter,
/// and `log` records from the client crate are forwarded into tracing.
fn init_tracing(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,server=debug,client=info"));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    match format {
        LogFormat::Text => builder.init(),
        LogFormat::Json => builder.json().init(),
    }
}

async fn run(config: ServerConfig) -> Result<(), ServerError> {
    let app = routes::app(&config)?;
    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|source| ServerError::Bind { addr: addr.clone(), source })?;

    tracing::info!(%addr, public_dir = %config.public_dir.display(), "aether listening");
    axum::serve(listener, app).await.map_err(ServerError::Serve)
}
