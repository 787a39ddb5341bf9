//! Order Service Binary
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin order-service
//! ```
//!
//! # Environment Variables
//!
//! - `ORDER_SERVICE_CONFIG`: path to the YAML config (default: config.yaml)
//! - `RUST_LOG`: overrides the configured log level
//!
//! Any `${VAR:-default}` reference inside the config file is resolved from
//! the environment, after `.env` has been loaded.

use std::sync::Arc;

use anyhow::Context;
use order_service::config::{Config, load_config_or_default, resolve_config_path};
use order_service::infrastructure::http::{AppState, create_router};
use order_service::infrastructure::persistence::InMemoryOrderRepository;
use order_service::observability::{init_metrics, init_tracing};
use tokio::net::TcpListener;
use tokio::signal;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    load_dotenv();

    let config_path = resolve_config_path();
    let config = load_config_or_default(&config_path)
        .with_context(|| format!("loading configuration from {config_path}"))?;

    init_tracing(&config.observability.logging).context("initializing tracing")?;

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        config = %config_path,
        "Starting order service"
    );

    let app = build_app(&config)?;

    let addr = config
        .server
        .listen_addr()
        .context("server.bind_address is not an IP address")?;
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("binding HTTP listener on {addr}"))?;

    tracing::info!(
        %addr,
        allowed_origin = %config.cors.allowed_origin,
        "HTTP server listening"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server error")?;

    tracing::info!("Order service stopped");
    Ok(())
}

/// Wire the repository, use cases and router together.
fn build_app(config: &Config) -> anyhow::Result<axum::Router> {
    let order_repo = Arc::new(InMemoryOrderRepository::new());
    let mut state = AppState::new(order_repo, env!("CARGO_PKG_VERSION"));

    if config.observability.metrics.enabled {
        let handle = init_metrics().context("installing Prometheus recorder")?;
        state = state.with_metrics(handle);
        tracing::info!("Prometheus metrics enabled at /metrics");
    }

    let origin = config
        .cors
        .origin_header()
        .context("cors.allowed_origin is not a valid header value")?;

    Ok(create_router(state, origin))
}

/// Load .env from the current directory or the nearest ancestor that has one.
fn load_dotenv() {
    if dotenvy::dotenv().is_ok() {
        return;
    }

    if let Ok(cwd) = std::env::current_dir() {
        let mut dir = cwd.as_path();
        while let Some(parent) = dir.parent() {
            let env_path = parent.join(".env");
            if env_path.exists() {
                let _ = dotenvy::from_path(&env_path);
                return;
            }
            dir = parent;
        }
    }
}

/// Wait for SIGINT or SIGTERM.
///
/// # Panics
///
/// Panics if signal handlers cannot be installed; the process could not
/// otherwise be stopped cleanly.
#[allow(clippy::expect_used)]
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("signal handler installation is critical for graceful shutdown");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("SIGTERM handler installation is critical for graceful shutdown")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("Received Ctrl+C, initiating shutdown");
        }
        () = terminate => {
            tracing::info!("Received SIGTERM, initiating shutdown");
        }
    }
}
