//! # corpdashd: corporate dashboard daemon
//!
//! Composition root that wires the adapters together and starts the server.
//!
//! ## Responsibilities
//! - Parse configuration (env vars, config file)
//! - Initialize logging
//! - Build the credential policy and the axum router
//! - Bind to a TCP port and serve
//! - Handle graceful shutdown (Ctrl+C)
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer. No dashboard logic belongs here.

mod config;

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use corpdash_adapter_http_axum::router;
use corpdash_adapter_http_axum::state::AppState;
use corpdash_app::ports::LocalTime;

use crate::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::load().context("loading configuration")?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.logging.filter))
        .init();

    let policy = config.policy()?;
    tracing::info!(accounts = policy.len(), "credential policy loaded");

    let mut state = AppState::new(
        policy,
        config.auth.portal_url.as_str(),
        config.auth.locale,
        LocalTime,
    );
    if let Some(dir) = &config.assets.dir {
        state = state.with_assets(dir);
    }
    let app = router::build(state);

    let bind_addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("binding {bind_addr}"))?;
    tracing::info!(%bind_addr, "corpdashd listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("corpdashd stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown requested");
}
