//! # devicedeskd — devicedesk daemon
//!
//! Composition root that wires all adapters together and starts the server.
//!
//! ## Responsibilities
//! - Parse configuration (env vars, config file)
//! - Initialise logging
//! - Load the device inventory (built-in or from a seed file)
//! - Construct the in-memory store and inject it into application services
//! - Build the axum router, injecting application services
//! - Bind to a TCP port and serve
//! - Handle graceful shutdown (SIGTERM/SIGINT)
//!
//! ## Dependency rule
//! This is the **only** crate that depends on the adapter crates.
//! It is the wiring layer; no domain logic belongs here.

mod config;

use anyhow::Context;
use tokio::signal;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use devicedesk_adapter_http_axum::landing::LandingPage;
use devicedesk_adapter_http_axum::router;
use devicedesk_adapter_http_axum::state::AppState;
use devicedesk_adapter_storage_memory::{InMemoryStore, SeedData};
use devicedesk_app::services::device_service::DeviceService;
use devicedesk_app::services::software_request_service::SoftwareRequestService;

use crate::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::load().context("failed to load configuration")?;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_new(&config.logging.filter)
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Inventory
    let seed = match &config.seed.path {
        Some(path) => SeedData::from_path(path)
            .with_context(|| format!("failed to load seed file {}", path.display()))?,
        None => SeedData::builtin().context("failed to load built-in seed data")?,
    };
    tracing::info!(
        users = seed.users.len(),
        devices = seed.statuses.len(),
        "device inventory loaded"
    );
    let store = InMemoryStore::new(seed);

    // Services
    let device_service = DeviceService::new(store.clone());
    let software_request_service = SoftwareRequestService::new(store.clone(), store);

    // HTTP
    let landing = LandingPage::new(config.app.version.clone(), config.server.landing_page);
    let state = AppState::new(device_service, software_request_service, landing);
    let app = router::build(state);

    let bind_addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind {bind_addr}"))?;
    tracing::info!(
        address = %bind_addr,
        version = %config.app.version,
        "devicedeskd listening"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    tracing::info!("shutdown complete");
    Ok(())
}

/// Resolve once SIGINT or SIGTERM arrives.
///
/// A handler that fails to install is logged and never resolves, leaving the
/// other signal in charge.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => tracing::info!("received Ctrl+C, shutting down"),
        () = terminate => tracing::info!("received terminate signal, shutting down"),
    }
}
