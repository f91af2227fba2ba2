//! Axum router assembly.

use axum::Router;
use axum::routing::get;
use tower_http::trace::TraceLayer;

use devicedesk_app::ports::{DeviceRepository, SoftwareRequestRepository};

use crate::state::AppState;

/// Build the top-level axum [`Router`].
///
/// Nests API routes under `/api/v1` and serves the landing page at `/`.
/// Includes a [`TraceLayer`] that logs each HTTP request/response at the
/// `DEBUG` level using the `tracing` ecosystem.
pub fn build<DR, SR>(state: AppState<DR, SR>) -> Router
where
    DR: DeviceRepository + Send + Sync + 'static,
    SR: SoftwareRequestRepository + Send + Sync + 'static,
{
    Router::new()
        .route("/", get(crate::landing::index::<DR, SR>))
        .nest("/api/v1", crate::api::routes())
        .fallback(crate::error::route_not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
