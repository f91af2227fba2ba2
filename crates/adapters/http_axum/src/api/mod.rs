//! JSON REST API handler modules.

pub mod devices;
pub mod health;
#[allow(clippy::missing_errors_doc)]
pub mod software_requests;

use axum::Router;
use axum::routing::{get, post};

use devicedesk_app::ports::{DeviceRepository, SoftwareRequestRepository};

use crate::state::AppState;

/// Build the `/api/v1` sub-router.
///
/// Device routes share the `{id}` segment name because the router rejects
/// differently named parameters at the same position; handlers read it as a
/// user id or a device id depending on the route.
pub fn routes<DR, SR>() -> Router<AppState<DR, SR>>
where
    DR: DeviceRepository + Send + Sync + 'static,
    SR: SoftwareRequestRepository + Send + Sync + 'static,
{
    Router::new()
        .route("/health", get(health::check))
        // Devices
        .route("/devices/{id}", get(devices::list_for_user::<DR, SR>))
        .route("/devices/{id}/status", get(devices::status::<DR, SR>))
        // Software requests
        .route(
            "/devices/{id}/request_software",
            post(software_requests::create::<DR, SR>),
        )
        .route(
            "/software_requests/{request_id}",
            get(software_requests::get::<DR, SR>),
        )
}
