//! JSON REST handlers for user devices and device status.

use axum::Json;
use axum::extract::{Path, State};
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use devicedesk_app::ports::{DeviceRepository, SoftwareRequestRepository};
use devicedesk_domain::device::Device;
use devicedesk_domain::device_status::DeviceStatus;
use devicedesk_domain::id::{DeviceId, UserId};

use crate::error::ApiError;
use crate::state::AppState;

/// Devices registered to one user.
#[derive(Debug, Serialize)]
pub struct UserDevices {
    pub user_id: UserId,
    pub devices: Vec<Device>,
}

/// Status fields flattened next to the device id.
#[derive(Debug, Serialize)]
pub struct DeviceStatusView {
    pub device_id: DeviceId,
    #[serde(flatten)]
    pub status: DeviceStatus,
}

/// Possible responses from the user devices endpoint.
pub enum ListResponse {
    Ok(Json<UserDevices>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the device status endpoint.
pub enum StatusResponse {
    Ok(Json<DeviceStatusView>),
}

impl IntoResponse for StatusResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// `GET /api/v1/devices/{user_id}`
///
/// # Errors
///
/// Responds `404` when the user is unknown.
pub async fn list_for_user<DR, SR>(
    State(state): State<AppState<DR, SR>>,
    Path(id): Path<String>,
) -> Result<ListResponse, ApiError>
where
    DR: DeviceRepository + Send + Sync + 'static,
    SR: SoftwareRequestRepository + Send + Sync + 'static,
{
    let user_id = UserId::new(id);
    let devices = state.device_service.list_user_devices(&user_id).await?;
    Ok(ListResponse::Ok(Json(UserDevices { user_id, devices })))
}

/// `GET /api/v1/devices/{device_id}/status`
///
/// # Errors
///
/// Responds `404` when the device is unknown.
pub async fn status<DR, SR>(
    State(state): State<AppState<DR, SR>>,
    Path(id): Path<String>,
) -> Result<StatusResponse, ApiError>
where
    DR: DeviceRepository + Send + Sync + 'static,
    SR: SoftwareRequestRepository + Send + Sync + 'static,
{
    let device_id = DeviceId::new(id);
    let status = state.device_service.get_device_status(&device_id).await?;
    Ok(StatusResponse::Ok(Json(DeviceStatusView { device_id, status })))
}
