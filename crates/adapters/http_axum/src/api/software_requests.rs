//! JSON REST handlers for software requests.

use axum::Json;
use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use serde_json::Value;

use devicedesk_app::ports::{DeviceRepository, SoftwareRequestRepository};
use devicedesk_app::services::software_request_service::SoftwareRequestDraft;
use devicedesk_domain::error::{DeviceDeskError, NotFoundError};
use devicedesk_domain::id::{DeviceId, RequestId};
use devicedesk_domain::software_request::SoftwareRequest;

use crate::error::ApiError;
use crate::state::AppState;

const SUBMITTED_MESSAGE: &str = "Software request submitted successfully.";

/// Request body for asking for software on a device.
#[derive(Debug, Default)]
pub struct RequestSoftwareBody {
    pub software_name: Option<String>,
    pub version: Option<String>,
}

impl RequestSoftwareBody {
    /// Parse a raw request body.
    ///
    /// Fields are read one at a time so a badly typed `version` never hides
    /// a valid `software_name`. Numbers and booleans are kept as their JSON
    /// text. An empty or non-object body yields an empty draft, which the
    /// service rejects as missing `software_name` once the device has been
    /// found.
    #[must_use]
    pub fn parse(raw: &[u8]) -> Self {
        if raw.is_empty() {
            return Self::default();
        }
        let mut fields = match serde_json::from_slice::<Value>(raw) {
            Ok(Value::Object(fields)) => fields,
            Ok(other) => {
                tracing::debug!(body = %other, "ignoring non-object software request body");
                return Self::default();
            }
            Err(err) => {
                tracing::debug!(error = %err, "ignoring unparseable software request body");
                return Self::default();
            }
        };
        Self {
            software_name: fields.remove("software_name").and_then(scalar_text),
            version: fields.remove("version").and_then(scalar_text),
        }
    }
}

fn scalar_text(value: Value) -> Option<String> {
    match value {
        Value::String(text) => Some(text),
        Value::Number(number) => Some(number.to_string()),
        Value::Bool(flag) => Some(flag.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

impl From<RequestSoftwareBody> for SoftwareRequestDraft {
    fn from(body: RequestSoftwareBody) -> Self {
        Self {
            software_name: body.software_name,
            version: body.version,
        }
    }
}

/// Body returned after a request is recorded.
#[derive(Debug, Serialize)]
pub struct SubmittedRequest {
    pub message: &'static str,
    pub request_id: RequestId,
    pub details: SoftwareRequest,
}

/// A stored request and its id.
#[derive(Debug, Serialize)]
pub struct RequestView {
    pub request_id: RequestId,
    pub details: SoftwareRequest,
}

/// Possible responses from the create endpoint.
pub enum CreateResponse {
    Created(Json<SubmittedRequest>),
}

impl IntoResponse for CreateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Created(json) => (StatusCode::CREATED, json).into_response(),
        }
    }
}

/// Possible responses from the get endpoint.
pub enum GetResponse {
    Ok(Json<RequestView>),
}

impl IntoResponse for GetResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// `POST /api/v1/devices/{device_id}/request_software`
pub async fn create<DR, SR>(
    State(state): State<AppState<DR, SR>>,
    Path(id): Path<String>,
    body: Bytes,
) -> Result<CreateResponse, ApiError>
where
    DR: DeviceRepository + Send + Sync + 'static,
    SR: SoftwareRequestRepository + Send + Sync + 'static,
{
    let device_id = DeviceId::new(id);
    let draft = RequestSoftwareBody::parse(&body).into();
    let (request_id, details) = state
        .software_request_service
        .submit(&device_id, draft)
        .await?;
    Ok(CreateResponse::Created(Json(SubmittedRequest {
        message: SUBMITTED_MESSAGE,
        request_id,
        details,
    })))
}

/// `GET /api/v1/software_requests/{request_id}`
///
/// A malformed id is reported the same way as an unknown one.
pub async fn get<DR, SR>(
    State(state): State<AppState<DR, SR>>,
    Path(raw_id): Path<String>,
) -> Result<GetResponse, ApiError>
where
    DR: DeviceRepository + Send + Sync + 'static,
    SR: SoftwareRequestRepository + Send + Sync + 'static,
{
    let request_id: RequestId = raw_id.parse().map_err(|_| {
        ApiError::from(DeviceDeskError::from(NotFoundError {
            entity: "Software request",
            id: raw_id.clone(),
        }))
    })?;
    let details = state
        .software_request_service
        .get_request(request_id)
        .await?;
    Ok(GetResponse::Ok(Json(RequestView {
        request_id,
        details,
    })))
}
