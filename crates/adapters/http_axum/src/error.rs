//! HTTP error response mapping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use devicedesk_domain::error::DeviceDeskError;

/// JSON error body returned by API endpoints.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// Maps [`DeviceDeskError`] to an HTTP response with appropriate status code.
#[derive(Debug)]
pub struct ApiError(DeviceDeskError);

impl From<DeviceDeskError> for ApiError {
    fn from(err: DeviceDeskError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self.0 {
            DeviceDeskError::Validation(err) => (StatusCode::BAD_REQUEST, err.to_string()),
            DeviceDeskError::NotFound(err) => (StatusCode::NOT_FOUND, err.to_string()),
            DeviceDeskError::Storage(err) => {
                tracing::error!(error = %err, "storage error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                )
            }
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}

/// Fallback for paths no route matches.
pub async fn route_not_found() -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorBody {
            error: "Not found".to_string(),
        }),
    )
        .into_response()
}
