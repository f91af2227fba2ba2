//! Liveness endpoint.

use axum::Json;
use serde::Serialize;

/// Body of a successful health check.
#[derive(Debug, Serialize)]
pub struct HealthBody {
    pub status: &'static str,
    pub message: &'static str,
}

/// `GET /api/v1/health`
pub async fn check() -> Json<HealthBody> {
    Json(HealthBody {
        status: "healthy",
        message: "API is up and running",
    })
}
