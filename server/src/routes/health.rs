//! Operational endpoints.

#[cfg(test)]
#[path = "health_test.rs"]
mod health_test;

use axum::http::Uri;
use axum::response::Json;
use serde::{Deserialize, Serialize};

use crate::error::ApiError;

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct HealthStatus {
    pub status: String,
}

/// `GET /health` — liveness probe.
pub async fn health() -> Json<HealthStatus> {
    Json(HealthStatus { status: "ok".to_owned() })
}

/// Any `/api/*` request. No API is served yet, so every path is a JSON 404.
pub async fn api_not_found(uri: Uri) -> ApiError {
    ApiError::NotFound { path: uri.path().to_owned() }
}
