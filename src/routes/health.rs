//! Health check endpoints for liveness and readiness probes.

use axum::{extract::State, Json};
use serde::Serialize;

use crate::errors::ApiResponse;
use crate::AppState;

/// Readiness probe detail.
#[derive(Debug, Serialize)]
pub struct HealthStatus {
    pub status: String,
    pub data_dir: String,
}

/// Liveness probe — always returns OK if the process is running.
pub async fn live() -> &'static str {
    "OK"
}

/// Readiness probe — checks that the catalog data directory is accessible.
pub async fn ready(State(state): State<AppState>) -> Json<ApiResponse<HealthStatus>> {
    let data_dir = match std::fs::metadata(&state.config.data_dir) {
        Ok(meta) if meta.is_dir() => "available".to_string(),
        Ok(_) => {
            tracing::warn!(path = %state.config.data_dir.display(), "Data path is not a directory");
            "not a directory".to_string()
        }
        Err(e) => {
            tracing::warn!(path = %state.config.data_dir.display(), error = %e, "Data dir health check failed");
            format!("error: {e}")
        }
    };

    ApiResponse::success(HealthStatus {
        status: "ok".to_string(),
        data_dir,
    })
}
