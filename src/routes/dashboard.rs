//! Admin dashboard routes.

use axum::{extract::State, Json};

use crate::errors::ApiResponse;
use crate::services::dashboard::{self as dashboard_service, DashboardStats};
use crate::AppState;

/// GET /api/v1/dashboard/stats — aggregate catalog statistics.
pub async fn stats(State(state): State<AppState>) -> Json<ApiResponse<DashboardStats>> {
    let stats = dashboard_service::get_stats(&state.catalog).await;
    ApiResponse::success(stats)
}
