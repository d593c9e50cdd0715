//! Site settings routes.

use axum::{extract::State, Json};

use crate::errors::{ApiResponse, AppError};
use crate::models::settings::{SiteSettings, UpdateSettings};
use crate::AppState;

/// GET /api/v1/settings — current settings, or the documented defaults when
/// the backing file is unavailable.
pub async fn get(State(state): State<AppState>) -> Json<ApiResponse<SiteSettings>> {
    let settings = state.catalog.settings.get().await;
    ApiResponse::success(settings)
}

/// PUT /api/v1/settings — partial merge over the current settings.
pub async fn update(
    State(state): State<AppState>,
    Json(body): Json<UpdateSettings>,
) -> Result<Json<ApiResponse<SiteSettings>>, AppError> {
    let settings = state
        .catalog
        .settings
        .update(|s| s.apply_update(body))
        .await?;
    Ok(ApiResponse::success(settings))
}
