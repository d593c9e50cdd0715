//! Advertisement routes, including the counter increment endpoints.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};

use crate::errors::{ApiResponse, AppError};
use crate::models::ad::{Ad, CreateAd, UpdateAd};
use crate::models::pagination::{PagedResult, Pagination};
use crate::services::ads::{self as ad_service, AdFilters};
use crate::services::catalog::Deleted;
use crate::AppState;

/// GET /api/v1/ads
pub async fn list(
    State(state): State<AppState>,
    Query(pagination): Query<Pagination>,
    Query(filters): Query<AdFilters>,
) -> Json<ApiResponse<PagedResult<Ad>>> {
    let result = ad_service::list(&state.catalog, &filters, &pagination).await;
    ApiResponse::success(result)
}

/// GET /api/v1/ads/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<Ad>>, AppError> {
    let ad = ad_service::get(&state.catalog, &id).await?;
    Ok(ApiResponse::success(ad))
}

/// POST /api/v1/ads
pub async fn create(
    State(state): State<AppState>,
    Json(body): Json<CreateAd>,
) -> Result<(StatusCode, Json<ApiResponse<Ad>>), AppError> {
    let ad = ad_service::create(&state.catalog, body).await?;
    Ok((StatusCode::CREATED, ApiResponse::success(ad)))
}

/// PUT/PATCH /api/v1/ads/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(body): Json<UpdateAd>,
) -> Result<Json<ApiResponse<Ad>>, AppError> {
    let ad = ad_service::update(&state.catalog, &id, body).await?;
    Ok(ApiResponse::success(ad))
}

/// DELETE /api/v1/ads/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<Deleted>>, AppError> {
    let deleted = ad_service::delete(&state.catalog, &id).await?;
    Ok(ApiResponse::success(deleted))
}

/// POST /api/v1/ads/{id}/click
pub async fn click(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<Ad>>, AppError> {
    let ad = ad_service::record_click(&state.catalog, &id).await?;
    Ok(ApiResponse::success(ad))
}

/// POST /api/v1/ads/{id}/impression
pub async fn impression(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<Ad>>, AppError> {
    let ad = ad_service::record_impression(&state.catalog, &id).await?;
    Ok(ApiResponse::success(ad))
}
