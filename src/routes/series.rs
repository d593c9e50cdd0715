//! Series catalog routes.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};

use crate::errors::{ApiResponse, AppError};
use crate::models::pagination::{PagedResult, Pagination};
use crate::models::series::{CreateSeries, Series, UpdateSeries};
use crate::services::catalog::Deleted;
use crate::services::series::{self as series_service, SeriesFilters};
use crate::AppState;

/// GET /api/v1/series
pub async fn list(
    State(state): State<AppState>,
    Query(pagination): Query<Pagination>,
    Query(filters): Query<SeriesFilters>,
) -> Json<ApiResponse<PagedResult<Series>>> {
    let result = series_service::list(&state.catalog, &filters, &pagination).await;
    ApiResponse::success(result)
}

/// GET /api/v1/series/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<Series>>, AppError> {
    let series = series_service::get(&state.catalog, &id).await?;
    Ok(ApiResponse::success(series))
}

/// POST /api/v1/series
pub async fn create(
    State(state): State<AppState>,
    Json(body): Json<CreateSeries>,
) -> Result<(StatusCode, Json<ApiResponse<Series>>), AppError> {
    let series = series_service::create(&state.catalog, body).await?;
    Ok((StatusCode::CREATED, ApiResponse::success(series)))
}

/// PUT/PATCH /api/v1/series/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(body): Json<UpdateSeries>,
) -> Result<Json<ApiResponse<Series>>, AppError> {
    let series = series_service::update(&state.catalog, &id, body).await?;
    Ok(ApiResponse::success(series))
}

/// DELETE /api/v1/series/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<Deleted>>, AppError> {
    let deleted = series_service::delete(&state.catalog, &id).await?;
    Ok(ApiResponse::success(deleted))
}
