//! Streaming server registry routes.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};

use crate::errors::{ApiResponse, AppError};
use crate::models::pagination::{PagedResult, Pagination};
use crate::models::server::{CreateServer, StreamServer, UpdateServer};
use crate::services::catalog::Deleted;
use crate::services::servers::{self as server_service, ServerFilters};
use crate::AppState;

/// GET /api/v1/servers
pub async fn list(
    State(state): State<AppState>,
    Query(pagination): Query<Pagination>,
    Query(filters): Query<ServerFilters>,
) -> Json<ApiResponse<PagedResult<StreamServer>>> {
    let result = server_service::list(&state.catalog, &filters, &pagination).await;
    ApiResponse::success(result)
}

/// GET /api/v1/servers/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<StreamServer>>, AppError> {
    let server = server_service::get(&state.catalog, &id).await?;
    Ok(ApiResponse::success(server))
}

/// POST /api/v1/servers
pub async fn create(
    State(state): State<AppState>,
    Json(body): Json<CreateServer>,
) -> Result<(StatusCode, Json<ApiResponse<StreamServer>>), AppError> {
    let server = server_service::create(&state.catalog, body).await?;
    Ok((StatusCode::CREATED, ApiResponse::success(server)))
}

/// PUT/PATCH /api/v1/servers/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(body): Json<UpdateServer>,
) -> Result<Json<ApiResponse<StreamServer>>, AppError> {
    let server = server_service::update(&state.catalog, &id, body).await?;
    Ok(ApiResponse::success(server))
}

/// DELETE /api/v1/servers/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<Deleted>>, AppError> {
    let deleted = server_service::delete(&state.catalog, &id).await?;
    Ok(ApiResponse::success(deleted))
}
