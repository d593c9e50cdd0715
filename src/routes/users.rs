//! Catalog user administration routes.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};

use crate::errors::{ApiResponse, AppError};
use crate::models::pagination::{PagedResult, Pagination};
use crate::models::user::{CreateUser, UpdateUser, User};
use crate::services::catalog::Deleted;
use crate::services::users::{self as user_service, UserFilters};
use crate::AppState;

/// GET /api/v1/users
pub async fn list(
    State(state): State<AppState>,
    Query(pagination): Query<Pagination>,
    Query(filters): Query<UserFilters>,
) -> Json<ApiResponse<PagedResult<User>>> {
    let result = user_service::list(&state.catalog, &filters, &pagination).await;
    ApiResponse::success(result)
}

/// GET /api/v1/users/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<User>>, AppError> {
    let user = user_service::get(&state.catalog, &id).await?;
    Ok(ApiResponse::success(user))
}

/// POST /api/v1/users
pub async fn create(
    State(state): State<AppState>,
    Json(body): Json<CreateUser>,
) -> Result<(StatusCode, Json<ApiResponse<User>>), AppError> {
    let user = user_service::create(&state.catalog, body).await?;
    Ok((StatusCode::CREATED, ApiResponse::success(user)))
}

/// PUT/PATCH /api/v1/users/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(body): Json<UpdateUser>,
) -> Result<Json<ApiResponse<User>>, AppError> {
    let user = user_service::update(&state.catalog, &id, body).await?;
    Ok(ApiResponse::success(user))
}

/// DELETE /api/v1/users/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<Deleted>>, AppError> {
    let deleted = user_service::delete(&state.catalog, &id).await?;
    Ok(ApiResponse::success(deleted))
}
