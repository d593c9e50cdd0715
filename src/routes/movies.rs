//! Movie catalog routes.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};

use crate::errors::{ApiResponse, AppError};
use crate::models::movie::{CreateMovie, Movie, UpdateMovie};
use crate::models::pagination::{PagedResult, Pagination};
use crate::services::catalog::Deleted;
use crate::services::movies::{self as movie_service, MovieFilters};
use crate::AppState;

/// GET /api/v1/movies — list movies with filters, sort, and pagination.
pub async fn list(
    State(state): State<AppState>,
    Query(pagination): Query<Pagination>,
    Query(filters): Query<MovieFilters>,
) -> Json<ApiResponse<PagedResult<Movie>>> {
    let result = movie_service::list(&state.catalog, &filters, &pagination).await;
    ApiResponse::success(result)
}

/// GET /api/v1/movies/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<Movie>>, AppError> {
    let movie = movie_service::get(&state.catalog, &id).await?;
    Ok(ApiResponse::success(movie))
}

/// POST /api/v1/movies
pub async fn create(
    State(state): State<AppState>,
    Json(body): Json<CreateMovie>,
) -> Result<(StatusCode, Json<ApiResponse<Movie>>), AppError> {
    let movie = movie_service::create(&state.catalog, body).await?;
    Ok((StatusCode::CREATED, ApiResponse::success(movie)))
}

/// PUT/PATCH /api/v1/movies/{id} — both share shallow-merge semantics.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(body): Json<UpdateMovie>,
) -> Result<Json<ApiResponse<Movie>>, AppError> {
    let movie = movie_service::update(&state.catalog, &id, body).await?;
    Ok(ApiResponse::success(movie))
}

/// DELETE /api/v1/movies/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<Deleted>>, AppError> {
    let deleted = movie_service::delete(&state.catalog, &id).await?;
    Ok(ApiResponse::success(deleted))
}
