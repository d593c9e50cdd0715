//! Unified search route.

use axum::{
    extract::{Query, State},
    Json,
};

use crate::errors::ApiResponse;
use crate::models::pagination::{PagedResult, Pagination};
use crate::services::search::{self as search_service, SearchHit, SearchQuery};
use crate::AppState;

/// GET /api/v1/search?q= — search movies and series together.
pub async fn search(
    State(state): State<AppState>,
    Query(pagination): Query<Pagination>,
    Query(query): Query<SearchQuery>,
) -> Json<ApiResponse<PagedResult<SearchHit>>> {
    let result = search_service::search(&state.catalog, &query, &pagination).await;
    ApiResponse::success(result)
}
