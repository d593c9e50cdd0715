//! Route definitions for the shasha catalog API.

pub mod ads;
pub mod dashboard;
pub mod health;
pub mod movies;
pub mod search;
pub mod series;
pub mod servers;
pub mod settings;
pub mod users;

use axum::http::HeaderValue;
use axum::routing::{get, post};
use axum::Router;
use tower_http::compression::CompressionLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;

use crate::AppState;

/// Maximum accepted request body size.
const BODY_LIMIT_BYTES: usize = 1024 * 1024;

/// Build the full application router. Shared by `main` and the integration
/// tests so both exercise the same middleware stack.
pub fn router(state: AppState) -> Router {
    let cors = match state.config.frontend_url.parse::<HeaderValue>() {
        Ok(origin) => CorsLayer::new()
            .allow_origin(origin)
            .allow_methods(Any)
            .allow_headers(Any),
        Err(_) => CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any),
    };

    Router::new()
        .route("/health/live", get(health::live))
        .route("/health/ready", get(health::ready))
        .route(
            "/api/v1/movies",
            get(movies::list).post(movies::create),
        )
        .route(
            "/api/v1/movies/{id}",
            get(movies::get_by_id)
                .put(movies::update)
                .patch(movies::update)
                .delete(movies::delete),
        )
        .route(
            "/api/v1/series",
            get(series::list).post(series::create),
        )
        .route(
            "/api/v1/series/{id}",
            get(series::get_by_id)
                .put(series::update)
                .patch(series::update)
                .delete(series::delete),
        )
        .route("/api/v1/ads", get(ads::list).post(ads::create))
        .route(
            "/api/v1/ads/{id}",
            get(ads::get_by_id)
                .put(ads::update)
                .patch(ads::update)
                .delete(ads::delete),
        )
        .route("/api/v1/ads/{id}/click", post(ads::click))
        .route("/api/v1/ads/{id}/impression", post(ads::impression))
        .route(
            "/api/v1/servers",
            get(servers::list).post(servers::create),
        )
        .route(
            "/api/v1/servers/{id}",
            get(servers::get_by_id)
                .put(servers::update)
                .patch(servers::update)
                .delete(servers::delete),
        )
        .route("/api/v1/users", get(users::list).post(users::create))
        .route(
            "/api/v1/users/{id}",
            get(users::get_by_id)
                .put(users::update)
                .patch(users::update)
                .delete(users::delete),
        )
        .route("/api/v1/search", get(search::search))
        .route("/api/v1/dashboard/stats", get(dashboard::stats))
        .route(
            "/api/v1/settings",
            get(settings::get).put(settings::update),
        )
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(CompressionLayer::new())
        .layer(RequestBodyLimitLayer::new(BODY_LIMIT_BYTES))
        .with_state(state)
}
