//! Unified search across movies and series.
//!
//! Sources are fanned out with `tokio::join!` and each contributes
//! independently: a source whose backing store came up empty simply adds no
//! hits, so one degraded collection never fails the whole request.

use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::models::movie::Movie;
use crate::models::pagination::{PagedResult, Pagination};
use crate::models::series::Series;
use crate::services::catalog::matches_search;
use crate::store::Catalog;

/// Search query parameters.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchQuery {
    pub q: Option<String>,
}

/// A single search result, tagged with its source collection.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum SearchHit {
    Movie(Movie),
    Series(Series),
}

/// Run the unified search. Movies come first, then series, each in their
/// source order; `meta` reports the per-source match counts.
pub async fn search(
    catalog: &Catalog,
    query: &SearchQuery,
    pagination: &Pagination,
) -> PagedResult<SearchHit> {
    let q = query.q.as_deref().unwrap_or("");

    let (movies, series) = tokio::join!(catalog.movies.list(), catalog.series.list());

    let movie_hits: Vec<SearchHit> = movies
        .into_iter()
        .filter(|m| {
            matches_search(
                q,
                &[
                    Some(m.title.as_str()),
                    m.original_title.as_deref(),
                    m.description.as_deref(),
                ],
            )
        })
        .map(SearchHit::Movie)
        .collect();

    let series_hits: Vec<SearchHit> = series
        .into_iter()
        .filter(|s| {
            matches_search(
                q,
                &[
                    Some(s.title.as_str()),
                    s.original_title.as_deref(),
                    s.description.as_deref(),
                ],
            )
        })
        .map(SearchHit::Series)
        .collect();

    let movie_count = movie_hits.len();
    let series_count = series_hits.len();

    let mut hits = movie_hits;
    hits.extend(series_hits);

    PagedResult::paginate(hits, pagination).with_meta(json!({
        "movie_count": movie_count,
        "series_count": series_count,
    }))
}
