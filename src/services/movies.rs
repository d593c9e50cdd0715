//! Movie catalog service: listing with the QFP pipeline plus CRUD.

use serde::Deserialize;
use serde_json::json;
use validator::Validate;

use crate::errors::AppError;
use crate::models::movie::{CreateMovie, Movie, UpdateMovie};
use crate::models::pagination::{lenient_i64, PagedResult, Pagination};
use crate::services::catalog::{matches_search, sort_by_f64, sort_by_key, Deleted, SortOrder};
use crate::store::Catalog;

/// Sortable movie fields.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum MovieSort {
    Rating,
    Views,
    Year,
    CreatedAt,
}

/// Filters for listing movies.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct MovieFilters {
    pub search: Option<String>,
    pub category: Option<String>,
    #[serde(default, deserialize_with = "lenient_i64")]
    pub year: Option<i64>,
    pub quality: Option<String>,
    pub featured: Option<bool>,
    pub trending: Option<bool>,
    pub sort: Option<MovieSort>,
    #[serde(default)]
    pub order: SortOrder,
}

impl MovieFilters {
    fn matches(&self, movie: &Movie) -> bool {
        if let Some(search) = &self.search {
            if !matches_search(
                search,
                &[
                    Some(movie.title.as_str()),
                    movie.original_title.as_deref(),
                    movie.description.as_deref(),
                ],
            ) {
                return false;
            }
        }
        if let Some(category) = &self.category {
            if movie.category.as_deref() != Some(category.as_str()) {
                return false;
            }
        }
        if let Some(year) = self.year {
            if movie.year != Some(year) {
                return false;
            }
        }
        if let Some(quality) = &self.quality {
            if movie.quality.as_deref() != Some(quality.as_str()) {
                return false;
            }
        }
        if let Some(featured) = self.featured {
            if movie.is_featured != featured {
                return false;
            }
        }
        if let Some(trending) = self.trending {
            if movie.is_trending != trending {
                return false;
            }
        }
        true
    }
}

/// List movies with filters, optional sort, and pagination. The `meta`
/// carries the average rating of the whole filtered set.
pub async fn list(
    catalog: &Catalog,
    filters: &MovieFilters,
    pagination: &Pagination,
) -> PagedResult<Movie> {
    let mut movies = catalog.movies.list().await;
    movies.retain(|m| filters.matches(m));

    if let Some(sort) = filters.sort {
        match sort {
            MovieSort::Rating => sort_by_f64(&mut movies, filters.order, |m| m.rating),
            MovieSort::Views => sort_by_key(&mut movies, filters.order, |m| m.views),
            MovieSort::Year => sort_by_key(&mut movies, filters.order, |m| m.year),
            MovieSort::CreatedAt => sort_by_key(&mut movies, filters.order, |m| m.created_at),
        }
    }

    let average_rating = if movies.is_empty() {
        0.0
    } else {
        movies.iter().map(|m| m.rating).sum::<f64>() / movies.len() as f64
    };

    PagedResult::paginate(movies, pagination)
        .with_meta(json!({ "average_rating": average_rating }))
}

pub async fn get(catalog: &Catalog, id: &str) -> Result<Movie, AppError> {
    catalog
        .movies
        .get(id)
        .await
        .ok_or_else(|| AppError::NotFound(format!("Movie '{id}' not found")))
}

pub async fn create(catalog: &Catalog, input: CreateMovie) -> Result<Movie, AppError> {
    input.validate()?;
    Ok(catalog
        .movies
        .create(|id, now| Movie::from_create(input, id, now))
        .await?)
}

pub async fn update(catalog: &Catalog, id: &str, input: UpdateMovie) -> Result<Movie, AppError> {
    catalog
        .movies
        .update(id, |m| m.apply_update(input))
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Movie '{id}' not found")))
}

pub async fn delete(catalog: &Catalog, id: &str) -> Result<Deleted, AppError> {
    if catalog.movies.delete(id).await? {
        Ok(Deleted::new("Movie", id))
    } else {
        Err(AppError::NotFound(format!("Movie '{id}' not found")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn movie(id: &str, title: &str, rating: f64) -> Movie {
        let now = Utc::now();
        Movie {
            id: id.to_string(),
            title: title.to_string(),
            original_title: None,
            description: None,
            category: None,
            year: None,
            quality: None,
            rating,
            views: 0,
            poster_url: None,
            is_featured: false,
            is_trending: false,
            created_at: now,
            updated_at: now,
        }
    }

    async fn seeded_catalog() -> Catalog {
        let catalog = Catalog::in_memory();
        catalog
            .movies
            .replace_all(vec![
                movie("1", "Alpha", 9.0),
                movie("2", "Beta", 7.0),
                movie("3", "Gamma", 8.0),
            ])
            .await
            .unwrap();
        catalog
    }

    #[tokio::test]
    async fn no_criteria_returns_everything_in_order() {
        let catalog = seeded_catalog().await;
        let result = list(&catalog, &MovieFilters::default(), &Pagination::default()).await;
        let ids: Vec<&str> = result.items.iter().map(|m| m.id.as_str()).collect();
        assert_eq!(ids, ["1", "2", "3"]);
    }

    #[tokio::test]
    async fn filter_is_idempotent() {
        let catalog = seeded_catalog().await;
        let filters = MovieFilters {
            search: Some("a".to_string()),
            ..Default::default()
        };
        let once = list(&catalog, &filters, &Pagination::default()).await;
        let twice = list(&catalog, &filters, &Pagination::default()).await;
        let ids = |r: &PagedResult<Movie>| {
            r.items.iter().map(|m| m.id.clone()).collect::<Vec<String>>()
        };
        assert_eq!(ids(&once), ids(&twice));
    }

    #[tokio::test]
    async fn search_sort_paginate_scenario() {
        // search "a" matches Alpha, Beta, Gamma; rating desc; page 1 of 2.
        let catalog = seeded_catalog().await;
        let filters = MovieFilters {
            search: Some("a".to_string()),
            sort: Some(MovieSort::Rating),
            ..Default::default()
        };
        let pagination = Pagination {
            page: Some(1),
            per_page: Some(2),
        };
        let result = list(&catalog, &filters, &pagination).await;
        let ids: Vec<&str> = result.items.iter().map(|m| m.id.as_str()).collect();
        assert_eq!(ids, ["1", "3"]);
        assert_eq!(result.pagination.total_items, 3);
        assert_eq!(result.pagination.total_pages, 2);
        assert!(result.pagination.has_next);
        assert!(!result.pagination.has_prev);
    }

    #[tokio::test]
    async fn search_is_case_insensitive() {
        let catalog = Catalog::in_memory();
        catalog
            .movies
            .replace_all(vec![movie("1", "The Batman", 8.0)])
            .await
            .unwrap();
        let filters = MovieFilters {
            search: Some("batman".to_string()),
            ..Default::default()
        };
        let result = list(&catalog, &filters, &Pagination::default()).await;
        assert_eq!(result.items.len(), 1);
    }

    #[tokio::test]
    async fn tri_state_boolean_filter() {
        let catalog = Catalog::in_memory();
        let mut featured = movie("1", "Alpha", 9.0);
        featured.is_featured = true;
        catalog
            .movies
            .replace_all(vec![featured, movie("2", "Beta", 7.0)])
            .await
            .unwrap();

        let absent = list(&catalog, &MovieFilters::default(), &Pagination::default()).await;
        assert_eq!(absent.items.len(), 2);

        let only_featured = MovieFilters {
            featured: Some(true),
            ..Default::default()
        };
        let result = list(&catalog, &only_featured, &Pagination::default()).await;
        assert_eq!(result.items.len(), 1);
        assert_eq!(result.items[0].id, "1");

        let not_featured = MovieFilters {
            featured: Some(false),
            ..Default::default()
        };
        let result = list(&catalog, &not_featured, &Pagination::default()).await;
        assert_eq!(result.items.len(), 1);
        assert_eq!(result.items[0].id, "2");
    }

    #[tokio::test]
    async fn list_meta_reports_average_rating() {
        let catalog = seeded_catalog().await;
        let result = list(&catalog, &MovieFilters::default(), &Pagination::default()).await;
        let meta = result.meta.unwrap();
        assert_eq!(meta["average_rating"], 8.0);
    }

    #[tokio::test]
    async fn update_missing_movie_is_not_found() {
        let catalog = Catalog::in_memory();
        let err = update(&catalog, "nope", UpdateMovie::default())
            .await
            .unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn create_rejects_empty_title() {
        let catalog = Catalog::in_memory();
        let input = CreateMovie {
            title: String::new(),
            original_title: None,
            description: None,
            category: None,
            year: None,
            quality: None,
            rating: None,
            poster_url: None,
            is_featured: None,
            is_trending: None,
        };
        let err = create(&catalog, input).await.unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }
}
