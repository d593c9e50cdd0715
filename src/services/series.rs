//! Series catalog service.

use serde::Deserialize;
use validator::Validate;

use crate::errors::AppError;
use crate::models::pagination::{PagedResult, Pagination};
use crate::models::series::{CreateSeries, Series, SeriesStatus, UpdateSeries};
use crate::services::catalog::{matches_search, sort_by_f64, sort_by_key, Deleted, SortOrder};
use crate::store::Catalog;

#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SeriesSort {
    Rating,
    Views,
    CreatedAt,
}

/// Filters for listing series.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct SeriesFilters {
    pub search: Option<String>,
    pub category: Option<String>,
    pub status: Option<SeriesStatus>,
    pub featured: Option<bool>,
    pub sort: Option<SeriesSort>,
    #[serde(default)]
    pub order: SortOrder,
}

impl SeriesFilters {
    fn matches(&self, series: &Series) -> bool {
        if let Some(search) = &self.search {
            if !matches_search(
                search,
                &[
                    Some(series.title.as_str()),
                    series.original_title.as_deref(),
                    series.description.as_deref(),
                ],
            ) {
                return false;
            }
        }
        if let Some(category) = &self.category {
            if series.category.as_deref() != Some(category.as_str()) {
                return false;
            }
        }
        if let Some(status) = self.status {
            if series.status != status {
                return false;
            }
        }
        if let Some(featured) = self.featured {
            if series.is_featured != featured {
                return false;
            }
        }
        true
    }
}

pub async fn list(
    catalog: &Catalog,
    filters: &SeriesFilters,
    pagination: &Pagination,
) -> PagedResult<Series> {
    let mut series = catalog.series.list().await;
    series.retain(|s| filters.matches(s));

    if let Some(sort) = filters.sort {
        match sort {
            SeriesSort::Rating => sort_by_f64(&mut series, filters.order, |s| s.rating),
            SeriesSort::Views => sort_by_key(&mut series, filters.order, |s| s.views),
            SeriesSort::CreatedAt => sort_by_key(&mut series, filters.order, |s| s.created_at),
        }
    }

    PagedResult::paginate(series, pagination)
}

pub async fn get(catalog: &Catalog, id: &str) -> Result<Series, AppError> {
    catalog
        .series
        .get(id)
        .await
        .ok_or_else(|| AppError::NotFound(format!("Series '{id}' not found")))
}

pub async fn create(catalog: &Catalog, input: CreateSeries) -> Result<Series, AppError> {
    input.validate()?;
    Ok(catalog
        .series
        .create(|id, now| Series::from_create(input, id, now))
        .await?)
}

pub async fn update(catalog: &Catalog, id: &str, input: UpdateSeries) -> Result<Series, AppError> {
    catalog
        .series
        .update(id, |s| s.apply_update(input))
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Series '{id}' not found")))
}

pub async fn delete(catalog: &Catalog, id: &str) -> Result<Deleted, AppError> {
    if catalog.series.delete(id).await? {
        Ok(Deleted::new("Series", id))
    } else {
        Err(AppError::NotFound(format!("Series '{id}' not found")))
    }
}
