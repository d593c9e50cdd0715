//! Advertisement service: CRUD plus click/impression accounting.

use serde::Deserialize;
use validator::Validate;

use crate::errors::AppError;
use crate::models::ad::{Ad, AdPosition, CreateAd, UpdateAd};
use crate::models::pagination::{PagedResult, Pagination};
use crate::services::catalog::{matches_search, Deleted};
use crate::store::Catalog;

/// Filters for listing ads.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct AdFilters {
    pub search: Option<String>,
    pub position: Option<AdPosition>,
    pub active: Option<bool>,
}

impl AdFilters {
    fn matches(&self, ad: &Ad) -> bool {
        if let Some(search) = &self.search {
            if !matches_search(search, &[Some(ad.title.as_str()), ad.content.as_deref()]) {
                return false;
            }
        }
        if let Some(position) = self.position {
            if ad.position != position {
                return false;
            }
        }
        if let Some(active) = self.active {
            if ad.is_active != active {
                return false;
            }
        }
        true
    }
}

pub async fn list(
    catalog: &Catalog,
    filters: &AdFilters,
    pagination: &Pagination,
) -> PagedResult<Ad> {
    let mut ads = catalog.ads.list().await;
    ads.retain(|a| filters.matches(a));
    PagedResult::paginate(ads, pagination)
}

pub async fn get(catalog: &Catalog, id: &str) -> Result<Ad, AppError> {
    catalog
        .ads
        .get(id)
        .await
        .ok_or_else(|| AppError::NotFound(format!("Ad '{id}' not found")))
}

pub async fn create(catalog: &Catalog, input: CreateAd) -> Result<Ad, AppError> {
    input.validate()?;
    Ok(catalog
        .ads
        .create(|id, now| Ad::from_create(input, id, now))
        .await?)
}

pub async fn update(catalog: &Catalog, id: &str, input: UpdateAd) -> Result<Ad, AppError> {
    catalog
        .ads
        .update(id, |a| a.apply_update(input))
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Ad '{id}' not found")))
}

pub async fn delete(catalog: &Catalog, id: &str) -> Result<Deleted, AppError> {
    if catalog.ads.delete(id).await? {
        Ok(Deleted::new("Ad", id))
    } else {
        Err(AppError::NotFound(format!("Ad '{id}' not found")))
    }
}

/// Increment the click counter. The only write path for `click_count`.
pub async fn record_click(catalog: &Catalog, id: &str) -> Result<Ad, AppError> {
    catalog
        .ads
        .update(id, |a| a.click_count += 1)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Ad '{id}' not found")))
}

/// Increment the impression counter. The only write path for
/// `impression_count`.
pub async fn record_impression(catalog: &Catalog, id: &str) -> Result<Ad, AppError> {
    catalog
        .ads
        .update(id, |a| a.impression_count += 1)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Ad '{id}' not found")))
}
