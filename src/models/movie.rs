//! Movie catalog model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Movie {
    pub id: String,
    pub title: String,
    pub original_title: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub year: Option<i64>,
    /// Release quality label, e.g. "HD", "WEB-DL", "BluRay".
    pub quality: Option<String>,
    pub rating: f64,
    pub views: u64,
    pub poster_url: Option<String>,
    pub is_featured: bool,
    pub is_trending: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateMovie {
    #[validate(length(min = 1, message = "title must not be empty"))]
    pub title: String,
    pub original_title: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub year: Option<i64>,
    pub quality: Option<String>,
    #[validate(range(min = 0.0, max = 10.0, message = "rating must be between 0 and 10"))]
    pub rating: Option<f64>,
    pub poster_url: Option<String>,
    pub is_featured: Option<bool>,
    pub is_trending: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateMovie {
    pub title: Option<String>,
    pub original_title: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub year: Option<i64>,
    pub quality: Option<String>,
    pub rating: Option<f64>,
    pub views: Option<u64>,
    pub poster_url: Option<String>,
    pub is_featured: Option<bool>,
    pub is_trending: Option<bool>,
}

impl Movie {
    /// Build a new record from a create payload with store-assigned identity.
    pub fn from_create(input: CreateMovie, id: String, now: DateTime<Utc>) -> Self {
        Self {
            id,
            title: input.title,
            original_title: input.original_title,
            description: input.description,
            category: input.category,
            year: input.year,
            quality: input.quality,
            rating: input.rating.unwrap_or(0.0),
            views: 0,
            poster_url: input.poster_url,
            is_featured: input.is_featured.unwrap_or(false),
            is_trending: input.is_trending.unwrap_or(false),
            created_at: now,
            updated_at: now,
        }
    }

    /// Shallow-merge an update payload over the record. `id` and
    /// `created_at` are never touched here.
    pub fn apply_update(&mut self, input: UpdateMovie) {
        if let Some(title) = input.title {
            self.title = title;
        }
        if input.original_title.is_some() {
            self.original_title = input.original_title;
        }
        if input.description.is_some() {
            self.description = input.description;
        }
        if input.category.is_some() {
            self.category = input.category;
        }
        if input.year.is_some() {
            self.year = input.year;
        }
        if input.quality.is_some() {
            self.quality = input.quality;
        }
        if let Some(rating) = input.rating {
            self.rating = rating;
        }
        if let Some(views) = input.views {
            self.views = views;
        }
        if input.poster_url.is_some() {
            self.poster_url = input.poster_url;
        }
        if let Some(featured) = input.is_featured {
            self.is_featured = featured;
        }
        if let Some(trending) = input.is_trending {
            self.is_trending = trending;
        }
    }
}
