//! Series catalog model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SeriesStatus {
    Ongoing,
    Completed,
    Cancelled,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Series {
    pub id: String,
    pub title: String,
    pub original_title: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub seasons: u32,
    pub episodes: u32,
    pub status: SeriesStatus,
    pub rating: f64,
    pub views: u64,
    pub poster_url: Option<String>,
    pub is_featured: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateSeries {
    #[validate(length(min = 1, message = "title must not be empty"))]
    pub title: String,
    pub original_title: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub seasons: Option<u32>,
    pub episodes: Option<u32>,
    pub status: Option<SeriesStatus>,
    #[validate(range(min = 0.0, max = 10.0, message = "rating must be between 0 and 10"))]
    pub rating: Option<f64>,
    pub poster_url: Option<String>,
    pub is_featured: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateSeries {
    pub title: Option<String>,
    pub original_title: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub seasons: Option<u32>,
    pub episodes: Option<u32>,
    pub status: Option<SeriesStatus>,
    pub rating: Option<f64>,
    pub views: Option<u64>,
    pub poster_url: Option<String>,
    pub is_featured: Option<bool>,
}

impl Series {
    pub fn from_create(input: CreateSeries, id: String, now: DateTime<Utc>) -> Self {
        Self {
            id,
            title: input.title,
            original_title: input.original_title,
            description: input.description,
            category: input.category,
            seasons: input.seasons.unwrap_or(1),
            episodes: input.episodes.unwrap_or(0),
            status: input.status.unwrap_or(SeriesStatus::Ongoing),
            rating: input.rating.unwrap_or(0.0),
            views: 0,
            poster_url: input.poster_url,
            is_featured: input.is_featured.unwrap_or(false),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn apply_update(&mut self, input: UpdateSeries) {
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
        if let Some(seasons) = input.seasons {
            self.seasons = seasons;
        }
        if let Some(episodes) = input.episodes {
            self.episodes = episodes;
        }
        if let Some(status) = input.status {
            self.status = status;
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
    }
}
