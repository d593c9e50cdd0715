//! Advertisement model with impression/click counters.
//!
//! The counters are aggregate attributes: they move only through the
//! dedicated increment operations, never through a generic update.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum AdPosition {
    Header,
    Sidebar,
    Footer,
    Popup,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ad {
    pub id: String,
    pub title: String,
    pub content: Option<String>,
    pub image_url: Option<String>,
    pub target_url: String,
    pub position: AdPosition,
    pub is_active: bool,
    pub click_count: u64,
    pub impression_count: u64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateAd {
    #[validate(length(min = 1, message = "title must not be empty"))]
    pub title: String,
    pub content: Option<String>,
    pub image_url: Option<String>,
    #[validate(url(message = "target_url must be a valid URL"))]
    pub target_url: String,
    pub position: AdPosition,
    /// Absent means "default to active"; an explicit `false` is honored.
    pub is_active: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateAd {
    pub title: Option<String>,
    pub content: Option<String>,
    pub image_url: Option<String>,
    pub target_url: Option<String>,
    pub position: Option<AdPosition>,
    pub is_active: Option<bool>,
}

impl Ad {
    pub fn from_create(input: CreateAd, id: String, now: DateTime<Utc>) -> Self {
        Self {
            id,
            title: input.title,
            content: input.content,
            image_url: input.image_url,
            target_url: input.target_url,
            position: input.position,
            is_active: input.is_active.unwrap_or(true),
            click_count: 0,
            impression_count: 0,
            created_at: now,
            updated_at: now,
        }
    }

    /// Shallow merge; counters are deliberately not reachable from here.
    pub fn apply_update(&mut self, input: UpdateAd) {
        if let Some(title) = input.title {
            self.title = title;
        }
        if input.content.is_some() {
            self.content = input.content;
        }
        if input.image_url.is_some() {
            self.image_url = input.image_url;
        }
        if let Some(target_url) = input.target_url {
            self.target_url = target_url;
        }
        if let Some(position) = input.position {
            self.position = position;
        }
        if let Some(active) = input.is_active {
            self.is_active = active;
        }
    }
}
