//! Catalog user model.
//!
//! Authentication is handled elsewhere; this is the administrative view of
//! site members, so no credentials are stored here.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Admin,
    Moderator,
    Member,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub username: String,
    pub email: String,
    pub display_name: Option<String>,
    pub role: UserRole,
    pub is_active: bool,
    pub avatar_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateUser {
    #[validate(length(min = 3, message = "username must be at least 3 characters"))]
    pub username: String,
    #[validate(email(message = "email must be a valid address"))]
    pub email: String,
    pub display_name: Option<String>,
    pub role: Option<UserRole>,
    pub is_active: Option<bool>,
    pub avatar_url: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateUser {
    pub username: Option<String>,
    pub email: Option<String>,
    pub display_name: Option<String>,
    pub role: Option<UserRole>,
    pub is_active: Option<bool>,
    pub avatar_url: Option<String>,
}

impl User {
    pub fn from_create(input: CreateUser, id: String, now: DateTime<Utc>) -> Self {
        Self {
            id,
            username: input.username,
            email: input.email,
            display_name: input.display_name,
            role: input.role.unwrap_or(UserRole::Member),
            is_active: input.is_active.unwrap_or(true),
            avatar_url: input.avatar_url,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn apply_update(&mut self, input: UpdateUser) {
        if let Some(username) = input.username {
            self.username = username;
        }
        if let Some(email) = input.email {
            self.email = email;
        }
        if input.display_name.is_some() {
            self.display_name = input.display_name;
        }
        if let Some(role) = input.role {
            self.role = role;
        }
        if let Some(active) = input.is_active {
            self.is_active = active;
        }
        if input.avatar_url.is_some() {
            self.avatar_url = input.avatar_url;
        }
    }
}
