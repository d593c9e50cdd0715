//! Streaming server model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ServerKind {
    Embed,
    Direct,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ServerStatus {
    Online,
    Offline,
    Maintenance,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StreamServer {
    pub id: String,
    pub name: String,
    pub url: String,
    pub kind: ServerKind,
    pub status: ServerStatus,
    /// Lower values are preferred when picking a playback source.
    pub priority: u32,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateServer {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,
    #[validate(url(message = "url must be a valid URL"))]
    pub url: String,
    pub kind: ServerKind,
    pub status: Option<ServerStatus>,
    pub priority: Option<u32>,
    pub is_active: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateServer {
    pub name: Option<String>,
    pub url: Option<String>,
    pub kind: Option<ServerKind>,
    pub status: Option<ServerStatus>,
    pub priority: Option<u32>,
    pub is_active: Option<bool>,
}

impl StreamServer {
    pub fn from_create(input: CreateServer, id: String, now: DateTime<Utc>) -> Self {
        Self {
            id,
            name: input.name,
            url: input.url,
            kind: input.kind,
            status: input.status.unwrap_or(ServerStatus::Online),
            priority: input.priority.unwrap_or(100),
            is_active: input.is_active.unwrap_or(true),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn apply_update(&mut self, input: UpdateServer) {
        if let Some(name) = input.name {
            self.name = name;
        }
        if let Some(url) = input.url {
            self.url = url;
        }
        if let Some(kind) = input.kind {
            self.kind = kind;
        }
        if let Some(status) = input.status {
            self.status = status;
        }
        if let Some(priority) = input.priority {
            self.priority = priority;
        }
        if let Some(active) = input.is_active {
            self.is_active = active;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_status_round_trip() {
        let json = serde_json::to_string(&ServerStatus::Maintenance).unwrap();
        assert_eq!(json, "\"maintenance\"");
        let parsed: ServerStatus = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, ServerStatus::Maintenance);
    }

    #[test]
    fn from_create_defaults() {
        let input = CreateServer {
            name: "vidmoly".to_string(),
            url: "https://vidmoly.example.com".to_string(),
            kind: ServerKind::Embed,
            status: None,
            priority: None,
            is_active: None,
        };
        let server = StreamServer::from_create(input, "sv1".to_string(), Utc::now());
        assert_eq!(server.status, ServerStatus::Online);
        assert_eq!(server.priority, 100);
        assert!(server.is_active);
    }
}
