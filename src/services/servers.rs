//! Streaming server registry service.

use serde::Deserialize;
use validator::Validate;

use crate::errors::AppError;
use crate::models::pagination::{PagedResult, Pagination};
use crate::models::server::{CreateServer, ServerKind, ServerStatus, StreamServer, UpdateServer};
use crate::services::catalog::{matches_search, sort_by_key, Deleted, SortOrder};
use crate::store::Catalog;

/// Filters for listing streaming servers.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct ServerFilters {
    pub search: Option<String>,
    pub kind: Option<ServerKind>,
    pub status: Option<ServerStatus>,
    pub active: Option<bool>,
    /// Order by priority instead of insertion order.
    pub by_priority: Option<bool>,
}

impl ServerFilters {
    fn matches(&self, server: &StreamServer) -> bool {
        if let Some(search) = &self.search {
            if !matches_search(search, &[Some(server.name.as_str())]) {
                return false;
            }
        }
        if let Some(kind) = self.kind {
            if server.kind != kind {
                return false;
            }
        }
        if let Some(status) = self.status {
            if server.status != status {
                return false;
            }
        }
        if let Some(active) = self.active {
            if server.is_active != active {
                return false;
            }
        }
        true
    }
}

pub async fn list(
    catalog: &Catalog,
    filters: &ServerFilters,
    pagination: &Pagination,
) -> PagedResult<StreamServer> {
    let mut servers = catalog.servers.list().await;
    servers.retain(|s| filters.matches(s));
    if filters.by_priority.unwrap_or(false) {
        // Lower priority value means preferred, so ascending here.
        sort_by_key(&mut servers, SortOrder::Asc, |s| s.priority);
    }
    PagedResult::paginate(servers, pagination)
}

pub async fn get(catalog: &Catalog, id: &str) -> Result<StreamServer, AppError> {
    catalog
        .servers
        .get(id)
        .await
        .ok_or_else(|| AppError::NotFound(format!("Server '{id}' not found")))
}

pub async fn create(catalog: &Catalog, input: CreateServer) -> Result<StreamServer, AppError> {
    input.validate()?;
    Ok(catalog
        .servers
        .create(|id, now| StreamServer::from_create(input, id, now))
        .await?)
}

pub async fn update(
    catalog: &Catalog,
    id: &str,
    input: UpdateServer,
) -> Result<StreamServer, AppError> {
    catalog
        .servers
        .update(id, |s| s.apply_update(input))
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Server '{id}' not found")))
}

pub async fn delete(catalog: &Catalog, id: &str) -> Result<Deleted, AppError> {
    if catalog.servers.delete(id).await? {
        Ok(Deleted::new("Server", id))
    } else {
        Err(AppError::NotFound(format!("Server '{id}' not found")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn server_input(name: &str, priority: u32) -> CreateServer {
        CreateServer {
            name: name.to_string(),
            url: format!("https://{name}.example.com"),
            kind: ServerKind::Embed,
            status: None,
            priority: Some(priority),
            is_active: None,
        }
    }

    #[tokio::test]
    async fn priority_ordering_is_ascending() {
        let catalog = Catalog::in_memory();
        create(&catalog, server_input("slow", 50)).await.unwrap();
        create(&catalog, server_input("fast", 10)).await.unwrap();

        let filters = ServerFilters {
            by_priority: Some(true),
            ..Default::default()
        };
        let result = list(&catalog, &filters, &Pagination::default()).await;
        let names: Vec<&str> = result.items.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, ["fast", "slow"]);
    }

    #[tokio::test]
    async fn status_update_round_trip() {
        let catalog = Catalog::in_memory();
        let created = create(&catalog, server_input("vid", 10)).await.unwrap();
        let updated = update(
            &catalog,
            &created.id,
            UpdateServer {
                status: Some(ServerStatus::Maintenance),
                ..Default::default()
            },
        )
        .await
        .unwrap();
        assert_eq!(updated.status, ServerStatus::Maintenance);
        assert_eq!(updated.id, created.id);
    }
}
