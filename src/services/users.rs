//! Catalog user administration service.

use serde::Deserialize;
use validator::Validate;

use crate::errors::AppError;
use crate::models::pagination::{PagedResult, Pagination};
use crate::models::user::{CreateUser, UpdateUser, User, UserRole};
use crate::services::catalog::{matches_search, Deleted};
use crate::store::Catalog;

/// Filters for listing users.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct UserFilters {
    pub search: Option<String>,
    pub role: Option<UserRole>,
    pub active: Option<bool>,
}

impl UserFilters {
    fn matches(&self, user: &User) -> bool {
        if let Some(search) = &self.search {
            if !matches_search(
                search,
                &[
                    Some(user.username.as_str()),
                    Some(user.email.as_str()),
                    user.display_name.as_deref(),
                ],
            ) {
                return false;
            }
        }
        if let Some(role) = self.role {
            if user.role != role {
                return false;
            }
        }
        if let Some(active) = self.active {
            if user.is_active != active {
                return false;
            }
        }
        true
    }
}

pub async fn list(
    catalog: &Catalog,
    filters: &UserFilters,
    pagination: &Pagination,
) -> PagedResult<User> {
    let mut users = catalog.users.list().await;
    users.retain(|u| filters.matches(u));
    PagedResult::paginate(users, pagination)
}

pub async fn get(catalog: &Catalog, id: &str) -> Result<User, AppError> {
    catalog
        .users
        .get(id)
        .await
        .ok_or_else(|| AppError::NotFound(format!("User '{id}' not found")))
}

pub async fn create(catalog: &Catalog, input: CreateUser) -> Result<User, AppError> {
    input.validate()?;

    // Usernames are unique across the catalog.
    let taken = catalog
        .users
        .list()
        .await
        .iter()
        .any(|u| u.username == input.username);
    if taken {
        return Err(AppError::Validation(format!(
            "username '{}' is already taken",
            input.username
        )));
    }

    Ok(catalog
        .users
        .create(|id, now| User::from_create(input, id, now))
        .await?)
}

pub async fn update(catalog: &Catalog, id: &str, input: UpdateUser) -> Result<User, AppError> {
    catalog
        .users
        .update(id, |u| u.apply_update(input))
        .await?
        .ok_or_else(|| AppError::NotFound(format!("User '{id}' not found")))
}

pub async fn delete(catalog: &Catalog, id: &str) -> Result<Deleted, AppError> {
    if catalog.users.delete(id).await? {
        Ok(Deleted::new("User", id))
    } else {
        Err(AppError::NotFound(format!("User '{id}' not found")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user_input(username: &str) -> CreateUser {
        CreateUser {
            username: username.to_string(),
            email: format!("{username}@example.com"),
            display_name: None,
            role: None,
            is_active: None,
            avatar_url: None,
        }
    }

    #[tokio::test]
    async fn duplicate_username_is_rejected() {
        let catalog = Catalog::in_memory();
        create(&catalog, user_input("karim")).await.unwrap();
        let err = create(&catalog, user_input("karim")).await.unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[tokio::test]
    async fn role_filter() {
        let catalog = Catalog::in_memory();
        let mut admin = user_input("admin");
        admin.role = Some(UserRole::Admin);
        create(&catalog, admin).await.unwrap();
        create(&catalog, user_input("member")).await.unwrap();

        let filters = UserFilters {
            role: Some(UserRole::Admin),
            ..Default::default()
        };
        let result = list(&catalog, &filters, &Pagination::default()).await;
        assert_eq!(result.items.len(), 1);
        assert_eq!(result.items[0].username, "admin");
    }

    #[tokio::test]
    async fn search_matches_email() {
        let catalog = Catalog::in_memory();
        create(&catalog, user_input("karim")).await.unwrap();
        let filters = UserFilters {
            search: Some("KARIM@EXAMPLE".to_string()),
            ..Default::default()
        };
        let result = list(&catalog, &filters, &Pagination::default()).await;
        assert_eq!(result.items.len(), 1);
    }
}
