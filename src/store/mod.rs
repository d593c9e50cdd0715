//! Record stores backing the catalog.
//!
//! [`Store<T>`] keeps records in insertion order behind a
//! `tokio::sync::RwLock`. Every read-modify-write path (including id
//! assignment) runs under a single write guard, so concurrent creates cannot
//! collide. A store can optionally be bound to a JSON file: it is loaded
//! once at startup and a snapshot is written after each mutation. An
//! unreadable backing file yields an empty collection, never an error —
//! callers treat "empty" and "unavailable" identically at this layer. A
//! failed snapshot write, by contrast, fails the mutation: acknowledging a
//! write that was never durable would lose it on restart.

use std::io;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::models::settings::SiteSettings;

/// Contract every catalog record satisfies.
pub trait Record: Clone + Send + Sync + Serialize + DeserializeOwned + 'static {
    /// Plural collection name; also the backing file stem (`movies.json`).
    const COLLECTION: &'static str;

    fn id(&self) -> &str;

    /// Refresh `updated_at` after a mutation.
    fn touch(&mut self, now: DateTime<Utc>);
}

macro_rules! impl_record {
    ($ty:ty, $collection:literal) => {
        impl Record for $ty {
            const COLLECTION: &'static str = $collection;

            fn id(&self) -> &str {
                &self.id
            }

            fn touch(&mut self, now: DateTime<Utc>) {
                self.updated_at = now;
            }
        }
    };
}

impl_record!(crate::models::movie::Movie, "movies");
impl_record!(crate::models::series::Series, "series");
impl_record!(crate::models::ad::Ad, "ads");
impl_record!(crate::models::server::StreamServer, "servers");
impl_record!(crate::models::user::User, "users");

/// Insertion-ordered record store with optional JSON file persistence.
#[derive(Debug)]
pub struct Store<T: Record> {
    records: RwLock<Vec<T>>,
    path: Option<PathBuf>,
}

impl<T: Record> Store<T> {
    /// Purely in-memory store, used by tests and demo endpoints.
    pub fn in_memory() -> Self {
        Self {
            records: RwLock::new(Vec::new()),
            path: None,
        }
    }

    /// File-backed store rooted at `data_dir`. A missing or corrupt file
    /// starts the store empty.
    pub fn open(data_dir: &Path) -> Self {
        let path = data_dir.join(format!("{}.json", T::COLLECTION));
        let records = load_collection(&path);
        Self {
            records: RwLock::new(records),
            path: Some(path),
        }
    }

    /// All records in stable insertion order.
    pub async fn list(&self) -> Vec<T> {
        self.records.read().await.clone()
    }

    pub async fn count(&self) -> i64 {
        self.records.read().await.len() as i64
    }

    pub async fn get(&self, id: &str) -> Option<T> {
        self.records
            .read()
            .await
            .iter()
            .find(|r| r.id() == id)
            .cloned()
    }

    /// Append a new record. The builder receives a store-assigned id and
    /// creation timestamp; both are generated under the write lock. Fails
    /// when the snapshot cannot be written.
    pub async fn create<F>(&self, build: F) -> io::Result<T>
    where
        F: FnOnce(String, DateTime<Utc>) -> T,
    {
        let mut records = self.records.write().await;
        let record = build(Uuid::new_v4().to_string(), Utc::now());
        records.push(record.clone());
        self.persist(&records)?;
        Ok(record)
    }

    /// Mutate the record with the given id in place and bump `updated_at`.
    /// Returns the updated record, or `None` when no record matches.
    pub async fn update<F>(&self, id: &str, apply: F) -> io::Result<Option<T>>
    where
        F: FnOnce(&mut T),
    {
        let mut records = self.records.write().await;
        let Some(record) = records.iter_mut().find(|r| r.id() == id) else {
            return Ok(None);
        };
        apply(record);
        record.touch(Utc::now());
        let updated = record.clone();
        self.persist(&records)?;
        Ok(Some(updated))
    }

    /// Permanently remove the record with the given id.
    pub async fn delete(&self, id: &str) -> io::Result<bool> {
        let mut records = self.records.write().await;
        let before = records.len();
        records.retain(|r| r.id() != id);
        let removed = records.len() < before;
        if removed {
            self.persist(&records)?;
        }
        Ok(removed)
    }

    /// Replace the whole collection, used by the seed binary and tests.
    pub async fn replace_all(&self, new_records: Vec<T>) -> io::Result<()> {
        let mut records = self.records.write().await;
        *records = new_records;
        self.persist(&records)
    }

    fn persist(&self, records: &[T]) -> io::Result<()> {
        let Some(path) = &self.path else {
            return Ok(());
        };
        let bytes = serde_json::to_vec_pretty(records)?;
        if let Err(e) = std::fs::write(path, bytes) {
            tracing::warn!(path = %path.display(), error = %e, "Failed to persist store");
            return Err(e);
        }
        Ok(())
    }
}

fn load_collection<T: DeserializeOwned>(path: &Path) -> Vec<T> {
    match std::fs::read(path) {
        Ok(bytes) => match serde_json::from_slice(&bytes) {
            Ok(records) => records,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "Corrupt collection file, starting empty");
                Vec::new()
            }
        },
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "Collection file unavailable, starting empty");
            Vec::new()
        }
    }
}

/// Singleton store for [`SiteSettings`]. Falls back to defaults when the
/// backing file is unavailable.
#[derive(Debug)]
pub struct SettingsStore {
    settings: RwLock<SiteSettings>,
    path: Option<PathBuf>,
}

impl SettingsStore {
    pub fn in_memory() -> Self {
        Self {
            settings: RwLock::new(SiteSettings::default()),
            path: None,
        }
    }

    pub fn open(data_dir: &Path) -> Self {
        let path = data_dir.join("settings.json");
        let settings = match std::fs::read(&path) {
            Ok(bytes) => serde_json::from_slice(&bytes).unwrap_or_else(|e| {
                tracing::warn!(path = %path.display(), error = %e, "Corrupt settings file, using defaults");
                SiteSettings::default()
            }),
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "Settings file unavailable, using defaults");
                SiteSettings::default()
            }
        };
        Self {
            settings: RwLock::new(settings),
            path: Some(path),
        }
    }

    pub async fn get(&self) -> SiteSettings {
        self.settings.read().await.clone()
    }

    pub async fn update<F>(&self, apply: F) -> io::Result<SiteSettings>
    where
        F: FnOnce(&mut SiteSettings),
    {
        let mut settings = self.settings.write().await;
        apply(&mut settings);
        if let Some(path) = &self.path {
            let bytes = serde_json::to_vec_pretty(&*settings)?;
            if let Err(e) = std::fs::write(path, bytes) {
                tracing::warn!(path = %path.display(), error = %e, "Failed to persist settings");
                return Err(e);
            }
        }
        Ok(settings.clone())
    }
}

/// All catalog stores, shared across handlers through `AppState`.
#[derive(Debug)]
pub struct Catalog {
    pub movies: Store<crate::models::movie::Movie>,
    pub series: Store<crate::models::series::Series>,
    pub ads: Store<crate::models::ad::Ad>,
    pub servers: Store<crate::models::server::StreamServer>,
    pub users: Store<crate::models::user::User>,
    pub settings: SettingsStore,
}

impl Catalog {
    /// In-memory catalog for tests and ephemeral demo deployments.
    pub fn in_memory() -> Self {
        Self {
            movies: Store::in_memory(),
            series: Store::in_memory(),
            ads: Store::in_memory(),
            servers: Store::in_memory(),
            users: Store::in_memory(),
            settings: SettingsStore::in_memory(),
        }
    }

    /// Catalog backed by JSON files under `data_dir`.
    pub fn open(data_dir: &Path) -> Self {
        Self {
            movies: Store::open(data_dir),
            series: Store::open(data_dir),
            ads: Store::open(data_dir),
            servers: Store::open(data_dir),
            users: Store::open(data_dir),
            settings: SettingsStore::open(data_dir),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::movie::{CreateMovie, Movie};

    fn movie_input(title: &str) -> CreateMovie {
        CreateMovie {
            title: title.to_string(),
            original_title: None,
            description: None,
            category: None,
            year: None,
            quality: None,
            rating: None,
            poster_url: None,
            is_featured: None,
            is_trending: None,
        }
    }

    #[tokio::test]
    async fn create_assigns_unique_ids() {
        let store: Store<Movie> = Store::in_memory();
        let a = store
            .create(|id, now| Movie::from_create(movie_input("A"), id, now))
            .await
            .unwrap();
        let b = store
            .create(|id, now| Movie::from_create(movie_input("B"), id, now))
            .await
            .unwrap();
        assert_ne!(a.id, b.id);
        assert_eq!(store.count().await, 2);
    }

    #[tokio::test]
    async fn list_preserves_insertion_order() {
        let store: Store<Movie> = Store::in_memory();
        for title in ["First", "Second", "Third"] {
            store
                .create(|id, now| Movie::from_create(movie_input(title), id, now))
                .await
                .unwrap();
        }
        let titles: Vec<String> = store.list().await.into_iter().map(|m| m.title).collect();
        assert_eq!(titles, ["First", "Second", "Third"]);
    }

    #[tokio::test]
    async fn update_bumps_updated_at_and_keeps_identity() {
        let store: Store<Movie> = Store::in_memory();
        let created = store
            .create(|id, now| Movie::from_create(movie_input("A"), id, now))
            .await
            .unwrap();
        let updated = store
            .update(&created.id, |m| m.rating = 9.0)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(updated.id, created.id);
        assert_eq!(updated.created_at, created.created_at);
        assert!(updated.updated_at > created.updated_at);
    }

    #[tokio::test]
    async fn delete_removes_record() {
        let store: Store<Movie> = Store::in_memory();
        let created = store
            .create(|id, now| Movie::from_create(movie_input("A"), id, now))
            .await
            .unwrap();
        assert!(store.delete(&created.id).await.unwrap());
        assert!(!store.delete(&created.id).await.unwrap());
        assert!(store.get(&created.id).await.is_none());
    }

    #[tokio::test]
    async fn missing_backing_file_starts_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store: Store<Movie> = Store::open(dir.path());
        assert!(store.list().await.is_empty());
    }

    #[tokio::test]
    async fn corrupt_backing_file_starts_empty() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("movies.json"), b"{not json").unwrap();
        let store: Store<Movie> = Store::open(dir.path());
        assert!(store.list().await.is_empty());
    }

    #[tokio::test]
    async fn unwritable_snapshot_fails_the_mutation() {
        let dir = tempfile::tempdir().unwrap();
        // A directory at the collection path makes every snapshot write fail.
        std::fs::create_dir(dir.path().join("movies.json")).unwrap();
        let store: Store<Movie> = Store::open(dir.path());

        let result = store
            .create(|id, now| Movie::from_create(movie_input("A"), id, now))
            .await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn mutations_persist_to_disk() {
        let dir = tempfile::tempdir().unwrap();
        let store: Store<Movie> = Store::open(dir.path());
        let created = store
            .create(|id, now| Movie::from_create(movie_input("Persisted"), id, now))
            .await
            .unwrap();

        let reopened: Store<Movie> = Store::open(dir.path());
        let loaded = reopened.get(&created.id).await.unwrap();
        assert_eq!(loaded.title, "Persisted");
    }

    #[tokio::test]
    async fn settings_fall_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let store = SettingsStore::open(dir.path());
        let settings = store.get().await;
        assert_eq!(settings.site_name, "Shasha");
    }

    #[tokio::test]
    async fn settings_update_round_trips_through_disk() {
        let dir = tempfile::tempdir().unwrap();
        let store = SettingsStore::open(dir.path());
        store
            .update(|s| s.site_name = "Aflam".to_string())
            .await
            .unwrap();

        let reopened = SettingsStore::open(dir.path());
        assert_eq!(reopened.get().await.site_name, "Aflam");
    }
}
