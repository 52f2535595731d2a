use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tracing::{debug, info};

use crate::models::profile::Profile;
use crate::store::{ProfileRepository, StoreError};

/// Repository backed by a single pretty-printed JSON array on disk.
#[derive(Debug, Clone)]
pub struct FileProfileStore {
    path: PathBuf,
}

impl FileProfileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: std::io::Error) -> StoreError {
        StoreError::Io {
            path: self.path.clone(),
            source,
        }
    }

    /// Writes an empty list if the document is missing, creating parent dirs.
    async fn init_if_missing(&self) -> Result<(), StoreError> {
        if tokio::fs::try_exists(&self.path)
            .await
            .map_err(|e| self.io_error(e))?
        {
            return Ok(());
        }

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| self.io_error(e))?;
        }

        tokio::fs::write(&self.path, b"[]")
            .await
            .map_err(|e| self.io_error(e))?;

        info!("Initialized empty profile store at {}", self.path.display());
        Ok(())
    }
}

#[async_trait]
impl ProfileRepository for FileProfileStore {
    async fn load(&self) -> Result<Vec<Profile>, StoreError> {
        self.init_if_missing().await?;

        let bytes = tokio::fs::read(&self.path)
            .await
            .map_err(|e| self.io_error(e))?;

        let profiles: Vec<Profile> =
            serde_json::from_slice(&bytes).map_err(|source| StoreError::Malformed {
                path: self.path.clone(),
                source,
            })?;

        debug!("Loaded {} profiles from {}", profiles.len(), self.path.display());
        Ok(profiles)
    }

    async fn save(&self, profiles: &[Profile]) -> Result<(), StoreError> {
        // serde_json's pretty printer indents with two spaces.
        let body = serde_json::to_vec_pretty(profiles)?;

        tokio::fs::write(&self.path, body)
            .await
            .map_err(|e| self.io_error(e))?;

        debug!("Saved {} profiles to {}", profiles.len(), self.path.display());
        Ok(())
    }

    async fn ensure_initialized(&self) -> Result<(), StoreError> {
        self.init_if_missing().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn profile(id: i64, name: &str) -> Profile {
        Profile {
            id,
            name: name.to_string(),
            age: "31".to_string(),
            city: "Lisbon".to_string(),
            pace: 5.25,
            fav_distance: "10k".to_string(),
            bio: String::new(),
        }
    }

    #[tokio::test]
    async fn test_load_initializes_missing_document() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("data").join("profiles.json");
        let store = FileProfileStore::new(&path);

        let profiles = store.load().await.unwrap();

        assert!(profiles.is_empty());
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "[]");
    }

    #[tokio::test]
    async fn test_save_then_load_preserves_order() {
        let dir = tempdir().unwrap();
        let store = FileProfileStore::new(dir.path().join("profiles.json"));

        store
            .save(&[profile(2, "Bea"), profile(1, "Ana")])
            .await
            .unwrap();

        let loaded = store.load().await.unwrap();
        let names: Vec<&str> = loaded.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Bea", "Ana"]);
    }

    #[tokio::test]
    async fn test_save_writes_two_space_indentation() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("profiles.json");
        let store = FileProfileStore::new(&path);

        store.save(&[profile(1, "Ana")]).await.unwrap();

        let raw = std::fs::read_to_string(&path).unwrap();
        assert!(raw.starts_with("[\n  {\n    \"id\": 1,"), "got: {raw}");
    }

    #[tokio::test]
    async fn test_malformed_document_fails_whole_read() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("profiles.json");
        std::fs::write(&path, "{not json").unwrap();

        let err = FileProfileStore::new(&path).load().await.unwrap_err();
        assert!(matches!(err, StoreError::Malformed { .. }));
    }

    #[tokio::test]
    async fn test_ensure_initialized_keeps_existing_document() {
        let dir = tempdir().unwrap();
        let store = FileProfileStore::new(dir.path().join("profiles.json"));
        store.save(&[profile(1, "Ana")]).await.unwrap();

        store.ensure_initialized().await.unwrap();

        assert_eq!(store.load().await.unwrap().len(), 1);
    }
}
