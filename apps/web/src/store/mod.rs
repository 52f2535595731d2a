//! Profile storage — one JSON document holding every profile.
//!
//! Handlers never touch the file directly; they go through the
//! `ProfileRepository` carried in `AppState` as `Arc<dyn ProfileRepository>`.
//! There is no locking across `load`/`save`: concurrent writers race and the
//! last full-document write wins.

use std::path::PathBuf;

use async_trait::async_trait;
use thiserror::Error;

use crate::models::profile::Profile;

pub mod file;
pub mod memory;

pub use file::FileProfileStore;
pub use memory::MemoryProfileStore;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed profile document {path}: {source}")]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to serialize profiles: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Whole-document storage contract for profiles.
#[async_trait]
pub trait ProfileRepository: Send + Sync {
    /// Returns every stored profile in insertion order.
    /// Initializes an empty document on first access.
    async fn load(&self) -> Result<Vec<Profile>, StoreError>;

    /// Replaces the stored document with `profiles`.
    async fn save(&self, profiles: &[Profile]) -> Result<(), StoreError>;

    /// Creates the empty document if it does not exist yet.
    async fn ensure_initialized(&self) -> Result<(), StoreError> {
        self.load().await.map(|_| ())
    }
}
