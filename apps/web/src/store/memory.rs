use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::models::profile::Profile;
use crate::store::{ProfileRepository, StoreError};

/// In-process repository used by tests and throwaway runs.
#[derive(Debug, Default)]
pub struct MemoryProfileStore {
    profiles: RwLock<Vec<Profile>>,
}

impl MemoryProfileStore {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    pub fn with_profiles(profiles: Vec<Profile>) -> Self {
        Self {
            profiles: RwLock::new(profiles),
        }
    }
}

#[async_trait]
impl ProfileRepository for MemoryProfileStore {
    async fn load(&self) -> Result<Vec<Profile>, StoreError> {
        Ok(self.profiles.read().await.clone())
    }

    async fn save(&self, profiles: &[Profile]) -> Result<(), StoreError> {
        *self.profiles.write().await = profiles.to_vec();
        Ok(())
    }
}
