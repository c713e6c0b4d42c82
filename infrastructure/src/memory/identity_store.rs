//! In-memory identity store

use async_trait::async_trait;
use photofeed_application::{IdentityRepository, RepositoryError};
use photofeed_domain::{Identity, IdentityId, seed_identities};
use tokio::sync::RwLock;
use tracing::debug;

/// Identity set held in process memory
pub struct InMemoryIdentityRepository {
    identities: RwLock<Vec<Identity>>,
}

impl InMemoryIdentityRepository {
    /// Store seeded with the two demo accounts
    pub fn seeded() -> Self {
        Self::with_identities(seed_identities())
    }

    pub fn with_identities(identities: Vec<Identity>) -> Self {
        Self {
            identities: RwLock::new(identities),
        }
    }

    pub async fn len(&self) -> usize {
        self.identities.read().await.len()
    }
}

impl Default for InMemoryIdentityRepository {
    fn default() -> Self {
        Self::seeded()
    }
}

#[async_trait]
impl IdentityRepository for InMemoryIdentityRepository {
    async fn find_by_id(&self, id: &IdentityId) -> Result<Option<Identity>, RepositoryError> {
        let identities = self.identities.read().await;
        Ok(identities.iter().find(|i| &i.id == id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Identity>, RepositoryError> {
        let identities = self.identities.read().await;
        Ok(identities.iter().find(|i| i.email == email).cloned())
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<Identity>, RepositoryError> {
        let identities = self.identities.read().await;
        Ok(identities.iter().find(|i| i.username == username).cloned())
    }

    async fn insert_unique(&self, identity: Identity) -> Result<(), RepositoryError> {
        let mut identities = self.identities.write().await;
        if let Some(existing) = identities
            .iter()
            .find(|i| i.conflicts_with(&identity.username, &identity.email))
        {
            return Err(RepositoryError::Duplicate(format!(
                "{} / {}",
                existing.username, existing.email
            )));
        }

        debug!("Storing identity {} ({})", identity.username, identity.id);
        identities.push(identity);
        Ok(())
    }
}
