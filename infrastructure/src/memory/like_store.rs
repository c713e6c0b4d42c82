//! In-memory per-viewer like ledger

use async_trait::async_trait;
use photofeed_application::{LikeRepository, RepositoryError};
use photofeed_domain::{IdentityId, PostId};
use std::collections::{HashMap, HashSet};
use tokio::sync::RwLock;

/// Set of liked post ids, keyed by viewer
#[derive(Default)]
pub struct InMemoryLikeRepository {
    liked: RwLock<HashMap<IdentityId, HashSet<PostId>>>,
}

impl InMemoryLikeRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl LikeRepository for InMemoryLikeRepository {
    async fn mark(&self, viewer: &IdentityId, post: &PostId) -> Result<(), RepositoryError> {
        self.liked
            .write()
            .await
            .entry(viewer.clone())
            .or_default()
            .insert(post.clone());
        Ok(())
    }

    async fn unmark(&self, viewer: &IdentityId, post: &PostId) -> Result<(), RepositoryError> {
        if let Some(posts) = self.liked.write().await.get_mut(viewer) {
            posts.remove(post);
        }
        Ok(())
    }

    async fn liked_by(&self, viewer: &IdentityId) -> Result<HashSet<PostId>, RepositoryError> {
        Ok(self
            .liked
            .read()
            .await
            .get(viewer)
            .cloned()
            .unwrap_or_default())
    }

    async fn has_liked(&self, viewer: &IdentityId, post: &PostId) -> Result<bool, RepositoryError> {
        Ok(self
            .liked
            .read()
            .await
            .get(viewer)
            .is_some_and(|posts| posts.contains(post)))
    }
}
