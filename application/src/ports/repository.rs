//! Repository ports
//!
//! Storage contracts for identities, posts and per-viewer likes. The use
//! cases only ever talk to these traits; adapters live in the
//! infrastructure layer (in-memory stores seeded with demo data).
//!
//! Mutating methods apply their change atomically with respect to other
//! calls on the same repository, so overlapping likes never lose an
//! increment.

use async_trait::async_trait;
use photofeed_domain::{Comment, Identity, IdentityId, Post, PostId};
use std::collections::HashSet;
use thiserror::Error;

/// Errors that can occur in a repository adapter
#[derive(Error, Debug)]
pub enum RepositoryError {
    #[error("Duplicate entry: {0}")]
    Duplicate(String),

    #[error("Storage unavailable: {0}")]
    Unavailable(String),

    #[error("Other error: {0}")]
    Other(String),
}

/// Storage of registered identities
#[async_trait]
pub trait IdentityRepository: Send + Sync {
    async fn find_by_id(&self, id: &IdentityId) -> Result<Option<Identity>, RepositoryError>;

    async fn find_by_email(&self, email: &str) -> Result<Option<Identity>, RepositoryError>;

    async fn find_by_username(&self, username: &str) -> Result<Option<Identity>, RepositoryError>;

    /// Append an identity unless its handle or address is already taken.
    ///
    /// Returns [`RepositoryError::Duplicate`] on collision.
    async fn insert_unique(&self, identity: Identity) -> Result<(), RepositoryError>;
}

/// Storage of the ordered post sequence (most recent first)
#[async_trait]
pub trait PostRepository: Send + Sync {
    /// Every post, in sequence order
    async fn list(&self) -> Result<Vec<Post>, RepositoryError>;

    /// Posts owned by `owner`, in sequence order
    async fn list_by_owner(&self, owner: &IdentityId) -> Result<Vec<Post>, RepositoryError>;

    async fn get(&self, id: &PostId) -> Result<Option<Post>, RepositoryError>;

    /// Increment the like count. `None` if the post does not exist.
    async fn record_like(&self, id: &PostId) -> Result<Option<Post>, RepositoryError>;

    /// Decrement the like count, clamped at zero. `None` if the post does not exist.
    async fn record_unlike(&self, id: &PostId) -> Result<Option<Post>, RepositoryError>;

    /// Append to the post's comment thread and return the updated post.
    async fn append_comment(
        &self,
        id: &PostId,
        comment: Comment,
    ) -> Result<Option<Post>, RepositoryError>;

    /// Insert at the head of the sequence.
    async fn prepend(&self, post: Post) -> Result<(), RepositoryError>;
}

/// Per-viewer record of liked posts
#[async_trait]
pub trait LikeRepository: Send + Sync {
    async fn mark(&self, viewer: &IdentityId, post: &PostId) -> Result<(), RepositoryError>;

    async fn unmark(&self, viewer: &IdentityId, post: &PostId) -> Result<(), RepositoryError>;

    async fn liked_by(&self, viewer: &IdentityId) -> Result<HashSet<PostId>, RepositoryError>;

    async fn has_liked(&self, viewer: &IdentityId, post: &PostId) -> Result<bool, RepositoryError> {
        Ok(self.liked_by(viewer).await?.contains(post))
    }
}
