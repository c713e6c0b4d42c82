//! In-memory post store

use async_trait::async_trait;
use photofeed_application::{PostRepository, RepositoryError};
use photofeed_domain::{Comment, IdentityId, Post, PostId, seed_posts};
use tokio::sync::RwLock;

/// Ordered post sequence held in process memory, most recent first
pub struct InMemoryPostRepository {
    posts: RwLock<Vec<Post>>,
}

impl InMemoryPostRepository {
    /// Store seeded with the demo feed
    pub fn seeded() -> Self {
        Self::with_posts(seed_posts())
    }

    pub fn with_posts(posts: Vec<Post>) -> Self {
        Self {
            posts: RwLock::new(posts),
        }
    }

    /// Apply `change` to the post with `id` under the write lock.
    async fn update(&self, id: &PostId, change: impl FnOnce(&mut Post)) -> Option<Post> {
        let mut posts = self.posts.write().await;
        let post = posts.iter_mut().find(|p| &p.id == id)?;
        change(post);
        Some(post.clone())
    }
}

impl Default for InMemoryPostRepository {
    fn default() -> Self {
        Self::seeded()
    }
}

#[async_trait]
impl PostRepository for InMemoryPostRepository {
    async fn list(&self) -> Result<Vec<Post>, RepositoryError> {
        Ok(self.posts.read().await.clone())
    }

    async fn list_by_owner(&self, owner: &IdentityId) -> Result<Vec<Post>, RepositoryError> {
        let posts = self.posts.read().await;
        Ok(posts.iter().filter(|p| p.is_owned_by(owner)).cloned().collect())
    }

    async fn get(&self, id: &PostId) -> Result<Option<Post>, RepositoryError> {
        let posts = self.posts.read().await;
        Ok(posts.iter().find(|p| &p.id == id).cloned())
    }

    async fn record_like(&self, id: &PostId) -> Result<Option<Post>, RepositoryError> {
        Ok(self.update(id, Post::record_like).await)
    }

    async fn record_unlike(&self, id: &PostId) -> Result<Option<Post>, RepositoryError> {
        Ok(self.update(id, Post::record_unlike).await)
    }

    async fn append_comment(
        &self,
        id: &PostId,
        comment: Comment,
    ) -> Result<Option<Post>, RepositoryError> {
        Ok(self.update(id, |post| post.append_comment(comment)).await)
    }

    async fn prepend(&self, post: Post) -> Result<(), RepositoryError> {
        self.posts.write().await.insert(0, post);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use photofeed_domain::Identity;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_prepend_puts_post_first() {
        let store = InMemoryPostRepository::seeded();
        let author = Identity::new("1", "johndoe", "john@example.com");

        store
            .prepend(Post::new("new", author, "http://img", "fresh", "t"))
            .await
            .unwrap();

        let posts = store.list().await.unwrap();
        assert_eq!(posts.len(), 6);
        assert_eq!(posts[0].id.as_str(), "new");
        assert_eq!(posts[1].id.as_str(), "1");
    }

    #[tokio::test]
    async fn test_record_unlike_clamps() {
        let author = Identity::new("1", "johndoe", "john@example.com");
        let store = InMemoryPostRepository::with_posts(vec![Post::new("p", author, "u", "c", "t")]);

        let post = store.record_unlike(&PostId::from("p")).await.unwrap().unwrap();
        assert_eq!(post.likes, 0);
        assert!(store.record_like(&PostId::from("missing")).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_concurrent_likes_are_not_lost() {
        let store = Arc::new(InMemoryPostRepository::seeded());
        let id = PostId::from("1");

        let mut handles = Vec::new();
        for _ in 0..20 {
            let store = Arc::clone(&store);
            let id = id.clone();
            handles.push(tokio::spawn(async move {
                store.record_like(&id).await.unwrap();
            }));
        }
        for handle in handles {
            handle.await.unwrap();
        }

        let post = store.get(&id).await.unwrap().unwrap();
        assert_eq!(post.likes, 62);
    }

    #[tokio::test]
    async fn test_list_by_owner_keeps_order() {
        let store = InMemoryPostRepository::seeded();

        let posts = store.list_by_owner(&IdentityId::from("1")).await.unwrap();
        let ids: Vec<_> = posts.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "3", "5"]);
    }
}
