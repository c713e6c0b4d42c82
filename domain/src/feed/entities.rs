//! Feed domain entities

use crate::core::error::DomainError;
use crate::core::ids::{CommentId, IdentityId, PostId};
use crate::identity::entities::Identity;
use serde::{Deserialize, Serialize};

/// A text reply to a post (Entity)
///
/// Owned by its parent [`Post`]; appended only, never edited or removed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: CommentId,
    pub user: Identity,
    pub text: String,
    /// RFC 3339 timestamp
    pub created_at: String,
}

impl Comment {
    /// Build a comment, rejecting blank text.
    pub fn try_new(
        id: impl Into<CommentId>,
        user: Identity,
        text: impl Into<String>,
        created_at: impl Into<String>,
    ) -> Result<Self, DomainError> {
        let text = text.into();
        if text.trim().is_empty() {
            return Err(DomainError::EmptyComment);
        }
        Ok(Self {
            id: id.into(),
            user,
            text,
            created_at: created_at.into(),
        })
    }
}

/// A shared image with caption, like count and comment thread (Entity)
///
/// `liked` is a per-viewer, per-read flag: it describes the post as seen by
/// whoever fetched it and is not part of the post's own state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: PostId,
    pub user: Identity,
    pub image_url: String,
    pub caption: String,
    pub likes: u32,
    pub comments: Vec<Comment>,
    /// RFC 3339 timestamp
    pub created_at: String,
    #[serde(default)]
    pub liked: bool,
}

impl Post {
    /// A fresh post with no likes and no comments.
    pub fn new(
        id: impl Into<PostId>,
        user: Identity,
        image_url: impl Into<String>,
        caption: impl Into<String>,
        created_at: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            user,
            image_url: image_url.into(),
            caption: caption.into(),
            likes: 0,
            comments: Vec::new(),
            created_at: created_at.into(),
            liked: false,
        }
    }

    pub fn with_likes(mut self, likes: u32) -> Self {
        self.likes = likes;
        self
    }

    pub fn with_comment(mut self, comment: Comment) -> Self {
        self.comments.push(comment);
        self
    }

    pub fn with_liked(mut self, liked: bool) -> Self {
        self.liked = liked;
        self
    }

    pub fn is_owned_by(&self, identity_id: &IdentityId) -> bool {
        &self.user.id == identity_id
    }

    /// Count one more like and mark the post as liked.
    pub fn record_like(&mut self) {
        self.likes = self.likes.saturating_add(1);
        self.liked = true;
    }

    /// Withdraw one like (never below zero) and clear the liked mark.
    pub fn record_unlike(&mut self) {
        self.likes = self.likes.saturating_sub(1);
        self.liked = false;
    }

    pub fn append_comment(&mut self, comment: Comment) {
        self.comments.push(comment);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn author() -> Identity {
        Identity::new("1", "johndoe", "john@example.com")
    }

    #[test]
    fn test_new_post_is_empty() {
        let post = Post::new("p1", author(), "http://img", "hello", "2024-01-01T00:00:00.000Z");
        assert_eq!(post.likes, 0);
        assert!(post.comments.is_empty());
        assert!(!post.liked);
    }

    #[test]
    fn test_unlike_clamps_at_zero() {
        let mut post = Post::new("p1", author(), "http://img", "", "t");
        post.record_unlike();
        assert_eq!(post.likes, 0);
        assert!(!post.liked);
    }

    #[test]
    fn test_like_then_unlike_restores_count() {
        let mut post = Post::new("p1", author(), "http://img", "", "t").with_likes(41);
        post.record_like();
        assert_eq!(post.likes, 42);
        assert!(post.liked);
        post.record_unlike();
        assert_eq!(post.likes, 41);
        assert!(!post.liked);
    }

    #[test]
    fn test_blank_comment_rejected() {
        let result = Comment::try_new("c9", author(), "   ", "t");
        assert_eq!(result, Err(DomainError::EmptyComment));
    }

    #[test]
    fn test_post_serializes_camel_case() {
        let post = Post::new("p1", author(), "http://img", "hi", "2024-01-01T00:00:00.000Z");
        let json = serde_json::to_value(&post).unwrap();
        assert_eq!(json["imageUrl"], "http://img");
        assert_eq!(json["createdAt"], "2024-01-01T00:00:00.000Z");
        assert_eq!(json["user"]["id"], "1");
    }
}
