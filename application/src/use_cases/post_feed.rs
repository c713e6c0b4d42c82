//! Feed use case
//!
//! Listing, liking, commenting on and creating posts. Every operation waits
//! out its simulated round-trip before touching the repository; operations
//! that need a signed-in author check the session before waiting.

use crate::config::SimulatedLatency;
use crate::ports::activity_logger::{ActivityEvent, ActivityLogger, NoActivityLogger};
use crate::ports::clock::SystemPorts;
use crate::ports::progress::{NoProgress, Operation, ProgressNotifier};
use crate::ports::repository::{
    IdentityRepository, LikeRepository, PostRepository, RepositoryError,
};
use crate::session::Session;
use crate::use_cases::shared::reported;
use photofeed_domain::{
    Comment, DomainError, ErrorKind, Identity, IdentityId, LikedFlagPolicy, Post, PostId,
    ProfileView,
};
use serde_json::json;
use std::collections::HashSet;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};

/// Errors that can occur during feed operations
#[derive(Error, Debug)]
pub enum FeedError {
    #[error("Post not found: {0}")]
    PostNotFound(PostId),

    #[error("User not found: {0}")]
    IdentityNotFound(IdentityId),

    #[error("User not authenticated")]
    Unauthenticated,

    #[error("{0}")]
    Validation(#[from] DomainError),

    #[error("Repository error: {0}")]
    Repository(#[from] RepositoryError),
}

impl FeedError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            FeedError::PostNotFound(_) | FeedError::IdentityNotFound(_) => ErrorKind::NotFound,
            FeedError::Unauthenticated => ErrorKind::Unauthenticated,
            FeedError::Validation(_) => ErrorKind::Validation,
            FeedError::Repository(_) => ErrorKind::Storage,
        }
    }
}

/// Use case for reading and mutating the post feed
pub struct FeedUseCase {
    posts: Arc<dyn PostRepository>,
    likes: Arc<dyn LikeRepository>,
    identities: Arc<dyn IdentityRepository>,
    session: Session,
    system: SystemPorts,
    latency: SimulatedLatency,
    liked_flag: LikedFlagPolicy,
    activity: Arc<dyn ActivityLogger>,
    progress: Arc<dyn ProgressNotifier>,
}

impl FeedUseCase {
    pub fn new(
        posts: Arc<dyn PostRepository>,
        likes: Arc<dyn LikeRepository>,
        identities: Arc<dyn IdentityRepository>,
        session: Session,
        system: SystemPorts,
    ) -> Self {
        Self {
            posts,
            likes,
            identities,
            session,
            system,
            latency: SimulatedLatency::default(),
            liked_flag: LikedFlagPolicy::default(),
            activity: Arc::new(NoActivityLogger),
            progress: Arc::new(NoProgress),
        }
    }

    pub fn with_latency(mut self, latency: SimulatedLatency) -> Self {
        self.latency = latency;
        self
    }

    pub fn with_liked_flag_policy(mut self, policy: LikedFlagPolicy) -> Self {
        self.liked_flag = policy;
        self
    }

    pub fn with_activity_logger(mut self, activity: Arc<dyn ActivityLogger>) -> Self {
        self.activity = activity;
        self
    }

    pub fn with_progress(mut self, progress: Arc<dyn ProgressNotifier>) -> Self {
        self.progress = progress;
        self
    }

    /// Every post, most recent first, with `liked` set for the current viewer.
    pub async fn list_all(&self) -> Result<Vec<Post>, FeedError> {
        reported(self.progress.as_ref(), Operation::LoadFeed, self.list_all_inner()).await
    }

    async fn list_all_inner(&self) -> Result<Vec<Post>, FeedError> {
        self.latency.wait(Operation::LoadFeed).await;

        let mut posts = self.posts.list().await?;
        match self.liked_flag {
            LikedFlagPolicy::Tracked => self.apply_viewer_likes(&mut posts).await?,
            LikedFlagPolicy::Random => {
                for post in &mut posts {
                    post.liked = self.system.random.coin_flip();
                }
            }
        }

        debug!("Loaded {} posts", posts.len());
        Ok(posts)
    }

    /// Posts owned by `owner`, in feed order.
    pub async fn list_by_owner(&self, owner: &IdentityId) -> Result<Vec<Post>, FeedError> {
        reported(
            self.progress.as_ref(),
            Operation::LoadProfile,
            self.list_by_owner_inner(owner),
        )
        .await
    }

    async fn list_by_owner_inner(&self, owner: &IdentityId) -> Result<Vec<Post>, FeedError> {
        self.latency.wait(Operation::LoadProfile).await;

        let mut posts = self.posts.list_by_owner(owner).await?;
        if self.liked_flag == LikedFlagPolicy::Tracked {
            self.apply_viewer_likes(&mut posts).await?;
        }
        Ok(posts)
    }

    /// An identity's profile: the identity itself plus the posts it owns.
    pub async fn profile(&self, identity_id: &IdentityId) -> Result<ProfileView, FeedError> {
        reported(
            self.progress.as_ref(),
            Operation::LoadProfile,
            self.profile_inner(identity_id),
        )
        .await
    }

    async fn profile_inner(&self, identity_id: &IdentityId) -> Result<ProfileView, FeedError> {
        let identity = self
            .identities
            .find_by_id(identity_id)
            .await?
            .ok_or_else(|| FeedError::IdentityNotFound(identity_id.clone()))?;
        let posts = self.list_by_owner_inner(identity_id).await?;
        Ok(ProfileView::new(identity, posts))
    }

    /// Add one like to a post.
    pub async fn like(&self, post_id: &PostId) -> Result<Post, FeedError> {
        reported(self.progress.as_ref(), Operation::Like, self.like_inner(post_id)).await
    }

    async fn like_inner(&self, post_id: &PostId) -> Result<Post, FeedError> {
        self.latency.wait(Operation::Like).await;

        let mut post = self
            .posts
            .record_like(post_id)
            .await?
            .ok_or_else(|| FeedError::PostNotFound(post_id.clone()))?;
        post.liked = true;

        if let Some(viewer) = self.session.viewer_id() {
            self.likes.mark(&viewer, post_id).await?;
        }

        info!("Post {} liked ({} likes)", post.id, post.likes);
        self.activity.log(ActivityEvent::new(
            "post_liked",
            json!({
                "post_id": post.id,
                "likes": post.likes,
                "viewer": self.session.viewer_id(),
            }),
        ));
        Ok(post)
    }

    /// Withdraw one like from a post; the count never drops below zero.
    pub async fn unlike(&self, post_id: &PostId) -> Result<Post, FeedError> {
        reported(self.progress.as_ref(), Operation::Unlike, self.unlike_inner(post_id)).await
    }

    async fn unlike_inner(&self, post_id: &PostId) -> Result<Post, FeedError> {
        self.latency.wait(Operation::Unlike).await;

        let mut post = self
            .posts
            .record_unlike(post_id)
            .await?
            .ok_or_else(|| FeedError::PostNotFound(post_id.clone()))?;
        post.liked = false;

        if let Some(viewer) = self.session.viewer_id() {
            self.likes.unmark(&viewer, post_id).await?;
        }

        info!("Post {} unliked ({} likes)", post.id, post.likes);
        self.activity.log(ActivityEvent::new(
            "post_unliked",
            json!({
                "post_id": post.id,
                "likes": post.likes,
                "viewer": self.session.viewer_id(),
            }),
        ));
        Ok(post)
    }

    /// Like the post if the viewer has not liked it yet, otherwise unlike it.
    pub async fn toggle_like(&self, post_id: &PostId) -> Result<Post, FeedError> {
        let liked = match (self.liked_flag, self.session.viewer_id()) {
            (LikedFlagPolicy::Tracked, Some(viewer)) => {
                self.likes.has_liked(&viewer, post_id).await?
            }
            // Nobody to have liked it yet
            (LikedFlagPolicy::Tracked, None) => false,
            (LikedFlagPolicy::Random, _) => {
                self.posts
                    .get(post_id)
                    .await?
                    .ok_or_else(|| FeedError::PostNotFound(post_id.clone()))?
                    .liked
            }
        };

        if liked {
            self.unlike(post_id).await
        } else {
            self.like(post_id).await
        }
    }

    /// Append a comment by the signed-in identity and return it.
    ///
    /// The parent post is not returned; use [`Self::add_comment_and_fetch`]
    /// to get the updated thread in one call.
    pub async fn add_comment(&self, post_id: &PostId, text: &str) -> Result<Comment, FeedError> {
        self.add_comment_and_fetch(post_id, text)
            .await
            .map(|(comment, _)| comment)
    }

    /// Append a comment by the signed-in identity and return it together
    /// with the updated post.
    pub async fn add_comment_and_fetch(
        &self,
        post_id: &PostId,
        text: &str,
    ) -> Result<(Comment, Post), FeedError> {
        reported(
            self.progress.as_ref(),
            Operation::Comment,
            self.add_comment_and_fetch_inner(post_id, text),
        )
        .await
    }

    async fn add_comment_and_fetch_inner(
        &self,
        post_id: &PostId,
        text: &str,
    ) -> Result<(Comment, Post), FeedError> {
        let author = self.require_author()?;

        self.latency.wait(Operation::Comment).await;

        let comment = Comment::try_new(
            self.system.ids.next_id(),
            author,
            text,
            self.system.clock.timestamp(),
        )?;

        let mut post = self
            .posts
            .append_comment(post_id, comment.clone())
            .await?
            .ok_or_else(|| FeedError::PostNotFound(post_id.clone()))?;
        if self.liked_flag == LikedFlagPolicy::Tracked {
            self.apply_viewer_likes(std::slice::from_mut(&mut post)).await?;
        }

        info!("Comment {} added to post {}", comment.id, post.id);
        self.activity.log(ActivityEvent::new(
            "comment_added",
            json!({
                "post_id": post.id,
                "comment_id": comment.id,
                "author": comment.user.id,
            }),
        ));
        Ok((comment, post))
    }

    /// Share a new post as the signed-in identity, at the head of the feed.
    pub async fn create(&self, caption: &str, image_url: &str) -> Result<Post, FeedError> {
        reported(
            self.progress.as_ref(),
            Operation::CreatePost,
            self.create_inner(caption, image_url),
        )
        .await
    }

    async fn create_inner(&self, caption: &str, image_url: &str) -> Result<Post, FeedError> {
        let author = self.require_author()?;

        self.latency.wait(Operation::CreatePost).await;

        let post = Post::new(
            self.system.ids.next_id(),
            author,
            image_url,
            caption,
            self.system.clock.timestamp(),
        );
        self.posts.prepend(post.clone()).await?;

        info!("Post {} created by {}", post.id, post.user.username);
        self.activity.log(ActivityEvent::new(
            "post_created",
            json!({ "post_id": post.id, "author": post.user.id }),
        ));
        Ok(post)
    }

    fn require_author(&self) -> Result<Identity, FeedError> {
        self.session
            .current_identity()
            .ok_or(FeedError::Unauthenticated)
    }

    async fn apply_viewer_likes(&self, posts: &mut [Post]) -> Result<(), FeedError> {
        let liked: HashSet<PostId> = match self.session.viewer_id() {
            Some(viewer) => self.likes.liked_by(&viewer).await?,
            None => HashSet::new(),
        };
        for post in posts {
            post.liked = liked.contains(&post.id);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{
        FakeIdentities, FakeLikes, FakePosts, RecordingLogger, system_ports,
    };
    use crate::use_cases::session_store::SessionUseCase;

    struct Harness {
        sessions: SessionUseCase,
        feed: FeedUseCase,
        posts: Arc<FakePosts>,
    }

    fn harness_with(policy: LikedFlagPolicy, coin: bool) -> Harness {
        let identities = FakeIdentities::seeded();
        let posts = FakePosts::seeded();
        let session = Session::new();
        let system = system_ports(coin);

        let sessions = SessionUseCase::new(identities.clone(), session.clone(), system.clone())
            .with_latency(SimulatedLatency::none());
        let feed = FeedUseCase::new(
            posts.clone(),
            Arc::new(FakeLikes::default()),
            identities,
            session,
            system,
        )
        .with_latency(SimulatedLatency::none())
        .with_liked_flag_policy(policy);

        Harness {
            sessions,
            feed,
            posts,
        }
    }

    fn harness() -> Harness {
        harness_with(LikedFlagPolicy::Tracked, false)
    }

    async fn sign_in_john(h: &Harness) {
        h.sessions
            .authenticate("john@example.com", "password")
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_scenario_sign_in_create_and_like() {
        let h = harness();
        sign_in_john(&h).await;

        let post = h.feed.create("hello", "http://img").await.unwrap();
        assert_eq!(post.user.id.as_str(), "1");
        assert_eq!(post.likes, 0);
        assert!(post.comments.is_empty());
        assert!(!post.liked);
        assert_eq!(post.created_at, "2024-03-01T12:00:00.000Z");

        let liked = h.feed.like(&post.id).await.unwrap();
        assert_eq!(liked.likes, 1);
        assert!(liked.liked);
    }

    #[tokio::test]
    async fn test_create_inserts_at_head() {
        let h = harness();
        sign_in_john(&h).await;

        let first = h.feed.create("first", "http://a").await.unwrap();
        let second = h.feed.create("", "http://b").await.unwrap();

        let feed = h.feed.list_all().await.unwrap();
        assert_eq!(feed.len(), 7);
        assert_eq!(feed[0].id, second.id);
        assert_eq!(feed[1].id, first.id);
        assert_eq!(feed[2].id.as_str(), "1");
    }

    #[tokio::test]
    async fn test_create_requires_session() {
        let h = harness();

        let err = h.feed.create("hello", "http://img").await.unwrap_err();
        assert!(matches!(err, FeedError::Unauthenticated));
        assert_eq!(h.posts.0.lock().unwrap().len(), 5);
    }

    #[tokio::test]
    async fn test_unlike_never_goes_below_zero() {
        let h = harness();
        sign_in_john(&h).await;
        let post = h.feed.create("zero", "http://img").await.unwrap();

        let unliked = h.feed.unlike(&post.id).await.unwrap();
        assert_eq!(unliked.likes, 0);
        assert!(!unliked.liked);
    }

    #[tokio::test]
    async fn test_like_then_unlike_restores_count() {
        let h = harness();
        let id = PostId::from("2");

        let liked = h.feed.like(&id).await.unwrap();
        assert_eq!(liked.likes, 90);
        let unliked = h.feed.unlike(&id).await.unwrap();
        assert_eq!(unliked.likes, 89);
        assert!(!unliked.liked);
    }

    #[tokio::test]
    async fn test_like_unknown_post_is_not_found() {
        let h = harness();

        let err = h.feed.like(&PostId::from("missing")).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);
        let err = h.feed.unlike(&PostId::from("missing")).await.unwrap_err();
        assert!(matches!(err, FeedError::PostNotFound(_)));
    }

    #[tokio::test]
    async fn test_overlapping_likes_both_apply() {
        let h = harness();
        let id = PostId::from("4");

        let (a, b) = tokio::join!(h.feed.like(&id), h.feed.like(&id));
        a.unwrap();
        b.unwrap();

        let stored = h.posts.0.lock().unwrap()[3].likes;
        assert_eq!(stored, 69);
    }

    #[tokio::test]
    async fn test_add_comment_appends_exactly_one() {
        let h = harness();
        sign_in_john(&h).await;
        let id = PostId::from("2");

        let comment = h.feed.add_comment(&id, "Nice!").await.unwrap();
        assert_eq!(comment.user.id.as_str(), "1");
        assert_eq!(comment.text, "Nice!");

        let post = h.posts.0.lock().unwrap()[1].clone();
        assert_eq!(post.comments.len(), 1);
        assert_eq!(post.comments[0], comment);
    }

    #[tokio::test]
    async fn test_add_comment_and_fetch_returns_updated_post() {
        let h = harness();
        sign_in_john(&h).await;

        let (comment, post) = h
            .feed
            .add_comment_and_fetch(&PostId::from("1"), "Thanks!")
            .await
            .unwrap();
        assert_eq!(post.comments.len(), 2);
        assert_eq!(post.comments.last(), Some(&comment));
    }

    #[tokio::test]
    async fn test_add_comment_unknown_post_is_not_found() {
        let h = harness();
        sign_in_john(&h).await;

        let err = h
            .feed
            .add_comment(&PostId::from("nope"), "hello")
            .await
            .unwrap_err();
        assert!(matches!(err, FeedError::PostNotFound(_)));
    }

    #[tokio::test]
    async fn test_add_comment_while_signed_out_mutates_nothing() {
        let h = harness();
        let before = h.posts.0.lock().unwrap().clone();

        let err = h
            .feed
            .add_comment(&PostId::from("1"), "hello")
            .await
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Unauthenticated);
        assert_eq!(*h.posts.0.lock().unwrap(), before);
    }

    #[tokio::test]
    async fn test_add_blank_comment_is_validation_error() {
        let h = harness();
        sign_in_john(&h).await;

        let err = h
            .feed
            .add_comment(&PostId::from("1"), "   ")
            .await
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Validation);
    }

    #[tokio::test]
    async fn test_list_by_owner_filters_and_keeps_order() {
        let h = harness();

        let posts = h.feed.list_by_owner(&IdentityId::from("2")).await.unwrap();
        let ids: Vec<_> = posts.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["2", "4"]);
    }

    #[tokio::test]
    async fn test_tracked_liked_flag_follows_viewer() {
        let h = harness();
        sign_in_john(&h).await;
        h.feed.like(&PostId::from("3")).await.unwrap();

        let feed = h.feed.list_all().await.unwrap();
        let liked: Vec<_> = feed
            .iter()
            .filter(|p| p.liked)
            .map(|p| p.id.as_str())
            .collect();
        assert_eq!(liked, vec!["3"]);

        // Another viewer sees nothing liked
        h.sessions.deauthenticate().await;
        h.sessions
            .authenticate("jane@example.com", "password")
            .await
            .unwrap();
        let feed = h.feed.list_all().await.unwrap();
        assert!(feed.iter().all(|p| !p.liked));
    }

    #[tokio::test]
    async fn test_random_liked_flag_uses_random_source() {
        let h = harness_with(LikedFlagPolicy::Random, true);

        let feed = h.feed.list_all().await.unwrap();
        assert!(feed.iter().all(|p| p.liked));

        // Owner listing is not randomised
        let posts = h.feed.list_by_owner(&IdentityId::from("1")).await.unwrap();
        assert!(posts.iter().all(|p| !p.liked));
    }

    #[tokio::test]
    async fn test_toggle_like_alternates() {
        let h = harness();
        sign_in_john(&h).await;
        let id = PostId::from("5");

        let post = h.feed.toggle_like(&id).await.unwrap();
        assert_eq!((post.likes, post.liked), (155, true));
        let post = h.feed.toggle_like(&id).await.unwrap();
        assert_eq!((post.likes, post.liked), (154, false));
    }

    #[tokio::test]
    async fn test_add_comment_and_fetch_reports_own_liked_flag() {
        let h = harness();
        let id = PostId::from("3");
        sign_in_john(&h).await;
        h.feed.like(&id).await.unwrap();

        let (_, post) = h.feed.add_comment_and_fetch(&id, "nice").await.unwrap();
        assert!(post.liked);

        h.sessions.deauthenticate().await;
        h.sessions
            .authenticate("jane@example.com", "password")
            .await
            .unwrap();
        let (_, post) = h.feed.add_comment_and_fetch(&id, "agreed").await.unwrap();
        assert!(!post.liked);
        assert_eq!(post.likes, 125);
    }

    #[tokio::test]
    async fn test_signed_out_toggle_never_takes_back_a_like() {
        let h = harness();
        let id = PostId::from("3");
        sign_in_john(&h).await;
        h.feed.like(&id).await.unwrap();
        h.sessions.deauthenticate().await;

        let post = h.feed.toggle_like(&id).await.unwrap();
        assert_eq!((post.likes, post.liked), (126, true));

        sign_in_john(&h).await;
        let feed = h.feed.list_all().await.unwrap();
        let post = feed.iter().find(|p| p.id == id).unwrap();
        assert!(post.liked);
    }

    #[tokio::test]
    async fn test_profile_includes_identity_and_posts() {
        let h = harness();

        let profile = h.feed.profile(&IdentityId::from("1")).await.unwrap();
        assert_eq!(profile.identity.username, "johndoe");
        assert_eq!(profile.identity.followers, 235);
        assert_eq!(profile.post_count(), 3);

        let err = h.feed.profile(&IdentityId::from("99")).await.unwrap_err();
        assert!(matches!(err, FeedError::IdentityNotFound(_)));
    }

    #[tokio::test]
    async fn test_mutations_are_logged() {
        let logger = Arc::new(RecordingLogger::default());
        let h = harness();
        sign_in_john(&h).await;
        let feed = h.feed.with_activity_logger(logger.clone());

        let post = feed.create("hi", "http://img").await.unwrap();
        feed.like(&post.id).await.unwrap();
        feed.unlike(&post.id).await.unwrap();
        feed.add_comment(&post.id, "first").await.unwrap();
        feed.list_all().await.unwrap();

        assert_eq!(
            logger.events(),
            vec!["post_created", "post_liked", "post_unliked", "comment_added"]
        );
    }
}
