//! In-memory fakes for use case tests.

use crate::ports::activity_logger::{ActivityEvent, ActivityLogger};
use crate::ports::clock::{Clock, IdGenerator, RandomSource, SystemPorts};
use crate::ports::repository::{
    IdentityRepository, LikeRepository, PostRepository, RepositoryError,
};
use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};
use photofeed_domain::{Comment, Identity, IdentityId, Post, PostId, seed_identities, seed_posts};
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

pub(crate) struct FakeIdentities(pub Mutex<Vec<Identity>>);

impl FakeIdentities {
    pub fn seeded() -> Arc<Self> {
        Arc::new(Self(Mutex::new(seed_identities())))
    }
}

#[async_trait]
impl IdentityRepository for FakeIdentities {
    async fn find_by_id(&self, id: &IdentityId) -> Result<Option<Identity>, RepositoryError> {
        Ok(self.0.lock().unwrap().iter().find(|i| &i.id == id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Identity>, RepositoryError> {
        Ok(self.0.lock().unwrap().iter().find(|i| i.email == email).cloned())
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<Identity>, RepositoryError> {
        Ok(self
            .0
            .lock()
            .unwrap()
            .iter()
            .find(|i| i.username == username)
            .cloned())
    }

    async fn insert_unique(&self, identity: Identity) -> Result<(), RepositoryError> {
        let mut all = self.0.lock().unwrap();
        if all
            .iter()
            .any(|i| i.conflicts_with(&identity.username, &identity.email))
        {
            return Err(RepositoryError::Duplicate(identity.username));
        }
        all.push(identity);
        Ok(())
    }
}

pub(crate) struct FakePosts(pub Mutex<Vec<Post>>);

impl FakePosts {
    pub fn seeded() -> Arc<Self> {
        Arc::new(Self(Mutex::new(seed_posts())))
    }

    fn update(&self, id: &PostId, f: impl FnOnce(&mut Post)) -> Option<Post> {
        let mut all = self.0.lock().unwrap();
        let post = all.iter_mut().find(|p| &p.id == id)?;
        f(post);
        Some(post.clone())
    }
}

#[async_trait]
impl PostRepository for FakePosts {
    async fn list(&self) -> Result<Vec<Post>, RepositoryError> {
        Ok(self.0.lock().unwrap().clone())
    }

    async fn list_by_owner(&self, owner: &IdentityId) -> Result<Vec<Post>, RepositoryError> {
        Ok(self
            .0
            .lock()
            .unwrap()
            .iter()
            .filter(|p| p.is_owned_by(owner))
            .cloned()
            .collect())
    }

    async fn get(&self, id: &PostId) -> Result<Option<Post>, RepositoryError> {
        Ok(self.0.lock().unwrap().iter().find(|p| &p.id == id).cloned())
    }

    async fn record_like(&self, id: &PostId) -> Result<Option<Post>, RepositoryError> {
        Ok(self.update(id, Post::record_like))
    }

    async fn record_unlike(&self, id: &PostId) -> Result<Option<Post>, RepositoryError> {
        Ok(self.update(id, Post::record_unlike))
    }

    async fn append_comment(
        &self,
        id: &PostId,
        comment: Comment,
    ) -> Result<Option<Post>, RepositoryError> {
        Ok(self.update(id, |post| post.append_comment(comment)))
    }

    async fn prepend(&self, post: Post) -> Result<(), RepositoryError> {
        self.0.lock().unwrap().insert(0, post);
        Ok(())
    }
}

#[derive(Default)]
pub(crate) struct FakeLikes(pub Mutex<HashMap<IdentityId, HashSet<PostId>>>);

#[async_trait]
impl LikeRepository for FakeLikes {
    async fn mark(&self, viewer: &IdentityId, post: &PostId) -> Result<(), RepositoryError> {
        self.0
            .lock()
            .unwrap()
            .entry(viewer.clone())
            .or_default()
            .insert(post.clone());
        Ok(())
    }

    async fn unmark(&self, viewer: &IdentityId, post: &PostId) -> Result<(), RepositoryError> {
        if let Some(set) = self.0.lock().unwrap().get_mut(viewer) {
            set.remove(post);
        }
        Ok(())
    }

    async fn liked_by(&self, viewer: &IdentityId) -> Result<HashSet<PostId>, RepositoryError> {
        Ok(self
            .0
            .lock()
            .unwrap()
            .get(viewer)
            .cloned()
            .unwrap_or_default())
    }
}

pub(crate) struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

#[derive(Default)]
pub(crate) struct SequentialIds(AtomicUsize);

impl IdGenerator for SequentialIds {
    fn next_id(&self) -> String {
        format!("gen{}", self.0.fetch_add(1, Ordering::SeqCst) + 1)
    }
}

pub(crate) struct FixedRandom(pub bool);

impl RandomSource for FixedRandom {
    fn coin_flip(&self) -> bool {
        self.0
    }
}

#[derive(Default)]
pub(crate) struct RecordingLogger(pub Mutex<Vec<&'static str>>);

impl RecordingLogger {
    pub fn events(&self) -> Vec<&'static str> {
        self.0.lock().unwrap().clone()
    }
}

impl ActivityLogger for RecordingLogger {
    fn log(&self, event: ActivityEvent) {
        self.0.lock().unwrap().push(event.event_type);
    }
}

pub(crate) fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap()
}

pub(crate) fn system_ports(coin: bool) -> SystemPorts {
    SystemPorts::new(
        Arc::new(FixedClock(fixed_now())),
        Arc::new(SequentialIds::default()),
        Arc::new(FixedRandom(coin)),
    )
}
