//! Profile read model

use crate::feed::entities::Post;
use crate::identity::entities::Identity;
use serde::{Deserialize, Serialize};

/// An identity together with the posts it owns, most recent first
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileView {
    pub identity: Identity,
    pub posts: Vec<Post>,
}

impl ProfileView {
    pub fn new(identity: Identity, posts: Vec<Post>) -> Self {
        Self { identity, posts }
    }

    pub fn post_count(&self) -> usize {
        self.posts.len()
    }
}
