//! Identity domain entities

use crate::core::ids::IdentityId;
use serde::{Deserialize, Serialize};

/// A registered account (Entity)
///
/// Posts and comments embed a snapshot of their author's `Identity` by
/// value, so later profile changes never rewrite history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub id: IdentityId,
    /// Display handle, unique across identities
    pub username: String,
    /// Contact address, unique across identities
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(default)]
    pub followers: u32,
    #[serde(default)]
    pub following: u32,
}

impl Identity {
    pub fn new(
        id: impl Into<IdentityId>,
        username: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            username: username.into(),
            email: email.into(),
            avatar: None,
            bio: None,
            followers: 0,
            following: 0,
        }
    }

    pub fn with_avatar(mut self, avatar: impl Into<String>) -> Self {
        self.avatar = Some(avatar.into());
        self
    }

    pub fn with_bio(mut self, bio: impl Into<String>) -> Self {
        self.bio = Some(bio.into());
        self
    }

    pub fn with_follow_counts(mut self, followers: u32, following: u32) -> Self {
        self.followers = followers;
        self.following = following;
        self
    }

    /// Generated avatar reference for accounts created through sign-up.
    pub fn generated_avatar(username: &str) -> String {
        format!("https://ui-avatars.com/api/?name={}&background=random", username)
    }

    /// Whether this identity collides with the given handle or address.
    pub fn conflicts_with(&self, username: &str, email: &str) -> bool {
        self.username == username || self.email == email
    }
}
