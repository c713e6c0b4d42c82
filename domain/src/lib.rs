//! Domain layer for photofeed
//!
//! This crate contains the entities and value objects of the photo feed.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! - **Identity**: a registered account (handle, contact address, profile fields)
//! - **Post**: a shared image with caption, like count and comment thread
//! - **Comment**: a text reply owned by exactly one post
//!
//! Posts and comments embed their author's identity by value; updating a
//! profile does not rewrite historical posts.

pub mod config;
pub mod core;
pub mod feed;
pub mod identity;
pub mod seed;

// Re-export commonly used types
pub use config::{ConfigIssue, ConfigIssueCode, OutputFormat, Severity};
pub use core::{
    error::{DomainError, ErrorKind},
    ids::{CommentId, IdentityId, PostId},
};
pub use feed::{
    entities::{Comment, Post},
    liked_flag::LikedFlagPolicy,
    profile::ProfileView,
};
pub use identity::{
    credentials::{Registration, sign_in_secret_accepted},
    entities::Identity,
};
pub use seed::{seed_identities, seed_posts};
