//! Demo data restored on every process start.

use crate::feed::entities::{Comment, Post};
use crate::identity::entities::Identity;

const JOHN_AVATAR: &str = "https://images.unsplash.com/photo-1472099645785-5658abf4ff4e?ixlib=rb-1.2.1&ixid=eyJhcHBfaWQiOjEyMDd9&auto=format&fit=facearea&facepad=2&w=256&h=256&q=80";
const JANE_AVATAR: &str = "https://images.unsplash.com/photo-1494790108377-be9c29b29330?ixlib=rb-1.2.1&ixid=eyJhcHBfaWQiOjEyMDd9&auto=format&fit=facearea&facepad=2&w=256&h=256&q=80";

fn image(photo: &str) -> String {
    format!(
        "https://images.unsplash.com/{}?ixlib=rb-1.2.1&ixid=eyJhcHBfaWQiOjEyMDd9&auto=format&fit=crop&w=1080&q=80",
        photo
    )
}

/// The two demo accounts with full profiles.
pub fn seed_identities() -> Vec<Identity> {
    vec![
        Identity::new("1", "johndoe", "john@example.com")
            .with_avatar(JOHN_AVATAR)
            .with_bio("Photography enthusiast. Travel lover.")
            .with_follow_counts(235, 114),
        Identity::new("2", "janedoe", "jane@example.com")
            .with_avatar(JANE_AVATAR)
            .with_bio("Digital artist and designer")
            .with_follow_counts(542, 267),
    ]
}

// Posts embed a slimmer author snapshot (no bio or counts), as they were
// captured when the posts were written.
fn john_snapshot() -> Identity {
    Identity::new("1", "johndoe", "john@example.com").with_avatar(JOHN_AVATAR)
}

fn jane_snapshot() -> Identity {
    Identity::new("2", "janedoe", "jane@example.com").with_avatar(JANE_AVATAR)
}

fn seed_comment(id: &str, text: &str, created_at: &str) -> Comment {
    Comment {
        id: id.into(),
        user: jane_snapshot(),
        text: text.to_string(),
        created_at: created_at.to_string(),
    }
}

/// The demo feed, most recent first.
pub fn seed_posts() -> Vec<Post> {
    vec![
        Post::new(
            "1",
            john_snapshot(),
            image("photo-1649972904349-6e44c42644a7"),
            "Working from home today #productivity",
            "2023-06-15T09:45:00Z",
        )
        .with_likes(42)
        .with_comment(seed_comment("c1", "Love your setup!", "2023-06-15T10:12:00Z")),
        Post::new(
            "2",
            jane_snapshot(),
            image("photo-1488590528505-98d2b5aba04b"),
            "New tech setup complete! #tech #coding",
            "2023-06-14T14:23:00Z",
        )
        .with_likes(89),
        Post::new(
            "3",
            john_snapshot(),
            image("photo-1581091226825-a6a2a5aee158"),
            "Remote work life #digital #nomad",
            "2023-06-13T15:30:00Z",
        )
        .with_likes(124)
        .with_comment(seed_comment("c2", "This looks amazing!", "2023-06-13T16:05:00Z")),
        Post::new(
            "4",
            jane_snapshot(),
            image("photo-1581092795360-fd1ca04f0952"),
            "Office days are productive days! #work #office",
            "2023-06-12T11:20:00Z",
        )
        .with_likes(67),
        Post::new(
            "5",
            john_snapshot(),
            image("photo-1721322800607-8c38375eef04"),
            "Home sweet home #interiordesign",
            "2023-06-10T18:45:00Z",
        )
        .with_likes(154),
    ]
}
