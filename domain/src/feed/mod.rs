//! Feed domain.
//!
//! - [`entities::Post`] — a shared image with caption, like count and comment thread
//! - [`entities::Comment`] — a text reply owned by its post
//! - [`profile::ProfileView`] — an identity together with the posts it owns
//! - [`liked_flag::LikedFlagPolicy`] — how the per-viewer `liked` flag is derived

pub mod entities;
pub mod liked_flag;
pub mod profile;
