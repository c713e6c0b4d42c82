//! Use cases
//!
//! Application-level operations that orchestrate domain logic.

pub mod post_feed;
pub mod session_store;
pub(crate) mod shared;
