//! In-memory repository adapters.
//!
//! Each store holds its state behind a single lock and is seeded with the
//! demo data on construction. State lives as long as the store value; a
//! new process starts from the seed again.

mod identity_store;
mod like_store;
mod post_store;

pub use identity_store::InMemoryIdentityRepository;
pub use like_store::InMemoryLikeRepository;
pub use post_store::InMemoryPostRepository;
