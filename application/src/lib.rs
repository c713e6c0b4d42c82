//! Application layer for photofeed
//!
//! This crate contains use cases, port definitions, the explicit
//! [`Session`] object and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod session;
pub mod use_cases;

#[cfg(test)]
pub(crate) mod testing;

// Re-export commonly used types
pub use config::SimulatedLatency;
pub use ports::{
    activity_logger::{ActivityEvent, ActivityLogger, NoActivityLogger},
    clock::{Clock, IdGenerator, RandomSource, SystemPorts},
    progress::{NoProgress, Operation, ProgressNotifier},
    repository::{IdentityRepository, LikeRepository, PostRepository, RepositoryError},
};
pub use session::Session;
pub use use_cases::post_feed::{FeedError, FeedUseCase};
pub use use_cases::session_store::{SessionError, SessionUseCase};
