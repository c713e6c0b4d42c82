//! Infrastructure layer for photofeed
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer: in-memory stores seeded with demo data,
//! system clock / id / randomness sources, the JSONL activity log,
//! and configuration file loading.

pub mod config;
pub mod logging;
pub mod memory;
pub mod system;

// Re-export commonly used types
pub use config::{
    ConfigLoader, FileConfig, FileFeedConfig, FileLatencyConfig, FileLoggingConfig,
    FileOutputConfig,
};
pub use logging::JsonlActivityLogger;
pub use memory::{InMemoryIdentityRepository, InMemoryLikeRepository, InMemoryPostRepository};
pub use system::{SystemClock, ThreadRandom, UuidIdGenerator, system_ports};
