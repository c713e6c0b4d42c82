//! Core domain concepts shared across all subdomains.
//!
//! - [`ids`] — identifiers for identities, posts and comments
//! - [`error::DomainError`] — validation errors raised by value objects
//! - [`error::ErrorKind`] — the failure taxonomy surfaced to callers

pub mod error;
pub mod ids;
