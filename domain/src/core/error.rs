//! Domain error types

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Domain-level validation errors raised by value objects and entities
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("All fields are required ({0} is empty)")]
    MissingField(&'static str),

    #[error("Password must be at least {min} characters")]
    SecretTooShort { min: usize },

    #[error("Comment text cannot be empty")]
    EmptyComment,
}

/// Failure taxonomy shared by every store operation.
///
/// Each use case error maps onto exactly one kind, which is what callers
/// (the console front-end) use to decide how to present the failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    InvalidCredentials,
    Validation,
    Conflict,
    NotFound,
    Unauthenticated,
    Storage,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::InvalidCredentials => "invalid_credentials",
            ErrorKind::Validation => "validation",
            ErrorKind::Conflict => "conflict",
            ErrorKind::NotFound => "not_found",
            ErrorKind::Unauthenticated => "unauthenticated",
            ErrorKind::Storage => "storage",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
