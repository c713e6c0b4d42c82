//! Credential rules for sign-in and sign-up.
//!
//! These are placeholder strength rules; no secret is ever stored.

use crate::core::error::DomainError;

/// A sign-in secret must be longer than this many characters.
pub const SIGN_IN_SECRET_MIN_EXCLUSIVE: usize = 3;

/// A sign-up secret must be at least this many characters.
pub const SIGN_UP_SECRET_MIN: usize = 6;

/// Whether a secret passes the sign-in strength rule.
pub fn sign_in_secret_accepted(secret: &str) -> bool {
    secret.chars().count() > SIGN_IN_SECRET_MIN_EXCLUSIVE
}

/// Validated sign-up request (Value Object)
///
/// Holds the handle and address of a prospective account. The secret is
/// checked on construction and then discarded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registration {
    username: String,
    email: String,
}

impl Registration {
    /// Validate a sign-up request.
    ///
    /// Every field must be non-empty and the secret must be at least
    /// [`SIGN_UP_SECRET_MIN`] characters long.
    pub fn try_new(username: &str, email: &str, secret: &str) -> Result<Self, DomainError> {
        if username.is_empty() {
            return Err(DomainError::MissingField("username"));
        }
        if email.is_empty() {
            return Err(DomainError::MissingField("email"));
        }
        if secret.is_empty() {
            return Err(DomainError::MissingField("password"));
        }
        if secret.chars().count() < SIGN_UP_SECRET_MIN {
            return Err(DomainError::SecretTooShort {
                min: SIGN_UP_SECRET_MIN,
            });
        }

        Ok(Self {
            username: username.to_string(),
            email: email.to_string(),
        })
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn email(&self) -> &str {
        &self.email
    }
}
