//! Identity domain.
//!
//! - [`entities::Identity`] — a registered account
//! - [`credentials`] — the sign-in / sign-up credential rules

pub mod credentials;
pub mod entities;
