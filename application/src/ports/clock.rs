//! Time, identifier and randomness ports.
//!
//! Injected so that use cases stay deterministic under test.

use chrono::{DateTime, SecondsFormat, Utc};
use std::sync::Arc;

/// Source of the current time
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;

    /// Current time as an RFC 3339 string with millisecond precision.
    fn timestamp(&self) -> String {
        self.now().to_rfc3339_opts(SecondsFormat::Millis, true)
    }
}

/// Source of fresh entity identifiers
pub trait IdGenerator: Send + Sync {
    fn next_id(&self) -> String;
}

/// Source of randomness for the `random` liked-flag policy
pub trait RandomSource: Send + Sync {
    fn coin_flip(&self) -> bool;
}

/// Bundle of the environment ports every use case needs
#[derive(Clone)]
pub struct SystemPorts {
    pub clock: Arc<dyn Clock>,
    pub ids: Arc<dyn IdGenerator>,
    pub random: Arc<dyn RandomSource>,
}

impl SystemPorts {
    pub fn new(
        clock: Arc<dyn Clock>,
        ids: Arc<dyn IdGenerator>,
        random: Arc<dyn RandomSource>,
    ) -> Self {
        Self { clock, ids, random }
    }
}
