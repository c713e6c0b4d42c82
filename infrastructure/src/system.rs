//! System clock, identifier and randomness adapters.

use chrono::{DateTime, Utc};
use photofeed_application::{Clock, IdGenerator, RandomSource, SystemPorts};
use std::sync::Arc;
use uuid::Uuid;

/// System clock - uses real time.
#[derive(Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Identifiers from random v4 UUIDs, in simple (hyphen-less) form.
#[derive(Default)]
pub struct UuidIdGenerator;

impl IdGenerator for UuidIdGenerator {
    fn next_id(&self) -> String {
        Uuid::new_v4().simple().to_string()
    }
}

/// Thread-local RNG.
#[derive(Default)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn coin_flip(&self) -> bool {
        rand::random::<bool>()
    }
}

/// Ports backed by the real clock, UUIDs and the thread RNG.
pub fn system_ports() -> SystemPorts {
    SystemPorts::new(
        Arc::new(SystemClock),
        Arc::new(UuidIdGenerator),
        Arc::new(ThreadRandom),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_ids_are_unique() {
        let ids = UuidIdGenerator;
        let a = ids.next_id();
        let b = ids.next_id();
        assert_ne!(a, b);
        assert_eq!(a.len(), 32);
    }

    #[test]
    fn test_timestamp_is_rfc3339_utc() {
        let stamp = SystemClock.timestamp();
        assert!(stamp.ends_with('Z'));
        assert!(DateTime::parse_from_rfc3339(&stamp).is_ok());
    }
}
