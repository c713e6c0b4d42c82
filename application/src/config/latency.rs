//! Simulated latency — per-operation round-trip delays.
//!
//! [`SimulatedLatency`] models the network round-trip of each store
//! operation. It is not a performance requirement; tests run with
//! [`SimulatedLatency::none`].

use crate::ports::progress::Operation;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Delay applied before each store operation resolves.
///
/// | Operation     | Default |
/// |---------------|---------|
/// | sign in / up  | 800 ms  |
/// | sign out      | 300 ms  |
/// | load feed     | 800 ms  |
/// | load profile  | 500 ms  |
/// | like / unlike | 300 ms  |
/// | comment       | 300 ms  |
/// | create post   | 500 ms  |
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulatedLatency {
    pub sign_in: Duration,
    pub sign_up: Duration,
    pub sign_out: Duration,
    pub list_all: Duration,
    pub list_by_owner: Duration,
    pub like: Duration,
    pub unlike: Duration,
    pub comment: Duration,
    pub create: Duration,
}

impl Default for SimulatedLatency {
    fn default() -> Self {
        Self {
            sign_in: Duration::from_millis(800),
            sign_up: Duration::from_millis(800),
            sign_out: Duration::from_millis(300),
            list_all: Duration::from_millis(800),
            list_by_owner: Duration::from_millis(500),
            like: Duration::from_millis(300),
            unlike: Duration::from_millis(300),
            comment: Duration::from_millis(300),
            create: Duration::from_millis(500),
        }
    }
}

impl SimulatedLatency {
    /// No delay at all.
    pub fn none() -> Self {
        Self::uniform(Duration::ZERO)
    }

    /// The same delay for every operation.
    pub fn uniform(delay: Duration) -> Self {
        Self {
            sign_in: delay,
            sign_up: delay,
            sign_out: delay,
            list_all: delay,
            list_by_owner: delay,
            like: delay,
            unlike: delay,
            comment: delay,
            create: delay,
        }
    }

    /// Delay for the given operation.
    pub fn of(&self, operation: Operation) -> Duration {
        match operation {
            Operation::SignIn => self.sign_in,
            Operation::SignUp => self.sign_up,
            Operation::SignOut => self.sign_out,
            Operation::LoadFeed => self.list_all,
            Operation::LoadProfile => self.list_by_owner,
            Operation::Like => self.like,
            Operation::Unlike => self.unlike,
            Operation::Comment => self.comment,
            Operation::CreatePost => self.create,
        }
    }

    // ==================== Builder Methods ====================

    pub fn with(mut self, operation: Operation, delay: Duration) -> Self {
        let slot = match operation {
            Operation::SignIn => &mut self.sign_in,
            Operation::SignUp => &mut self.sign_up,
            Operation::SignOut => &mut self.sign_out,
            Operation::LoadFeed => &mut self.list_all,
            Operation::LoadProfile => &mut self.list_by_owner,
            Operation::Like => &mut self.like,
            Operation::Unlike => &mut self.unlike,
            Operation::Comment => &mut self.comment,
            Operation::CreatePost => &mut self.create,
        };
        *slot = delay;
        self
    }

    /// Wait out the delay for `operation`.
    pub(crate) async fn wait(&self, operation: Operation) {
        let delay = self.of(operation);
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_reference_timings() {
        let latency = SimulatedLatency::default();
        assert_eq!(latency.of(Operation::LoadFeed), Duration::from_millis(800));
        assert_eq!(latency.of(Operation::LoadProfile), Duration::from_millis(500));
        assert_eq!(latency.of(Operation::Like), Duration::from_millis(300));
        assert_eq!(latency.of(Operation::SignOut), Duration::from_millis(300));
    }

    #[test]
    fn test_none_is_zero_everywhere() {
        let latency = SimulatedLatency::none();
        assert!(latency.of(Operation::SignIn).is_zero());
        assert!(latency.of(Operation::CreatePost).is_zero());
    }

    #[test]
    fn test_builder_overrides_single_operation() {
        let latency = SimulatedLatency::none().with(Operation::Comment, Duration::from_millis(5));
        assert_eq!(latency.comment, Duration::from_millis(5));
        assert!(latency.like.is_zero());
    }

    #[tokio::test(start_paused = true)]
    async fn test_wait_sleeps_for_operation_delay() {
        let latency = SimulatedLatency::none().with(Operation::Like, Duration::from_millis(300));
        let start = tokio::time::Instant::now();
        latency.wait(Operation::Like).await;
        assert!(start.elapsed() >= Duration::from_millis(300));
    }
}
