//! Application-level configuration.
//!
//! - [`SimulatedLatency`] — per-operation round-trip delays

pub mod latency;

pub use latency::SimulatedLatency;
