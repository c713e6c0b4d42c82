//! Configuration validation issues.
//!
//! Config loaders report problems as structured [`ConfigIssue`]s instead of
//! failing, falling back to defaults where they can.

/// Severity level of a configuration issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Fatal: the configuration cannot work at all.
    Error,
    /// Non-fatal: the configuration works but may not behave as expected.
    Warning,
}

/// Identifies a specific configuration issue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigIssueCode {
    /// A string field holds a value outside its enumeration.
    InvalidEnumValue {
        field: String,
        value: String,
        valid_values: Vec<String>,
    },
    /// A simulated delay long enough to look like a hang.
    ExcessiveLatency { field: String, millis: u64 },
}

/// A detected issue in the configuration.
#[derive(Debug, Clone)]
pub struct ConfigIssue {
    pub severity: Severity,
    pub code: ConfigIssueCode,
    pub message: String,
}
