//! Logging configuration from TOML (`[logging]` section)

use serde::{Deserialize, Serialize};

/// Raw logging configuration from TOML
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLoggingConfig {
    /// Path of the JSONL activity log; disabled when unset
    pub activity_log: Option<String>,
}
