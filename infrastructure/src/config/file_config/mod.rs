//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod feed;
mod latency;
mod logging;
mod output;

pub use feed::FileFeedConfig;
pub use latency::FileLatencyConfig;
pub use logging::FileLoggingConfig;
pub use output::FileOutputConfig;

use photofeed_domain::ConfigIssue;
use serde::{Deserialize, Serialize};

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Simulated round-trip delays
    pub latency: FileLatencyConfig,
    /// Feed behaviour
    pub feed: FileFeedConfig,
    /// Output settings
    pub output: FileOutputConfig,
    /// Activity log settings
    pub logging: FileLoggingConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();
        issues.extend(self.feed.parse_liked_flag().1);
        issues.extend(self.latency.validate());
        issues
    }
}
