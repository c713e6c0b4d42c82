//! Simulated latency from TOML (`[latency]` section)
//!
//! ```toml
//! [latency]
//! enabled = true
//! list_all = 800      # milliseconds
//! like = 300
//! ```

use photofeed_application::SimulatedLatency;
use photofeed_domain::{ConfigIssue, ConfigIssueCode, Severity};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Anything above this is reported as a warning.
const EXCESSIVE_LATENCY_MS: u64 = 60_000;

/// Raw latency configuration from TOML, in milliseconds
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLatencyConfig {
    /// Disable to resolve every operation immediately
    pub enabled: bool,
    pub sign_in: u64,
    pub sign_up: u64,
    pub sign_out: u64,
    pub list_all: u64,
    pub list_by_owner: u64,
    pub like: u64,
    pub unlike: u64,
    pub comment: u64,
    pub create: u64,
}

impl Default for FileLatencyConfig {
    fn default() -> Self {
        let defaults = SimulatedLatency::default();
        let ms = |d: Duration| d.as_millis() as u64;
        Self {
            enabled: true,
            sign_in: ms(defaults.sign_in),
            sign_up: ms(defaults.sign_up),
            sign_out: ms(defaults.sign_out),
            list_all: ms(defaults.list_all),
            list_by_owner: ms(defaults.list_by_owner),
            like: ms(defaults.like),
            unlike: ms(defaults.unlike),
            comment: ms(defaults.comment),
            create: ms(defaults.create),
        }
    }
}

impl FileLatencyConfig {
    fn fields(&self) -> [(&'static str, u64); 9] {
        [
            ("sign_in", self.sign_in),
            ("sign_up", self.sign_up),
            ("sign_out", self.sign_out),
            ("list_all", self.list_all),
            ("list_by_owner", self.list_by_owner),
            ("like", self.like),
            ("unlike", self.unlike),
            ("comment", self.comment),
            ("create", self.create),
        ]
    }

    /// Convert to the application's latency parameters.
    pub fn to_latency(&self) -> SimulatedLatency {
        if !self.enabled {
            return SimulatedLatency::none();
        }
        SimulatedLatency {
            sign_in: Duration::from_millis(self.sign_in),
            sign_up: Duration::from_millis(self.sign_up),
            sign_out: Duration::from_millis(self.sign_out),
            list_all: Duration::from_millis(self.list_all),
            list_by_owner: Duration::from_millis(self.list_by_owner),
            like: Duration::from_millis(self.like),
            unlike: Duration::from_millis(self.unlike),
            comment: Duration::from_millis(self.comment),
            create: Duration::from_millis(self.create),
        }
    }

    pub fn validate(&self) -> Vec<ConfigIssue> {
        if !self.enabled {
            return Vec::new();
        }
        self.fields()
            .into_iter()
            .filter(|(_, millis)| *millis > EXCESSIVE_LATENCY_MS)
            .map(|(field, millis)| ConfigIssue {
                severity: Severity::Warning,
                code: ConfigIssueCode::ExcessiveLatency {
                    field: format!("latency.{}", field),
                    millis,
                },
                message: format!(
                    "latency.{}: {} ms is longer than a minute; operations will appear to hang",
                    field, millis
                ),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_round_trips_reference_latency() {
        assert_eq!(
            FileLatencyConfig::default().to_latency(),
            SimulatedLatency::default()
        );
    }

    #[test]
    fn test_disabled_means_no_latency() {
        let config = FileLatencyConfig {
            enabled: false,
            ..Default::default()
        };
        assert_eq!(config.to_latency(), SimulatedLatency::none());
    }

    #[test]
    fn test_excessive_latency_warns() {
        let config = FileLatencyConfig {
            like: 120_000,
            ..Default::default()
        };
        let issues = config.validate();
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].severity, Severity::Warning);
        assert_eq!(
            issues[0].code,
            ConfigIssueCode::ExcessiveLatency {
                field: "latency.like".to_string(),
                millis: 120_000
            }
        );
    }
}
