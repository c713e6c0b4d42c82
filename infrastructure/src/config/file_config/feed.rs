//! Feed configuration from TOML (`[feed]` section)

use photofeed_domain::{ConfigIssue, ConfigIssueCode, LikedFlagPolicy, Severity};
use serde::{Deserialize, Serialize};

/// Raw feed configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileFeedConfig {
    /// How the `liked` flag is derived: "tracked" or "random"
    pub liked_flag: String,
}

impl Default for FileFeedConfig {
    fn default() -> Self {
        Self {
            liked_flag: LikedFlagPolicy::default().as_str().to_string(),
        }
    }
}

impl FileFeedConfig {
    /// Parse the liked-flag policy, falling back to the default on error.
    pub fn parse_liked_flag(&self) -> (LikedFlagPolicy, Vec<ConfigIssue>) {
        match self.liked_flag.parse() {
            Ok(policy) => (policy, Vec::new()),
            Err(_) => (
                LikedFlagPolicy::default(),
                vec![ConfigIssue {
                    severity: Severity::Warning,
                    code: ConfigIssueCode::InvalidEnumValue {
                        field: "feed.liked_flag".to_string(),
                        value: self.liked_flag.clone(),
                        valid_values: vec!["tracked".to_string(), "random".to_string()],
                    },
                    message: format!(
                        "feed.liked_flag: unknown value '{}', falling back to '{}'",
                        self.liked_flag,
                        LikedFlagPolicy::default()
                    ),
                }],
            ),
        }
    }
}
