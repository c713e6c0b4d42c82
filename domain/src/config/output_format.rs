//! Output format value object

use serde::{Deserialize, Serialize};

/// How feed entities are rendered on the console
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Posts with their full comment threads
    Full,
    /// One block per post with a comment count (default)
    #[default]
    Compact,
    /// JSON output
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_compact() {
        assert_eq!(OutputFormat::default(), OutputFormat::Compact);
    }

    #[test]
    fn test_serialize_lowercase() {
        let json = serde_json::to_string(&OutputFormat::Full).unwrap();
        assert_eq!(json, "\"full\"");
    }

    #[test]
    fn test_deserialize_lowercase() {
        let format: OutputFormat = serde_json::from_str("\"json\"").unwrap();
        assert_eq!(format, OutputFormat::Json);
    }
}
