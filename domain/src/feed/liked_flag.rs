//! Liked-flag policy value object

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How the per-viewer `liked` flag on a listed post is derived
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LikedFlagPolicy {
    /// Derived from the set of posts the signed-in viewer has liked
    #[default]
    Tracked,
    /// A coin flip per post on every full-feed read; other reads return
    /// the flag left by the last like/unlike
    Random,
}

impl LikedFlagPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            LikedFlagPolicy::Tracked => "tracked",
            LikedFlagPolicy::Random => "random",
        }
    }
}

impl fmt::Display for LikedFlagPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LikedFlagPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "tracked" => Ok(LikedFlagPolicy::Tracked),
            "random" => Ok(LikedFlagPolicy::Random),
            other => Err(format!("unknown liked flag policy: {}", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_tracked() {
        assert_eq!(LikedFlagPolicy::default(), LikedFlagPolicy::Tracked);
    }

    #[test]
    fn test_parse_case_insensitive() {
        assert_eq!("Random".parse::<LikedFlagPolicy>(), Ok(LikedFlagPolicy::Random));
        assert!("sometimes".parse::<LikedFlagPolicy>().is_err());
    }
}
