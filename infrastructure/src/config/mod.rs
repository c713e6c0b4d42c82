//! Configuration file loading for photofeed
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `--config <path>` specified file
//! 2. `PHOTOFEED_*` environment variables (e.g. `PHOTOFEED_FEED__LIKED_FLAG`)
//! 3. Project root: `./photofeed.toml` or `./.photofeed.toml`
//! 4. Global: `$XDG_CONFIG_HOME/photofeed/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    FileConfig, FileFeedConfig, FileLatencyConfig, FileLoggingConfig, FileOutputConfig,
};
pub use loader::ConfigLoader;
