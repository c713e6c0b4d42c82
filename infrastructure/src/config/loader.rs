//! Configuration file loader with multi-source merging

use super::file_config::FileConfig;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use std::path::{Path, PathBuf};

const PROJECT_CONFIG_FILES: [&str; 2] = ["photofeed.toml", ".photofeed.toml"];
const ENV_PREFIX: &str = "PHOTOFEED_";

/// Configuration loader that handles file discovery and merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from all sources with proper priority
    pub fn load(config_path: Option<&PathBuf>) -> Result<FileConfig, Box<figment::Error>> {
        Self::load_from(
            Self::global_config_path().as_deref(),
            Self::project_config_path().as_deref(),
            config_path.map(PathBuf::as_path),
        )
    }

    fn load_from(
        global: Option<&Path>,
        project: Option<&Path>,
        explicit: Option<&Path>,
    ) -> Result<FileConfig, Box<figment::Error>> {
        let mut figment = Figment::new().merge(Serialized::defaults(FileConfig::default()));

        if let Some(path) = global
            && path.exists()
        {
            figment = figment.merge(Toml::file(path));
        }

        if let Some(path) = project {
            figment = figment.merge(Toml::file(path));
        }

        figment = figment.merge(Env::prefixed(ENV_PREFIX).split("__"));

        if let Some(path) = explicit {
            figment = figment.merge(Toml::file(path));
        }

        figment.extract().map_err(Box::new)
    }

    /// Load only default configuration (for --no-config)
    pub fn load_defaults() -> FileConfig {
        FileConfig::default()
    }

    /// `$XDG_CONFIG_HOME/photofeed/config.toml`, or the platform equivalent
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("photofeed").join("config.toml"))
    }

    /// Get the project-level config file path (if it exists)
    pub fn project_config_path() -> Option<PathBuf> {
        PROJECT_CONFIG_FILES
            .iter()
            .map(PathBuf::from)
            .find(|path| path.exists())
    }

    /// Print the config file locations being used (for debugging)
    pub fn print_config_sources() {
        println!("Configuration sources (in priority order):");

        if let Some(path) = Self::project_config_path() {
            println!("  [FOUND] Project: {}", path.display());
        } else {
            println!("  [     ] Project: ./photofeed.toml or ./.photofeed.toml");
        }

        if let Some(path) = Self::global_config_path() {
            let marker = if path.exists() { "FOUND" } else { "     " };
            println!("  [{}] Global:  {}", marker, path.display());
        }

        println!("  [     ] Default: built-in defaults");
    }
}
