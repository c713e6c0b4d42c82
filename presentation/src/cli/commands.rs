//! CLI command definitions

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Output format for feed rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Posts with their full comment threads
    Full,
    /// One block per post with a comment count
    Compact,
    /// JSON output
    Json,
}

impl From<OutputFormat> for photofeed_domain::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Full => Self::Full,
            OutputFormat::Compact => Self::Compact,
            OutputFormat::Json => Self::Json,
        }
    }
}

/// CLI arguments for photofeed
#[derive(Parser, Debug)]
#[command(name = "photofeed")]
#[command(author, version, about = "Photo feed - share photos, like and comment")]
#[command(long_about = r#"
Photofeed is a small photo-sharing backend with a console front-end.

State lives in memory and is reseeded with two demo accounts on every start:
  john@example.com (johndoe) and jane@example.com (janedoe).
Any password longer than 3 characters signs in.

Configuration files are loaded from (in priority order):
1. --config <path>        Explicit config file
2. PHOTOFEED_* variables  e.g. PHOTOFEED_FEED__LIKED_FLAG=random
3. ./photofeed.toml       Project-level config
4. ~/.config/photofeed/config.toml   Global config

Example:
  photofeed feed
  photofeed --email john@example.com --password secret feed
  photofeed profile janedoe
  photofeed shell
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Sign in with this email before running the command
    #[arg(long, global = true, value_name = "EMAIL", requires = "password")]
    pub email: Option<String>,

    /// Password for --email
    #[arg(long, global = true, value_name = "PASSWORD")]
    pub password: Option<String>,

    /// Output format (overrides the config file)
    #[arg(short, long, global = true, value_enum)]
    pub output: Option<OutputFormat>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Resolve every operation immediately
    #[arg(long, global = true)]
    pub no_latency: bool,

    /// Path to configuration file
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long, global = true)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Print the feed, most recent post first
    Feed,
    /// Show a user's profile and their posts
    Profile {
        /// Username, e.g. janedoe
        handle: String,
    },
    /// Sign in as johndoe, share a post and like it
    Demo,
    /// Start the interactive shell
    Shell,
}
