//! Presentation layer for photofeed
//!
//! This crate contains CLI definitions, console formatters,
//! progress reporters, the scripted demo and the interactive shell.

pub mod cli;
pub mod demo;
pub mod output;
pub mod progress;
pub mod shell;

#[cfg(test)]
pub(crate) mod testing;

// Re-export commonly used types
pub use cli::commands::{Cli, Command, OutputFormat};
pub use demo::{DemoError, DemoReport, run_demo};
pub use output::console::ConsoleFormatter;
pub use progress::reporter::{ProgressReporter, SimpleProgress};
pub use shell::{FeedShell, ShellCommand};
