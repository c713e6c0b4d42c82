//! Interactive shell module
//!
//! Provides a readline-based shell over one process-lifetime session.

mod command;
mod repl;

pub use command::ShellCommand;
pub use repl::FeedShell;
