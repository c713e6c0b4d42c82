//! Progress notification port
//!
//! Every store operation waits out a simulated round-trip before it
//! resolves. This port lets the presentation layer show a loading state
//! for the duration.

use std::fmt;

/// A store operation as seen by progress observers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    SignIn,
    SignUp,
    SignOut,
    LoadFeed,
    LoadProfile,
    Like,
    Unlike,
    Comment,
    CreatePost,
}

impl Operation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Operation::SignIn => "sign_in",
            Operation::SignUp => "sign_up",
            Operation::SignOut => "sign_out",
            Operation::LoadFeed => "load_feed",
            Operation::LoadProfile => "load_profile",
            Operation::Like => "like",
            Operation::Unlike => "unlike",
            Operation::Comment => "comment",
            Operation::CreatePost => "create_post",
        }
    }

    /// Human-readable label for loading indicators
    pub fn label(&self) -> &'static str {
        match self {
            Operation::SignIn => "Signing in",
            Operation::SignUp => "Creating account",
            Operation::SignOut => "Signing out",
            Operation::LoadFeed => "Loading feed",
            Operation::LoadProfile => "Loading profile",
            Operation::Like => "Liking post",
            Operation::Unlike => "Removing like",
            Operation::Comment => "Posting comment",
            Operation::CreatePost => "Sharing post",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Callback for progress updates during store operations
///
/// Implementations live in the presentation layer.
pub trait ProgressNotifier: Send + Sync {
    /// Called before the operation starts waiting
    fn on_operation_start(&self, operation: Operation);

    /// Called once the operation resolved, successfully or not
    fn on_operation_complete(&self, operation: Operation, success: bool);
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl ProgressNotifier for NoProgress {
    fn on_operation_start(&self, _operation: Operation) {}
    fn on_operation_complete(&self, _operation: Operation, _success: bool) {}
}
