//! Error types for registration and dispatch.
//!
//! Three families of failure exist, and they travel different roads:
//!
//! - [`ConfigError`]: the command table itself is wrong (duplicate names,
//!   reserved names, malformed declarations). Raised while building the
//!   registry, before any user input is looked at.
//! - [`UsageError`]: the user typed something that did not resolve to a
//!   leaf command. How it surfaces depends on the dispatcher's
//!   [`ErrorHandling`](crate::ErrorHandling).
//! - Handler errors: whatever a leaf handler returns, passed through
//!   [`DispatchError::Handler`] untouched.

use thiserror::Error;

/// An authoring mistake in a command table.
///
/// Every variant carries the dotted path of the offending command
/// (`remote.add`), or the bare name at the top level.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// A command was declared with an empty name.
    #[error("command with empty name under {parent:?}")]
    EmptyName {
        /// Dotted path of the enclosing group ("" at the top level).
        parent: String,
    },

    /// A command reused one of the reserved help tokens as its name.
    #[error("cannot name a command {0:?}")]
    ReservedName(String),

    /// Two siblings share a name.
    #[error("duplicate command {0:?}")]
    DuplicateName(String),

    /// A command has neither a handler nor subcommands.
    #[error("command {0:?} has neither a handler nor subcommands")]
    MissingTarget(String),

    /// A command has both a handler and subcommands.
    #[error("command {0:?} has both a handler and subcommands")]
    ConflictingTarget(String),
}

/// A non-matching dispatch outcome.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UsageError {
    /// No positional argument was left at the current level.
    #[error("no sub-command provided")]
    NoCommand,

    /// The first argument was `help`, `-h`, `-help` or `--help`.
    #[error("help requested")]
    HelpRequested,

    /// The first argument matched no sibling name.
    #[error("no such command {0:?}")]
    UnknownCommand(String),
}

impl UsageError {
    /// Exit status under `ExitOnNonZero`: 0 for help, 1 otherwise.
    pub fn exit_code(&self) -> i32 {
        match self {
            UsageError::HelpRequested => 0,
            UsageError::NoCommand | UsageError::UnknownCommand(_) => 1,
        }
    }

    /// Returns true for the help sentinel.
    pub fn is_help(&self) -> bool {
        matches!(self, UsageError::HelpRequested)
    }
}

/// Error returned by [`Dispatcher::run`](crate::Dispatcher::run).
#[derive(Debug, Error)]
pub enum DispatchError {
    /// The arguments did not resolve to a leaf command.
    #[error(transparent)]
    Usage(#[from] UsageError),

    /// The matched handler failed.
    #[error(transparent)]
    Handler(anyhow::Error),
}

impl DispatchError {
    /// Returns the usage condition, if this is one.
    pub fn as_usage(&self) -> Option<&UsageError> {
        match self {
            DispatchError::Usage(err) => Some(err),
            DispatchError::Handler(_) => None,
        }
    }

    /// Returns true if help was requested.
    pub fn is_help(&self) -> bool {
        self.as_usage().is_some_and(UsageError::is_help)
    }
}
