//! Verb-style sub-command dispatch.
//!
//! `subcmd` routes `program COMMAND [SUBCOMMAND...] [args...]` to the
//! matching handler. Commands are declared as a tree: leaves carry a
//! handler, groups carry more commands. Everything after the matched leaf
//! is passed to its handler untouched; parsing those arguments is the
//! handler's job.
//!
//! # Features
//!
//! - **Validated tables**: duplicate names, help tokens used as names and
//!   malformed declarations are caught before any argument is looked at
//! - **Nested groups**: any depth, each level with its own usage listing
//! - **Error policies**: return, print-and-exit or panic on usage errors
//! - **Pluggable usage**: swap the renderer per dispatcher, no globals
//! - **Clap leaves**: [`ClapHandler`] parses a leaf's flags with clap
//!
//! # Example
//!
//! ```rust,no_run
//! use subcmd::{Command, Dispatcher, ErrorHandling};
//!
//! let commands = vec![
//!     Command::group("foo", "perform foo tasks", vec![
//!         Command::leaf("bar", "something about bar", |args: &[String]| {
//!             println!("bar {:?}", args);
//!         }),
//!         Command::leaf("baz", "something about baz", |args: &[String]| {
//!             println!("baz {:?}", args);
//!         }),
//!     ]),
//!     Command::leaf("xyz", "do some other thing", |_: &[String]| {}),
//! ];
//!
//! // `prog foo` with no further argument prints:
//! //
//! //   Usage:
//! //
//! //     prog foo COMMAND
//! //
//! //   Possible commands are:
//! //
//! //     bar    something about bar
//! //     baz    something about baz
//! //
//! //   Run 'prog foo COMMAND -h' to see more information about a command.
//! //
//! // and exits with status 1.
//! Dispatcher::new("prog", commands, ErrorHandling::ExitOnNonZero)
//!     .run(std::env::args().skip(1))
//!     .unwrap();
//! ```
//!
//! # Outcomes
//!
//! | Condition        | ContinueOnError      | ExitOnNonZero        | PanicOnInvalid |
//! |------------------|----------------------|----------------------|----------------|
//! | no command       | `Err(NoCommand)`     | usage, exit 1        | panic          |
//! | help token first | `Err(HelpRequested)` | usage, exit 0        | panic          |
//! | unknown command  | `Err(UnknownCommand)`| usage, exit 1        | panic          |
//! | leaf match       | handler runs         | handler runs         | handler runs   |
//!
//! Authoring errors ([`ConfigError`]) make [`Dispatcher::new`] panic under
//! every policy.

mod command;
mod dispatch;
mod error;
mod handler;
mod parsed;
mod registry;
mod usage;

pub use command::Command;

pub use dispatch::{program_name, run, Dispatcher, ErrorHandling, ExitFn};

pub use error::{ConfigError, DispatchError, UsageError};

pub use handler::{
    ArgsFnHandler, CommandContext, FnHandler, Handler, HandlerResult, IntoHandlerResult,
};

pub use parsed::ClapHandler;

pub use registry::{is_help_token, Entry, Registry, Resolution, Target, HELP_TOKENS};

pub use usage::{
    default_usage, usage_fn, write_command_list, Usage, UsageEntry, UsageFn, COLUMN_GAP,
};
