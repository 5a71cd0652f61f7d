//! Leaf handlers that parse their arguments with clap.
//!
//! Dispatch only routes on command names; a leaf's own flags are its
//! business. [`ClapHandler`] pairs a `clap::Command` describing those
//! flags with a closure receiving the parsed [`ArgMatches`].
//!
//! ```rust
//! use clap::Arg;
//! use subcmd::{Command, Dispatcher, ErrorHandling};
//!
//! let xyz = Command::parsed(
//!     "xyz",
//!     "do some other thing",
//!     clap::Command::new("xyz").arg(Arg::new("n").short('n').default_value("10")),
//!     |m, _ctx| {
//!         assert_eq!(m.get_one::<String>("n").map(String::as_str), Some("3"));
//!     },
//! );
//!
//! Dispatcher::new("prog", vec![xyz], ErrorHandling::ContinueOnError)
//!     .run(["xyz", "-n", "3"])
//!     .unwrap();
//! ```
//!
//! A parse failure, including `-h`/`--help` aimed at the leaf, is returned
//! as the handler's error. Hosts typically downcast it and call
//! [`clap::Error::exit`].

use clap::ArgMatches;
use std::fmt;

use crate::command::Command;
use crate::handler::{CommandContext, Handler, HandlerResult, IntoHandlerResult};

/// A [`Handler`] that parses its arguments with a `clap::Command`.
///
/// The clap command's binary name is set to the dispatch path on every
/// call, so its usage and errors read `prog group leaf [OPTIONS]`.
pub struct ClapHandler<F, R = HandlerResult> {
    command: clap::Command,
    f: F,
    _phantom: std::marker::PhantomData<fn() -> R>,
}

impl<F, R> ClapHandler<F, R>
where
    F: FnMut(&ArgMatches, &CommandContext) -> R,
    R: IntoHandlerResult,
{
    /// Creates a handler parsing with `command` and running `f`.
    pub fn new(command: clap::Command, f: F) -> Self {
        Self {
            command,
            f,
            _phantom: std::marker::PhantomData,
        }
    }
}

impl<F, R> Handler for ClapHandler<F, R>
where
    F: FnMut(&ArgMatches, &CommandContext) -> R,
    R: IntoHandlerResult,
{
    fn handle(&mut self, args: &[String], ctx: &CommandContext) -> HandlerResult {
        let bin_name = ctx.display_path();
        let argv = std::iter::once(bin_name.clone()).chain(args.iter().cloned());

        let matches = self
            .command
            .clone()
            .bin_name(bin_name)
            .try_get_matches_from(argv)?;

        (self.f)(&matches, ctx).into_handler_result()
    }
}

impl<F, R> fmt::Debug for ClapHandler<F, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClapHandler")
            .field("command", &self.command.get_name())
            .finish_non_exhaustive()
    }
}

impl Command {
    /// A leaf whose arguments are parsed by `command` before `f` runs.
    pub fn parsed<F, R>(
        name: impl Into<String>,
        description: impl Into<String>,
        command: clap::Command,
        f: F,
    ) -> Self
    where
        F: FnMut(&ArgMatches, &CommandContext) -> R + 'static,
        R: IntoHandlerResult + 'static,
    {
        Self::leaf_handler(name, description, ClapHandler::new(command, f))
    }
}
