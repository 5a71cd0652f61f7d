//! Leaf command handlers.
//!
//! A leaf handler is whatever runs once dispatch has consumed the command
//! names: it receives the residual arguments, in order, and is free to
//! parse them however it likes (see [`ClapHandler`](crate::ClapHandler)
//! for a clap-backed one). Dispatch never looks inside those arguments.
//!
//! # Core Types
//!
//! - [`Handler`]: Trait for leaf handlers (`&mut self`)
//! - [`CommandContext`]: Where in the command tree the handler was reached
//! - [`HandlerResult`]: `Result<(), anyhow::Error>`
//! - [`IntoHandlerResult`]: Lets closures return `()` or any `Result<(), E>`
//! - [`FnHandler`] / [`ArgsFnHandler`]: Closure adapters

use std::fmt;

/// Information about the matched command, passed to handlers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandContext {
    /// Program display name, as given to the dispatcher.
    pub program: String,

    /// Names matched from the root down to this leaf (e.g. `["remote", "add"]`).
    pub command_path: Vec<String>,
}

impl CommandContext {
    /// Creates a context for the given program and matched names.
    pub fn new(program: impl Into<String>, command_path: Vec<String>) -> Self {
        Self {
            program: program.into(),
            command_path,
        }
    }

    /// Program name followed by the matched names, space separated.
    ///
    /// `git remote add` for the `add` leaf of the `remote` group of `git`.
    pub fn display_path(&self) -> String {
        display_path(&self.program, &self.command_path)
    }
}

pub(crate) fn display_path(program: &str, path: &[String]) -> String {
    let mut out = String::from(program);
    for name in path {
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(name);
    }
    out
}

/// The result type for leaf handlers.
pub type HandlerResult = Result<(), anyhow::Error>;

/// Types a handler closure may return.
///
/// Plain `()` is the common case for handlers that report their own
/// failures; any `Result<(), E>` with `E: Into<anyhow::Error>` works for
/// handlers that want `?`.
///
/// ```rust
/// use subcmd::{HandlerResult, IntoHandlerResult};
///
/// let unit: HandlerResult = ().into_handler_result();
/// assert!(unit.is_ok());
///
/// let failed: Result<(), std::io::Error> = Err(std::io::ErrorKind::NotFound.into());
/// assert!(failed.into_handler_result().is_err());
/// ```
pub trait IntoHandlerResult {
    /// Convert this value into a [`HandlerResult`].
    fn into_handler_result(self) -> HandlerResult;
}

impl IntoHandlerResult for () {
    fn into_handler_result(self) -> HandlerResult {
        Ok(())
    }
}

impl<E> IntoHandlerResult for Result<(), E>
where
    E: Into<anyhow::Error>,
{
    fn into_handler_result(self) -> HandlerResult {
        self.map_err(Into::into)
    }
}

/// Trait for leaf handlers.
///
/// Handlers take `&mut self`, so a struct handler can keep state between
/// calls without interior mutability.
///
/// # Example
///
/// ```rust
/// use subcmd::{CommandContext, Handler, HandlerResult};
///
/// struct Echo { seen: usize }
///
/// impl Handler for Echo {
///     fn handle(&mut self, args: &[String], _ctx: &CommandContext) -> HandlerResult {
///         self.seen += args.len();
///         println!("{}", args.join(" "));
///         Ok(())
///     }
/// }
/// ```
pub trait Handler {
    /// Run the command with the arguments that follow its name.
    fn handle(&mut self, args: &[String], ctx: &CommandContext) -> HandlerResult;
}

/// Adapts an `FnMut(&[String], &CommandContext)` closure into a [`Handler`].
pub struct FnHandler<F, R = HandlerResult> {
    f: F,
    _phantom: std::marker::PhantomData<fn() -> R>,
}

impl<F, R> FnHandler<F, R>
where
    F: FnMut(&[String], &CommandContext) -> R,
    R: IntoHandlerResult,
{
    /// Creates a new FnHandler wrapping the given closure.
    pub fn new(f: F) -> Self {
        Self {
            f,
            _phantom: std::marker::PhantomData,
        }
    }
}

impl<F, R> Handler for FnHandler<F, R>
where
    F: FnMut(&[String], &CommandContext) -> R,
    R: IntoHandlerResult,
{
    fn handle(&mut self, args: &[String], ctx: &CommandContext) -> HandlerResult {
        (self.f)(args, ctx).into_handler_result()
    }
}

impl<F, R> fmt::Debug for FnHandler<F, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnHandler").finish_non_exhaustive()
    }
}

/// Adapts an `FnMut(&[String])` closure into a [`Handler`].
///
/// The simpler variant of [`FnHandler`] for handlers that only need their
/// arguments. The context is accepted but ignored.
///
/// ```rust
/// use subcmd::{ArgsFnHandler, CommandContext, Handler};
///
/// let mut handler = ArgsFnHandler::new(|args: &[String]| {
///     assert_eq!(args, ["-a"]);
/// });
/// let args = vec!["-a".to_string()];
/// assert!(handler.handle(&args, &CommandContext::default()).is_ok());
/// ```
pub struct ArgsFnHandler<F, R = HandlerResult> {
    f: F,
    _phantom: std::marker::PhantomData<fn() -> R>,
}

impl<F, R> ArgsFnHandler<F, R>
where
    F: FnMut(&[String]) -> R,
    R: IntoHandlerResult,
{
    /// Creates a new ArgsFnHandler wrapping the given closure.
    pub fn new(f: F) -> Self {
        Self {
            f,
            _phantom: std::marker::PhantomData,
        }
    }
}

impl<F, R> Handler for ArgsFnHandler<F, R>
where
    F: FnMut(&[String]) -> R,
    R: IntoHandlerResult,
{
    fn handle(&mut self, args: &[String], _ctx: &CommandContext) -> HandlerResult {
        (self.f)(args).into_handler_result()
    }
}

impl<F, R> fmt::Debug for ArgsFnHandler<F, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ArgsFnHandler").finish_non_exhaustive()
    }
}
