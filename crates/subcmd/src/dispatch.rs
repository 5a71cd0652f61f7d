//! The dispatcher.
//!
//! A [`Dispatcher`] binds a validated command tree to a program name and
//! an [`ErrorHandling`] policy, then resolves one argument vector:
//!
//! ```text
//! args
//!   → help token?            → usage (help)
//!   → empty?                 → usage (no command)
//!   → group name?            → same steps, one level down
//!   → leaf name?             → handler(rest)
//!   → anything else          → usage (unknown command)
//! ```
//!
//! What "usage" means is up to the policy: return the [`UsageError`](crate::UsageError),
//! print the listing and exit, or panic.

use std::fmt;
use std::io::{self, Write};
use std::path::Path;
use std::rc::Rc;

use crate::command::Command;
use crate::error::{ConfigError, DispatchError};
use crate::handler::{display_path, CommandContext};
use crate::registry::{Registry, Resolution};
use crate::usage::{default_usage, Usage, UsageFn};

/// How [`Dispatcher::run`] reacts to a [`UsageError`](crate::UsageError).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorHandling {
    /// Print nothing and return the error.
    ContinueOnError,
    /// Print usage and exit: status 0 for help, 1 otherwise.
    #[default]
    ExitOnNonZero,
    /// Panic with the error's message.
    PanicOnInvalid,
}

/// Process termination hook. Defaults to [`std::process::exit`].
pub type ExitFn = fn(i32) -> !;

/// Resolves an argument vector against a command tree.
///
/// Built once per invocation and consumed by [`run`](Self::run).
///
/// ```rust
/// use subcmd::{Command, Dispatcher, ErrorHandling};
///
/// let commands = vec![Command::group("foo", "perform foo tasks", vec![
///     Command::leaf("bar", "something about bar", |args: &[String]| {
///         assert_eq!(args, ["-a"]);
///     }),
/// ])];
///
/// Dispatcher::new("prog", commands, ErrorHandling::ContinueOnError)
///     .run(["foo", "bar", "-a"])
///     .unwrap();
/// ```
pub struct Dispatcher {
    program: String,
    registry: Registry,
    error_handling: ErrorHandling,
    usage: UsageFn,
    diagnostics: Box<dyn Write>,
    exit: ExitFn,
}

impl Dispatcher {
    /// Builds a dispatcher, panicking if `commands` is malformed.
    ///
    /// Duplicate sibling names, names equal to a help token, and commands
    /// without exactly one of handler and subcommands are authoring bugs
    /// and abort regardless of `error_handling`. Use
    /// [`try_new`](Self::try_new) to get the [`ConfigError`] instead.
    pub fn new(
        program: impl Into<String>,
        commands: Vec<Command>,
        error_handling: ErrorHandling,
    ) -> Self {
        match Self::try_new(program, commands, error_handling) {
            Ok(dispatcher) => dispatcher,
            Err(err) => panic!("subcmd: {err}"),
        }
    }

    /// Builds a dispatcher, returning the first authoring error found.
    pub fn try_new(
        program: impl Into<String>,
        commands: Vec<Command>,
        error_handling: ErrorHandling,
    ) -> Result<Self, ConfigError> {
        Ok(Self {
            program: program.into(),
            registry: Registry::try_new(commands)?,
            error_handling,
            usage: Rc::new(default_usage),
            diagnostics: Box::new(io::stderr()),
            exit: std::process::exit,
        })
    }

    /// Replaces the usage renderer.
    ///
    /// Only the rendered text changes; exit statuses and returned errors
    /// stay the same.
    pub fn usage<F>(mut self, f: F) -> Self
    where
        F: Fn(&Usage<'_>, &mut dyn Write) -> io::Result<()> + 'static,
    {
        self.usage = Rc::new(f);
        self
    }

    /// Replaces the diagnostic stream (stderr by default).
    pub fn diagnostics<W: Write + 'static>(mut self, out: W) -> Self {
        self.diagnostics = Box::new(out);
        self
    }

    /// Replaces the function used to terminate the process.
    pub fn exit_with(mut self, exit: ExitFn) -> Self {
        self.exit = exit;
        self
    }

    /// The program display name.
    pub fn program(&self) -> &str {
        &self.program
    }

    /// The root of the command tree.
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// The configured policy.
    pub fn error_handling(&self) -> ErrorHandling {
        self.error_handling
    }

    /// Dispatches `args` (without the program name).
    ///
    /// On a leaf match the handler runs with the arguments after its name
    /// and its error, if any, comes back as [`DispatchError::Handler`].
    /// Otherwise the [`ErrorHandling`] policy decides.
    pub fn run<I, S>(mut self, args: I) -> Result<(), DispatchError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let args: Vec<String> = args.into_iter().map(Into::into).collect();
        log::debug!("dispatching {} with {:?}", self.program, args);

        let (error, usage) = match self.registry.resolve(Vec::new(), &args) {
            Resolution::Leaf {
                handler,
                path,
                args,
            } => {
                let ctx = CommandContext::new(self.program.clone(), path);
                log::debug!("running {:?} with {:?}", ctx.display_path(), args);
                return handler.handle(args, &ctx).map_err(DispatchError::Handler);
            }
            Resolution::Usage {
                error,
                registry,
                path,
            } => {
                let usage = Usage::new(display_path(&self.program, &path), registry);
                (error, usage)
            }
        };

        log::debug!("usage at {:?}: {}", usage.path, error);

        match self.error_handling {
            ErrorHandling::ContinueOnError => Err(error.into()),
            ErrorHandling::PanicOnInvalid => panic!("subcmd: {error}"),
            ErrorHandling::ExitOnNonZero => {
                if let Err(err) = render(&self.usage, &usage, self.diagnostics.as_mut()) {
                    log::warn!("could not write usage: {err}");
                }
                (self.exit)(error.exit_code())
            }
        }
    }
}

fn render(usage_fn: &UsageFn, usage: &Usage<'_>, out: &mut dyn Write) -> io::Result<()> {
    usage_fn(usage, out)?;
    out.flush()
}

impl fmt::Debug for Dispatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Dispatcher")
            .field("program", &self.program)
            .field("commands", &self.registry.len())
            .field("error_handling", &self.error_handling)
            .finish_non_exhaustive()
    }
}

/// Runs `commands` against the process arguments.
///
/// The program name is the file name of `argv[0]` and usage conditions
/// print the listing to stderr and exit. Only a failing handler returns.
pub fn run(commands: Vec<Command>) -> Result<(), DispatchError> {
    let mut argv = std::env::args();
    let program = argv
        .next()
        .as_deref()
        .map(program_name)
        .unwrap_or_default();

    Dispatcher::new(program, commands, ErrorHandling::ExitOnNonZero).run(argv)
}

/// File name component of `argv0`, or `argv0` itself if it has none.
pub fn program_name(argv0: &str) -> String {
    Path::new(argv0)
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| argv0.to_string())
}
