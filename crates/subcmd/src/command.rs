//! Command declarations.
//!
//! A [`Command`] is either a leaf (it has a handler) or a group (it has
//! subcommands). The `leaf*` and [`Command::group`] constructors always
//! produce one of the two; the free-form [`Command::new`] builder leaves
//! the choice to the caller and the registry rejects declarations that end
//! up with neither or both.
//!
//! ```rust
//! use subcmd::Command;
//!
//! let commands = vec![
//!     Command::group("remote", "manage remotes", vec![
//!         Command::leaf("add", "add a remote", |args: &[String]| println!("add {args:?}")),
//!         Command::leaf("remove", "remove a remote", |_: &[String]| {}),
//!     ]),
//!     Command::new("status", "show status").handler(|_: &[String]| {}),
//! ];
//! assert!(commands[0].is_group());
//! assert!(commands[1].is_leaf());
//! ```

use std::fmt;

use crate::handler::{
    ArgsFnHandler, CommandContext, FnHandler, Handler, IntoHandlerResult,
};

/// A named, described unit of dispatch.
pub struct Command {
    pub(crate) name: String,
    pub(crate) description: String,
    pub(crate) handler: Option<Box<dyn Handler>>,
    pub(crate) subcommands: Option<Vec<Command>>,
}

impl Command {
    /// Starts a declaration with no handler and no subcommands.
    ///
    /// Finish it with [`handler`](Self::handler) or
    /// [`subcommands`](Self::subcommands).
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            handler: None,
            subcommands: None,
        }
    }

    /// A leaf whose handler only needs its arguments.
    pub fn leaf<F, R>(name: impl Into<String>, description: impl Into<String>, f: F) -> Self
    where
        F: FnMut(&[String]) -> R + 'static,
        R: IntoHandlerResult + 'static,
    {
        Self::leaf_handler(name, description, ArgsFnHandler::new(f))
    }

    /// A leaf whose handler also receives the [`CommandContext`].
    pub fn leaf_with_context<F, R>(
        name: impl Into<String>,
        description: impl Into<String>,
        f: F,
    ) -> Self
    where
        F: FnMut(&[String], &CommandContext) -> R + 'static,
        R: IntoHandlerResult + 'static,
    {
        Self::leaf_handler(name, description, FnHandler::new(f))
    }

    /// A leaf backed by any [`Handler`] implementation.
    pub fn leaf_handler<H>(
        name: impl Into<String>,
        description: impl Into<String>,
        handler: H,
    ) -> Self
    where
        H: Handler + 'static,
    {
        let mut cmd = Self::new(name, description);
        cmd.handler = Some(Box::new(handler));
        cmd
    }

    /// A group dispatching one level further into `subcommands`.
    pub fn group(
        name: impl Into<String>,
        description: impl Into<String>,
        subcommands: Vec<Command>,
    ) -> Self {
        Self::new(name, description).subcommands(subcommands)
    }

    /// Sets the handler from an arguments-only closure.
    pub fn handler<F, R>(self, f: F) -> Self
    where
        F: FnMut(&[String]) -> R + 'static,
        R: IntoHandlerResult + 'static,
    {
        self.boxed_handler(Box::new(ArgsFnHandler::new(f)))
    }

    /// Sets an already boxed handler.
    pub fn boxed_handler(mut self, handler: Box<dyn Handler>) -> Self {
        self.handler = Some(handler);
        self
    }

    /// Sets the nested command list, replacing any previous one.
    pub fn subcommands(mut self, subcommands: Vec<Command>) -> Self {
        self.subcommands = Some(subcommands);
        self
    }

    /// Appends one nested command.
    pub fn subcommand(mut self, subcommand: Command) -> Self {
        self.subcommands.get_or_insert_with(Vec::new).push(subcommand);
        self
    }

    /// The command's one-word name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The short description shown in usage listings.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// True if this declaration has a handler and no subcommands.
    pub fn is_leaf(&self) -> bool {
        self.handler.is_some() && self.subcommands.is_none()
    }

    /// True if this declaration has subcommands and no handler.
    pub fn is_group(&self) -> bool {
        self.subcommands.is_some() && self.handler.is_none()
    }
}

impl fmt::Debug for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Command")
            .field("name", &self.name)
            .field("description", &self.description)
            .field("handler", &self.handler.is_some())
            .field("subcommands", &self.subcommands)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_leaf_constructor() {
        let cmd = Command::leaf("foo", "perform foo tasks", |_: &[String]| {});
        assert_eq!(cmd.name(), "foo");
        assert_eq!(cmd.description(), "perform foo tasks");
        assert!(cmd.is_leaf());
        assert!(!cmd.is_group());
    }

    #[test]
    fn test_group_constructor() {
        let cmd = Command::group(
            "foo",
            "",
            vec![Command::leaf("bar", "", |_: &[String]| {})],
        );
        assert!(cmd.is_group());
        assert!(!cmd.is_leaf());
    }

    #[test]
    fn test_empty_group_is_still_a_group() {
        let cmd = Command::group("foo", "", vec![]);
        assert!(cmd.is_group());
    }

    #[test]
    fn test_new_is_neither() {
        let cmd = Command::new("foo", "");
        assert!(!cmd.is_leaf());
        assert!(!cmd.is_group());
    }

    #[test]
    fn test_both_is_neither_kind() {
        let cmd = Command::new("foo", "")
            .handler(|_: &[String]| {})
            .subcommand(Command::leaf("bar", "", |_: &[String]| {}));
        assert!(!cmd.is_leaf());
        assert!(!cmd.is_group());
    }

    #[test]
    fn test_subcommand_appends_in_order() {
        let cmd = Command::new("foo", "")
            .subcommand(Command::leaf("b", "", |_: &[String]| {}))
            .subcommand(Command::leaf("a", "", |_: &[String]| {}));
        let names: Vec<_> = cmd
            .subcommands
            .as_ref()
            .map(|subs| subs.iter().map(Command::name).collect())
            .unwrap_or_default();
        assert_eq!(names, vec!["b", "a"]);
    }

    #[test]
    fn test_debug_hides_handler() {
        let cmd = Command::leaf("foo", "", |_: &[String]| {});
        let debug = format!("{:?}", cmd);
        assert!(debug.contains("\"foo\""));
        assert!(debug.contains("handler: true"));
    }
}
