//! Validated, name-indexed command tables.
//!
//! [`Registry::try_new`] turns a list of [`Command`] declarations into a
//! tree of registries, rejecting authoring mistakes up front. Each level
//! keeps its commands in declaration order for display and a name index
//! for lookup.
//!
//! [`Registry::resolve`] walks that tree for a given argument vector and
//! reports where it stopped, without invoking anything.

use std::collections::HashMap;

use crate::command::Command;
use crate::error::{ConfigError, UsageError};
use crate::handler::Handler;

/// Arguments that request help at any dispatch level.
pub const HELP_TOKENS: [&str; 4] = ["help", "-h", "-help", "--help"];

/// Returns true if `arg` is one of [`HELP_TOKENS`].
pub fn is_help_token(arg: &str) -> bool {
    HELP_TOKENS.contains(&arg)
}

/// What a validated command does when matched.
pub enum Target {
    /// Terminal command.
    Leaf(Box<dyn Handler>),
    /// One more level of dispatch.
    Group(Registry),
}

/// A validated command.
pub struct Entry {
    name: String,
    description: String,
    target: Target,
}

impl Entry {
    /// The command's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The command's description.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Leaf handler or nested registry.
    pub fn target(&self) -> &Target {
        &self.target
    }

    /// True for group entries.
    pub fn is_group(&self) -> bool {
        matches!(self.target, Target::Group(_))
    }
}

/// An ordered list of sibling commands with a name index.
#[derive(Default)]
pub struct Registry {
    entries: Vec<Entry>,
    index: HashMap<String, usize>,
}

/// Where [`Registry::resolve`] stopped.
pub enum Resolution<'r, 'a> {
    /// A leaf matched.
    Leaf {
        /// The leaf's handler.
        handler: &'r mut dyn Handler,
        /// Names matched from the root to the leaf, inclusive.
        path: Vec<String>,
        /// Arguments after the leaf's name.
        args: &'a [String],
    },
    /// No leaf matched.
    Usage {
        /// Why dispatch stopped.
        error: UsageError,
        /// The registry at the level where it stopped.
        registry: &'r Registry,
        /// Names matched before stopping.
        path: Vec<String>,
    },
}

impl Registry {
    /// Validates `commands`, recursively, and builds the index.
    ///
    /// Checks, in order for each command: non-empty name, not a help token,
    /// not a duplicate of an earlier sibling, exactly one of handler and
    /// subcommands.
    pub fn try_new(commands: Vec<Command>) -> Result<Self, ConfigError> {
        Self::build(commands, "")
    }

    fn build(commands: Vec<Command>, parent: &str) -> Result<Self, ConfigError> {
        let mut registry = Registry {
            entries: Vec::with_capacity(commands.len()),
            index: HashMap::with_capacity(commands.len()),
        };

        for cmd in commands {
            let path = qualified(parent, &cmd.name);

            if cmd.name.is_empty() {
                return Err(ConfigError::EmptyName {
                    parent: parent.to_string(),
                });
            }
            if is_help_token(&cmd.name) {
                return Err(ConfigError::ReservedName(path));
            }
            if registry.index.contains_key(&cmd.name) {
                return Err(ConfigError::DuplicateName(path));
            }

            let target = match (cmd.handler, cmd.subcommands) {
                (Some(handler), None) => Target::Leaf(handler),
                (None, Some(subcommands)) => Target::Group(Self::build(subcommands, &path)?),
                (None, None) => return Err(ConfigError::MissingTarget(path)),
                (Some(_), Some(_)) => return Err(ConfigError::ConflictingTarget(path)),
            };

            registry
                .index
                .insert(cmd.name.clone(), registry.entries.len());
            registry.entries.push(Entry {
                name: cmd.name,
                description: cmd.description,
                target,
            });
        }

        Ok(registry)
    }

    /// Looks up a command by exact name.
    pub fn get(&self, name: &str) -> Option<&Entry> {
        self.index.get(name).map(|&i| &self.entries[i])
    }

    /// Commands in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &Entry> {
        self.entries.iter()
    }

    /// Number of commands at this level.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if this level has no commands.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Resolves `args` against this registry and its groups.
    ///
    /// `path` holds the names already matched above this level; it is
    /// extended by every group and leaf name consumed here.
    pub fn resolve<'r, 'a>(
        &'r mut self,
        mut path: Vec<String>,
        args: &'a [String],
    ) -> Resolution<'r, 'a> {
        let Some((first, rest)) = args.split_first() else {
            return Resolution::Usage {
                error: UsageError::NoCommand,
                registry: self,
                path,
            };
        };

        if is_help_token(first) {
            return Resolution::Usage {
                error: UsageError::HelpRequested,
                registry: self,
                path,
            };
        }

        let Some(&i) = self.index.get(first.as_str()) else {
            return Resolution::Usage {
                error: UsageError::UnknownCommand(first.clone()),
                registry: self,
                path,
            };
        };

        log::trace!("matched {first:?} at depth {}", path.len());
        path.push(first.clone());

        match &mut self.entries[i].target {
            Target::Leaf(handler) => Resolution::Leaf {
                handler: handler.as_mut(),
                path,
                args: rest,
            },
            Target::Group(registry) => registry.resolve(path, rest),
        }
    }
}

fn qualified(parent: &str, name: &str) -> String {
    if parent.is_empty() {
        name.to_string()
    } else {
        format!("{}.{}", parent, name)
    }
}
