//! Usage listings.
//!
//! When dispatch stops without reaching a leaf, the dispatcher describes
//! the level it stopped at as a [`Usage`] value and hands it to a
//! [`UsageFn`]. The default, [`default_usage`], prints:
//!
//! ```text
//! Usage:
//!
//!   prog foo COMMAND
//!
//! Possible commands are:
//!
//!   bar    something about bar
//!   baz    something about baz
//!
//! Run 'prog foo COMMAND -h' to see more information about a command.
//! ```
//!
//! `Usage` is serializable, so a replacement renderer can just as well
//! emit JSON.

use serde::Serialize;
use std::io::{self, Write};
use std::rc::Rc;
use unicode_width::UnicodeWidthStr;

use crate::registry::Registry;

/// Spaces between the widest name and the description column.
pub const COLUMN_GAP: usize = 4;

/// Left margin of each command line.
const INDENT: &str = "  ";

/// A usage renderer.
///
/// Receives the level dispatch stopped at and the diagnostic stream.
pub type UsageFn = Rc<dyn Fn(&Usage<'_>, &mut dyn Write) -> io::Result<()>>;

/// The level dispatch stopped at.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Usage<'a> {
    /// Program name and matched names, space separated.
    pub path: String,
    /// Sibling commands at this level, in declaration order.
    pub commands: Vec<UsageEntry<'a>>,
}

/// One row of the command listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UsageEntry<'a> {
    /// The command's name.
    pub name: &'a str,
    /// One-line description; may be empty.
    pub description: &'a str,
    /// True if the command dispatches further.
    pub group: bool,
}

impl<'a> Usage<'a> {
    /// Describes `registry` as seen from `path`.
    pub fn new(path: impl Into<String>, registry: &'a Registry) -> Self {
        Self {
            path: path.into(),
            commands: registry
                .iter()
                .map(|entry| UsageEntry {
                    name: entry.name(),
                    description: entry.description(),
                    group: entry.is_group(),
                })
                .collect(),
        }
    }
}

/// Wraps a closure as a [`UsageFn`].
pub fn usage_fn<F>(f: F) -> UsageFn
where
    F: Fn(&Usage<'_>, &mut dyn Write) -> io::Result<()> + 'static,
{
    Rc::new(f)
}

/// The stock renderer: header, aligned command list, hint line.
pub fn default_usage(usage: &Usage<'_>, out: &mut dyn Write) -> io::Result<()> {
    write!(
        out,
        "Usage:\n\n  {} COMMAND\n\nPossible commands are:\n\n",
        usage.path
    )?;
    write_command_list(&usage.commands, out)?;
    writeln!(
        out,
        "\nRun '{} COMMAND -h' to see more information about a command.",
        usage.path
    )
}

/// Writes one `  name<padding>description` line per entry.
///
/// Descriptions start [`COLUMN_GAP`] columns past the widest name in
/// `entries`. Width is measured in terminal columns, so wide characters
/// count double.
pub fn write_command_list(entries: &[UsageEntry<'_>], out: &mut dyn Write) -> io::Result<()> {
    let width = entries
        .iter()
        .map(|e| e.name.width())
        .max()
        .unwrap_or(0);

    for entry in entries {
        if entry.description.is_empty() {
            writeln!(out, "{}{}", INDENT, entry.name)?;
        } else {
            let pad = width + COLUMN_GAP - entry.name.width();
            writeln!(
                out,
                "{}{}{}{}",
                INDENT,
                entry.name,
                " ".repeat(pad),
                entry.description
            )?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::Command;

    fn entry<'a>(name: &'a str, description: &'a str) -> UsageEntry<'a> {
        UsageEntry {
            name,
            description,
            group: false,
        }
    }

    fn render_list(entries: &[UsageEntry<'_>]) -> String {
        let mut buf = Vec::new();
        write_command_list(entries, &mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_default_usage_exact() {
        let registry = Registry::try_new(vec![
            Command::leaf("bar", "something about bar", |_: &[String]| {}),
            Command::leaf("baz", "something about baz", |_: &[String]| {}),
        ])
        .unwrap();
        let usage = Usage::new("prog foo", &registry);

        let mut buf = Vec::new();
        default_usage(&usage, &mut buf).unwrap();

        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "Usage:\n\n  prog foo COMMAND\n\nPossible commands are:\n\n\
             \x20 bar    something about bar\n\
             \x20 baz    something about baz\n\
             \nRun 'prog foo COMMAND -h' to see more information about a command.\n"
        );
    }

    #[test]
    fn test_columns_align() {
        let output = render_list(&[
            entry("abc", "three"),
            entry("abcdefghij", "ten"),
            entry("a", "one"),
        ]);

        let columns: Vec<usize> = output
            .lines()
            .map(|line| line.rfind(' ').unwrap() + 1)
            .collect();
        assert_eq!(columns, vec![16, 16, 16]);
        assert!(output.lines().all(|l| l.starts_with("  ")));
    }

    #[test]
    fn test_widest_name_sets_width() {
        let output = render_list(&[entry("a", "x"), entry("bb", "y")]);
        assert_eq!(output, "  a     x\n  bb    y\n");
    }

    #[test]
    fn test_width_counts_display_columns() {
        let output = render_list(&[entry("né", "accent"), entry("ab", "plain")]);
        assert_eq!(output, "  né    accent\n  ab    plain\n");
    }

    #[test]
    fn test_wide_names_share_the_column() {
        let output = render_list(&[entry("日本", "wide"), entry("abcd", "ascii")]);
        assert_eq!(output, "  日本    wide\n  abcd    ascii\n");

        let starts: Vec<usize> = output
            .lines()
            .map(|line| {
                let name_end = line.rfind(' ').unwrap() + 1;
                line[..name_end].width()
            })
            .collect();
        assert_eq!(starts, vec![10, 10]);
    }

    #[test]
    fn test_empty_description_has_no_trailing_space() {
        let output = render_list(&[entry("status", ""), entry("log", "show log")]);
        assert_eq!(output, "  status\n  log       show log\n");
    }

    #[test]
    fn test_empty_list() {
        assert_eq!(render_list(&[]), "");
    }

    #[test]
    fn test_usage_marks_groups() {
        let registry = Registry::try_new(vec![
            Command::group(
                "remote",
                "manage remotes",
                vec![Command::leaf("add", "", |_: &[String]| {})],
            ),
            Command::leaf("status", "", |_: &[String]| {}),
        ])
        .unwrap();
        let usage = Usage::new("git", &registry);
        assert!(usage.commands[0].group);
        assert!(!usage.commands[1].group);
    }

    #[test]
    fn test_usage_serializes() {
        let registry = Registry::try_new(vec![Command::leaf(
            "xyz",
            "do some other thing",
            |_: &[String]| {},
        )])
        .unwrap();
        let usage = Usage::new("prog", &registry);
        let json = serde_json::to_value(&usage).unwrap();
        assert_eq!(json["path"], "prog");
        assert_eq!(json["commands"][0]["name"], "xyz");
        assert_eq!(json["commands"][0]["description"], "do some other thing");
        assert_eq!(json["commands"][0]["group"], false);
    }

    #[test]
    fn test_custom_usage_fn() {
        let render = usage_fn(|usage, out| {
            writeln!(out, "{}: {} commands", usage.path, usage.commands.len())
        });
        let registry = Registry::try_new(vec![]).unwrap();
        let mut buf = Vec::new();
        render(&Usage::new("prog", &registry), &mut buf).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "prog: 0 commands\n");
    }
}
