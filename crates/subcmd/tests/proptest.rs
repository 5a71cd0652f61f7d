//! Property-based tests for registration and dispatch.

use proptest::prelude::*;
use std::cell::RefCell;
use std::rc::Rc;
use subcmd::{
    write_command_list, Command, ConfigError, Dispatcher, ErrorHandling, Registry, UsageEntry,
    UsageError, HELP_TOKENS,
};

// ============================================================================
// Test helpers
// ============================================================================

type Calls = Rc<RefCell<Vec<(String, Vec<String>)>>>;

fn noop(name: &str) -> Command {
    Command::leaf(name, "", |_: &[String]| {})
}

fn recorder(calls: &Calls, name: &str) -> Command {
    let calls = calls.clone();
    let label = name.to_string();
    Command::leaf(name, "", move |args: &[String]| {
        calls.borrow_mut().push((label.clone(), args.to_vec()));
    })
}

/// `alpha {one, two}`, `beta {gamma {deep}}`, `solo`.
fn tree(calls: &Calls) -> Vec<Command> {
    vec![
        Command::group(
            "alpha",
            "",
            vec![recorder(calls, "one"), recorder(calls, "two")],
        ),
        Command::group(
            "beta",
            "",
            vec![Command::group("gamma", "", vec![recorder(calls, "deep")])],
        ),
        recorder(calls, "solo"),
    ]
}

// Strategy for distinct, non-reserved command names
fn unique_names() -> impl Strategy<Value = Vec<String>> {
    prop::collection::btree_set("[a-z]{1,8}", 1..8)
        .prop_map(|set| set.into_iter().filter(|n| n != "help").collect::<Vec<_>>())
        .prop_filter("need at least one name", |names| !names.is_empty())
}

// Arguments drawn mostly from names the tree knows about
fn arg_vector() -> impl Strategy<Value = Vec<String>> {
    let token = prop_oneof![
        Just("alpha".to_string()),
        Just("beta".to_string()),
        Just("gamma".to_string()),
        Just("one".to_string()),
        Just("deep".to_string()),
        Just("solo".to_string()),
        Just("help".to_string()),
        Just("-h".to_string()),
        "[a-z-]{0,6}",
    ];
    prop::collection::vec(token, 0..6)
}

#[derive(Debug, PartialEq)]
enum Observed {
    Ran(Vec<(String, Vec<String>)>),
    Usage(UsageError),
}

fn observe(args: &[String]) -> Observed {
    let calls = Calls::default();
    let result = Dispatcher::new("prog", tree(&calls), ErrorHandling::ContinueOnError)
        .run(args.to_vec());
    match result {
        Ok(()) => Observed::Ran(calls.borrow().clone()),
        Err(err) => Observed::Usage(err.as_usage().cloned().unwrap()),
    }
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #[test]
    fn duplicate_sibling_always_rejected(names in unique_names(), pick in any::<prop::sample::Index>()) {
        let dup = names[pick.index(names.len())].clone();
        let mut commands: Vec<Command> = names.iter().map(|n| noop(n)).collect();
        commands.push(noop(&dup));

        let result = Registry::try_new(commands);
        prop_assert_eq!(result.err(), Some(ConfigError::DuplicateName(dup)));
    }

    #[test]
    fn reserved_name_always_rejected(
        names in unique_names(),
        token in prop::sample::select(HELP_TOKENS.to_vec()),
        pos in any::<prop::sample::Index>(),
    ) {
        let mut commands: Vec<Command> = names.iter().map(|n| noop(n)).collect();
        let at = pos.index(commands.len() + 1);
        commands.insert(at, noop(token));

        let result = Registry::try_new(commands);
        prop_assert_eq!(result.err(), Some(ConfigError::ReservedName(token.to_string())));
    }

    #[test]
    fn distinct_names_always_accepted(names in unique_names()) {
        let commands: Vec<Command> = names.iter().map(|n| noop(n)).collect();
        let registry = Registry::try_new(commands).unwrap();
        prop_assert_eq!(registry.len(), names.len());
    }

    #[test]
    fn dispatch_is_deterministic(args in arg_vector()) {
        prop_assert_eq!(observe(&args), observe(&args));
    }

    #[test]
    fn help_first_never_runs_a_handler(
        token in prop::sample::select(HELP_TOKENS.to_vec()),
        rest in arg_vector(),
    ) {
        let mut args = vec![token.to_string()];
        args.extend(rest);
        prop_assert_eq!(observe(&args), Observed::Usage(UsageError::HelpRequested));
    }

    #[test]
    fn leaf_gets_exact_suffix(suffix in prop::collection::vec("[a-z-]{0,6}", 0..5)) {
        let mut args = vec!["beta".to_string(), "gamma".to_string(), "deep".to_string()];
        args.extend(suffix.iter().cloned());
        prop_assert_eq!(observe(&args), Observed::Ran(vec![("deep".to_string(), suffix)]));
    }

    #[test]
    fn descriptions_share_one_column(
        rows in prop::collection::vec(("[a-z]{1,12}", "[a-z]{1,10}"), 1..8),
    ) {
        let entries: Vec<UsageEntry<'_>> = rows
            .iter()
            .map(|(name, description)| UsageEntry { name, description, group: false })
            .collect();
        let mut buf = Vec::new();
        write_command_list(&entries, &mut buf).unwrap();
        let output = String::from_utf8(buf).unwrap();

        let widest = rows.iter().map(|(n, _)| n.len()).max().unwrap();
        let starts: Vec<usize> = output.lines().map(|l| l.rfind(' ').unwrap() + 1).collect();
        prop_assert_eq!(starts.len(), rows.len());
        for start in starts {
            prop_assert_eq!(start, 2 + widest + subcmd::COLUMN_GAP);
        }
    }
}
