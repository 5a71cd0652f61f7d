//! subcmd-demo: a two-level command tree.
//!
//! ```text
//! subcmd-demo foo bar [-a]
//! subcmd-demo foo baz [-a]
//! subcmd-demo xyz [-n N]
//! ```
//!
//! Set `RUST_LOG=debug` to watch dispatch decisions.

use clap::{Arg, ArgAction, ArgMatches, Parser};
use subcmd::{Command, CommandContext, DispatchError};

#[derive(Parser, Debug)]
struct BazArgs {
    /// Set option a
    #[arg(short)]
    a: bool,
}

fn commands() -> Vec<Command> {
    vec![
        Command::group(
            "foo",
            "perform foo tasks",
            vec![
                Command::parsed(
                    "bar",
                    "something about bar",
                    clap::Command::new("bar").arg(
                        Arg::new("a")
                            .short('a')
                            .action(ArgAction::SetTrue)
                            .help("Set option a"),
                    ),
                    foo_bar,
                ),
                Command::leaf_with_context("baz", "something about baz", foo_baz),
            ],
        ),
        Command::parsed(
            "xyz",
            "do some other thing",
            clap::Command::new("xyz").arg(
                Arg::new("n")
                    .short('n')
                    .value_parser(clap::value_parser!(i64))
                    .default_value("10")
                    .help("Number of blah"),
            ),
            xyz,
        ),
    ]
}

fn foo_bar(matches: &ArgMatches, _ctx: &CommandContext) {
    println!("a: {}", matches.get_flag("a"));
}

fn foo_baz(args: &[String], ctx: &CommandContext) -> anyhow::Result<()> {
    let argv = std::iter::once(ctx.display_path()).chain(args.iter().cloned());
    let parsed = BazArgs::try_parse_from(argv)?;
    println!("a: {}", parsed.a);
    Ok(())
}

fn xyz(matches: &ArgMatches, _ctx: &CommandContext) -> anyhow::Result<()> {
    let n = matches
        .get_one::<i64>("n")
        .copied()
        .ok_or_else(|| anyhow::anyhow!("missing -n"))?;
    println!("n: {}", n);
    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    if let Err(err) = subcmd::run(commands()) {
        if let DispatchError::Handler(inner) = &err {
            if let Some(clap_err) = inner.downcast_ref::<clap::Error>() {
                clap_err.exit();
            }
        }
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}
