//! CLI bindings for all internal commands and modules.
//!
//! This module focuses on the common CLI bindings required to provide easy
//! APIs and consistency across all other modules. This is where the parent
//! CLI can be found, as well as utilities for fetching common switches and
//! values.
use clap::{App, AppSettings, Arg, ArgMatches};

use std::path::PathBuf;

use crate::tokenize::Tokenizer;
use crate::types::UtilResult;

/// Constructs a new CLI application using Clap.
///
/// This will register all subcommand modules and embed all metadata. All
/// metadata is fetched dynamically from Cargo and shouldn't require to
/// be updated (ever).
pub fn build<'a, 'b>() -> App<'a, 'b> {
    App::new("")
        .name(env!("CARGO_PKG_NAME"))
        .about(env!("CARGO_PKG_DESCRIPTION"))
        .version(env!("CARGO_PKG_VERSION"))
        .author(env!("CARGO_PKG_AUTHORS"))
        .subcommand(crate::cleanup::cmd())
        .subcommand(crate::generate::cmd())
        .subcommand(crate::split::cmd())
        .settings(&[
            AppSettings::ArgRequiredElseHelp,
            AppSettings::DisableHelpSubcommand,
            AppSettings::SubcommandRequiredElseHelp,
            AppSettings::VersionlessSubcommands,
        ])
}

/// Executes a subcommand based on the parsed arguments from the CLI.
pub fn exec(args: &ArgMatches<'_>) -> UtilResult<()> {
    match args.subcommand() {
        ("cleanup", Some(subargs)) => crate::cleanup::exec(subargs),
        ("generate", Some(subargs)) => crate::generate::exec(subargs),
        ("split", Some(subargs)) => crate::split::exec(subargs),
        _ => {
            build().print_help()?;
            Ok(())
        }
    }
}

/// Fetches the set of global arguments which should be attached on each command.
pub fn global_args<'a, 'b>() -> [Arg<'a, 'b>; 2] {
    [
        Arg::with_name("quiet")
            .help("Only prints errors during execution")
            .short("q")
            .long("quiet"),
        Arg::with_name("verbose")
            .help("Prints debug output during execution")
            .short("v")
            .long("verbose")
            .conflicts_with("quiet"),
    ]
}

/// Fetches the arguments controlling the tokenizer policy.
pub fn tokenizer_args<'a, 'b>() -> [Arg<'a, 'b>; 2] {
    [
        Arg::with_name("no-escapes")
            .help("Treat backslashes in demo arguments as ordinary characters")
            .long("no-escapes"),
        Arg::with_name("permissive")
            .help("Accept unclosed quotes in demo arguments")
            .long("permissive"),
    ]
}

/// Fetches the project root argument.
pub fn root_arg<'a, 'b>() -> Arg<'a, 'b> {
    Arg::with_name("root")
        .help("The demo project root containing data and output")
        .short("r")
        .long("root")
        .takes_value(true)
        .env("DEMO_ROOT")
        .default_value(".")
}

/// Builds a `Tokenizer` from the policy switches in this execution.
pub fn get_tokenizer(args: &ArgMatches<'_>) -> Tokenizer {
    Tokenizer::new()
        .escapes(!args.is_present("no-escapes"))
        .strict(!args.is_present("permissive"))
}

/// Fetches the project root, resolved to an absolute path.
pub fn get_root(args: &ArgMatches<'_>) -> UtilResult<PathBuf> {
    let root = PathBuf::from(args.value_of("root").unwrap_or("."));
    Ok(root.canonicalize()?)
}

/// Determines if the dry-run switch was provided in this execution.
pub fn is_dry_run(args: &ArgMatches<'_>) -> bool {
    args.is_present("dry")
}

/// Fetches the dry-run argument, for commands which write.
pub fn dry_arg<'a, 'b>() -> Arg<'a, 'b> {
    Arg::with_name("dry")
        .help("Only print out the calculated writes")
        .short("d")
        .long("dry-run")
}
