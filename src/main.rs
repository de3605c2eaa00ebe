//! Generate sample output for web-indexer across demo configurations.
//!
//! Each demo is a named argument string, such as `nord:--theme nord
//! --title 'Nord Demo'`, which is split shell-style into extra flags for
//! the indexer and rendered into its own output directory. Please see the
//! main documentation in the repository for the available subcommands.
#[macro_use]
extern crate log as logger;

mod cli;
mod log;
mod paths;
mod tokenize;
mod types;
mod util;
mod walker;

mod cleanup;
mod demos;
mod generate;
mod split;

fn main() -> types::UtilResult<()> {
    // build the CLI and grab all arguments
    let args = cli::build().get_matches();

    // initialize logging
    log::init(&args)?;

    // delegate to the cli mod
    cli::exec(&args)
}
