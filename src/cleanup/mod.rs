//! Remove generated demo data and output.
use clap::{App, ArgMatches, SubCommand};

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use crate::cli;
use crate::paths;
use crate::types::UtilResult;

/// Generates an appropriate `SubCommand` for this module.
pub fn cmd<'a, 'b>() -> App<'a, 'b> {
    SubCommand::with_name("cleanup")
        .about("Remove generated demo data and output")
        .args(&cli::global_args())
        .arg(cli::dry_arg())
        .arg(cli::root_arg())
}

/// Executes this subcommand and returns a `UtilResult` to indicate success.
///
/// Failing to remove a directory is logged, not fatal.
pub fn exec(args: &ArgMatches<'_>) -> UtilResult<()> {
    let dryrun = cli::is_dry_run(args);
    let root = cli::get_root(args)?;

    info!("Cleaning up demo files...");

    for dir in &["data", "output"] {
        remove(&root.join(dir), dryrun)?;
    }

    info!("Cleanup completed");
    Ok(())
}

/// Removes a single directory tree, returning whether anything was removed.
fn remove(dir: &Path, dry: bool) -> UtilResult<bool> {
    paths::validate(dir)?;

    if dry {
        if dir.exists() {
            info!("Would remove: {}", dir.display());
        }
        return Ok(false);
    }

    match fs::remove_dir_all(dir) {
        Ok(()) => {
            info!("Cleaned up: {}", dir.display());
            Ok(true)
        }
        Err(ref err) if err.kind() == ErrorKind::NotFound => Ok(false),
        Err(err) => {
            warn!("Could not remove {}: {}", dir.display(), err);
            Ok(false)
        }
    }
}
