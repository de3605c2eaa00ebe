//! Logging module for terminal based output control.
//!
//! Contains a custom logging implementation to disable/redirect output
//! based on command line switches baked into the application level.
use clap::ArgMatches;
use logger::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};

/// Basic logger instance to allow quiet-aware logging.
struct BasicLogger {
    quiet: bool,
}

// Basic logging implementation.
impl Log for BasicLogger {
    /// Returns enabled only for web-indexer-demo modules.
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.target().starts_with("web_indexer_demo")
    }

    /// Logs out a `Record` when logging is enabled.
    ///
    /// Errors and warnings always reach stderr; everything else goes
    /// to stdout unless running quietly.
    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            match record.metadata().level() {
                Level::Error => eprintln!("{}", record.args()),
                Level::Warn => eprintln!("Warning: {}", record.args()),
                _ if !self.quiet => println!("{}", record.args()),
                _ => (),
            }
        }
    }

    /// Flushes this logger.
    fn flush(&self) {}
}

/// Initializes the logger based on the provided arguments.
///
/// If the `-q` flag was provided, this short circuits to cull all logging,
/// and `-v` raises the level to include debug output.
pub fn init(args: &ArgMatches) -> Result<(), SetLoggerError> {
    let quiet = flag(args, "quiet");
    let level = if flag(args, "verbose") {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    let logger = Box::new(BasicLogger { quiet });
    logger::set_boxed_logger(logger).map(|_| logger::set_max_level(level))
}

/// Checks a global switch on either the parent or the chosen subcommand.
fn flag(args: &ArgMatches, name: &str) -> bool {
    args.is_present(name)
        || args
            .subcommand()
            .1
            .map(|sub| sub.is_present(name))
            .unwrap_or(false)
}
