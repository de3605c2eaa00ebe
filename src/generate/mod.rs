//! Generate local demo listings by running the indexer per demo.
//!
//! Each demo is rendered into `output/local/<directory>` from the shared
//! `data` directory, with its argument string tokenized into extra flags
//! for the indexer. Sample data is seeded from `templates/demo-content`
//! when present, and copied next to each listing afterwards so the links
//! in the generated pages resolve.
use clap::{App, Arg, ArgMatches, SubCommand};
use regex::Regex;

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use std::time::Instant;

use crate::cli;
use crate::demos::{self, Demo, DemoSpec};
use crate::paths;
use crate::types::UtilResult;
use crate::util;
use crate::walker::{self, FileWalker};

/// Directory names used within the project root.
const DATA_DIR: &str = "data";
const OUTPUT_DIR: &str = "output";
const TEMPLATE_DIR: &str = "templates/demo-content";

/// Generates an appropriate `SubCommand` for this module.
pub fn cmd<'a, 'b>() -> App<'a, 'b> {
    SubCommand::with_name("generate")
        .about("Generate local demo listings by running web-indexer")
        .args(&cli::global_args())
        .args(&cli::tokenizer_args())
        .arg(cli::dry_arg())
        .arg(cli::root_arg())
        .args(&[
            Arg::with_name("binary")
                .help("Path to the web-indexer binary [default: <root>/../web-indexer]")
                .short("b")
                .long("binary")
                .takes_value(true)
                .env("WEB_INDEXER_BINARY"),
            Arg::with_name("demos")
                .help("Semicolon separated demo specs, as 'name:args' or just 'args'")
                .long("demos")
                .takes_value(true)
                .multiple(true)
                .number_of_values(1)
                .allow_hyphen_values(true)
                .required(true),
            Arg::with_name("only")
                .help("Only generate demos with names matching this pattern")
                .long("only")
                .takes_value(true),
            Arg::with_name("no-copy")
                .help("Skip copying source files next to each listing")
                .long("no-copy"),
        ])
}

/// Executes this subcommand and returns a `UtilResult` to indicate success.
pub fn exec(args: &ArgMatches<'_>) -> UtilResult<()> {
    let start = Instant::now();

    // parse all global arguments
    let dryrun = cli::is_dry_run(args);
    let tokenizer = cli::get_tokenizer(args);
    let layout = Layout::new(cli::get_root(args)?, args.value_of("binary"))?;

    // gather all demo specs from every --demos occurrence
    let mut specs = Vec::new();
    for value in args.values_of("demos").into_iter().flatten() {
        specs.extend(demos::parse_custom(value)?);
    }

    // filter down by name when asked
    if let Some(pattern) = args.value_of("only") {
        specs = filter(specs, &Regex::new(pattern)?);
    }

    demos::validate(&mut specs)?;

    if specs.is_empty() {
        return Err("no demos to generate".into());
    }

    // tokenize everything up front, so a bad entry fails before any writes
    let demos = demos::prepare(specs, &tokenizer)?;

    info!("Generating {} demo(s) into {}", demos.len(), layout.local().display());

    if !dryrun {
        check_binary(&layout.binary)?;
        create_data(&layout)?;
    }

    let mut copied = 0;
    for demo in &demos {
        copied += generate(&layout, demo, dryrun, !args.is_present("no-copy"))?;
    }

    util::log_pair("total_demos", demos.len());
    util::log_pair("total_copied", util::convert_bytes(copied));
    util::log_pair("total_time", util::convert_elapsed(start));

    Ok(())
}

/// Resolved locations within a demo project.
struct Layout {
    data: PathBuf,
    output: PathBuf,
    templates: PathBuf,
    binary: PathBuf,
    root: PathBuf,
}

impl Layout {
    /// Resolves all locations against a canonical project root.
    fn new(root: PathBuf, binary: Option<&str>) -> UtilResult<Self> {
        let binary = match binary {
            Some(binary) => PathBuf::from(binary),
            None => root
                .parent()
                .unwrap_or(&root)
                .join("web-indexer"),
        };

        paths::validate(&root)?;
        paths::validate(&binary)?;

        Ok(Self {
            data: root.join(DATA_DIR),
            output: root.join(OUTPUT_DIR),
            templates: root.join(TEMPLATE_DIR),
            binary,
            root,
        })
    }

    /// Retrieves the directory holding all local listings.
    fn local(&self) -> PathBuf {
        self.output.join("local")
    }
}

/// Keeps only the specs with names matching a pattern.
fn filter(specs: Vec<DemoSpec>, pattern: &Regex) -> Vec<DemoSpec> {
    specs
        .into_iter()
        .filter(|spec| {
            let keep = pattern.is_match(&spec.name);
            if !keep {
                debug!("Skipping demo {}", spec.name);
            }
            keep
        })
        .collect()
}

/// Ensures the indexer binary exists before running anything.
fn check_binary(binary: &Path) -> UtilResult<()> {
    if !binary.is_file() {
        return Err(format!("web-indexer binary not found: {}", binary.display()).into());
    }
    Ok(())
}

/// Creates the data and output directories, seeding data from templates.
fn create_data(layout: &Layout) -> UtilResult<()> {
    info!("Creating demo data structure...");

    fs::create_dir_all(&layout.data)?;
    fs::create_dir_all(layout.local())?;

    if !layout.templates.is_dir() {
        debug!("No templates found at {}", layout.templates.display());
        return Ok(());
    }

    // size up what we're about to mirror
    let mut dirs = 0;
    let mut bytes = 0;
    let mut walker = FileWalker::new(&layout.templates);
    while let Some(entry) = walker.next()? {
        if entry.is_dir() {
            dirs += 1;
        }
        bytes += entry.size();
    }

    info!(
        "Discovered {} directories ({}) from templates",
        dirs,
        util::convert_bytes(bytes)
    );

    walker::copy_tree(&layout.templates, &layout.data)?;

    info!("Demo data structure created in {}", layout.data.display());

    Ok(())
}

/// Generates a single demo, returning the number of source bytes copied.
fn generate(layout: &Layout, demo: &Demo, dry: bool, copy: bool) -> UtilResult<u64> {
    let spec = demo.spec();
    // an absolute directory would replace the base entirely on join
    paths::validate_nested(&spec.directory)?;

    let target = layout.local().join(&spec.directory);

    paths::validate(&target)?;

    let args = demo.indexer_args(
        &layout.data.to_string_lossy(),
        &target.to_string_lossy(),
    );

    info!("Generating demo: {} ({})", spec.name, spec.title);
    debug!("{}", spec.description);
    info!(
        "Running command: '{} {}' in directory: {}",
        layout.binary.display(),
        args.join(" "),
        layout.root.display()
    );

    if dry {
        return Ok(0);
    }

    let output = Command::new(&layout.binary)
        .args(&args)
        .current_dir(&layout.root)
        .output()?;

    if !output.status.success() {
        return Err(format!(
            "generating {} demo: web-indexer exited with {}\nOutput: {}{}",
            spec.name,
            output.status,
            String::from_utf8_lossy(&output.stdout),
            String::from_utf8_lossy(&output.stderr),
        )
        .into());
    }

    if !copy {
        return Ok(0);
    }

    // listings still work without the sources, so this isn't fatal
    match walker::copy_tree(&layout.data, &target) {
        Ok(copied) => Ok(copied),
        Err(err) => {
            warn!("Could not copy source files to {}: {}", target.display(), err);
            Ok(0)
        }
    }
}
