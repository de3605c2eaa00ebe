//! Split a demo argument string exactly as `generate` would.
//!
//! Useful to check how an argument string will reach the indexer before
//! putting it into a demo list; prints one token per line, or the
//! normalized form with `--join`.
use clap::{App, AppSettings, Arg, ArgMatches, SubCommand};

use crate::cli;
use crate::tokenize::Tokenizer;
use crate::types::UtilResult;

/// Generates an appropriate `SubCommand` for this module.
pub fn cmd<'a, 'b>() -> App<'a, 'b> {
    SubCommand::with_name("split")
        .about("Split an argument string into indexer arguments")
        .setting(AppSettings::AllowLeadingHyphen)
        .args(&cli::global_args())
        .args(&cli::tokenizer_args())
        .args(&[
            Arg::with_name("join")
                .help("Print the normalized argument string instead")
                .short("j")
                .long("join"),
            Arg::with_name("args")
                .help("The argument string to split")
                .index(1)
                .allow_hyphen_values(true)
                .required(true),
        ])
}

/// Executes this subcommand and returns a `UtilResult` to indicate success.
///
/// Results always go to stdout, even when running quietly; the logger
/// only carries diagnostics.
pub fn exec(args: &ArgMatches<'_>) -> UtilResult<()> {
    let tokenizer = cli::get_tokenizer(args);
    let input = args.value_of("args").unwrap_or_default();

    let lines = render(&tokenizer, input, args.is_present("join"))?;

    for line in &lines {
        println!("{}", line);
    }

    debug!("{} line(s)", lines.len());
    Ok(())
}

/// Renders the output lines for an input: one per token, or the joined form.
fn render(tokenizer: &Tokenizer, input: &str, join: bool) -> UtilResult<Vec<String>> {
    let tokens = tokenizer.tokenize(input)?;

    if join {
        return Ok(vec![tokenizer.join(&tokens)]);
    }

    Ok(tokens)
}

#[cfg(test)]
mod tests {
    use crate::cli;
    use crate::tokenize::Tokenizer;

    #[test]
    fn splitting_hyphenated_input() {
        let args = cli::build().get_matches_from(vec!["demo", "split", "--", "--theme nord"]);
        let (_, sub) = args.subcommand();

        assert_eq!(sub.unwrap().value_of("args"), Some("--theme nord"));
        assert!(super::exec(sub.unwrap()).is_ok());
    }

    #[test]
    fn splitting_malformed_input() {
        let args = cli::build().get_matches_from(vec!["demo", "split", "--", "--title 'Custom"]);
        let (_, sub) = args.subcommand();

        let err = super::exec(sub.unwrap()).unwrap_err();

        assert!(err.to_string().contains("unclosed quote"));
    }

    #[test]
    fn rendering_tokens_per_line() {
        let lines = super::render(&Tokenizer::new(), "--title 'Custom Demo'", false).unwrap();

        assert_eq!(lines, vec!["--title", "Custom Demo"]);
    }

    #[test]
    fn rendering_the_joined_form() {
        let lines = super::render(&Tokenizer::new(), "--title 'Custom Demo'", true).unwrap();

        assert_eq!(lines, vec![r#"--title "Custom Demo""#]);
    }

    #[test]
    fn splitting_quietly_still_succeeds() {
        let args = cli::build().get_matches_from(vec!["demo", "split", "-q", "--", "a b"]);
        let (_, sub) = args.subcommand();

        assert!(super::exec(sub.unwrap()).is_ok());
    }
}
