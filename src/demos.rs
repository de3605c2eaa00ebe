//! Demo entries and their preparation into indexer invocations.
//!
//! A demo is a named set of extra indexer flags rendered into its own
//! output directory. Entries arrive as `name:args` pieces in a semicolon
//! separated list, are validated and defaulted, and are then tokenized
//! into the argument vector handed to the indexer.
use crate::paths;
use crate::tokenize::Tokenizer;
use crate::types::{UtilError, UtilResult};

/// Raw demo entry, before tokenization.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DemoSpec {
    pub name: String,
    pub title: String,
    pub description: String,
    pub args: String,
    pub directory: String,
}

/// Validated demo entry with its arguments split into tokens.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Demo {
    spec: DemoSpec,
    tokens: Vec<String>,
}

impl Demo {
    /// Retrieves the underlying specification.
    pub fn spec(&self) -> &DemoSpec {
        &self.spec
    }

    /// Retrieves the tokenized extra arguments.
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    /// Builds the full indexer argument vector for a source and target.
    ///
    /// Fixed flags always come first so demo arguments can override them.
    pub fn indexer_args(&self, source: &str, target: &str) -> Vec<String> {
        let mut args = Vec::with_capacity(self.tokens.len() + 4);

        args.push("--source".to_string());
        args.push(source.to_string());
        args.push("--target".to_string());
        args.push(target.to_string());
        args.extend(self.tokens.iter().cloned());

        args
    }
}

/// Parses a semicolon separated list of custom demo entries.
///
/// Each piece is either `name:args` or bare `args`, in which case the
/// name is generated from the 1-based position of the piece. Semicolons
/// always separate pieces, even inside quotes.
pub fn parse_custom(input: &str) -> UtilResult<Vec<DemoSpec>> {
    let mut demos = Vec::new();

    for (idx, piece) in input.split(';').enumerate() {
        let piece = piece.trim();

        if piece.is_empty() {
            continue;
        }

        // a leading colon is part of the args, not an empty name
        let (name, args) = match piece.find(':') {
            Some(colon) if colon > 0 => (
                piece[..colon].trim().to_string(),
                piece[colon + 1..].trim().to_string(),
            ),
            _ => (format!("custom-{}", idx + 1), piece.to_string()),
        };

        if args.is_empty() {
            return Err(format!("empty args for custom demo: {}", piece).into());
        }

        demos.push(DemoSpec {
            title: format!("Custom: {}", name),
            description: format!("Custom demo generated with: {}", args),
            directory: directory_name(&name),
            name,
            args,
        });
    }

    Ok(demos)
}

/// Validates a set of demo entries, filling in default titles.
pub fn validate(demos: &mut [DemoSpec]) -> UtilResult<()> {
    for (idx, demo) in demos.iter_mut().enumerate() {
        if demo.name.is_empty() {
            return Err(format!("demo at index {} is missing name", idx).into());
        }
        if demo.args.is_empty() {
            return Err(format!("demo {} is missing args", demo.name).into());
        }
        if demo.directory.is_empty() {
            return Err(format!("demo {} is missing directory", demo.name).into());
        }
        if demo.title.is_empty() {
            demo.title = demo.name.clone();
        }
        paths::validate_nested(&demo.directory)
            .map_err(|err| format!("demo {} has an invalid directory: {}", demo.name, err))?;
    }
    Ok(())
}

/// Tokenizes every demo entry into a runnable `Demo`.
///
/// A malformed argument string aborts the whole set, naming the demo and
/// the offending string.
pub fn prepare(specs: Vec<DemoSpec>, tokenizer: &Tokenizer) -> UtilResult<Vec<Demo>> {
    specs
        .into_iter()
        .map(|spec| match tokenizer.tokenize(&spec.args) {
            Ok(tokens) => {
                debug!("Demo {} arguments: {:?}", spec.name, tokens);
                Ok(Demo { spec, tokens })
            }
            Err(err) => {
                // point at the quote which was left open
                let column = err.input()[..err.offset()].chars().count();
                Err(UtilError::from(format!(
                    "parsing demo args for {}: {}\n  {}\n  {}^",
                    spec.name,
                    err,
                    err.input(),
                    " ".repeat(column)
                )))
            }
        })
        .collect()
}

/// Sanitizes a demo name for use as a directory.
fn directory_name(name: &str) -> String {
    name.to_lowercase().replace(' ', "-").replace(':', "-")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spec(name: &str, args: &str, directory: &str) -> DemoSpec {
        DemoSpec {
            name: name.to_string(),
            title: String::new(),
            description: String::new(),
            args: args.to_string(),
            directory: directory.to_string(),
        }
    }

    #[test]
    fn parsing_named_custom_demos() {
        let demos =
            parse_custom("custom-nord:--theme nord --title 'Custom Demo';minimal:--theme default")
                .unwrap();

        assert_eq!(demos.len(), 2);
        assert_eq!(demos[0].name, "custom-nord");
        assert_eq!(demos[0].args, "--theme nord --title 'Custom Demo'");
        assert_eq!(demos[0].title, "Custom: custom-nord");
        assert_eq!(demos[0].directory, "custom-nord");
        assert_eq!(
            demos[0].description,
            "Custom demo generated with: --theme nord --title 'Custom Demo'"
        );
        assert_eq!(demos[1].name, "minimal");
        assert_eq!(demos[1].args, "--theme default");
    }

    #[test]
    fn parsing_unnamed_custom_demos() {
        let demos = parse_custom(" ; --theme nord ;;:--odd").unwrap();

        assert_eq!(demos.len(), 2);
        assert_eq!(demos[0].name, "custom-2");
        assert_eq!(demos[0].args, "--theme nord");
        assert_eq!(demos[1].name, "custom-4");
        assert_eq!(demos[1].args, ":--odd");
    }

    #[test]
    fn parsing_custom_demo_names_into_directories() {
        let demos = parse_custom("My Nord Demo:--theme nord").unwrap();

        assert_eq!(demos[0].name, "My Nord Demo");
        assert_eq!(demos[0].directory, "my-nord-demo");
    }

    #[test]
    fn rejecting_custom_demos_without_args() {
        let err = parse_custom("nord:  ").unwrap_err();

        assert_eq!(err.to_string(), "empty args for custom demo: nord:");
    }

    #[test]
    fn parsing_nothing() {
        assert!(parse_custom("").unwrap().is_empty());
    }

    #[test]
    fn validating_defaults_titles() {
        let mut demos = vec![spec("nord", "--theme nord", "nord")];

        validate(&mut demos).unwrap();

        assert_eq!(demos[0].title, "nord");
    }

    #[test]
    fn validating_required_fields() {
        let err = validate(&mut [spec("", "--theme nord", "nord")]).unwrap_err();
        assert_eq!(err.to_string(), "demo at index 0 is missing name");

        let err = validate(&mut [spec("nord", "", "nord")]).unwrap_err();
        assert_eq!(err.to_string(), "demo nord is missing args");

        let err = validate(&mut [spec("nord", "--theme nord", "")]).unwrap_err();
        assert_eq!(err.to_string(), "demo nord is missing directory");

        assert!(validate(&mut [spec("nord", "--theme nord", "../nord")]).is_err());
    }

    #[test]
    fn validating_keeps_directories_nested() {
        let mut specs = parse_custom("/tmp/escaped:--theme nord").unwrap();

        assert_eq!(specs[0].directory, "/tmp/escaped");

        let err = validate(&mut specs).unwrap_err();

        assert!(err
            .to_string()
            .starts_with("demo /tmp/escaped has an invalid directory"));
        assert!(validate(&mut [spec("nord", "--theme nord", ".")]).is_err());
    }

    #[test]
    fn preparing_tokenizes_arguments() {
        let specs = parse_custom("custom-nord:--theme nord").unwrap();
        let demos = prepare(specs, &Tokenizer::new()).unwrap();

        assert_eq!(demos[0].tokens(), &["--theme", "nord"]);
    }

    #[test]
    fn preparing_rejects_malformed_arguments() {
        let specs = vec![spec("broken", "--title 'Custom", "broken")];
        let err = prepare(specs, &Tokenizer::new()).unwrap_err();

        assert_eq!(
            err.to_string(),
            "parsing demo args for broken: unclosed quote (') at offset 8 in arguments: \
             --title 'Custom\n  --title 'Custom\n          ^"
        );
    }

    #[test]
    fn preparing_permissively() {
        let specs = vec![spec("broken", "--title 'Custom", "broken")];
        let demos = prepare(specs, &Tokenizer::new().strict(false)).unwrap();

        assert_eq!(demos[0].tokens(), &["--title", "Custom"]);
    }

    #[test]
    fn building_indexer_arguments() {
        let specs = vec![spec("nord", "--theme nord --title 'Custom Demo'", "nord")];
        let demos = prepare(specs, &Tokenizer::new()).unwrap();
        let args = demos[0].indexer_args("/demo/data", "/demo/output/local/nord");

        assert_eq!(
            args,
            vec![
                "--source",
                "/demo/data",
                "--target",
                "/demo/output/local/nord",
                "--theme",
                "nord",
                "--title",
                "Custom Demo",
            ]
        );
    }
}
