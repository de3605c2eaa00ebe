//! Shell-style splitting of a single options string into arguments.
//!
//! Demo entries carry their extra indexer flags as one human-authored
//! string, such as `--theme nord --title 'Custom Demo'`. This module turns
//! that string into an argument vector, resolving quotes and (optionally)
//! backslash escapes, and can write a vector back out in a form which
//! splits into the same arguments again.
use std::error::Error;
use std::fmt::{self, Display, Formatter};
use std::mem;

/// Error raised when a quoted region is never closed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MalformedInput {
    input: String,
    quote: char,
    offset: usize,
}

impl MalformedInput {
    /// Retrieves the full input which failed to tokenize.
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Retrieves the byte offset of the unclosed quote.
    pub fn offset(&self) -> usize {
        self.offset
    }
}

impl Display for MalformedInput {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(
            f,
            "unclosed quote ({}) at offset {} in arguments: {}",
            self.quote, self.offset, self.input
        )
    }
}

impl Error for MalformedInput {}

/// Tokenization policy for argument strings.
///
/// The two switches are independent and observably different:
///
/// * `escapes` enables backslash handling. Outside quotes a backslash makes
///   the next character literal; inside quotes it only escapes the active
///   quote character or another backslash, and is kept literally otherwise.
/// * `strict` rejects unclosed quotes with `MalformedInput`. When disabled,
///   an open region is closed at the end of input and kept as a token.
///
/// Both are enabled by default.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Tokenizer {
    escapes: bool,
    strict: bool,
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Tokenizer {
    /// Constructs a new escape-aware, strict `Tokenizer`.
    pub fn new() -> Self {
        Self {
            escapes: true,
            strict: true,
        }
    }

    /// Toggles backslash escape handling.
    pub fn escapes(mut self, escapes: bool) -> Self {
        self.escapes = escapes;
        self
    }

    /// Toggles rejection of unclosed quotes.
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Splits an input string into tokens under this policy.
    pub fn tokenize(&self, input: &str) -> Result<Vec<String>, MalformedInput> {
        // nothing to resolve, so whitespace splitting is identical
        if self.is_plain(input) {
            return Ok(input.split_whitespace().map(str::to_string).collect());
        }

        let mut tokens = Vec::new();
        let mut current = String::new();

        // quotes start a token even when empty, so track it separately
        let mut started = false;
        let mut quote: Option<(char, usize)> = None;
        let mut chars = input.char_indices().peekable();

        while let Some((idx, c)) = chars.next() {
            match quote {
                Some((q, _)) if c == q => quote = None,
                Some((q, _)) if c == '\\' && self.escapes => match chars.peek() {
                    Some(&(_, next)) if next == q || next == '\\' => {
                        current.push(next);
                        chars.next();
                    }
                    _ => current.push(c),
                },
                Some(_) => current.push(c),
                None if c == '"' || c == '\'' => {
                    quote = Some((c, idx));
                    started = true;
                }
                None if c == '\\' && self.escapes => {
                    // a trailing backslash has nothing to escape
                    let next = chars.next().map(|(_, n)| n).unwrap_or(c);
                    current.push(next);
                    started = true;
                }
                None if c.is_whitespace() => {
                    if started {
                        tokens.push(mem::take(&mut current));
                        started = false;
                    }
                }
                None => {
                    current.push(c);
                    started = true;
                }
            }
        }

        if let Some((quote, offset)) = quote {
            if self.strict {
                return Err(MalformedInput {
                    input: input.to_string(),
                    quote,
                    offset,
                });
            }
        }

        if started {
            tokens.push(current);
        }

        Ok(tokens)
    }

    /// Joins tokens back into a single string which tokenizes to `tokens`.
    ///
    /// Tokens without whitespace or special characters are written as-is;
    /// everything else is quoted in a form this policy can read back.
    pub fn join<S>(&self, tokens: &[S]) -> String
    where
        S: AsRef<str>,
    {
        tokens
            .iter()
            .map(|token| self.quote(token.as_ref()))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Quotes a single token for `join`.
    fn quote(&self, token: &str) -> String {
        let special = token.chars().any(|c| {
            c.is_whitespace() || c == '"' || c == '\'' || (self.escapes && c == '\\')
        });

        if !token.is_empty() && !special {
            return token.to_string();
        }

        // double quotes with escaped `"` and `\` read back literally
        if self.escapes {
            let mut quoted = String::with_capacity(token.len() + 2);
            quoted.push('"');
            for c in token.chars() {
                if c == '"' || c == '\\' {
                    quoted.push('\\');
                }
                quoted.push(c);
            }
            quoted.push('"');
            return quoted;
        }

        // no escapes available, so single quotes are spliced in via `"'"`
        let mut quoted = String::with_capacity(token.len() + 2);
        let mut open = false;
        for c in token.chars() {
            if c == '\'' {
                if open {
                    quoted.push('\'');
                    open = false;
                }
                quoted.push_str("\"'\"");
                continue;
            }
            if !open {
                quoted.push('\'');
                open = true;
            }
            quoted.push(c);
        }
        if open {
            quoted.push('\'');
        }
        if quoted.is_empty() {
            quoted.push_str("''");
        }
        quoted
    }

    /// Determines whether an input has nothing but whitespace to resolve.
    fn is_plain(&self, input: &str) -> bool {
        !input
            .chars()
            .any(|c| c == '"' || c == '\'' || (self.escapes && c == '\\'))
    }
}
