//! Types module for the main runtime, exposing error and result types.
//!
//! Most code in this module is based around coercion of error types into
//! a common error type, to be used as the general "Error" of this crate.
use logger::SetLoggerError;

use std::fmt::{self, Debug, Display, Formatter};
use std::{io, path};

use crate::tokenize::MalformedInput;

/// Public type alias for a result with a `UtilError` error type.
pub type UtilResult<T> = Result<T, UtilError>;

/// Delegating error wrapper for errors raised while generating demos.
///
/// The internal `String` representation enables cheap coercion from
/// other error types by binding their error messages through.
pub struct UtilError(String);

/// Debug implementation for `UtilError`.
impl Debug for UtilError {
    /// Formats an `UtilError` by delegating to `Display`.
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        Display::fmt(self, f)
    }
}

/// Display implementation for `UtilError`.
impl Display for UtilError {
    /// Formats an `UtilError` by writing out the inner representation.
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Macro to implement `From` for provided types.
macro_rules! derive_from {
    ($type:ty) => {
        impl<'a> From<$type> for UtilError {
            fn from(t: $type) -> UtilError {
                UtilError(t.to_string())
            }
        }
    };
}

// Easy derivations of derive_from.
derive_from!(&'a str);
derive_from!(io::Error);
derive_from!(clap::Error);
derive_from!(SetLoggerError);
derive_from!(regex::Error);
derive_from!(path::StripPrefixError);
derive_from!(walkdir::Error);
derive_from!(MalformedInput);
derive_from!(String);

#[cfg(test)]
mod tests {
    use super::UtilError;
    use crate::tokenize::Tokenizer;
    use std::io::{Error, ErrorKind};

    #[test]
    fn converting_io_to_error() {
        let message = "Permission denied writing demo output";
        let io_errs = Error::new(ErrorKind::Other, message);
        let convert = UtilError::from(io_errs);

        assert_eq!(convert.0, message);
    }

    #[test]
    fn converting_malformed_input_to_error() {
        let malformed = Tokenizer::new().tokenize("--title \"Custom").unwrap_err();
        let convert = UtilError::from(malformed);

        assert_eq!(
            convert.0,
            "unclosed quote (\") at offset 8 in arguments: --title \"Custom"
        );
    }

    #[test]
    fn converting_string_to_error() {
        let message = "demo nord is missing args".to_string();
        let convert = UtilError::from(message.clone());

        assert_eq!(convert.0, message);
    }

    #[test]
    fn converting_str_to_error() {
        let message = "demo nord is missing args";
        let convert = UtilError::from(message);

        assert_eq!(convert.0, message);
    }
}
