//! All error types for the textchain crate.
//!
//! Chains record the first failure on the [`crate::Conv`] itself; free functions
//! and the settings loader return these directly.

use thiserror::Error;

use crate::translate;

#[derive(Error, Debug)]
pub enum Error {
    #[error("unsupported type `{0}`")]
    UnsupportedType(String),

    #[error("bad directive: {0}")]
    BadDirective(String),

    #[error("out of memory")]
    OutOfMemory,

    #[error("invalid state: {0}")]
    InvalidState(String),

    #[error("invalid number `{0}`")]
    InvalidNumber(String),

    #[error("unknown language `{0}`")]
    UnknownLanguage(String),

    #[error("configuration error: {0}")]
    Config(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Creates an invalid state error
    pub fn invalid_state(message: impl Into<String>) -> Self {
        Error::InvalidState(message.into())
    }

    /// Dictionary phrase naming this kind of error.
    pub fn phrase(&self) -> &'static str {
        match self {
            Error::UnsupportedType(_) => "unsupported type",
            Error::BadDirective(_) => "bad directive",
            Error::OutOfMemory => "out of memory",
            Error::InvalidState(_) => "invalid state",
            Error::InvalidNumber(_) => "invalid number",
            Error::UnknownLanguage(_) => "unknown language",
            Error::Config(_) => "configuration error",
            Error::Io(_) => "input/output error",
        }
    }

    /// Renders the error headline in the current process language, followed by
    /// the untranslated detail.
    pub fn localized(&self) -> String {
        let lang = translate::language();
        let headline = translate::lookup(self.phrase(), lang).unwrap_or(self.phrase());
        let detail = match self {
            Error::UnsupportedType(d)
            | Error::BadDirective(d)
            | Error::InvalidState(d)
            | Error::InvalidNumber(d)
            | Error::UnknownLanguage(d) => d.clone(),
            Error::OutOfMemory => String::new(),
            Error::Config(e) => e.to_string(),
            Error::Io(e) => e.to_string(),
        };
        if detail.is_empty() {
            headline.to_string()
        } else {
            format!("{}: {}", headline, detail)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_unsupported_type_error() {
        let error = Error::UnsupportedType("u128".to_string());
        assert_eq!(error.to_string(), "unsupported type `u128`");
    }

    #[test]
    fn test_bad_directive_error() {
        let error = Error::BadDirective("%z".to_string());
        assert_eq!(error.to_string(), "bad directive: %z");
    }

    #[test]
    fn test_invalid_state_error() {
        let error = Error::invalid_state("apply on a scalar conversion");
        assert_eq!(
            error.to_string(),
            "invalid state: apply on a scalar conversion"
        );
    }

    #[test]
    fn test_config_error() {
        let json_error = serde_json::from_str::<serde_json::Value>("{ invalid json }").unwrap_err();
        let error = Error::Config(json_error);
        assert!(error.to_string().contains("configuration error"));
    }

    #[test]
    fn test_io_error() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let error = Error::from(io_error);
        assert!(error.to_string().contains("I/O error"));
    }

    #[test]
    fn test_every_phrase_is_in_the_dictionary() {
        let errors = vec![
            Error::UnsupportedType("x".to_string()),
            Error::BadDirective("x".to_string()),
            Error::OutOfMemory,
            Error::InvalidState("x".to_string()),
            Error::InvalidNumber("x".to_string()),
            Error::UnknownLanguage("x".to_string()),
        ];

        for error in errors {
            for lang in translate::Language::ALL {
                assert!(
                    translate::lookup(error.phrase(), lang).is_some(),
                    "{:?} has no {:?} phrase",
                    error,
                    lang
                );
            }
        }
    }

    #[test]
    fn test_error_debug() {
        let error = Error::InvalidNumber("abc".to_string());
        let debug = format!("{:?}", error);
        assert!(debug.contains("InvalidNumber"));
        assert!(debug.contains("abc"));
    }
}
