/*!
 * Error types for the bitext-sanity application.
 *
 * This module contains custom error types for different parts of the application,
 * using the thiserror crate for ergonomic error definitions.
 *
 * Only configuration problems are fatal. Per-line anomalies are reported as
 * diagnostics and identification failures are absorbed by the identifier adapter.
 */

use thiserror::Error;

use crate::language_utils::LanguageCode;

/// Errors that stop a run before any line is diagnosed
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// A language code outside the supported set
    #[error("Language code '{0}' is not supported (expected one of: doi, gu, hi, kn, ks, or, pa, sd, te, ur)")]
    UnsupportedLanguage(String),

    /// Source and target share the same code
    #[error("Source and target language code is the same: {0}")]
    SameLanguage(LanguageCode),

    /// The input file holds no lines at all
    #[error("The input file is empty")]
    EmptyInput,
}

/// Errors raised by a language identifier backend.
///
/// These never leave the identification adapter; they are converted into an
/// unknown identification and treated as a mismatch.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IdentificationError {
    /// Not enough letters to make a call
    #[error("Text too short for identification: {letters} letter(s), need {minimum}")]
    InsufficientText {
        /// Letters found in the text
        letters: usize,
        /// Minimum letters required
        minimum: usize,
    },

    /// No script could be recognized in the text
    #[error("Unrecognized script")]
    UnrecognizedScript,

    /// The best guess was not confident enough to act on
    #[error("Unreliable identification (best guess: {0})")]
    Unreliable(String),

    /// The underlying model failed
    #[error("Identification model error: {0}")]
    Model(String),
}

/// Main application error type that wraps all other errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Error from a file operation
    #[error("File error: {0}")]
    File(String),

    /// Fatal configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Any other error
    #[error("Unknown error: {0}")]
    Unknown(String),
}

// Utility functions for error conversion
impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        Self::Unknown(error.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        Self::File(error.to_string())
    }
}
