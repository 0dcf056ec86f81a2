/*!
 * Language identification for corpus lines.
 *
 * This module wraps a language identification backend behind a stable interface:
 * - `LanguageIdentifier`: the backend trait, free to fail
 * - `IdentifierAdapter`: the caller-facing wrapper that never fails
 * - `statistical`: a `whatlang` backend
 * - `mock`: a scripted backend for tests
 *
 * Any backend failure becomes `Identification::Unknown`, which callers treat
 * as a mismatch.
 */

use isolang::Language;
use log::trace;
use std::fmt::Debug;

use crate::errors::IdentificationError;
use crate::language_utils::LanguageCode;

pub mod mock;
pub mod statistical;

pub use mock::MockIdentifier;
pub use statistical::WhatlangIdentifier;

/// Common trait for language identification backends
///
/// Implementations are constructed once per run and shared by reference, so
/// `predict` takes `&self` and must not depend on call order.
pub trait LanguageIdentifier: Debug {
    /// Predict the language of a piece of text
    ///
    /// # Arguments
    /// * `text` - Whitespace-stripped line content
    ///
    /// # Returns
    /// * `Result<Language, IdentificationError>` - The detected language or an error
    fn predict(&self, text: &str) -> Result<Language, IdentificationError>;
}

/// Outcome of identifying one piece of text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Identification {
    /// One of the supported corpus languages
    Language(LanguageCode),
    /// A confident answer outside the supported set
    Other(Language),
    /// The backend failed
    Unknown,
}

impl Identification {
    /// Whether this outcome names exactly `code`
    pub fn is(&self, code: LanguageCode) -> bool {
        matches!(self, Self::Language(found) if *found == code)
    }

    /// Whether the backend failed
    pub fn is_unknown(&self) -> bool {
        matches!(self, Self::Unknown)
    }
}

/// Caller-facing identifier that absorbs backend failures
#[derive(Debug)]
pub struct IdentifierAdapter<'a> {
    backend: &'a dyn LanguageIdentifier,
}

impl<'a> IdentifierAdapter<'a> {
    /// Wrap a backend
    pub fn new(backend: &'a dyn LanguageIdentifier) -> Self {
        Self { backend }
    }

    /// Identify the language of `text`, never failing
    pub fn identify(&self, text: &str) -> Identification {
        match self.backend.predict(text) {
            Ok(language) => match LanguageCode::from_isolang(language) {
                Some(code) => Identification::Language(code),
                None => Identification::Other(language),
            },
            Err(e) => {
                trace!("Identification failed, treating as unknown: {}", e);
                Identification::Unknown
            }
        }
    }
}
