/*!
 * Mock identifier implementations for testing.
 *
 * This module provides mock identifiers that simulate different behaviors:
 * - `MockIdentifier::constant()` - Always answers the same supported language
 * - `MockIdentifier::foreign()` - Always answers a language outside the supported set
 * - `MockIdentifier::failing()` - Always fails with an error
 * - `MockIdentifier::scripted()` - Answers from a fixed text -> language table
 */

use isolang::Language;
use std::cell::Cell;
use std::collections::HashMap;

use super::LanguageIdentifier;
use crate::errors::IdentificationError;
use crate::language_utils::LanguageCode;

/// Behavior mode for the mock identifier
#[derive(Debug, Clone, PartialEq)]
pub enum MockBehavior {
    /// Always answers the given language
    Constant(Language),
    /// Always fails
    Failing,
    /// Looks the text up; unlisted texts fail
    Scripted(HashMap<String, Language>),
}

/// Mock identifier for testing detector behavior
#[derive(Debug)]
pub struct MockIdentifier {
    /// Behavior mode
    behavior: MockBehavior,
    /// Number of predictions made
    calls: Cell<usize>,
}

impl MockIdentifier {
    /// Create a new mock identifier with the specified behavior
    pub fn new(behavior: MockBehavior) -> Self {
        Self {
            behavior,
            calls: Cell::new(0),
        }
    }

    /// Create a mock that always answers `code`
    pub fn constant(code: LanguageCode) -> Self {
        match code.to_isolang() {
            Some(language) => Self::new(MockBehavior::Constant(language)),
            None => Self::failing(),
        }
    }

    /// Create a mock that always answers a language outside the supported set
    pub fn foreign(language: Language) -> Self {
        Self::new(MockBehavior::Constant(language))
    }

    /// Create a failing mock identifier that always errors
    pub fn failing() -> Self {
        Self::new(MockBehavior::Failing)
    }

    /// Create a mock answering from a table of exact texts
    pub fn scripted(entries: &[(&str, LanguageCode)]) -> Self {
        let table = entries
            .iter()
            .filter_map(|(text, code)| code.to_isolang().map(|language| (text.to_string(), language)))
            .collect();
        Self::new(MockBehavior::Scripted(table))
    }

    /// Number of predictions requested so far
    pub fn call_count(&self) -> usize {
        self.calls.get()
    }
}

impl LanguageIdentifier for MockIdentifier {
    fn predict(&self, text: &str) -> Result<Language, IdentificationError> {
        self.calls.set(self.calls.get() + 1);

        match &self.behavior {
            MockBehavior::Constant(language) => Ok(*language),
            MockBehavior::Failing => Err(IdentificationError::Model("mock failure".to_string())),
            MockBehavior::Scripted(table) => table
                .get(text)
                .copied()
                .ok_or_else(|| IdentificationError::Model(format!("no scripted answer for '{}'", text))),
        }
    }
}
