/*!
 * Validation service that composes all detectors into one diagnosis per line.
 *
 * Detectors run in a fixed order and every triggered message is kept in that
 * order. Emptiness of each side is recorded on the way and gates the detectors
 * that would otherwise fire vacuously on an empty field.
 */

use log::{debug, trace};
use serde::{Deserialize, Serialize};

use crate::corpus::{LinePair, SplitOutcome};
use crate::identification::{IdentifierAdapter, LanguageIdentifier};
use crate::language_utils::LanguageCode;

use super::detectors::{
    Issue, NewlineMode, Side, detect_different_language, detect_empty_line, detect_inserted_newline,
    detect_no_words, detect_only_url, detect_reverse_alignment, detect_untranslated_data,
};

/// Sentinel diagnosis for a line without issues
pub const OK_DIAGNOSIS: &str = "OK";

/// Configuration for the validation service
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ValidationConfig {
    /// How the newline detector inspects text
    #[serde(default)]
    pub newline_mode: NewlineMode,
}

/// Convert from app_config::ChecksConfig to validation::ValidationConfig
impl From<&crate::app_config::ChecksConfig> for ValidationConfig {
    fn from(config: &crate::app_config::ChecksConfig) -> Self {
        Self {
            newline_mode: config.newline_mode,
        }
    }
}

/// The ordered issues found on one line
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Diagnosis {
    issues: Vec<Issue>,
}

impl Diagnosis {
    /// Whether no detector fired
    pub fn is_ok(&self) -> bool {
        self.issues.is_empty()
    }

    /// Issues in evaluation order
    pub fn issues(&self) -> &[Issue] {
        &self.issues
    }

    /// Issue messages in evaluation order
    pub fn messages(&self) -> Vec<String> {
        self.issues.iter().map(|issue| issue.to_string()).collect()
    }

    /// Whether a given issue was found
    pub fn contains(&self, issue: Issue) -> bool {
        self.issues.contains(&issue)
    }
}

impl std::fmt::Display for Diagnosis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_ok() {
            return write!(f, "{}", OK_DIAGNOSIS);
        }
        write!(f, "{}", self.messages().join(" "))
    }
}

/// Runs the detector set against line pairs for one language pair
#[derive(Debug)]
pub struct ValidationService<'a> {
    config: ValidationConfig,
    source_language: LanguageCode,
    target_language: LanguageCode,
    identifier: IdentifierAdapter<'a>,
}

impl<'a> ValidationService<'a> {
    /// Create a service for a validated language pair.
    ///
    /// The identifier is borrowed for the lifetime of the service and shared by
    /// every line.
    pub fn new(
        config: ValidationConfig,
        source_language: LanguageCode,
        target_language: LanguageCode,
        identifier: &'a dyn LanguageIdentifier,
    ) -> Self {
        debug!(
            "Validation service for {} -> {} (newline mode: {:?})",
            source_language, target_language, config.newline_mode
        );
        Self {
            config,
            source_language,
            target_language,
            identifier: IdentifierAdapter::new(identifier),
        }
    }

    /// Diagnose a single line pair
    pub fn diagnose(&self, pair: &LinePair) -> Diagnosis {
        let source = pair.source.trim();
        let target = pair.target_text().trim();
        let mut issues = Vec::new();

        match pair.outcome {
            SplitOutcome::MissingTarget => issues.push(Issue::MissingTarget),
            SplitOutcome::AmbiguousTabs => issues.push(Issue::AmbiguousTabs),
            SplitOutcome::Normal => {}
        }

        if detect_inserted_newline(source, self.config.newline_mode) {
            issues.push(Issue::InsertedNewline(Side::Source));
        }
        if detect_inserted_newline(target, self.config.newline_mode) {
            issues.push(Issue::InsertedNewline(Side::Target));
        }
        if detect_only_url(source) {
            issues.push(Issue::OnlyUrl(Side::Source));
        }
        if detect_only_url(target) {
            issues.push(Issue::OnlyUrl(Side::Target));
        }

        let source_empty = detect_empty_line(source);
        if source_empty {
            issues.push(Issue::EmptyLine(Side::Source));
        }
        let target_empty = detect_empty_line(target);
        if target_empty {
            issues.push(Issue::EmptyLine(Side::Target));
        }

        if !source_empty && detect_no_words(source) {
            issues.push(Issue::NoWords(Side::Source));
        }
        if !target_empty && detect_no_words(target) {
            issues.push(Issue::NoWords(Side::Target));
        }
        if !source_empty && !target_empty && detect_untranslated_data(source, target) {
            issues.push(Issue::UntranslatedData);
        }
        if !source_empty && detect_different_language(&self.identifier, self.source_language, source) {
            issues.push(Issue::DifferentLanguage(Side::Source));
        }
        if !target_empty && detect_different_language(&self.identifier, self.target_language, target) {
            issues.push(Issue::DifferentLanguage(Side::Target));
        }

        // Not gated on emptiness: an empty side fails identification and reads as swapped
        if detect_reverse_alignment(
            &self.identifier,
            source,
            target,
            self.source_language,
            self.target_language,
        ) {
            issues.push(Issue::ReverseAlignment);
        }

        trace!("Line {}: {} issue(s)", pair.line_number(), issues.len());
        Diagnosis { issues }
    }
}
