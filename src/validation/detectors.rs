/*!
 * Per-line quality detectors.
 *
 * Every detector is a pure function over whitespace-stripped text and answers
 * a plain boolean. Emptiness gating happens in the service, not here.
 */

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

use crate::identification::IdentifierAdapter;
use crate::language_utils::LanguageCode;

/// URL with a scheme or a `www.` prefix, a dotted host and an optional path
static URL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(https?://(?:www\.)?|www\.)[a-zA-Z0-9-]+(\.[a-zA-Z]{2,})+(/[a-zA-Z0-9\-._~:/?#\[\]@!$&'()*+,;=%]*)?",
    )
    .unwrap()
});

/// Anything that is neither a word character nor whitespace
static SYMBOL_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^\w\s]").unwrap());

/// Which characters of a line the newline detector inspects
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NewlineMode {
    /// A line break anywhere in the text
    #[default]
    Anywhere,
    /// Only a line break in the first character
    Leading,
}

/// Which column of a pair a message refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Source,
    Target,
}

impl Side {
    fn noun(self) -> &'static str {
        match self {
            Side::Source => "source",
            Side::Target => "target",
        }
    }
}

/// A single problem found on a line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Issue {
    /// The raw line had no tab
    MissingTarget,
    /// The raw line had more than one tab
    AmbiguousTabs,
    /// A line break survived line splitting
    InsertedNewline(Side),
    /// The text is nothing but URLs
    OnlyUrl(Side),
    /// The text is empty after stripping
    EmptyLine(Side),
    /// The text has no word characters
    NoWords(Side),
    /// Source and target are the same text
    UntranslatedData,
    /// The text does not look like the declared language
    DifferentLanguage(Side),
    /// Source and target columns look swapped
    ReverseAlignment,
}

impl std::fmt::Display for Issue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Issue::MissingTarget => write!(f, "No tab detected, line treated as source only!"),
            Issue::AmbiguousTabs => write!(f, "Multiple tabs detected, line treated as source only!"),
            Issue::InsertedNewline(side) => write!(f, "Newline detected in {}!", side.noun()),
            Issue::OnlyUrl(side) => write!(f, "Only URL detected in {}!", side.noun()),
            Issue::EmptyLine(side) => write!(f, "Empty line detected in {}!", side.noun()),
            Issue::NoWords(side) => write!(f, "No word detected in {}!", side.noun()),
            Issue::UntranslatedData => write!(f, "Untranslated data!"),
            Issue::DifferentLanguage(side) => write!(
                f,
                "Warning! Different language may be present in {} text!",
                side.noun()
            ),
            Issue::ReverseAlignment => write!(f, "Warning! Probable Wrong Alignment!"),
        }
    }
}

fn is_line_break(c: char) -> bool {
    matches!(c, '\n' | '\r' | '\u{2028}' | '\u{2029}')
}

/// Check for a line break left inside the text
pub fn detect_inserted_newline(text: &str, mode: NewlineMode) -> bool {
    match mode {
        NewlineMode::Anywhere => text.chars().any(is_line_break),
        NewlineMode::Leading => text.chars().next().is_some_and(is_line_break),
    }
}

/// Check if the text is empty
pub fn detect_empty_line(text: &str) -> bool {
    text.is_empty()
}

/// Check if nothing but whitespace is left once URLs are removed.
///
/// Empty text passes trivially.
pub fn detect_only_url(text: &str) -> bool {
    URL_REGEX.replace_all(text, "").trim().is_empty()
}

/// Check if the text has only symbols and no words
pub fn detect_no_words(text: &str) -> bool {
    SYMBOL_REGEX.replace_all(text, "").trim().is_empty()
}

/// Check if the target repeats the source, ignoring case
pub fn detect_untranslated_data(source: &str, target: &str) -> bool {
    source.to_lowercase() == target.to_lowercase()
}

/// Check if the text is in a language other than `code`.
///
/// Never fires for languages whose identification is unreliable. A failed
/// identification counts as a different language.
pub fn detect_different_language(identifier: &IdentifierAdapter<'_>, code: LanguageCode, text: &str) -> bool {
    if !code.is_identification_reliable() {
        return false;
    }
    !identifier.identify(text).is(code)
}

/// Check if the source and target columns are swapped.
///
/// Never fires when either language is unreliable to identify. Both sides are
/// always identified, and a failure on either side counts as swapped.
pub fn detect_reverse_alignment(
    identifier: &IdentifierAdapter<'_>,
    source: &str,
    target: &str,
    source_code: LanguageCode,
    target_code: LanguageCode,
) -> bool {
    if !source_code.is_identification_reliable() || !target_code.is_identification_reliable() {
        return false;
    }

    let source_identified = identifier.identify(source);
    let target_identified = identifier.identify(target);

    if source_identified.is_unknown() || target_identified.is_unknown() {
        return true;
    }

    source_identified.is(target_code) && target_identified.is(source_code)
}
