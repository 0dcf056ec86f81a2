/*!
 * Statistical language identification backed by `whatlang`.
 *
 * `whatlang` first settles the script and then ranks the languages written in
 * it by trigram profile, so Marathi or Nepali in a Hindi column and Arabic or
 * Persian in an Urdu column come back as themselves. Sindhi has no profile of
 * its own; Arabic-script text is read as Sindhi when letters only Sindhi uses
 * outnumber letters only Urdu uses.
 */

use isolang::Language;
use log::trace;
use whatlang::{Lang, Script};

use super::LanguageIdentifier;
use crate::errors::IdentificationError;

/// Default minimum number of letters before a prediction is attempted
pub const DEFAULT_MIN_LETTERS: usize = 1;

/// Letters found in Sindhi orthography but not in Urdu
const SINDHI_ONLY: &[char] = &[
    '\u{067A}', '\u{067B}', '\u{067D}', '\u{067F}', '\u{0680}', '\u{0683}', '\u{0684}',
    '\u{0687}', '\u{068A}', '\u{068C}', '\u{068D}', '\u{068F}', '\u{0699}', '\u{06A6}',
    '\u{06AA}', '\u{06B1}', '\u{06B3}', '\u{06BB}',
];

/// Letters found in Urdu orthography but not in Sindhi
const URDU_ONLY: &[char] = &['\u{0679}', '\u{0688}', '\u{0691}', '\u{06BA}', '\u{06D2}'];

/// Identifies languages with `whatlang`, refusing answers it is not sure of
#[derive(Debug, Clone)]
pub struct WhatlangIdentifier {
    min_letters: usize,
}

impl WhatlangIdentifier {
    /// Create an identifier with the default letter threshold
    pub fn new() -> Self {
        Self::with_min_letters(DEFAULT_MIN_LETTERS)
    }

    /// Create an identifier that refuses texts with fewer than `min_letters` letters
    pub fn with_min_letters(min_letters: usize) -> Self {
        Self {
            min_letters: min_letters.max(1),
        }
    }

    fn is_sindhi(text: &str) -> bool {
        let (sindhi, urdu) = text.chars().fold((0usize, 0usize), |(sindhi, urdu), c| {
            if SINDHI_ONLY.contains(&c) {
                (sindhi + 1, urdu)
            } else if URDU_ONLY.contains(&c) {
                (sindhi, urdu + 1)
            } else {
                (sindhi, urdu)
            }
        });
        sindhi > urdu
    }

    fn to_language(lang: Lang) -> Result<Language, IdentificationError> {
        Language::from_639_3(lang.code())
            .ok_or_else(|| IdentificationError::Model(format!("no ISO 639-3 entry for '{}'", lang.code())))
    }
}

impl Default for WhatlangIdentifier {
    fn default() -> Self {
        Self::new()
    }
}

impl LanguageIdentifier for WhatlangIdentifier {
    fn predict(&self, text: &str) -> Result<Language, IdentificationError> {
        let letters = text.chars().filter(|c| c.is_alphabetic()).count();
        if letters < self.min_letters {
            return Err(IdentificationError::InsufficientText {
                letters,
                minimum: self.min_letters,
            });
        }

        let info = whatlang::detect(text).ok_or(IdentificationError::UnrecognizedScript)?;
        trace!(
            "whatlang: {} ({:?}), confidence {:.2}",
            info.lang().code(),
            info.script(),
            info.confidence()
        );

        if info.script() == Script::Arabic && Self::is_sindhi(text) {
            return Ok(Language::Snd);
        }

        if !info.is_reliable() {
            return Err(IdentificationError::Unreliable(info.lang().code().to_string()));
        }

        Self::to_language(info.lang())
    }
}
