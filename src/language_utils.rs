use isolang::Language;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::ConfigError;

/// Language utilities for the supported corpus languages
///
/// A run pairs two of ten Indic languages. Codes are accepted in their short
/// form (`hi`, `doi`) or as the matching ISO 639-3 code (`hin`), and are
/// cross-checked against `isolang` when a language identifier answers with
/// an arbitrary ISO language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LanguageCode {
    /// Dogri
    Doi,
    /// Gujarati
    Gu,
    /// Hindi
    Hi,
    /// Kannada
    Kn,
    /// Kashmiri
    Ks,
    /// Odia
    Or,
    /// Punjabi
    Pa,
    /// Sindhi
    Sd,
    /// Telugu
    Te,
    /// Urdu
    Ur,
}

impl LanguageCode {
    /// Every supported code, in alphabetical order
    pub const ALL: [LanguageCode; 10] = [
        LanguageCode::Doi,
        LanguageCode::Gu,
        LanguageCode::Hi,
        LanguageCode::Kn,
        LanguageCode::Ks,
        LanguageCode::Or,
        LanguageCode::Pa,
        LanguageCode::Sd,
        LanguageCode::Te,
        LanguageCode::Ur,
    ];

    /// Short code as written on the command line
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Doi => "doi",
            Self::Gu => "gu",
            Self::Hi => "hi",
            Self::Kn => "kn",
            Self::Ks => "ks",
            Self::Or => "or",
            Self::Pa => "pa",
            Self::Sd => "sd",
            Self::Te => "te",
            Self::Ur => "ur",
        }
    }

    /// ISO 639-3 codes naming this language. The first entry is canonical.
    fn iso_639_3(&self) -> &'static [&'static str] {
        match self {
            Self::Doi => &["doi", "dgo"],
            Self::Gu => &["guj"],
            Self::Hi => &["hin"],
            Self::Kn => &["kan"],
            Self::Ks => &["kas"],
            Self::Or => &["ori", "ory"],
            Self::Pa => &["pan"],
            Self::Sd => &["snd"],
            Self::Te => &["tel"],
            Self::Ur => &["urd"],
        }
    }

    /// English display name
    pub fn name(&self) -> &'static str {
        match self {
            Self::Doi => "Dogri",
            Self::Gu => "Gujarati",
            Self::Hi => "Hindi",
            Self::Kn => "Kannada",
            Self::Ks => "Kashmiri",
            Self::Or => "Odia",
            Self::Pa => "Punjabi",
            Self::Sd => "Sindhi",
            Self::Te => "Telugu",
            Self::Ur => "Urdu",
        }
    }

    /// Whether automatic language identification is attempted for this language.
    ///
    /// Dogri and Kashmiri are identified too poorly to be worth checking, so the
    /// language-mismatch and reverse-alignment detectors skip them entirely.
    pub fn is_identification_reliable(&self) -> bool {
        !matches!(self, Self::Doi | Self::Ks)
    }

    /// The `isolang` language for this code, if `isolang` knows it
    pub fn to_isolang(&self) -> Option<Language> {
        Language::from_639_1(self.as_str())
            .or_else(|| self.iso_639_3().iter().find_map(|code| Language::from_639_3(code)))
    }

    /// Map an arbitrary ISO language back to a supported code
    pub fn from_isolang(language: Language) -> Option<Self> {
        let part1 = language.to_639_1();
        let part3 = language.to_639_3();

        Self::ALL.into_iter().find(|code| {
            part1 == Some(code.as_str()) || code.iso_639_3().contains(&part3)
        })
    }
}

impl fmt::Display for LanguageCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for LanguageCode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized_code = s.trim().to_lowercase();

        Self::ALL
            .into_iter()
            .find(|code| {
                code.as_str() == normalized_code || code.iso_639_3().contains(&normalized_code.as_str())
            })
            .ok_or_else(|| ConfigError::UnsupportedLanguage(s.trim().to_string()))
    }
}

/// Validate a source/target pair for a run.
///
/// Both codes must be supported and they must differ.
pub fn validate_language_pair(source: &str, target: &str) -> Result<(LanguageCode, LanguageCode), ConfigError> {
    let source_code: LanguageCode = source.parse()?;
    let target_code: LanguageCode = target.parse()?;

    if source_code == target_code {
        return Err(ConfigError::SameLanguage(source_code));
    }

    Ok((source_code, target_code))
}
