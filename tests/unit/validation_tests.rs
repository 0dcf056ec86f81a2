/*!
 * Tests for detector composition and line diagnoses
 */

use bitext_sanity::corpus::LinePair;
use bitext_sanity::identification::{MockIdentifier, WhatlangIdentifier};
use bitext_sanity::language_utils::LanguageCode;
use bitext_sanity::validation::{Issue, NewlineMode, Side, ValidationConfig, ValidationService};
use crate::common::{self, ARABIC, HINDI, MARATHI, URDU};

/// Clean one-tab lines in the declared languages are OK
#[test]
fn test_diagnose_withCleanPairsInEveryReliablePair_shouldBeOk() {
    let identifier = WhatlangIdentifier::new();
    let samples = [
        (LanguageCode::Hi, HINDI),
        (LanguageCode::Ur, URDU),
        (LanguageCode::Gu, "નમસ્તે દુનિયા"),
        (LanguageCode::Pa, "ਸਤ ਸ੍ਰੀ ਅਕਾਲ ਜੀ"),
        (LanguageCode::Te, "నమస్కారం ప్రపంచం"),
        (LanguageCode::Kn, "ನಮಸ್ಕಾರ ಜಗತ್ತು"),
        (LanguageCode::Or, "ନମସ୍କାର ଦୁନିଆ"),
    ];

    for (source_code, source_text) in samples {
        for (target_code, target_text) in samples {
            if source_code == target_code {
                continue;
            }
            let line = format!("{}\t{}", source_text, target_text);
            let diagnosis = common::diagnose_with(&identifier, &line, source_code, target_code);
            assert!(
                diagnosis.is_ok(),
                "{} -> {} should be OK, got: {}",
                source_code,
                target_code,
                diagnosis
            );
        }
    }
}

/// Another language written in the declared script is still a mismatch
#[test]
fn test_diagnose_withSameScriptNeighbours_shouldWarnAboutLanguage() {
    let identifier = WhatlangIdentifier::new();
    let line = format!("{}\t{}", MARATHI, ARABIC);

    let diagnosis = common::diagnose_with(&identifier, &line, LanguageCode::Hi, LanguageCode::Ur);

    assert!(diagnosis.contains(Issue::DifferentLanguage(Side::Source)), "{}", diagnosis);
    assert!(diagnosis.contains(Issue::DifferentLanguage(Side::Target)), "{}", diagnosis);
}

/// Case-insensitive duplicates are untranslated
#[test]
fn test_diagnose_withIdenticalSides_shouldReportUntranslated() {
    let identifier = common::sample_identifier();

    for line in ["Same Text\tsame text", "नमस्ते\tनमस्ते", "ABC\tabc"] {
        let diagnosis = common::diagnose_with(&identifier, line, LanguageCode::Hi, LanguageCode::Ur);
        assert!(diagnosis.to_string().contains("Untranslated data!"), "{}", line);
    }
}

/// Zero-tab lines always carry the missing-target message
#[test]
fn test_diagnose_withoutTab_shouldAlwaysReportMissingTarget() {
    let identifier = common::sample_identifier();

    for line in ["", "   ", HINDI, "https://example.com", "!!!"] {
        let diagnosis = common::diagnose_with(&identifier, line, LanguageCode::Hi, LanguageCode::Ur);
        assert_eq!(diagnosis.issues()[0], Issue::MissingTarget, "{:?}", line);
        assert!(diagnosis.to_string().starts_with("No tab detected"));
    }
}

/// Dogri and Kashmiri never trigger identification-based detectors
#[test]
fn test_diagnose_withUnreliableLanguages_shouldNeverWarnAboutLanguage() {
    let identifier = MockIdentifier::failing();
    let pairs = [
        (LanguageCode::Ks, LanguageCode::Hi),
        (LanguageCode::Hi, LanguageCode::Ks),
        (LanguageCode::Doi, LanguageCode::Ur),
        (LanguageCode::Ks, LanguageCode::Doi),
    ];

    for (source, target) in pairs {
        for line in ["Hello\tWorld", "\t", "नमस्ते\tہیلو", "x"] {
            let diagnosis = common::diagnose_with(&identifier, line, source, target);
            assert!(!diagnosis.contains(Issue::ReverseAlignment));
            if !source.is_identification_reliable() {
                assert!(!diagnosis.contains(Issue::DifferentLanguage(Side::Source)));
            }
            if !target.is_identification_reliable() {
                assert!(!diagnosis.contains(Issue::DifferentLanguage(Side::Target)));
            }
        }
    }
}

/// English and French text declared as Hindi/Urdu
#[test]
fn test_diagnose_withForeignText_shouldWarnAboutLanguage() {
    let identifier = WhatlangIdentifier::new();

    let diagnosis = common::diagnose_with(
        &identifier,
        "Hello world\tBonjour monde",
        LanguageCode::Hi,
        LanguageCode::Ur,
    );

    assert!(diagnosis.to_string().contains("Warning! Different language may be present"));
}

/// Swapped Hindi/Urdu columns
#[test]
fn test_diagnose_withSwappedColumns_shouldReportWrongAlignment() {
    let identifier = WhatlangIdentifier::new();
    let line = format!("{}\t{}", URDU, HINDI);

    let diagnosis = common::diagnose_with(&identifier, &line, LanguageCode::Hi, LanguageCode::Ur);

    assert!(diagnosis.to_string().contains("Warning! Probable Wrong Alignment!"));
}

/// URL-only source
#[test]
fn test_diagnose_withUrlOnlySource_shouldReportUrl() {
    let identifier = common::sample_identifier();

    let diagnosis = common::diagnose_with(
        &identifier,
        &format!("https://example.com/path\t{}", URDU),
        LanguageCode::Te,
        LanguageCode::Ur,
    );

    assert!(diagnosis.to_string().contains("Only URL detected in source!"));
}

/// An empty side leaves nothing once URLs are stripped, so both messages fire in order
#[test]
fn test_diagnose_withEmptySource_shouldReportUrlOnlyBeforeEmptyLine() {
    let identifier = common::sample_identifier();

    let diagnosis = common::diagnose_with(
        &identifier,
        &format!("\t{}", URDU),
        LanguageCode::Hi,
        LanguageCode::Ur,
    );

    assert_eq!(
        diagnosis.to_string(),
        "Only URL detected in source! \
         Empty line detected in source! \
         Warning! Probable Wrong Alignment!"
    );
}

/// A confident foreign answer is a language mismatch but not a swap
#[test]
fn test_diagnose_withForeignIdentification_shouldNotReportSwap() {
    let identifier = MockIdentifier::foreign(isolang::Language::Eng);

    let diagnosis = common::diagnose_with(&identifier, "Hello\tWorld", LanguageCode::Hi, LanguageCode::Ur);

    assert_eq!(
        diagnosis.issues(),
        &[
            Issue::DifferentLanguage(Side::Source),
            Issue::DifferentLanguage(Side::Target),
        ]
    );
}

/// Messages follow the fixed detector order when many fire at once
#[test]
fn test_diagnose_withManyIssues_shouldKeepFixedOrder() {
    let identifier = MockIdentifier::scripted(&[("www.example.com", LanguageCode::Ur)]);

    let diagnosis = common::diagnose_with(
        &identifier,
        "www.example.com\t...",
        LanguageCode::Hi,
        LanguageCode::Ur,
    );

    assert_eq!(
        diagnosis.to_string(),
        "Only URL detected in source! \
         No word detected in target! \
         Warning! Different language may be present in source text! \
         Warning! Different language may be present in target text! \
         Warning! Probable Wrong Alignment!"
    );
}

/// Both newline modes, side by side
#[test]
fn test_diagnose_withNewlineModes_shouldDifferOnInnerBreaks() {
    let source = "नमस्ते\u{2028}दुनिया";
    let identifier = MockIdentifier::scripted(&[(source, LanguageCode::Hi), (URDU, LanguageCode::Ur)]);
    let line = format!("{}\t{}", source, URDU);
    let pair = LinePair::split(0, &line);

    let anywhere = ValidationService::new(
        ValidationConfig { newline_mode: NewlineMode::Anywhere },
        LanguageCode::Hi,
        LanguageCode::Ur,
        &identifier,
    );
    let leading = ValidationService::new(
        ValidationConfig { newline_mode: NewlineMode::Leading },
        LanguageCode::Hi,
        LanguageCode::Ur,
        &identifier,
    );

    assert_eq!(anywhere.diagnose(&pair).issues(), &[Issue::InsertedNewline(Side::Source)]);
    assert!(leading.diagnose(&pair).is_ok());
}

/// An empty target still goes through reverse-alignment identification
#[test]
fn test_diagnose_withEmptyTarget_shouldReportWrongAlignment() {
    let identifier = common::sample_identifier();

    let diagnosis = common::diagnose_with(
        &identifier,
        &format!("{}\t", HINDI),
        LanguageCode::Hi,
        LanguageCode::Ur,
    );

    assert_eq!(
        diagnosis.issues(),
        &[
            Issue::OnlyUrl(Side::Target),
            Issue::EmptyLine(Side::Target),
            Issue::ReverseAlignment,
        ]
    );
}
