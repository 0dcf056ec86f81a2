/*!
 * Integration tests for application lifecycle
 */

use anyhow::Result;
use std::fs;

use bitext_sanity::app_config::Config;
use bitext_sanity::app_controller::Controller;
use bitext_sanity::file_utils::REPORT_HEADER;
use bitext_sanity::validation::NewlineMode;
use crate::common;

/// Test the controller initialization with default config
#[test]
fn test_controller_initialization_withDefaultConfig_shouldSucceed() {
    let controller = Controller::with_config(Config::default());
    assert!(controller.is_ok());
}

/// The report lands next to the input when no output path is given
#[test]
fn test_run_withDefaultOutput_shouldWriteReportNextToInput() -> Result<()> {
    common::init_test_logging();
    let temp_dir = common::create_temp_dir()?;
    let corpus_path = common::create_test_corpus(temp_dir.path(), "corpus.tsv")?;

    let controller = Controller::with_config(Config::default())?;
    let summary = controller.run(&corpus_path, None, false)?;

    let expected_path = temp_dir.path().join("corpus.tsv.errors.tsv");
    assert_eq!(summary.output_path, expected_path);
    assert_eq!(summary.total_lines, 6);
    assert_eq!(summary.error_lines, 5);

    let content = fs::read_to_string(&expected_path)?;
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 7);
    assert_eq!(lines[0], REPORT_HEADER.join("\t"));
    assert_eq!(lines[1], format!("{}\t{}\tOK", common::HINDI, common::URDU));

    Ok(())
}

/// A custom output path is honored, including missing parent directories
#[test]
fn test_run_withCustomOutput_shouldCreateParentDirectories() -> Result<()> {
    common::init_test_logging();
    let temp_dir = common::create_temp_dir()?;
    let corpus_path = common::create_test_corpus(temp_dir.path(), "corpus.tsv")?;
    let output_path = temp_dir.path().join("reports").join("hi-ur.tsv");

    let controller = Controller::with_config(Config::default())?;
    let summary = controller.run(&corpus_path, Some(&output_path), false)?;

    assert_eq!(summary.output_path, output_path);
    assert!(output_path.exists());
    assert!(!temp_dir.path().join("corpus.tsv.errors.tsv").exists());

    Ok(())
}

/// Output settings from the configuration shape the report
#[test]
fn test_run_withHeaderDisabled_shouldWriteOnlyRows() -> Result<()> {
    common::init_test_logging();
    let temp_dir = common::create_temp_dir()?;
    let corpus_path = common::create_test_corpus(temp_dir.path(), "corpus.tsv")?;

    let mut config = Config::default();
    config.output.write_header = false;
    config.output.suffix = ".report".to_string();

    let controller = Controller::with_config(config)?;
    let summary = controller.run(&corpus_path, None, false)?;

    assert_eq!(summary.output_path, temp_dir.path().join("corpus.tsv.report"));
    let content = fs::read_to_string(&summary.output_path)?;
    assert_eq!(content.lines().count(), 6);
    assert!(content.starts_with(common::HINDI));

    Ok(())
}

/// A configuration file on disk drives the run end to end
#[test]
fn test_run_withConfigFile_shouldUseItsLanguagesAndChecks() -> Result<()> {
    common::init_test_logging();
    let temp_dir = common::create_temp_dir()?;
    let config_path = common::create_test_file(
        temp_dir.path(),
        "sanity.json",
        r#"{"source_language": "hi", "target_language": "ur", "checks": {"newline_mode": "leading"}}"#,
    )?;
    let content = format!("{}\u{2028}{}\t{}\n", common::HINDI, common::HINDI, common::URDU);
    let corpus_path = common::create_test_file(temp_dir.path(), "corpus.tsv", &content)?;

    let config = Config::load_or_create(&config_path)?;
    assert_eq!(config.checks.newline_mode, NewlineMode::Leading);

    let controller = Controller::with_config(config)?;
    let summary = controller.run(&corpus_path, None, false)?;

    assert_eq!(summary.error_lines, 0);

    Ok(())
}

/// A missing input file fails without writing a report
#[test]
fn test_run_withMissingInput_shouldFail() -> Result<()> {
    common::init_test_logging();
    let temp_dir = common::create_temp_dir()?;
    let corpus_path = temp_dir.path().join("missing.tsv");

    let controller = Controller::with_config(Config::default())?;
    let result = controller.run(&corpus_path, None, false);

    assert!(result.is_err());
    assert!(!temp_dir.path().join("missing.tsv.errors.tsv").exists());

    Ok(())
}

/// An empty corpus fails and leaves no report behind
#[test]
fn test_run_withEmptyInput_shouldFailWithoutReport() -> Result<()> {
    common::init_test_logging();
    let temp_dir = common::create_temp_dir()?;
    let corpus_path = common::create_test_file(temp_dir.path(), "empty.tsv", "")?;

    let controller = Controller::with_config(Config::default())?;
    let result = controller.run(&corpus_path, None, false);

    let error = result.err().map(|e| format!("{:#}", e)).unwrap_or_default();
    assert!(error.contains("The input file is empty"));
    assert!(!temp_dir.path().join("empty.tsv.errors.tsv").exists());

    Ok(())
}
