use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use log::{debug, info, warn};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use crate::app_config::Config;
use crate::corpus::SplitOutcome;
use crate::errors::{AppError, ConfigError};
use crate::file_utils::FileManager;
use crate::identification::WhatlangIdentifier;
use crate::language_utils::LanguageCode;
use crate::validation::{CorpusReport, ReportEntry, ValidationConfig, ValidationService};

// @module: Application controller for corpus validation

/// Outcome of one validation run
#[derive(Debug, Clone)]
pub struct RunSummary {
    /// Where the report was written
    pub output_path: PathBuf,
    /// Lines read from the corpus
    pub total_lines: usize,
    /// Lines with at least one issue
    pub error_lines: usize,
    /// Wall-clock time of the run
    pub elapsed: Duration,
}

/// Main application controller for corpus validation
pub struct Controller {
    // @field: App configuration
    config: Config,

    // @field: Validated language pair
    source_language: LanguageCode,
    target_language: LanguageCode,

    // @field: Shared identifier, built once per run
    identifier: WhatlangIdentifier,
}

impl Controller {
    // @method: Create a new controller with the given configuration
    // @fails: Unsupported or identical language codes, before any file is read
    pub fn with_config(config: Config) -> Result<Self, ConfigError> {
        let (source_language, target_language) = config.validate()?;
        let identifier = WhatlangIdentifier::with_min_letters(config.checks.min_identification_letters);

        Ok(Self {
            config,
            source_language,
            target_language,
            identifier,
        })
    }

    /// Diagnose a corpus file without writing anything
    pub fn validate_file(&self, input_file: &Path) -> Result<CorpusReport, AppError> {
        self.validate_file_with_progress(input_file, &ProgressBar::hidden())
    }

    fn validate_file_with_progress(&self, input_file: &Path, progress_bar: &ProgressBar) -> Result<CorpusReport, AppError> {
        let pairs = FileManager::load_corpus(input_file)?;
        info!("The input file is loaded successfully ({} lines)", pairs.len());

        let service = ValidationService::new(
            ValidationConfig::from(&self.config.checks),
            self.source_language,
            self.target_language,
            &self.identifier,
        );

        progress_bar.set_length(pairs.len() as u64);
        let report = CorpusReport::build_with_progress(&service, pairs, |entry| {
            progress_bar.suspend(|| Self::log_entry(entry));
            progress_bar.inc(1);
        })?;
        progress_bar.finish_and_clear();

        Ok(report)
    }

    /// Run the main workflow: validate `input_file` and write the report
    pub fn run(&self, input_file: &Path, output_file: Option<&Path>, show_progress: bool) -> Result<RunSummary> {
        let start_time = Instant::now();

        if !FileManager::file_exists(input_file) {
            return Err(anyhow::anyhow!("Input file does not exist: {:?}", input_file));
        }

        let output_path = match output_file {
            Some(path) => path.to_path_buf(),
            None => FileManager::generate_output_path(input_file, &self.config.output.suffix),
        };

        info!(
            "Validating {:?} ({} -> {})",
            input_file,
            self.source_language.name(),
            self.target_language.name()
        );

        let progress_bar = if show_progress {
            Self::create_progress_bar()
        } else {
            ProgressBar::hidden()
        };

        let report = self
            .validate_file_with_progress(input_file, &progress_bar)
            .with_context(|| format!("Failed to validate {:?}", input_file))?;

        FileManager::write_report(&output_path, &report, self.config.output.write_header)?;
        debug!("Report written to {:?}", output_path);

        let elapsed = start_time.elapsed();
        info!("Total number of errors in the file: {}", report.error_line_count());
        info!(
            "Validated {} line(s) in {}. Report: {:?}",
            report.len(),
            Self::format_duration(elapsed),
            output_path
        );

        Ok(RunSummary {
            output_path,
            total_lines: report.len(),
            error_lines: report.error_line_count(),
            elapsed,
        })
    }

    fn log_entry(entry: &ReportEntry) {
        let line_number = entry.pair.line_number();

        match entry.pair.outcome {
            SplitOutcome::MissingTarget => warn!(
                "No tab in line number {}: this is either an empty line or a line with only source text.",
                line_number
            ),
            SplitOutcome::AmbiguousTabs => warn!(
                "Multiple tabs exist in line number {}: the entire line is considered as source text.",
                line_number
            ),
            SplitOutcome::Normal => {}
        }

        if !entry.diagnosis.is_ok() {
            warn!("Error at line no. {}: {}", line_number, entry.diagnosis);
        }
    }

    fn create_progress_bar() -> ProgressBar {
        let progress_bar = ProgressBar::new(0);
        let style = ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} lines ({percent}%) {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar());
        progress_bar.set_style(style.progress_chars("█▓▒░"));
        progress_bar.set_message("Validating");
        progress_bar
    }

    fn format_duration(duration: Duration) -> String {
        let total_seconds = duration.as_secs();
        let hours = total_seconds / 3600;
        let minutes = (total_seconds % 3600) / 60;
        let seconds = total_seconds % 60;

        if hours > 0 {
            format!("{}h {}m {}s", hours, minutes, seconds)
        } else if minutes > 0 {
            format!("{}m {}s", minutes, seconds)
        } else {
            format!("{}.{:03}s", seconds, duration.subsec_millis())
        }
    }
}
