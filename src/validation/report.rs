/*!
 * Corpus-level aggregation of line diagnoses.
 *
 * A `CorpusReport` is built once per run by folding the validation service
 * over every line pair in order. It is not modified afterwards.
 */

use log::debug;

use crate::corpus::LinePair;
use crate::errors::ConfigError;

use super::service::{Diagnosis, ValidationService};

/// A line pair together with its diagnosis
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportEntry {
    /// The split line
    pub pair: LinePair,
    /// What was found on it
    pub diagnosis: Diagnosis,
}

/// One row of the output table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportRow<'a> {
    pub source: &'a str,
    pub target: &'a str,
    pub diagnosis: String,
}

/// Diagnoses for a whole corpus, in input order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorpusReport {
    entries: Vec<ReportEntry>,
    error_line_count: usize,
}

impl CorpusReport {
    /// Diagnose every pair and collect the results.
    ///
    /// Fails only when there are no pairs at all.
    pub fn build(service: &ValidationService<'_>, pairs: Vec<LinePair>) -> Result<Self, ConfigError> {
        Self::build_with_progress(service, pairs, |_| {})
    }

    /// Like `build`, calling `on_entry` after each line is diagnosed
    pub fn build_with_progress<F>(
        service: &ValidationService<'_>,
        pairs: Vec<LinePair>,
        mut on_entry: F,
    ) -> Result<Self, ConfigError>
    where
        F: FnMut(&ReportEntry),
    {
        if pairs.is_empty() {
            return Err(ConfigError::EmptyInput);
        }

        let initial = CorpusReport {
            entries: Vec::with_capacity(pairs.len()),
            error_line_count: 0,
        };

        let report = pairs.into_iter().fold(initial, |mut report, pair| {
            let diagnosis = service.diagnose(&pair);
            let entry = ReportEntry { pair, diagnosis };
            on_entry(&entry);

            if !entry.diagnosis.is_ok() {
                report.error_line_count += 1;
            }
            report.entries.push(entry);
            report
        });

        debug!(
            "Corpus report: {} line(s), {} with errors",
            report.entries.len(),
            report.error_line_count
        );

        Ok(report)
    }

    /// All entries in input order
    pub fn entries(&self) -> &[ReportEntry] {
        &self.entries
    }

    /// Number of lines whose diagnosis is not OK
    pub fn error_line_count(&self) -> usize {
        self.error_line_count
    }

    /// Total number of lines
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the report holds no lines
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries whose diagnosis is not OK
    pub fn failed_entries(&self) -> impl Iterator<Item = &ReportEntry> {
        self.entries.iter().filter(|entry| !entry.diagnosis.is_ok())
    }

    /// The output table: source, target and diagnosis per line
    pub fn rows(&self) -> impl Iterator<Item = ReportRow<'_>> {
        self.entries.iter().map(|entry| ReportRow {
            source: &entry.pair.source,
            target: entry.pair.target_text(),
            diagnosis: entry.diagnosis.to_string(),
        })
    }
}
