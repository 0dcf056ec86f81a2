/*!
 * Validation module for bitext quality checks.
 *
 * This module diagnoses every line of a parallel corpus:
 * - Structural anomalies (tab count, leftover line breaks)
 * - Content-free lines (empty, URL only, symbols only)
 * - Untranslated pairs (target repeats source)
 * - Language identity (wrong language, swapped columns)
 *
 * # Architecture
 *
 * - `detectors`: The individual checks
 * - `service`: Composes detectors into one ordered diagnosis per line
 * - `report`: Folds diagnoses into a corpus report
 */

pub mod detectors;
pub mod report;
pub mod service;

// Re-export main types
pub use detectors::{Issue, NewlineMode, Side};
pub use report::{CorpusReport, ReportEntry, ReportRow};
pub use service::{Diagnosis, OK_DIAGNOSIS, ValidationConfig, ValidationService};
