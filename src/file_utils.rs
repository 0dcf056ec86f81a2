use anyhow::{Context, Result};
use std::fs;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::corpus::{LinePair, parse_corpus};
use crate::errors::{AppError, ConfigError};
use crate::validation::CorpusReport;

// @module: File reading and report writing

/// Column names of the report table
pub const REPORT_HEADER: [&str; 3] = ["source", "target", "diagnosis"];

// @struct: File operations utility
pub struct FileManager;

impl FileManager {
    // @checks: File existence
    pub fn file_exists<P: AsRef<Path>>(path: P) -> bool {
        path.as_ref().exists() && path.as_ref().is_file()
    }

    // @creates: Directory and parents if needed
    pub fn ensure_dir<P: AsRef<Path>>(path: P) -> Result<()> {
        let path = path.as_ref();
        if !path.as_os_str().is_empty() && !path.exists() {
            fs::create_dir_all(path)?;
        }
        Ok(())
    }

    // @generates: Report path next to the input, e.g. corpus.tsv -> corpus.tsv.errors.tsv
    pub fn generate_output_path<P: AsRef<Path>>(input_file: P, suffix: &str) -> PathBuf {
        let mut output = input_file.as_ref().as_os_str().to_os_string();
        output.push(suffix);
        PathBuf::from(output)
    }

    /// Read and split a corpus file.
    ///
    /// A file without a single line is a configuration error.
    pub fn load_corpus<P: AsRef<Path>>(path: P) -> Result<Vec<LinePair>, AppError> {
        let content = fs::read_to_string(path.as_ref())
            .map_err(|e| AppError::File(format!("Failed to read file {:?}: {}", path.as_ref(), e)))?;
        let pairs = parse_corpus(&content);

        if pairs.is_empty() {
            return Err(ConfigError::EmptyInput.into());
        }

        Ok(pairs)
    }

    /// Write the report table as TSV
    pub fn write_report<P: AsRef<Path>>(path: P, report: &CorpusReport, write_header: bool) -> Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            Self::ensure_dir(parent)?;
        }

        let file = File::create(path)
            .with_context(|| format!("Failed to create report file: {:?}", path))?;
        let mut writer = BufWriter::new(file);
        write_report_to(&mut writer, report, write_header)
            .with_context(|| format!("Failed to write report file: {:?}", path))?;
        writer.flush()?;

        Ok(())
    }
}

/// Write the report table as TSV to any writer
pub fn write_report_to<W: Write>(writer: &mut W, report: &CorpusReport, write_header: bool) -> std::io::Result<()> {
    if write_header {
        writeln!(writer, "{}", REPORT_HEADER.join("\t"))?;
    }

    for row in report.rows() {
        writeln!(
            writer,
            "{}\t{}\t{}",
            escape_tsv_field(row.source),
            escape_tsv_field(row.target),
            escape_tsv_field(&row.diagnosis)
        )?;
    }

    Ok(())
}

/// Quote a field that would otherwise break the TSV layout
pub fn escape_tsv_field(field: &str) -> String {
    if field.contains(['\t', '"', '\n', '\r']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}
