// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::{Result, anyhow};
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{Shell, generate};
use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError, error};
use std::io::Write;
use std::path::PathBuf;

use bitext_sanity::app_config::{self, Config};
use bitext_sanity::app_controller::Controller;

/// CLI Wrapper for LogLevel to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliLogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<CliLogLevel> for app_config::LogLevel {
    fn from(cli_level: CliLogLevel) -> Self {
        match cli_level {
            CliLogLevel::Error => app_config::LogLevel::Error,
            CliLogLevel::Warn => app_config::LogLevel::Warn,
            CliLogLevel::Info => app_config::LogLevel::Info,
            CliLogLevel::Debug => app_config::LogLevel::Debug,
            CliLogLevel::Trace => app_config::LogLevel::Trace,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate shell completions for bitext-sanity
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// bitext-sanity - Sanity checks for parallel corpora
///
/// Reads a tab-separated source/target corpus and writes a report with one
/// diagnosis per line.
#[derive(Parser, Debug)]
#[command(name = "bitext-sanity")]
#[command(version)]
#[command(about = "Sanity checks for tab-separated parallel corpora")]
#[command(args_conflicts_with_subcommands = true)]
#[command(long_about = "bitext-sanity diagnoses every line of a tab-separated parallel corpus.

EXAMPLES:
    bitext-sanity corpus.tsv hi ur                  # Writes corpus.tsv.errors.tsv
    bitext-sanity -o report.tsv corpus.tsv te kn    # Custom report path
    bitext-sanity -c sanity.json corpus.tsv gu pa   # Use a configuration file
    bitext-sanity completions bash > bitext-sanity.bash

SUPPORTED LANGUAGES:
    doi, gu, hi, kn, ks, or, pa, sd, te, ur
    Language detection is not available for Dogri (doi) and Kashmiri (ks).")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Tab-separated corpus file to validate
    #[arg(value_name = "FILE")]
    input_path: Option<PathBuf>,

    /// Source language code
    #[arg(value_name = "SRC_LANG")]
    source_language: Option<String>,

    /// Target language code
    #[arg(value_name = "TGT_LANG")]
    target_language: Option<String>,

    /// Report file path (default: <FILE>.errors.tsv)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Configuration file path
    #[arg(short, long)]
    config_path: Option<PathBuf>,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,

    /// Hide the progress bar
    #[arg(short, long)]
    quiet: bool,
}

// @struct: Custom logger implementation
struct CustomLogger {
    level: LevelFilter,
}

impl CustomLogger {
    // @creates: New logger with specified level
    fn new(level: LevelFilter) -> Self {
        CustomLogger { level }
    }

    // @initializes: Global logger
    fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        let logger = Box::new(CustomLogger::new(level));
        log::set_boxed_logger(logger)?;
        log::set_max_level(level);
        Ok(())
    }

    // @returns: ANSI color code for log level
    fn color_for_level(level: Level) -> &'static str {
        match level {
            Level::Error => "1;31",
            Level::Warn => "1;33",
            Level::Info => "1;32",
            Level::Debug => "1;36",
            Level::Trace => "1;35",
        }
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let now = chrono::Local::now().format("%H:%M:%S.%3f");

            let mut stderr = std::io::stderr();
            let _ = writeln!(
                stderr,
                "\x1B[{}m{} {:5} {}\x1B[0m",
                Self::color_for_level(record.level()),
                now,
                record.level(),
                record.args()
            );
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

fn main() -> Result<()> {
    // Start at trace and narrow with set_max_level once the config is known
    CustomLogger::init(LevelFilter::Trace)?;
    log::set_max_level(LevelFilter::Info);

    let cli = CommandLineOptions::parse();

    if let Some(Commands::Completions { shell }) = &cli.command {
        let mut cmd = CommandLineOptions::command();
        generate(*shell, &mut cmd, "bitext-sanity", &mut std::io::stdout());
        return Ok(());
    }

    if let Err(e) = run_validation(cli) {
        error!("{:#}", e);
        std::process::exit(1);
    }

    Ok(())
}

fn run_validation(options: CommandLineOptions) -> Result<()> {
    let input_path = options
        .input_path
        .ok_or_else(|| anyhow!("FILE is required when no subcommand is specified"))?;

    // Load configuration, or fall back to defaults when none is given
    let mut config = match &options.config_path {
        Some(path) => Config::load_or_create(path)?,
        None => Config::default(),
    };

    // Override config with CLI options if provided
    if let Some(source_lang) = options.source_language {
        config.source_language = source_lang;
    } else if options.config_path.is_none() {
        return Err(anyhow!("SRC_LANG is required unless a config file provides it"));
    }

    if let Some(target_lang) = options.target_language {
        config.target_language = target_lang;
    } else if options.config_path.is_none() {
        return Err(anyhow!("TGT_LANG is required unless a config file provides it"));
    }

    if let Some(log_level) = options.log_level {
        config.log_level = log_level.into();
    }
    log::set_max_level(config.log_level.to_level_filter());

    // Language checks happen here, before the corpus is opened
    let controller = Controller::with_config(config)?;

    let summary = controller.run(&input_path, options.output.as_deref(), !options.quiet)?;
    println!("Total number of errors in the file: {}", summary.error_lines);

    Ok(())
}
