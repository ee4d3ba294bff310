//! Shared implementation of the retorno-extract command.

use crate::report;
use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use rayon::prelude::*;
use retorno_importer::{Encoding, ImportError, ImportResult, ImporterConfig, ImporterRegistry};
use serde::Serialize;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::Level;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::EnvFilter;

/// Output format for extracted files.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Settlement listing and diagnostics (default)
    #[default]
    Text,
    /// JSON output for tooling integration
    Json,
}

/// Decode CNAB400 retorno files and list their settlements.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Retorno files to decode
    #[arg(value_name = "FILE", required = true)]
    pub files: Vec<PathBuf>,

    /// Issuer bank code (identified from the header when omitted)
    #[arg(short, long, value_name = "CODE")]
    pub bank: Option<String>,

    /// Importer configuration file (JSON)
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// File encoding (utf8 or latin1)
    #[arg(short, long, value_name = "ENCODING")]
    pub encoding: Option<Encoding>,

    /// Output format (text or json)
    #[arg(long, short = 'f', value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Print plain decimals (1234.56) instead of 1.234,56
    #[arg(short, long)]
    pub machine: bool,

    /// Reject files with decode errors or a trailer count mismatch
    #[arg(long)]
    pub strict: bool,

    /// Treat an empty file as an error
    #[arg(long)]
    pub require_header: bool,

    /// Show verbose output including timing information
    #[arg(short, long)]
    pub verbose: bool,

    /// Suppress all output (just use exit code)
    #[arg(short, long)]
    pub quiet: bool,
}

impl Args {
    /// Build the importer configuration: the config file, then flags on top.
    pub fn importer_config(&self) -> Result<ImporterConfig> {
        let mut config = match &self.config {
            Some(path) => ImporterConfig::from_json_file(path)?,
            None => ImporterConfig::default(),
        };

        if let Some(bank) = &self.bank {
            config.bank = Some(bank.clone());
        }
        if let Some(encoding) = self.encoding {
            config.encoding = encoding;
        }
        config.strict |= self.strict;
        config.require_header |= self.require_header;
        Ok(config)
    }
}

/// Outcome of one file.
#[derive(Debug)]
pub struct FileOutcome {
    /// Path as given on the command line.
    pub path: PathBuf,
    /// The import result, or why there is none.
    pub result: Result<ImportResult>,
}

impl FileOutcome {
    /// Exit code contribution of this file.
    ///
    /// Files that decode with errors, or that a policy rejected, give 1.
    /// Anything that prevented decoding gives 2.
    pub fn exit_code(&self) -> u8 {
        match &self.result {
            Ok(result) if result.has_errors() => 1,
            Ok(_) => 0,
            Err(err) => match err.downcast_ref::<ImportError>() {
                Some(ImportError::Rejected { .. } | ImportError::MissingHeader) => 1,
                _ => 2,
            },
        }
    }

    fn counts(&self) -> (usize, usize) {
        match &self.result {
            Ok(result) => (
                result.error_count(),
                result.diagnostics.len() - result.error_count() + result.warnings.len(),
            ),
            Err(_) => (1, 0),
        }
    }
}

/// One file in JSON output.
#[derive(Debug, Serialize)]
pub struct JsonFile<'a> {
    /// Source file path
    pub file: String,
    /// Import result, when the file could be decoded
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<&'a ImportResult>,
    /// Failure message, when it could not
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// JSON output structure for all files.
#[derive(Debug, Serialize)]
pub struct JsonOutput<'a> {
    /// Per-file results
    pub files: Vec<JsonFile<'a>>,
    /// Total error count
    pub error_count: usize,
    /// Total warning count
    pub warning_count: usize,
}

impl<'a> JsonOutput<'a> {
    /// Collect the JSON view of all outcomes.
    pub fn new(outcomes: &'a [FileOutcome]) -> Self {
        let (error_count, warning_count) = totals(outcomes);
        let files = outcomes
            .iter()
            .map(|outcome| match &outcome.result {
                Ok(result) => JsonFile {
                    file: outcome.path.display().to_string(),
                    result: Some(result),
                    error: None,
                },
                Err(err) => JsonFile {
                    file: outcome.path.display().to_string(),
                    result: None,
                    error: Some(format!("{err:#}")),
                },
            })
            .collect();
        Self {
            files,
            error_count,
            warning_count,
        }
    }
}

fn totals(outcomes: &[FileOutcome]) -> (usize, usize) {
    outcomes
        .iter()
        .map(FileOutcome::counts)
        .fold((0, 0), |(e, w), (de, dw)| (e + de, w + dw))
}

/// Decode every file in parallel, keeping command-line order.
pub fn extract_all(
    files: &[PathBuf],
    registry: &ImporterRegistry,
    config: &ImporterConfig,
) -> Vec<FileOutcome> {
    files
        .par_iter()
        .map(|path| {
            let _span = tracing::info_span!("extract", file = %path.display()).entered();
            FileOutcome {
                path: path.clone(),
                result: registry.extract_file(path, config),
            }
        })
        .collect()
}

fn write_text<W: Write>(outcome: &FileOutcome, human: bool, writer: &mut W) -> Result<()> {
    match &outcome.result {
        Ok(result) => {
            report::write_listing(&outcome.path, result, human, writer)?;
            report::write_diagnostics(&outcome.path, result, writer)?;
        }
        Err(err) => writeln!(writer, "{}: error: {err:#}", outcome.path.display())?,
    }
    Ok(())
}

fn run(args: &Args) -> Result<ExitCode> {
    let start = std::time::Instant::now();
    let config = args.importer_config()?;
    let registry = ImporterRegistry::with_defaults();

    let outcomes = extract_all(&args.files, &registry, &config);
    let exit_code = outcomes.iter().map(FileOutcome::exit_code).max().unwrap_or(0);

    if !args.quiet {
        let mut stdout = io::stdout().lock();
        match args.format {
            OutputFormat::Json => {
                let output = JsonOutput::new(&outcomes);
                serde_json::to_writer_pretty(&mut stdout, &output)
                    .context("Failed to write JSON output")?;
                writeln!(stdout)?;
            }
            OutputFormat::Text => {
                for (i, outcome) in outcomes.iter().enumerate() {
                    if i > 0 {
                        writeln!(stdout)?;
                    }
                    write_text(outcome, !args.machine, &mut stdout)?;
                }
                let (errors, warnings) = totals(&outcomes);
                writeln!(stdout)?;
                report::print_summary(errors, warnings, &mut stdout)?;
            }
        }
    }

    if args.verbose {
        let entries: usize = outcomes
            .iter()
            .filter_map(|o| o.result.as_ref().ok())
            .map(|r| r.entries.len())
            .sum();
        eprintln!(
            "Extracted {entries} entries from {} files in {:.2?}",
            outcomes.len(),
            start.elapsed()
        );
    }

    Ok(ExitCode::from(exit_code))
}

fn init_tracing(verbose: bool) {
    if verbose {
        tracing_subscriber::fmt()
            .with_max_level(Level::DEBUG)
            .with_span_events(FmtSpan::CLOSE)
            .with_writer(io::stderr)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .with_writer(io::stderr)
            .init();
    }
}

/// Main entry point for the extract command.
pub fn main() -> ExitCode {
    main_with_name("retorno-extract")
}

/// Main entry point with a custom binary name.
pub fn main_with_name(bin_name: &str) -> ExitCode {
    let args = Args::parse();
    init_tracing(args.verbose);

    match run(&args) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("{bin_name}: error: {e:#}");
            ExitCode::from(2)
        }
    }
}
