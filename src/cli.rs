//! Command-line interface definition.

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use crate::output::OutputFormat;

/// Count k-mers (fixed-length words) in FASTA or FASTQ files.
///
/// Writes one `word count` line per distinct k-mer.
#[derive(Parser, Debug)]
#[command(name = "kmercount")]
#[command(version, author, about, long_about = None)]
pub struct Args {
    /// Input FASTA/FASTQ file, optionally gzipped (`.gz`); `-` for stdin
    pub input: PathBuf,

    /// Output file; `-` for stdout
    pub output: PathBuf,

    /// K-mer size (strictly positive)
    #[arg(short = 'k', long = "kmersize", value_parser = parse_k)]
    pub k: usize,

    /// Also count the reverse complement of every k-mer
    #[arg(short, long)]
    pub revcomp: bool,

    /// Input is in FASTQ format
    #[arg(short = 'q', long)]
    pub fastq: bool,

    /// Print k-mers in sorted order
    #[arg(short, long)]
    pub sort: bool,

    /// Report progress every N sequences (shown at DEBUG level)
    #[arg(short = 'e', long, default_value = "1000000", value_parser = parse_freqrep)]
    pub freqrep: u64,

    /// Logging level to display
    #[arg(short, long, value_enum, ignore_case = true, default_value = "WARNING")]
    pub logging: LogLevel,

    /// Reject k-mers containing characters other than A, C, G, T
    #[arg(long)]
    pub strict: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,
}

/// Diagnostic verbosity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
#[value(rename_all = "UPPER")]
pub enum LogLevel {
    Debug,
    Info,
    #[default]
    Warning,
    Error,
}

impl LogLevel {
    /// The matching `tracing` level.
    #[must_use]
    pub const fn as_tracing(self) -> tracing::Level {
        match self {
            Self::Debug => tracing::Level::DEBUG,
            Self::Info => tracing::Level::INFO,
            Self::Warning => tracing::Level::WARN,
            Self::Error => tracing::Level::ERROR,
        }
    }
}

fn parse_k(s: &str) -> Result<usize, String> {
    let k: i64 = s
        .parse()
        .map_err(|_| format!("'{s}' is not a valid number"))?;
    if k < 1 {
        return Err(format!(
            "the word size must be strictly positive (found k={k})"
        ));
    }
    usize::try_from(k).map_err(|e| e.to_string())
}

fn parse_freqrep(s: &str) -> Result<u64, String> {
    let n: u64 = s
        .parse()
        .map_err(|_| format!("'{s}' is not a valid number"))?;
    if n == 0 {
        return Err("report interval must be strictly positive".to_string());
    }
    Ok(n)
}
