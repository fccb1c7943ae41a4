//! Validated run configuration.

use std::{num::NonZeroU64, path::Path};

use crate::{
    cli::{Args, LogLevel},
    counter::CountOptions,
    error::KmerCountError,
    format::SequenceFormat,
    input::Input,
    kmer::KmerLength,
    output::{Output, OutputFormat},
    progress::DEFAULT_REPORT_INTERVAL,
};

/// Everything a counting run needs, checked before any input is read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub input: Input,
    pub output: Output,
    pub k: KmerLength,
    pub revcomp: bool,
    pub sort: bool,
    pub format: SequenceFormat,
    pub progress_interval: NonZeroU64,
    pub log_level: LogLevel,
    pub strict: bool,
    pub output_format: OutputFormat,
}

impl Config {
    /// A configuration with default flags: FASTA input, forward strand only,
    /// unsorted text output.
    ///
    /// # Errors
    ///
    /// Returns [`KmerCountError::InvalidKmerLength`] if `k` is zero.
    pub fn new(k: usize, input: &Path, output: &Path) -> Result<Self, KmerCountError> {
        Ok(Self {
            input: Input::from_path(input),
            output: Output::from_path(output),
            k: KmerLength::new(k)?,
            revcomp: false,
            sort: false,
            format: SequenceFormat::Fasta,
            progress_interval: DEFAULT_REPORT_INTERVAL,
            log_level: LogLevel::default(),
            strict: false,
            output_format: OutputFormat::Text,
        })
    }

    /// Builds the configuration from parsed command-line arguments.
    ///
    /// # Errors
    ///
    /// Returns an error if `k` or the report interval is zero.
    pub fn from_args(args: Args) -> Result<Self, KmerCountError> {
        Ok(Self {
            input: Input::from_path(&args.input),
            output: Output::from_path(&args.output),
            k: KmerLength::new(args.k)?,
            revcomp: args.revcomp,
            sort: args.sort,
            format: SequenceFormat::from_fastq_flag(args.fastq),
            progress_interval: NonZeroU64::new(args.freqrep)
                .ok_or(KmerCountError::InvalidReportInterval)?,
            log_level: args.logging,
            strict: args.strict,
            output_format: args.format,
        })
    }

    /// Counting switches derived from this configuration.
    #[must_use]
    pub const fn count_options(&self) -> CountOptions {
        CountOptions {
            revcomp: self.revcomp,
            strict: self.strict,
        }
    }
}
