//! Builder pattern API for ergonomic k-mer counting.
//!
//! This module provides a fluent builder interface for configuring and executing
//! k-mer counting operations.
//!
//! # Example
//!
//! ```rust,no_run
//! use kmercount::builder::KmerCounter;
//!
//! let counts = KmerCounter::new()
//!     .k(21)?
//!     .revcomp(true)
//!     .count("genome.fa")?;
//!
//! for (kmer, count) in counts.sorted() {
//!     println!("{} {count}", String::from_utf8_lossy(kmer));
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use std::{io::Write, num::NonZeroU64, path::Path};

use crate::{
    counter::{CountOptions, WordCounts},
    error::{BuilderError, KmerCountError, KmerLengthError},
    format::SequenceFormat,
    input::Input,
    kmer::KmerLength,
    output::{write_counts, OutputFormat},
    progress::{Progress, DEFAULT_REPORT_INTERVAL},
    run::count_kmers_with_progress,
};

/// A builder for configuring k-mer counting operations.
///
/// Use [`KmerCounter::new()`] to create a new builder, configure it with the
/// fluent API, then call [`count()`](KmerCounter::count) or
/// [`count_to_writer()`](KmerCounter::count_to_writer) to execute.
///
/// # Example
///
/// ```rust,no_run
/// use kmercount::builder::KmerCounter;
/// use kmercount::format::SequenceFormat;
///
/// let counts = KmerCounter::new()
///     .k(21)?
///     .input_format(SequenceFormat::Fastq)
///     .revcomp(true)
///     .count("reads.fq.gz")?;
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone)]
pub struct KmerCounter {
    k: Option<KmerLength>,
    options: CountOptions,
    input_format: SequenceFormat,
    output_format: OutputFormat,
    sort: bool,
    interval: NonZeroU64,
}

impl Default for KmerCounter {
    fn default() -> Self {
        Self::new()
    }
}

impl KmerCounter {
    /// Creates a new `KmerCounter` builder with default settings.
    ///
    /// Default settings:
    /// - `k`: None (must be set before counting)
    /// - FASTA input, forward strand only, permissive alphabet
    /// - unsorted text output
    #[must_use]
    pub const fn new() -> Self {
        Self {
            k: None,
            options: CountOptions {
                revcomp: false,
                strict: false,
            },
            input_format: SequenceFormat::Fasta,
            output_format: OutputFormat::Text,
            sort: false,
            interval: DEFAULT_REPORT_INTERVAL,
        }
    }

    /// Sets the k-mer length.
    ///
    /// # Errors
    ///
    /// Returns [`KmerLengthError`] if `k` is zero.
    ///
    /// # Example
    ///
    /// ```rust
    /// use kmercount::builder::KmerCounter;
    ///
    /// let counter = KmerCounter::new().k(21)?;
    /// # Ok::<(), kmercount::error::KmerLengthError>(())
    /// ```
    pub fn k(mut self, k: usize) -> Result<Self, KmerLengthError> {
        self.k = Some(KmerLength::new(k)?);
        Ok(self)
    }

    /// Also count the reverse complement of every k-mer.
    #[must_use]
    pub fn revcomp(mut self, revcomp: bool) -> Self {
        self.options.revcomp = revcomp;
        self
    }

    /// Reject k-mers with characters outside `{A, C, G, T}`.
    #[must_use]
    pub fn strict(mut self, strict: bool) -> Self {
        self.options.strict = strict;
        self
    }

    /// Sets the input layout.
    #[must_use]
    pub fn input_format(mut self, format: SequenceFormat) -> Self {
        self.input_format = format;
        self
    }

    /// Sets the output format for [`count_to_writer()`](Self::count_to_writer).
    #[must_use]
    pub fn format(mut self, format: OutputFormat) -> Self {
        self.output_format = format;
        self
    }

    /// Sort output by k-mer in [`count_to_writer()`](Self::count_to_writer).
    #[must_use]
    pub fn sort(mut self, sort: bool) -> Self {
        self.sort = sort;
        self
    }

    /// Sets how many records pass between progress callbacks.
    ///
    /// # Errors
    ///
    /// Returns [`KmerCountError::InvalidReportInterval`] if `interval` is zero.
    pub fn report_interval(mut self, interval: u64) -> Result<Self, KmerCountError> {
        self.interval = NonZeroU64::new(interval).ok_or(KmerCountError::InvalidReportInterval)?;
        Ok(self)
    }

    /// Returns the configured k-mer length, if set.
    #[must_use]
    pub const fn get_k(&self) -> Option<KmerLength> {
        self.k
    }

    /// Returns the configured counting switches.
    #[must_use]
    pub const fn get_options(&self) -> CountOptions {
        self.options
    }

    /// Returns the configured output format.
    #[must_use]
    pub const fn get_format(&self) -> OutputFormat {
        self.output_format
    }

    /// Counts k-mers in the file at `path` (`-` reads stdin).
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `k` has not been set
    /// - The input cannot be opened or read
    /// - A record is malformed or holds characters that cannot be counted
    pub fn count<P: AsRef<Path>>(&self, path: P) -> Result<WordCounts, BuilderError> {
        self.count_with_progress(path, |_| {})
    }

    /// Counts k-mers with progress reporting.
    ///
    /// Similar to [`count()`](Self::count), but invokes a callback each time
    /// the report interval is reached.
    ///
    /// # Errors
    ///
    /// See [`count()`](Self::count).
    pub fn count_with_progress<P, F>(&self, path: P, callback: F) -> Result<WordCounts, BuilderError>
    where
        P: AsRef<Path>,
        F: FnMut(Progress),
    {
        let k = self.k.ok_or(BuilderError::KmerLengthNotSet)?;
        let input = Input::from_path(path.as_ref());
        Ok(count_kmers_with_progress(
            &input,
            self.input_format,
            k,
            self.options,
            self.interval,
            callback,
        )?)
    }

    /// Counts k-mers and writes the table to `writer`.
    ///
    /// # Errors
    ///
    /// Returns an error if counting fails or output cannot be written.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use kmercount::builder::KmerCounter;
    /// use kmercount::output::OutputFormat;
    ///
    /// KmerCounter::new()
    ///     .k(21)?
    ///     .sort(true)
    ///     .format(OutputFormat::Tsv)
    ///     .count_to_writer("genome.fa", std::io::stdout())?;
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn count_to_writer<P, W>(&self, path: P, writer: W) -> Result<(), BuilderError>
    where
        P: AsRef<Path>,
        W: Write,
    {
        let counts = self.count(path)?;
        write_counts(&counts, writer, self.sort, self.output_format)?;
        Ok(())
    }
}
