//! K-mer counting and output.
//!
//! This module wires the pipeline together: open the input, stream records
//! through a [`WordCounter`](crate::counter::WordCounter), then hand the
//! finished table to the emitter. Each stage runs to completion on a single
//! thread before the next starts.

use std::num::NonZeroU64;

use tracing::info;

use crate::{
    config::Config,
    counter::{count_words, CountOptions, WordCounts},
    error::KmerCountError,
    format::SequenceFormat,
    input::Input,
    kmer::KmerLength,
    output::emit,
    progress::{Progress, DEFAULT_REPORT_INTERVAL},
    reader::read,
};

/// Counts k-mers as described by `config` and writes the table to its output.
///
/// # Errors
///
/// Returns the first open, read, format, charset or write error encountered.
pub fn run(config: &Config) -> Result<(), KmerCountError> {
    info!(
        input = %config.input,
        output = %config.output,
        k = config.k.get(),
        format = %config.format,
        "Starting ..."
    );

    let counts = count_kmers_with_progress(
        &config.input,
        config.format,
        config.k,
        config.count_options(),
        config.progress_interval,
        |_| {},
    )?;

    emit(&counts, &config.output, config.sort, config.output_format)?;

    info!("All done");
    Ok(())
}

/// Counts k-mers in `input` and returns the table.
///
/// This is the main library API for counting k-mers without writing output.
///
/// # Example
///
/// ```rust,no_run
/// use kmercount::{counter::CountOptions, format::SequenceFormat, input::Input, kmer::KmerLength};
/// use kmercount::run::count_kmers;
/// use std::path::Path;
///
/// let counts = count_kmers(
///     &Input::from_path(Path::new("reads.fq.gz")),
///     SequenceFormat::Fastq,
///     KmerLength::new(21)?,
///     CountOptions { revcomp: true, strict: false },
/// )?;
/// println!("{} distinct k-mers", counts.len());
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
///
/// # Errors
///
/// Returns an error if the input cannot be opened or read, if a FASTQ record
/// is truncated, or if a k-mer cannot be counted under `options`.
pub fn count_kmers(
    input: &Input,
    format: SequenceFormat,
    k: KmerLength,
    options: CountOptions,
) -> Result<WordCounts, KmerCountError> {
    count_kmers_with_progress(input, format, k, options, DEFAULT_REPORT_INTERVAL, |_| {})
}

/// Like [`count_kmers`], invoking `callback` every `interval` records.
///
/// # Errors
///
/// See [`count_kmers`].
pub fn count_kmers_with_progress<F>(
    input: &Input,
    format: SequenceFormat,
    k: KmerLength,
    options: CountOptions,
    interval: NonZeroU64,
    callback: F,
) -> Result<WordCounts, KmerCountError>
where
    F: FnMut(Progress),
{
    let records = read(input, format)?;
    count_words(records, k, options, interval, callback)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn temp_file(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn run_writes_sorted_output() {
        let input = temp_file(">seq1\nACGTAC\n");
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("counts.txt");

        let mut config = Config::new(3, input.path(), &out).unwrap();
        config.sort = true;
        config.revcomp = true;
        run(&config).unwrap();

        let written = std::fs::read_to_string(out).unwrap();
        assert_eq!(written, "ACG 2\nCGT 2\nGTA 2\nTAC 2\n");
    }

    #[test]
    fn run_reports_missing_input() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::new(
            3,
            &dir.path().join("missing.fa"),
            &dir.path().join("out.txt"),
        )
        .unwrap();
        let err = run(&config).unwrap_err();
        assert!(matches!(err, KmerCountError::InputOpen { .. }));
    }

    #[test]
    fn count_kmers_fastq() {
        let input = temp_file("@r1\nACGNACGT\n+\nIIIIIIII\n");
        let counts = count_kmers(
            &Input::from_path(input.path()),
            SequenceFormat::Fastq,
            KmerLength::new(4).unwrap(),
            CountOptions::default(),
        )
        .unwrap();
        assert_eq!(counts.len(), 1);
        assert_eq!(counts.get(b"ACGT"), Some(1));
    }
}
