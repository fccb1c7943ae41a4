//! Writing the word count table.
//!
//! The default encoding is one `<word> <count>` line per entry. Entries are
//! either written in the table's own order or sorted by word bytes.

use std::{
    fs::File,
    io::{self, BufWriter, Write},
    path::{Path, PathBuf},
};

use clap::ValueEnum;
use serde::Serialize;
use tracing::{debug, info_span};

use crate::{counter::WordCounts, error::KmerCountError};

/// Output encoding for word counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum OutputFormat {
    /// Space-separated `word count` lines
    #[default]
    Text,
    /// Tab-separated `word\tcount` lines
    Tsv,
    /// JSON array of `{"kmer": ..., "count": ...}` objects
    Json,
}

/// Output sink: a file or standard output.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Output {
    /// Write to a file, created or truncated.
    File(PathBuf),
    /// Write to standard output.
    #[default]
    Stdout,
}

impl Output {
    /// Creates an `Output` from a path; "-" selects standard output.
    #[must_use]
    pub fn from_path(path: &Path) -> Self {
        if path.as_os_str() == "-" {
            Self::Stdout
        } else {
            Self::File(path.to_path_buf())
        }
    }

    /// Returns `true` if this output is stdout.
    #[must_use]
    pub const fn is_stdout(&self) -> bool {
        matches!(self, Self::Stdout)
    }

    /// Opens the sink for writing.
    ///
    /// # Errors
    ///
    /// Returns [`KmerCountError::OutputCreate`] naming the path if the file
    /// cannot be created.
    pub fn create(&self) -> Result<Box<dyn Write>, KmerCountError> {
        match self {
            Self::Stdout => Ok(Box::new(io::stdout().lock())),
            Self::File(path) => {
                let file = File::create(path).map_err(|source| KmerCountError::OutputCreate {
                    source,
                    path: path.clone(),
                })?;
                Ok(Box::new(file))
            }
        }
    }
}

impl std::fmt::Display for Output {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::File(path) => write!(f, "{}", path.display()),
            Self::Stdout => write!(f, "<stdout>"),
        }
    }
}

/// A k-mer with its count, used for JSON serialization.
#[derive(Serialize)]
struct KmerCount<'a> {
    kmer: std::borrow::Cow<'a, str>,
    count: u64,
}

/// Writes every entry of `counts` to `writer`.
///
/// The writer is buffered internally and flushed before returning.
///
/// # Errors
///
/// Returns [`KmerCountError::Write`] or [`KmerCountError::Json`] if the
/// output cannot be written.
pub fn write_counts<W: Write>(
    counts: &WordCounts,
    writer: W,
    sort: bool,
    format: OutputFormat,
) -> Result<(), KmerCountError> {
    let _span = info_span!("write_counts", entries = counts.len(), sort).entered();
    let mut buf = BufWriter::new(writer);

    if sort {
        debug!("Sorting {} words", counts.len());
        write_entries(&mut buf, counts.sorted(), format)?;
    } else {
        write_entries(&mut buf, counts.iter(), format)?;
    }

    buf.flush()?;
    debug!("Wrote {} words", counts.len());
    Ok(())
}

fn write_entries<'a, W, I>(buf: &mut W, entries: I, format: OutputFormat) -> Result<(), KmerCountError>
where
    W: Write,
    I: IntoIterator<Item = (&'a [u8], u64)>,
{
    match format {
        OutputFormat::Text => {
            for (word, count) in entries {
                buf.write_all(word)?;
                writeln!(buf, " {count}")?;
            }
        }
        OutputFormat::Tsv => {
            for (word, count) in entries {
                buf.write_all(word)?;
                writeln!(buf, "\t{count}")?;
            }
        }
        OutputFormat::Json => {
            let json_data: Vec<KmerCount<'_>> = entries
                .into_iter()
                .map(|(word, count)| KmerCount {
                    kmer: String::from_utf8_lossy(word),
                    count,
                })
                .collect();
            serde_json::to_writer_pretty(&mut *buf, &json_data)?;
            writeln!(buf)?;
        }
    }
    Ok(())
}

/// Opens `output` and writes `counts` to it.
///
/// # Errors
///
/// Returns an error if the sink cannot be created or written.
pub fn emit(
    counts: &WordCounts,
    output: &Output,
    sort: bool,
    format: OutputFormat,
) -> Result<(), KmerCountError> {
    debug!(%output, "Writing k-mer counts");
    let writer = output.create()?;
    write_counts(counts, writer, sort, format)
}
