//! Error types for kmercount.
//!
//! This module provides exhaustive, strongly-typed errors for all operations
//! in the library, enabling precise error handling and informative messages.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur in kmercount operations.
#[derive(Debug, Error)]
pub enum KmerCountError {
    /// Word length is zero.
    #[error("invalid k-mer length {k}: the word size must be strictly positive")]
    InvalidKmerLength { k: usize },

    /// Progress report interval is zero.
    #[error("invalid report interval: must be strictly positive")]
    InvalidReportInterval,

    /// Failed to open the input file.
    #[error("failed to open input '{path}': {source}")]
    InputOpen {
        #[source]
        source: std::io::Error,
        path: PathBuf,
    },

    /// Failed to read from an already opened input.
    #[error("failed to read input '{input}': {source}")]
    InputRead {
        #[source]
        source: std::io::Error,
        input: String,
    },

    /// Failed to create the output file.
    #[error("failed to create output '{path}': {source}")]
    OutputCreate {
        #[source]
        source: std::io::Error,
        path: PathBuf,
    },

    /// Failed to write output.
    #[error("failed to write output: {source}")]
    Write {
        #[source]
        source: std::io::Error,
    },

    /// Failed to serialize JSON output.
    #[error("failed to serialize JSON: {source}")]
    Json {
        #[source]
        source: serde_json::Error,
    },

    /// Malformed sequence record (truncated FASTQ group).
    #[error("malformed record {record}: {details}")]
    Format { record: u64, details: String },

    /// A character outside the nucleotide alphabet reached the counter.
    #[error("record {record}: {source}")]
    Charset {
        #[source]
        source: InvalidBaseError,
        record: u64,
    },
}

/// Error for invalid k-mer length.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("k-mer length {k} is out of range: must be at least 1")]
pub struct KmerLengthError {
    /// The invalid k value that was provided.
    pub k: usize,
}

/// Error for a byte outside `{A, C, G, T, N}` (either case).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidBaseError {
    /// The invalid byte value.
    pub base: u8,
    /// Position of the invalid byte in the sequence.
    pub position: usize,
}

impl std::fmt::Display for InvalidBaseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.base.is_ascii_graphic() || self.base == b' ' {
            write!(
                f,
                "invalid base '{}' (0x{:02x}) at position {}",
                self.base as char, self.base, self.position
            )
        } else {
            write!(
                f,
                "invalid base 0x{:02x} at position {}",
                self.base, self.position
            )
        }
    }
}

impl std::error::Error for InvalidBaseError {}

impl From<std::io::Error> for KmerCountError {
    fn from(source: std::io::Error) -> Self {
        Self::Write { source }
    }
}

impl From<serde_json::Error> for KmerCountError {
    fn from(source: serde_json::Error) -> Self {
        Self::Json { source }
    }
}

impl From<KmerLengthError> for KmerCountError {
    fn from(err: KmerLengthError) -> Self {
        Self::InvalidKmerLength { k: err.k }
    }
}

/// Errors that can occur when using the builder API.
#[derive(Debug, Error)]
pub enum BuilderError {
    /// K-mer length was not set before calling a counting method.
    #[error("k-mer length not set; call .k() first")]
    KmerLengthNotSet,

    /// Invalid k-mer length provided.
    #[error(transparent)]
    KmerLength(#[from] KmerLengthError),

    /// Error reading, counting or writing.
    #[error(transparent)]
    KmerCount(#[from] KmerCountError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kmer_length_error_display() {
        let err = KmerLengthError { k: 0 };
        assert_eq!(
            err.to_string(),
            "k-mer length 0 is out of range: must be at least 1"
        );
    }

    #[test]
    fn invalid_base_error_display() {
        let err = InvalidBaseError {
            base: b'X',
            position: 5,
        };
        assert_eq!(err.to_string(), "invalid base 'X' (0x58) at position 5");
    }

    #[test]
    fn invalid_base_error_display_non_printable() {
        let err = InvalidBaseError {
            base: 0x01,
            position: 2,
        };
        assert_eq!(err.to_string(), "invalid base 0x01 at position 2");
    }

    #[test]
    fn kmercount_error_from_kmer_length_error() {
        let err: KmerCountError = KmerLengthError { k: 0 }.into();
        assert!(matches!(err, KmerCountError::InvalidKmerLength { k: 0 }));
    }

    #[test]
    fn format_error_names_record() {
        let err = KmerCountError::Format {
            record: 3,
            details: "missing quality line".to_string(),
        };
        assert_eq!(err.to_string(), "malformed record 3: missing quality line");
    }

    #[test]
    fn charset_error_names_record_and_base() {
        let err = KmerCountError::Charset {
            source: InvalidBaseError {
                base: b'R',
                position: 1,
            },
            record: 7,
        };
        assert_eq!(
            err.to_string(),
            "record 7: invalid base 'R' (0x52) at position 1"
        );
    }
}
