//! Input format selection.
//!
//! The layout of the input stream is chosen explicitly by the caller
//! (`-q/--fastq` on the command line); it is never sniffed from content.

use clap::ValueEnum;

/// Input sequence file format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum SequenceFormat {
    /// FASTA: `>` header lines followed by possibly wrapped sequence lines.
    #[default]
    Fasta,
    /// FASTQ: strict four-line records (header, sequence, `+`, quality).
    Fastq,
}

impl SequenceFormat {
    /// Maps the command-line FASTQ switch to a format.
    ///
    /// # Examples
    ///
    /// ```
    /// use kmercount::format::SequenceFormat;
    ///
    /// assert_eq!(SequenceFormat::from_fastq_flag(true), SequenceFormat::Fastq);
    /// assert_eq!(SequenceFormat::from_fastq_flag(false), SequenceFormat::Fasta);
    /// ```
    #[must_use]
    pub const fn from_fastq_flag(fastq: bool) -> Self {
        if fastq {
            Self::Fastq
        } else {
            Self::Fasta
        }
    }

    /// Returns `true` if this format is FASTQ.
    #[must_use]
    pub const fn is_fastq(self) -> bool {
        matches!(self, Self::Fastq)
    }

    /// Returns `true` if this format is FASTA.
    #[must_use]
    pub const fn is_fasta(self) -> bool {
        matches!(self, Self::Fasta)
    }
}

impl std::fmt::Display for SequenceFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Fasta => write!(f, "fasta"),
            Self::Fastq => write!(f, "fastq"),
        }
    }
}
