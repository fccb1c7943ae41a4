//! # kmercount
//!
//! A streaming k-mer word counter for FASTA and FASTQ data.
//!
//! Every window of length `k` that does not contain the unknown symbol `N`
//! is counted under its exact (case-preserving) spelling. With
//! reverse-complement mode on, each window also adds one to the count of its
//! reverse complement, so both strands contribute symmetrically.
//!
//! Input may be a plain or gzip-compressed (`.gz`) file, or stdin (`-`).
//! Output is one `word count` line per distinct word, optionally sorted.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use kmercount::builder::KmerCounter;
//!
//! let counts = KmerCounter::new()
//!     .k(3)?
//!     .revcomp(true)
//!     .count("sequences.fa")?;
//!
//! for (kmer, count) in counts.sorted() {
//!     println!("{} {count}", String::from_utf8_lossy(kmer));
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Pipeline
//!
//! [`reader`] yields one [`SequenceRecord`](reader::SequenceRecord) at a time,
//! [`counter`] folds it into a [`WordCounts`](counter::WordCounts) table, and
//! [`output`] writes the table once input is exhausted. [`run::run`] drives
//! all three from a validated [`Config`](config::Config).

pub mod builder;
pub mod cli;
pub mod config;
pub mod counter;
pub mod error;
pub mod format;
pub mod input;
pub mod kmer;
pub mod logging;
pub mod output;
pub mod progress;
pub mod reader;
pub mod revcomp;
pub mod run;
