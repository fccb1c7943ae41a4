//! Word counting over a stream of sequence records.
//!
//! A fixed-width window slides across every record. Windows containing the
//! unknown symbol (`N`/`n`) are skipped; every other window increments the
//! count of its exact bytes, and in reverse-complement mode also the count of
//! its reverse complement. Keys keep the case they had in the input.
//!
//! # Memory Model
//!
//! Only one record is held at a time, but the table keeps one entry per
//! distinct word for the whole run. Nothing is evicted.

use std::{collections::HashMap, num::NonZeroU64};

use bytes::Bytes;
use rayon::slice::ParallelSliceMut;
use rustc_hash::FxHashMap;
use tracing::{debug, info, info_span};

use crate::{
    error::{InvalidBaseError, KmerCountError},
    kmer::{find_unknown, KmerLength},
    progress::{Progress, ProgressTracker},
    reader::SequenceRecord,
    revcomp::{find_invalid, reverse_complement_lenient_into},
};

/// The word → count table produced by a counting run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordCounts(FxHashMap<Bytes, u64>);

impl WordCounts {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `n` to the count of `word`.
    pub fn add(&mut self, word: &[u8], n: u64) {
        // Only allocate a key the first time a word is seen.
        if let Some(count) = self.0.get_mut(word) {
            *count += n;
        } else {
            self.0.insert(Bytes::copy_from_slice(word), n);
        }
    }

    /// Count for `word`, if it was ever seen.
    #[must_use]
    pub fn get(&self, word: &[u8]) -> Option<u64> {
        self.0.get(word).copied()
    }

    /// Number of distinct words.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if no word was counted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Sum of all counts.
    #[must_use]
    pub fn total(&self) -> u64 {
        self.0.values().sum()
    }

    /// Entries in the table's own (unspecified) order.
    pub fn iter(&self) -> impl Iterator<Item = (&[u8], u64)> + '_ {
        self.0.iter().map(|(word, &count)| (word.as_ref(), count))
    }

    /// Entries in ascending byte order of the word.
    ///
    /// Ordering is case-sensitive: `T` sorts before `a`.
    #[must_use]
    pub fn sorted(&self) -> Vec<(&[u8], u64)> {
        let mut entries: Vec<_> = self.iter().collect();
        // Keys are unique, so an unstable sort is still deterministic.
        entries.par_sort_unstable_by(|a, b| a.0.cmp(b.0));
        entries
    }

    /// Folds the counts of `other` into `self` by summation.
    ///
    /// Counts are associative and commutative, so tables built from
    /// independent shards of the input can be merged in any order.
    pub fn merge(&mut self, other: Self) {
        if self.0.len() < other.0.len() {
            let smaller = std::mem::replace(&mut self.0, other.0);
            self.merge(Self(smaller));
            return;
        }
        for (word, count) in other.0 {
            *self.0.entry(word).or_insert(0) += count;
        }
    }

    /// Converts to a `HashMap` keyed by `String`.
    ///
    /// Words that are not valid UTF-8 are converted lossily.
    #[must_use]
    pub fn into_string_map(self) -> HashMap<String, u64> {
        self.0
            .into_iter()
            .map(|(word, count)| (String::from_utf8_lossy(&word).into_owned(), count))
            .collect()
    }
}

impl<K: AsRef<[u8]>> FromIterator<(K, u64)> for WordCounts {
    fn from_iter<I: IntoIterator<Item = (K, u64)>>(iter: I) -> Self {
        let mut counts = Self::new();
        for (word, count) in iter {
            counts.add(word.as_ref(), count);
        }
        counts
    }
}

/// Behavioural switches for a [`WordCounter`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CountOptions {
    /// Also count the reverse complement of every valid window.
    pub revcomp: bool,
    /// Reject windows holding bytes outside `{A, C, G, T}` (either case).
    ///
    /// When off, such windows are counted verbatim, and their reverse
    /// complement carries the foreign bytes through untranslated.
    pub strict: bool,
}

/// Single-writer accumulator for word counts.
#[derive(Debug)]
pub struct WordCounter {
    k: KmerLength,
    options: CountOptions,
    counts: WordCounts,
    rc: Vec<u8>,
    records: u64,
}

impl WordCounter {
    /// Creates a counter for words of length `k`.
    #[must_use]
    pub fn new(k: KmerLength, options: CountOptions) -> Self {
        Self {
            k,
            options,
            counts: WordCounts::new(),
            rc: Vec::with_capacity(k.get()),
            records: 0,
        }
    }

    /// Counts every window of one record.
    ///
    /// # Errors
    ///
    /// Returns [`KmerCountError::Charset`] with the 1-based record index
    /// when a strict-mode window holds a byte outside the alphabet.
    pub fn count_record(&mut self, record: &SequenceRecord) -> Result<(), KmerCountError> {
        self.records += 1;
        self.count_sequence(&record.seq)
            .map_err(|source| KmerCountError::Charset {
                source,
                record: self.records,
            })
    }

    /// Counts every window of a bare sequence.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidBaseError`], positioned within `seq`, for the
    /// left-most byte outside the alphabet in strict mode. Never fails
    /// otherwise.
    pub fn count_sequence(&mut self, seq: &[u8]) -> Result<(), InvalidBaseError> {
        let k = self.k.get();
        let mut i = 0;

        while i + k <= seq.len() {
            let window = &seq[i..i + k];

            if let Some(unknown) = find_unknown(window) {
                i += unknown + 1;
                continue;
            }

            if self.options.strict {
                if let Some(err) = find_invalid(window) {
                    return Err(InvalidBaseError {
                        position: i + err.position,
                        ..err
                    });
                }
            }

            if self.options.revcomp {
                reverse_complement_lenient_into(window, &mut self.rc);
                self.counts.add(window, 1);
                self.counts.add(&self.rc, 1);
            } else {
                self.counts.add(window, 1);
            }

            i += 1;
        }
        Ok(())
    }

    /// Hands the finished table over to the caller.
    #[must_use]
    pub fn finish(self) -> WordCounts {
        self.counts
    }
}

/// Counts words over every record of `records`.
///
/// `on_progress` is invoked, and a debug event logged, each time the number
/// of processed records reaches a multiple of `interval`.
///
/// # Errors
///
/// Stops at, and returns, the first reader or charset error.
pub fn count_words<I, F>(
    records: I,
    k: KmerLength,
    options: CountOptions,
    interval: NonZeroU64,
    mut on_progress: F,
) -> Result<WordCounts, KmerCountError>
where
    I: IntoIterator<Item = Result<SequenceRecord, KmerCountError>>,
    F: FnMut(Progress),
{
    let _span = info_span!("count_words", k = k.get(), revcomp = options.revcomp).entered();
    info!(k = k.get(), revcomp = options.revcomp, strict = options.strict, "Starting k-mer counting");

    let mut counter = WordCounter::new(k, options);
    let mut tracker = ProgressTracker::new(interval);

    for record in records {
        let record = record?;
        counter.count_record(&record)?;
        if tracker.record_sequence(record.seq.len() as u64) {
            let progress = tracker.snapshot();
            debug!("Parsed {} sequences", progress.records_processed);
            on_progress(progress);
        }
    }

    let counts = counter.finish();
    let progress = tracker.snapshot();
    info!(
        records = progress.records_processed,
        bases = progress.bases_processed,
        distinct = counts.len(),
        total = counts.total(),
        "K-mer counting complete"
    );
    Ok(counts)
}
