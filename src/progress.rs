//! Progress tracking for k-mer counting operations.
//!
//! Progress is a side channel: it is logged at `DEBUG` level every `interval`
//! records and optionally passed to a caller-supplied callback. It never
//! influences the counts.
//!
//! # Example
//!
//! ```rust,no_run
//! use kmercount::builder::KmerCounter;
//!
//! let counts = KmerCounter::new()
//!     .k(21)?
//!     .report_interval(10_000)?
//!     .count_with_progress("genome.fa", |progress| {
//!         eprintln!(
//!             "Processed {} sequences ({} bases)",
//!             progress.records_processed,
//!             progress.bases_processed
//!         );
//!     })?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use std::num::NonZeroU64;

/// Default number of records between two progress reports.
pub const DEFAULT_REPORT_INTERVAL: NonZeroU64 = match NonZeroU64::new(1_000_000) {
    Some(n) => n,
    None => unreachable!(),
};

/// Progress snapshot during k-mer counting.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Progress {
    /// Number of records processed so far.
    pub records_processed: u64,
    /// Total number of bases processed so far.
    pub bases_processed: u64,
}

/// Counts processed records and signals when a report is due.
#[derive(Debug)]
pub struct ProgressTracker {
    interval: NonZeroU64,
    records: u64,
    bases: u64,
}

impl Default for ProgressTracker {
    fn default() -> Self {
        Self::new(DEFAULT_REPORT_INTERVAL)
    }
}

impl ProgressTracker {
    /// Create a new progress tracker with zero counts.
    #[must_use]
    pub const fn new(interval: NonZeroU64) -> Self {
        Self {
            interval,
            records: 0,
            bases: 0,
        }
    }

    /// Record that a sequence of `bases` length has been processed.
    ///
    /// Returns `true` when the record count reaches a multiple of the interval.
    pub fn record_sequence(&mut self, bases: u64) -> bool {
        self.records += 1;
        self.bases += bases;
        self.records % self.interval.get() == 0
    }

    /// Get a snapshot of the current progress.
    #[must_use]
    pub const fn snapshot(&self) -> Progress {
        Progress {
            records_processed: self.records,
            bases_processed: self.bases,
        }
    }

    /// The configured report interval.
    #[must_use]
    pub const fn interval(&self) -> NonZeroU64 {
        self.interval
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn every(n: u64) -> ProgressTracker {
        ProgressTracker::new(NonZeroU64::new(n).unwrap())
    }

    #[test]
    fn tracker_starts_at_zero() {
        let tracker = ProgressTracker::default();
        assert_eq!(tracker.snapshot(), Progress::default());
        assert_eq!(tracker.interval(), DEFAULT_REPORT_INTERVAL);
    }

    #[test]
    fn tracker_records_sequence() {
        let mut tracker = every(10);
        tracker.record_sequence(100);
        tracker.record_sequence(50);

        let progress = tracker.snapshot();
        assert_eq!(progress.records_processed, 2);
        assert_eq!(progress.bases_processed, 150);
    }

    #[test]
    fn tracker_signals_on_interval() {
        let mut tracker = every(2);
        assert!(!tracker.record_sequence(1));
        assert!(tracker.record_sequence(1));
        assert!(!tracker.record_sequence(1));
        assert!(tracker.record_sequence(1));
    }
}
