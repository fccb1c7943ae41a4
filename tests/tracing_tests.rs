//! Tests for tracing instrumentation.
//!
//! These tests verify that tracing events are emitted during counting and
//! that the configured level controls what is shown, without affecting counts.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use kmercount::cli::LogLevel;
use kmercount::counter::CountOptions;
use kmercount::format::SequenceFormat;
use kmercount::input::Input;
use kmercount::kmer::KmerLength;
use kmercount::run::{count_kmers, count_kmers_with_progress};
use std::num::NonZeroU64;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tracing::Level;
use tracing_subscriber::layer::SubscriberExt;
use tracing_test::traced_test;

fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

/// A simple layer that counts events at or above a level.
struct EventCounter {
    level: Level,
    count: Arc<AtomicUsize>,
}

impl<S: tracing::Subscriber> tracing_subscriber::Layer<S> for EventCounter {
    fn on_event(
        &self,
        event: &tracing::Event<'_>,
        _ctx: tracing_subscriber::layer::Context<'_, S>,
    ) {
        if event.metadata().level() <= &self.level {
            self.count.fetch_add(1, Ordering::SeqCst);
        }
    }
}

fn count_simple() -> kmercount::counter::WordCounts {
    count_kmers_with_progress(
        &Input::from_path(&fixture_path("simple.fa")),
        SequenceFormat::Fasta,
        KmerLength::new(4).unwrap(),
        CountOptions::default(),
        NonZeroU64::new(1).unwrap(),
        |_| {},
    )
    .expect("should count k-mers")
}

#[test]
fn count_kmers_emits_info_events() {
    let event_count = Arc::new(AtomicUsize::new(0));
    let layer = EventCounter {
        level: Level::INFO,
        count: Arc::clone(&event_count),
    };
    let subscriber = tracing_subscriber::registry().with(layer);

    tracing::subscriber::with_default(subscriber, || {
        let path = fixture_path("simple.fa");
        let _counts = count_kmers(
            &Input::from_path(&path),
            SequenceFormat::Fasta,
            KmerLength::new(4).unwrap(),
            CountOptions::default(),
        )
        .expect("should count k-mers");
    });

    assert!(
        event_count.load(Ordering::SeqCst) > 0,
        "should emit tracing events"
    );
}

#[test]
fn level_filter_hides_debug_but_not_counts() {
    let debug_events = Arc::new(AtomicUsize::new(0));
    let layer = EventCounter {
        level: Level::DEBUG,
        count: Arc::clone(&debug_events),
    };
    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::filter::LevelFilter::from_level(
            LogLevel::Warning.as_tracing(),
        ))
        .with(layer);

    let quiet = tracing::subscriber::with_default(subscriber, count_simple);

    assert_eq!(debug_events.load(Ordering::SeqCst), 0);
    assert_eq!(quiet, count_simple());
}

#[test]
#[traced_test]
fn progress_is_logged_at_interval() {
    let _counts = count_simple();
    assert!(logs_contain("Parsed 1 sequences"));
    assert!(logs_contain("Parsed 2 sequences"));
    assert!(logs_contain("K-mer counting complete"));
}
