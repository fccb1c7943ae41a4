//! Fuzz target for window counting.
//!
//! Checks on arbitrary sequences:
//! 1. Every stored word has length k and no unknown symbol
//! 2. Reverse-complement mode counts exactly twice the forward total,
//!    foreign bytes included

#![no_main]

use kmercount::counter::{CountOptions, WordCounter};
use kmercount::kmer::KmerLength;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Some((&first, seq)) = data.split_first() else {
        return;
    };
    let Ok(k) = KmerLength::new(usize::from(first % 16) + 1) else {
        return;
    };

    let mut forward = WordCounter::new(k, CountOptions::default());
    forward.count_sequence(seq).unwrap();
    let forward = forward.finish();

    for (word, _) in forward.iter() {
        assert_eq!(word.len(), k.get());
        assert!(!word.iter().any(|b| matches!(b, b'N' | b'n')));
    }

    let options = CountOptions {
        revcomp: true,
        strict: false,
    };
    let mut both = WordCounter::new(k, options);
    both.count_sequence(seq).unwrap();
    assert_eq!(both.finish().total(), 2 * forward.total());
});
