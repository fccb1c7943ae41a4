//! Fuzz target for reverse complement.
//!
//! Tests that reverse complement:
//! 1. Preserves length
//! 2. Is an involution on the nucleotide alphabet
//! 3. Points at the left-most offending byte for anything else

#![no_main]

use kmercount::revcomp::{complement, reverse_complement};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    match reverse_complement(data) {
        Ok(rc) => {
            assert_eq!(rc.len(), data.len());
            assert_eq!(reverse_complement(&rc).unwrap(), data);
        }
        Err(err) => {
            assert_eq!(data[err.position], err.base);
            assert!(complement(err.base).is_none());
            assert!(data[..err.position].iter().all(|&b| complement(b).is_some()));
        }
    }
});
