//! Fuzz target for the FASTA and FASTQ readers.
//!
//! Arbitrary bytes must never panic either reader; malformed input may only
//! surface as an error, after which iteration stops.

#![no_main]

use kmercount::format::SequenceFormat;
use kmercount::reader::Records;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    for format in [SequenceFormat::Fasta, SequenceFormat::Fastq] {
        let mut errored = false;
        for record in Records::new(data, format, "fuzz") {
            assert!(!errored, "record yielded after an error");
            errored = record.is_err();
        }
    }
});
