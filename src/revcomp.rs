//! Reverse complement of nucleotide strings.
//!
//! The pairing is fixed: `A`↔`T`, `C`↔`G`, `N`↔`N`, with case preserved per
//! character. [`reverse_complement`] rejects any other byte with an
//! [`InvalidBaseError`]; [`reverse_complement_lenient_into`] passes it through
//! unchanged.

use crate::error::InvalidBaseError;

/// Complement of a single base, or `None` outside `{A, C, G, T, N}` (either case).
///
/// # Example
///
/// ```rust
/// use kmercount::revcomp::complement;
///
/// assert_eq!(complement(b'A'), Some(b'T'));
/// assert_eq!(complement(b'g'), Some(b'c'));
/// assert_eq!(complement(b'X'), None);
/// ```
#[inline]
pub const fn complement(base: u8) -> Option<u8> {
    match base {
        b'A' => Some(b'T'),
        b'C' => Some(b'G'),
        b'G' => Some(b'C'),
        b'T' => Some(b'A'),
        b'N' => Some(b'N'),
        b'a' => Some(b't'),
        b'c' => Some(b'g'),
        b'g' => Some(b'c'),
        b't' => Some(b'a'),
        b'n' => Some(b'n'),
        _ => None,
    }
}

/// Complement of `base`, or `base` itself outside the alphabet.
#[inline]
pub const fn complement_or_self(base: u8) -> u8 {
    match complement(base) {
        Some(c) => c,
        None => base,
    }
}

/// Left-most byte of `seq` outside the alphabet.
pub fn find_invalid(seq: &[u8]) -> Option<InvalidBaseError> {
    seq.iter()
        .position(|&b| complement(b).is_none())
        .map(|position| InvalidBaseError {
            base: seq[position],
            position,
        })
}

/// Writes the reverse complement of `seq` into `out`, replacing its contents.
///
/// `out` is left untouched on error.
///
/// # Errors
///
/// Returns [`InvalidBaseError`] for the left-most byte of `seq` outside the
/// alphabet. `position` is the index in `seq`.
pub fn reverse_complement_into(seq: &[u8], out: &mut Vec<u8>) -> Result<(), InvalidBaseError> {
    if let Some(err) = find_invalid(seq) {
        return Err(err);
    }
    reverse_complement_lenient_into(seq, out);
    Ok(())
}

/// Writes the reverse complement of `seq` into `out`, leaving bytes outside
/// the alphabet untranslated.
pub fn reverse_complement_lenient_into(seq: &[u8], out: &mut Vec<u8>) {
    out.clear();
    out.extend(seq.iter().rev().map(|&b| complement_or_self(b)));
}

/// Returns the reverse complement of `seq`.
///
/// # Errors
///
/// Returns [`InvalidBaseError`] if `seq` contains a byte outside the alphabet.
///
/// # Example
///
/// ```rust
/// use kmercount::revcomp::reverse_complement;
///
/// assert_eq!(reverse_complement(b"ACGTn")?, b"nACGT");
/// assert_eq!(reverse_complement(b"GATtaca")?, b"tgtaATC");
/// # Ok::<(), kmercount::error::InvalidBaseError>(())
/// ```
pub fn reverse_complement(seq: &[u8]) -> Result<Vec<u8>, InvalidBaseError> {
    let mut out = Vec::with_capacity(seq.len());
    reverse_complement_into(seq, &mut out)?;
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn complement_pairs() {
        for (a, b) in [(b'A', b'T'), (b'C', b'G'), (b'N', b'N')] {
            assert_eq!(complement(a), Some(b));
            assert_eq!(complement(b), Some(a));
            assert_eq!(complement(a.to_ascii_lowercase()), Some(b.to_ascii_lowercase()));
        }
    }

    #[test]
    fn reverse_complement_basic() {
        assert_eq!(reverse_complement(b"ACG").unwrap(), b"CGT");
        assert_eq!(reverse_complement(b"AAAA").unwrap(), b"TTTT");
        assert_eq!(reverse_complement(b"ACGT").unwrap(), b"ACGT");
    }

    #[test]
    fn reverse_complement_preserves_case() {
        assert_eq!(reverse_complement(b"AcGt").unwrap(), b"aCgT");
    }

    #[test]
    fn reverse_complement_empty() {
        assert!(reverse_complement(b"").unwrap().is_empty());
    }

    #[test]
    fn reverse_complement_rejects_foreign_bytes() {
        let err = reverse_complement(b"ACRT").unwrap_err();
        assert_eq!(
            err,
            InvalidBaseError {
                base: b'R',
                position: 2
            }
        );
    }

    #[test]
    fn reverse_complement_reports_left_most_foreign_byte() {
        let err = reverse_complement(b"AXCRT").unwrap_err();
        assert_eq!(
            err,
            InvalidBaseError {
                base: b'X',
                position: 1
            }
        );
        assert_eq!(find_invalid(b"AXCRT"), Some(err));
        assert_eq!(find_invalid(b"acgtN"), None);
    }

    #[test]
    fn failed_transform_leaves_buffer_untouched() {
        let mut buf = b"keep".to_vec();
        assert!(reverse_complement_into(b"AR", &mut buf).is_err());
        assert_eq!(buf, b"keep");
    }

    #[test]
    fn lenient_transform_passes_foreign_bytes_through() {
        let mut buf = Vec::new();
        reverse_complement_lenient_into(b"ACRt", &mut buf);
        assert_eq!(buf, b"aRGT");
        assert_eq!(complement_or_self(b'R'), b'R');
        assert_eq!(complement_or_self(b'c'), b'g');
    }

    #[test]
    fn reverse_complement_is_an_involution() {
        let seq = b"GATTACAnnACGTtgca";
        let twice = reverse_complement(&reverse_complement(seq).unwrap()).unwrap();
        assert_eq!(twice, seq);
    }

    #[test]
    fn into_reuses_buffer() {
        let mut buf = b"leftover".to_vec();
        reverse_complement_into(b"GG", &mut buf).unwrap();
        assert_eq!(buf, b"CC");
    }

    #[test]
    fn snapshot_mixed_case() {
        let rc = reverse_complement(b"GATTACAgattaca").unwrap();
        insta::assert_snapshot!(String::from_utf8_lossy(&rc), @"tgtaatcTGTAATC");
    }
}
