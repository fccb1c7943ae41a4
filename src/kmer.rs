//! Word length validation and window inspection.

use crate::error::KmerLengthError;

/// A validated k-mer length.
///
/// Words are stored as byte strings rather than packed integers, so there is
/// no upper bound beyond available memory; only `k == 0` is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct KmerLength(usize);

impl KmerLength {
    /// Smallest accepted word length.
    pub const MIN: usize = 1;

    /// Creates a new `KmerLength`.
    ///
    /// # Errors
    ///
    /// Returns [`KmerLengthError`] if `k` is zero.
    ///
    /// # Example
    ///
    /// ```rust
    /// use kmercount::kmer::KmerLength;
    ///
    /// assert_eq!(KmerLength::new(21)?.get(), 21);
    /// assert!(KmerLength::new(0).is_err());
    /// # Ok::<(), kmercount::error::KmerLengthError>(())
    /// ```
    pub const fn new(k: usize) -> Result<Self, KmerLengthError> {
        if k < Self::MIN {
            return Err(KmerLengthError { k });
        }
        Ok(Self(k))
    }

    /// Returns the word length.
    #[must_use]
    pub const fn get(self) -> usize {
        self.0
    }

    /// Number of windows a sequence of length `len` yields.
    #[must_use]
    pub const fn windows_in(self, len: usize) -> usize {
        (len + 1).saturating_sub(self.0)
    }
}

impl TryFrom<usize> for KmerLength {
    type Error = KmerLengthError;

    fn try_from(k: usize) -> Result<Self, Self::Error> {
        Self::new(k)
    }
}

impl std::fmt::Display for KmerLength {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Returns `true` for the unknown symbol, in either case.
#[inline]
pub const fn is_unknown(byte: u8) -> bool {
    matches!(byte, b'N' | b'n')
}

/// Position of the right-most unknown symbol in a window, if any.
///
/// Every window overlapping that position is skipped as well, so the scan
/// can resume just past it.
#[inline]
pub fn find_unknown(window: &[u8]) -> Option<usize> {
    window.iter().rposition(|&b| is_unknown(b))
}
