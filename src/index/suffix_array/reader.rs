//! In-memory suffix array reader
//!
//! Provides O(m log n) search over a suffix array held next to the
//! normalized text it was sorted from.

use super::types::*;

/// A built suffix array and the normalized text it indexes
///
/// Immutable after construction; lookups only take `&self`.
pub struct SuffixIndex {
    /// Normalized text (byte-aligned with the original corpus)
    text: Vec<u8>,
    /// Sorted suffix positions into `text`
    suffixes: Vec<SuffixEntry>,
    meta: SuffixArrayMeta,
}

impl SuffixIndex {
    pub(crate) fn new(text: Vec<u8>, suffixes: Vec<SuffixEntry>, meta: SuffixArrayMeta) -> Self {
        Self {
            text,
            suffixes,
            meta,
        }
    }

    /// Get the full normalized text
    #[inline]
    pub fn text(&self) -> &[u8] {
        &self.text
    }

    pub fn meta(&self) -> &SuffixArrayMeta {
        &self.meta
    }

    /// Get suffix at index i in the suffix array
    #[inline]
    fn get_suffix(&self, i: u64) -> TextPosition {
        self.suffixes[i as usize]
    }

    /// Get text starting at a position
    #[inline]
    fn text_at(&self, pos: TextPosition) -> &[u8] {
        &self.text[pos as usize..]
    }

    fn suffix_count(&self) -> u64 {
        self.suffixes.len() as u64
    }

    /// Search for a pattern in the suffix array
    ///
    /// Returns the range [lo, hi) of indices in the suffix array
    /// where all suffixes start with the pattern. The pattern is expected
    /// to be normalized the same way as the indexed text.
    pub fn search(&self, pattern: &[u8]) -> SuffixRange {
        if pattern.is_empty() || self.suffixes.is_empty() {
            return SuffixRange::default();
        }

        let lo = self.lower_bound(pattern);
        let hi = self.upper_bound(pattern, lo);
        SuffixRange { lo, hi }
    }

    /// Find first index where suffix starts with pattern (or would if inserted)
    fn lower_bound(&self, pattern: &[u8]) -> u64 {
        let mut lo: u64 = 0;
        let mut hi: u64 = self.suffix_count();

        while lo < hi {
            let mid = lo + (hi - lo) / 2;
            let suffix = self.text_at(self.get_suffix(mid));

            // Compare the suffix with the pattern (only up to pattern length)
            let cmp_len = pattern.len().min(suffix.len());
            if &suffix[..cmp_len] < pattern {
                lo = mid + 1;
            } else {
                hi = mid;
            }
        }

        lo
    }

    /// Find first index where suffix does NOT start with pattern
    fn upper_bound(&self, pattern: &[u8], start: u64) -> u64 {
        let mut lo = start;
        let mut hi: u64 = self.suffix_count();

        while lo < hi {
            let mid = lo + (hi - lo) / 2;
            let suffix = self.text_at(self.get_suffix(mid));

            if suffix.starts_with(pattern) {
                lo = mid + 1;
            } else {
                hi = mid;
            }
        }

        lo
    }

    /// Return up to `limit` text positions whose suffix starts with `pattern`
    ///
    /// Positions come out in suffix order, not reading order.
    pub fn lookup(&self, pattern: &[u8], limit: usize) -> Vec<TextPosition> {
        let range = self.search(pattern);
        let take = range.len().min(limit as u64);

        (range.lo..range.lo + take).map(|i| self.get_suffix(i)).collect()
    }

    /// Get the number of matches for a pattern
    pub fn count_matches(&self, pattern: &[u8]) -> u64 {
        self.search(pattern).len()
    }

    /// Approximate heap footprint of the text plus the suffix table
    pub fn memory_bytes(&self) -> usize {
        self.text.len() + self.suffixes.len() * std::mem::size_of::<SuffixEntry>()
    }
}
