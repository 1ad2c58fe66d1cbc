//! Suffix array builder
//!
//! Builds a suffix array over the corpus by:
//! 1. Case-folding the corpus into a byte-aligned normalized copy
//! 2. Sorting every suffix position using parallel sort
//!
//! The resulting suffix array enables O(m log n) substring search.

use super::reader::SuffixIndex;
use super::types::*;
use crate::utils::case::fold_case_into;
use rayon::prelude::*;
use std::time::Instant;

/// Builder for constructing a suffix array from corpus text
pub struct SuffixArrayBuilder {
    config: SuffixArrayConfig,
    /// Normalized text (case-folded if configured)
    text: Vec<u8>,
}

impl SuffixArrayBuilder {
    /// Create a new suffix array builder with the given configuration
    pub fn new(config: SuffixArrayConfig) -> Self {
        Self {
            config,
            text: Vec::new(),
        }
    }

    /// Create a builder with default configuration
    pub fn with_defaults() -> Self {
        Self::new(SuffixArrayConfig::default())
    }

    /// Append corpus bytes to the text being indexed
    ///
    /// Case folding never changes a character's byte length, so every
    /// normalized byte stays at the same offset as its original.
    pub fn push(&mut self, content: &[u8]) {
        if self.config.case_insensitive {
            fold_case_into(content, &mut self.text);
        } else {
            self.text.extend_from_slice(content);
        }
    }

    /// Build the suffix array from the accumulated text
    ///
    /// This is the main computation - sorts all suffixes in parallel
    pub fn build(self) -> SuffixIndex {
        let started = Instant::now();
        let suffixes = build_suffix_array_parallel(&self.text);

        let meta = SuffixArrayMeta {
            suffix_count: suffixes.len() as u64,
            case_insensitive: self.config.case_insensitive,
            build_ms: started.elapsed().as_secs_f64() * 1000.0,
        };

        tracing::debug!(
            suffixes = meta.suffix_count,
            build_ms = meta.build_ms,
            "suffix array sorted"
        );

        SuffixIndex::new(self.text, suffixes, meta)
    }
}

/// Build suffix array using parallel sort
///
/// This approach:
/// 1. Creates array of all suffix positions [0, 1, 2, ..., n-1]
/// 2. Sorts positions by comparing the suffixes they point to
/// 3. Uses rayon for parallel sorting
///
/// Suffixes of one text are pairwise distinct, so the unstable sort still
/// yields a single deterministic order.
fn build_suffix_array_parallel(text: &[u8]) -> Vec<SuffixEntry> {
    let n = text.len();

    let mut sa: Vec<SuffixEntry> = (0..n as SuffixEntry).collect();

    if n > PARALLEL_SORT_THRESHOLD {
        sa.par_sort_unstable_by(|&a, &b| compare_suffixes(text, a as usize, b as usize));
    } else {
        sa.sort_unstable_by(|&a, &b| compare_suffixes(text, a as usize, b as usize));
    }

    sa
}

/// Compare two suffixes lexicographically over their full length
///
/// A proper prefix sorts before any longer suffix it prefixes.
#[inline]
fn compare_suffixes(text: &[u8], a: usize, b: usize) -> std::cmp::Ordering {
    text[a..].cmp(&text[b..])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_simple() {
        let mut builder = SuffixArrayBuilder::with_defaults();
        builder.push(b"banana");
        let index = builder.build();

        assert_eq!(index.text().len(), 6);
        assert_eq!(index.meta().suffix_count, 6);
    }

    #[test]
    fn test_suffix_array_correctness() {
        let sa = build_suffix_array_parallel(b"banana");

        // a, ana, anana, banana, na, nana
        assert_eq!(sa, vec![5, 3, 1, 0, 4, 2]);
    }

    #[test]
    fn test_case_insensitive() {
        let mut builder = SuffixArrayBuilder::with_defaults();
        builder.push(b"HELLO World");
        let index = builder.build();

        assert_eq!(index.text(), b"hello world");
    }

    #[test]
    fn test_case_sensitive() {
        let mut builder = SuffixArrayBuilder::new(SuffixArrayConfig {
            case_insensitive: false,
        });
        builder.push(b"HeLLo");
        let index = builder.build();

        assert_eq!(index.text(), b"HeLLo");
        assert!(!index.meta().case_insensitive);
    }

    #[test]
    fn test_normalization_preserves_length() {
        let content = "Ünïcode Ælfred & CO.\n".as_bytes();
        let mut builder = SuffixArrayBuilder::with_defaults();
        builder.push(content);
        let index = builder.build();

        assert_eq!(index.text().len(), content.len());
        assert_eq!(index.text(), "ünïcode ælfred & co.\n".as_bytes());
    }

    #[test]
    fn test_empty_text() {
        let index = SuffixArrayBuilder::with_defaults().build();
        assert_eq!(index.meta().suffix_count, 0);
    }

    #[test]
    fn test_long_shared_prefixes_sort_fully() {
        // Suffixes share long runs; ordering must look past any fixed window
        let mut text = vec![b'a'; 600];
        text.push(b'b');
        text.extend(vec![b'a'; 600]);
        let sa = build_suffix_array_parallel(&text);

        for pair in sa.windows(2) {
            let (a, b) = (pair[0] as usize, pair[1] as usize);
            assert!(text[a..] < text[b..]);
        }
    }
}
