//! Types for suffix array indexing
//!
//! This module defines the core types used for suffix array-based search,
//! which provides O(m log n) exact substring matching.

use serde::{Deserialize, Serialize};

/// Position in the corpus text (supports up to 16 exabytes)
pub type TextPosition = u64;

/// Suffix array entry - position in the normalized corpus
pub type SuffixEntry = u64;

/// Corpora above this size are sorted with rayon's parallel sort
pub const PARALLEL_SORT_THRESHOLD: usize = 100_000;

/// Half-open range `[lo, hi)` of suffix array slots whose suffixes start
/// with a searched pattern
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SuffixRange {
    pub lo: u64,
    pub hi: u64,
}

impl SuffixRange {
    /// Number of suffixes in the range
    pub fn len(&self) -> u64 {
        self.hi - self.lo
    }

    pub fn is_empty(&self) -> bool {
        self.lo >= self.hi
    }
}

/// Suffix array metadata reported by `versefind stats`
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SuffixArrayMeta {
    /// Number of suffixes, one per byte of indexed text
    pub suffix_count: u64,
    /// Whether the text was case-folded before sorting
    pub case_insensitive: bool,
    /// Wall time spent sorting, in milliseconds
    pub build_ms: f64,
}

/// Configuration for suffix array building
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuffixArrayConfig {
    /// Build case-insensitive SA by lowercasing text (default: true)
    pub case_insensitive: bool,
}

impl Default for SuffixArrayConfig {
    fn default() -> Self {
        Self {
            case_insensitive: true,
        }
    }
}
