//! Suffix array indexing module
//!
//! This module provides O(m log n) exact substring search using suffix arrays.
//!
//! ## Architecture
//!
//! - `builder`: Case-folds the corpus and sorts its suffixes
//! - `reader`: In-memory range search and bounded lookup
//! - `types`: Core type definitions
//!
//! The index lives only in process memory; it is rebuilt on every start.

pub mod builder;
pub mod reader;
pub mod types;

// Re-exports for convenience
pub use builder::SuffixArrayBuilder;
pub use reader::SuffixIndex;
pub use types::{SuffixArrayConfig, SuffixArrayMeta, SuffixRange, TextPosition};
