//! Match location through the suffix index

use crate::index::SuffixIndex;
use crate::query::parser::Query;

/// Finds match offsets for a normalized query
pub struct MatchLocator<'a> {
    index: &'a SuffixIndex,
}

impl<'a> MatchLocator<'a> {
    pub fn new(index: &'a SuffixIndex) -> Self {
        Self { index }
    }

    /// Return at most `limit` byte offsets where the query occurs
    ///
    /// Offsets keep the suffix order of the index. Callers rely on that
    /// order for paging, so it is never re-sorted by position.
    pub fn locate(&self, query: &Query, limit: usize) -> Vec<usize> {
        self.index
            .lookup(query.as_bytes(), limit)
            .into_iter()
            .map(|pos| pos as usize)
            .collect()
    }

    /// Total number of occurrences of the query
    pub fn count(&self, query: &Query) -> u64 {
        self.index.count_matches(query.as_bytes())
    }
}
