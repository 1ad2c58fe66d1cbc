//! Request parameter parsing
//!
//! Turns the raw `q` and `p` parameters into a validated [`Query`] and a
//! zero-based page number.

use crate::error::SearchError;
use crate::utils::case::fold_case;

/// A validated, case-folded search query
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    /// Case-folded query text, same byte length as the input
    normalized: String,
}

impl Query {
    /// Validate and normalize a query string
    ///
    /// Any non-empty string is accepted, whitespace included.
    pub fn parse(input: &str) -> Result<Self, SearchError> {
        if input.is_empty() {
            return Err(SearchError::BadQuery);
        }

        Ok(Self {
            normalized: fold_case(input),
        })
    }

    /// Validate an optional query parameter
    pub fn from_param(input: Option<&str>) -> Result<Self, SearchError> {
        Self::parse(input.unwrap_or_default())
    }

    /// Normalized query text
    pub fn as_str(&self) -> &str {
        &self.normalized
    }

    /// Normalized query bytes, as matched against the index
    pub fn as_bytes(&self) -> &[u8] {
        self.normalized.as_bytes()
    }

    /// Match length in corpus bytes
    pub fn len(&self) -> usize {
        self.normalized.len()
    }

    pub fn is_empty(&self) -> bool {
        self.normalized.is_empty()
    }
}

/// Parse the `p` parameter
///
/// Missing, negative or otherwise non-numeric values all mean page 0.
/// Surrounding whitespace makes a value non-numeric.
pub fn parse_page(input: Option<&str>) -> usize {
    input.and_then(|p| p.parse().ok()).unwrap_or(0)
}
