//! Error types for corpus loading and request handling

use std::path::PathBuf;
use thiserror::Error;

/// Failures while loading the corpus at startup
///
/// Any of these means the process must not start serving.
#[derive(Debug, Error)]
pub enum CorpusError {
    #[error("failed to open corpus {}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to map corpus {}", path.display())]
    Map {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Failures of a single search request
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SearchError {
    /// The `q` parameter was missing or empty
    #[error("missing search query in URL params")]
    BadQuery,
}
