//! # versefind - suffix-array search over a static corpus
//!
//! versefind loads one large, never-changing text corpus, indexes it with a
//! suffix array, and answers case-insensitive substring queries with
//! paginated context snippets snapped to sentence and line boundaries.
//!
//! ## Architecture
//!
//! The crate is organized into these main modules:
//!
//! - [`index`] - Corpus loading and suffix array construction
//! - [`query`] - Query validation, match location, paging, snippets
//! - [`render`] - JSON (batch) and htmx fragment (incremental) output
//! - [`server`] - axum HTTP surface
//! - [`output`] - Terminal output for one-shot searches
//! - [`utils`] - Configuration, escaping, progress spinners
//!
//! ## Quick Start
//!
//! ```no_run
//! use versefind::index::CorpusStore;
//! use versefind::query::{Query, SearchEngine};
//! use std::path::Path;
//!
//! let store = CorpusStore::open(Path::new("completeworks.txt")).unwrap();
//! let engine = SearchEngine::new(store, 20);
//!
//! let page = engine.search(Query::parse("sword").unwrap(), 0);
//! for snippet in &page.snippets {
//!     println!("{}", snippet.joined());
//! }
//! ```
//!
//! ## Result order
//!
//! Matches come back in suffix array order (the sorted order of the text
//! following each match), not in reading order. Paging depends on that
//! order staying fixed.

pub mod error;
pub mod index;
pub mod output;
pub mod query;
pub mod render;
pub mod server;
pub mod utils;
