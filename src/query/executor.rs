//! Search execution
//!
//! Runs one request end to end: locate the bounded offset list, cut the
//! requested page, and build a snippet for every offset on it.

use crate::error::SearchError;
use crate::index::CorpusStore;
use crate::query::locator::MatchLocator;
use crate::query::paginator::Pagination;
use crate::query::parser::{Query, parse_page};
use crate::query::snippet::{Snippet, SnippetBuilder};

/// Default number of snippets per page
pub const DEFAULT_PAGE_SIZE: usize = 20;

/// One page of search results
#[derive(Debug, Clone)]
pub struct SearchPage {
    pub query: Query,
    pub page: usize,
    /// Match offsets on this page, in index order
    pub offsets: Vec<usize>,
    /// One snippet per offset
    pub snippets: Vec<Snippet>,
    /// Whether a further page exists
    pub has_more: bool,
}

impl SearchPage {
    pub fn is_empty(&self) -> bool {
        self.snippets.is_empty()
    }

    pub fn next_page(&self) -> Option<usize> {
        self.has_more.then(|| self.page + 1)
    }
}

/// The search engine shared by every request
///
/// Holds only immutable state, so one instance serves any number of
/// concurrent requests through `&self`.
pub struct SearchEngine {
    store: CorpusStore,
    page_size: usize,
}

impl SearchEngine {
    pub fn new(store: CorpusStore, page_size: usize) -> Self {
        Self {
            store,
            page_size: page_size.max(1),
        }
    }

    pub fn store(&self) -> &CorpusStore {
        &self.store
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn locator(&self) -> MatchLocator<'_> {
        MatchLocator::new(self.store.index())
    }

    /// Validate raw `q` / `p` parameters and run the search
    pub fn search_params(
        &self,
        query: Option<&str>,
        page: Option<&str>,
    ) -> Result<SearchPage, SearchError> {
        let query = Query::from_param(query)?;
        Ok(self.search(query, parse_page(page)))
    }

    /// Run a validated query for one page
    pub fn search(&self, query: Query, page: usize) -> SearchPage {
        let pagination = Pagination::new(self.page_size, page);
        let offsets = self.locator().locate(&query, pagination.limit());
        let slice = pagination.slice(&offsets);

        let builder = SnippetBuilder::new(self.store.text());
        let snippets = slice
            .offsets
            .iter()
            .map(|&offset| builder.build(offset, query.len()))
            .collect();

        tracing::debug!(
            query = query.as_str(),
            page,
            located = offsets.len(),
            has_more = slice.has_more,
            "search executed"
        );

        SearchPage {
            query,
            page,
            offsets: slice.offsets.to_vec(),
            snippets,
            has_more: slice.has_more,
        }
    }
}
