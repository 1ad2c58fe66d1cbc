pub mod executor;
pub mod locator;
pub mod paginator;
pub mod parser;
pub mod snippet;

pub use executor::{DEFAULT_PAGE_SIZE, SearchEngine, SearchPage};
pub use locator::MatchLocator;
pub use paginator::{PageSlice, Pagination};
pub use parser::{Query, parse_page};
pub use snippet::{Snippet, SnippetBuilder, SnippetSpans};
