//! Result rendering
//!
//! A search page is rendered in one of two modes:
//!
//! - [`BatchRenderer`] - a JSON array with one string per match, for
//!   programmatic clients
//! - [`IncrementalRenderer`] - HTML table rows for htmx clients, followed by
//!   a self-replacing "Load more" row when another page exists
//!
//! The request picks the mode; the handler only asks [`RenderMode`] for the
//! matching renderer.

mod batch;
mod incremental;

pub use batch::BatchRenderer;
pub use incremental::IncrementalRenderer;

use crate::query::SearchPage;

/// Header htmx sets on every request it issues
pub const HTMX_REQUEST_HEADER: &str = "HX-Request";

pub const CONTENT_TYPE_JSON: &str = "application/json";
pub const CONTENT_TYPE_HTML: &str = "text/html; charset=utf-8";

/// A rendered response body and its content type
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendered {
    pub content_type: &'static str,
    pub body: String,
}

/// Turns a search page into a response body
pub trait Renderer: Send + Sync {
    fn render(&self, page: &SearchPage) -> Rendered;
}

/// Which renderer a request asked for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderMode {
    #[default]
    Batch,
    Incremental,
}

impl RenderMode {
    /// Pick the mode from the value of the `HX-Request` header
    pub fn from_htmx_header(value: Option<&str>) -> Self {
        match value {
            Some("true") => RenderMode::Incremental,
            _ => RenderMode::Batch,
        }
    }

    pub fn renderer(self) -> &'static dyn Renderer {
        match self {
            RenderMode::Batch => &BatchRenderer,
            RenderMode::Incremental => &IncrementalRenderer,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_from_header() {
        assert_eq!(RenderMode::from_htmx_header(None), RenderMode::Batch);
        assert_eq!(RenderMode::from_htmx_header(Some("false")), RenderMode::Batch);
        assert_eq!(
            RenderMode::from_htmx_header(Some("true")),
            RenderMode::Incremental
        );
    }
}
