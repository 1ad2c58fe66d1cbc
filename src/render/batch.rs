use super::{CONTENT_TYPE_JSON, Rendered, Renderer};
use crate::query::SearchPage;
use serde_json::Value;

/// Renders a page as a JSON array of escaped snippet strings
pub struct BatchRenderer;

impl Renderer for BatchRenderer {
    fn render(&self, page: &SearchPage) -> Rendered {
        let results: Vec<String> = page.snippets.iter().map(|s| s.joined()).collect();

        tracing::info!(
            "{} results for api query {}",
            results.len(),
            page.query.as_str()
        );

        Rendered {
            content_type: CONTENT_TYPE_JSON,
            body: Value::from(results).to_string(),
        }
    }
}
