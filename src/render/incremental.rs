use super::{CONTENT_TYPE_HTML, Rendered, Renderer};
use crate::query::SearchPage;
use std::fmt::Write;

/// Renders a page as htmx table rows
///
/// Each match becomes `<tr><td><pre>start<mark>middle</mark>end</pre></td></tr>`.
/// When another page exists a final row holds a button that fetches it and
/// swaps itself out for the returned rows.
pub struct IncrementalRenderer;

impl Renderer for IncrementalRenderer {
    fn render(&self, page: &SearchPage) -> Rendered {
        let mut body = String::new();

        for snippet in &page.snippets {
            let _ = write!(
                body,
                "<tr><td><pre>{}<mark>{}</mark>{}</pre></td></tr>",
                snippet.start, snippet.middle, snippet.end
            );
        }

        if let Some(next) = page.next_page() {
            let _ = write!(
                body,
                r#"<tr><td><button id="load-more" hx-get="/search?p={}&q={}" hx-target="closest tr" hx-swap="outerHTML">Load more</button></td></tr>"#,
                next,
                urlencoding::encode(page.query.as_str())
            );
        }

        Rendered {
            content_type: CONTENT_TYPE_HTML,
            body,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::{Query, Snippet};

    fn snippet() -> Snippet {
        Snippet {
            start: "He drew his ".into(),
            middle: "Sword".into(),
            end: " &amp; ran.".into(),
        }
    }

    #[test]
    fn test_fragment_per_snippet() {
        let page = SearchPage {
            query: Query::parse("sword").unwrap(),
            page: 0,
            offsets: Vec::new(),
            snippets: vec![snippet(), snippet()],
            has_more: false,
        };
        let rendered = IncrementalRenderer.render(&page);

        assert_eq!(rendered.content_type, CONTENT_TYPE_HTML);
        assert_eq!(rendered.body.matches("<tr>").count(), 2);
        assert!(rendered.body.starts_with(
            "<tr><td><pre>He drew his <mark>Sword</mark> &amp; ran.</pre></td></tr>"
        ));
        assert!(!rendered.body.contains("load-more"));
    }

    #[test]
    fn test_load_more_targets_next_page() {
        let page = SearchPage {
            query: Query::parse("Good Night").unwrap(),
            page: 3,
            offsets: Vec::new(),
            snippets: vec![snippet()],
            has_more: true,
        };
        let rendered = IncrementalRenderer.render(&page);

        assert!(rendered.body.ends_with(
            r#"<tr><td><button id="load-more" hx-get="/search?p=4&q=good%20night" hx-target="closest tr" hx-swap="outerHTML">Load more</button></td></tr>"#
        ));
    }

    #[test]
    fn test_empty_page_renders_nothing() {
        let page = SearchPage {
            query: Query::parse("zzzzznotfound").unwrap(),
            page: 0,
            offsets: Vec::new(),
            snippets: Vec::new(),
            has_more: false,
        };

        assert!(IncrementalRenderer.render(&page).body.is_empty());
    }
}
