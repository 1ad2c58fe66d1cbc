use crate::error::SearchError;
use crate::query::SearchEngine;
use crate::render::{HTMX_REQUEST_HEADER, RenderMode, Rendered};
use axum::extract::{Query, State};
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::{IntoResponse, Response};
use std::sync::Arc;

/// Query string of `GET /search`
///
/// Both fields stay strings so a malformed page number falls back to page 0
/// instead of failing extraction. A repeated parameter keeps its first value.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SearchParams {
    pub q: Option<String>,
    pub p: Option<String>,
}

impl SearchParams {
    /// Collect `q` and `p` from decoded query pairs, first occurrence wins
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let mut params = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "q" => &mut params.q,
                "p" => &mut params.p,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value);
            }
        }
        params
    }
}

pub(super) async fn search(
    State(engine): State<Arc<SearchEngine>>,
    Query(pairs): Query<Vec<(String, String)>>,
    headers: HeaderMap,
) -> Result<Rendered, SearchError> {
    let params = SearchParams::from_pairs(pairs);
    let mode = RenderMode::from_htmx_header(
        headers
            .get(HTMX_REQUEST_HEADER)
            .and_then(|v| v.to_str().ok()),
    );

    let page = engine.search_params(params.q.as_deref(), params.p.as_deref())?;
    Ok(mode.renderer().render(&page))
}

pub(super) async fn health() -> &'static str {
    "ok"
}

impl IntoResponse for Rendered {
    fn into_response(self) -> Response {
        ([(header::CONTENT_TYPE, self.content_type)], self.body).into_response()
    }
}

impl IntoResponse for SearchError {
    fn into_response(self) -> Response {
        let status = match self {
            SearchError::BadQuery => StatusCode::BAD_REQUEST,
        };
        tracing::debug!("rejected search request: {}", self);
        (status, self.to_string()).into_response()
    }
}
