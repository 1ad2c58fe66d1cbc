//! Integration tests for the HTTP search API.
//!
//! These drive the axum router in-process and check both rendering modes
//! end to end: parameter parsing, paging, escaping and error responses.

mod common;

use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use std::fs;
use std::path::Path;
use tower::ServiceExt;
use versefind::server::router;

/// Send a GET request and return status, content type and body
async fn get(uri: &str, htmx: bool) -> (StatusCode, String, String) {
    get_with_static(uri, htmx, Path::new("does-not-exist")).await
}

async fn get_with_static(uri: &str, htmx: bool, static_dir: &Path) -> (StatusCode, String, String) {
    let app = router(common::engine(20), static_dir);

    let mut request = Request::builder().uri(uri);
    if htmx {
        request = request.header("HX-Request", "true");
    }
    let response = app
        .oneshot(request.body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .map(|v| v.to_str().unwrap().to_string())
        .unwrap_or_default();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();

    (status, content_type, String::from_utf8(bytes.to_vec()).unwrap())
}

#[tokio::test]
async fn test_batch_first_page() {
    let (status, content_type, body) = get("/search?q=sword", false).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(content_type, "application/json");

    let results: Vec<String> = serde_json::from_str(&body).unwrap();
    assert_eq!(results.len(), 20);
    for result in &results {
        assert!(result.to_lowercase().contains("sword"));
        assert!(!result.contains('<'));
        assert!(!result.contains('"'));
    }
}

#[tokio::test]
async fn test_batch_is_case_insensitive() {
    let (_, _, lower) = get("/search?q=sword", false).await;
    let (_, _, upper) = get("/search?q=SWORD", false).await;

    assert_eq!(lower, upper);
}

#[tokio::test]
async fn test_incremental_first_page() {
    let (status, content_type, body) = get("/search?q=Sword", true).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(content_type, "text/html; charset=utf-8");
    assert_eq!(body.matches("<tr><td><pre>").count(), 20);
    assert_eq!(body.matches("<mark>").count(), 20);
    assert!(body.ends_with(
        r#"<tr><td><button id="load-more" hx-get="/search?p=1&q=sword" hx-target="closest tr" hx-swap="outerHTML">Load more</button></td></tr>"#
    ));
}

#[tokio::test]
async fn test_incremental_last_page_has_no_load_more() {
    // 60 matches at 20 per page: page 2 is the last
    let (_, _, body) = get("/search?q=sword&p=2", true).await;

    assert_eq!(body.matches("<mark>").count(), 20);
    assert!(!body.contains("load-more"));
}

#[tokio::test]
async fn test_no_matches() {
    let (status, _, body) = get("/search?q=zzzzznotfound", false).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "[]");

    let (status, _, body) = get("/search?q=zzzzznotfound", true).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.is_empty());
}

#[tokio::test]
async fn test_empty_query_rejected() {
    for uri in ["/search", "/search?q=", "/search?p=1"] {
        for htmx in [false, true] {
            let (status, _, body) = get(uri, htmx).await;
            assert_eq!(status, StatusCode::BAD_REQUEST, "{}", uri);
            assert_eq!(body, "missing search query in URL params");
        }
    }
}

#[tokio::test]
async fn test_repeated_params_use_first_value() {
    let (_, _, sword) = get("/search?q=sword", false).await;
    let (status, _, repeated) = get("/search?q=sword&q=castle", false).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(sword, repeated);

    let (_, _, page_one) = get("/search?q=sword&p=1", true).await;
    let (status, _, repeated) = get("/search?q=sword&p=1&p=2", true).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(page_one, repeated);
    assert!(repeated.contains("hx-get=\"/search?p=2&q=sword\""));

    // An empty first q is still a missing query
    let (status, _, body) = get("/search?q=&q=sword", false).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, "missing search query in URL params");
}

#[tokio::test]
async fn test_padded_page_is_first_page() {
    let (_, _, first) = get("/search?q=sword", false).await;
    let (status, _, padded) = get("/search?q=sword&p=%201", false).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(first, padded);
}

#[tokio::test]
async fn test_non_numeric_page_is_first_page() {
    let (_, _, first) = get("/search?q=sword", false).await;
    let (status, _, garbage) = get("/search?q=sword&p=abc", false).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(first, garbage);
}

#[tokio::test]
async fn test_page_past_end_is_empty() {
    let (status, _, body) = get("/search?q=sword&p=50", false).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "[]");
}

#[tokio::test]
async fn test_pages_cover_all_matches() {
    let mut all = Vec::new();
    for p in 0..4 {
        let (_, _, body) = get(&format!("/search?q=sword&p={}", p), false).await;
        let results: Vec<String> = serde_json::from_str(&body).unwrap();
        all.extend(results);
    }

    assert_eq!(all.len(), 60);
}

#[tokio::test]
async fn test_query_is_url_decoded() {
    let (_, _, body) = get("/search?q=the%20sword", true).await;

    assert_eq!(body.matches("<mark>the sword</mark>").count(), 20);
    assert!(body.contains("hx-get=\"/search?p=1&q=the%20sword\""));
}

#[tokio::test]
async fn test_health() {
    let (status, _, body) = get("/health", false).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "ok");
}

#[tokio::test]
async fn test_static_fallback() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("index.html"), "<h1>versefind</h1>").unwrap();

    let (status, _, body) = get_with_static("/", false, dir.path()).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "<h1>versefind</h1>");

    let (status, _, _) = get_with_static("/missing.css", false, dir.path()).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
