//! Integration tests for `FirecrawlClient` using wiremock HTTP mocks.

use hookline_firecrawl::{FirecrawlClient, FirecrawlError};
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_client(base_url: &str) -> FirecrawlClient {
    FirecrawlClient::with_base_url("test-key", 30, base_url)
        .expect("client construction should not fail")
}

#[tokio::test]
async fn scrape_returns_markdown_document() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/scrape"))
        .and(header("authorization", "Bearer test-key"))
        .and(body_json(serde_json::json!({
            "url": "https://example.com/article",
            "formats": ["markdown"],
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "success": true,
            "data": { "markdown": "# Title\n\nBody text." }
        })))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let doc = client
        .scrape("https://example.com/article")
        .await
        .expect("should scrape");

    assert_eq!(doc.url, "https://example.com/article");
    assert_eq!(doc.markdown, "# Title\n\nBody text.");
}

#[tokio::test]
async fn scrape_surfaces_upstream_status_and_body() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/scrape"))
        .respond_with(ResponseTemplate::new(402).set_body_json(serde_json::json!({
            "error": "Payment required"
        })))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let err = client
        .scrape("https://example.com")
        .await
        .expect_err("non-2xx should fail");

    match err {
        FirecrawlError::UnexpectedStatus { status, url, body } => {
            assert_eq!(status, 402);
            assert_eq!(url, "https://example.com");
            assert_eq!(body["error"], "Payment required");
        }
        other => panic!("expected UnexpectedStatus, got: {other:?}"),
    }
}

#[tokio::test]
async fn scrape_with_empty_markdown_is_empty_content() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/scrape"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "success": true,
            "data": { "markdown": "" }
        })))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let err = client
        .scrape("https://example.com")
        .await
        .expect_err("empty markdown should fail");

    assert!(
        matches!(err, FirecrawlError::EmptyContent { ref url } if url == "https://example.com"),
        "expected EmptyContent, got: {err:?}"
    );
}

#[tokio::test]
async fn scrape_with_missing_data_is_empty_content() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/scrape"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "success": true
        })))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let err = client
        .scrape("https://example.com")
        .await
        .expect_err("missing data should fail");

    assert!(matches!(err, FirecrawlError::EmptyContent { .. }));
}

#[tokio::test]
async fn scrape_with_non_json_error_body_still_reports_status() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/scrape"))
        .respond_with(ResponseTemplate::new(500).set_body_string("upstream blew up"))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let err = client
        .scrape("https://example.com")
        .await
        .expect_err("500 should fail");

    match err {
        FirecrawlError::UnexpectedStatus { status, body, .. } => {
            assert_eq!(status, 500);
            assert_eq!(body, serde_json::Value::String("upstream blew up".into()));
        }
        other => panic!("expected UnexpectedStatus, got: {other:?}"),
    }
}

#[test]
fn with_base_url_rejects_garbage() {
    let err = FirecrawlClient::with_base_url("k", 30, "not a url")
        .expect_err("garbage base URL should fail");
    assert!(matches!(err, FirecrawlError::InvalidBaseUrl { .. }));
}
