//! Mock catalog tests for the copydesk library.
//!
//! These tests use wiremock to simulate the remote catalog and the
//! local import endpoint, exercising the listing controller end to end
//! without network access or a real license.

use copydesk::{
    ApiBaseUrl, ArticleKey, CatalogClient, Error, FetchOutcome, ImportOutcome, Importer,
    LicenseKey, ListingController, ListingView, Notice, PaginationState, PurchasedSource,
    RenderContext, Row, RowStyle, SearchSource,
};
use serde_json::json;
use url::Url;
use wiremock::matchers::{body_string, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Helper to create an API base URL from a mock server.
fn mock_base_url(server: &MockServer) -> ApiBaseUrl {
    // For tests, we need to allow HTTP localhost
    ApiBaseUrl::new(&format!("http://127.0.0.1:{}", server.address().port())).unwrap()
}

/// A listing view that records what it was told to display.
#[derive(Default)]
struct CaptureView {
    rows: Vec<Row>,
    notices: Vec<Notice>,
    pagination: Option<PaginationState>,
    controls_enabled: bool,
}

impl ListingView for CaptureView {
    fn set_controls_enabled(&mut self, enabled: bool) {
        self.controls_enabled = enabled;
    }

    fn show_loading(&mut self) {
        self.rows.clear();
    }

    fn show_rows(&mut self, rows: &[Row]) {
        self.rows = rows.to_vec();
    }

    fn show_notice(&mut self, notice: Notice) {
        self.notices.push(notice);
    }

    fn show_pagination(&mut self, state: Option<&PaginationState>) {
        self.pagination = state.copied();
    }
}

fn results(range: std::ops::Range<u32>) -> Vec<serde_json::Value> {
    range
        .map(|i| {
            json!({
                "key": i.to_string(),
                "title": format!("Article {}", i),
                "summary": "Summary.",
                "word_count": 500,
                "price": "24.00"
            })
        })
        .collect()
}

fn search_controller(
    server: &MockServer,
    terms: &str,
) -> ListingController<SearchSource, CaptureView> {
    let base = mock_base_url(server);
    let client = CatalogClient::new(base.clone());
    let source = SearchSource::new(client, terms);
    let ctx = RenderContext::unlicensed(base);
    ListingController::new(source, CaptureView::default(), ctx, RowStyle::Search)
}

// ============================================================================
// Search Listing Tests
// ============================================================================

#[tokio::test]
async fn test_search_first_page() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/find/article/by_text"))
        .and(query_param(
            "json",
            r#"{"query_terms":"ferns","offset":0,"max_items":20}"#,
        ))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "results": results(0..20),
            "count": 45
        })))
        .mount(&server)
        .await;

    let mut listing = search_controller(&server, "ferns");
    let outcome = listing.fetch(0).await;

    assert_eq!(
        outcome,
        FetchOutcome::Page {
            current_page: 1,
            total_pages: 3
        }
    );
    assert_eq!(listing.view().rows.len(), 20);
    let p = listing.pagination().unwrap();
    assert!(!p.prev_enabled());
    assert!(p.next_enabled());
    assert!(listing.view().controls_enabled);
}

#[tokio::test]
async fn test_search_last_page() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/find/article/by_text"))
        .and(query_param(
            "json",
            r#"{"query_terms":"ferns","offset":40,"max_items":20}"#,
        ))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "results": results(40..45),
            "count": 45
        })))
        .mount(&server)
        .await;

    let mut listing = search_controller(&server, "ferns");
    let outcome = listing.fetch(40).await;

    assert_eq!(
        outcome,
        FetchOutcome::Page {
            current_page: 3,
            total_pages: 3
        }
    );
    let p = listing.pagination().unwrap();
    assert!(p.prev_enabled());
    assert!(!p.next_enabled());
}

#[tokio::test]
async fn test_search_no_results() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/find/article/by_text"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "results": [],
            "count": 0
        })))
        .mount(&server)
        .await;

    let mut listing = search_controller(&server, "xyzzy");
    let outcome = listing.fetch(0).await;

    assert_eq!(outcome, FetchOutcome::Empty);
    assert_eq!(listing.view().notices, vec![Notice::NoResults]);
    assert_eq!(listing.view().pagination, None);
}

#[tokio::test]
async fn test_single_partial_page_hides_pagination() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/find/article/by_text"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "results": results(0..7),
            "count": 7
        })))
        .mount(&server)
        .await;

    let mut listing = search_controller(&server, "ferns");
    let outcome = listing.fetch(0).await;

    assert_eq!(
        outcome,
        FetchOutcome::Page {
            current_page: 1,
            total_pages: 1
        }
    );
    assert_eq!(listing.view().rows.len(), 7);
    assert_eq!(listing.view().pagination, None);
}

#[tokio::test]
async fn test_navigation_requests_following_offsets() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/find/article/by_text"))
        .and(query_param(
            "json",
            r#"{"query_terms":"ferns","offset":0,"max_items":20}"#,
        ))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "results": results(0..20),
            "count": 45
        })))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/find/article/by_text"))
        .and(query_param(
            "json",
            r#"{"query_terms":"ferns","offset":20,"max_items":20}"#,
        ))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "results": results(20..40),
            "count": 45
        })))
        .mount(&server)
        .await;

    let mut listing = search_controller(&server, "ferns");
    listing.fetch(0).await;
    let outcome = listing.next().await;

    assert_eq!(
        outcome,
        FetchOutcome::Page {
            current_page: 2,
            total_pages: 3
        }
    );
}

// ============================================================================
// Failure Handling Tests
// ============================================================================

#[tokio::test]
async fn test_server_error_surfaces_as_failure() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/find/article/by_text"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let mut listing = search_controller(&server, "ferns");
    let outcome = listing.fetch(20).await;

    assert_eq!(outcome, FetchOutcome::Failed);
    assert_eq!(listing.view().notices, vec![Notice::FailedToConnect]);
    // Offset preserved for a manual retry of the same page
    assert_eq!(listing.offset(), 20);
    assert!(listing.view().controls_enabled);
}

#[tokio::test]
async fn test_malformed_body_fails_closed() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/find/article/by_text"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
        .mount(&server)
        .await;

    let mut listing = search_controller(&server, "ferns");
    let outcome = listing.fetch(0).await;

    // An undecodable body is reported exactly like a transport failure
    assert_eq!(outcome, FetchOutcome::Failed);
    assert_eq!(listing.view().notices, vec![Notice::FailedToConnect]);
}

#[tokio::test]
async fn test_connection_refused_surfaces_as_failure() {
    // Nothing listens on port 1
    let base = ApiBaseUrl::new("http://127.0.0.1:1").unwrap();
    let client = CatalogClient::new(base.clone());
    let source = SearchSource::new(client, "ferns");
    let ctx = RenderContext::unlicensed(base);
    let mut listing =
        ListingController::new(source, CaptureView::default(), ctx, RowStyle::Search);

    let outcome = listing.fetch(0).await;

    assert_eq!(outcome, FetchOutcome::Failed);
    assert_eq!(listing.view().notices, vec![Notice::FailedToConnect]);
}

#[tokio::test]
async fn test_license_error_detection() {
    let server = MockServer::start().await;

    // The catalog answers unauthorised library lookups with a 500
    Mock::given(method("GET"))
        .and(path("/get/article/all_purchased"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({
            "error": "InvalidLicense",
            "message": "Unknown license key"
        })))
        .mount(&server)
        .await;

    let client = CatalogClient::new(mock_base_url(&server));
    let license = LicenseKey::new("bogus-key").unwrap();
    let result = client.purchased(&license, 0, 20).await;

    match result {
        Err(Error::Api(api)) => assert!(api.is_license_error()),
        other => panic!("expected API error, got {:?}", other),
    }
}

// ============================================================================
// Library Listing Tests
// ============================================================================

#[tokio::test]
async fn test_library_rows_offer_import_when_licensed() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/get/article/all_purchased"))
        .and(query_param(
            "json",
            r#"{"license_key":"abcd-1234","offset":0,"max_items":20}"#,
        ))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "results": [
                {
                    "key": "10020251",
                    "title": "Care of Ferns",
                    "date": { "text": "datetime(2013-05-14 09:21:03 UTC)" }
                }
            ],
            "count": 1
        })))
        .mount(&server)
        .await;

    let base = mock_base_url(&server);
    let client = CatalogClient::new(base.clone());
    let license = LicenseKey::new("abcd-1234").unwrap();
    let source = PurchasedSource::new(client, license.clone());
    let ctx = RenderContext::licensed(base, license);
    let mut listing =
        ListingController::new(source, CaptureView::default(), ctx, RowStyle::Library);

    let outcome = listing.fetch(0).await;

    assert_eq!(
        outcome,
        FetchOutcome::Page {
            current_page: 1,
            total_pages: 1
        }
    );
    let row = &listing.view().rows[0];
    assert_eq!(row.detail, "2013-05-14 09:21:03");
    assert_eq!(
        row.action,
        copydesk::Action::Import {
            key: ArticleKey::new("10020251").unwrap()
        }
    );
}

#[tokio::test]
async fn test_empty_library_notice() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/get/article/all_purchased"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "results": [],
            "count": 0
        })))
        .mount(&server)
        .await;

    let base = mock_base_url(&server);
    let client = CatalogClient::new(base.clone());
    let license = LicenseKey::new("abcd-1234").unwrap();
    let source = PurchasedSource::new(client, license.clone());
    let ctx = RenderContext::licensed(base, license);
    let mut listing =
        ListingController::new(source, CaptureView::default(), ctx, RowStyle::Library);

    let outcome = listing.fetch(0).await;

    assert_eq!(outcome, FetchOutcome::Empty);
    assert_eq!(listing.view().notices, vec![Notice::NoPurchases]);
}

// ============================================================================
// Import Tests
// ============================================================================

#[tokio::test]
async fn test_import_creates_draft() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/admin-endpoint"))
        .and(body_string("action=import&key=10020251&license=abcd-1234"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 42,
            "msg": "Import successful.",
            "draft_url": "https://site.example.com/?p=42",
            "title": "Care of Ferns",
            "summary": "A primer on indoor ferns."
        })))
        .mount(&server)
        .await;

    let endpoint =
        Url::parse(&format!("http://127.0.0.1:{}/admin-endpoint", server.address().port()))
            .unwrap();
    let importer = Importer::new(endpoint);
    let key = ArticleKey::new("10020251").unwrap();
    let license = LicenseKey::new("abcd-1234").unwrap();

    let outcome = importer.import(&key, &license).await.unwrap();

    assert_eq!(
        outcome,
        ImportOutcome::DraftCreated {
            id: 42,
            msg: "Import successful.".to_string(),
            draft_url: Some("https://site.example.com/?p=42".to_string()),
            title: Some("Care of Ferns".to_string()),
            summary: Some("A primer on indoor ferns.".to_string()),
        }
    );
}

#[tokio::test]
async fn test_import_message_only() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/admin-endpoint"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 0,
            "msg": "This article has already been imported."
        })))
        .mount(&server)
        .await;

    let endpoint =
        Url::parse(&format!("http://127.0.0.1:{}/admin-endpoint", server.address().port()))
            .unwrap();
    let importer = Importer::new(endpoint);
    let key = ArticleKey::new("10020251").unwrap();
    let license = LicenseKey::new("abcd-1234").unwrap();

    let outcome = importer.import(&key, &license).await.unwrap();

    assert_eq!(
        outcome,
        ImportOutcome::Notice {
            msg: "This article has already been imported.".to_string()
        }
    );
}

#[tokio::test]
async fn test_import_failure_is_an_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/admin-endpoint"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let endpoint =
        Url::parse(&format!("http://127.0.0.1:{}/admin-endpoint", server.address().port()))
            .unwrap();
    let importer = Importer::new(endpoint);
    let key = ArticleKey::new("10020251").unwrap();
    let license = LicenseKey::new("abcd-1234").unwrap();

    let result = importer.import(&key, &license).await;

    assert!(matches!(result, Err(Error::Api(_))));
}
