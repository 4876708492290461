use std::sync::Arc;

use artview::api::{ApiError, ArticClient, ArtworkSource, PageQuery};
use artview::core::action::{Action, Effect, update};
use artview::core::state::{App, LoadState};
use serde_json::{Value, json};
use wiremock::{
    matchers::{method, path, query_param, query_param_is_missing},
    Mock, MockServer, ResponseTemplate,
};

// ============================================================================
// Helper Functions
// ============================================================================

/// Listing body in the public API's shape, ids starting at `first_id`.
fn listing_body(first_id: u64, count: u64, total: u64) -> Value {
    let data: Vec<Value> = (first_id..first_id + count)
        .map(|id| {
            json!({
                "id": id,
                "title": format!("Artwork {}", id),
                "place_of_origin": "France",
                "artist_display": "Claude Monet\nFrench, 1840-1926",
                "inscriptions": null,
                "date_start": 1890,
                "date_end": 1891
            })
        })
        .collect();
    json!({
        "pagination": {
            "total": total,
            "limit": count,
            "offset": first_id,
            "total_pages": total.div_ceil(count.max(1)),
            "current_page": 1
        },
        "data": data
    })
}

// ============================================================================
// Client Tests
// ============================================================================

#[tokio::test]
async fn test_fetch_page_sends_one_based_page_and_limit() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/artworks"))
        .and(query_param("page", "2"))
        .and(query_param("limit", "10"))
        .respond_with(ResponseTemplate::new(200).set_body_json(listing_body(11, 10, 100)))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = ArticClient::new(Some(mock_server.uri()));
    let listing = client
        .fetch_page(PageQuery { page: 2, limit: 10 })
        .await
        .unwrap();

    assert_eq!(listing.records.len(), 10);
    assert_eq!(listing.total_count, 100);
    assert_eq!(listing.records[0].id, 11);
    assert_eq!(listing.records[0].inscriptions, "");
}

#[tokio::test]
async fn test_fetch_page_requests_table_fields() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/artworks"))
        .and(query_param(
            "fields",
            "id,title,place_of_origin,artist_display,inscriptions,date_start,date_end",
        ))
        .respond_with(ResponseTemplate::new(200).set_body_json(listing_body(1, 5, 5)))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = ArticClient::new(Some(mock_server.uri()));
    let result = client.fetch_page(PageQuery { page: 1, limit: 5 }).await;
    assert!(result.is_ok());
}

#[tokio::test]
async fn test_fetch_total_count_has_no_page_param() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/artworks"))
        .and(query_param_is_missing("page"))
        .respond_with(ResponseTemplate::new(200).set_body_json(listing_body(1, 12, 128194)))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = ArticClient::new(Some(mock_server.uri()));
    let total = client.fetch_total_count().await.unwrap();
    assert_eq!(total, 128194);
}

#[tokio::test]
async fn test_api_error_response() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/artworks"))
        .respond_with(ResponseTemplate::new(503).set_body_string("Service Unavailable"))
        .mount(&mock_server)
        .await;

    let client = ArticClient::new(Some(mock_server.uri()));
    let result = client.fetch_page(PageQuery { page: 1, limit: 10 }).await;

    match result {
        Err(ApiError::Api { status, message }) => {
            assert_eq!(status, 503);
            assert_eq!(message, "Service Unavailable");
        }
        other => panic!("expected Api error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_total_count_api_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/artworks"))
        .and(query_param_is_missing("page"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = ArticClient::new(Some(mock_server.uri()));
    match client.fetch_total_count().await {
        Err(ApiError::Api { status, message }) => {
            assert_eq!(status, 500);
            assert_eq!(message, "boom");
        }
        other => panic!("expected Api error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_malformed_body_is_parse_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/artworks"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
        .mount(&mock_server)
        .await;

    let client = ArticClient::new(Some(mock_server.uri()));
    let result = client.fetch_total_count().await;
    assert!(matches!(result, Err(ApiError::Parse(_))));
}

#[tokio::test]
async fn test_unreachable_server_is_network_error() {
    // Port 9 (discard) on localhost is almost never listening
    let client = ArticClient::new(Some("http://127.0.0.1:9".to_string()));
    let result = client.fetch_page(PageQuery { page: 1, limit: 5 }).await;
    assert!(matches!(result, Err(ApiError::Network(_))));
}

// ============================================================================
// Controller + Client
// ============================================================================

/// Runs the effect the way the event loop would, but inline.
async fn run_effect(app: &mut App, source: &Arc<dyn ArtworkSource>, effect: Effect) {
    if let Effect::FetchPage { page, with_total } = effect {
        if with_total {
            let action = match source.fetch_total_count().await {
                Ok(total) => Action::TotalCountLoaded(total),
                Err(e) => Action::TotalCountFailed(e.to_string()),
            };
            update(app, action);
        }
        let action = match source.fetch_page(page.query()).await {
            Ok(listing) => Action::PageLoaded { page, listing },
            Err(e) => Action::PageFailed {
                page,
                error: e.to_string(),
            },
        };
        update(app, action);
    }
}

#[tokio::test]
async fn test_ten_pages_then_advance_requests_page_two() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/artworks"))
        .and(query_param_is_missing("page"))
        .respond_with(ResponseTemplate::new(200).set_body_json(listing_body(1, 12, 100)))
        .expect(1)
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/artworks"))
        .and(query_param("page", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(listing_body(1, 10, 100)))
        .expect(1)
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/artworks"))
        .and(query_param("page", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(listing_body(11, 10, 100)))
        .expect(1)
        .mount(&mock_server)
        .await;

    let source: Arc<dyn ArtworkSource> = Arc::new(ArticClient::new(Some(mock_server.uri())));
    let mut app = App::new(source.clone(), 10);

    let effect = update(&mut app, Action::Mount);
    run_effect(&mut app, &source, effect).await;

    assert_eq!(app.load_state, LoadState::Idle);
    assert_eq!(app.records.len(), 10);
    assert_eq!(app.page_count(), 10);

    let effect = update(&mut app, Action::NextPage);
    assert!(app.is_loading());
    run_effect(&mut app, &source, effect).await;

    assert_eq!(app.page.page_index, 1);
    assert_eq!(app.records[0].id, 11);
}

#[tokio::test]
async fn test_failed_page_keeps_previous_records() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/artworks"))
        .and(query_param_is_missing("page"))
        .respond_with(ResponseTemplate::new(200).set_body_json(listing_body(1, 12, 50)))
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/artworks"))
        .and(query_param("page", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(listing_body(1, 5, 50)))
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/artworks"))
        .and(query_param("page", "2"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let source: Arc<dyn ArtworkSource> = Arc::new(ArticClient::new(Some(mock_server.uri())));
    let mut app = App::new(source.clone(), 5);

    let effect = update(&mut app, Action::Mount);
    run_effect(&mut app, &source, effect).await;
    update(&mut app, Action::BulkSelect(3));
    let before = app.records.clone();

    let effect = update(&mut app, Action::NextPage);
    run_effect(&mut app, &source, effect).await;

    assert_eq!(app.records, before);
    assert_eq!(app.load_state, LoadState::Idle);
    assert_eq!(app.selection.len(), 3);
    assert!(app.last_error.as_deref().unwrap_or("").contains("500"));
}
