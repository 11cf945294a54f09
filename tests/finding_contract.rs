//! Finding service contract tests.
//!
//! Verify the HTTP exchange against a mock server:
//! - Query parameters are sent with the canonical names and values
//! - Invalid parameters never reach the network
//! - Non-200 statuses and undecodable bodies map to distinct errors

use finding::{FindingClient, FindingError, RawParams, ResultProvider, ValidationError};
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> FindingClient {
    FindingClient::new(reqwest::Client::new(), "test-app").with_url(format!("{}/find", server.uri()))
}

// ────────────────────────────────────────────────────────────────────────────
// Request format
// ────────────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_request_carries_canonical_query() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/find"))
        .and(query_param("OPERATION-NAME", "findItemsAdvanced"))
        .and(query_param("SERVICE-VERSION", "1.0.0"))
        .and(query_param("SECURITY-APPNAME", "test-app"))
        .and(query_param("RESPONSE-DATA-FORMAT", "JSON"))
        .and(query_param("Global-ID", "EBAY-GB"))
        .and(query_param("categoryId(0)", "267"))
        .and(query_param("itemFilter(0).name", "MaxPrice"))
        .and(query_param("itemFilter(0).value(0)", "25.5"))
        .and(query_param("itemFilter(0).paramName", "Currency"))
        .and(query_param("itemFilter(0).paramValue", "GBP"))
        .and(query_param("paginationInput.entriesPerPage", "10"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"findItemsAdvancedResponse": [{"ack": ["Success"]}]})),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let raw = RawParams::from([
        ("Global-ID", "EBAY-GB"),
        ("categoryId", "267"),
        ("itemFilter.name", "MaxPrice"),
        ("itemFilter.value", "25.5"),
        ("itemFilter.paramName", "Currency"),
        ("itemFilter.paramValue", "GBP"),
        ("paginationInput.entriesPerPage", "10"),
    ]);
    let resp = client_for(&mock_server)
        .find_items_advanced(&raw)
        .await
        .expect("request should succeed");
    assert_eq!(resp.results()[0].ack, vec!["Success"]);
}

#[tokio::test]
async fn test_product_request_uses_type_attribute() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(query_param("OPERATION-NAME", "findItemsByProduct"))
        .and(query_param("productId.@type", "ISBN"))
        .and(query_param("productId", "0131103628"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"findItemsByProductResponse": [{"ack": ["Success"]}]})),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let raw = RawParams::from([("productId.@type", "ISBN"), ("productId", "0131103628")]);
    let resp = client_for(&mock_server)
        .find_items_by_product(&raw)
        .await
        .expect("request should succeed");
    assert_eq!(resp.results().len(), 1);
}

// ────────────────────────────────────────────────────────────────────────────
// Response handling
// ────────────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_success_decodes_items() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/find"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "findItemsByKeywordsResponse": [{
                "ack": ["Success"],
                "paginationOutput": [{"totalEntries": ["1"], "totalPages": ["1"]}],
                "searchResult": [{
                    "@count": "1",
                    "item": [{
                        "itemId": ["42"],
                        "title": ["Programming Rust"],
                        "sellingStatus": [{
                            "currentPrice": [{"@currencyId": "USD", "__value__": "44.0"}]
                        }]
                    }]
                }]
            }]
        })))
        .mount(&mock_server)
        .await;

    let raw = RawParams::from([("keywords", "programming rust")]);
    let resp = client_for(&mock_server)
        .find_items_by_keywords(&raw)
        .await
        .expect("request should succeed");

    let page = &resp.results()[0];
    let items: Vec<_> = page.items().collect();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].title(), Some("Programming Rust"));
    assert_eq!(
        items[0].current_price().map(|p| p.value.as_str()),
        Some("44.0")
    );
}

#[tokio::test]
async fn test_validation_failure_sends_nothing() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    let raw = RawParams::from([("categoryId", "1"), ("categoryId(0)", "2")]);
    let err = client_for(&mock_server)
        .find_items_by_category(&raw)
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        FindingError::Validation(ValidationError::IndexSyntax { .. })
    ));
    assert_eq!(err.status_code(), 400);
}

#[tokio::test]
async fn test_non_200_maps_to_status_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503).set_body_string("unavailable"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let raw = RawParams::from([("keywords", "rust")]);
    let err = client_for(&mock_server)
        .find_items_by_keywords(&raw)
        .await
        .unwrap_err();

    assert!(matches!(err, FindingError::Status(503)));
    assert_eq!(err.status_code(), 500);
}

#[tokio::test]
async fn test_invalid_json_maps_to_decode_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
        .mount(&mock_server)
        .await;

    let raw = RawParams::from([("storeName", "Rust Books")]);
    let err = client_for(&mock_server)
        .find_items_in_stores(&raw)
        .await
        .unwrap_err();

    match err {
        FindingError::Decode(message) => {
            assert!(message.starts_with("findItemsIneBayStoresResponse: "));
        }
        other => panic!("expected decode error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_unreachable_server_maps_to_transport_error() {
    let client = FindingClient::new(reqwest::Client::new(), "test-app")
        .with_url("http://127.0.0.1:1/find");

    let raw = RawParams::from([("keywords", "rust")]);
    let err = client.find_items_by_keywords(&raw).await.unwrap_err();
    assert!(matches!(err, FindingError::Transport(_)));
}
