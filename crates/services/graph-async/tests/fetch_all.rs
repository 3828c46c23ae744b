use std::time::Duration;

use graph_async::test_support::{EnvGuard, TEST_ACCESS_TOKEN, config_for};
use graph_async::types::fields::PRODUCT_FIELDS;
use graph_async::{Client, ErrorKind, FetchRequest, GraphConfig, GraphError};
use serde_json::json;
use serial_test::serial;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_client(server: &MockServer) -> Client<GraphConfig> {
    Client::with_config(config_for(server.uri()))
}

fn products_request() -> FetchRequest {
    FetchRequest::new("123/products")
        .fields(PRODUCT_FIELDS)
        .limit(100)
}

fn page(ids: &[&str], next: Option<String>) -> serde_json::Value {
    let data: Vec<_> = ids.iter().map(|id| json!({"id": id})).collect();
    match next {
        Some(next) => json!({"data": data, "paging": {"cursors": {"after": "c"}, "next": next}}),
        None => json!({"data": data}),
    }
}

#[tokio::test]
async fn first_request_carries_token_fields_and_limit() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/123/products"))
        .and(query_param("access_token", TEST_ACCESS_TOKEN))
        .and(query_param("fields", PRODUCT_FIELDS.join(",")))
        .and(query_param("limit", "100"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page(&["1"], None)))
        .expect(1)
        .mount(&server)
        .await;

    let records = test_client(&server)
        .fetch_all(products_request())
        .await
        .unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0]["id"], "1");
}

#[tokio::test]
async fn empty_collection_is_empty_vec() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/123/products"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": []})))
        .expect(1)
        .mount(&server)
        .await;

    let records = test_client(&server)
        .fetch_all(products_request())
        .await
        .unwrap();
    assert!(records.is_empty());
}

#[tokio::test]
async fn follows_next_links_in_order() {
    let server = MockServer::start().await;
    let uri = server.uri();

    Mock::given(method("GET"))
        .and(path("/123/products"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page(
            &["1", "2"],
            Some(format!("{uri}/page2?access_token=t&after=c1")),
        )))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/page2"))
        .and(query_param("after", "c1"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(page(&["3"], Some(format!("{uri}/page3?after=c2")))),
        )
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/page3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page(&["4", "5"], None)))
        .expect(1)
        .mount(&server)
        .await;

    let records = test_client(&server)
        .fetch_all(products_request())
        .await
        .unwrap();
    let ids: Vec<_> = records.iter().map(|r| r["id"].as_str().unwrap()).collect();
    assert_eq!(ids, vec!["1", "2", "3", "4", "5"]);

    let requests = server.received_requests().await.unwrap();
    let paths: Vec<_> = requests.iter().map(|r| r.url.path().to_string()).collect();
    assert_eq!(paths, vec!["/123/products", "/page2", "/page3"]);

    // Continuation links are used verbatim: nothing is appended to them.
    assert_eq!(requests[1].url.query(), Some("access_token=t&after=c1"));
    assert_eq!(requests[2].url.query(), Some("after=c2"));
}

#[tokio::test]
async fn empty_next_link_ends_pagination() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/123/products"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"data": [{"id": "1"}], "paging": {"next": ""}})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let records = test_client(&server)
        .fetch_all(products_request())
        .await
        .unwrap();
    assert_eq!(records.len(), 1);
}

#[tokio::test]
async fn error_object_on_200_is_application_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/123/products"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "error": {
                "message": "Unsupported get request.",
                "type": "GraphMethodException",
                "code": 100,
                "error_subcode": 33,
                "fbtrace_id": "A1"
            }
        })))
        .mount(&server)
        .await;

    let err = test_client(&server)
        .fetch_all(products_request())
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Application);
    let obj = err.api_error().unwrap();
    assert_eq!(obj.message, "Unsupported get request.");
    assert_eq!(obj.error_subcode, Some(33));
}

#[tokio::test]
async fn error_on_later_page_discards_earlier_records() {
    let server = MockServer::start().await;
    let uri = server.uri();

    Mock::given(method("GET"))
        .and(path("/123/products"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(page(&["1"], Some(format!("{uri}/page2")))),
        )
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/page2"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"error": {"message": "Please reduce the amount of data"}})),
        )
        .mount(&server)
        .await;

    let err = test_client(&server)
        .fetch_all(products_request())
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Application);
}

#[tokio::test]
async fn server_error_is_http_error_with_status() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/123/products"))
        .respond_with(ResponseTemplate::new(500).set_body_string("upstream exploded"))
        .mount(&server)
        .await;

    let err = test_client(&server)
        .fetch_all(products_request())
        .await
        .unwrap_err();
    match err {
        GraphError::Http { status, body } => {
            assert_eq!(status, 500);
            assert_eq!(body, "upstream exploded");
        }
        other => panic!("expected Http, got {other:?}"),
    }
}

#[tokio::test]
async fn client_error_with_error_body_is_http_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/123/products"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "error": {"message": "Invalid OAuth access token.", "code": 190}
        })))
        .mount(&server)
        .await;

    let err = test_client(&server)
        .fetch_all(products_request())
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Http);
    assert_eq!(err.status(), Some(400));
    assert!(err.to_string().contains("Invalid OAuth access token."));
}

#[tokio::test]
async fn non_json_body_is_decode_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/123/products"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
        .mount(&server)
        .await;

    let err = test_client(&server)
        .fetch_all(products_request())
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Decode);
}

#[tokio::test]
async fn refused_connection_on_second_page_is_connection_error() {
    let server = MockServer::start().await;

    // Page 2 lives on a closed port; page 3 would be back on the mock server.
    Mock::given(method("GET"))
        .and(path("/123/products"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page(
            &["1", "2"],
            Some(format!(
                "http://127.0.0.1:1/page2?access_token={TEST_ACCESS_TOKEN}&after=c2"
            )),
        )))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/page3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page(&["5"], None)))
        .expect(0)
        .mount(&server)
        .await;

    let err = test_client(&server)
        .fetch_all(products_request())
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Connection);
    assert!(err.status().is_none());
}

#[tokio::test]
async fn transport_errors_do_not_echo_the_token() {
    let err = Client::with_config(config_for("http://127.0.0.1:1"))
        .fetch_all(products_request())
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Connection);
    let shown = err.to_string();
    assert!(!shown.contains(TEST_ACCESS_TOKEN), "token leaked: {shown}");
    assert!(!shown.contains("access_token"), "query leaked: {shown}");
}

#[tokio::test]
async fn slow_response_is_timeout_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/123/products"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(page(&["1"], None))
                .set_delay(Duration::from_secs(2)),
        )
        .mount(&server)
        .await;

    let http = reqwest::Client::builder()
        .timeout(Duration::from_millis(200))
        .build()
        .unwrap();
    let client = test_client(&server).with_http_client(http);

    let err = client.fetch_all(products_request()).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Timeout);
    assert!(!err.to_string().contains(TEST_ACCESS_TOKEN));
}

#[tokio::test]
async fn page_cap_stops_runaway_pagination() {
    let server = MockServer::start().await;
    let uri = server.uri();

    Mock::given(method("GET"))
        .and(path("/123/products"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(page(&["1"], Some(format!("{uri}/page2")))),
        )
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/page2"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(page(&["2"], Some(format!("{uri}/page3")))),
        )
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/page3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page(&["3"], None)))
        .expect(0)
        .mount(&server)
        .await;

    let client = Client::with_config(config_for(server.uri()).with_max_pages(2));
    let err = client.fetch_all(products_request()).await.unwrap_err();
    assert!(matches!(err, GraphError::PageLimit { max_pages: 2 }));
    assert_eq!(err.kind(), ErrorKind::Unexpected);
}

#[tokio::test]
#[serial(env)]
async fn missing_token_fails_before_any_request() {
    let _env = EnvGuard::new().unset("FB_ACCESS_TOKEN");
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page(&[], None)))
        .expect(0)
        .mount(&server)
        .await;

    let client = Client::with_config(GraphConfig::new().with_api_base(server.uri()));
    let err = client.fetch_all(products_request()).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Config);
    assert!(err.to_string().contains("FB_ACCESS_TOKEN"));
}
