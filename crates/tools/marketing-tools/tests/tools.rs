//! End-to-end tool behavior against mock Graph and weather servers.

use std::sync::Arc;

use marketing_tools::envelope::{Body, CONFIG_ERROR, CONNECTION_ERROR, Envelope};
use agentic_tools_core::{ToolContext, ToolError, ToolRegistry};
use marketing_tools::{MarketingTools, build_registry};
use serde_json::{Value, json};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Registry whose answers are unwrapped to the tool text.
struct Tools(ToolRegistry);

impl Tools {
    async fn dispatch_json(&self, name: &str, args: Value) -> Result<String, ToolError> {
        let out = self.0.dispatch_json(name, args, &ToolContext::default()).await?;
        match out {
            Value::String(text) => Ok(text),
            other => panic!("{name} answered with non-text {other}"),
        }
    }
}

fn tools_over(
    graph: graph_async::Client<graph_async::GraphConfig>,
    weather: openweather_async::Client,
) -> Tools {
    Tools(build_registry(Arc::new(MarketingTools::with_clients(graph, weather))))
}

fn registry_for(graph_base: &str, weather_base: &str) -> Tools {
    let graph = graph_async::Client::with_config(graph_async::test_support::config_for(graph_base));
    let weather = openweather_async::Client::with_config(
        openweather_async::test_support::config_for(weather_base),
    );
    tools_over(graph, weather)
}

fn registry(server: &MockServer) -> Tools {
    registry_for(&server.uri(), &server.uri())
}

fn envelope(text: &str) -> Envelope {
    serde_json::from_str(text).unwrap()
}

#[tokio::test]
async fn catalog_123_single_page() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/123/products"))
        .and(query_param("access_token", "test-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [{"id": "p1", "name": "Shoe"}],
            "paging": {}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let out = registry(&server)
        .dispatch_json("fetch_products_from_catalog", json!({"catalog_id": "123"}))
        .await
        .unwrap();

    let env = envelope(&out);
    assert_eq!(env.jsonrpc, "2.0");
    assert!(env.id.is_none());
    let Body::Result(result) = &env.body else {
        panic!("expected result, got {out}");
    };
    assert_eq!(result.content.len(), 1);
    assert_eq!(result.content[0].kind, "text");
    assert!(!result.is_error);
    let record: Value = serde_json::from_str(&result.content[0].text).unwrap();
    assert_eq!(record, json!({"id": "p1", "name": "Shoe"}));
}

#[tokio::test]
async fn empty_catalog_message() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/empty/products"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": []})))
        .mount(&server)
        .await;

    let out = registry(&server)
        .dispatch_json("fetch_products_from_catalog", json!({"catalog_id": "empty"}))
        .await
        .unwrap();
    assert_eq!(
        out,
        r#"{"jsonrpc":"2.0","id":null,"result":{"content":[],"isError":false,"message":"No products found in this catalog."}}"#
    );
}

#[tokio::test]
async fn catalog_application_error_envelope() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/123/products"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "error": {"message": "Unsupported get request.", "code": 100}
        })))
        .mount(&server)
        .await;

    let out = registry(&server)
        .dispatch_json("fetch_products_from_catalog", json!({"catalog_id": "123"}))
        .await
        .unwrap();
    assert_eq!(
        out,
        r#"{"jsonrpc":"2.0","id":null,"error":{"code":-32000,"message":"Facebook API Error: Unsupported get request.","data":{"message":"Unsupported get request.","code":100}}}"#
    );
}

#[tokio::test]
async fn catalog_http_error_envelope() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/123/products"))
        .respond_with(ResponseTemplate::new(502).set_body_string("bad gateway"))
        .mount(&server)
        .await;

    let out = registry(&server)
        .dispatch_json("fetch_products_from_catalog", json!({"catalog_id": "123"}))
        .await
        .unwrap();
    let Body::Error(err) = envelope(&out).body else {
        panic!("expected error, got {out}");
    };
    assert_eq!(err.code, 502);
    assert_eq!(
        err.message,
        "HTTP Error during Facebook API call: 502 - bad gateway"
    );
}

#[tokio::test]
async fn unreachable_graph_is_connection_envelope() {
    let weather = MockServer::start().await;
    let out = registry_for("http://127.0.0.1:1", &weather.uri())
        .dispatch_json("get_facebook_ad_accounts", json!({}))
        .await
        .unwrap();
    let Body::Error(err) = envelope(&out).body else {
        panic!("expected error, got {out}");
    };
    assert_eq!(err.code, CONNECTION_ERROR);
    assert!(
        err.message
            .starts_with("Network connection error during Facebook API call: ")
    );
    assert!(!err.message.contains(graph_async::test_support::TEST_ACCESS_TOKEN));
}

#[tokio::test]
async fn missing_token_is_config_envelope() {
    let server = MockServer::start().await;
    let graph = graph_async::Client::with_config(
        graph_async::GraphConfig::new()
            .with_api_base(server.uri())
            .with_access_token(" "),
    );
    let weather = openweather_async::Client::with_config(
        openweather_async::WeatherConfig::new().with_api_base(server.uri()),
    );
    let reg = tools_over(graph, weather);

    let out = reg
        .dispatch_json("get_facebook_campaigns", json!({"ad_account_id": "act_1"}))
        .await
        .unwrap();
    let Body::Error(err) = envelope(&out).body else {
        panic!("expected error, got {out}");
    };
    assert_eq!(err.code, CONFIG_ERROR);
    assert!(err.message.starts_with("Invalid configuration: "));
}

#[tokio::test]
async fn catalogs_and_campaigns_envelopes() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/biz/owned_product_catalogs"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [{"id": "c1", "name": "Main"}, {"id": "c2", "name": "Outlet"}]
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/act_1/campaigns"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": []})))
        .mount(&server)
        .await;

    let reg = registry(&server);
    let catalogs = envelope(
        &reg.dispatch_json("get_facebook_catalogs", json!({"business_id": "biz"}))
            .await
            .unwrap(),
    );
    assert_eq!(catalogs.records().unwrap().len(), 2);

    let campaigns = envelope(
        &reg.dispatch_json("get_facebook_campaigns", json!({"ad_account_id": "act_1"}))
            .await
            .unwrap(),
    );
    let Body::Result(result) = campaigns.body else {
        panic!("expected result");
    };
    assert_eq!(
        result.message.as_deref(),
        Some("No campaigns found for this ad account.")
    );
}

#[tokio::test]
async fn delete_product_messages() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/p1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"success": true})))
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/p2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"success": false})))
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/p3"))
        .respond_with(ResponseTemplate::new(404).set_body_string("gone"))
        .mount(&server)
        .await;

    let reg = registry(&server);
    assert_eq!(
        reg.dispatch_json("delete_catalog_product", json!({"product_id": "p1"}))
            .await
            .unwrap(),
        "Product p1 deleted successfully."
    );
    assert_eq!(
        reg.dispatch_json("delete_catalog_product", json!({"product_id": "p2"}))
            .await
            .unwrap(),
        "Product deletion request was received but not confirmed."
    );
    assert!(
        reg.dispatch_json("delete_catalog_product", json!({"product_id": "p3"}))
            .await
            .unwrap()
            .starts_with("Error deleting product: ")
    );
}

#[tokio::test]
async fn fetch_ad_sets_answers() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/act_1/adsets"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [{"name": "Spring", "id": "as1"}]
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/act_2/adsets"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": []})))
        .mount(&server)
        .await;

    let reg = registry(&server);
    let out = reg
        .dispatch_json("fetch_ad_sets", json!({"ad_account_id": "act_1", "campaign_id": "c"}))
        .await
        .unwrap();
    assert_eq!(out, r#"[{"name":"Spring","id":"as1"}]"#);

    let out = reg
        .dispatch_json("fetch_ad_sets", json!({"ad_account_id": "act_2"}))
        .await
        .unwrap();
    assert_eq!(out, "No ad sets found for this account or campaign.");
}

#[tokio::test]
async fn create_ad_set_answers() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/act_1/adsets"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "23851"})))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/act_2/adsets"))
        .respond_with(ResponseTemplate::new(400).set_body_string("Invalid parameter"))
        .mount(&server)
        .await;

    let args = |account: &str| {
        json!({
            "ad_account_id": account,
            "name": "Spring",
            "daily_budget": 200,
            "billing_event": "IMPRESSIONS",
            "optimization_goal": "REACH",
            "bid_strategy": "LOWEST_COST_WITHOUT_CAP",
            "status": "PAUSED",
            "campaign_id": "c1",
            "countries": ["uk"],
            "age_min": 18,
            "age_max": 30,
            "interests": [{"id": "6003", "name": "Fitness"}]
        })
    };

    let reg = registry(&server);
    assert_eq!(
        reg.dispatch_json("create_ad_set", args("act_1")).await.unwrap(),
        "23851"
    );
    assert_eq!(
        reg.dispatch_json("create_ad_set", args("act_2")).await.unwrap(),
        "HTTP error occurred: 400 - Invalid parameter"
    );
}

#[tokio::test]
async fn delete_ad_set_answers() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/as1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"success": true})))
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/as2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"success": false})))
        .mount(&server)
        .await;

    let reg = registry(&server);
    assert_eq!(
        reg.dispatch_json("delete_facebook_ad_set", json!({"ad_set_id": "as1"}))
            .await
            .unwrap(),
        "Ad Set `as1` deleted successfully."
    );
    assert_eq!(
        reg.dispatch_json("delete_facebook_ad_set", json!({"ad_set_id": "as2"}))
            .await
            .unwrap(),
        r#"Failed to delete Ad Set `as2`. Response: {"success":false}"#
    );
}

#[tokio::test]
async fn search_interests_answers() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .and(query_param("q", "fitness"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [{"id": "6003", "name": "Fitness"}]
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/search"))
        .and(query_param("q", "broken"))
        .respond_with(ResponseTemplate::new(500).set_body_string("oops"))
        .mount(&server)
        .await;

    let reg = registry(&server);
    let ok: Value = serde_json::from_str(
        &reg.dispatch_json("search_interests", json!({"query": "fitness"}))
            .await
            .unwrap(),
    )
    .unwrap();
    assert_eq!(ok, json!([{"id": "6003", "name": "Fitness"}]));

    let failed: Value = serde_json::from_str(
        &reg.dispatch_json("search_interests", json!({"query": "broken"}))
            .await
            .unwrap(),
    )
    .unwrap();
    let msg = failed[0]["error"].as_str().unwrap();
    assert!(msg.starts_with("Error searching interests: "));
}

#[tokio::test]
async fn weather_answers() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/weather"))
        .and(query_param("q", "Karachi"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "name": "Karachi",
            "main": {"temp": 29.4, "humidity": 70},
            "weather": [{"main": "Clouds", "description": "scattered clouds"}],
            "wind": {"speed": 5.1}
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/weather"))
        .and(query_param("q", "Atlantis"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({"cod": "404"})))
        .mount(&server)
        .await;

    let reg = registry(&server);
    assert_eq!(
        reg.dispatch_json("get_weather_by_city", json!({"city_name": "Karachi"}))
            .await
            .unwrap(),
        "Weather in Karachi:\n- Temperature: 29.4°C\n- Description: scattered clouds\n- Humidity: 70%\n- Wind Speed: 5.1 m/s"
    );
    assert_eq!(
        reg.dispatch_json("get_weather_by_city", json!({"city_name": "Atlantis"}))
            .await
            .unwrap(),
        "Error: City not found or API error (404)"
    );
}
