//! End-to-end requests through the axum router.

use lookup_server::adapters::{app_state::AppState, http::router};
use lookup_server::app_config::AppConfig;
use lookup_server::config::Config;
use lookup_server::retry::RetryPolicy;
use serde_json::{json, Value};
use wiremock::matchers::{method, path, path_regex};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_config() -> Config {
    Config {
        server_port: "0".into(),
        boxapi_username: "u".into(),
        boxapi_password: "p".into(),
        abstractapi_token: Some("abstract-key".into()),
        ipgeolocation_token: Some("ipgeo-key".into()),
    }
}

fn app_config_for(upstream: &MockServer) -> AppConfig {
    let uri = upstream.uri();
    let (protocol, host) = uri.split_once("://").unwrap();
    AppConfig {
        boxapi_protocol: protocol.to_string(),
        boxapi_host: host.to_string(),
        ipapi_co_url: format!("{uri}/ipapi"),
        abstractapi_url: format!("{uri}/abstract"),
        ipgeolocation_url: format!("{uri}/ipgeo"),
        profile_retry: RetryPolicy::new(2, 0.0),
        ip_provider_retry: RetryPolicy::new(2, 0.0),
        ..AppConfig::default()
    }
}

/// Serves the router on an ephemeral port and returns its base URL.
async fn spawn_app(upstream: &MockServer) -> String {
    let state = AppState::new(&test_config(), &app_config_for(upstream));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router(state)).await.unwrap();
    });
    format!("http://{addr}")
}

#[tokio::test]
async fn root_reports_liveness() {
    let upstream = MockServer::start().await;
    let app = spawn_app(&upstream).await;

    let response = reqwest::get(format!("{app}/")).await.unwrap();
    assert_eq!(response.status().as_u16(), 200);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body, json!({ "message": "Hello, I'm Working!" }));

    let health = reqwest::get(format!("{app}/health")).await.unwrap();
    assert_eq!(health.status().as_u16(), 200);
    assert_eq!(health.text().await.unwrap(), "OK");
}

#[tokio::test]
async fn ip_information_falls_back_to_second_provider() {
    let upstream = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path_regex(r"^/ipapi/"))
        .respond_with(ResponseTemplate::new(500))
        .expect(2)
        .mount(&upstream)
        .await;
    Mock::given(method("GET"))
        .and(path("/abstract/v1/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "country": "Germany",
            "city": "Berlin"
        })))
        .expect(1)
        .mount(&upstream)
        .await;
    Mock::given(method("GET"))
        .and(path("/ipgeo/v2/timezone"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(0)
        .mount(&upstream)
        .await;
    let app = spawn_app(&upstream).await;

    let response = reqwest::get(format!("{app}/ip_information/85.214.132.117"))
        .await
        .unwrap();

    assert_eq!(response.status().as_u16(), 200);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["information_source"], "abstractapi.com");
    assert_eq!(body["ip"], "85.214.132.117");
    assert_eq!(body["city"], "Berlin");
    assert_eq!(body["latitude"], "N/A");
}

#[tokio::test]
async fn ip_information_sentinel_is_still_200() {
    let upstream = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503).set_body_string("down"))
        .expect(6)
        .mount(&upstream)
        .await;
    let app = spawn_app(&upstream).await;

    let response = reqwest::get(format!("{app}/ip_information/not-an-ip"))
        .await
        .unwrap();

    assert_eq!(response.status().as_u16(), 200);
    let body: Value = response.json().await.unwrap();
    assert_eq!(
        body,
        json!({ "error": "All services failed to retrieve IP information." })
    );
}

#[tokio::test]
async fn instagram_failure_is_a_client_error_with_message() {
    let upstream = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(401).set_body_string("bad credentials"))
        .mount(&upstream)
        .await;
    let app = spawn_app(&upstream).await;

    let response = reqwest::get(format!("{app}/instagram_username/natgeo"))
        .await
        .unwrap();

    assert_eq!(response.status().as_u16(), 400);
    assert_eq!(
        response.text().await.unwrap(),
        "Error fetching data for username natgeo: 401"
    );
}

#[tokio::test]
async fn instagram_success_returns_profile_json() {
    let upstream = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "response": { "body": { "data": { "user": {
                "full_name": "National Geographic",
                "edge_follow": { "count": 150 }
            } } } }
        })))
        .mount(&upstream)
        .await;
    let app = spawn_app(&upstream).await;

    let response = reqwest::get(format!("{app}/instagram_username/natgeo"))
        .await
        .unwrap();

    assert_eq!(response.status().as_u16(), 200);
    let body: Value = response.json().await.unwrap();
    assert_eq!(
        body,
        json!({
            "full_name": "National Geographic",
            "profile_picture": null,
            "biography": null,
            "following_count": 150,
            "followers_count": 0,
            "posts_count": 0
        })
    );
}
