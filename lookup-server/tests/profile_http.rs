//! Profile retrieval through the real BoxAPI client against mocked upstreams.

use boxapi_rs::types::Config as BoxApiConfig;
use lookup_server::application::services::profile_service::ProfileService;
use lookup_server::infrastructure::repository::boxapi_repository::BoxApiRepository;
use lookup_server::retry::RetryPolicy;
use serde_json::json;
use wiremock::matchers::{basic_auth, body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const PROFILE_PATH: &str = "/api/instagram/user/get_web_profile_info";

fn repository(server: &MockServer) -> BoxApiRepository {
    let uri = server.uri();
    let (protocol, host) = uri.split_once("://").unwrap();
    BoxApiRepository::new(
        "box-user",
        "box-pass",
        Some(BoxApiConfig {
            host: host.to_string(),
            protocol: protocol.to_string(),
        }),
    )
}

#[tokio::test]
async fn builds_profile_with_inlined_picture() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/avatar_hd.jpg"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(vec![0xff, 0xd8, 0xff]))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path(PROFILE_PATH))
        .and(basic_auth("box-user", "box-pass"))
        .and(body_json(json!({ "username": "ada" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "response": { "body": { "data": { "user": {
                "full_name": "Ada Lovelace",
                "biography": "Analyst",
                "profile_pic_url_hd": format!("{}/avatar_hd.jpg", server.uri()),
                "edge_followed_by": { "count": 1815 },
                "edge_owner_to_timeline_media": { "count": 12 }
            } } } }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let service = ProfileService::new(repository(&server), RetryPolicy::new(5, 0.0));
    let record = service.public_info("ada").await.unwrap();

    assert_eq!(record.full_name.as_deref(), Some("Ada Lovelace"));
    assert_eq!(record.biography.as_deref(), Some("Analyst"));
    assert_eq!(record.profile_picture.as_deref(), Some("/9j/"));
    assert_eq!(record.followers_count, 1815);
    assert_eq!(record.following_count, 0);
    assert_eq!(record.posts_count, 12);
}

#[tokio::test]
async fn exhausted_retries_name_username_and_status() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(PROFILE_PATH))
        .respond_with(ResponseTemplate::new(404).set_body_string("user not found"))
        .expect(3)
        .mount(&server)
        .await;

    let service = ProfileService::new(repository(&server), RetryPolicy::new(3, 0.0));
    let err = service.public_info("ghost").await.unwrap_err();

    assert_eq!(
        err.to_string(),
        "Error fetching data for username ghost: 404"
    );
}

#[tokio::test]
async fn network_failure_names_username() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let repo = BoxApiRepository::new(
        "u",
        "p",
        Some(BoxApiConfig {
            host: addr.to_string(),
            protocol: "http".to_string(),
        }),
    );
    let service = ProfileService::new(repo, RetryPolicy::new(2, 0.0));
    let err = service.public_info("ada").await.unwrap_err();

    assert!(
        err.to_string()
            .starts_with("Network error fetching data for username ada: "),
        "got {err}"
    );
}

#[tokio::test]
async fn body_cut_short_is_a_network_error_naming_username() {
    use tokio::io::{AsyncReadExt, AsyncWriteExt};

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut request = [0u8; 4096];
        let _ = socket.read(&mut request).await;
        let _ = socket
            .write_all(
                b"HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nContent-Length: 512\r\n\r\n{\"response\":",
            )
            .await;
    });

    let repo = BoxApiRepository::new(
        "u",
        "p",
        Some(BoxApiConfig {
            host: addr.to_string(),
            protocol: "http".to_string(),
        }),
    );
    let service = ProfileService::new(repo, RetryPolicy::new(1, 0.0));
    let err = service.public_info("ada").await.unwrap_err();

    assert!(
        err.to_string()
            .starts_with("Network error fetching data for username ada: "),
        "got {err}"
    );
}
