use assert_matches::assert_matches;
use serde_json::{json, Value};
use wiremock::matchers::{body_string_contains, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use shared_api::ApiClient;
use shared_config::AppConfig;
use shared_models::error::AppError;

fn client_for(server: &MockServer) -> ApiClient {
    let config = AppConfig {
        api_base_url: format!("{}/", server.uri()),
        ..AppConfig::default()
    };
    ApiClient::new(&config)
}

#[tokio::test]
async fn test_get_attaches_bearer_token() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/doctor/appointments"))
        .and(header("Authorization", "Bearer token-123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"upcoming": []})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let body: Value = client.get("/doctor/appointments", Some("token-123")).await.unwrap();

    assert_eq!(body["upcoming"], json!([]));
}

#[tokio::test]
async fn test_error_status_maps_to_taxonomy() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/doctors/99"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({"detail": "Doctor not found"})))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/dashboard/appointments"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({"detail": "Could not validate credentials"})))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);

    let err = client.get::<Value>("/doctors/99", None).await.unwrap_err();
    assert_matches!(err, AppError::NotFound(ref msg) if msg == "Doctor not found");

    let err = client.get::<Value>("/dashboard/appointments", Some("stale")).await.unwrap_err();
    assert_matches!(err, AppError::Auth(_));
}

#[tokio::test]
async fn test_form_post_is_url_encoded() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/token"))
        .and(body_string_contains("username=amy"))
        .and(body_string_contains("password=secret"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": "abc",
            "token_type": "bearer",
            "role": "patient"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let body: Value = client
        .post_form("/token", &[("username", "amy"), ("password", "secret")])
        .await
        .unwrap();

    assert_eq!(body["access_token"], "abc");
}

#[tokio::test]
async fn test_unparsable_body_is_decode_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/doctors"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let err = client.get::<Vec<Value>>("/doctors", None).await.unwrap_err();

    assert_matches!(err, AppError::Decode(_));
}

#[tokio::test]
async fn test_unreachable_server_is_network_error() {
    let config = AppConfig {
        api_base_url: "http://127.0.0.1:1".to_string(),
        request_timeout_ms: 500,
        ..AppConfig::default()
    };
    let client = ApiClient::new(&config);

    let err = client.get::<Value>("/doctors", None).await.unwrap_err();
    assert_matches!(err, AppError::Network(_));
}
