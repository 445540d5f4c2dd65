use wacloud_client::ApiClient;
use wacloud_core::{ApiConfig, Error};

fn test_client(server: &mockito::ServerGuard) -> ApiClient {
    let config = ApiConfig::new("test-token").with_base_url(server.url());
    ApiClient::new(config).expect("client should build")
}

#[tokio::test]
async fn test_get_prefixes_version_and_injects_bearer_auth() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/v23.0/media_42")
        .match_header("authorization", "Bearer test-token")
        .with_status(200)
        .with_body(r#"{"id":"media_42"}"#)
        .create_async()
        .await;

    let client = test_client(&server);
    let body = client.get("media_42").await.expect("get should succeed");

    assert_eq!(body, r#"{"id":"media_42"}"#);
    mock.assert_async().await;
}

#[tokio::test]
async fn test_post_json_sends_body() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/v23.0/app_1/uploads")
        .match_header("authorization", "Bearer test-token")
        .match_body(mockito::Matcher::Json(serde_json::json!({
            "file_length": 1024,
            "file_type": "image/png"
        })))
        .with_status(200)
        .with_body(r#"{"id":"sess_1"}"#)
        .create_async()
        .await;

    let client = test_client(&server);
    let body = client
        .post_json(
            "app_1/uploads",
            &serde_json::json!({"file_length": 1024, "file_type": "image/png"}),
        )
        .await
        .expect("post should succeed");

    assert_eq!(body, r#"{"id":"sess_1"}"#);
    mock.assert_async().await;
}

#[tokio::test]
async fn test_post_multipart_sets_form_content_type() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/v23.0/12345/media")
        .match_header(
            "content-type",
            mockito::Matcher::Regex("^multipart/form-data; boundary=.*".to_string()),
        )
        .with_status(200)
        .with_body(r#"{"id":"media_1"}"#)
        .create_async()
        .await;

    let client = test_client(&server);
    let form = reqwest::multipart::Form::new().text("messaging_product", "whatsapp");
    let body = client
        .post_multipart("12345/media", form)
        .await
        .expect("multipart post should succeed");

    assert_eq!(body, r#"{"id":"media_1"}"#);
    mock.assert_async().await;
}

#[tokio::test]
async fn test_non_success_status_surfaces_status_and_body() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/v23.0/missing")
        .with_status(404)
        .with_body(r#"{"error":{"message":"Unsupported get request"}}"#)
        .create_async()
        .await;

    let client = test_client(&server);
    let err = client.get("missing").await.expect_err("404 should error");

    match err {
        Error::Status { status, body } => {
            assert_eq!(status, 404);
            assert!(
                body.contains("Unsupported get request"),
                "Raw body should be preserved. Got: {}",
                body
            );
        }
        other => panic!("Expected status error, got: {:?}", other),
    }
}

#[tokio::test]
async fn test_delete_uses_delete_method() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("DELETE", "/v23.0/media/media_42")
        .match_header("authorization", "Bearer test-token")
        .with_status(200)
        .with_body(r#"{"success":true}"#)
        .create_async()
        .await;

    let client = test_client(&server);
    let body = client
        .delete("media/media_42")
        .await
        .expect("delete should succeed");

    assert_eq!(body, r#"{"success":true}"#);
    mock.assert_async().await;
}
