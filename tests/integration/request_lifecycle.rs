//! Request primitive: URL construction, auth, body encoding and error classification

use crate::integration::mock_server::{MockServerFixture, API_KEY};
use mockito::Matcher;
use portainer_mcp_rust::{ApiResponse, ErrorCode, RequestDescriptor};
use serde_json::json;

#[tokio::test]
async fn test_get_decodes_json_and_sends_api_key() {
    let mut fixture = MockServerFixture::new().await;
    let mock = fixture
        .mock_json("GET", "/api/status", 200, r#"{"Version":"2.21.0","InstanceID":"abc"}"#)
        .await;

    let client = fixture.client(false);
    let status = client.system_status().await.unwrap();

    assert_eq!(status["Version"], "2.21.0");
    mock.assert_async().await;
}

#[tokio::test]
async fn test_body_is_sent_as_json() {
    let mut fixture = MockServerFixture::new().await;
    let mock = fixture
        .server
        .mock("POST", "/api/custom")
        .match_header("x-api-key", API_KEY)
        .match_header("content-type", "application/json")
        .match_body(Matcher::PartialJson(json!({"Name": "cache"})))
        .with_status(201)
        .with_body(r#"{"Id":"n1"}"#)
        .expect(1)
        .create_async()
        .await;

    let client = fixture.client(true);
    let resp = client
        .request(RequestDescriptor::post("/custom").with_body(json!({"Name": "cache"})))
        .await
        .unwrap();

    assert_eq!(resp, ApiResponse::Json(json!({"Id": "n1"})));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_empty_success_body_is_empty_sentinel() {
    let mut fixture = MockServerFixture::new().await;
    let _mock = fixture
        .server
        .mock("POST", "/api/endpoints/1/docker/containers/web/start")
        .with_status(204)
        .create_async()
        .await;

    let client = fixture.client(true);
    let resp = client
        .request(RequestDescriptor::post("/endpoints/1/docker/containers/web/start"))
        .await
        .unwrap();
    assert!(resp.is_empty());
}

#[tokio::test]
async fn test_raw_mode_returns_text_verbatim() {
    let mut fixture = MockServerFixture::new().await;
    let _mock = fixture
        .mock_json("GET", "/api/stacks/3/file", 200, "{not json but raw}")
        .await;

    let client = fixture.client(false);
    let resp = client
        .request(RequestDescriptor::get("/stacks/3/file").raw())
        .await
        .unwrap();
    assert_eq!(resp, ApiResponse::Text("{not json but raw}".to_string()));
}

#[tokio::test]
async fn test_invalid_json_is_classified() {
    let mut fixture = MockServerFixture::new().await;
    let _mock = fixture
        .mock_json("GET", "/api/endpoints", 200, "<html>login</html>")
        .await;

    let err = fixture.client(false).list_environments().await.unwrap_err();
    assert_eq!(err.code(), ErrorCode::InvalidResponse);
    assert!(err.to_string().contains("/endpoints"));
}

#[tokio::test]
async fn test_401_is_invalid_credentials() {
    let mut fixture = MockServerFixture::new().await;
    let _mock = fixture
        .mock_json("GET", "/api/endpoints", 401, r#"{"message":"Unauthorized"}"#)
        .await;

    let err = fixture.client(false).list_environments().await.unwrap_err();
    assert_eq!(err.code().to_string(), "HTTP_401");
    assert_eq!(err.http_status(), Some(401));
    assert!(err.to_string().contains("invalid or expired API key"));
}

#[tokio::test]
async fn test_403_is_insufficient_permissions() {
    let mut fixture = MockServerFixture::new().await;
    let _mock = fixture
        .mock_json("GET", "/api/stacks", 403, r#"{"message":"Access denied"}"#)
        .await;

    let err = fixture.client(false).list_stacks().await.unwrap_err();
    assert_eq!(err.code().to_string(), "HTTP_403");
    assert!(err.to_string().contains("sufficient permissions"));
}

#[tokio::test]
async fn test_404_names_the_request_path() {
    let mut fixture = MockServerFixture::new().await;
    let _mock = fixture.mock_json("GET", "/api/stacks/99", 404, "").await;

    let err = fixture.client(false).get_stack(99).await.unwrap_err();
    assert_eq!(err.code(), ErrorCode::Http(404));
    assert!(err.to_string().contains("not found: /stacks/99"));
}

#[tokio::test]
async fn test_other_status_uses_body_message() {
    let mut fixture = MockServerFixture::new().await;
    let _mock = fixture
        .mock_json(
            "GET",
            "/api/endpoints/4/docker/info",
            500,
            r#"{"message":"Unable to reach the Docker daemon","details":"dial unix"}"#,
        )
        .await;

    let err = fixture.client(false).docker_info(4).await.unwrap_err();
    assert_eq!(err.code().to_string(), "HTTP_500");
    assert_eq!(err.to_string(), "Unable to reach the Docker daemon");
}

#[tokio::test]
async fn test_lookup_by_name_hit_and_miss() {
    let mut fixture = MockServerFixture::new().await;
    let body = r#"[{"Id":1,"Name":"local","Type":1},{"Id":2,"Name":"edge-01","Type":4}]"#;
    let _mock = fixture
        .server
        .mock("GET", "/api/endpoints")
        .with_status(200)
        .with_body(body)
        .expect(2)
        .create_async()
        .await;

    let client = fixture.client(false);
    let found = client.find_environment_by_name("edge-01").await.unwrap();
    assert_eq!(found, json!({"Id": 2, "Name": "edge-01", "Type": 4}));

    let err = client.find_environment_by_name("edge-02").await.unwrap_err();
    assert_eq!(err.code(), ErrorCode::NotFound);
    assert_eq!(err.http_status(), Some(404));
    assert!(err.to_string().contains("edge-02"));
}

#[tokio::test]
async fn test_lookup_on_non_array_is_invalid_response() {
    let mut fixture = MockServerFixture::new().await;
    let _mock = fixture
        .mock_json("GET", "/api/stacks", 200, r#"{"items":[]}"#)
        .await;

    let err = fixture
        .client(false)
        .find_stack_by_name("web")
        .await
        .unwrap_err();
    assert_eq!(err.code(), ErrorCode::InvalidResponse);
}
