//! Timeouts and connection failures, using raw sockets instead of mockito

use portainer_mcp_rust::{ClientConfig, ErrorCode, PortainerClient, RequestDescriptor};
use std::time::{Duration, Instant};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// Accepts connections and never answers.
async fn hanging_server() -> (String, JoinHandle<()>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let handle = tokio::spawn(async move {
        let mut held = Vec::new();
        while let Ok((socket, _)) = listener.accept().await {
            held.push(socket);
        }
    });
    (format!("http://{}", addr), handle)
}

#[tokio::test]
async fn test_hang_past_timeout_is_timeout() {
    let (url, server) = hanging_server().await;
    let client = PortainerClient::new(
        ClientConfig::new(url, "k").with_request_timeout(Duration::from_millis(100)),
    )
    .unwrap();

    // Repeated runs: each call owns and releases its own timer.
    for _ in 0..5 {
        let start = Instant::now();
        let err = client.system_status().await.unwrap_err();
        assert_eq!(err.code(), ErrorCode::Timeout);
        assert_eq!(err.code().to_string(), "TIMEOUT");
        assert!(start.elapsed() < Duration::from_secs(5));
    }

    server.abort();
}

#[tokio::test]
async fn test_per_request_timeout_overrides_default() {
    let (url, server) = hanging_server().await;
    let client = PortainerClient::new(ClientConfig::new(url, "k")).unwrap();

    let start = Instant::now();
    let err = client
        .request(RequestDescriptor::get("/status").with_timeout(Duration::from_millis(50)))
        .await
        .unwrap_err();
    assert_eq!(err.code(), ErrorCode::Timeout);
    assert!(err.to_string().contains("50ms"));
    assert!(start.elapsed() < Duration::from_secs(5));

    server.abort();
}

#[tokio::test]
async fn test_log_fetch_uses_log_timeout() {
    let (url, server) = hanging_server().await;
    let client = PortainerClient::new(
        ClientConfig::new(url, "k").with_log_timeout(Duration::from_millis(100)),
    )
    .unwrap();

    let err = client.fetch_logs(1, "web", 100).await.unwrap_err();
    assert_eq!(err.code(), ErrorCode::Timeout);
    assert!(err.to_string().contains("100ms"));

    server.abort();
}

#[tokio::test]
async fn test_refused_connection_is_connection_error() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = PortainerClient::new(ClientConfig::new(format!("http://{}", addr), "k")).unwrap();
    let err = client.list_stacks().await.unwrap_err();

    assert_eq!(err.code(), ErrorCode::ConnectionError);
    assert_eq!(err.code().to_string(), "CONNECTION_ERROR");
    assert!(err.to_string().contains(&addr.to_string()));
    assert!(err.http_status().is_none());
}
