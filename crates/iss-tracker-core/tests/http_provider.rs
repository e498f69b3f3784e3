//! Integration tests for `HttpProvider` against a throwaway HTTP server.
//!
//! Each test binds a listener on an ephemeral port, serves exactly one canned
//! response, and points the provider at it.

use std::time::Duration;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

use iss_tracker_core::position::Position;
use iss_tracker_core::provider::{HttpProvider, PositionProvider, ProviderError};

/// Serve one HTTP response with the given status line and body, then close.
async fn serve_once(status_line: &'static str, body: &'static str) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        let (mut stream, _) = listener.accept().await.unwrap();
        let mut buf = [0u8; 4096];
        // Drain the request head; the provider sends no body.
        let _ = stream.read(&mut buf).await;
        let response = format!(
            "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            status_line,
            body.len(),
            body
        );
        stream.write_all(response.as_bytes()).await.unwrap();
        stream.shutdown().await.unwrap();
    });

    format!("http://{}/iss-location", addr)
}

/// Ignore any proxy settings in the environment; the server is on loopback.
fn provider(endpoint: String) -> HttpProvider {
    let client = reqwest::Client::builder()
        .no_proxy()
        .timeout(Duration::from_secs(2))
        .build()
        .unwrap();
    HttpProvider::with_client(endpoint, client)
}

#[tokio::test]
async fn test_fetch_string_coordinates() {
    let endpoint = serve_once(
        "200 OK",
        r#"{"message":"success","timestamp":1700000000,"iss_position":{"latitude":"12.34","longitude":"-56.78"}}"#,
    )
    .await;

    let position = provider(endpoint).fetch().await.unwrap();
    assert_eq!(position, Position::new(12.34, -56.78).unwrap());
}

#[tokio::test]
async fn test_non_success_status_is_reported() {
    let endpoint = serve_once(
        "500 Internal Server Error",
        r#"{"error":"Failed to fetch ISS location"}"#,
    )
    .await;

    let err = provider(endpoint).fetch().await.unwrap_err();
    assert!(matches!(err, ProviderError::Status { status: 500 }));
}

#[tokio::test]
async fn test_malformed_body_is_reported() {
    let endpoint = serve_once("200 OK", "not json at all").await;

    let err = provider(endpoint).fetch().await.unwrap_err();
    assert!(matches!(err, ProviderError::MalformedBody { .. }));
}

#[tokio::test]
async fn test_non_numeric_coordinate_is_reported() {
    let endpoint = serve_once(
        "200 OK",
        r#"{"iss_position":{"latitude":"N/A","longitude":"10"}}"#,
    )
    .await;

    let err = provider(endpoint).fetch().await.unwrap_err();
    assert!(matches!(err, ProviderError::InvalidCoordinate { .. }));
}

#[tokio::test]
async fn test_connection_refused_is_transport_error() {
    // Bind then drop to get a port with nothing listening.
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let err = provider(format!("http://{}/iss-location", addr))
        .fetch()
        .await
        .unwrap_err();
    assert!(matches!(err, ProviderError::Transport { .. }));
}

#[test]
fn test_describe_is_endpoint() {
    let provider =
        HttpProvider::new("http://localhost:5000/iss-location", Duration::from_secs(4)).unwrap();
    assert_eq!(provider.describe(), "http://localhost:5000/iss-location");
    assert_eq!(provider.endpoint(), "http://localhost:5000/iss-location");
}
