use std::collections::BTreeMap;
use std::sync::Arc;

use mcp_trigger_core::InvocationParameters;
use mcp_trigger_exec::executor::{HttpClient, HttpError, HttpRequestParts, ReqwestHttpClient};
use mcp_trigger_exec::{BatchInvoker, OutputRecord};
use serde_json::json;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

// Serves a single canned response and hands back the raw request it received.
async fn serve_once(
    status_line: &'static str,
    body: &'static str,
) -> (String, tokio::task::JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let handle = tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let request = read_request(&mut socket).await;
        let response = format!(
            "HTTP/1.1 {status_line}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        );
        socket.write_all(response.as_bytes()).await.unwrap();
        socket.shutdown().await.unwrap();
        request
    });
    (format!("http://{addr}/"), handle)
}

// First connection is sent to `/moved` with a 307, the second gets `{"ok":true}`.
// Returns both raw requests.
async fn serve_redirect() -> (String, tokio::task::JoinHandle<(String, String)>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let handle = tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let first = read_request(&mut socket).await;
        socket
            .write_all(
                b"HTTP/1.1 307 Temporary Redirect\r\nLocation: /moved\r\nContent-Length: 0\r\nConnection: close\r\n\r\n",
            )
            .await
            .unwrap();
        socket.shutdown().await.unwrap();

        let (mut socket, _) = listener.accept().await.unwrap();
        let second = read_request(&mut socket).await;
        let body = r#"{"ok":true}"#;
        let response = format!(
            "HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        );
        socket.write_all(response.as_bytes()).await.unwrap();
        socket.shutdown().await.unwrap();
        (first, second)
    });
    (format!("http://{addr}/"), handle)
}

async fn read_request(socket: &mut tokio::net::TcpStream) -> String {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 1024];
    loop {
        let n = socket.read(&mut chunk).await.unwrap();
        if n == 0 {
            break;
        }
        buf.extend_from_slice(&chunk[..n]);
        let text = String::from_utf8_lossy(&buf).to_string();
        if let Some(header_end) = text.find("\r\n\r\n") {
            let content_length = text[..header_end]
                .lines()
                .find_map(|l| {
                    let (k, v) = l.split_once(':')?;
                    k.eq_ignore_ascii_case("content-length")
                        .then(|| v.trim().parse::<usize>().ok())
                        .flatten()
                })
                .unwrap_or(0);
            if buf.len() >= header_end + 4 + content_length {
                break;
            }
        }
    }
    String::from_utf8_lossy(&buf).to_string()
}

fn post(url: &str, body: &[u8]) -> HttpRequestParts {
    HttpRequestParts {
        method: "POST".to_string(),
        url: url::Url::parse(url).unwrap(),
        headers: BTreeMap::from([("Content-Type".to_string(), "application/json".to_string())]),
        body: body.to_vec(),
    }
}

#[tokio::test]
async fn http_client_posts_json_body() {
    let (base, server) = serve_once("200 OK", r#"{"ok":true}"#).await;
    let client = ReqwestHttpClient::default();

    let resp = client
        .send(post(&format!("{base}W/Foo_Bar"), br#"{"mesa":4}"#))
        .await
        .unwrap();
    assert_eq!(resp.status, 200);
    assert_eq!(resp.body, br#"{"ok":true}"#.to_vec());
    assert_eq!(
        resp.headers.get("content-type").map(String::as_str),
        Some("application/json")
    );

    let raw = server.await.unwrap();
    assert!(raw.starts_with("POST /W/Foo_Bar HTTP/1.1\r\n"));
    assert!(raw.to_ascii_lowercase().contains("content-type: application/json"));
    assert!(raw.ends_with(r#"{"mesa":4}"#));
}

#[tokio::test]
async fn http_client_returns_non_success_responses() {
    let (base, server) = serve_once("500 Internal Server Error", r#"{"error":"boom"}"#).await;
    let client = ReqwestHttpClient::default();

    let resp = client.send(post(&format!("{base}W/A"), b"{}")).await.unwrap();
    assert_eq!(resp.status, 500);
    server.await.unwrap();
}

#[tokio::test]
async fn http_client_reports_connection_failures_as_network_errors() {
    // Bind then drop to get a port with no listener.
    let addr = {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        listener.local_addr().unwrap()
    };
    let client = ReqwestHttpClient::default();

    let err = client
        .send(post(&format!("http://{addr}/W/A"), b"{}"))
        .await
        .unwrap_err();
    assert!(matches!(err, HttpError::Network(_)), "unexpected error: {err:?}");
}

#[tokio::test]
async fn http_client_follows_temporary_redirect() {
    let (base, server) = serve_redirect().await;
    let client = ReqwestHttpClient::default();

    let resp = client
        .send(post(&format!("{base}W/A"), br#"{"mesa":4}"#))
        .await
        .unwrap();
    assert_eq!(resp.status, 200);
    assert_eq!(resp.body, br#"{"ok":true}"#.to_vec());

    let (first, second) = server.await.unwrap();
    assert!(first.starts_with("POST /W/A HTTP/1.1\r\n"));
    // 307 keeps the method and body.
    assert!(second.starts_with("POST /moved HTTP/1.1\r\n"));
    assert!(second.ends_with(r#"{"mesa":4}"#));
}

#[tokio::test]
async fn redirected_call_succeeds_in_batch() {
    let (base, server) = serve_redirect().await;
    let invoker = BatchInvoker::without_events(Arc::new(ReqwestHttpClient::default()));
    let params = InvocationParameters {
        base_url: base,
        workflow_id: "W".to_string(),
        endpoint: "A".to_string(),
        payload: json!({}),
    };

    let groups = invoker.invoke(&[()], |_| params.clone(), true).await.unwrap();
    assert_eq!(groups, vec![vec![OutputRecord::Json(json!({"ok": true}))]]);
    server.await.unwrap();
}
