use std::sync::Arc;
use std::time::Duration;

use gate::admin::AdminApi;
use gate::{ApiConfig, ApiError, Pipeline, ProgressCounter, RequestBuilder, SessionStore};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::sync::oneshot;

use super::*;
use crate::store::FileStore;

/// Serve exactly one canned response and hand back the raw request text.
async fn serve_once(status_line: &'static str, body: &'static str) -> (String, oneshot::Receiver<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let base = format!("http://{}", listener.local_addr().unwrap());
    let (tx, rx) = oneshot::channel();
    tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut raw = Vec::new();
        let mut buf = [0_u8; 4096];
        loop {
            let n = socket.read(&mut buf).await.unwrap();
            if n == 0 {
                break;
            }
            raw.extend_from_slice(&buf[..n]);
            if request_complete(&raw) {
                break;
            }
        }
        let response = if body.is_empty() {
            format!("HTTP/1.1 {status_line}\r\nconnection: close\r\n\r\n")
        } else {
            format!(
                "HTTP/1.1 {status_line}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
                body.len()
            )
        };
        socket.write_all(response.as_bytes()).await.unwrap();
        let _ = socket.shutdown().await;
        let _ = tx.send(String::from_utf8_lossy(&raw).into_owned());
    });
    (base, rx)
}

fn request_complete(raw: &[u8]) -> bool {
    let text = String::from_utf8_lossy(raw);
    let Some(head_end) = text.find("\r\n\r\n") else {
        return false;
    };
    let length = text[..head_end]
        .lines()
        .find_map(|line| {
            let (name, value) = line.split_once(':')?;
            name.eq_ignore_ascii_case("content-length").then(|| value.trim().parse::<usize>().ok())?
        })
        .unwrap_or(0);
    raw.len() >= head_end + 4 + length
}

fn pipeline(base: &str, store: Arc<FileStore>) -> Pipeline<ReqwestTransport> {
    Pipeline::new(
        ReqwestTransport::new().unwrap(),
        store,
        Arc::new(ProgressCounter::default()),
        Arc::new(TerminalNavigator),
        ApiConfig::default().with_base_url(base).with_timeout(Duration::from_secs(5)),
    )
}

// =============================================================================
// TRANSPORT
// =============================================================================

#[tokio::test]
async fn attaches_bearer_and_decodes_json() {
    let dir = tempfile::tempdir().unwrap();
    let store = Arc::new(FileStore::new(dir.path().join("token")));
    store.set("abc123");
    let (base, request) = serve_once("200 OK", r#"{"username":"admin","status":"active"}"#).await;

    let me = AdminApi::new(&pipeline(&base, store)).me().await.unwrap();
    assert_eq!(me.username, "admin");

    let raw = request.await.unwrap().to_ascii_lowercase();
    assert!(raw.starts_with("get /admin/auth/me "), "{raw}");
    assert!(raw.contains("authorization: bearer abc123"), "{raw}");
}

#[tokio::test]
async fn login_posts_form_and_persists_token() {
    let dir = tempfile::tempdir().unwrap();
    let store = Arc::new(FileStore::new(dir.path().join("token")));
    let (base, request) = serve_once("200 OK", r#"{"access_token":"tok-1","token_type":"bearer"}"#).await;

    AdminApi::new(&pipeline(&base, store.clone())).login("admin", "secret1").await.unwrap();
    assert_eq!(store.get().as_deref(), Some("tok-1"));

    let raw = request.await.unwrap();
    assert!(raw.starts_with("POST /admin/auth/login "), "{raw}");
    assert!(raw.to_ascii_lowercase().contains("content-type: application/x-www-form-urlencoded"), "{raw}");
    assert!(raw.ends_with("username=admin&password=secret1"), "{raw}");
    assert!(!raw.to_ascii_lowercase().contains("authorization:"), "{raw}");
}

#[tokio::test]
async fn unauthorized_clears_token_file() {
    let dir = tempfile::tempdir().unwrap();
    let store = Arc::new(FileStore::new(dir.path().join("token")));
    store.set("stale");
    let (base, _request) = serve_once("401 Unauthorized", r#"{"detail":"Could not validate credentials"}"#).await;

    let err = AdminApi::new(&pipeline(&base, store.clone())).dashboard().await.unwrap_err();
    assert!(err.is_unauthorized());
    assert_eq!(err.detail(), Some("Could not validate credentials"));
    assert!(!store.path().exists());
}

#[tokio::test]
async fn other_failures_keep_token_file() {
    let dir = tempfile::tempdir().unwrap();
    let store = Arc::new(FileStore::new(dir.path().join("token")));
    store.set("abc123");
    let (base, _request) = serve_once("404 Not Found", r#"{"detail":"Product not found"}"#).await;

    let err = AdminApi::new(&pipeline(&base, store.clone())).product(7).await.unwrap_err();
    assert_eq!(err.status(), Some(404));
    assert_eq!(store.get().as_deref(), Some("abc123"));
}

#[tokio::test]
async fn no_content_becomes_null() {
    let dir = tempfile::tempdir().unwrap();
    let store = Arc::new(FileStore::new(dir.path().join("token")));
    let (base, request) = serve_once("204 No Content", "").await;

    let body = pipeline(&base, store).send(RequestBuilder::delete("/admin/product/3")).await.unwrap();
    assert_eq!(body, serde_json::Value::Null);
    assert!(request.await.unwrap().starts_with("DELETE /admin/product/3 "));
}

#[tokio::test]
async fn refused_connection_is_a_transport_error() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let base = format!("http://{}", listener.local_addr().unwrap());
    drop(listener);

    let dir = tempfile::tempdir().unwrap();
    let store = Arc::new(FileStore::new(dir.path().join("token")));
    store.set("abc123");
    let err = pipeline(&base, store.clone()).send(RequestBuilder::get("/admin/dashboard/")).await.unwrap_err();
    assert!(matches!(err, ApiError::Transport(_)), "{err:?}");
    assert_eq!(store.get().as_deref(), Some("abc123"));
}

#[tokio::test]
async fn clear_audit_logs_puts_ids_in_json_body() {
    let dir = tempfile::tempdir().unwrap();
    let store = Arc::new(FileStore::new(dir.path().join("token")));
    store.set("abc123");
    let (base, request) = serve_once("200 OK", r#"{"deleted_count":2}"#).await;

    AdminApi::new(&pipeline(&base, store)).clear_audit_logs(&[5, 6]).await.unwrap();

    let raw = request.await.unwrap();
    assert!(raw.starts_with("DELETE /admin/audit/clear "), "{raw}");
    assert!(raw.to_ascii_lowercase().contains("content-type: application/json"), "{raw}");
    assert!(raw.ends_with("[5,6]"), "{raw}");
}

#[tokio::test]
async fn silent_server_times_out_without_deauthenticating() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let base = format!("http://{}", listener.local_addr().unwrap());
    tokio::spawn(async move {
        let (_socket, _) = listener.accept().await.unwrap();
        tokio::time::sleep(Duration::from_secs(30)).await;
    });

    let dir = tempfile::tempdir().unwrap();
    let store = Arc::new(FileStore::new(dir.path().join("token")));
    store.set("abc123");
    let pipeline = Pipeline::new(
        ReqwestTransport::new().unwrap(),
        store.clone(),
        Arc::new(ProgressCounter::default()),
        Arc::new(TerminalNavigator),
        ApiConfig::default().with_base_url(base).with_timeout(Duration::from_millis(200)),
    );

    let err = pipeline.send(RequestBuilder::get("/admin/dashboard/")).await.unwrap_err();
    assert_eq!(err, ApiError::Timeout);
    assert_eq!(store.get().as_deref(), Some("abc123"));
}
