use std::time::Duration;

use httpmock::prelude::*;
use mapdump_core::{
    load, load_local, load_remote, parse_remote_url, ErrorKind, ExtractError, FetchConfig, Resource,
};
use serde_json::json;
use tempfile::tempdir;

#[tokio::test]
async fn local_json_is_parsed() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("app.js.map");
    tokio::fs::write(&path, r#"{"version":3,"sources":[],"sourcesContent":[]}"#)
        .await
        .unwrap();

    let value = load_local(&path).await.unwrap();
    assert_eq!(value, json!({"version": 3, "sources": [], "sourcesContent": []}));
}

#[tokio::test]
async fn local_missing_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("nope.map");
    let err = load_local(&path).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);
    assert_eq!(
        err.to_string(),
        format!("[{}] Provided JSON path doesn't exist, check and try again", path.display())
    );
}

#[tokio::test]
async fn local_invalid_json() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("bad.map");
    tokio::fs::write(&path, "{not json").await.unwrap();
    let err = load_local(&path).await.unwrap_err();
    assert!(matches!(err, ExtractError::Parse { .. }));
}

#[tokio::test]
async fn local_directory_is_a_read_error() {
    let dir = tempdir().unwrap();
    let err = load_local(dir.path()).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Read);
}

#[test]
fn url_without_scheme() {
    let err = parse_remote_url("example.com/app.js.map").unwrap_err();
    assert!(matches!(err, ExtractError::MissingSchema { .. }));
    assert_eq!(
        err.to_string(),
        "[example.com/app.js.map] Provided URL is missing a schema, add a schema and try again"
    );
}

#[test]
fn url_with_unsupported_scheme() {
    let err = parse_remote_url("ftp://example.com/app.js.map").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Schema);
    assert!(matches!(err, ExtractError::UnsupportedScheme { ref scheme, .. } if scheme == "ftp"));
}

#[test]
fn malformed_url_with_scheme() {
    let err = parse_remote_url("http://[::1").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Schema);
    assert!(matches!(err, ExtractError::InvalidUrl { .. }));
    assert!(err.to_string().starts_with("[http://[::1] Provided URL is not valid: "));
}

#[test]
fn url_accepted_for_http_and_https() {
    assert!(parse_remote_url("http://example.com/a.map").is_ok());
    assert!(parse_remote_url("https://example.com/a.map").is_ok());
}

#[tokio::test]
async fn remote_json_is_parsed() {
    let server = MockServer::start_async().await;
    let m = server.mock_async(|when, then| {
        when.method(GET).path("/app.js.map");
        then.status(200)
            .header("Content-Type", "application/json")
            .body(r#"{"version":3,"sources":["a.js"],"sourcesContent":["a"]}"#);
    }).await;

    let value = load_remote(&server.url("/app.js.map"), &FetchConfig::default())
        .await
        .unwrap();
    m.assert_async().await;
    assert_eq!(value["sources"], json!(["a.js"]));
}

#[tokio::test]
async fn remote_error_page_is_a_parse_error() {
    let server = MockServer::start_async().await;
    server.mock_async(|when, then| {
        when.method(GET).path("/missing.map");
        then.status(404).body("<html>not found</html>");
    }).await;

    let err = load_remote(&server.url("/missing.map"), &FetchConfig::default())
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Parse);
}

#[tokio::test]
async fn remote_json_on_error_status_still_parses() {
    let server = MockServer::start_async().await;
    server.mock_async(|when, then| {
        when.method(GET).path("/odd.map");
        then.status(500).body(r#"{"version":3}"#);
    }).await;

    let value = load_remote(&server.url("/odd.map"), &FetchConfig::default())
        .await
        .unwrap();
    assert_eq!(value, json!({"version": 3}));
}

#[tokio::test]
async fn remote_connection_refused() {
    // Nothing listens on port 1.
    let url = "http://127.0.0.1:1/app.js.map";
    let config = FetchConfig {
        timeout: Some(Duration::from_secs(5)),
        ..FetchConfig::default()
    };
    let err = load_remote(url, &config).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Connection);
    assert_eq!(err.to_string(), format!("[{url}] Error connecting to remote resource"));
}

#[tokio::test]
async fn load_dispatches_on_resource() {
    let server = MockServer::start_async().await;
    server.mock_async(|when, then| {
        when.method(GET).path("/m.map");
        then.status(200).body("[]");
    }).await;

    let remote = Resource::Remote(server.url("/m.map"));
    assert_eq!(load(&remote, &FetchConfig::default()).await.unwrap(), json!([]));

    let local = Resource::Local("/definitely/not/here.map".into());
    let err = load(&local, &FetchConfig::default()).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);
}

#[test]
fn resource_labels() {
    assert_eq!(Resource::Local("maps/a.map".into()).to_string(), "maps/a.map");
    assert_eq!(Resource::Local("a.map".into()).kind(), "local");
    assert_eq!(Resource::Remote("https://x/a.map".into()).to_string(), "https://x/a.map");
    assert_eq!(Resource::Remote("https://x/a.map".into()).kind(), "remote");
}
