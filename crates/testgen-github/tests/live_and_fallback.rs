//! Live passthrough against a local stub server, and fallback when the
//! API is unreachable or rejects the request.

use testgen_github::{
    fixtures, EntryKind, GitHubClient, GitHubConfig, RepositorySource, Source,
};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tracing_test::traced_test;

const REPOS_BODY: &str = r#"[{"id":42,"name":"live-repo","full_name":"octo/live-repo","description":null,"language":"Rust","private":false,"owner":{"login":"octo"}}]"#;
const LISTING_BODY: &str = r#"[{"name":"lib.rs","path":"src/lib.rs","type":"file","sha":"1","download_url":"https://raw.example/lib.rs"},{"name":"bin","path":"src/bin","type":"dir","sha":"2","download_url":null}]"#;
const FILE_BODY: &str = r#"{"name":"lib.rs","path":"src/lib.rs","type":"file","encoding":"base64","content":"aW1wb3J0IFJlYWN0\nIGZyb20gJ3JlYWN0Jzs=\n"}"#;

/// Minimal HTTP/1.1 responder keyed on the request path.
async fn spawn_stub() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        loop {
            let Ok((mut socket, _)) = listener.accept().await else {
                break;
            };
            tokio::spawn(async move {
                let mut buf = vec![0u8; 8192];
                let n = socket.read(&mut buf).await.unwrap_or(0);
                let request = String::from_utf8_lossy(&buf[..n]).to_string();
                let path = request
                    .lines()
                    .next()
                    .and_then(|line| line.split_whitespace().nth(1))
                    .unwrap_or("/")
                    .to_string();
                let authorized = request
                    .lines()
                    .any(|l| l.to_ascii_lowercase() == "authorization: bearer good-token");

                let (status, body) = if !authorized {
                    ("401 Unauthorized", r#"{"message":"Bad credentials"}"#)
                } else {
                    match path.as_str() {
                        "/user/repos" => ("200 OK", REPOS_BODY),
                        "/repos/octo/live-repo/contents/src" => ("200 OK", LISTING_BODY),
                        "/repos/octo/live-repo/contents/src/lib.rs" => ("200 OK", FILE_BODY),
                        _ => ("404 Not Found", r#"{"message":"Not Found"}"#),
                    }
                };
                let response = format!(
                    "HTTP/1.1 {status}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
                    body.len()
                );
                let _ = socket.write_all(response.as_bytes()).await;
                let _ = socket.shutdown().await;
            });
        }
    });

    format!("http://{addr}")
}

#[tokio::test]
async fn live_reads_are_tagged_live() {
    let url = spawn_stub().await;
    let client = GitHubClient::new(GitHubConfig::new(&url)).unwrap();

    let repos = client.list_repositories(Some("good-token")).await;
    assert_eq!(repos.source, Source::Live);
    assert_eq!(repos.value.len(), 1);
    assert_eq!(repos.value[0].full_name, "octo/live-repo");
    assert_eq!(repos.value[0].description, None);

    let listing = client
        .list_contents("octo", "live-repo", "src", Some("good-token"))
        .await;
    assert_eq!(listing.source, Source::Live);
    assert_eq!(listing.value.len(), 2);
    assert_eq!(listing.value[1].kind, EntryKind::Dir);

    let file = client
        .file_content("octo", "live-repo", "src/lib.rs", Some("good-token"))
        .await;
    assert_eq!(file.source, Source::Live);
    assert_eq!(file.value.content, "import React from 'react';");
}

#[tokio::test]
async fn configured_token_is_used_when_caller_has_none() {
    let url = spawn_stub().await;
    let client = GitHubClient::new(GitHubConfig::new(&url).with_token("good-token")).unwrap();

    let repos = client.list_repositories(None).await;
    assert_eq!(repos.source, Source::Live);
}

#[traced_test]
#[tokio::test]
async fn rejected_token_falls_back_to_fixtures() {
    let url = spawn_stub().await;
    let client = GitHubClient::new(GitHubConfig::new(&url)).unwrap();

    let repos = client.list_repositories(Some("bad-token")).await;
    assert_eq!(repos.source, Source::Fallback);
    assert_eq!(repos.value, fixtures::repositories());
    assert!(logs_contain("source.fallback"));
}

#[tokio::test]
async fn unknown_path_falls_back_to_fixture_tree() {
    let url = spawn_stub().await;
    let client = GitHubClient::new(GitHubConfig::new(&url)).unwrap();

    let listing = client
        .list_contents("octo", "python-api", "app", Some("good-token"))
        .await;
    assert!(listing.is_fallback());
    assert!(listing.value.iter().any(|e| e.path == "app/main.py"));
}

#[tokio::test]
async fn unreachable_api_falls_back() {
    // Bind then drop to get a port nothing is listening on.
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let config = GitHubConfig::new(&format!("http://{addr}"))
        .with_token("good-token")
        .with_timeout_secs(2);
    let client = GitHubClient::new(config).unwrap();

    let file = client
        .file_content("user", "my-react-app", "src/components/UserProfile.tsx", None)
        .await;
    assert!(file.is_fallback());
    assert!(file.value.content.contains("UserProfile"));
}
