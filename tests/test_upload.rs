//! Integration tests for the multipart upload client.
//!
//! Each test runs a one-shot TCP server (see `common`) so the exact
//! bytes reqwest puts on the wire can be asserted.

mod common;

use std::io::Write;

use fieldpost::models::{Coordinates, Report};
use fieldpost::upload::{UploadOutcome, submit_report};

fn sample_report(photo: &str) -> Report {
    Report {
        photo: photo.to_string(),
        description: "lost child".to_string(),
        position: Coordinates {
            latitude: 12.9,
            longitude: 77.6,
        },
    }
}

fn write_photo(dir: &tempfile::TempDir) -> anyhow::Result<String> {
    let path = dir.path().join("a.jpg");
    let mut file = std::fs::File::create(&path)?;
    file.write_all(b"\xff\xd8\xff\xe0fake-jpeg-bytes")?;
    Ok(path.display().to_string())
}

#[tokio::test]
async fn accepted_upload_posts_all_four_fields() -> anyhow::Result<()> {
    let dir = tempfile::TempDir::new()?;
    let photo = write_photo(&dir)?;
    let (endpoint, server) = common::serve_once("200 OK").await?;

    let outcome = submit_report(reqwest::Client::new(), endpoint, sample_report(&photo)).await;
    assert_eq!(outcome, UploadOutcome::Accepted);

    let request = server.await?;
    let head = String::from_utf8_lossy(&request[..64.min(request.len())]).to_string();
    assert!(
        head.starts_with("POST /upload HTTP/1.1"),
        "unexpected request head: {head}"
    );

    assert!(common::request_contains(&request, "name=\"image\""));
    assert!(common::request_contains(&request, "filename=\"photo.jpg\""));
    assert!(common::request_contains(&request, "content-type: image/jpeg"));
    assert!(common::request_contains(&request, "fake-jpeg-bytes"));
    assert!(common::request_contains(&request, "name=\"latitude\""));
    assert!(common::request_contains(&request, "12.9"));
    assert!(common::request_contains(&request, "name=\"longitude\""));
    assert!(common::request_contains(&request, "77.6"));
    assert!(common::request_contains(&request, "name=\"description\""));
    assert!(common::request_contains(&request, "lost child"));
    Ok(())
}

#[tokio::test]
async fn file_uri_prefix_is_accepted() -> anyhow::Result<()> {
    let dir = tempfile::TempDir::new()?;
    let photo = format!("file://{}", write_photo(&dir)?);
    let (endpoint, server) = common::serve_once("200 OK").await?;

    let outcome = submit_report(reqwest::Client::new(), endpoint, sample_report(&photo)).await;
    assert_eq!(outcome, UploadOutcome::Accepted);

    let request = server.await?;
    assert!(common::request_contains(&request, "fake-jpeg-bytes"));
    Ok(())
}

#[tokio::test]
async fn server_rejection_reports_the_status() -> anyhow::Result<()> {
    let dir = tempfile::TempDir::new()?;
    let photo = write_photo(&dir)?;
    let (endpoint, server) = common::serve_once("500 Internal Server Error").await?;

    let outcome = submit_report(reqwest::Client::new(), endpoint, sample_report(&photo)).await;
    assert_eq!(outcome, UploadOutcome::Rejected(500));

    server.await?;
    Ok(())
}

#[tokio::test]
async fn transport_failure_is_reported_with_a_reason() -> anyhow::Result<()> {
    let dir = tempfile::TempDir::new()?;
    let photo = write_photo(&dir)?;

    // Bind and immediately drop a listener so the port refuses.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
    let endpoint = format!("http://{}/upload", listener.local_addr()?);
    drop(listener);

    let outcome = submit_report(reqwest::Client::new(), endpoint, sample_report(&photo)).await;
    match outcome {
        UploadOutcome::Failed(reason) => assert!(!reason.is_empty()),
        other => panic!("expected a transport failure, got {other:?}"),
    }
    Ok(())
}

#[tokio::test]
async fn unreadable_photo_fails_without_a_network_call() -> anyhow::Result<()> {
    let outcome = submit_report(
        reqwest::Client::new(),
        "http://127.0.0.1:1/upload".to_string(),
        sample_report("/nonexistent/a.jpg"),
    )
    .await;
    match outcome {
        UploadOutcome::Failed(reason) => assert!(!reason.is_empty()),
        other => panic!("expected a file failure, got {other:?}"),
    }
    Ok(())
}
