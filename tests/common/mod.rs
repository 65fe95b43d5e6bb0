//! Shared helpers for the upload integration tests: a one-shot HTTP
//! server that records the raw request bytes.

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::task::JoinHandle;

/// Bind an ephemeral port, accept exactly one HTTP request, answer it
/// with `status_line`, and hand the raw request bytes back through the
/// join handle.
pub async fn serve_once(status_line: &'static str) -> anyhow::Result<(String, JoinHandle<Vec<u8>>)> {
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let endpoint = format!("http://{}/upload", listener.local_addr()?);

    let handle = tokio::spawn(async move {
        let (mut stream, _) = listener.accept().await.expect("accept");
        let request = read_request(&mut stream).await;
        let response =
            format!("HTTP/1.1 {status_line}\r\ncontent-length: 0\r\nconnection: close\r\n\r\n");
        stream
            .write_all(response.as_bytes())
            .await
            .expect("write response");
        stream.shutdown().await.ok();
        request
    });

    Ok((endpoint, handle))
}

async fn read_request(stream: &mut TcpStream) -> Vec<u8> {
    let mut request = Vec::new();
    let mut chunk = [0u8; 4096];
    loop {
        let read = stream.read(&mut chunk).await.expect("read request");
        if read == 0 {
            break;
        }
        request.extend_from_slice(&chunk[..read]);
        if let Some(end) = find(&request, b"\r\n\r\n") {
            let body_len = content_length(&request[..end]);
            if request.len() >= end + 4 + body_len {
                break;
            }
        }
    }
    request
}

fn content_length(head: &[u8]) -> usize {
    String::from_utf8_lossy(head)
        .lines()
        .find_map(|line| {
            let (name, value) = line.split_once(':')?;
            if name.eq_ignore_ascii_case("content-length") {
                value.trim().parse().ok()
            } else {
                None
            }
        })
        .unwrap_or(0)
}

fn find(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack
        .windows(needle.len())
        .position(|window| window == needle)
}

/// ASCII-case-insensitive containment check for multipart assertions.
pub fn request_contains(request: &[u8], needle: &str) -> bool {
    let haystack = request.to_ascii_lowercase();
    let needle = needle.to_ascii_lowercase();
    find(&haystack, needle.as_bytes()).is_some()
}
