//! Transport tests for the Gemini client.
//!
//! Serves canned HTTP responses from a loopback listener and points the
//! client's base URL at it — no network, no API key spend. Each test
//! exercises one leg of the classify contract: success parsing, the
//! no-candidate fallback, and non-success status handling.

use message_scan::{GeminiClient, Rating, ScanError, Verdict};
use std::io::{Read, Write};
use std::net::TcpListener;

/// Serve exactly one canned HTTP response on a loopback port.
///
/// Returns the base URL to point the client at. The listener thread
/// reads the full request (headers + content-length body) before
/// responding, then closes the connection.
fn serve_once(status_line: &'static str, content_type: &'static str, body: String) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind loopback");
    let port = listener.local_addr().unwrap().port();

    std::thread::spawn(move || {
        let (mut stream, _) = listener.accept().expect("accept");

        // Read until end of headers, then drain the declared body length.
        let mut raw = Vec::new();
        let mut buf = [0u8; 4096];
        let header_end = loop {
            let n = stream.read(&mut buf).expect("read request");
            raw.extend_from_slice(&buf[..n]);
            if let Some(pos) = find_header_end(&raw) {
                break pos;
            }
        };
        let headers = String::from_utf8_lossy(&raw[..header_end]).to_lowercase();
        let content_length: usize = headers
            .lines()
            .find_map(|l| l.strip_prefix("content-length:"))
            .and_then(|v| v.trim().parse().ok())
            .unwrap_or(0);
        while raw.len() < header_end + 4 + content_length {
            let n = stream.read(&mut buf).expect("read body");
            raw.extend_from_slice(&buf[..n]);
        }

        let response = format!(
            "HTTP/1.1 {status_line}\r\ncontent-type: {content_type}\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
            body.len()
        );
        stream.write_all(response.as_bytes()).expect("write response");
        stream.flush().ok();
    });

    format!("http://127.0.0.1:{port}")
}

fn find_header_end(raw: &[u8]) -> Option<usize> {
    raw.windows(4).position(|w| w == b"\r\n\r\n")
}

fn gemini_reply(text: &str) -> String {
    serde_json::json!({
        "candidates": [
            { "content": { "parts": [ { "text": text } ] } }
        ]
    })
    .to_string()
}

#[tokio::test]
async fn well_formed_reply_parses_into_verdict() {
    let base = serve_once(
        "200 OK",
        "application/json",
        gemini_reply("scam | Too-good-to-be-true prize claim is a classic phishing lure."),
    );
    let client = GeminiClient::default().with_base_url(base);

    let verdict = client
        .classify("Click here to claim your prize!", "test-key")
        .await
        .expect("classify should succeed");

    assert_eq!(verdict.rating, Rating::Scam);
    assert_eq!(
        verdict.reason,
        "Too-good-to-be-true prize claim is a classic phishing lure."
    );
}

#[tokio::test]
async fn missing_candidate_text_degrades_to_unsure() {
    let base = serve_once("200 OK", "application/json", "{}".to_string());
    let client = GeminiClient::default().with_base_url(base);

    let verdict = client
        .classify("hello there", "test-key")
        .await
        .expect("malformed success body must not error");

    assert_eq!(verdict, Verdict::fallback());
    assert_eq!(verdict.reason, "No reason provided.");
}

#[tokio::test]
async fn empty_candidate_text_degrades_to_unsure() {
    let base = serve_once("200 OK", "application/json", gemini_reply(""));
    let client = GeminiClient::default().with_base_url(base);

    let verdict = client.classify("hello", "test-key").await.unwrap();
    assert_eq!(verdict.rating, Rating::Unsure);
}

#[tokio::test]
async fn unrecognized_rating_normalizes_to_unsure() {
    let base = serve_once(
        "200 OK",
        "application/json",
        gemini_reply("maybe | Hard to say."),
    );
    let client = GeminiClient::default().with_base_url(base);

    let verdict = client.classify("hmm", "test-key").await.unwrap();
    assert_eq!(verdict.rating, Rating::Unsure);
    assert_eq!(verdict.reason, "Hard to say.");
}

#[tokio::test]
async fn non_success_status_carries_response_body() {
    let base = serve_once(
        "403 Forbidden",
        "application/json",
        r#"{"error":{"message":"API key not valid"}}"#.to_string(),
    );
    let client = GeminiClient::default().with_base_url(base);

    let err = client.classify("hello", "bad-key").await.unwrap_err();
    match err {
        ScanError::Api { status, body } => {
            assert_eq!(status.as_u16(), 403);
            assert!(body.contains("API key not valid"));
        }
        other => panic!("expected Api error, got: {other:?}"),
    }
}

#[tokio::test]
async fn connection_failure_is_a_transport_error() {
    // Nothing listens on port 1.
    let client = GeminiClient::default().with_base_url("http://127.0.0.1:1");
    let err = client.classify("hello", "test-key").await.unwrap_err();
    assert!(matches!(err, ScanError::Http(_)), "got: {err:?}");
}
