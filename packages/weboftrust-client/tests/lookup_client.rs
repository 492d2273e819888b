//! Integration tests for the lookup client against a local HTTP server.
//!
//! Each test serves one canned response on an ephemeral port and checks how
//! the client maps it: non-2xx statuses, undecodable bodies, valid lookups,
//! and transport failures.

use std::io::{BufRead, BufReader, Write};
use std::net::TcpListener;
use std::thread::{self, JoinHandle};

use weboftrust_client::{ParseError, WebOfTrustClient, WotError};

const API_KEY: &str = "test-secret-key";

/// Helper to serve a single HTTP response. Returns the base URL and a handle
/// yielding the request line the client sent.
fn serve_once(status: &'static str, body: &'static str) -> (String, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();

    let handle = thread::spawn(move || {
        let (mut stream, _) = listener.accept().unwrap();
        let mut reader = BufReader::new(stream.try_clone().unwrap());

        let mut request_line = String::new();
        reader.read_line(&mut request_line).unwrap();
        loop {
            let mut header = String::new();
            let read = reader.read_line(&mut header).unwrap();
            if read == 0 || header == "\r\n" {
                break;
            }
        }

        let response = format!(
            "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            status,
            body.len(),
            body
        );
        stream.write_all(response.as_bytes()).unwrap();
        stream.flush().unwrap();
        request_line
    });

    (format!("http://{}/", addr), handle)
}

/// Helper to build a client that talks to `base_url` directly.
fn client_for(base_url: &str) -> WebOfTrustClient {
    let http = reqwest::Client::builder().no_proxy().build().unwrap();
    WebOfTrustClient::new(API_KEY)
        .with_base_url(base_url)
        .with_http_client(http)
}

#[test]
fn test_lookup_parses_successful_response() {
    let (base_url, server) = serve_once(
        "200 OK",
        r#"{"b.example":{"target":"b.example","0":[80,30]},"a.example":{"target":"a.example","4":[20,50]}}"#,
    );
    let client = client_for(&base_url);

    let websites = tokio_test::block_on(client.lookup(&["b.example", "a.example"])).unwrap();

    let keys: Vec<&str> = websites.keys().map(String::as_str).collect();
    assert_eq!(keys, ["b.example", "a.example"]);
    assert_eq!(websites["b.example"].is_trustworthy(), Ok(true));
    assert_eq!(websites["a.example"].is_suitable_for_children(), Ok(false));

    let request_line = server.join().unwrap();
    assert!(request_line.starts_with("GET /0.4/public_link_json2?"));
    assert!(request_line.contains("hosts=b.example%2Fa.example%2F"));
    assert!(request_line.contains(&format!("key={}", API_KEY)));
}

#[test]
fn test_non_success_status_is_api_error() {
    let (base_url, server) = serve_once("500 Internal Server Error", "upstream unavailable");
    let client = client_for(&base_url);

    let err = tokio_test::block_on(client.lookup(&["example.com"])).unwrap_err();
    server.join().unwrap();

    match err {
        WotError::Api { status, message } => {
            assert_eq!(status, 500);
            assert_eq!(message, "upstream unavailable");
        }
        other => panic!("expected API error, got {:?}", other),
    }
}

#[test]
fn test_non_json_body_is_parse_error() {
    let (base_url, server) = serve_once("200 OK", "<html>maintenance</html>");
    let client = client_for(&base_url);

    let err = tokio_test::block_on(client.lookup_raw(&["example.com"])).unwrap_err();
    server.join().unwrap();

    assert!(matches!(err, WotError::Parse(ParseError::Json(_))));
}

#[test]
fn test_record_without_target_fails_lookup() {
    let (base_url, server) = serve_once("200 OK", r#"{"example.com":{"0":[90,40]}}"#);
    let client = client_for(&base_url);

    let err = tokio_test::block_on(client.lookup(&["example.com"])).unwrap_err();
    server.join().unwrap();

    assert!(matches!(err, WotError::Parse(ParseError::MissingTarget { .. })));
}

#[test]
fn test_transport_error_does_not_expose_api_key() {
    // bind then release a port so nothing is listening on it
    let port = TcpListener::bind("127.0.0.1:0")
        .unwrap()
        .local_addr()
        .unwrap()
        .port();
    let client = client_for(&format!("http://127.0.0.1:{}/", port));

    let err = tokio_test::block_on(client.lookup(&["example.com"])).unwrap_err();

    assert!(matches!(err, WotError::Http(_)));
    assert!(!err.to_string().contains(API_KEY));
    assert!(!format!("{:?}", err).contains(API_KEY));

    let mut source = std::error::Error::source(&err);
    while let Some(cause) = source {
        assert!(!cause.to_string().contains(API_KEY));
        source = cause.source();
    }
}
