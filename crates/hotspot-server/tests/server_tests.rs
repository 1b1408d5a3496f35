// Loopback tests: a real listener on an ephemeral port, raw HTTP over TCP.

use std::io;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use hotspot_server::{serve_with, Accept, ACCEPT_BACKOFF};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::time::Instant;

async fn spawn_server() -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(hotspot_server::serve(listener));
    addr
}

async fn roundtrip_bytes(addr: SocketAddr, request: &[u8]) -> String {
    let mut stream = TcpStream::connect(addr).await.unwrap();
    stream.write_all(request).await.unwrap();
    let mut buf = Vec::new();
    stream.read_to_end(&mut buf).await.unwrap();
    String::from_utf8(buf).unwrap()
}

async fn roundtrip(addr: SocketAddr, request: &str) -> String {
    roundtrip_bytes(addr, request.as_bytes()).await
}

fn split(response: &str) -> (&str, &str) {
    response.split_once("\r\n\r\n").unwrap()
}

#[tokio::test]
async fn get_sphere_data_over_tcp() {
    let addr = spawn_server().await;
    let res = roundtrip(
        addr,
        "GET /sphere-data?id=42 HTTP/1.1\r\nHost: localhost\r\nOrigin: http://example.test\r\n\r\n",
    )
    .await;
    let (head, body) = split(&res);
    assert!(head.starts_with("HTTP/1.1 200 OK"));
    assert!(head.to_ascii_lowercase().contains("access-control-allow-origin: *"));

    let value: serde_json::Value = serde_json::from_str(body).unwrap();
    assert_eq!(value["id"], "42");
    assert_eq!(value["name"], "Sphere 42");
    assert_eq!(value["description"], "This is the description for sphere 42.");
}

#[tokio::test]
async fn missing_id_over_tcp() {
    let addr = spawn_server().await;
    let res = roundtrip(addr, "GET /sphere-data HTTP/1.1\r\nHost: localhost\r\n\r\n").await;
    let (_, body) = split(&res);
    let value: serde_json::Value = serde_json::from_str(body).unwrap();
    assert!(value.get("id").is_none());
    assert_eq!(value["name"], "Sphere ");
}

#[tokio::test]
async fn head_request_has_no_body() {
    let addr = spawn_server().await;
    let res = roundtrip(addr, "HEAD /sphere-data?id=1 HTTP/1.1\r\n\r\n").await;
    let (head, body) = split(&res);
    assert!(head.starts_with("HTTP/1.1 200 OK"));
    assert!(body.is_empty());
}

#[tokio::test]
async fn preflight_and_not_found_over_tcp() {
    let addr = spawn_server().await;

    let res = roundtrip(addr, "OPTIONS /sphere-data HTTP/1.1\r\n\r\n").await;
    assert!(res.starts_with("HTTP/1.1 204 No Content"));
    assert!(res
        .to_ascii_lowercase()
        .contains("access-control-allow-methods: get,head,put,patch,post,delete"));

    let res = roundtrip(addr, "GET /elsewhere HTTP/1.1\r\n\r\n").await;
    let (head, body) = split(&res);
    assert!(head.starts_with("HTTP/1.1 404 Not Found"));
    assert_eq!(body, "Cannot GET /elsewhere");
}

#[tokio::test]
async fn garbage_request_line_is_bad_request() {
    let addr = spawn_server().await;
    let res = roundtrip(addr, "NONSENSE\r\n\r\n").await;
    assert!(res.starts_with("HTTP/1.1 400 Bad Request"));
}

#[tokio::test]
async fn concurrent_clients_are_served_independently() {
    let addr = spawn_server().await;
    let tasks: Vec<_> = (0..8)
        .map(|i| {
            tokio::spawn(async move {
                let res = roundtrip(addr, &format!("GET /sphere-data?id={i} HTTP/1.1\r\n\r\n")).await;
                let (_, body) = split(&res);
                let value: serde_json::Value = serde_json::from_str(body).unwrap();
                assert_eq!(value["id"], i.to_string());
            })
        })
        .collect();
    for task in tasks {
        task.await.unwrap();
    }
}

#[tokio::test]
async fn non_utf8_header_bytes_are_ignored() {
    let addr = spawn_server().await;
    let res = roundtrip_bytes(
        addr,
        b"GET /sphere-data?id=7 HTTP/1.1\r\nX-Name: caf\xE9\r\n\r\n",
    )
    .await;
    let (head, body) = split(&res);
    assert!(head.starts_with("HTTP/1.1 200 OK"));
    let value: serde_json::Value = serde_json::from_str(body).unwrap();
    assert_eq!(value["name"], "Sphere 7");
}

#[tokio::test]
async fn raw_angle_brackets_in_id_are_echoed() {
    let addr = spawn_server().await;
    let res = roundtrip(addr, "GET /sphere-data?id=<x> HTTP/1.1\r\n\r\n").await;
    let (head, body) = split(&res);
    assert!(head.starts_with("HTTP/1.1 200 OK"));
    let value: serde_json::Value = serde_json::from_str(body).unwrap();
    assert_eq!(value["id"], "<x>");
}

/// Listener that fails a fixed number of times, recording when each attempt
/// happened, then never yields a connection.
struct FailingListener {
    attempts: Arc<Mutex<Vec<Instant>>>,
    failures: usize,
}

impl Accept for FailingListener {
    type Stream = TcpStream;

    fn accept(
        &self,
    ) -> impl std::future::Future<Output = io::Result<(TcpStream, SocketAddr)>> + Send {
        let attempts = self.attempts.clone();
        let failures = self.failures;
        async move {
            let n = {
                let mut attempts = attempts.lock().unwrap();
                attempts.push(Instant::now());
                attempts.len()
            };
            if n > failures {
                std::future::pending::<()>().await;
            }
            Err(io::Error::new(io::ErrorKind::Other, "too many open files"))
        }
    }
}

#[tokio::test(start_paused = true)]
async fn accept_errors_back_off_before_retrying() {
    let attempts = Arc::new(Mutex::new(Vec::new()));
    let listener = FailingListener {
        attempts: attempts.clone(),
        failures: 5,
    };
    let _ = tokio::time::timeout(Duration::from_secs(5), serve_with(listener)).await;

    let attempts = attempts.lock().unwrap();
    assert_eq!(attempts.len(), 6);
    for pair in attempts.windows(2) {
        assert!(pair[1] - pair[0] >= ACCEPT_BACKOFF);
    }
}
