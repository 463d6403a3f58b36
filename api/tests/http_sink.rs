//! Exercises `HttpLeadSink` against a one-shot local HTTP listener.

use api::{HttpLeadSink, Lead, LeadConfig, LeadEndpoint, LeadSink, SubmitError};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

fn asha(whatsapp_updates: bool) -> Lead {
    Lead {
        name: "Asha".into(),
        phone: "9999999999".into(),
        pincode: "400001".into(),
        whatsapp_updates,
    }
}

/// Accept one connection, capture the raw request, answer with `status_line`.
async fn one_shot_server(status_line: &'static str) -> (LeadConfig, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let handle = tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut raw = Vec::new();
        let mut buf = [0u8; 1024];
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
        let response =
            format!("HTTP/1.1 {status_line}\r\ncontent-length: 0\r\nconnection: close\r\n\r\n");
        socket.write_all(response.as_bytes()).await.unwrap();
        socket.shutdown().await.ok();
        String::from_utf8_lossy(&raw).into_owned()
    });

    let endpoint = LeadEndpoint::parse(&format!("http://{addr}/leads")).unwrap();
    (LeadConfig::with_endpoint(endpoint), handle)
}

fn request_complete(raw: &[u8]) -> bool {
    let text = String::from_utf8_lossy(raw);
    let Some(split) = text.find("\r\n\r\n") else {
        return false;
    };
    let length = text[..split]
        .lines()
        .find_map(|line| {
            let (k, v) = line.split_once(':')?;
            k.eq_ignore_ascii_case("content-length")
                .then(|| v.trim().parse::<usize>().ok())
                .flatten()
        })
        .unwrap_or(0);
    raw.len() >= split + 4 + length
}

fn body_of(raw: &str) -> serde_json::Value {
    let (_, body) = raw.split_once("\r\n\r\n").unwrap();
    serde_json::from_str(body).unwrap()
}

#[tokio::test]
async fn accepted_lead_posts_json_payload() {
    let (config, server) = one_shot_server("200 OK").await;
    let sink = HttpLeadSink::new(&config);

    sink.submit(&asha(true)).await.expect("2xx should be accepted");

    let raw = server.await.unwrap();
    assert!(raw.starts_with("POST /leads HTTP/1.1"), "got: {raw}");
    assert!(raw
        .to_ascii_lowercase()
        .contains("content-type: application/json"));

    let body = body_of(&raw);
    assert_eq!(body["name"], "Asha");
    assert_eq!(body["phone"], "9999999999");
    assert_eq!(body["pincode"], "400001");
    assert_eq!(body["whatsappUpdates"], true);
}

#[tokio::test]
async fn any_success_status_counts_as_accepted() {
    let (config, server) = one_shot_server("202 Accepted").await;
    let sink = HttpLeadSink::new(&config);

    assert!(sink.submit(&asha(false)).await.is_ok());
    let body = body_of(&server.await.unwrap());
    assert_eq!(body["whatsappUpdates"], false);
}

#[tokio::test]
async fn server_error_is_a_rejection() {
    let (config, server) = one_shot_server("500 Internal Server Error").await;
    let sink = HttpLeadSink::new(&config);

    let err = sink.submit(&asha(false)).await.unwrap_err();
    assert!(err.is_rejection());
    assert!(matches!(err, SubmitError::Rejected { status: 500 }));
    server.await.unwrap();
}

#[tokio::test]
async fn refused_connection_is_a_transport_error() {
    // Reserve a port, then free it so nothing is listening there.
    let addr = {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        listener.local_addr().unwrap()
    };
    let endpoint = LeadEndpoint::parse(&format!("http://{addr}/")).unwrap();
    let sink = HttpLeadSink::new(&LeadConfig::with_endpoint(endpoint));

    let err = sink.submit(&asha(false)).await.unwrap_err();
    assert!(matches!(err, SubmitError::Transport(_)), "got: {err:?}");
    assert!(!err.is_rejection());
}
