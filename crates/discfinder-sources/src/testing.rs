//! Local HTTP responders for exercising the fetchers without a network.
//!
//! Each responder answers one connection per canned response, in order, and hands
//! back the raw requests it received. Responses carry `Connection: close`, so every
//! request arrives on its own connection.

use tokio::{
    io::{AsyncReadExt, AsyncWriteExt},
    net::{TcpListener, TcpStream},
    task::JoinHandle,
};

/// Nothing listens here; clients pointed at it must not be asked to connect.
pub const UNUSED_URL: &str = "http://127.0.0.1:9";

/// Serve `responses` as `(status line, JSON body)` pairs, one connection each.
///
/// Returns the base URL and a handle resolving to the raw requests.
pub async fn serve(responses: Vec<(&'static str, &'static str)>) -> (String, JoinHandle<Vec<String>>) {
    let listener = bind().await;
    let url = base_url(&listener);
    (url, tokio::spawn(respond(listener, responses)))
}

/// Serve a single response. The handle resolves to the one raw request.
pub async fn serve_once(status: &'static str, body: &'static str) -> (String, JoinHandle<String>) {
    let listener = bind().await;
    let url = base_url(&listener);
    let handle = tokio::spawn(async move {
        respond(listener, vec![(status, body)])
            .await
            .into_iter()
            .next()
            .unwrap_or_default()
    });
    (url, handle)
}

/// URL of a port that was just released, so connecting to it fails.
pub async fn closed_url() -> String {
    let listener = bind().await;
    base_url(&listener)
}

async fn bind() -> TcpListener {
    TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind local responder")
}

fn base_url(listener: &TcpListener) -> String {
    let addr = listener
        .local_addr()
        .expect("Local responder has no address");
    format!("http://{addr}")
}

async fn respond(listener: TcpListener, responses: Vec<(&'static str, &'static str)>) -> Vec<String> {
    let mut requests = Vec::with_capacity(responses.len());
    for (status, body) in responses {
        let (mut socket, _) = listener
            .accept()
            .await
            .expect("Local responder failed to accept");
        requests.push(read_request(&mut socket).await);
        let response = format!(
            "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        );
        socket
            .write_all(response.as_bytes())
            .await
            .expect("Local responder failed to write");
        let _ = socket.shutdown().await;
    }
    requests
}

/// Read one request: headers, then as much body as `Content-Length` announces.
async fn read_request(socket: &mut TcpStream) -> String {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 4096];
    loop {
        let n = socket
            .read(&mut chunk)
            .await
            .expect("Local responder failed to read");
        if n == 0 {
            break;
        }
        buf.extend_from_slice(&chunk[..n]);
        if let Some(end) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
            let head = String::from_utf8_lossy(&buf[..end]).to_lowercase();
            let content_length = head
                .lines()
                .find_map(|line| line.strip_prefix("content-length:"))
                .and_then(|v| v.trim().parse::<usize>().ok())
                .unwrap_or(0);
            if buf.len() >= end + 4 + content_length {
                break;
            }
        }
    }
    String::from_utf8_lossy(&buf).into_owned()
}
