//! Shared utilities for integration testing.

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

/// One wire request as the mock relay saw it.
#[derive(Debug, Clone, Default)]
pub struct CapturedRequest {
    pub method: String,
    pub path: String,
    /// Header `(name, value)` pairs, names lowercased, in arrival order.
    pub headers: Vec<(String, String)>,
}

impl CapturedRequest {
    /// All values seen for one header name.
    pub fn header_values(&self, name: &str) -> Vec<&str> {
        let name = name.to_lowercase();
        self.headers
            .iter()
            .filter(|(n, _)| *n == name)
            .map(|(_, v)| v.as_str())
            .collect()
    }

    /// Single value for a header expected at most once.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.header_values(name).first().copied()
    }
}

/// Start a mock relay that serves the discovery document at `/.meta` and
/// answers every other path with the given response head, recording each
/// request it sees.
///
/// Returns the bound address and the shared request log.
pub async fn start_mock_relay(
    meta_json: &'static str,
    reply_status: &'static str,
    reply_headers: &'static [(&'static str, &'static str)],
    reply_body: &'static str,
) -> (SocketAddr, Arc<Mutex<Vec<CapturedRequest>>>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let captured = Arc::new(Mutex::new(Vec::new()));
    let log = captured.clone();

    tokio::spawn(async move {
        loop {
            match listener.accept().await {
                Ok((mut socket, _)) => {
                    let log = log.clone();
                    tokio::spawn(async move {
                        // read up to the end of the header block; these
                        // tests never send request bodies
                        let mut buf = Vec::new();
                        let mut chunk = [0u8; 1024];
                        loop {
                            match socket.read(&mut chunk).await {
                                Ok(0) => break,
                                Ok(n) => {
                                    buf.extend_from_slice(&chunk[..n]);
                                    if buf.windows(4).any(|w| w == b"\r\n\r\n") {
                                        break;
                                    }
                                }
                                Err(_) => return,
                            }
                        }

                        let request = parse_request(&buf);
                        let response = if request.path == "/.meta" {
                            format!(
                                "HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                                meta_json.len(),
                                meta_json
                            )
                        } else {
                            let mut head = format!("HTTP/1.1 {reply_status}\r\n");
                            for (name, value) in reply_headers {
                                head.push_str(&format!("{name}: {value}\r\n"));
                            }
                            head.push_str(&format!(
                                "Content-Length: {}\r\nConnection: close\r\n\r\n{}",
                                reply_body.len(),
                                reply_body
                            ));
                            head
                        };

                        log.lock().unwrap().push(request);
                        let _ = socket.write_all(response.as_bytes()).await;
                        let _ = socket.shutdown().await;
                    });
                }
                Err(_) => break,
            }
        }
    });

    (addr, captured)
}

fn parse_request(raw: &[u8]) -> CapturedRequest {
    let text = String::from_utf8_lossy(raw);
    let mut lines = text.split("\r\n");

    let mut request = CapturedRequest::default();
    if let Some(request_line) = lines.next() {
        let mut parts = request_line.split(' ');
        request.method = parts.next().unwrap_or_default().to_string();
        request.path = parts.next().unwrap_or_default().to_string();
    }

    for line in lines {
        if line.is_empty() {
            break;
        }
        if let Some((name, value)) = line.split_once(':') {
            request
                .headers
                .push((name.trim().to_lowercase(), value.trim().to_string()));
        }
    }

    request
}
