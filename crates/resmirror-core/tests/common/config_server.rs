//! Minimal HTTP/1.1 server standing in for the configuration service.
//!
//! Answers every GET with a fixed status and body and records the head of
//! each request it sees.

use std::io::{Read, Write};
use std::net::TcpListener;
use std::sync::{Arc, Mutex};
use std::thread;

#[derive(Debug, Clone)]
pub struct ConfigServer {
    /// Host and port, without scheme (e.g. "127.0.0.1:12345").
    pub address: String,
    requests: Arc<Mutex<Vec<String>>>,
}

impl ConfigServer {
    /// Request targets seen so far, e.g. "/v1/project/sockshop/...".
    pub fn requests(&self) -> Vec<String> {
        self.requests
            .lock()
            .unwrap()
            .iter()
            .map(|head| {
                head.lines()
                    .next()
                    .and_then(|line| line.split_whitespace().nth(1))
                    .unwrap_or("")
                    .to_string()
            })
            .collect()
    }

    /// Raw request heads (request line plus headers) seen so far.
    pub fn request_heads(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

/// Serve `body` as a 200 JSON response.
pub fn start_json(body: &str) -> ConfigServer {
    start(200, body.as_bytes().to_vec())
}

/// Serves a resource envelope with the given content.
pub fn start_resource(content: &str, uri: &str) -> ConfigServer {
    let body = serde_json::json!({
        "resourceContent": content,
        "resourceURI": uri,
    });
    start_json(&body.to_string())
}

/// Starts a server in a background thread answering every request with
/// `status` and `body`. Runs until the process exits.
pub fn start(status: u16, body: Vec<u8>) -> ConfigServer {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    let body = Arc::new(body);
    let requests = Arc::new(Mutex::new(Vec::new()));
    let seen = Arc::clone(&requests);
    thread::spawn(move || {
        for stream in listener.incoming().flatten() {
            let body = Arc::clone(&body);
            let seen = Arc::clone(&seen);
            thread::spawn(move || handle(stream, status, &body, &seen));
        }
    });
    ConfigServer {
        address: format!("127.0.0.1:{}", port),
        requests,
    }
}

/// Address nothing listens on.
pub fn closed_address() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    format!("127.0.0.1:{}", port)
}

fn handle(
    mut stream: std::net::TcpStream,
    status: u16,
    body: &[u8],
    seen: &Mutex<Vec<String>>,
) {
    let _ = stream.set_read_timeout(Some(std::time::Duration::from_secs(2)));
    let _ = stream.set_write_timeout(Some(std::time::Duration::from_secs(2)));
    let mut buf = [0u8; 8192];
    let n = match stream.read(&mut buf) {
        Ok(0) => return,
        Ok(n) => n,
        Err(_) => return,
    };
    let request = match std::str::from_utf8(&buf[..n]) {
        Ok(s) => s,
        Err(_) => return,
    };
    let method = request.split_whitespace().next().unwrap_or("");
    let head = request.split("\r\n\r\n").next().unwrap_or("");
    seen.lock().unwrap().push(head.to_string());

    if !method.eq_ignore_ascii_case("GET") {
        let _ = stream.write_all(b"HTTP/1.1 405 Method Not Allowed\r\nContent-Length: 0\r\n\r\n");
        return;
    }
    let response = format!(
        "HTTP/1.1 {} {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
        status,
        reason(status),
        body.len()
    );
    let _ = stream.write_all(response.as_bytes());
    let _ = stream.write_all(body);
}

fn reason(status: u16) -> &'static str {
    match status {
        200 => "OK",
        404 => "Not Found",
        500 => "Internal Server Error",
        503 => "Service Unavailable",
        _ => "Unknown",
    }
}
