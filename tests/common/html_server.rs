// tests/common/html_server.rs
//! Minimal HTTP/1.1 server for fetch tests: one static HTML body, or a
//! connection that is accepted and then left silent.

use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::thread;
use std::time::Duration;

#[derive(Debug, Clone, Copy)]
pub enum Behavior {
    /// Reply with this status line code and the body.
    Respond(u16),
    /// Read the request, then say nothing for this long.
    Silent(Duration),
}

pub struct Server {
    pub base: String,
    hits: Arc<AtomicUsize>,
}

impl Server {
    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, path.trim_start_matches('/'))
    }
}

/// Starts a server in a background thread. Runs until the process exits.
pub fn start(body: &str, behavior: Behavior) -> Server {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    let body = Arc::new(body.to_string());
    let hits = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&hits);
    thread::spawn(move || {
        for stream in listener.incoming().flatten() {
            counter.fetch_add(1, Ordering::SeqCst);
            let body = Arc::clone(&body);
            thread::spawn(move || handle(stream, &body, behavior));
        }
    });
    Server { base: format!("http://127.0.0.1:{}/", port), hits }
}

fn handle(mut stream: TcpStream, body: &str, behavior: Behavior) {
    let _ = stream.set_read_timeout(Some(Duration::from_secs(2)));
    let mut buf = [0u8; 8192];
    if matches!(stream.read(&mut buf), Ok(0) | Err(_)) {
        return;
    }
    match behavior {
        Behavior::Silent(d) => thread::sleep(d),
        Behavior::Respond(code) => {
            let reason = if code == 200 { "OK" } else { "Error" };
            let response = format!(
                "HTTP/1.1 {code} {reason}\r\nContent-Type: text/html; charset=utf-8\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                body.len(),
                body
            );
            let _ = stream.write_all(response.as_bytes());
            let _ = stream.flush();
        }
    }
}
