//! Test utilities for Penman model tests.
//!
//! Provides a minimal HTTP/1.1 stub server that answers every connection with
//! a canned response (or never answers) and counts how many connections it
//! accepted.

use std::sync::{
    Arc, Mutex,
    atomic::{AtomicUsize, Ordering},
};
use std::time::Duration;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::task::JoinHandle;

/// How the stub answers.
#[derive(Debug, Clone)]
pub enum StubBehavior {
    /// Reply with this status and JSON body.
    Respond { status: u16, body: String },
    /// Read the request and never reply.
    Hang,
}

/// Running stub server; stops when dropped.
pub struct StubServer {
    base_url: String,
    connections: Arc<AtomicUsize>,
    last_request: Arc<Mutex<Option<String>>>,
    task: JoinHandle<()>,
}

impl StubServer {
    /// Binds to an ephemeral port and starts serving.
    pub async fn start(behavior: StubBehavior) -> std::io::Result<Self> {
        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let base_url = format!("http://{}", listener.local_addr()?);
        let connections = Arc::new(AtomicUsize::new(0));
        let last_request = Arc::new(Mutex::new(None));

        let task = tokio::spawn({
            let connections = Arc::clone(&connections);
            let last_request = Arc::clone(&last_request);
            async move {
                while let Ok((socket, _)) = listener.accept().await {
                    connections.fetch_add(1, Ordering::SeqCst);
                    let behavior = behavior.clone();
                    let last_request = Arc::clone(&last_request);
                    tokio::spawn(async move {
                        serve(socket, behavior, last_request).await;
                    });
                }
            }
        });

        Ok(Self {
            base_url,
            connections,
            last_request,
            task,
        })
    }

    /// Convenience for a JSON reply.
    pub async fn respond(status: u16, body: &str) -> std::io::Result<Self> {
        Self::start(StubBehavior::Respond {
            status,
            body: body.to_string(),
        })
        .await
    }

    /// Base URL to configure the client with.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Number of connections accepted so far.
    pub fn connections(&self) -> usize {
        self.connections.load(Ordering::SeqCst)
    }

    /// Raw text of the most recent request (head and body).
    pub fn last_request(&self) -> Option<String> {
        self.last_request.lock().ok().and_then(|r| r.clone())
    }
}

impl Drop for StubServer {
    fn drop(&mut self) {
        self.task.abort();
    }
}

async fn serve(
    mut socket: TcpStream,
    behavior: StubBehavior,
    last_request: Arc<Mutex<Option<String>>>,
) {
    let request = read_request(&mut socket).await;
    if let Ok(mut slot) = last_request.lock() {
        *slot = Some(request);
    }

    match behavior {
        StubBehavior::Respond { status, body } => {
            let response = format!(
                "HTTP/1.1 {} Stub\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status,
                body.len(),
                body
            );
            let _ = socket.write_all(response.as_bytes()).await;
            let _ = socket.shutdown().await;
        }
        StubBehavior::Hang => {
            tokio::time::sleep(Duration::from_secs(60)).await;
        }
    }
}

async fn read_request(socket: &mut TcpStream) -> String {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 4096];

    loop {
        if let Some(head_end) = find_head_end(&buf) {
            let head = String::from_utf8_lossy(&buf[..head_end]).to_lowercase();
            let body_len = head
                .lines()
                .find_map(|line| line.strip_prefix("content-length:"))
                .and_then(|value| value.trim().parse::<usize>().ok())
                .unwrap_or(0);
            if buf.len() >= head_end + 4 + body_len {
                break;
            }
        }
        match socket.read(&mut chunk).await {
            Ok(0) | Err(_) => break,
            Ok(n) => buf.extend_from_slice(&chunk[..n]),
        }
    }

    String::from_utf8_lossy(&buf).into_owned()
}

fn find_head_end(buf: &[u8]) -> Option<usize> {
    buf.windows(4).position(|window| window == b"\r\n\r\n")
}

/// An address on which nothing is listening.
pub fn closed_port_url() -> std::io::Result<String> {
    let listener = std::net::TcpListener::bind("127.0.0.1:0")?;
    let addr = listener.local_addr()?;
    drop(listener);
    Ok(format!("http://{}", addr))
}
