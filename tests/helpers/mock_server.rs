use std::sync::Arc;
use std::time::Duration;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::sync::Mutex;

/// Canned answer returned for every request.
#[derive(Debug, Clone)]
pub struct MockResponse {
    pub status: u16,
    pub body: String,
    pub delay: Duration,
}

impl MockResponse {
    pub fn json(status: u16, body: &str) -> Self {
        Self {
            status,
            body: body.to_string(),
            delay: Duration::ZERO,
        }
    }

    #[allow(dead_code)]
    pub fn delayed(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }
}

/// Request heads received by the server, in arrival order.
pub type RequestLog = Arc<Mutex<Vec<String>>>;

/// A minimal HTTP/1.1 server that answers every connection with one canned response.
pub struct MockHttpServer {
    listener: TcpListener,
    port: u16,
}

impl MockHttpServer {
    /// Create a new mock server bound to a random port.
    pub async fn new() -> std::io::Result<Self> {
        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let port = listener.local_addr()?.port();
        Ok(Self { listener, port })
    }

    /// Get the base URL for this server.
    pub fn url(&self) -> String {
        format!("http://127.0.0.1:{}", self.port)
    }

    /// Start serving in a background task.
    pub fn serve(self, response: MockResponse) -> RequestLog {
        let log: RequestLog = Arc::new(Mutex::new(Vec::new()));
        let task_log = Arc::clone(&log);

        tokio::spawn(async move {
            loop {
                match self.listener.accept().await {
                    Ok((stream, _)) => {
                        let response = response.clone();
                        let log = Arc::clone(&task_log);
                        tokio::spawn(handle_connection(stream, response, log));
                    }
                    Err(e) => {
                        tracing::error!("Accept error: {}", e);
                        break;
                    }
                }
            }
        });

        log
    }
}

/// A base URL whose port refuses connections.
#[allow(dead_code)]
pub async fn closed_port_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    format!("http://127.0.0.1:{}", port)
}

async fn handle_connection(mut stream: TcpStream, response: MockResponse, log: RequestLog) {
    let mut buffer = Vec::new();
    let mut chunk = [0u8; 1024];

    // Read until the end of the request head; GET requests carry no body.
    loop {
        match stream.read(&mut chunk).await {
            Ok(0) => return,
            Ok(n) => {
                buffer.extend_from_slice(&chunk[..n]);
                if buffer.windows(4).any(|w| w == b"\r\n\r\n") {
                    break;
                }
            }
            Err(_) => return,
        }
    }

    log.lock()
        .await
        .push(String::from_utf8_lossy(&buffer).into_owned());

    if !response.delay.is_zero() {
        tokio::time::sleep(response.delay).await;
    }

    let reason = if response.status == 200 { "OK" } else { "Mock" };
    let raw = format!(
        "HTTP/1.1 {} {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        response.status,
        reason,
        response.body.len(),
        response.body
    );

    let _ = stream.write_all(raw.as_bytes()).await;
    let _ = stream.shutdown().await;
}
