use async_trait::async_trait;
use serde::Deserialize;
use std::sync::atomic::{AtomicU32, Ordering};
use tokio::time::{Duration, sleep};

use courier_core::codec::RequestCodec;
use courier_core::domain::{HeaderMap, HeaderValue, Request, TransportError};
use courier_core::ports::{IdGenerator, Identity, SystemClock, Transport, UlidGenerator};

#[derive(Debug, Deserialize)]
struct PingPayload {
    echo: String,
}

/// Pretend server endpoint: refuses the first `n` attempts, then accepts.
struct FlakyEndpoint {
    remaining_failures: AtomicU32,
}

impl FlakyEndpoint {
    fn new(n: u32) -> Self {
        Self {
            remaining_failures: AtomicU32::new(n),
        }
    }
}

#[async_trait]
impl Transport for FlakyEndpoint {
    async fn send(&self, request: &Request) -> Result<(), TransportError> {
        let left = self.remaining_failures.load(Ordering::Relaxed);
        if left > 0 {
            self.remaining_failures.fetch_sub(1, Ordering::Relaxed);
            return Err(TransportError::Connection(format!(
                "connection refused (left={left})"
            )));
        }

        let payload: PingPayload = serde_json::from_str(request.body())
            .map_err(|e| TransportError::Rejected(format!("bad payload: {e}")))?;
        println!("{} {} -> 200 (echo={})", request.method(), request.url(), payload.echo);
        Ok(())
    }
}

/// The transport-retry collaborator: sends, bumps the shared counter on each
/// failure, gives up after `max_attempts`.
async fn deliver(
    transport: &dyn Transport,
    request: &Request,
    max_attempts: u32,
) -> Result<(), TransportError> {
    loop {
        match transport.send(request).await {
            Ok(()) => return Ok(()),
            Err(err) => {
                request.increment_try_count();
                println!("attempt {} failed: {err}", request.try_count());
                if request.try_count() >= max_attempts {
                    return Err(err);
                }
                sleep(Duration::from_millis(50)).await;
            }
        }
    }
}

#[tokio::main]
async fn main() {
    // (A) A task produced an outbound call.
    let ids = UlidGenerator::new(SystemClock);
    let mut header = HeaderMap::new();
    header.insert("Accept".to_string(), HeaderValue::single("application/json"));
    header.insert("X-Trace".to_string(), HeaderValue::list(["t1", "t2"]));
    let body = serde_json::json!({ "echo": "courier" }).to_string();
    let request = Request::new(
        ids.next_task_id(),
        "https://server.example/api/v1/ping",
        "POST",
        header,
        body,
    );

    // (B) Wire round-trip, as the mailbox would see it.
    let codec = RequestCodec::new(Identity);
    let bytes = codec.encode(&request).expect("encode");
    println!("wire: {}", String::from_utf8_lossy(&bytes));

    let request = codec.decode(&bytes).expect("decode");
    println!("decoded: {request:?}");

    // (C) Deliver with two forced failures to show the shared counter.
    let endpoint = FlakyEndpoint::new(2);
    match deliver(&endpoint, &request, 5).await {
        Ok(()) => println!("delivered after {} failed attempts", request.try_count()),
        Err(err) => println!("gave up after {} attempts: {err}", request.try_count()),
    }
}
