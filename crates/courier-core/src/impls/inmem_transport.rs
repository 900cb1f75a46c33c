//! In-memory transport for tests and demos.

use async_trait::async_trait;
use std::sync::atomic::{AtomicU32, Ordering};
use tokio::sync::Mutex;

use crate::domain::{Request, TransportError};
use crate::ports::Transport;

/// Transport that never leaves the process.
///
/// Fails the first `n` sends with a connection error, then accepts
/// everything, recording the url of each delivered request.
pub struct InMemoryTransport {
    remaining_failures: AtomicU32,
    delivered: Mutex<Vec<String>>,
}

impl InMemoryTransport {
    pub fn new() -> Self {
        Self::failing_first(0)
    }

    pub fn failing_first(n: u32) -> Self {
        Self {
            remaining_failures: AtomicU32::new(n),
            delivered: Mutex::new(Vec::new()),
        }
    }

    /// Urls of every request that made it through, in delivery order.
    pub async fn delivered(&self) -> Vec<String> {
        self.delivered.lock().await.clone()
    }
}

impl Default for InMemoryTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Transport for InMemoryTransport {
    async fn send(&self, request: &Request) -> Result<(), TransportError> {
        let left = self.remaining_failures.load(Ordering::Relaxed);
        if left > 0 {
            self.remaining_failures.fetch_sub(1, Ordering::Relaxed);
            return Err(TransportError::Connection(format!(
                "connection refused (failures left={left})"
            )));
        }

        self.delivered.lock().await.push(request.url().to_string());
        Ok(())
    }
}
