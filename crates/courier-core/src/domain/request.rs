//! The task-request envelope.

use chrono::{DateTime, Utc};
use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicU32, Ordering};

use super::{HeaderMap, TaskId};

/// Shared attempt counter.
///
/// Cloning hands out another handle to the same underlying counter, so the
/// transport retry loop and the original issuer observe the same count.
/// Handle identity, not request value equality, governs sharing.
#[derive(Debug, Clone, Default)]
pub struct TryCount(Arc<AtomicU32>);

impl TryCount {
    fn new() -> Self {
        Self::default()
    }

    pub fn get(&self) -> u32 {
        self.0.load(Ordering::Relaxed)
    }

    /// Monotonic bump. Single writer (the retry collaborator); readers
    /// tolerate momentarily stale values, so Relaxed suffices.
    pub fn increment(&self) {
        self.0.fetch_add(1, Ordering::Relaxed);
    }
}

/// One outbound HTTP call the agent performs on behalf of a task.
///
/// Everything except the attempt counter is immutable after construction.
/// `try_count` and `start_time` are runtime bookkeeping only: the codec
/// never puts them on the wire, and a decoded request gets fresh ones.
#[derive(Clone)]
pub struct Request {
    task_id: TaskId,
    url: String,
    method: String,
    header: HeaderMap,
    body: String,
    try_count: TryCount,
    start_time: DateTime<Utc>,
}

impl Request {
    /// Convenience constructor: zero attempts, `start_time` = now.
    ///
    /// Inputs are taken as given; callers own well-formedness.
    pub fn new(
        task_id: TaskId,
        url: impl Into<String>,
        method: impl Into<String>,
        header: HeaderMap,
        body: impl Into<String>,
    ) -> Self {
        Self::new_at(task_id, url, method, header, body, Utc::now())
    }

    /// Same as [`Request::new`] with an explicit timestamp, so the decoder
    /// can stamp requests from an injected clock.
    pub fn new_at(
        task_id: TaskId,
        url: impl Into<String>,
        method: impl Into<String>,
        header: HeaderMap,
        body: impl Into<String>,
        start_time: DateTime<Utc>,
    ) -> Self {
        Self {
            task_id,
            url: url.into(),
            method: method.into(),
            header,
            body: body.into(),
            try_count: TryCount::new(),
            start_time,
        }
    }

    pub fn task_id(&self) -> &TaskId {
        &self.task_id
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn method(&self) -> &str {
        &self.method
    }

    pub fn header(&self) -> &HeaderMap {
        &self.header
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn start_time(&self) -> DateTime<Utc> {
        self.start_time
    }

    pub fn try_count(&self) -> u32 {
        self.try_count.get()
    }

    /// Called by the retry collaborator after a failed delivery attempt.
    pub fn increment_try_count(&self) {
        self.try_count.increment();
    }
}

impl fmt::Debug for Request {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Request")
            .field("task_id", &self.task_id)
            .field("url", &self.url)
            .field("method", &self.method)
            .field("header", &self.header)
            .field("body", &self.body)
            .field("try_count", &self.try_count.get())
            .field("start_time", &self.start_time)
            .finish()
    }
}
