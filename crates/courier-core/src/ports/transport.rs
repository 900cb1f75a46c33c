//! Transport port - seam to the HTTP collaborator.

use async_trait::async_trait;

use crate::domain::{Request, TransportError};

/// Performs one delivery attempt of a request.
///
/// Retry policy lives with the caller: on failure the caller bumps the
/// request's try count and decides whether to send again. Implementations
/// must not mutate the request.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, request: &Request) -> Result<(), TransportError>;
}
