//! courier-core
//!
//! Envelope and wire codec for the task requests an agent performs on
//! behalf of a remote server.
//!
//! # Modules
//! - **domain**: the request envelope (`Request`, `HeaderMap`, `TaskId`, errors)
//! - **codec**: the JSON wire codec (`RequestCodec`)
//! - **ports**: seams to the collaborators (`Clock`, `Normalizer`, `IdGenerator`, `Transport`)
//! - **impls**: in-memory implementations for tests and demos

pub mod codec;
pub mod domain;
pub mod impls;
pub mod ports;

pub use codec::RequestCodec;
pub use domain::{CodecError, HeaderMap, HeaderValue, Request, TaskId, TransportError, TryCount};
