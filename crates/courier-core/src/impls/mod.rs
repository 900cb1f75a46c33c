//! In-memory implementations of the ports, for tests and demos.

pub mod inmem_transport;

pub use self::inmem_transport::InMemoryTransport;
