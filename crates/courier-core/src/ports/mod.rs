//! Ports - seams to the collaborators around the envelope.
//!
//! Each trait hides one external concern: where time comes from, what the
//! normalization hook does, who mints task ids, and who carries the request
//! over the network.

pub mod clock;
pub mod id_generator;
pub mod normalizer;
pub mod transport;

pub use self::clock::{Clock, FixedClock, SystemClock};
pub use self::id_generator::{IdGenerator, UlidGenerator};
pub use self::normalizer::{Identity, Normalizer};
pub use self::transport::Transport;
