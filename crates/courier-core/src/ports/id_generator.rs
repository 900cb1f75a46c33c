//! IdGenerator port - fresh task identifiers.

use ulid::Ulid;

use super::Clock;
use crate::domain::TaskId;

/// Mints identifiers for freshly issued requests.
///
/// Normally the server assigns task ids; local issuers (demos, tests) use
/// this to get ids that are unique without coordination.
pub trait IdGenerator: Send + Sync {
    fn next_task_id(&self) -> TaskId;
}

/// ULID-based generator: timestamp part from the injected clock, rest random.
///
/// With a `FixedClock` the timestamp part is deterministic, which keeps
/// generated ids sortable by construction time in tests too.
pub struct UlidGenerator<C> {
    clock: C,
}

impl<C: Clock> UlidGenerator<C> {
    pub fn new(clock: C) -> Self {
        Self { clock }
    }
}

impl<C: Clock> IdGenerator for UlidGenerator<C> {
    fn next_task_id(&self) -> TaskId {
        let timestamp_ms = self.clock.now().timestamp_millis() as u64;
        let ulid = Ulid::from_parts(timestamp_ms, rand::random());
        TaskId::new(ulid.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::{FixedClock, SystemClock};
    use chrono::{TimeZone, Utc};

    #[test]
    fn generated_ids_are_unique() {
        let ids = UlidGenerator::new(SystemClock);

        let a = ids.next_task_id();
        let b = ids.next_task_id();
        let c = ids.next_task_id();

        assert_ne!(a, b);
        assert_ne!(b, c);
        assert_ne!(a, c);
    }

    #[test]
    fn fixed_clock_pins_the_timestamp_part() {
        let at = Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap();
        let ids = UlidGenerator::new(FixedClock::new(at));

        let a = ids.next_task_id();
        let b = ids.next_task_id();

        // Random part still differs.
        assert_ne!(a, b);

        let ts_a = Ulid::from_string(a.as_str()).unwrap().timestamp_ms();
        let ts_b = Ulid::from_string(b.as_str()).unwrap().timestamp_ms();
        assert_eq!(ts_a, at.timestamp_millis() as u64);
        assert_eq!(ts_b, at.timestamp_millis() as u64);
    }
}
