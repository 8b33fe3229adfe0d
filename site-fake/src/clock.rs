//! Wall-clock access
//!
//! Handlers never call `Utc::now()` directly; they read the [`Clock`] held
//! in app state so tests can drive the elapsed-time gate without sleeping.

use chrono::{DateTime, Utc};

/// Source of the current wall-clock time.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Production clock backed by system time.
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

#[cfg(test)]
pub mod test {
    use std::sync::RwLock;

    use chrono::{DateTime, Duration, Utc};

    use super::Clock;

    /// Manually advanced clock for tests.
    pub struct ManualClock {
        now: RwLock<DateTime<Utc>>,
    }

    impl ManualClock {
        pub fn new(start: DateTime<Utc>) -> Self {
            Self {
                now: RwLock::new(start),
            }
        }

        pub fn advance(&self, by: Duration) {
            let mut now = self.now.write().unwrap();
            *now = *now + by;
        }
    }

    impl Clock for ManualClock {
        fn now(&self) -> DateTime<Utc> {
            *self.now.read().unwrap()
        }
    }
}
