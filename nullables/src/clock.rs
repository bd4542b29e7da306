//! Nullable clock — deterministic time for testing.

use fairdraw_types::{Clock, ClockTime};
use std::cell::Cell;

/// A deterministic clock for testing.
///
/// Time only advances when you tell it to. Sessions take the clock by
/// reference (`Clock` is implemented for `&NullClock`), so a test can keep
/// driving the clock after handing it to a session.
pub struct NullClock {
    current: Cell<u32>,
}

impl NullClock {
    pub fn new(secs_of_day: u32) -> Self {
        Self {
            current: Cell::new(secs_of_day % 86_400),
        }
    }

    /// Advance time by a number of seconds, wrapping at midnight.
    pub fn advance(&self, secs: u32) {
        self.current.set((self.current.get() + secs) % 86_400);
    }

    /// Set the time to a specific second of the day.
    pub fn set(&self, secs_of_day: u32) {
        self.current.set(secs_of_day % 86_400);
    }
}

impl Clock for NullClock {
    fn now(&self) -> ClockTime {
        ClockTime::from_secs_of_day(self.current.get())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stays_put_until_advanced() {
        let clock = NullClock::new(100);
        assert_eq!(clock.now(), ClockTime::from_secs_of_day(100));
        assert_eq!(clock.now(), ClockTime::from_secs_of_day(100));
        clock.advance(50);
        assert_eq!(clock.now(), ClockTime::from_secs_of_day(150));
    }

    #[test]
    fn wraps_past_midnight() {
        let clock = NullClock::new(86_399);
        clock.advance(2);
        assert_eq!(clock.now(), ClockTime::from_secs_of_day(1));
    }
}
