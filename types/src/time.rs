//! Wall-clock commit timestamps and the clock seam.
//!
//! Commit records carry a UTC time of day rather than a full timestamp:
//! the seal only needs to show when, within the session, the vault hash
//! was fixed.

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use std::time::{SystemTime, UNIX_EPOCH};
use thiserror::Error;

/// A UTC time of day with second granularity, displayed as `HH:MM:SS`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ClockTime {
    secs_of_day: u32,
}

/// Why a `HH:MM:SS` string failed to parse.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ClockTimeParseError {
    #[error("expected HH:MM:SS, got {0:?}")]
    BadFormat(String),

    #[error("field out of range in {0:?}")]
    OutOfRange(String),
}

impl ClockTime {
    pub const MIDNIGHT: Self = Self { secs_of_day: 0 };

    /// Build from seconds since midnight; wraps at 24 hours.
    pub fn from_secs_of_day(secs: u32) -> Self {
        Self {
            secs_of_day: secs % 86_400,
        }
    }

    /// The current UTC time of day from the system clock.
    pub fn now() -> Self {
        let secs = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("system clock before Unix epoch")
            .as_secs();
        Self::from_secs_of_day((secs % 86_400) as u32)
    }

    pub fn as_secs_of_day(&self) -> u32 {
        self.secs_of_day
    }

    pub fn hours(&self) -> u32 {
        self.secs_of_day / 3600
    }

    pub fn minutes(&self) -> u32 {
        (self.secs_of_day % 3600) / 60
    }

    pub fn seconds(&self) -> u32 {
        self.secs_of_day % 60
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}:{:02}:{:02}",
            self.hours(),
            self.minutes(),
            self.seconds()
        )
    }
}

impl FromStr for ClockTime {
    type Err = ClockTimeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split(':');
        let (h, m, sec) = match (parts.next(), parts.next(), parts.next(), parts.next()) {
            (Some(h), Some(m), Some(sec), None) => (h, m, sec),
            _ => return Err(ClockTimeParseError::BadFormat(s.to_string())),
        };
        let parse = |field: &str| {
            if field.len() != 2 {
                return Err(ClockTimeParseError::BadFormat(s.to_string()));
            }
            field
                .parse::<u32>()
                .map_err(|_| ClockTimeParseError::BadFormat(s.to_string()))
        };
        let (h, m, sec) = (parse(h)?, parse(m)?, parse(sec)?);
        if h >= 24 || m >= 60 || sec >= 60 {
            return Err(ClockTimeParseError::OutOfRange(s.to_string()));
        }
        Ok(Self {
            secs_of_day: h * 3600 + m * 60 + sec,
        })
    }
}

impl Serialize for ClockTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for ClockTime {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct TimeVisitor;

        impl Visitor<'_> for TimeVisitor {
            type Value = ClockTime;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a HH:MM:SS time-of-day string")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<ClockTime, E> {
                v.parse().map_err(E::custom)
            }
        }

        deserializer.deserialize_str(TimeVisitor)
    }
}

/// Source of the current time of day.
///
/// Anything that seals commitments takes a clock through this trait so
/// tests can pin time to a known value.
pub trait Clock {
    fn now(&self) -> ClockTime;
}

/// The production clock, backed by the system time.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> ClockTime {
        ClockTime::now()
    }
}

// Shared clocks work too: tests hold on to a clock and advance it while a
// session owns a borrow of it.
impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> ClockTime {
        (**self).now()
    }
}
