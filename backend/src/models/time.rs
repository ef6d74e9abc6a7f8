use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Smallest accepted second of the day (local midnight).
pub const MIN_SECONDS_VALUE: u32 = 0;
/// Largest accepted second of the day (23:59:59).
pub const MAX_SECONDS_VALUE: u32 = 86_399;

/// `strftime` pattern used for every rendered clock instant.
pub const CLOCK_FORMAT: &str = "%I:%M:%S %p";

/// Seconds elapsed since local midnight, guaranteed to lie in
/// `[MIN_SECONDS_VALUE, MAX_SECONDS_VALUE]`.
///
/// Deserialization goes through [`TryFrom<i64>`], so out-of-range wire values
/// are rejected before any schedule logic runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u32")]
pub struct SecondOfDay(u32);

/// A raw value that does not fit in a single day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("{0} is not between {min} and {max}", min = MIN_SECONDS_VALUE, max = MAX_SECONDS_VALUE)]
pub struct SecondOutOfRange(pub i64);

impl SecondOfDay {
    /// Validate and wrap a second-of-day value.
    pub fn new(value: u32) -> Result<Self, SecondOutOfRange> {
        if value > MAX_SECONDS_VALUE {
            return Err(SecondOutOfRange(i64::from(value)));
        }
        Ok(Self(value))
    }

    /// Raw seconds after midnight.
    pub const fn value(self) -> u32 {
        self.0
    }

    /// Wall-clock time for this instant.
    pub fn to_naive_time(self) -> NaiveTime {
        // Always `Some`: the range invariant keeps the value below 86400.
        NaiveTime::from_num_seconds_from_midnight_opt(self.0, 0).unwrap_or_default()
    }
}

impl TryFrom<i64> for SecondOfDay {
    type Error = SecondOutOfRange;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        u32::try_from(value)
            .ok()
            .filter(|v| *v <= MAX_SECONDS_VALUE)
            .map(SecondOfDay)
            .ok_or(SecondOutOfRange(value))
    }
}

impl From<SecondOfDay> for u32 {
    fn from(second: SecondOfDay) -> Self {
        second.0
    }
}

impl fmt::Display for SecondOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_clock(*self))
    }
}

/// Render a second of the day as a 12-hour clock string, e.g. `"06:00:00 PM"`.
///
/// Hours, minutes and seconds are zero-padded. Midnight renders as
/// `"12:00:00 AM"` and noon as `"12:00:00 PM"`.
pub fn format_clock(second: SecondOfDay) -> String {
    second.to_naive_time().format(CLOCK_FORMAT).to_string()
}
