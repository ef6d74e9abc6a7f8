//! Raw open/close events as supplied by callers.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::time::SecondOfDay;

/// Whether an event opens or closes the business.
///
/// `Open` orders before `Close`, which is the tie-break used when two events
/// of the same day share a second.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventKind {
    Open,
    Close,
}

impl EventKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            EventKind::Open => "open",
            EventKind::Close => "close",
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One instant at which the business opens or closes, relative to local
/// midnight of the day it is listed under.
///
/// Wire shape: `{"type": "open", "value": 36000}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RawEvent {
    #[serde(rename = "type")]
    pub kind: EventKind,
    pub value: SecondOfDay,
}

impl RawEvent {
    pub const fn new(kind: EventKind, value: SecondOfDay) -> Self {
        Self { kind, value }
    }

    pub const fn open(value: SecondOfDay) -> Self {
        Self::new(EventKind::Open, value)
    }

    pub const fn close(value: SecondOfDay) -> Self {
        Self::new(EventKind::Close, value)
    }

    /// Chronological sort key: by second, then `Open` before `Close`.
    pub fn sort_key(&self) -> (SecondOfDay, EventKind) {
        (self.value, self.kind)
    }
}
