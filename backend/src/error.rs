//! Errors raised while resolving a weekly schedule.

use crate::models::{EventKind, Weekday};

/// Result type for schedule resolution.
pub type OpeningHoursResult<T> = Result<T, OpeningHoursError>;

/// Failure modes of [`resolve`](crate::services::resolver::resolve).
///
/// Both variants describe client input problems; neither is retryable.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum OpeningHoursError {
    /// The input does not list exactly the seven canonical weekdays.
    #[error("opening hours must be provided for all days of the week")]
    IncompleteWeek,

    /// Open/close events cannot be paired, even after consulting the
    /// neighbouring days.
    ///
    /// `last` is the kind of the previous event on `day` (`None` at the
    /// start of the day). `current` is the offending event kind, or `None`
    /// when an `Open` was left without any following event to close it.
    #[error(
        "invalid opening hours on {day}: {} -> {}",
        kind_label(.last),
        kind_label(.current)
    )]
    InvalidSequence {
        day: Weekday,
        last: Option<EventKind>,
        current: Option<EventKind>,
    },
}

fn kind_label(kind: &Option<EventKind>) -> &'static str {
    kind.map_or("none", EventKind::as_str)
}
