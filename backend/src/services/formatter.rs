//! Rendering of resolved intervals into display strings.

use crate::models::{Interval, RenderedSchedule, ResolvedSchedule, CLOSED, LIST_SEPARATOR};

/// Render every day of `schedule`.
///
/// Days without intervals become `"Closed"`; otherwise each interval is
/// rendered as `"<open> - <close>"` and joined with `", "` in chronological
/// order. The result always holds all seven days in canonical order.
pub fn format(schedule: &ResolvedSchedule) -> RenderedSchedule {
    schedule
        .iter()
        .map(|(day, intervals)| (day, render_day(intervals)))
        .collect()
}

fn render_day(intervals: &[Interval]) -> String {
    if intervals.is_empty() {
        return CLOSED.to_string();
    }

    intervals
        .iter()
        .map(Interval::to_string)
        .collect::<Vec<_>>()
        .join(LIST_SEPARATOR)
}
