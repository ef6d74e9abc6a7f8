//! End-to-end humanization of a weekly schedule.

use super::formatter::format;
use super::resolver::resolve;
use crate::error::OpeningHoursResult;
use crate::models::{DaySchedule, RenderedSchedule};

/// Resolve `input` and render it in one step.
///
/// Fails atomically with the resolver's error; nothing is rendered for a
/// schedule that does not fully resolve.
pub fn humanize(input: &DaySchedule) -> OpeningHoursResult<RenderedSchedule> {
    let resolved = resolve(input)?;
    Ok(format(&resolved))
}
