//! Validation and pairing of raw open/close events.
//!
//! Days are walked in canonical order over a private, per-day working queue
//! (sorted ascending by second). Within a day, kinds must alternate
//! `open -> close -> open -> ...`. Two cross-day rules relax that:
//!
//! - A day ending with an unmatched `open` takes the first event of the
//!   following day, which must be a `close`. That event is removed from the
//!   following day's queue so it is not walked twice.
//! - A `close` with no open before it on its day (at the start, or right
//!   after another `close`) may be parked for the previous day when that day
//!   still ends with an unmatched `open`. In practice this only
//!   happens for Monday, whose previous day (Sunday) is walked last. A parked
//!   close can be claimed once; one left unclaimed after the walk is an error.
//!
//! The caller's [`DaySchedule`] is never modified.

use std::collections::VecDeque;

use crate::error::{OpeningHoursError, OpeningHoursResult};
use crate::models::{
    DaySchedule, EventKind, Interval, RawEvent, ResolvedSchedule, SecondOfDay, Weekday,
    DAYS_IN_WEEK,
};

type DayQueues = [VecDeque<RawEvent>; DAYS_IN_WEEK];

/// Pair every day's events into intervals.
///
/// # Errors
/// - [`OpeningHoursError::IncompleteWeek`] if the key set is not exactly the
///   seven lowercase weekday names (this includes an empty input).
/// - [`OpeningHoursError::InvalidSequence`] if some day's events cannot be
///   paired, reporting the day and the conflicting kinds.
pub fn resolve(input: &DaySchedule) -> OpeningHoursResult<ResolvedSchedule> {
    let queues = working_queues(input)?;
    Resolver::new(queues).run()
}

/// Copy and sort each day's events into its canonical slot.
fn working_queues(input: &DaySchedule) -> OpeningHoursResult<DayQueues> {
    // Keys are unique and parsing is exact, so seven parsed keys are seven
    // distinct weekdays.
    if input.len() != DAYS_IN_WEEK {
        return Err(OpeningHoursError::IncompleteWeek);
    }

    let mut queues: DayQueues = Default::default();
    for (name, events) in input.iter() {
        let day: Weekday = name
            .parse()
            .map_err(|_| OpeningHoursError::IncompleteWeek)?;

        let mut sorted = events.to_vec();
        sorted.sort_by_key(RawEvent::sort_key);
        queues[day.index()] = sorted.into();
    }

    Ok(queues)
}

struct Resolver {
    queues: DayQueues,
    /// Leading `close` of a day, parked for the previous day's pending open.
    parked: [Option<RawEvent>; DAYS_IN_WEEK],
    resolved: ResolvedSchedule,
}

impl Resolver {
    fn new(queues: DayQueues) -> Self {
        Self {
            queues,
            parked: [None; DAYS_IN_WEEK],
            resolved: ResolvedSchedule::new(),
        }
    }

    fn run(mut self) -> OpeningHoursResult<ResolvedSchedule> {
        for day in Weekday::ALL {
            self.resolve_day(day)?;
        }

        if let Some(day) = Weekday::ALL
            .into_iter()
            .find(|day| self.parked[day.index()].is_some())
        {
            return Err(OpeningHoursError::InvalidSequence {
                day,
                last: None,
                current: Some(EventKind::Close),
            });
        }

        Ok(self.resolved)
    }

    fn resolve_day(&mut self, day: Weekday) -> OpeningHoursResult<()> {
        let mut last: Option<RawEvent> = None;

        while let Some(event) = self.queues[day.index()].pop_front() {
            match (last, event.kind) {
                (None | Some(RawEvent { kind: EventKind::Close, .. }), EventKind::Close)
                    if self.can_park(day) =>
                {
                    self.parked[day.index()] = Some(event);
                    continue;
                }
                (Some(RawEvent { kind: EventKind::Open, value: open }), EventKind::Close) => {
                    self.resolved.push(day, Interval::new(open, event.value));
                }
                (None, EventKind::Open)
                | (Some(RawEvent { kind: EventKind::Close, .. }), EventKind::Open) => {}
                (last, current) => {
                    return Err(OpeningHoursError::InvalidSequence {
                        day,
                        last: last.map(|e| e.kind),
                        current: Some(current),
                    });
                }
            }
            last = Some(event);
        }

        if let Some(RawEvent { kind: EventKind::Open, value: open }) = last {
            let close = self.take_overnight_close(day)?;
            self.resolved.push(day, Interval::new(open, close));
        }

        Ok(())
    }

    /// A leading close of `day` may wait for the previous day when that day
    /// has not been walked yet and its latest event is an unmatched open.
    fn can_park(&self, day: Weekday) -> bool {
        self.parked[day.index()].is_none()
            && self.queues[day.pred().index()]
                .back()
                .is_some_and(|event| event.kind == EventKind::Open)
    }

    /// Find the close for `day`'s trailing open on the following day.
    fn take_overnight_close(&mut self, day: Weekday) -> OpeningHoursResult<SecondOfDay> {
        let next = day.succ().index();

        if let Some(parked) = self.parked[next].take() {
            return Ok(parked.value);
        }

        match self.queues[next].front().copied() {
            Some(RawEvent { kind: EventKind::Close, value }) => {
                self.queues[next].pop_front();
                Ok(value)
            }
            other => Err(OpeningHoursError::InvalidSequence {
                day,
                last: Some(EventKind::Open),
                current: other.map(|e| e.kind),
            }),
        }
    }
}
