//! Weekly schedule containers: raw input, resolved intervals and rendered text.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use super::event::RawEvent;
use super::time::SecondOfDay;
use super::weekday::{Weekday, DAYS_IN_WEEK};

/// Display string for a day without any interval.
pub const CLOSED: &str = "Closed";
/// Separator between the two ends of an interval.
pub const INTERVAL_SEPARATOR: &str = " - ";
/// Separator between intervals of the same day.
pub const LIST_SEPARATOR: &str = ", ";

/// Raw per-day event lists, keyed by day name exactly as the caller sent it.
///
/// Keys are kept as strings so that missing, extra or misspelled days can be
/// reported by the resolver instead of being lost during deserialization.
/// Event order within a day is whatever the caller supplied.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DaySchedule(BTreeMap<String, Vec<RawEvent>>);

impl DaySchedule {
    pub fn new() -> Self {
        Self::default()
    }

    /// A schedule listing every weekday with no events.
    pub fn closed_week() -> Self {
        Weekday::ALL
            .into_iter()
            .map(|day| (day.as_str().to_string(), Vec::new()))
            .collect()
    }

    /// Replace the events listed under `day`.
    pub fn insert(&mut self, day: impl Into<String>, events: Vec<RawEvent>) -> &mut Self {
        self.0.insert(day.into(), events);
        self
    }

    /// Builder-style variant of [`insert`](Self::insert) for a canonical day.
    pub fn with_day(mut self, day: Weekday, events: Vec<RawEvent>) -> Self {
        self.insert(day.as_str(), events);
        self
    }

    pub fn remove(&mut self, day: &str) -> Option<Vec<RawEvent>> {
        self.0.remove(day)
    }

    pub fn get(&self, day: &str) -> Option<&[RawEvent]> {
        self.0.get(day).map(Vec::as_slice)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[RawEvent])> {
        self.0.iter().map(|(day, events)| (day.as_str(), events.as_slice()))
    }
}

impl FromIterator<(String, Vec<RawEvent>)> for DaySchedule {
    fn from_iter<I: IntoIterator<Item = (String, Vec<RawEvent>)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// One contiguous open period attributed to a single day.
///
/// `close` is a second of the day it actually falls on; for overnight spans
/// it belongs to the next day's early morning and is therefore not greater
/// than `open`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Interval {
    pub open: SecondOfDay,
    pub close: SecondOfDay,
}

impl Interval {
    pub const fn new(open: SecondOfDay, close: SecondOfDay) -> Self {
        Self { open, close }
    }

    /// True when the close instant lies on the following calendar day.
    pub fn crosses_midnight(&self) -> bool {
        self.close < self.open
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.open, INTERVAL_SEPARATOR, self.close)
    }
}

/// Resolved intervals for all seven days, indexed by canonical weekday.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolvedSchedule {
    days: [Vec<Interval>; DAYS_IN_WEEK],
}

impl ResolvedSchedule {
    pub fn new() -> Self {
        Self::default()
    }

    /// Intervals of `day`, in chronological order.
    pub fn get(&self, day: Weekday) -> &[Interval] {
        &self.days[day.index()]
    }

    pub fn push(&mut self, day: Weekday, interval: Interval) {
        self.days[day.index()].push(interval);
    }

    pub fn is_closed(&self, day: Weekday) -> bool {
        self.get(day).is_empty()
    }

    /// Days in canonical order with their intervals.
    pub fn iter(&self) -> impl Iterator<Item = (Weekday, &[Interval])> {
        Weekday::ALL
            .into_iter()
            .map(move |day| (day, self.get(day)))
    }

    /// Total number of intervals across the week.
    pub fn interval_count(&self) -> usize {
        self.days.iter().map(Vec::len).sum()
    }
}

/// Display string per weekday. Iteration and serialization follow the
/// canonical Monday → Sunday order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RenderedSchedule(BTreeMap<Weekday, String>);

impl RenderedSchedule {
    pub fn get(&self, day: Weekday) -> Option<&str> {
        self.0.get(&day).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Weekday, &str)> {
        self.0.iter().map(|(day, text)| (*day, text.as_str()))
    }
}

impl FromIterator<(Weekday, String)> for RenderedSchedule {
    fn from_iter<I: IntoIterator<Item = (Weekday, String)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
