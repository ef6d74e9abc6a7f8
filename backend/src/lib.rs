//! # Opening Hours Backend
//!
//! Turns a week of raw open/close events (seconds after local midnight) into
//! a validated, human-readable weekly schedule.
//!
//! ## Features
//!
//! - **Resolution**: Pair open/close events per day, including spans that
//!   close after midnight on the following day
//! - **Validation**: Reject incomplete weeks and broken open/close alternation
//!   with typed errors
//! - **Rendering**: 12-hour clock strings, `"Closed"` for empty days, Monday first
//! - **HTTP API**: Axum endpoints mirroring the original opening-hours service
//!
//! ## Architecture
//!
//! - [`models`]: Weekdays, events, intervals and schedule containers
//! - [`services`]: Resolver, formatter and the composed `humanize` pipeline
//! - [`api`]: Request/response DTOs with field-level validation
//! - [`config`]: Server configuration from TOML and environment
//! - [`http`]: Axum router and handlers (feature `http-server`)
//!
//! ## Example
//!
//! ```
//! use opening_hours::models::{DaySchedule, RawEvent, SecondOfDay, Weekday};
//!
//! let input = DaySchedule::closed_week().with_day(
//!     Weekday::Friday,
//!     vec![
//!         RawEvent::open(SecondOfDay::new(36_000)?),
//!         RawEvent::close(SecondOfDay::new(64_800)?),
//!     ],
//! );
//!
//! let rendered = opening_hours::humanize(&input)?;
//! assert_eq!(rendered.get(Weekday::Friday), Some("10:00:00 AM - 06:00:00 PM"));
//! assert_eq!(rendered.get(Weekday::Monday), Some("Closed"));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod services;

#[cfg(feature = "http-server")]
pub mod http;

pub use error::{OpeningHoursError, OpeningHoursResult};
pub use services::{format, humanize, resolve};
