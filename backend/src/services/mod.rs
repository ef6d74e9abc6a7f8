//! Schedule resolution and rendering.
//!
//! Data flows one way: raw events → [`resolver`] → resolved intervals →
//! [`formatter`] → display strings. [`opening_hours::humanize`] chains the two.

pub mod formatter;
pub mod opening_hours;
pub mod resolver;

pub use formatter::format;
pub use opening_hours::humanize;
pub use resolver::resolve;
