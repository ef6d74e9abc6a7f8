pub mod event;
pub mod schedule;
pub mod time;
pub mod weekday;

pub use event::*;
pub use schedule::*;
pub use time::*;
pub use weekday::*;
