//! Calendar durations, date ranges and the UTC clock.
//!
//! Everything here works on `chrono::DateTime<Utc>`; there is no time zone database.

pub mod clock;
pub mod duration;
pub mod range;

pub use duration::{Duration, IntoDuration};
pub use range::{DateRange, DateSteps};
