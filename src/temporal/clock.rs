//! The current instant and the days around it, in UTC.

use crate::ext::datetime::DateTimeExt;
use chrono::{DateTime, TimeDelta, Utc};

/// Now.
pub fn current() -> DateTime<Utc> {
    Utc::now()
}

/// Midnight at the start of the current UTC day.
pub fn today() -> DateTime<Utc> {
    current().beginning_of_day()
}

pub fn yesterday() -> DateTime<Utc> {
    today() - TimeDelta::days(1)
}

pub fn tomorrow() -> DateTime<Utc> {
    today() + TimeDelta::days(1)
}
