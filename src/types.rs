//! Common types used across the garnish crate.

use crate::constants::calendar::{DAYS_PER_WEEK, MONTHS_PER_QUARTER, MONTHS_PER_YEAR};
use std::fmt::Display;

/// Calendar unit a `DateRange` steps by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Granularity {
    Day,
    Week,
    Month,
    Quarter,
    Year,
}

/// One step of a granularity expressed as a month count plus a day count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Unit {
    pub months: i64,
    pub days: i64,
}

impl Granularity {
    /// Calendar-aware size of a single step.
    pub(crate) fn unit(self) -> Unit {
        match self {
            Granularity::Day => Unit { months: 0, days: 1 },
            Granularity::Week => Unit {
                months: 0,
                days: DAYS_PER_WEEK,
            },
            Granularity::Month => Unit { months: 1, days: 0 },
            Granularity::Quarter => Unit {
                months: MONTHS_PER_QUARTER,
                days: 0,
            },
            Granularity::Year => Unit {
                months: MONTHS_PER_YEAR,
                days: 0,
            },
        }
    }
}

impl Display for Granularity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Granularity::Day => "day",
            Granularity::Week => "week",
            Granularity::Month => "month",
            Granularity::Quarter => "quarter",
            Granularity::Year => "year",
        };
        write!(f, "{s}")
    }
}
