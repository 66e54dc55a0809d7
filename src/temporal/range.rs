//! Inclusive ranges of instants and calendar-aware iteration over them.

use crate::error::{Error, Result};
use crate::temporal::duration::shift_months;
use crate::types::Granularity;
use chrono::{DateTime, TimeDelta, Utc};
use log::trace;
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::iter::FusedIterator;

/// A pair of instants, inclusive on both ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DateRange {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl DateRange {
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self { start, end }
    }

    /// `start <= t <= end`.
    pub fn includes(&self, t: DateTime<Utc>) -> bool {
        self.start <= t && t <= self.end
    }

    pub fn each_day(&self, step: u32) -> Result<DateSteps> {
        self.step_by(Granularity::Day, step)
    }

    pub fn each_week(&self, step: u32) -> Result<DateSteps> {
        self.step_by(Granularity::Week, step)
    }

    pub fn each_month(&self, step: u32) -> Result<DateSteps> {
        self.step_by(Granularity::Month, step)
    }

    pub fn each_quarter(&self, step: u32) -> Result<DateSteps> {
        self.step_by(Granularity::Quarter, step)
    }

    pub fn each_year(&self, step: u32) -> Result<DateSteps> {
        self.step_by(Granularity::Year, step)
    }

    /// Lazily walks the range `step` units at a time.
    ///
    /// The k-th value is `start + k * step` units, always computed from `start`, so stepping by
    /// months keeps the starting day of month wherever the target month allows it.
    ///
    /// # Arguments
    /// * `granularity` - The calendar unit to step by
    /// * `step` - How many units lie between two yielded values
    ///
    /// # Returns
    /// * `Result<DateSteps>` - The iterator, or `Error::InvalidArgument` when `step` is zero
    pub fn step_by(&self, granularity: Granularity, step: u32) -> Result<DateSteps> {
        if step == 0 {
            return Err(Error::InvalidArgument(format!(
                "{granularity} step must be positive"
            )));
        }
        Ok(DateSteps {
            origin: self.start,
            end: self.end,
            granularity,
            step,
            index: 0,
            done: false,
        })
    }

    /// Every day of the range, starting at `start`.
    pub fn iter(&self) -> DateSteps {
        DateSteps {
            origin: self.start,
            end: self.end,
            granularity: Granularity::Day,
            step: 1,
            index: 0,
            done: false,
        }
    }
}

impl Display for DateRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}..={}", self.start, self.end)
    }
}

impl IntoIterator for DateRange {
    type Item = DateTime<Utc>;
    type IntoIter = DateSteps;

    fn into_iter(self) -> DateSteps {
        self.iter()
    }
}

impl IntoIterator for &DateRange {
    type Item = DateTime<Utc>;
    type IntoIter = DateSteps;

    fn into_iter(self) -> DateSteps {
        self.iter()
    }
}

/// Iterator returned by [`DateRange::step_by`] and friends.
///
/// Stops at the first value past the end of the range, or when the next value would leave
/// chrono's representable range.
#[derive(Debug, Clone)]
pub struct DateSteps {
    origin: DateTime<Utc>,
    end: DateTime<Utc>,
    granularity: Granularity,
    step: u32,
    index: i64,
    done: bool,
}

impl DateSteps {
    fn value_at(&self, index: i64) -> Option<DateTime<Utc>> {
        let unit = self.granularity.unit();
        let units = index.checked_mul(i64::from(self.step))?;
        let shifted = shift_months(self.origin, unit.months.checked_mul(units)?).ok()?;
        shifted.checked_add_signed(TimeDelta::try_days(unit.days.checked_mul(units)?)?)
    }
}

impl Iterator for DateSteps {
    type Item = DateTime<Utc>;

    fn next(&mut self) -> Option<DateTime<Utc>> {
        if self.done {
            return None;
        }
        match self.value_at(self.index) {
            Some(value) if value <= self.end => {
                trace!("{} #{} of {}: {value}", self.granularity, self.index, self.origin);
                self.index += 1;
                Some(value)
            }
            _ => {
                self.done = true;
                None
            }
        }
    }
}

impl FusedIterator for DateSteps {}
