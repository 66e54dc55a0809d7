//! Calendar durations made of years, months, weeks, days, hours, minutes and seconds.

use crate::constants::calendar::{DAYS_PER_WEEK, MONTHS_PER_YEAR};
use crate::error::{Error, Result};
use crate::temporal::clock;
use chrono::{DateTime, Datelike, Months, TimeDelta, Utc};
use log::debug;
use serde::{Deserialize, Serialize};
use std::ops::{Add, Neg, Sub};

/// A calendar offset.
///
/// Components are kept separately rather than folded into seconds, because a month or a year has
/// no fixed length. Applying a duration shifts the calendar months first (clamping the day of
/// month to the target month's length), then adds the remaining components as an exact offset.
///
/// # Examples
/// ```
/// use chrono::{TimeZone, Utc};
/// use garnish::temporal::Duration;
///
/// let jan_31 = Utc.with_ymd_and_hms(2025, 1, 31, 12, 0, 0).unwrap();
/// let later = Duration::months(1).with_days(1).advance_from(jan_31).unwrap();
/// assert_eq!(later, Utc.with_ymd_and_hms(2025, 3, 1, 12, 0, 0).unwrap());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Duration {
    pub years: i64,
    pub months: i64,
    pub weeks: i64,
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
}

impl Duration {
    pub fn years(n: i64) -> Self {
        Self::default().with_years(n)
    }

    pub fn months(n: i64) -> Self {
        Self::default().with_months(n)
    }

    pub fn weeks(n: i64) -> Self {
        Self::default().with_weeks(n)
    }

    pub fn days(n: i64) -> Self {
        Self::default().with_days(n)
    }

    pub fn hours(n: i64) -> Self {
        Self::default().with_hours(n)
    }

    pub fn minutes(n: i64) -> Self {
        Self::default().with_minutes(n)
    }

    pub fn seconds(n: i64) -> Self {
        Self::default().with_seconds(n)
    }

    pub fn with_years(mut self, n: i64) -> Self {
        self.years = n;
        self
    }

    pub fn with_months(mut self, n: i64) -> Self {
        self.months = n;
        self
    }

    pub fn with_weeks(mut self, n: i64) -> Self {
        self.weeks = n;
        self
    }

    pub fn with_days(mut self, n: i64) -> Self {
        self.days = n;
        self
    }

    pub fn with_hours(mut self, n: i64) -> Self {
        self.hours = n;
        self
    }

    pub fn with_minutes(mut self, n: i64) -> Self {
        self.minutes = n;
        self
    }

    pub fn with_seconds(mut self, n: i64) -> Self {
        self.seconds = n;
        self
    }

    pub fn is_zero(&self) -> bool {
        *self == Self::default()
    }

    fn zip_with(self, rhs: Self, f: impl Fn(i64, i64) -> Option<i64>) -> Option<Self> {
        Some(Duration {
            years: f(self.years, rhs.years)?,
            months: f(self.months, rhs.months)?,
            weeks: f(self.weeks, rhs.weeks)?,
            days: f(self.days, rhs.days)?,
            hours: f(self.hours, rhs.hours)?,
            minutes: f(self.minutes, rhs.minutes)?,
            seconds: f(self.seconds, rhs.seconds)?,
        })
    }

    /// Negates every component, `None` if one of them is `i64::MIN`.
    pub fn checked_neg(self) -> Option<Self> {
        Self::default().checked_sub(self)
    }

    /// Component-wise sum, `None` if any component overflows.
    pub fn checked_add(self, rhs: Self) -> Option<Self> {
        self.zip_with(rhs, i64::checked_add)
    }

    /// Component-wise difference, `None` if any component overflows.
    pub fn checked_sub(self, rhs: Self) -> Option<Self> {
        self.zip_with(rhs, i64::checked_sub)
    }

    /// Adds this duration to `t`.
    ///
    /// # Arguments
    /// * `t` - The instant to start from
    ///
    /// # Returns
    /// * `Result<DateTime<Utc>>` - The shifted instant, or `Error::DateOutOfRange` when a step
    ///   leaves chrono's representable range
    pub fn advance_from(&self, t: DateTime<Utc>) -> Result<DateTime<Utc>> {
        let out_of_range = || Error::DateOutOfRange(format!("{t} advanced by {self:?}"));

        let months = self
            .years
            .checked_mul(MONTHS_PER_YEAR)
            .and_then(|m| m.checked_add(self.months))
            .ok_or_else(out_of_range)?;
        let shifted = shift_months(t, months)?;

        let days = self
            .weeks
            .checked_mul(DAYS_PER_WEEK)
            .and_then(|d| d.checked_add(self.days))
            .ok_or_else(out_of_range)?;
        let offset = [
            TimeDelta::try_days(days),
            TimeDelta::try_hours(self.hours),
            TimeDelta::try_minutes(self.minutes),
            TimeDelta::try_seconds(self.seconds),
        ]
        .into_iter()
        .try_fold(TimeDelta::zero(), |acc, part| acc.checked_add(&part?))
        .ok_or_else(out_of_range)?;

        shifted.checked_add_signed(offset).ok_or_else(out_of_range)
    }

    pub fn since(&self, t: DateTime<Utc>) -> Result<DateTime<Utc>> {
        self.advance_from(t)
    }

    pub fn after(&self, t: DateTime<Utc>) -> Result<DateTime<Utc>> {
        self.advance_from(t)
    }

    /// Subtracts this duration from `t`.
    pub fn until(&self, t: DateTime<Utc>) -> Result<DateTime<Utc>> {
        self.checked_neg()
            .ok_or_else(|| Error::DateOutOfRange(format!("{t} moved back by {self:?}")))?
            .advance_from(t)
    }

    pub fn before(&self, t: DateTime<Utc>) -> Result<DateTime<Utc>> {
        self.until(t)
    }

    pub fn ago(&self) -> Result<DateTime<Utc>> {
        self.until(clock::current())
    }

    pub fn from_now(&self) -> Result<DateTime<Utc>> {
        self.since(clock::current())
    }
}

/// Moves `t` by whole calendar months, clamping the day of month.
pub(crate) fn shift_months(t: DateTime<Utc>, months: i64) -> Result<DateTime<Utc>> {
    if months == 0 {
        return Ok(t);
    }
    let out_of_range = || Error::DateOutOfRange(format!("{t} shifted by {months} months"));
    let count = Months::new(u32::try_from(months.unsigned_abs()).map_err(|_| out_of_range())?);
    let shifted = if months > 0 {
        t.checked_add_months(count)
    } else {
        t.checked_sub_months(count)
    }
    .ok_or_else(out_of_range)?;

    if shifted.day() != t.day() {
        debug!(
            "Clamped day {} to {} shifting {t} by {months} months",
            t.day(),
            shifted.day()
        );
    }
    Ok(shifted)
}

// The operators saturate each component at the `i64` bounds. Use `checked_*` to detect overflow.
impl Neg for Duration {
    type Output = Duration;

    fn neg(self) -> Duration {
        Duration::default() - self
    }
}

impl Add for Duration {
    type Output = Duration;

    fn add(self, rhs: Duration) -> Duration {
        self.zip_with(rhs, |a, b| Some(a.saturating_add(b)))
            .unwrap_or_default()
    }
}

impl Sub for Duration {
    type Output = Duration;

    fn sub(self, rhs: Duration) -> Duration {
        self.zip_with(rhs, |a, b| Some(a.saturating_sub(b)))
            .unwrap_or_default()
    }
}

/// Builds a [`Duration`] from an integer: `5.days()`, `1.year()`.
pub trait IntoDuration {
    fn seconds(self) -> Duration;
    fn minutes(self) -> Duration;
    fn hours(self) -> Duration;
    fn days(self) -> Duration;
    fn weeks(self) -> Duration;
    fn months(self) -> Duration;
    fn years(self) -> Duration;

    fn second(self) -> Duration
    where
        Self: Sized,
    {
        self.seconds()
    }

    fn minute(self) -> Duration
    where
        Self: Sized,
    {
        self.minutes()
    }

    fn hour(self) -> Duration
    where
        Self: Sized,
    {
        self.hours()
    }

    fn day(self) -> Duration
    where
        Self: Sized,
    {
        self.days()
    }

    fn week(self) -> Duration
    where
        Self: Sized,
    {
        self.weeks()
    }

    fn month(self) -> Duration
    where
        Self: Sized,
    {
        self.months()
    }

    fn year(self) -> Duration
    where
        Self: Sized,
    {
        self.years()
    }
}

macro_rules! impl_into_duration {
    ($($t:ty),*) => {$(
        impl IntoDuration for $t {
            fn seconds(self) -> Duration {
                Duration::seconds(self as i64)
            }

            fn minutes(self) -> Duration {
                Duration::minutes(self as i64)
            }

            fn hours(self) -> Duration {
                Duration::hours(self as i64)
            }

            fn days(self) -> Duration {
                Duration::days(self as i64)
            }

            fn weeks(self) -> Duration {
                Duration::weeks(self as i64)
            }

            fn months(self) -> Duration {
                Duration::months(self as i64)
            }

            fn years(self) -> Duration {
                Duration::years(self as i64)
            }
        }
    )*};
}

impl_into_duration!(i8, i16, i32, i64, isize, u8, u16, u32);
