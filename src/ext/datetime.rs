//! Calendar boundaries, relative-day predicates and field replacement for UTC instants.

use crate::config::WeekStart;
use crate::constants::calendar::{DAYS_PER_WEEK, LAST_NANOSECOND, MONTHS_PER_QUARTER};
use crate::error::{Error, Result};
use crate::temporal::{clock, DateRange, Duration};
use chrono::{DateTime, Datelike, NaiveDate, NaiveTime, TimeDelta, Timelike, Utc};
use serde::{Deserialize, Serialize};

const END_OF_DAY: NaiveTime =
    match NaiveTime::from_hms_nano_opt(23, 59, 59, LAST_NANOSECOND) {
        Some(time) => time,
        None => NaiveTime::MIN,
    };

fn start_of(date: NaiveDate) -> DateTime<Utc> {
    date.and_time(NaiveTime::MIN).and_utc()
}

fn end_of(date: NaiveDate) -> DateTime<Utc> {
    date.and_time(END_OF_DAY).and_utc()
}

/// Moves `date` by whole days, saturating at chrono's first and last dates.
fn shift(date: NaiveDate, days: i64) -> NaiveDate {
    TimeDelta::try_days(days)
        .and_then(|delta| date.checked_add_signed(delta))
        .unwrap_or(if days < 0 {
            NaiveDate::MIN
        } else {
            NaiveDate::MAX
        })
}

/// Builds a date from fields taken from an existing date, which are always valid.
fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or(NaiveDate::MIN)
}

fn month_length(year: i32, month: u32) -> u32 {
    match month {
        4 | 6 | 9 | 11 => 30,
        2 if NaiveDate::from_ymd_opt(year, 2, 29).is_some() => 29,
        2 => 28,
        _ => 31,
    }
}

fn quarter_months(month: u32) -> (u32, u32) {
    let span = MONTHS_PER_QUARTER as u32;
    let first = (month - 1) / span * span + 1;
    (first, first + span - 1)
}

/// Fields to replace in [`DateTimeExt::change`]. `None` keeps the current value.
///
/// Time fields reset the smaller ones: setting only `hour` zeroes the minute, second and
/// nanosecond, setting `minute` zeroes the second and nanosecond.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Change {
    pub year: Option<i32>,
    /// 1 to 12.
    pub month: Option<u32>,
    pub day: Option<u32>,
    pub hour: Option<u32>,
    pub minute: Option<u32>,
    pub second: Option<u32>,
    pub nanosecond: Option<u32>,
}

/// Extension trait for `DateTime<Utc>`.
///
/// `end_of_*` values are the last nanosecond of the period, so `all_*` ranges are inclusive and
/// never overlap the next period.
pub trait DateTimeExt {
    fn beginning_of_day(&self) -> DateTime<Utc>;
    fn end_of_day(&self) -> DateTime<Utc>;
    /// Monday-based week start.
    fn beginning_of_week(&self) -> DateTime<Utc>;
    fn beginning_of_week_with(&self, week_start: WeekStart) -> DateTime<Utc>;
    fn end_of_week(&self) -> DateTime<Utc>;
    fn end_of_week_with(&self, week_start: WeekStart) -> DateTime<Utc>;
    fn beginning_of_month(&self) -> DateTime<Utc>;
    fn end_of_month(&self) -> DateTime<Utc>;
    fn beginning_of_quarter(&self) -> DateTime<Utc>;
    fn end_of_quarter(&self) -> DateTime<Utc>;
    fn beginning_of_year(&self) -> DateTime<Utc>;
    fn end_of_year(&self) -> DateTime<Utc>;

    fn all_day(&self) -> DateRange;
    fn all_week(&self) -> DateRange;
    fn all_week_with(&self, week_start: WeekStart) -> DateRange;
    fn all_month(&self) -> DateRange;
    fn all_quarter(&self) -> DateRange;
    fn all_year(&self) -> DateRange;

    /// Falls on the UTC day before today.
    fn is_yesterday(&self) -> bool;
    fn is_today(&self) -> bool;
    fn is_tomorrow(&self) -> bool;
    /// Start of the previous day.
    fn yesterday(&self) -> DateTime<Utc>;
    /// Start of the next day.
    fn tomorrow(&self) -> DateTime<Utc>;
    fn days_in_month(&self) -> u32;

    /// Shorthand for `duration.advance_from(self)`.
    fn advance(&self, duration: &Duration) -> Result<DateTime<Utc>>;

    /// Replaces calendar fields. Every field left as `None` keeps its current value.
    ///
    /// # Arguments
    /// * `change` - The fields to replace
    ///
    /// # Returns
    /// * `Result<DateTime<Utc>>` - The new instant, or `Error::InvalidArgument` if the combined
    ///   fields do not form a valid date and time
    ///
    /// # Examples
    /// ```
    /// use chrono::{TimeZone, Utc};
    /// use garnish::ext::{Change, DateTimeExt};
    ///
    /// let t = Utc.with_ymd_and_hms(2025, 3, 14, 15, 9, 26).unwrap();
    /// let changed = t.change(&Change { day: Some(1), hour: Some(8), ..Default::default() });
    /// assert_eq!(changed.unwrap(), Utc.with_ymd_and_hms(2025, 3, 1, 8, 9, 26).unwrap());
    /// ```
    fn change(&self, change: &Change) -> Result<DateTime<Utc>>;
}

impl DateTimeExt for DateTime<Utc> {
    fn beginning_of_day(&self) -> DateTime<Utc> {
        start_of(self.date_naive())
    }

    fn end_of_day(&self) -> DateTime<Utc> {
        end_of(self.date_naive())
    }

    fn beginning_of_week(&self) -> DateTime<Utc> {
        self.beginning_of_week_with(WeekStart::default())
    }

    fn beginning_of_week_with(&self, week_start: WeekStart) -> DateTime<Utc> {
        let offset = week_start.days_from_start(self.weekday());
        start_of(shift(self.date_naive(), -offset))
    }

    fn end_of_week(&self) -> DateTime<Utc> {
        self.end_of_week_with(WeekStart::default())
    }

    fn end_of_week_with(&self, week_start: WeekStart) -> DateTime<Utc> {
        let offset = week_start.days_from_start(self.weekday());
        end_of(shift(self.date_naive(), DAYS_PER_WEEK - 1 - offset))
    }

    fn beginning_of_month(&self) -> DateTime<Utc> {
        start_of(ymd(self.year(), self.month(), 1))
    }

    fn end_of_month(&self) -> DateTime<Utc> {
        end_of(ymd(self.year(), self.month(), self.days_in_month()))
    }

    fn beginning_of_quarter(&self) -> DateTime<Utc> {
        let (first, _) = quarter_months(self.month());
        start_of(ymd(self.year(), first, 1))
    }

    fn end_of_quarter(&self) -> DateTime<Utc> {
        let (_, last) = quarter_months(self.month());
        end_of(ymd(self.year(), last, month_length(self.year(), last)))
    }

    fn beginning_of_year(&self) -> DateTime<Utc> {
        start_of(ymd(self.year(), 1, 1))
    }

    fn end_of_year(&self) -> DateTime<Utc> {
        end_of(ymd(self.year(), 12, 31))
    }

    fn all_day(&self) -> DateRange {
        DateRange::new(self.beginning_of_day(), self.end_of_day())
    }

    fn all_week(&self) -> DateRange {
        self.all_week_with(WeekStart::default())
    }

    fn all_week_with(&self, week_start: WeekStart) -> DateRange {
        DateRange::new(
            self.beginning_of_week_with(week_start),
            self.end_of_week_with(week_start),
        )
    }

    fn all_month(&self) -> DateRange {
        DateRange::new(self.beginning_of_month(), self.end_of_month())
    }

    fn all_quarter(&self) -> DateRange {
        DateRange::new(self.beginning_of_quarter(), self.end_of_quarter())
    }

    fn all_year(&self) -> DateRange {
        DateRange::new(self.beginning_of_year(), self.end_of_year())
    }

    fn is_yesterday(&self) -> bool {
        self.date_naive() == clock::yesterday().date_naive()
    }

    fn is_today(&self) -> bool {
        self.date_naive() == clock::today().date_naive()
    }

    fn is_tomorrow(&self) -> bool {
        self.date_naive() == clock::tomorrow().date_naive()
    }

    fn yesterday(&self) -> DateTime<Utc> {
        start_of(shift(self.date_naive(), -1))
    }

    fn tomorrow(&self) -> DateTime<Utc> {
        start_of(shift(self.date_naive(), 1))
    }

    fn days_in_month(&self) -> u32 {
        month_length(self.year(), self.month())
    }

    fn advance(&self, duration: &Duration) -> Result<DateTime<Utc>> {
        duration.advance_from(*self)
    }

    fn change(&self, change: &Change) -> Result<DateTime<Utc>> {
        let date = NaiveDate::from_ymd_opt(
            change.year.unwrap_or(self.year()),
            change.month.unwrap_or(self.month()),
            change.day.unwrap_or(self.day()),
        );

        let time = NaiveTime::from_hms_nano_opt(
            change.hour.unwrap_or(self.hour()),
            change.minute.unwrap_or(self.minute()),
            change.second.unwrap_or(self.second()),
            change.nanosecond.unwrap_or(self.nanosecond()),
        );

        match (date, time) {
            (Some(date), Some(time)) => Ok(date.and_time(time).and_utc()),
            _ => Err(Error::InvalidArgument(format!(
                "cannot apply {change:?} to {self}"
            ))),
        }
    }
}
