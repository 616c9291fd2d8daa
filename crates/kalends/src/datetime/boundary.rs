//! Period boundaries: the first and last instant of an enclosing unit.
//!
//! Every boundary is derived from the source value's own calendar fields.
//! Month and year boundaries in particular never route through week
//! snapping: a week that crosses a month or year edge must not drag the
//! boundary into the neighboring period.

use chrono::{Datelike, NaiveDate, NaiveTime, TimeDelta, Timelike};

use super::classify::days_in_month;
use super::unit::CalendarUnit;
use super::value::DateTime;

/// Last representable instant of a day at microsecond resolution.
fn day_end() -> NaiveTime {
    NaiveTime::from_hms_micro_opt(23, 59, 59, 999_999).expect("23:59:59.999999 is a valid time")
}

impl DateTime {
    /// Returns the earliest instant of the `unit` enclosing this value.
    ///
    /// Weeks start on Monday (ISO convention); this is fixed, not
    /// configurable.
    #[must_use]
    pub fn start_of(self, unit: CalendarUnit) -> Self {
        let wall = match unit {
            CalendarUnit::Second => self
                .wall
                .with_nanosecond(0)
                .expect("zero nanoseconds is always valid"),
            CalendarUnit::Minute => self
                .wall
                .with_second(0)
                .and_then(|wall| wall.with_nanosecond(0))
                .expect("zeroed seconds are always valid"),
            CalendarUnit::Hour => self
                .wall
                .with_minute(0)
                .and_then(|wall| wall.with_second(0))
                .and_then(|wall| wall.with_nanosecond(0))
                .expect("zeroed minutes are always valid"),
            CalendarUnit::Day => self.wall.date().and_time(NaiveTime::MIN),
            CalendarUnit::Week => self.week_start_date().and_time(NaiveTime::MIN),
            CalendarUnit::Month => self
                .month_date(1)
                .and_time(NaiveTime::MIN),
            CalendarUnit::Year => year_date(self.year(), 1, 1).and_time(NaiveTime::MIN),
        };
        Self { wall, ..self }
    }

    /// Returns the latest instant of the `unit` enclosing this value, at
    /// microsecond resolution.
    #[must_use]
    pub fn end_of(self, unit: CalendarUnit) -> Self {
        let wall = match unit {
            CalendarUnit::Second => self
                .wall
                .with_nanosecond(999_999_000)
                .expect("sub-second maximum is always valid"),
            CalendarUnit::Minute => self
                .wall
                .with_second(59)
                .and_then(|wall| wall.with_nanosecond(999_999_000))
                .expect("59.999999 is a valid second"),
            CalendarUnit::Hour => self
                .wall
                .with_minute(59)
                .and_then(|wall| wall.with_second(59))
                .and_then(|wall| wall.with_nanosecond(999_999_000))
                .expect("59:59.999999 is a valid minute"),
            CalendarUnit::Day => self.wall.date().and_time(day_end()),
            CalendarUnit::Week => (self.week_start_date() + TimeDelta::days(6)).and_time(day_end()),
            CalendarUnit::Month => self
                .month_date(days_in_month(self.year(), self.month()))
                .and_time(day_end()),
            CalendarUnit::Year => year_date(self.year(), 12, 31).and_time(day_end()),
        };
        Self { wall, ..self }
    }

    /// Date of the most recent Monday, possibly in a neighboring month or
    /// year.
    fn week_start_date(&self) -> NaiveDate {
        let back = i64::from(self.wall.weekday().num_days_from_monday());
        self.wall.date() - TimeDelta::days(back)
    }

    /// This value's month at the given day; the caller supplies a day known
    /// to exist in the month.
    fn month_date(&self, day: u32) -> NaiveDate {
        year_date(self.year(), self.month(), day)
    }
}

fn year_date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("boundary dates are always valid")
}
