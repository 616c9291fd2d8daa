//! Calendar-unit addition and subtraction.
//!
//! Fixed-length units (second through week) convert to a [`TimeDelta`] and
//! delegate carry arithmetic to chrono. Months and years are variable-length
//! and are computed from the value's own fields, clamping the day to the
//! last day of the target month: Jan 31 + 1 month is Feb 28 (or Feb 29 in a
//! leap year), never Mar 3.

use chrono::{NaiveDate, TimeDelta};

use super::classify::days_in_month;
use super::unit::CalendarUnit;
use super::value::DateTime;

impl DateTime {
    /// Adds `amount` of `unit`, returning a new value.
    ///
    /// Negative amounts subtract. The operation is total: month and year
    /// overflow is resolved by day clamping, never by failing.
    ///
    /// ## Panics
    ///
    /// Panics when the result falls outside chrono's representable range
    /// (roughly ±262,000 years from the common era).
    #[must_use]
    pub fn add(self, unit: CalendarUnit, amount: i64) -> Self {
        match unit {
            CalendarUnit::Second => self.add_seconds(amount),
            CalendarUnit::Minute => self.add_minutes(amount),
            CalendarUnit::Hour => self.add_hours(amount),
            CalendarUnit::Day => self.add_days(amount),
            CalendarUnit::Week => self.add_weeks(amount),
            CalendarUnit::Month => self.add_months(amount),
            CalendarUnit::Year => self.add_years(amount),
        }
    }

    /// Subtracts `amount` of `unit`; equivalent to `add(unit, -amount)`.
    ///
    /// ## Panics
    ///
    /// Panics under the same range conditions as [`DateTime::add`].
    #[must_use]
    pub fn subtract(self, unit: CalendarUnit, amount: i64) -> Self {
        self.add(unit, -amount)
    }

    /// Adds whole seconds.
    #[must_use]
    pub fn add_seconds(self, seconds: i64) -> Self {
        self.shift(TimeDelta::seconds(seconds))
    }

    /// Subtracts whole seconds.
    #[must_use]
    pub fn sub_seconds(self, seconds: i64) -> Self {
        self.add_seconds(-seconds)
    }

    /// Adds whole minutes.
    #[must_use]
    pub fn add_minutes(self, minutes: i64) -> Self {
        self.shift(TimeDelta::minutes(minutes))
    }

    /// Subtracts whole minutes.
    #[must_use]
    pub fn sub_minutes(self, minutes: i64) -> Self {
        self.add_minutes(-minutes)
    }

    /// Adds whole hours.
    #[must_use]
    pub fn add_hours(self, hours: i64) -> Self {
        self.shift(TimeDelta::hours(hours))
    }

    /// Subtracts whole hours.
    #[must_use]
    pub fn sub_hours(self, hours: i64) -> Self {
        self.add_hours(-hours)
    }

    /// Adds whole days, carrying across month and year boundaries.
    #[must_use]
    pub fn add_days(self, days: i64) -> Self {
        self.shift(TimeDelta::days(days))
    }

    /// Subtracts whole days.
    #[must_use]
    pub fn sub_days(self, days: i64) -> Self {
        self.add_days(-days)
    }

    /// Adds whole weeks (one week is always seven days).
    #[must_use]
    pub fn add_weeks(self, weeks: i64) -> Self {
        self.shift(TimeDelta::weeks(weeks))
    }

    /// Subtracts whole weeks.
    #[must_use]
    pub fn sub_weeks(self, weeks: i64) -> Self {
        self.add_weeks(-weeks)
    }

    /// Adds whole calendar months, clamping the day to the target month.
    ///
    /// ## Panics
    ///
    /// Panics when the target year leaves chrono's representable range.
    #[must_use]
    pub fn add_months(self, months: i64) -> Self {
        // Euclidean arithmetic keeps the month index non-negative for any
        // signed amount.
        let month0 = i64::from(self.month()) - 1 + months;
        let year = i64::from(self.year()) + month0.div_euclid(12);
        let year = i32::try_from(year).expect("year within supported range");
        let month = u32::try_from(month0.rem_euclid(12)).expect("month index in 0..12") + 1;
        self.with_clamped_date(year, month)
    }

    /// Subtracts whole calendar months.
    #[must_use]
    pub fn sub_months(self, months: i64) -> Self {
        self.add_months(-months)
    }

    /// Adds whole calendar years, clamping February 29 to February 28 in
    /// non-leap targets.
    ///
    /// ## Panics
    ///
    /// Panics when the target year leaves chrono's representable range.
    #[must_use]
    pub fn add_years(self, years: i64) -> Self {
        let year = i64::from(self.year()) + years;
        let year = i32::try_from(year).expect("year within supported range");
        self.with_clamped_date(year, self.month())
    }

    /// Subtracts whole calendar years.
    #[must_use]
    pub fn sub_years(self, years: i64) -> Self {
        self.add_years(-years)
    }

    /// Moves to `year`/`month` keeping the time of day, clamping the day to
    /// the last day of the target month.
    fn with_clamped_date(self, year: i32, month: u32) -> Self {
        let day = self.day().min(days_in_month(year, month));
        let date = NaiveDate::from_ymd_opt(year, month, day)
            .expect("clamped day is valid and year is within the supported range");
        Self {
            wall: date.and_time(self.wall.time()),
            ..self
        }
    }

    fn shift(self, delta: TimeDelta) -> Self {
        Self {
            wall: self.wall + delta,
            ..self
        }
    }
}
