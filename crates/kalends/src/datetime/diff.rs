//! Calendar differences between two values.
//!
//! Differences are computed on wall clocks. Whole months are counted first,
//! reusing the arithmetic engine's clamping, and the remainder is
//! decomposed into days, hours, minutes, seconds, and microseconds. All
//! components share the sign of the overall difference.

use chrono::TimeDelta;
use serde::{Deserialize, Serialize};

use super::unit::CalendarUnit;
use super::value::DateTime;

const MICROS_PER_SECOND: i64 = 1_000_000;
const MICROS_PER_MINUTE: i64 = 60 * MICROS_PER_SECOND;
const MICROS_PER_HOUR: i64 = 60 * MICROS_PER_MINUTE;
const MICROS_PER_DAY: i64 = 24 * MICROS_PER_HOUR;

/// Signed component-wise calendar difference between two values.
///
/// Components share one sign: `a.difference(&b)` and `b.difference(&a)`
/// are exact negations of each other.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Difference {
    pub years: i64,
    pub months: i64,
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
    pub microseconds: i64,
}

impl Difference {
    fn negated(self) -> Self {
        Self {
            years: -self.years,
            months: -self.months,
            days: -self.days,
            hours: -self.hours,
            minutes: -self.minutes,
            seconds: -self.seconds,
            microseconds: -self.microseconds,
        }
    }
}

impl DateTime {
    /// Component-wise calendar difference `self - other`.
    #[must_use]
    pub fn difference(&self, other: &Self) -> Difference {
        if self.wall >= other.wall {
            components(*self, *other)
        } else {
            components(*other, *self).negated()
        }
    }

    /// Signed total of `unit` between `other` and `self` (`self - other`).
    ///
    /// Fixed-length units count exact elapsed time; months and years count
    /// whole calendar steps with day clamping.
    #[must_use]
    pub fn diff_in(&self, unit: CalendarUnit, other: &Self) -> i64 {
        match unit {
            CalendarUnit::Second => self.diff_in_seconds(other),
            CalendarUnit::Minute => self.diff_in_minutes(other),
            CalendarUnit::Hour => self.diff_in_hours(other),
            CalendarUnit::Day => self.diff_in_days(other),
            CalendarUnit::Week => self.diff_in_weeks(other),
            CalendarUnit::Month => self.diff_in_months(other),
            CalendarUnit::Year => self.diff_in_years(other),
        }
    }

    /// Elapsed microseconds `self - other`.
    ///
    /// ## Panics
    ///
    /// Panics when the span exceeds `i64` microseconds (spans longer than
    /// roughly 292,000 years).
    #[must_use]
    pub fn diff_in_microseconds(&self, other: &Self) -> i64 {
        self.span_since(other)
            .num_microseconds()
            .expect("span fits in i64 microseconds")
    }

    /// Elapsed whole seconds `self - other`.
    #[must_use]
    pub fn diff_in_seconds(&self, other: &Self) -> i64 {
        self.span_since(other).num_seconds()
    }

    /// Elapsed whole minutes `self - other`.
    #[must_use]
    pub fn diff_in_minutes(&self, other: &Self) -> i64 {
        self.span_since(other).num_minutes()
    }

    /// Elapsed whole hours `self - other`.
    #[must_use]
    pub fn diff_in_hours(&self, other: &Self) -> i64 {
        self.span_since(other).num_hours()
    }

    /// Elapsed whole days `self - other`.
    #[must_use]
    pub fn diff_in_days(&self, other: &Self) -> i64 {
        self.span_since(other).num_days()
    }

    /// Elapsed whole seven-day weeks `self - other`.
    #[must_use]
    pub fn diff_in_weeks(&self, other: &Self) -> i64 {
        self.span_since(other).num_weeks()
    }

    /// Whole calendar months `self - other`, with day clamping.
    #[must_use]
    pub fn diff_in_months(&self, other: &Self) -> i64 {
        let diff = self.difference(other);
        diff.years * 12 + diff.months
    }

    /// Whole calendar years `self - other`.
    #[must_use]
    pub fn diff_in_years(&self, other: &Self) -> i64 {
        self.difference(other).years
    }

    fn span_since(&self, other: &Self) -> TimeDelta {
        self.wall.signed_duration_since(other.wall)
    }
}

/// Components of `later - earlier`; requires `later.wall >= earlier.wall`.
fn components(later: DateTime, earlier: DateTime) -> Difference {
    let mut months = (i64::from(later.year()) - i64::from(earlier.year())) * 12
        + i64::from(later.month())
        - i64::from(earlier.month());
    let mut anchor = earlier.add_months(months);
    // Clamped month ends can overshoot; step back until the anchor fits.
    while anchor.wall > later.wall {
        months -= 1;
        anchor = earlier.add_months(months);
    }

    let remainder = later
        .wall
        .signed_duration_since(anchor.wall)
        .num_microseconds()
        .expect("anchored remainder fits in i64 microseconds");
    Difference {
        years: months / 12,
        months: months % 12,
        days: remainder / MICROS_PER_DAY,
        hours: remainder % MICROS_PER_DAY / MICROS_PER_HOUR,
        minutes: remainder % MICROS_PER_HOUR / MICROS_PER_MINUTE,
        seconds: remainder % MICROS_PER_MINUTE / MICROS_PER_SECOND,
        microseconds: remainder % MICROS_PER_SECOND,
    }
}
