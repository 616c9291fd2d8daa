//! Calendar-position queries: leap years, quarters, and week numbering.

use chrono::{Datelike, Weekday};

use super::unit::WeekNumbering;
use super::value::DateTime;

/// Gregorian leap-year rule: divisible by 4 and (not by 100 or by 400).
#[must_use]
pub fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

/// Number of days in the given month of the given year.
///
/// ## Panics
///
/// Panics when `month` is outside 1..=12.
#[must_use]
pub fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => panic!("month out of range 1..=12: {month}"),
    }
}

/// Partition of the twelve months into four consecutive triples starting at
/// `start_month`, wrapping past December back to January.
///
/// `quarter_table(1)` is `[[1, 2, 3], [4, 5, 6], [7, 8, 9], [10, 11, 12]]`.
///
/// ## Panics
///
/// Panics when `start_month` is outside 1..=12.
#[must_use]
pub fn quarter_table(start_month: u32) -> [[u32; 3]; 4] {
    assert!(
        (1..=12).contains(&start_month),
        "quarter start month out of range 1..=12: {start_month}"
    );
    let mut months = (0..12).map(|i| (start_month - 1 + i) % 12 + 1);
    let mut table = [[0; 3]; 4];
    for quarter in &mut table {
        for slot in quarter {
            *slot = months.next().expect("exactly twelve months");
        }
    }
    table
}

impl DateTime {
    /// Whether this value's year is a leap year.
    #[must_use]
    pub fn is_leap_year(&self) -> bool {
        is_leap_year(self.year())
    }

    /// Number of days in this value's month.
    #[must_use]
    pub fn days_in_month(&self) -> u32 {
        days_in_month(self.year(), self.month())
    }

    /// Weekday index, Monday = 0 through Sunday = 6.
    #[must_use]
    pub fn day_of_week(&self) -> u32 {
        self.wall.weekday().num_days_from_monday()
    }

    /// 1-based ordinal day within the year (December 31 is 365 or 366).
    #[must_use]
    pub fn day_of_year(&self) -> u32 {
        self.wall.ordinal()
    }

    /// Weekday (Monday = 0) of the first day of this value's month.
    #[must_use]
    pub fn month_first_weekday(&self) -> u32 {
        self.wall
            .date()
            .with_day(1)
            .expect("day 1 exists in every month")
            .weekday()
            .num_days_from_monday()
    }

    /// Index of the Monday-started calendar-grid week containing this
    /// value's day. The month's first, possibly partial, week has index
    /// `start`.
    #[must_use]
    pub fn week_of_month(&self, start: u32) -> u32 {
        start + (self.day() - 1 + self.month_first_weekday()) / 7
    }

    /// Week number within the year under the given convention.
    ///
    /// [`WeekNumbering::MondayBased`] counts Monday-started weeks from the
    /// year's first Monday, with earlier days in week 0 (`strftime %W`).
    /// [`WeekNumbering::Iso`] delegates to chrono's ISO 8601 week, which
    /// may report week 52/53 of the previous ISO year for early January.
    #[must_use]
    pub fn week_of_year(&self, numbering: WeekNumbering) -> u32 {
        match numbering {
            WeekNumbering::MondayBased => (self.day_of_year() + 6 - self.day_of_week()) / 7,
            WeekNumbering::Iso => self.wall.iso_week().week(),
        }
    }

    /// 0-based quarter index under a partition starting at `start_month`.
    ///
    /// With `start_month = 1`, January–March is quarter 0 and
    /// October–December is quarter 3.
    ///
    /// ## Panics
    ///
    /// Panics when `start_month` is outside 1..=12.
    #[must_use]
    pub fn quarter(&self, start_month: u32) -> u32 {
        assert!(
            (1..=12).contains(&start_month),
            "quarter start month out of range 1..=12: {start_month}"
        );
        (self.month() + 12 - start_month) % 12 / 3
    }

    /// Whether this value falls on Saturday or Sunday.
    #[must_use]
    pub fn is_weekend(&self) -> bool {
        matches!(self.wall.weekday(), Weekday::Sat | Weekday::Sun)
    }

    /// Whether this value falls on the given weekday.
    #[must_use]
    pub fn is_day_of_week(&self, weekday: Weekday) -> bool {
        self.wall.weekday() == weekday
    }

    /// Whether this value's day is the last day of its month.
    #[must_use]
    pub fn is_last_day_of_month(&self) -> bool {
        self.day() == self.days_in_month()
    }
}
