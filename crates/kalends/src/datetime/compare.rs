//! Instant ordering and same-unit comparisons.
//!
//! Two notions of equality coexist here, matching how the values are used:
//! `equal_to` compares wall-clock fields and ignores the offset tag, while
//! the ordering predicates compare absolute instants (aware values shifted
//! by their offset, naive values read as UTC).

use std::cmp::Ordering;

use super::unit::CalendarUnit;
use super::value::DateTime;

impl DateTime {
    /// Field-wise equality down to microseconds, ignoring the offset tag.
    #[must_use]
    pub fn equal_to(&self, other: &Self) -> bool {
        self.wall == other.wall
    }

    /// Negation of [`DateTime::equal_to`].
    #[must_use]
    pub fn not_equal_to(&self, other: &Self) -> bool {
        !self.equal_to(other)
    }

    /// Whether this instant is strictly after `other`.
    #[must_use]
    pub fn greater_than(&self, other: &Self) -> bool {
        self.utc_wall() > other.utc_wall()
    }

    /// Whether this instant is at or after `other`.
    #[must_use]
    pub fn greater_than_or_equal_to(&self, other: &Self) -> bool {
        self.utc_wall() >= other.utc_wall()
    }

    /// Whether this instant is strictly before `other`.
    #[must_use]
    pub fn less_than(&self, other: &Self) -> bool {
        self.utc_wall() < other.utc_wall()
    }

    /// Whether this instant is at or before `other`.
    #[must_use]
    pub fn less_than_or_equal_to(&self, other: &Self) -> bool {
        self.utc_wall() <= other.utc_wall()
    }

    /// Whether this instant lies between `low` and `high`, with bounds
    /// included or excluded per `included`.
    #[must_use]
    pub fn between(&self, low: &Self, high: &Self, included: bool) -> bool {
        if included {
            self.between_included(low, high)
        } else {
            self.between_excluded(low, high)
        }
    }

    /// Whether this instant lies in the closed range `[low, high]`.
    #[must_use]
    pub fn between_included(&self, low: &Self, high: &Self) -> bool {
        self.greater_than_or_equal_to(low) && self.less_than_or_equal_to(high)
    }

    /// Whether this instant lies in the open range `(low, high)`.
    #[must_use]
    pub fn between_excluded(&self, low: &Self, high: &Self) -> bool {
        self.greater_than(low) && self.less_than(high)
    }

    /// Same minute field; with `match_date`, the whole prefix down to the
    /// minute must match.
    #[must_use]
    pub fn is_same_minute(&self, other: &Self, match_date: bool) -> bool {
        if match_date {
            self.is_same_hour(other, true) && self.minute() == other.minute()
        } else {
            self.minute() == other.minute()
        }
    }

    /// Same hour field; with `match_date`, the whole prefix down to the
    /// hour must match.
    #[must_use]
    pub fn is_same_hour(&self, other: &Self, match_date: bool) -> bool {
        if match_date {
            self.is_same_day(other, true) && self.hour() == other.hour()
        } else {
            self.hour() == other.hour()
        }
    }

    /// Same day-of-month field; with `match_date`, year and month must
    /// match too.
    #[must_use]
    pub fn is_same_day(&self, other: &Self, match_date: bool) -> bool {
        if match_date {
            self.wall.date() == other.wall.date()
        } else {
            self.day() == other.day()
        }
    }

    /// Without `match_date`, compares the week-of-month grid index; with
    /// it, both values must share the same Monday-started calendar week.
    #[must_use]
    pub fn is_same_week(&self, other: &Self, match_date: bool) -> bool {
        if match_date {
            self.start_of(CalendarUnit::Week).wall.date()
                == other.start_of(CalendarUnit::Week).wall.date()
        } else {
            self.week_of_month(0) == other.week_of_month(0)
        }
    }

    /// Same month field; with `match_date`, the year must match too.
    #[must_use]
    pub fn is_same_month(&self, other: &Self, match_date: bool) -> bool {
        if match_date {
            self.year() == other.year() && self.month() == other.month()
        } else {
            self.month() == other.month()
        }
    }

    /// Same year field.
    #[must_use]
    pub fn is_same_year(&self, other: &Self) -> bool {
        self.year() == other.year()
    }

    /// Same calendar quarter (January-started partition); with
    /// `match_date`, the year must match too.
    #[must_use]
    pub fn is_same_quarter(&self, other: &Self, match_date: bool) -> bool {
        if match_date {
            self.year() == other.year() && self.quarter(1) == other.quarter(1)
        } else {
            self.quarter(1) == other.quarter(1)
        }
    }
}

impl PartialOrd for DateTime {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for DateTime {
    /// Total order by absolute instant, tie-broken by wall clock and then
    /// offset so that equal ordering coincides with structural equality.
    fn cmp(&self, other: &Self) -> Ordering {
        let key = |value: &Self| {
            (
                value.utc_wall(),
                value.wall,
                value.offset.map(|offset| offset.local_minus_utc()),
            )
        };
        key(self).cmp(&key(other))
    }
}
