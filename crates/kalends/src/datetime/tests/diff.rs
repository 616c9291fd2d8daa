//! Difference engine: component-wise differences and per-unit totals.

use super::{dt, dt_at};
use crate::{CalendarUnit, Difference};

#[test]
fn difference_decomposes_calendar_components() {
    let later = dt_at(2022, 3, 15, 10, 30, 0, 0);
    let earlier = dt_at(2021, 1, 10, 8, 0, 0, 0);

    assert_eq!(
        later.difference(&earlier),
        Difference {
            years: 1,
            months: 2,
            days: 5,
            hours: 2,
            minutes: 30,
            seconds: 0,
            microseconds: 0,
        }
    );
}

#[test]
fn difference_negates_when_swapped() {
    let a = dt_at(2022, 3, 15, 10, 30, 0, 250);
    let b = dt_at(2021, 1, 10, 8, 0, 30, 500);

    let forward = a.difference(&b);
    let backward = b.difference(&a);
    assert_eq!(backward.years, -forward.years);
    assert_eq!(backward.months, -forward.months);
    assert_eq!(backward.days, -forward.days);
    assert_eq!(backward.hours, -forward.hours);
    assert_eq!(backward.minutes, -forward.minutes);
    assert_eq!(backward.seconds, -forward.seconds);
    assert_eq!(backward.microseconds, -forward.microseconds);
}

#[test]
fn difference_of_equal_values_is_zero() {
    let value = dt_at(2021, 6, 9, 10, 0, 0, 0);
    assert_eq!(value.difference(&value), Difference::default());
}

#[test]
fn difference_borrows_a_month_when_the_day_falls_short() {
    // Jan 31 -> Mar 30 is one clamped month (to Feb 28) plus 30 days.
    let diff = dt(2021, 3, 30).difference(&dt(2021, 1, 31));
    assert_eq!((diff.years, diff.months, diff.days), (0, 1, 30));

    // Jan 31 -> Mar 31 is exactly two months.
    let exact = dt(2021, 3, 31).difference(&dt(2021, 1, 31));
    assert_eq!((exact.years, exact.months, exact.days), (0, 2, 0));
}

#[test]
fn difference_borrows_on_time_of_day() {
    // A later wall clock on the earlier date keeps the month whole; an
    // earlier one borrows it back.
    let diff = dt_at(2021, 2, 28, 1, 0, 0, 0).difference(&dt_at(2021, 1, 28, 23, 0, 0, 0));
    assert_eq!((diff.months, diff.days, diff.hours), (0, 30, 2));

    let whole = dt_at(2021, 2, 28, 23, 0, 0, 0).difference(&dt_at(2021, 1, 28, 1, 0, 0, 0));
    assert_eq!((whole.months, whole.days, whole.hours), (1, 0, 22));
}

#[test]
fn diff_in_fixed_units_counts_exact_elapsed_time() {
    let later = dt_at(2021, 3, 1, 12, 0, 0, 0);
    let earlier = dt_at(2021, 2, 1, 0, 0, 0, 0);

    assert_eq!(later.diff_in_days(&earlier), 28);
    assert_eq!(later.diff_in_weeks(&earlier), 4);
    assert_eq!(later.diff_in_hours(&earlier), 28 * 24 + 12);
    assert_eq!(later.diff_in_minutes(&earlier), (28 * 24 + 12) * 60);
    assert_eq!(later.diff_in_seconds(&earlier), (28 * 24 + 12) * 3600);
    assert_eq!(
        later.diff_in_microseconds(&earlier),
        (28 * 24 + 12) * 3_600_000_000
    );
    assert_eq!(earlier.diff_in_days(&later), -28);
}

#[test]
fn diff_in_months_counts_whole_clamped_months() {
    assert_eq!(dt(2021, 3, 31).diff_in_months(&dt(2021, 1, 31)), 2);
    assert_eq!(dt(2021, 3, 30).diff_in_months(&dt(2021, 1, 31)), 1);
    // Thirteen clamped months: Jan 31 + 13 months lands exactly on Feb 28.
    assert_eq!(dt(2022, 2, 28).diff_in_months(&dt(2021, 1, 31)), 13);
    assert_eq!(dt(2021, 1, 31).diff_in_months(&dt(2021, 3, 31)), -2);
}

#[test]
fn diff_in_years_counts_whole_years() {
    assert_eq!(dt(2022, 1, 10).diff_in_years(&dt(2021, 1, 10)), 1);
    assert_eq!(dt(2022, 1, 9).diff_in_years(&dt(2021, 1, 10)), 0);
    assert_eq!(dt(2019, 1, 10).diff_in_years(&dt(2021, 1, 10)), -2);
}

#[test]
fn diff_in_dispatch_matches_unit_helpers() {
    let later = dt_at(2021, 3, 1, 12, 0, 0, 0);
    let earlier = dt_at(2021, 1, 31, 0, 0, 0, 0);

    assert_eq!(
        later.diff_in(CalendarUnit::Day, &earlier),
        later.diff_in_days(&earlier)
    );
    assert_eq!(
        later.diff_in(CalendarUnit::Month, &earlier),
        later.diff_in_months(&earlier)
    );
    assert_eq!(
        later.diff_in(CalendarUnit::Year, &earlier),
        later.diff_in_years(&earlier)
    );
}
