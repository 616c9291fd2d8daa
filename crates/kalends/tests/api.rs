//! End-to-end exercises of the public surface: parse, chain, render.

use kalends::{CalendarUnit, DateTime, KalendsError, WeekNumbering};

#[test_log::test]
fn parse_shift_and_render_chain() {
    let invoice = DateTime::parse("2021-01-31 09:15:00").expect("valid input");

    // Next billing period: one month later, clamped, snapped to month end.
    let due = invoice
        .add(CalendarUnit::Month, 1)
        .end_of(CalendarUnit::Month);

    assert_eq!(due.to_date_string(), "2021-02-28");
    assert_eq!(due.to_time_string(), "23:59:59");
    assert_eq!(due.microsecond(), 999_999);
    assert!(invoice.less_than(&due));
}

#[test_log::test]
fn string_units_dispatch_through_from_str() {
    let value = DateTime::parse("2021-06-09T14:30:00").expect("valid input");

    let unit: CalendarUnit = "months".parse().expect("known unit");
    assert_eq!(value.add(unit, 2).month(), 8);

    let err = "fortnights".parse::<CalendarUnit>().expect_err("unknown unit");
    assert_eq!(err, KalendsError::UnknownUnit("fortnights".to_string()));
}

#[test_log::test]
fn clock_constructors_agree_on_awareness() {
    assert!(!DateTime::now().is_aware());
    assert!(DateTime::utc_now().is_aware());

    // Day-shifted constructors stay within one calendar day of now. The
    // capture order keeps each span at or above a full day despite the
    // microseconds elapsing between calls.
    let yesterday = DateTime::utc_yesterday();
    let now = DateTime::utc_now();
    let tomorrow = DateTime::utc_tomorrow();
    assert_eq!(now.diff_in(CalendarUnit::Day, &yesterday), 1);
    assert_eq!(tomorrow.diff_in(CalendarUnit::Day, &now), 1);
    assert!(yesterday.less_than(&tomorrow));
}

#[test_log::test]
fn fiscal_reporting_scenario() {
    let close = DateTime::from_fields(2020, 12, 31, 17, 0, 0, 0).expect("valid fields");

    // December closes quarter 3 of a calendar-year partition and quarter 2
    // of an April-started fiscal partition.
    assert_eq!(close.quarter(1), 3);
    assert_eq!(close.quarter(4), 2);
    assert_eq!(close.week_of_year(WeekNumbering::MondayBased), 52);
    assert_eq!(close.week_of_year(WeekNumbering::Iso), 53);

    // Year boundaries stay inside 2020 even though the week spills over.
    let year_end = close.end_of(CalendarUnit::Year);
    assert_eq!(year_end.to_date_string(), "2020-12-31");
    let week_end = close.end_of(CalendarUnit::Week);
    assert_eq!(week_end.to_date_string(), "2021-01-03");
}
