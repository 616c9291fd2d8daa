//! Parsing, rendering, and the serde string form.

use chrono::FixedOffset;

use super::{dt, dt_at, hms_micro, ymd};
use crate::{DateTime, KalendsError};

#[test]
fn parse_accepts_rfc3339_and_keeps_the_offset() {
    let value = DateTime::parse("2021-06-09T14:30:00.123456+02:00").expect("valid RFC 3339");
    assert_eq!(ymd(&value), (2021, 6, 9));
    assert_eq!(hms_micro(&value), (14, 30, 0, 123_456));
    assert_eq!(
        value.offset(),
        Some(FixedOffset::east_opt(7200).expect("two hours east is valid"))
    );
}

#[test]
fn parse_accepts_naive_forms() {
    let spaced = DateTime::parse("2021-06-09 14:30:00").expect("valid spaced form");
    assert_eq!(hms_micro(&spaced), (14, 30, 0, 0));
    assert_eq!(spaced.offset(), None);

    let fractional = DateTime::parse("2021-06-09T14:30:00.25").expect("valid fractional form");
    assert_eq!(fractional.microsecond(), 250_000);

    let bare_date = DateTime::parse("2021-06-09").expect("valid bare date");
    assert_eq!(ymd(&bare_date), (2021, 6, 9));
    assert_eq!(hms_micro(&bare_date), (0, 0, 0, 0));
}

#[test]
fn parse_rejects_unrecognized_text() {
    assert_eq!(
        DateTime::parse("not a date"),
        Err(KalendsError::Parse("not a date".to_string()))
    );
    assert!(DateTime::parse("2021-13-01").is_err());
    assert!(DateTime::parse("2021-06-31").is_err());
}

#[test]
fn parse_from_format_matches_custom_patterns() {
    let value =
        DateTime::parse_from_format("%d/%m/%Y %H:%M", "09/06/2021 14:30").expect("valid input");
    assert_eq!(ymd(&value), (2021, 6, 9));
    assert_eq!(hms_micro(&value), (14, 30, 0, 0));

    let date_only = DateTime::parse_from_format("%d-%b-%Y", "09-Jun-2021").expect("valid input");
    assert_eq!(ymd(&date_only), (2021, 6, 9));
    assert_eq!(hms_micro(&date_only), (0, 0, 0, 0));

    assert!(DateTime::parse_from_format("%d/%m/%Y", "2021-06-09").is_err());
}

#[test]
fn format_round_trips_parsed_fields() {
    let source = "2021-06-09 14:30:45";
    let value = DateTime::parse(source).expect("valid input");
    let reparsed = DateTime::parse(&value.format("%Y-%m-%dT%H:%M:%S")).expect("own output parses");
    assert!(value.equal_to(&reparsed));
}

#[test]
fn string_renderings() {
    let value = dt_at(2021, 6, 9, 14, 30, 45, 123_456);

    assert_eq!(value.to_date_string(), "2021-06-09");
    assert_eq!(value.to_time_string(), "14:30:45");
    assert_eq!(value.to_date_time_string(false), "2021-06-09 14:30:45");
    assert_eq!(
        value.to_date_time_string(true),
        "2021-06-09 14:30:45.123456"
    );
    assert_eq!(value.to_string(), "2021-06-09 14:30:45");
}

#[test]
fn iso_string_reflects_awareness() {
    let naive = dt_at(2021, 6, 9, 14, 30, 45, 123_456);
    assert_eq!(naive.to_iso_string(), "2021-06-09T14:30:45.123456");

    let offset = FixedOffset::east_opt(7200).expect("two hours east is valid");
    let aware = naive.with_offset(offset);
    assert_eq!(aware.to_iso_string(), "2021-06-09T14:30:45.123456+02:00");
}

#[test]
fn cookie_string_needs_an_offset() {
    let offset = FixedOffset::east_opt(0).expect("zero offset is valid");
    let aware = dt_at(2020, 12, 31, 23, 59, 59, 0).with_offset(offset);
    assert_eq!(
        aware.to_cookie_string().expect("aware value renders"),
        "Thu, 31-Dec-2020 23:59:59 +0000"
    );

    assert!(matches!(
        dt(2021, 6, 9).to_cookie_string(),
        Err(KalendsError::MissingOffset(_))
    ));
}

#[test]
fn serde_round_trips_fields_and_offset() {
    let offset = FixedOffset::east_opt(7200).expect("two hours east is valid");
    let aware = dt_at(2021, 6, 9, 14, 30, 45, 123_456).with_offset(offset);
    let json = serde_json::to_string(&aware).expect("serializes");
    assert_eq!(json, "\"2021-06-09T14:30:45.123456+02:00\"");

    let back: DateTime = serde_json::from_str(&json).expect("deserializes");
    assert!(back.equal_to(&aware));
    assert_eq!(back.offset(), Some(offset));

    let naive = dt_at(2021, 6, 9, 14, 30, 45, 0);
    let back: DateTime = serde_json::from_str(&serde_json::to_string(&naive).expect("serializes"))
        .expect("deserializes");
    assert!(back.equal_to(&naive));
    assert_eq!(back.offset(), None);
}
