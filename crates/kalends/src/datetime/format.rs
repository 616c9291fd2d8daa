//! Parsing and textual rendering, delegated to chrono's format machinery.

use std::fmt;

use chrono::{DateTime as ChronoDateTime, FixedOffset, NaiveDate, NaiveDateTime, SecondsFormat};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{KalendsError, KalendsResult};

use super::value::DateTime;

/// Offset-less fallback patterns tried by [`DateTime::parse`], in order.
const NAIVE_PATTERNS: [&str; 2] = ["%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S%.f"];

impl DateTime {
    /// Parses an ISO-ish date/time string.
    ///
    /// Tries RFC 3339 first (producing an offset-aware value), then the
    /// offset-less `YYYY-MM-DD HH:MM:SS[.ffffff]` forms with either a space
    /// or `T` separator, then a bare `YYYY-MM-DD` date at midnight.
    ///
    /// ## Errors
    ///
    /// Returns [`KalendsError::Parse`] when no recognized form matches.
    pub fn parse(text: &str) -> KalendsResult<Self> {
        let trimmed = text.trim();
        if let Ok(aware) = ChronoDateTime::<FixedOffset>::parse_from_rfc3339(trimmed) {
            tracing::trace!(input = trimmed, "parsed as RFC 3339");
            return Ok(Self::from(aware));
        }
        for pattern in NAIVE_PATTERNS {
            if let Ok(wall) = NaiveDateTime::parse_from_str(trimmed, pattern) {
                tracing::trace!(input = trimmed, pattern, "parsed as naive date-time");
                return Ok(Self::from(wall));
            }
        }
        if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
            tracing::trace!(input = trimmed, "parsed as bare date");
            return Ok(Self::from(date));
        }
        Err(KalendsError::Parse(text.to_string()))
    }

    /// Parses `text` against an explicit strftime `pattern`.
    ///
    /// Patterns without time fields produce a value at midnight.
    ///
    /// ## Errors
    ///
    /// Returns [`KalendsError::Parse`] when `text` does not match the
    /// pattern.
    pub fn parse_from_format(pattern: &str, text: &str) -> KalendsResult<Self> {
        if let Ok(wall) = NaiveDateTime::parse_from_str(text, pattern) {
            return Ok(Self::from(wall));
        }
        if let Ok(date) = NaiveDate::parse_from_str(text, pattern) {
            return Ok(Self::from(date));
        }
        tracing::trace!(input = text, pattern, "format parse failed");
        Err(KalendsError::Parse(text.to_string()))
    }

    /// Renders the wall clock with a chrono strftime pattern.
    ///
    /// ## Panics
    ///
    /// Panics when `pattern` contains an unrecognized format specifier.
    #[must_use]
    pub fn format(&self, pattern: &str) -> String {
        self.wall.format(pattern).to_string()
    }

    /// `YYYY-MM-DD HH:MM:SS`, with the microsecond fraction appended when
    /// `with_microseconds` is set.
    #[must_use]
    pub fn to_date_time_string(&self, with_microseconds: bool) -> String {
        if with_microseconds {
            self.format("%Y-%m-%d %H:%M:%S.%6f")
        } else {
            self.format("%Y-%m-%d %H:%M:%S")
        }
    }

    /// `YYYY-MM-DD`.
    #[must_use]
    pub fn to_date_string(&self) -> String {
        self.format("%Y-%m-%d")
    }

    /// `HH:MM:SS`.
    #[must_use]
    pub fn to_time_string(&self) -> String {
        self.format("%H:%M:%S")
    }

    /// RFC 3339 with the offset when the value is aware, or the offset-less
    /// ISO form when naive; microsecond precision either way.
    #[must_use]
    pub fn to_iso_string(&self) -> String {
        match self.to_fixed() {
            Some(aware) => aware.to_rfc3339_opts(SecondsFormat::Micros, true),
            None => self.format("%Y-%m-%dT%H:%M:%S%.6f"),
        }
    }

    /// Cookie-style `Thu, 31-Dec-2020 23:59:59 +0000` rendering.
    ///
    /// ## Errors
    ///
    /// Returns [`KalendsError::MissingOffset`] for naive values; cookies
    /// need an unambiguous instant.
    pub fn to_cookie_string(&self) -> KalendsResult<String> {
        let aware = self.to_fixed().ok_or(KalendsError::MissingOffset(
            "cookie strings need an offset-aware value",
        ))?;
        Ok(aware.format("%a, %d-%b-%Y %H:%M:%S %z").to_string())
    }
}

impl fmt::Display for DateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_date_time_string(false))
    }
}

impl Serialize for DateTime {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_iso_string())
    }
}

impl<'de> Deserialize<'de> for DateTime {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let text = String::deserialize(deserializer)?;
        Self::parse(&text).map_err(D::Error::custom)
    }
}
