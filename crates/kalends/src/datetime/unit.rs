//! Calendar unit and week-numbering tags.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::KalendsError;

/// Granularity of an arithmetic, boundary, or difference operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CalendarUnit {
    Second,
    Minute,
    Hour,
    Day,
    /// Fixed-length: one week is always seven days.
    Week,
    /// Variable-length: addition clamps the day to the target month.
    Month,
    /// Variable-length: addition clamps February 29 to February 28.
    Year,
}

impl CalendarUnit {
    /// Returns the lowercase unit name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Second => "second",
            Self::Minute => "minute",
            Self::Hour => "hour",
            Self::Day => "day",
            Self::Week => "week",
            Self::Month => "month",
            Self::Year => "year",
        }
    }
}

impl fmt::Display for CalendarUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CalendarUnit {
    type Err = KalendsError;

    /// Accepts singular and plural unit names, case-insensitively.
    /// Anything else fails closed; no unit is ever guessed.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "second" | "seconds" => Ok(Self::Second),
            "minute" | "minutes" => Ok(Self::Minute),
            "hour" | "hours" => Ok(Self::Hour),
            "day" | "days" => Ok(Self::Day),
            "week" | "weeks" => Ok(Self::Week),
            "month" | "months" => Ok(Self::Month),
            "year" | "years" => Ok(Self::Year),
            _ => Err(KalendsError::UnknownUnit(s.to_string())),
        }
    }
}

/// Week-of-year numbering convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeekNumbering {
    /// `strftime %W` semantics: Monday-started weeks, counted from the
    /// year's first Monday. Days before it fall in week 0.
    #[default]
    MondayBased,
    /// ISO 8601: Monday-started weeks, week 1 is the one containing the
    /// year's first Thursday. Early January can belong to week 52/53 of
    /// the previous ISO year.
    Iso,
}
