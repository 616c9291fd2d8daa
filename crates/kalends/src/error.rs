use thiserror::Error;

/// Calendar value errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum KalendsError {
    /// The year/month/day combination does not name a real calendar date.
    #[error("Invalid calendar date: {year:04}-{month:02}-{day:02}")]
    InvalidDate { year: i32, month: u32, day: u32 },

    /// The wall-clock time fields are out of range.
    #[error("Invalid time of day: {hour:02}:{minute:02}:{second:02}.{microsecond:06}")]
    InvalidTime {
        hour: u32,
        minute: u32,
        second: u32,
        microsecond: u32,
    },

    /// The input text is not a recognized date/time representation.
    #[error("Parse error: {0}")]
    Parse(String),

    /// The unit name does not match any [`crate::CalendarUnit`].
    #[error("Unknown calendar unit: {0}")]
    UnknownUnit(String),

    /// The operation needs an offset-aware value but got a naive one.
    #[error("Missing UTC offset: {0}")]
    MissingOffset(&'static str),
}

pub type KalendsResult<T> = std::result::Result<T, KalendsError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_date_message_pads_fields() {
        let err = KalendsError::InvalidDate {
            year: 2021,
            month: 4,
            day: 31,
        };
        assert_eq!(err.to_string(), "Invalid calendar date: 2021-04-31");
    }

    #[test]
    fn unknown_unit_message_keeps_input() {
        let err = KalendsError::UnknownUnit("fortnight".to_string());
        assert_eq!(err.to_string(), "Unknown calendar unit: fortnight");
    }
}
