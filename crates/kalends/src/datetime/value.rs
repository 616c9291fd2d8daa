//! The immutable [`DateTime`] wrapper: construction, field access, setters.

use chrono::{
    DateTime as ChronoDateTime, Datelike, FixedOffset, Local, NaiveDate, NaiveDateTime, NaiveTime,
    Offset, Timelike, Utc,
};

use crate::error::{KalendsError, KalendsResult};

/// An immutable calendar date/time with microsecond resolution.
///
/// The value holds wall-clock fields (year through microsecond) plus an
/// optional UTC offset tag: `Some` makes the value offset-aware, `None`
/// leaves it naive. The wall-clock fields always denote a calendar-valid
/// instant; there is no way to hold "June 31".
///
/// Every operation returns a fresh value; nothing mutates in place, so
/// values can be copied and shared freely.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DateTime {
    pub(crate) wall: NaiveDateTime,
    pub(crate) offset: Option<FixedOffset>,
}

impl DateTime {
    /// Current local wall-clock time, with no offset attached.
    #[must_use]
    pub fn now() -> Self {
        Self {
            wall: Local::now().naive_local(),
            offset: None,
        }
    }

    /// Current UTC time, tagged with the zero offset.
    #[must_use]
    pub fn utc_now() -> Self {
        let now = Utc::now();
        Self {
            wall: now.naive_utc(),
            offset: Some(Utc.fix()),
        }
    }

    /// Local wall-clock time one day ago.
    #[must_use]
    pub fn yesterday() -> Self {
        Self::now().sub_days(1)
    }

    /// Local wall-clock time one day ahead.
    #[must_use]
    pub fn tomorrow() -> Self {
        Self::now().add_days(1)
    }

    /// UTC time one day ago.
    #[must_use]
    pub fn utc_yesterday() -> Self {
        Self::utc_now().sub_days(1)
    }

    /// UTC time one day ahead.
    #[must_use]
    pub fn utc_tomorrow() -> Self {
        Self::utc_now().add_days(1)
    }

    /// Builds a naive value at midnight of the given calendar date.
    ///
    /// ## Errors
    ///
    /// Returns [`KalendsError::InvalidDate`] when the fields do not name a
    /// real date (April 31, February 30, ...).
    pub fn from_ymd(year: i32, month: u32, day: u32) -> KalendsResult<Self> {
        let date = NaiveDate::from_ymd_opt(year, month, day)
            .ok_or(KalendsError::InvalidDate { year, month, day })?;
        Ok(Self {
            wall: date.and_time(NaiveTime::MIN),
            offset: None,
        })
    }

    /// Builds a naive value from the full wall-clock field tuple.
    ///
    /// ## Errors
    ///
    /// Returns [`KalendsError::InvalidDate`] or [`KalendsError::InvalidTime`]
    /// when a field combination is out of range. Fields are never silently
    /// corrected.
    pub fn from_fields(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: u32,
        microsecond: u32,
    ) -> KalendsResult<Self> {
        let date = NaiveDate::from_ymd_opt(year, month, day)
            .ok_or(KalendsError::InvalidDate { year, month, day })?;
        let time = NaiveTime::from_hms_micro_opt(hour, minute, second, microsecond).ok_or(
            KalendsError::InvalidTime {
                hour,
                minute,
                second,
                microsecond,
            },
        )?;
        Ok(Self {
            wall: date.and_time(time),
            offset: None,
        })
    }

    /// Tags the value with a UTC offset without touching the wall clock.
    #[must_use]
    pub const fn with_offset(self, offset: FixedOffset) -> Self {
        Self {
            wall: self.wall,
            offset: Some(offset),
        }
    }

    /// Year field.
    #[must_use]
    pub fn year(&self) -> i32 {
        self.wall.year()
    }

    /// Month field, 1 through 12.
    #[must_use]
    pub fn month(&self) -> u32 {
        self.wall.month()
    }

    /// Day-of-month field, 1 through 31.
    #[must_use]
    pub fn day(&self) -> u32 {
        self.wall.day()
    }

    /// Hour field, 0 through 23.
    #[must_use]
    pub fn hour(&self) -> u32 {
        self.wall.hour()
    }

    /// Minute field, 0 through 59.
    #[must_use]
    pub fn minute(&self) -> u32 {
        self.wall.minute()
    }

    /// Second field, 0 through 59.
    #[must_use]
    pub fn second(&self) -> u32 {
        self.wall.second()
    }

    /// Sub-second fraction in microseconds, 0 through 999999.
    #[must_use]
    pub fn microsecond(&self) -> u32 {
        self.wall.time().nanosecond() / 1_000
    }

    /// The UTC offset tag, if the value is offset-aware.
    #[must_use]
    pub const fn offset(&self) -> Option<FixedOffset> {
        self.offset
    }

    /// Whether the value carries a UTC offset.
    #[must_use]
    pub const fn is_aware(&self) -> bool {
        self.offset.is_some()
    }

    /// The underlying wall-clock value.
    #[must_use]
    pub const fn naive_local(&self) -> NaiveDateTime {
        self.wall
    }

    /// The value as a chrono offset-aware datetime, when an offset is set.
    #[must_use]
    pub fn to_fixed(&self) -> Option<ChronoDateTime<FixedOffset>> {
        self.offset
            .map(|offset| ChronoDateTime::from_naive_utc_and_offset(self.wall - offset, offset))
    }

    /// Seconds since the Unix epoch.
    ///
    /// Aware values are shifted by their offset; naive values are read as
    /// UTC so the result is deterministic.
    #[must_use]
    pub fn timestamp(&self) -> i64 {
        self.utc_wall().and_utc().timestamp()
    }

    /// Microseconds since the Unix epoch, under the same rules as
    /// [`DateTime::timestamp`].
    #[must_use]
    pub fn timestamp_micros(&self) -> i64 {
        self.utc_wall().and_utc().timestamp_micros()
    }

    /// Replaces the year field.
    ///
    /// ## Errors
    ///
    /// Returns [`KalendsError::InvalidDate`] when the current month/day do
    /// not exist in the target year (February 29 outside leap years).
    pub fn with_year(self, year: i32) -> KalendsResult<Self> {
        let wall = self.wall.with_year(year).ok_or(KalendsError::InvalidDate {
            year,
            month: self.month(),
            day: self.day(),
        })?;
        Ok(Self { wall, ..self })
    }

    /// Replaces the month field.
    ///
    /// ## Errors
    ///
    /// Returns [`KalendsError::InvalidDate`] when the current day does not
    /// exist in the target month.
    pub fn with_month(self, month: u32) -> KalendsResult<Self> {
        let wall = self
            .wall
            .with_month(month)
            .ok_or(KalendsError::InvalidDate {
                year: self.year(),
                month,
                day: self.day(),
            })?;
        Ok(Self { wall, ..self })
    }

    /// Replaces the day-of-month field.
    ///
    /// ## Errors
    ///
    /// Returns [`KalendsError::InvalidDate`] when the day does not exist in
    /// the current month.
    pub fn with_day(self, day: u32) -> KalendsResult<Self> {
        let wall = self.wall.with_day(day).ok_or(KalendsError::InvalidDate {
            year: self.year(),
            month: self.month(),
            day,
        })?;
        Ok(Self { wall, ..self })
    }

    /// Replaces the hour field.
    ///
    /// ## Errors
    ///
    /// Returns [`KalendsError::InvalidTime`] when `hour` exceeds 23.
    pub fn with_hour(self, hour: u32) -> KalendsResult<Self> {
        let wall = self
            .wall
            .with_hour(hour)
            .ok_or_else(|| self.bad_time(hour, self.minute(), self.second(), self.microsecond()))?;
        Ok(Self { wall, ..self })
    }

    /// Replaces the minute field.
    ///
    /// ## Errors
    ///
    /// Returns [`KalendsError::InvalidTime`] when `minute` exceeds 59.
    pub fn with_minute(self, minute: u32) -> KalendsResult<Self> {
        let wall = self
            .wall
            .with_minute(minute)
            .ok_or_else(|| self.bad_time(self.hour(), minute, self.second(), self.microsecond()))?;
        Ok(Self { wall, ..self })
    }

    /// Replaces the second field.
    ///
    /// ## Errors
    ///
    /// Returns [`KalendsError::InvalidTime`] when `second` exceeds 59.
    pub fn with_second(self, second: u32) -> KalendsResult<Self> {
        let wall = self
            .wall
            .with_second(second)
            .ok_or_else(|| self.bad_time(self.hour(), self.minute(), second, self.microsecond()))?;
        Ok(Self { wall, ..self })
    }

    /// Replaces the sub-second fraction, in microseconds.
    ///
    /// ## Errors
    ///
    /// Returns [`KalendsError::InvalidTime`] when `microsecond` exceeds
    /// 999999.
    pub fn with_microsecond(self, microsecond: u32) -> KalendsResult<Self> {
        if microsecond >= 1_000_000 {
            return Err(self.bad_time(self.hour(), self.minute(), self.second(), microsecond));
        }
        let wall = self
            .wall
            .with_nanosecond(microsecond * 1_000)
            .ok_or_else(|| self.bad_time(self.hour(), self.minute(), self.second(), microsecond))?;
        Ok(Self { wall, ..self })
    }

    /// Wall clock normalized to UTC: aware values are shifted by their
    /// offset, naive values pass through unchanged.
    pub(crate) fn utc_wall(&self) -> NaiveDateTime {
        match self.offset {
            Some(offset) => self.wall - offset,
            None => self.wall,
        }
    }

    fn bad_time(&self, hour: u32, minute: u32, second: u32, microsecond: u32) -> KalendsError {
        KalendsError::InvalidTime {
            hour,
            minute,
            second,
            microsecond,
        }
    }
}

impl From<NaiveDateTime> for DateTime {
    fn from(wall: NaiveDateTime) -> Self {
        Self { wall, offset: None }
    }
}

impl From<NaiveDate> for DateTime {
    fn from(date: NaiveDate) -> Self {
        Self {
            wall: date.and_time(NaiveTime::MIN),
            offset: None,
        }
    }
}

impl From<ChronoDateTime<Utc>> for DateTime {
    fn from(value: ChronoDateTime<Utc>) -> Self {
        Self {
            wall: value.naive_utc(),
            offset: Some(Utc.fix()),
        }
    }
}

impl From<ChronoDateTime<FixedOffset>> for DateTime {
    fn from(value: ChronoDateTime<FixedOffset>) -> Self {
        Self {
            wall: value.naive_local(),
            offset: Some(*value.offset()),
        }
    }
}

impl From<ChronoDateTime<Local>> for DateTime {
    fn from(value: ChronoDateTime<Local>) -> Self {
        Self {
            wall: value.naive_local(),
            offset: Some(value.offset().fix()),
        }
    }
}
