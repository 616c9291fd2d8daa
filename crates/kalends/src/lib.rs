//! Chainable, immutable calendar date/time values.
//!
//! `kalends` wraps [`chrono`]'s wall-clock types in a single immutable
//! [`DateTime`] value and layers calendar arithmetic on top: month and year
//! addition with day clamping, period boundaries (`start_of` / `end_of`),
//! quarters, week numbering, component-wise differences, and field-wise
//! comparisons. Every operation returns a fresh value, so calls chain freely
//! and values can be shared across threads without synchronization.
//!
//! ```
//! use kalends::{CalendarUnit, DateTime};
//!
//! let payday = DateTime::from_fields(2021, 1, 31, 9, 0, 0, 0)?;
//! let next = payday.add(CalendarUnit::Month, 1);
//!
//! // Day clamps to the end of February instead of spilling into March.
//! assert_eq!((next.year(), next.month(), next.day()), (2021, 2, 28));
//! assert_eq!(next.start_of(CalendarUnit::Week).day_of_week(), 0);
//! # Ok::<(), kalends::KalendsError>(())
//! ```

pub mod datetime;
pub mod error;

pub use datetime::{
    CalendarUnit, DateTime, Difference, WeekNumbering, days_in_month, is_leap_year, quarter_table,
};
pub use error::{KalendsError, KalendsResult};
