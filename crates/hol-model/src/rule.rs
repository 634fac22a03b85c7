//! Data-driven rules for moveable holiday dates.
//!
//! A `MoveableRule` is plain data, so new moveable holidays can be added as
//! values rather than code. The calculation engine evaluates the rule for a
//! target year via [`MoveableRule::resolve`].

use hol_core::errors::{Error, Result};
use hol_time::{easter_sunday, Date, Month, Weekday};

/// How a moveable holiday's date is derived for a given year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MoveableRule {
    /// The *n*-th occurrence of a weekday in a month
    /// (e.g. Thanksgiving = 4th Thursday of November).
    NthWeekdayOfMonth {
        /// Occurrence within the month, 1–5.
        occurrence: u8,
        /// The weekday to look for.
        weekday: Weekday,
        /// The month to look in.
        month: Month,
    },
    /// The last occurrence of a weekday in a month
    /// (e.g. Memorial Day = last Monday of May).
    LastWeekdayOfMonth {
        /// The weekday to look for.
        weekday: Weekday,
        /// The month to look in.
        month: Month,
    },
    /// A fixed day offset from Easter Sunday
    /// (offset 0 is Easter itself).
    EasterBased {
        /// Days relative to Easter Sunday.
        day_offset: i32,
    },
    /// A fixed day offset from a fixed calendar date.
    RelativeToDate {
        /// The anchor month.
        month: Month,
        /// The anchor day of month.
        day: u8,
        /// Days relative to the anchor.
        day_offset: i32,
    },
}

impl MoveableRule {
    /// Evaluate the rule for `year`.
    ///
    /// # Errors
    /// Out-of-range occurrences (0, or a 5th occurrence that does not exist
    /// in the month), invalid anchor dates, and years outside the supported
    /// range are all rejected.
    pub fn resolve(&self, year: u16) -> Result<Date> {
        match *self {
            MoveableRule::NthWeekdayOfMonth {
                occurrence,
                weekday,
                month,
            } => {
                if !(1..=5).contains(&occurrence) {
                    return Err(Error::Precondition(format!(
                        "weekday occurrence {occurrence} out of range [1, 5]"
                    )));
                }
                Date::nth_weekday(occurrence, weekday, year, month.number())
            }
            MoveableRule::LastWeekdayOfMonth { weekday, month } => {
                Date::last_weekday(weekday, year, month.number())
            }
            MoveableRule::EasterBased { day_offset } => {
                easter_sunday(year)?.add_days(day_offset)
            }
            MoveableRule::RelativeToDate {
                month,
                day,
                day_offset,
            } => Date::from_ymd(year, month.number(), day)?.add_days(day_offset),
        }
    }
}
