//! # hol-time
//!
//! Date, weekday, month, and Easter-computation primitives.
//!
//! All holiday-date arithmetic in the workspace bottoms out here: a
//! serial-number [`Date`] on the proleptic Gregorian calendar, weekday and
//! month enums, the Meeus/Jones/Butcher Easter algorithm, and the
//! mondayisation (weekend-shift) rule.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// `Date` type and day-level arithmetic.
pub mod date;

/// Gregorian Easter Sunday computation.
pub mod easter;

/// `Month` — month-of-year enum.
pub mod month;

/// `Weekday` — day-of-week enum.
pub mod weekday;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use date::{days_in_month, is_leap_year, Date};
pub use easter::{easter_sunday, MIN_EASTER_YEAR};
pub use month::Month;
pub use weekday::Weekday;
