//! Gregorian Easter Sunday computation.
//!
//! Uses the Meeus/Jones/Butcher algorithm, which is exact for every year of
//! the Gregorian calendar (i.e. from 1583 onwards). The intermediate values
//! are the golden number (`a`, position in the 19-year lunar cycle) and the
//! epact-derived quantities from which the date of the paschal full moon
//! follows.

use crate::date::Date;
use hol_core::errors::{Error, Result};

/// First year for which the Gregorian Easter computation is defined.
pub const MIN_EASTER_YEAR: u16 = 1583;

/// Compute the date of Easter Sunday for `year`.
///
/// # Errors
/// Returns an error for years before [`MIN_EASTER_YEAR`] or beyond the
/// supported [`Date`] range.
///
/// # Example
/// ```
/// use hol_time::{easter_sunday, Date};
/// assert_eq!(easter_sunday(2024).unwrap(), Date::from_ymd(2024, 3, 31).unwrap());
/// ```
pub fn easter_sunday(year: u16) -> Result<Date> {
    if year < MIN_EASTER_YEAR {
        return Err(Error::Date(format!(
            "Easter is undefined before {MIN_EASTER_YEAR} (got year {year})"
        )));
    }
    let y = year as i32;
    let a = y % 19; // golden number - 1
    let b = y / 100;
    let c = y % 100;
    let d = b / 4;
    let e = b % 4;
    let f = (b + 8) / 25;
    let g = (b - f + 1) / 3;
    let h = (19 * a + b - d - g + 15) % 30;
    let i = c / 4;
    let k = c % 4;
    let l = (32 + 2 * e + 2 * i - h - k) % 7;
    let m = (a + 11 * h + 22 * l) / 451;
    let month = (h + l - 7 * m + 114) / 31;
    let day = (h + l - 7 * m + 114) % 31 + 1;
    Date::from_ymd(year, month as u8, day as u8)
}
