//! Per-year date and observed-date calculation.
//!
//! One pure function per concern. Recalculating never mutates the input; a
//! new `Holiday` of the same shape is returned with its date fields
//! recomputed for the target year.
//!
//! For moveable holidays with mondayisation, [`calculate_observed_date`]
//! keeps the result in its original shape and overwrites the date field
//! with the shifted date; the unshifted date remains available through
//! [`get_date_only`].

use hol_core::errors::Result;
use hol_model::{Holiday, HolidayKind};
use hol_time::Date;

/// Recompute `holiday`'s date for `year`, returning a new value of the same
/// shape.
///
/// * `Fixed`: the year component of the date is replaced.
/// * `Observed`: the nominal date gets the new year; the observed date is
///   recomputed from the mondayisation flag.
/// * `Moveable`: the catalog rule for the known holiday is evaluated.
/// * `MoveableFromBase`: the base holiday is recomputed for `year` and the
///   day offset applied.
pub fn calculate_date(holiday: &Holiday, year: u16) -> Result<Holiday> {
    match holiday.kind() {
        HolidayKind::Fixed { date } => holiday.with_date(date.with_year(year)?),
        HolidayKind::Observed {
            date,
            mondayisation,
            ..
        } => {
            let nominal = date.with_year(year)?;
            let observed = if *mondayisation {
                nominal.mondayised()?
            } else {
                nominal
            };
            Holiday::observed(
                holiday.name(),
                holiday.description(),
                holiday.localities().to_vec(),
                holiday.holiday_type(),
                nominal,
                observed,
                *mondayisation,
            )
        }
        HolidayKind::Moveable { known_holiday, .. } => {
            holiday.with_date(known_holiday.rule()?.resolve(year)?)
        }
        HolidayKind::MoveableFromBase {
            known_holiday,
            base,
            day_offset,
            mondayisation,
            ..
        } => {
            let new_base = calculate_date(base, year)?;
            let date = new_base.date().add_days(*day_offset)?;
            Holiday::moveable_from_base(
                holiday.name(),
                holiday.description(),
                holiday.localities().to_vec(),
                holiday.holiday_type(),
                *known_holiday,
                new_base,
                *day_offset,
                date,
                *mondayisation,
            )
        }
    }
}

/// Like [`calculate_date`], but moveable holidays with mondayisation get
/// the weekend-shift rule applied to the freshly computed date.
///
/// The result stays in its original shape; the shifted date overwrites the
/// date field.
pub fn calculate_observed_date(holiday: &Holiday, year: u16) -> Result<Holiday> {
    match holiday.kind() {
        HolidayKind::Fixed { .. } | HolidayKind::Observed { .. } => calculate_date(holiday, year),
        HolidayKind::Moveable {
            known_holiday,
            mondayisation,
            ..
        } => {
            let date = known_holiday.rule()?.resolve(year)?;
            let date = if *mondayisation { date.mondayised()? } else { date };
            holiday.with_date(date)
        }
        HolidayKind::MoveableFromBase {
            known_holiday,
            base,
            day_offset,
            mondayisation,
            ..
        } => {
            let new_base = calculate_date(base, year)?;
            let date = new_base.date().add_days(*day_offset)?;
            let date = if *mondayisation { date.mondayised()? } else { date };
            Holiday::moveable_from_base(
                holiday.name(),
                holiday.description(),
                holiday.localities().to_vec(),
                holiday.holiday_type(),
                *known_holiday,
                new_base,
                *day_offset,
                date,
                *mondayisation,
            )
        }
    }
}

/// Compute just the holiday's date for `year`, without rebuilding the
/// whole value.
pub fn get_date_only(holiday: &Holiday, year: u16) -> Result<Date> {
    match holiday.kind() {
        HolidayKind::Fixed { date } | HolidayKind::Observed { date, .. } => date.with_year(year),
        HolidayKind::Moveable { known_holiday, .. } => known_holiday.rule()?.resolve(year),
        HolidayKind::MoveableFromBase {
            base, day_offset, ..
        } => get_date_only(base, year)?.add_days(*day_offset),
    }
}

/// Compute just the holiday's observed date for `year`.
pub fn get_observed_date_only(holiday: &Holiday, year: u16) -> Result<Date> {
    let date = get_date_only(holiday, year)?;
    if holiday.mondayisation() {
        date.mondayised()
    } else {
        Ok(date)
    }
}

/// `true` if the holiday's date for `year` falls on a Saturday or Sunday.
pub fn is_weekend(holiday: &Holiday, year: u16) -> Result<bool> {
    Ok(get_date_only(holiday, year)?.is_weekend())
}
