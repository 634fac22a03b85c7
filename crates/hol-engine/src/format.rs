//! Human-readable holiday summaries.

use hol_model::{Holiday, HolidayKind};
use hol_time::Month;

/// Produce a one-line summary of a holiday based on its stored date, e.g.
/// `"Thanksgiving - National holiday in United States on November 28 (mondayised)"`.
///
/// Observed holidays whose observed date differs from the nominal date get
/// an `(observed <Month> <day>)` annotation instead.
pub fn format_holiday_info(holiday: &Holiday) -> String {
    let localities = holiday
        .localities()
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ");
    let date = holiday.date();
    let month = Month::from_number(date.month()).expect("month always in 1..=12");
    let mut out = format!(
        "{} - {} holiday in {} on {} {}",
        holiday.name(),
        holiday.holiday_type(),
        localities,
        month,
        date.day_of_month()
    );
    match holiday.kind() {
        HolidayKind::Observed { date, observed, .. } if observed != date => {
            let om = Month::from_number(observed.month()).expect("month always in 1..=12");
            out.push_str(&format!(" (observed {} {})", om, observed.day_of_month()));
        }
        _ => {
            if holiday.mondayisation() {
                out.push_str(" (mondayised)");
            }
        }
    }
    out
}
