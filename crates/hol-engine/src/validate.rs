//! Business-rule validation.
//!
//! Softer rules than the model's structural invariants: they accumulate
//! into a [`Validation`] value instead of failing fast, so callers can
//! surface an itemized report. Values that arrive from external layers
//! (e.g. deserialized documents) may not have passed through the smart
//! constructors, so every rule is re-checked here.

use hol_model::{Holiday, HolidayKind, HolidayType, Locality};

/// Outcome of a business-rule audit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Validation {
    /// All rules passed; carries a confirmation message.
    Success(String),
    /// One or more rules failed; carries every violation found.
    Failure(Vec<String>),
}

impl Validation {
    /// `true` if every rule passed.
    pub fn is_success(&self) -> bool {
        matches!(self, Validation::Success(_))
    }

    /// `true` if at least one rule failed.
    pub fn is_failure(&self) -> bool {
        !self.is_success()
    }

    /// The accumulated violation messages (empty on success).
    pub fn messages(&self) -> &[String] {
        match self {
            Validation::Success(_) => &[],
            Validation::Failure(msgs) => msgs,
        }
    }
}

impl std::fmt::Display for Validation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Validation::Success(msg) => write!(f, "{msg}"),
            Validation::Failure(msgs) => write!(f, "{}", msgs.join("; ")),
        }
    }
}

/// Audit a holiday against the business rules, accumulating every
/// violation rather than stopping at the first.
///
/// Rules checked:
/// * the holiday applies to at least one locality;
/// * a national holiday carries at least one country-level locality;
/// * a derived (moveable-from-base) holiday's base and day offset agree
///   with the catalog.
pub fn validate_holiday(holiday: &Holiday) -> Validation {
    let mut errors: Vec<String> = Vec::new();

    if holiday.localities().is_empty() {
        errors.push("holiday must apply to at least one locality".into());
    }

    if holiday.holiday_type() == HolidayType::National
        && !holiday
            .localities()
            .iter()
            .any(|l| matches!(l, Locality::Country(_)))
    {
        errors.push(format!(
            "national holiday {:?} requires at least one country-level locality",
            holiday.name()
        ));
    }

    if let HolidayKind::MoveableFromBase {
        known_holiday,
        base,
        day_offset,
        ..
    } = holiday.kind()
    {
        match known_holiday.day_offset() {
            Ok(expected) if expected == *day_offset => {}
            Ok(expected) => errors.push(format!(
                "day offset {day_offset} does not match catalog offset {expected} for {known_holiday}"
            )),
            Err(_) => errors.push(format!(
                "{known_holiday} is not derived from another holiday"
            )),
        }
        if let Ok(expected_base) = known_holiday.base_holiday() {
            if base.known_holiday() != Some(expected_base) {
                errors.push(format!(
                    "base holiday of {known_holiday} must be {expected_base}"
                ));
            }
        }
    }

    if errors.is_empty() {
        Validation::Success(format!(
            "{} passed all business-rule checks",
            holiday.display_name()
        ))
    } else {
        Validation::Failure(errors)
    }
}
