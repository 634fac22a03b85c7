//! `Holiday` — the closed set of holiday shapes.
//!
//! A holiday is an immutable value: common descriptive fields plus one of
//! four mutually exclusive shapes ([`HolidayKind`]). Smart constructors
//! validate every structural invariant; recalculation (in `hol-engine`)
//! builds new values through the same constructors and never mutates.

use crate::holiday_type::HolidayType;
use crate::known_holiday::KnownHoliday;
use crate::locality::Locality;
use hol_core::ensure;
use hol_core::errors::{Error, Result};
use hol_time::{Date, Month};

/// The shape of a holiday — how its date is determined.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HolidayKind {
    /// Recurs on the same calendar day every year; the year component of
    /// `date` is informational only.
    Fixed {
        /// The holiday's calendar date.
        date: Date,
    },
    /// Recurs on a fixed day but is administratively shifted off weekends.
    Observed {
        /// The nominal calendar date.
        date: Date,
        /// The date the holiday is actually observed.
        observed: Date,
        /// Whether the weekend-shift rule applies.
        mondayisation: bool,
    },
    /// Computed every year from a catalog rule (Easter, weekday-ordinal
    /// holidays).
    Moveable {
        /// Catalog key; must be moveable and non-derived.
        known_holiday: KnownHoliday,
        /// The last-computed date.
        date: Date,
        /// Whether the weekend-shift rule applies when observing.
        mondayisation: bool,
    },
    /// Computed as a fixed day offset from another moveable holiday
    /// (e.g. Good Friday = Easter − 2).
    MoveableFromBase {
        /// Catalog key; must be derived.
        known_holiday: KnownHoliday,
        /// The base holiday; must itself be `Moveable` and match the
        /// catalog's expected base.
        base: Box<Holiday>,
        /// Day offset from the base date; must equal the catalog's offset.
        day_offset: i32,
        /// The last-computed date.
        date: Date,
        /// Whether the weekend-shift rule applies when observing.
        mondayisation: bool,
    },
}

/// A calendar holiday.
///
/// Equality and hashing are fully structural, over every field.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Holiday {
    name: String,
    description: String,
    localities: Vec<Locality>,
    holiday_type: HolidayType,
    kind: HolidayKind,
}

impl Holiday {
    // ── Smart constructors ───────────────────────────────────────────────────

    /// Create a fixed-date holiday.
    pub fn fixed(
        name: &str,
        description: &str,
        localities: Vec<Locality>,
        holiday_type: HolidayType,
        date: Date,
    ) -> Result<Self> {
        Self::build(name, description, localities, holiday_type, HolidayKind::Fixed { date })
    }

    /// Create a fixed-date holiday from year/month/day components.
    pub fn fixed_on(
        name: &str,
        description: &str,
        localities: Vec<Locality>,
        holiday_type: HolidayType,
        year: u16,
        month: Month,
        day: u8,
    ) -> Result<Self> {
        let date = Date::from_ymd(year, month.number(), day)?;
        Self::fixed(name, description, localities, holiday_type, date)
    }

    /// Create an observed holiday carrying both the nominal and the
    /// observed date.
    ///
    /// If `mondayisation` is set and `observed == date`, the date must not
    /// fall on a weekend — otherwise the observed date was never actually
    /// adjusted, which is inconsistent.
    pub fn observed(
        name: &str,
        description: &str,
        localities: Vec<Locality>,
        holiday_type: HolidayType,
        date: Date,
        observed: Date,
        mondayisation: bool,
    ) -> Result<Self> {
        if mondayisation && observed == date && date.is_weekend() {
            return Err(Error::Holiday(format!(
                "observed holiday {name:?}: date {date:?} falls on a weekend \
                 but the observed date was not adjusted"
            )));
        }
        Self::build(
            name,
            description,
            localities,
            holiday_type,
            HolidayKind::Observed {
                date,
                observed,
                mondayisation,
            },
        )
    }

    /// Create a moveable holiday computed from the catalog rule of
    /// `known_holiday`.
    pub fn moveable(
        name: &str,
        description: &str,
        localities: Vec<Locality>,
        holiday_type: HolidayType,
        known_holiday: KnownHoliday,
        date: Date,
        mondayisation: bool,
    ) -> Result<Self> {
        if !known_holiday.is_moveable() {
            return Err(Error::Holiday(format!(
                "{known_holiday} is fixed and cannot back a moveable holiday"
            )));
        }
        if known_holiday.is_derived() {
            return Err(Error::Holiday(format!(
                "{known_holiday} is derived; build it as moveable-from-base"
            )));
        }
        Self::build(
            name,
            description,
            localities,
            holiday_type,
            HolidayKind::Moveable {
                known_holiday,
                date,
                mondayisation,
            },
        )
    }

    /// Create a holiday computed as a fixed day offset from another
    /// moveable holiday.
    ///
    /// The base holiday and the day offset are cross-checked against the
    /// catalog's derivation metadata for `known_holiday`; any mismatch is
    /// rejected.
    #[allow(clippy::too_many_arguments)]
    pub fn moveable_from_base(
        name: &str,
        description: &str,
        localities: Vec<Locality>,
        holiday_type: HolidayType,
        known_holiday: KnownHoliday,
        base: Holiday,
        day_offset: i32,
        date: Date,
        mondayisation: bool,
    ) -> Result<Self> {
        if !known_holiday.is_derived() {
            return Err(Error::Holiday(format!(
                "{known_holiday} is not derived; build it as a moveable holiday"
            )));
        }
        let expected_base = known_holiday.base_holiday()?;
        let expected_offset = known_holiday.day_offset()?;
        match base.kind() {
            HolidayKind::Moveable { known_holiday: base_known, .. } => {
                if *base_known != expected_base {
                    return Err(Error::Holiday(format!(
                        "{known_holiday} must be based on {expected_base}, got {base_known}"
                    )));
                }
            }
            _ => {
                return Err(Error::Holiday(format!(
                    "base of {known_holiday} must be a moveable holiday"
                )));
            }
        }
        if day_offset != expected_offset {
            return Err(Error::Holiday(format!(
                "{known_holiday} has catalog offset {expected_offset}, got {day_offset}"
            )));
        }
        Self::build(
            name,
            description,
            localities,
            holiday_type,
            HolidayKind::MoveableFromBase {
                known_holiday,
                base: Box::new(base),
                day_offset,
                date,
                mondayisation,
            },
        )
    }

    fn build(
        name: &str,
        description: &str,
        localities: Vec<Locality>,
        holiday_type: HolidayType,
        kind: HolidayKind,
    ) -> Result<Self> {
        ensure!(!name.trim().is_empty(), "holiday name must not be blank");
        ensure!(
            !localities.is_empty(),
            "holiday {name:?} must apply to at least one locality"
        );
        Ok(Self {
            name: name.trim().to_string(),
            description: description.trim().to_string(),
            localities,
            holiday_type,
            kind,
        })
    }

    // ── Accessors ─────────────────────────────────────────────────────────────

    /// The holiday's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The holiday's description (possibly empty).
    pub fn description(&self) -> &str {
        &self.description
    }

    /// The localities the holiday applies to (never empty).
    pub fn localities(&self) -> &[Locality] {
        &self.localities
    }

    /// The holiday's classification.
    pub fn holiday_type(&self) -> HolidayType {
        self.holiday_type
    }

    /// The holiday's shape.
    pub fn kind(&self) -> &HolidayKind {
        &self.kind
    }

    /// The stored (last-computed or nominal) calendar date.
    pub fn date(&self) -> Date {
        match &self.kind {
            HolidayKind::Fixed { date }
            | HolidayKind::Observed { date, .. }
            | HolidayKind::Moveable { date, .. }
            | HolidayKind::MoveableFromBase { date, .. } => *date,
        }
    }

    /// The stored observed date, for `Observed` holidays.
    pub fn observed_date(&self) -> Option<Date> {
        match &self.kind {
            HolidayKind::Observed { observed, .. } => Some(*observed),
            _ => None,
        }
    }

    /// Whether the weekend-shift rule applies. `false` for fixed holidays.
    pub fn mondayisation(&self) -> bool {
        match &self.kind {
            HolidayKind::Fixed { .. } => false,
            HolidayKind::Observed { mondayisation, .. }
            | HolidayKind::Moveable { mondayisation, .. }
            | HolidayKind::MoveableFromBase { mondayisation, .. } => *mondayisation,
        }
    }

    /// The catalog key backing a moveable or derived holiday.
    pub fn known_holiday(&self) -> Option<KnownHoliday> {
        match &self.kind {
            HolidayKind::Moveable { known_holiday, .. }
            | HolidayKind::MoveableFromBase { known_holiday, .. } => Some(*known_holiday),
            _ => None,
        }
    }

    /// The day offset from the base holiday, for derived holidays.
    pub fn day_offset(&self) -> Option<i32> {
        match &self.kind {
            HolidayKind::MoveableFromBase { day_offset, .. } => Some(*day_offset),
            _ => None,
        }
    }

    /// The base holiday, for derived holidays.
    pub fn base(&self) -> Option<&Holiday> {
        match &self.kind {
            HolidayKind::MoveableFromBase { base, .. } => Some(base),
            _ => None,
        }
    }

    // ── Derived queries ──────────────────────────────────────────────────────

    /// `"<name> (<type, lowercased>)"`, e.g. `"Easter (religious)"`.
    pub fn display_name(&self) -> String {
        format!("{} ({})", self.name, self.holiday_type.lowercase())
    }

    /// `true` if any of the holiday's localities hierarchically matches
    /// `target`.
    pub fn applies_to(&self, target: &Locality) -> bool {
        self.localities.iter().any(|l| l.matches(target))
    }

    /// `true` for national, state, and municipal holidays.
    pub fn is_governmental(&self) -> bool {
        self.holiday_type.is_governmental()
    }

    /// `true` if any locality lies in the country with the given ISO code.
    pub fn is_observed_in_country(&self, country_code: &str) -> bool {
        self.localities
            .iter()
            .any(|l| l.country_code().eq_ignore_ascii_case(country_code.trim()))
    }

    // ── Functional updates ───────────────────────────────────────────────────

    /// Return a copy with the stored date replaced.
    ///
    /// The variant is preserved; for `Observed` holidays the observed date
    /// is left unchanged and the consistency invariant is re-checked.
    pub fn with_date(&self, date: Date) -> Result<Self> {
        let mut out = self.clone();
        match &mut out.kind {
            HolidayKind::Fixed { date: d }
            | HolidayKind::Moveable { date: d, .. }
            | HolidayKind::MoveableFromBase { date: d, .. } => *d = date,
            HolidayKind::Observed {
                date: d,
                observed,
                mondayisation,
            } => {
                if *mondayisation && *observed == date && date.is_weekend() {
                    return Err(Error::Holiday(format!(
                        "observed holiday {:?}: date {date:?} falls on a weekend \
                         but the observed date was not adjusted",
                        self.name
                    )));
                }
                *d = date;
            }
        }
        Ok(out)
    }
}

impl std::fmt::Display for Holiday {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
