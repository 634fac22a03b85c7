//! The closed catalog of well-known holidays.
//!
//! Each entry pins down a holiday's display name and how its date is
//! derived: a fixed calendar day, a moveable rule, or a fixed day offset
//! from another catalog entry (e.g. Good Friday = Easter − 2). Keeping the
//! derivation metadata in one table prevents typos and inconsistent offsets
//! across callers.

use crate::rule::MoveableRule;
use hol_core::errors::{Error, Result};
use hol_time::{Month, Weekday};

/// Stable key identifying a well-known holiday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum KnownHoliday {
    /// Easter Sunday.
    Easter,
    /// Palm Sunday (Easter − 7).
    PalmSunday,
    /// Good Friday (Easter − 2).
    GoodFriday,
    /// Easter Monday (Easter + 1).
    EasterMonday,
    /// Ascension Day (Easter + 39).
    AscensionDay,
    /// Whit Monday (Easter + 50).
    WhitMonday,
    /// Martin Luther King Jr. Day (3rd Monday of January).
    MartinLutherKingDay,
    /// Presidents' Day (3rd Monday of February).
    PresidentsDay,
    /// Memorial Day (last Monday of May).
    MemorialDay,
    /// Mother's Day (2nd Sunday of May).
    MothersDay,
    /// Father's Day (3rd Sunday of June).
    FathersDay,
    /// Labor Day (1st Monday of September).
    LaborDay,
    /// Columbus Day (2nd Monday of October).
    ColumbusDay,
    /// Thanksgiving Day (4th Thursday of November).
    Thanksgiving,
    /// New Year's Day (January 1).
    NewYearsDay,
    /// Juneteenth (June 19).
    Juneteenth,
    /// Independence Day (July 4).
    IndependenceDay,
    /// Veterans Day (November 11).
    VeteransDay,
    /// Christmas Day (December 25).
    ChristmasDay,
}

/// Derivation metadata for a holiday defined relative to another.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Derivation {
    /// The base holiday the date is derived from.
    pub base: KnownHoliday,
    /// Fixed day offset from the base holiday's date.
    pub day_offset: i32,
}

/// Catalog metadata for one known holiday.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KnownHolidayInfo {
    /// The catalog key.
    pub key: KnownHoliday,
    /// Display name (e.g. "Good Friday").
    pub name: &'static str,
    /// Short description.
    pub description: &'static str,
    /// `true` if the date changes from year to year.
    pub moveable: bool,
    /// Present only for derived holidays.
    pub derivation: Option<Derivation>,
    /// Present only for non-derived moveable holidays.
    pub rule: Option<MoveableRule>,
}

// ── Catalog entries ───────────────────────────────────────────────────────────

/// Easter Sunday.
pub static EASTER: KnownHolidayInfo = KnownHolidayInfo {
    key: KnownHoliday::Easter,
    name: "Easter",
    description: "First Sunday after the paschal full moon",
    moveable: true,
    derivation: None,
    rule: Some(MoveableRule::EasterBased { day_offset: 0 }),
};

/// Palm Sunday.
pub static PALM_SUNDAY: KnownHolidayInfo = KnownHolidayInfo {
    key: KnownHoliday::PalmSunday,
    name: "Palm Sunday",
    description: "Sunday before Easter",
    moveable: true,
    derivation: Some(Derivation {
        base: KnownHoliday::Easter,
        day_offset: -7,
    }),
    rule: None,
};

/// Good Friday.
pub static GOOD_FRIDAY: KnownHolidayInfo = KnownHolidayInfo {
    key: KnownHoliday::GoodFriday,
    name: "Good Friday",
    description: "Friday before Easter",
    moveable: true,
    derivation: Some(Derivation {
        base: KnownHoliday::Easter,
        day_offset: -2,
    }),
    rule: None,
};

/// Easter Monday.
pub static EASTER_MONDAY: KnownHolidayInfo = KnownHolidayInfo {
    key: KnownHoliday::EasterMonday,
    name: "Easter Monday",
    description: "Monday after Easter",
    moveable: true,
    derivation: Some(Derivation {
        base: KnownHoliday::Easter,
        day_offset: 1,
    }),
    rule: None,
};

/// Ascension Day.
pub static ASCENSION_DAY: KnownHolidayInfo = KnownHolidayInfo {
    key: KnownHoliday::AscensionDay,
    name: "Ascension Day",
    description: "Thursday 39 days after Easter",
    moveable: true,
    derivation: Some(Derivation {
        base: KnownHoliday::Easter,
        day_offset: 39,
    }),
    rule: None,
};

/// Whit Monday.
pub static WHIT_MONDAY: KnownHolidayInfo = KnownHolidayInfo {
    key: KnownHoliday::WhitMonday,
    name: "Whit Monday",
    description: "Monday after Pentecost, 50 days after Easter",
    moveable: true,
    derivation: Some(Derivation {
        base: KnownHoliday::Easter,
        day_offset: 50,
    }),
    rule: None,
};

/// Martin Luther King Jr. Day.
pub static MARTIN_LUTHER_KING_DAY: KnownHolidayInfo = KnownHolidayInfo {
    key: KnownHoliday::MartinLutherKingDay,
    name: "Martin Luther King Jr. Day",
    description: "Third Monday of January",
    moveable: true,
    derivation: None,
    rule: Some(MoveableRule::NthWeekdayOfMonth {
        occurrence: 3,
        weekday: Weekday::Monday,
        month: Month::January,
    }),
};

/// Presidents' Day.
pub static PRESIDENTS_DAY: KnownHolidayInfo = KnownHolidayInfo {
    key: KnownHoliday::PresidentsDay,
    name: "Presidents' Day",
    description: "Third Monday of February",
    moveable: true,
    derivation: None,
    rule: Some(MoveableRule::NthWeekdayOfMonth {
        occurrence: 3,
        weekday: Weekday::Monday,
        month: Month::February,
    }),
};

/// Memorial Day.
pub static MEMORIAL_DAY: KnownHolidayInfo = KnownHolidayInfo {
    key: KnownHoliday::MemorialDay,
    name: "Memorial Day",
    description: "Last Monday of May",
    moveable: true,
    derivation: None,
    rule: Some(MoveableRule::LastWeekdayOfMonth {
        weekday: Weekday::Monday,
        month: Month::May,
    }),
};

/// Mother's Day.
pub static MOTHERS_DAY: KnownHolidayInfo = KnownHolidayInfo {
    key: KnownHoliday::MothersDay,
    name: "Mother's Day",
    description: "Second Sunday of May",
    moveable: true,
    derivation: None,
    rule: Some(MoveableRule::NthWeekdayOfMonth {
        occurrence: 2,
        weekday: Weekday::Sunday,
        month: Month::May,
    }),
};

/// Father's Day.
pub static FATHERS_DAY: KnownHolidayInfo = KnownHolidayInfo {
    key: KnownHoliday::FathersDay,
    name: "Father's Day",
    description: "Third Sunday of June",
    moveable: true,
    derivation: None,
    rule: Some(MoveableRule::NthWeekdayOfMonth {
        occurrence: 3,
        weekday: Weekday::Sunday,
        month: Month::June,
    }),
};

/// Labor Day.
pub static LABOR_DAY: KnownHolidayInfo = KnownHolidayInfo {
    key: KnownHoliday::LaborDay,
    name: "Labor Day",
    description: "First Monday of September",
    moveable: true,
    derivation: None,
    rule: Some(MoveableRule::NthWeekdayOfMonth {
        occurrence: 1,
        weekday: Weekday::Monday,
        month: Month::September,
    }),
};

/// Columbus Day.
pub static COLUMBUS_DAY: KnownHolidayInfo = KnownHolidayInfo {
    key: KnownHoliday::ColumbusDay,
    name: "Columbus Day",
    description: "Second Monday of October",
    moveable: true,
    derivation: None,
    rule: Some(MoveableRule::NthWeekdayOfMonth {
        occurrence: 2,
        weekday: Weekday::Monday,
        month: Month::October,
    }),
};

/// Thanksgiving Day.
pub static THANKSGIVING: KnownHolidayInfo = KnownHolidayInfo {
    key: KnownHoliday::Thanksgiving,
    name: "Thanksgiving",
    description: "Fourth Thursday of November",
    moveable: true,
    derivation: None,
    rule: Some(MoveableRule::NthWeekdayOfMonth {
        occurrence: 4,
        weekday: Weekday::Thursday,
        month: Month::November,
    }),
};

/// New Year's Day.
pub static NEW_YEARS_DAY: KnownHolidayInfo = KnownHolidayInfo {
    key: KnownHoliday::NewYearsDay,
    name: "New Year's Day",
    description: "January 1",
    moveable: false,
    derivation: None,
    rule: None,
};

/// Juneteenth.
pub static JUNETEENTH: KnownHolidayInfo = KnownHolidayInfo {
    key: KnownHoliday::Juneteenth,
    name: "Juneteenth",
    description: "June 19",
    moveable: false,
    derivation: None,
    rule: None,
};

/// Independence Day.
pub static INDEPENDENCE_DAY: KnownHolidayInfo = KnownHolidayInfo {
    key: KnownHoliday::IndependenceDay,
    name: "Independence Day",
    description: "July 4",
    moveable: false,
    derivation: None,
    rule: None,
};

/// Veterans Day.
pub static VETERANS_DAY: KnownHolidayInfo = KnownHolidayInfo {
    key: KnownHoliday::VeteransDay,
    name: "Veterans Day",
    description: "November 11",
    moveable: false,
    derivation: None,
    rule: None,
};

/// Christmas Day.
pub static CHRISTMAS_DAY: KnownHolidayInfo = KnownHolidayInfo {
    key: KnownHoliday::ChristmasDay,
    name: "Christmas Day",
    description: "December 25",
    moveable: false,
    derivation: None,
    rule: None,
};

/// Every catalog entry, in declaration order.
pub static ALL: [&KnownHolidayInfo; 19] = [
    &EASTER,
    &PALM_SUNDAY,
    &GOOD_FRIDAY,
    &EASTER_MONDAY,
    &ASCENSION_DAY,
    &WHIT_MONDAY,
    &MARTIN_LUTHER_KING_DAY,
    &PRESIDENTS_DAY,
    &MEMORIAL_DAY,
    &MOTHERS_DAY,
    &FATHERS_DAY,
    &LABOR_DAY,
    &COLUMBUS_DAY,
    &THANKSGIVING,
    &NEW_YEARS_DAY,
    &JUNETEENTH,
    &INDEPENDENCE_DAY,
    &VETERANS_DAY,
    &CHRISTMAS_DAY,
];

// ── Lookup and accessors ──────────────────────────────────────────────────────

impl KnownHoliday {
    /// Look up this key's catalog entry.
    pub fn info(&self) -> &'static KnownHolidayInfo {
        match self {
            KnownHoliday::Easter => &EASTER,
            KnownHoliday::PalmSunday => &PALM_SUNDAY,
            KnownHoliday::GoodFriday => &GOOD_FRIDAY,
            KnownHoliday::EasterMonday => &EASTER_MONDAY,
            KnownHoliday::AscensionDay => &ASCENSION_DAY,
            KnownHoliday::WhitMonday => &WHIT_MONDAY,
            KnownHoliday::MartinLutherKingDay => &MARTIN_LUTHER_KING_DAY,
            KnownHoliday::PresidentsDay => &PRESIDENTS_DAY,
            KnownHoliday::MemorialDay => &MEMORIAL_DAY,
            KnownHoliday::MothersDay => &MOTHERS_DAY,
            KnownHoliday::FathersDay => &FATHERS_DAY,
            KnownHoliday::LaborDay => &LABOR_DAY,
            KnownHoliday::ColumbusDay => &COLUMBUS_DAY,
            KnownHoliday::Thanksgiving => &THANKSGIVING,
            KnownHoliday::NewYearsDay => &NEW_YEARS_DAY,
            KnownHoliday::Juneteenth => &JUNETEENTH,
            KnownHoliday::IndependenceDay => &INDEPENDENCE_DAY,
            KnownHoliday::VeteransDay => &VETERANS_DAY,
            KnownHoliday::ChristmasDay => &CHRISTMAS_DAY,
        }
    }

    /// Display name from the catalog.
    pub fn display_name(&self) -> &'static str {
        self.info().name
    }

    /// Short description from the catalog.
    pub fn description(&self) -> &'static str {
        self.info().description
    }

    /// `true` if the holiday falls on the same calendar day every year.
    pub fn is_fixed(&self) -> bool {
        !self.info().moveable
    }

    /// `true` if the holiday's date changes from year to year.
    pub fn is_moveable(&self) -> bool {
        self.info().moveable
    }

    /// `true` if the date is a fixed offset from another holiday's date.
    pub fn is_derived(&self) -> bool {
        self.info().derivation.is_some()
    }

    /// The base holiday of a derived entry.
    ///
    /// # Errors
    /// Fails for non-derived entries.
    pub fn base_holiday(&self) -> Result<KnownHoliday> {
        match self.info().derivation {
            Some(d) => Ok(d.base),
            None => Err(Error::Catalog(format!(
                "{} is not derived from another holiday",
                self.display_name()
            ))),
        }
    }

    /// The day offset of a derived entry relative to its base.
    ///
    /// # Errors
    /// Fails for non-derived entries.
    pub fn day_offset(&self) -> Result<i32> {
        match self.info().derivation {
            Some(d) => Ok(d.day_offset),
            None => Err(Error::Catalog(format!(
                "{} is not derived from another holiday",
                self.display_name()
            ))),
        }
    }

    /// The moveable rule of a non-derived moveable entry.
    ///
    /// # Errors
    /// Fails for fixed entries (their date lives on the holiday value, not
    /// in the catalog) and for derived entries (their date comes from the
    /// base holiday).
    pub fn rule(&self) -> Result<MoveableRule> {
        match self.info().rule {
            Some(rule) => Ok(rule),
            None => Err(Error::Catalog(format!(
                "{} has no moveable rule of its own",
                self.display_name()
            ))),
        }
    }
}

impl std::fmt::Display for KnownHoliday {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
