//! `HolidayType` — the closed classification of holidays.

/// Classification of a holiday by who declares and observes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HolidayType {
    /// Declared country-wide by a national government.
    National,
    /// Declared by a state / subdivision government.
    State,
    /// Declared by a city or municipality.
    Municipal,
    /// Observed for religious reasons, without legal standing.
    Religious,
    /// Promotional or commercial observance (e.g. Mother's Day).
    Commercial,
}

impl HolidayType {
    /// Return `true` for holidays declared by some level of government
    /// (national, state, or municipal).
    pub fn is_governmental(&self) -> bool {
        matches!(
            self,
            HolidayType::National | HolidayType::State | HolidayType::Municipal
        )
    }

    /// Capitalized name (`"National"`, …).
    pub fn name(&self) -> &'static str {
        match self {
            HolidayType::National => "National",
            HolidayType::State => "State",
            HolidayType::Municipal => "Municipal",
            HolidayType::Religious => "Religious",
            HolidayType::Commercial => "Commercial",
        }
    }

    /// Lowercase name (`"national"`, …), used for display names.
    pub fn lowercase(&self) -> &'static str {
        match self {
            HolidayType::National => "national",
            HolidayType::State => "state",
            HolidayType::Municipal => "municipal",
            HolidayType::Religious => "religious",
            HolidayType::Commercial => "commercial",
        }
    }
}

impl std::fmt::Display for HolidayType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
