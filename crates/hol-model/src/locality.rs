//! Country / Subdivision / City hierarchy.
//!
//! Localities are immutable value objects with structural equality. The
//! [`Locality::matches`] relation is a strict containment lattice: a country
//! matches everything nested under it, a subdivision matches only itself and
//! its own cities, a city matches only an identical city. There is no upward
//! matching.

use hol_core::errors::{Error, Result};

/// A country identified by its two-letter ISO 3166-1 alpha-2 code.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Country {
    code: String,
    name: String,
}

impl Country {
    /// Create a country from an ISO code and a display name.
    ///
    /// The code must be exactly two ASCII letters (stored uppercased); the
    /// name must not be blank.
    pub fn new(code: &str, name: &str) -> Result<Self> {
        let code = code.trim();
        if code.len() != 2 || !code.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(Error::Locality(format!(
                "country code must be two ASCII letters, got {code:?}"
            )));
        }
        let name = name.trim();
        if name.is_empty() {
            return Err(Error::Locality("country name must not be blank".into()));
        }
        Ok(Self {
            code: code.to_ascii_uppercase(),
            name: name.to_string(),
        })
    }

    /// The ISO 3166-1 alpha-2 code, uppercased.
    pub fn code(&self) -> &str {
        &self.code
    }

    /// The display name.
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl std::fmt::Display for Country {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// A first-level administrative subdivision (state, province, region).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Subdivision {
    country: Country,
    code: String,
    name: String,
}

impl Subdivision {
    /// Create a subdivision of `country` with a non-blank code and name.
    pub fn new(country: Country, code: &str, name: &str) -> Result<Self> {
        let code = code.trim();
        if code.is_empty() {
            return Err(Error::Locality("subdivision code must not be blank".into()));
        }
        let name = name.trim();
        if name.is_empty() {
            return Err(Error::Locality("subdivision name must not be blank".into()));
        }
        Ok(Self {
            country,
            code: code.to_string(),
            name: name.to_string(),
        })
    }

    /// The country this subdivision belongs to.
    pub fn country(&self) -> &Country {
        &self.country
    }

    /// The subdivision code (e.g. `"CA"` for California).
    pub fn code(&self) -> &str {
        &self.code
    }

    /// The display name.
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl std::fmt::Display for Subdivision {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}, {}", self.name, self.country.code())
    }
}

/// A city within a subdivision.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct City {
    name: String,
    subdivision: Subdivision,
    country: Country,
}

impl City {
    /// Create a city, checking that `country` agrees with the subdivision's
    /// country.
    pub fn new(name: &str, subdivision: Subdivision, country: Country) -> Result<Self> {
        let name = name.trim();
        if name.is_empty() {
            return Err(Error::Locality("city name must not be blank".into()));
        }
        if subdivision.country() != &country {
            return Err(Error::Locality(format!(
                "city country {} does not match subdivision country {}",
                country.code(),
                subdivision.country().code()
            )));
        }
        Ok(Self {
            name: name.to_string(),
            subdivision,
            country,
        })
    }

    /// Create a city, taking the country from the subdivision.
    pub fn in_subdivision(name: &str, subdivision: Subdivision) -> Result<Self> {
        let country = subdivision.country().clone();
        Self::new(name, subdivision, country)
    }

    /// The display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The subdivision this city belongs to.
    pub fn subdivision(&self) -> &Subdivision {
        &self.subdivision
    }

    /// The country this city belongs to.
    pub fn country(&self) -> &Country {
        &self.country
    }
}

impl std::fmt::Display for City {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}, {}", self.name, self.subdivision)
    }
}

/// A geographic scope at which a holiday is observed.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Locality {
    /// A whole country.
    Country(Country),
    /// A first-level subdivision.
    Subdivision(Subdivision),
    /// A single city.
    City(City),
}

impl Locality {
    /// Return `true` if `target` falls within this locality's scope.
    ///
    /// A country matches itself and every subdivision/city under it. A
    /// subdivision matches only itself and its own cities — not its country
    /// and not sibling subdivisions. A city matches only an identical city.
    pub fn matches(&self, target: &Locality) -> bool {
        match (self, target) {
            (Locality::Country(c), Locality::Country(tc)) => c == tc,
            (Locality::Country(c), Locality::Subdivision(s)) => s.country() == c,
            (Locality::Country(c), Locality::City(city)) => city.country() == c,
            (Locality::Subdivision(s), Locality::Subdivision(ts)) => s == ts,
            (Locality::Subdivision(s), Locality::City(city)) => city.subdivision() == s,
            (Locality::City(a), Locality::City(b)) => a == b,
            _ => false,
        }
    }

    /// The ISO code of the country governing this locality.
    pub fn country_code(&self) -> &str {
        match self {
            Locality::Country(c) => c.code(),
            Locality::Subdivision(s) => s.country().code(),
            Locality::City(c) => c.country().code(),
        }
    }
}

impl From<Country> for Locality {
    fn from(c: Country) -> Self {
        Locality::Country(c)
    }
}

impl From<Subdivision> for Locality {
    fn from(s: Subdivision) -> Self {
        Locality::Subdivision(s)
    }
}

impl From<City> for Locality {
    fn from(c: City) -> Self {
        Locality::City(c)
    }
}

impl std::fmt::Display for Locality {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Locality::Country(c) => write!(f, "{c}"),
            Locality::Subdivision(s) => write!(f, "{s}"),
            Locality::City(c) => write!(f, "{c}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn us() -> Country {
        Country::new("US", "United States").unwrap()
    }

    fn california() -> Subdivision {
        Subdivision::new(us(), "CA", "California").unwrap()
    }

    fn texas() -> Subdivision {
        Subdivision::new(us(), "TX", "Texas").unwrap()
    }

    fn san_francisco() -> City {
        City::in_subdivision("San Francisco", california()).unwrap()
    }

    #[test]
    fn country_code_validation() {
        assert!(Country::new("USA", "United States").is_err());
        assert!(Country::new("U", "United States").is_err());
        assert!(Country::new("U1", "United States").is_err());
        assert!(Country::new("US", "  ").is_err());
        assert_eq!(Country::new(" us ", "United States").unwrap().code(), "US");
    }

    #[test]
    fn subdivision_validation() {
        assert!(Subdivision::new(us(), "", "California").is_err());
        assert!(Subdivision::new(us(), "CA", " ").is_err());
    }

    #[test]
    fn city_country_consistency() {
        let nz = Country::new("NZ", "New Zealand").unwrap();
        assert!(City::new("San Francisco", california(), nz).is_err());
        assert!(City::new("San Francisco", california(), us()).is_ok());
        assert!(City::new("", california(), us()).is_err());
    }

    #[test]
    fn country_matches_downward() {
        let country = Locality::from(us());
        assert!(country.matches(&Locality::from(us())));
        assert!(country.matches(&Locality::from(california())));
        assert!(country.matches(&Locality::from(texas())));
        assert!(country.matches(&Locality::from(san_francisco())));

        let other = Locality::from(Country::new("NZ", "New Zealand").unwrap());
        assert!(!country.matches(&other));
    }

    #[test]
    fn subdivision_matches_only_itself_and_own_cities() {
        let ca = Locality::from(california());
        assert!(ca.matches(&Locality::from(california())));
        assert!(ca.matches(&Locality::from(san_francisco())));
        // Not its country, not siblings
        assert!(!ca.matches(&Locality::from(us())));
        assert!(!ca.matches(&Locality::from(texas())));
        let austin = City::in_subdivision("Austin", texas()).unwrap();
        assert!(!ca.matches(&Locality::from(austin)));
    }

    #[test]
    fn city_matches_only_identical_city() {
        let sf = Locality::from(san_francisco());
        assert!(sf.matches(&Locality::from(san_francisco())));
        assert!(!sf.matches(&Locality::from(california())));
        assert!(!sf.matches(&Locality::from(us())));
        let oakland = City::in_subdivision("Oakland", california()).unwrap();
        assert!(!sf.matches(&Locality::from(oakland)));
    }

    #[test]
    fn country_code_accessor() {
        assert_eq!(Locality::from(san_francisco()).country_code(), "US");
        assert_eq!(Locality::from(california()).country_code(), "US");
    }

    #[test]
    fn display_forms() {
        assert_eq!(Locality::from(us()).to_string(), "United States");
        assert_eq!(Locality::from(california()).to_string(), "California, US");
        assert_eq!(
            Locality::from(san_francisco()).to_string(),
            "San Francisco, California, US"
        );
    }
}
