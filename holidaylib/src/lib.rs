//! # holidaylib
//!
//! Calendar-holiday modelling, date-calculation, and validation.
//!
//! This crate is a **façade** that re-exports all public items from the
//! underlying workspace crates. Application code should depend on this
//! crate rather than the individual `hol-*` crates.
//!
//! ## Quick start
//!
//! ```rust
//! use holidaylib::engine::get_date_only;
//! use holidaylib::model::{Country, Holiday, HolidayType, KnownHoliday, Locality};
//! use holidaylib::time::Date;
//!
//! let us = Locality::from(Country::new("US", "United States").unwrap());
//! let thanksgiving = Holiday::moveable(
//!     "Thanksgiving",
//!     "Fourth Thursday of November",
//!     vec![us],
//!     HolidayType::National,
//!     KnownHoliday::Thanksgiving,
//!     Date::from_ymd(2024, 11, 28).unwrap(),
//!     true,
//! )
//! .unwrap();
//!
//! let date = get_date_only(&thanksgiving, 2025).unwrap();
//! assert_eq!(date, Date::from_ymd(2025, 11, 27).unwrap());
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Error types and shared macros.
pub use hol_core as core;

/// Date, weekday, month, and Easter-computation primitives.
pub use hol_time as time;

/// Locality hierarchy, known-holiday catalog, and holiday variant model.
pub use hol_model as model;

/// Date-calculation, formatting, and validation functions.
pub use hol_engine as engine;

/// Flat re-exports of the most commonly used items.
pub mod prelude {
    pub use hol_core::errors::{Error, Result};
    pub use hol_engine::{
        calculate_date, calculate_observed_date, format_holiday_info, get_date_only,
        get_observed_date_only, is_weekend, validate_holiday, Validation,
    };
    pub use hol_model::{
        City, Country, Holiday, HolidayKind, HolidayType, KnownHoliday, Locality, MoveableRule,
        Subdivision,
    };
    pub use hol_time::{easter_sunday, Date, Month, Weekday};
}
