//! # hol-model
//!
//! The holiday data model: the geographical locality hierarchy, the closed
//! known-holiday catalog, moveable-date rules, and the `Holiday` variant
//! model itself.
//!
//! Everything here is an immutable value with structural equality. Smart
//! constructors validate every invariant up front; a successfully
//! constructed value cannot represent an illegal state. Per-year date
//! computation lives in `hol-engine`.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// `Holiday` — the closed set of holiday shapes.
pub mod holiday;

/// `HolidayType` — national/state/municipal/religious/commercial.
pub mod holiday_type;

/// The closed catalog of well-known holidays.
pub mod known_holiday;

/// Country / Subdivision / City hierarchy.
pub mod locality;

/// Data-driven rules for moveable holiday dates.
pub mod rule;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use holiday::{Holiday, HolidayKind};
pub use holiday_type::HolidayType;
pub use known_holiday::{Derivation, KnownHoliday, KnownHolidayInfo};
pub use locality::{City, Country, Locality, Subdivision};
pub use rule::MoveableRule;
