//! # hol-engine
//!
//! Pure functions over `hol-model` values: recomputing a holiday's date or
//! observed date for an arbitrary year, weekend checks, human-readable
//! summaries, and business-rule validation.
//!
//! Nothing here mutates. Every calculation returns a newly constructed
//! `Holiday` (or a bare `Date`), built through the model's validating
//! constructors.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Per-year date and observed-date calculation.
pub mod calculate;

/// Human-readable holiday summaries.
pub mod format;

/// Business-rule validation.
pub mod validate;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use calculate::{
    calculate_date, calculate_observed_date, get_date_only, get_observed_date_only, is_weekend,
};
pub use format::format_holiday_info;
pub use validate::{validate_holiday, Validation};
