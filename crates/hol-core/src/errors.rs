//! Error types for holidaylib-rs.
//!
//! A single `thiserror`-derived enum covers every structural failure in the
//! workspace. Construction-time invariant violations are rejected here;
//! softer business rules accumulate into a `Validation` value in
//! `hol-engine` instead of erroring.

use thiserror::Error;

/// The top-level error type used throughout holidaylib-rs.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// General runtime error.
    #[error("{0}")]
    Runtime(String),

    /// Precondition violated.
    #[error("precondition not satisfied: {0}")]
    Precondition(String),

    /// Date-related error (out-of-range year, invalid day for a month, …).
    #[error("date error: {0}")]
    Date(String),

    /// Locality hierarchy violation (bad ISO code, blank name,
    /// inconsistent city/subdivision/country).
    #[error("locality error: {0}")]
    Locality(String),

    /// Holiday construction violation (blank name, empty localities,
    /// variant-specific rule breach).
    #[error("holiday error: {0}")]
    Holiday(String),

    /// Known-holiday catalog misuse (derivation accessors on a non-derived
    /// entry, rule lookup on a derived entry, offset/base mismatch).
    #[error("catalog error: {0}")]
    Catalog(String),
}

/// Shorthand `Result` type used throughout holidaylib-rs.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Require a precondition, returning `Err(Error::Precondition(..))` when the
/// condition does not hold.
///
/// # Example
/// ```
/// use hol_core::{ensure, errors::Error};
/// fn occurrence(n: u8) -> hol_core::errors::Result<u8> {
///     ensure!((1..=5).contains(&n), "occurrence {n} out of range [1, 5]");
///     Ok(n)
/// }
/// assert!(occurrence(4).is_ok());
/// assert!(occurrence(0).is_err());
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::Precondition(
                format!($($msg)*)
            ));
        }
    };
}

/// Fail immediately with `Err(Error::Runtime(..))`.
///
/// # Example
/// ```
/// use hol_core::{fail, errors::Error};
/// fn always_err() -> hol_core::errors::Result<()> {
///     fail!("something went wrong");
/// }
/// assert!(always_err().is_err());
/// ```
#[macro_export]
macro_rules! fail {
    ($($msg:tt)*) => {
        return Err($crate::errors::Error::Runtime(format!($($msg)*)))
    };
}
