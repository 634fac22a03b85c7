//! # hol-core
//!
//! Error types and shared macros for holidaylib-rs.
//!
//! Every fallible operation in the workspace returns
//! [`errors::Result`], and every structural violation (blank name,
//! inconsistent locality hierarchy, out-of-range date, catalog mismatch)
//! is reported through [`errors::Error`]. Business-rule audits are *not*
//! errors and live in `hol-engine`.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Error types and the `ensure!` / `fail!` macros.
pub mod errors;

pub use errors::{Error, Result};
