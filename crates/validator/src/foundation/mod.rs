//! Foundation types shared by every layer of the validator.
//!
//! - **Modes**: [`OutputMode`], [`Plain`], [`Verbose`]
//! - **Results**: [`ValidationOutcome`], [`OutcomeKind`], [`Captures`]
//! - **Errors**: [`ValidatorError`]
//!
//! # Architecture
//!
//! Validation calls never fail with `Err`. Whatever happens while checking a
//! value (no match, spent budget, faulting rule) is reported through the
//! call's return value, whose shape is selected by the output mode:
//!
//! ```
//! use tessera_validator::prelude::*;
//!
//! let validator = Validator::default();
//! assert!(!validator.is_email("not-an-email", Plain));
//!
//! let outcome = validator.is_email("not-an-email", Verbose);
//! assert_eq!(outcome.kind, OutcomeKind::NoMatch);
//! ```
//!
//! [`ValidatorError`] is reserved for construction: compiling a custom
//! pattern or parsing a discriminator from a string.

pub mod error;
pub mod mode;
pub mod outcome;

pub use error::ValidatorError;
pub use mode::{OutputMode, Plain, Verbose};
pub use outcome::{Captures, OutcomeKind, ValidationOutcome};

/// Result of a construction step that can fail.
pub type ValidatorResult<T> = Result<T, ValidatorError>;
