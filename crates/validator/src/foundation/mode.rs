//! Sealed output modes.
//!
//! Every validation call takes its output mode as a value argument. The mode
//! fixes the return type at compile time, so a plain call can never yield a
//! diagnostic and a verbose call can never yield a bare `bool`.
//!
//! ```
//! use tessera_validator::prelude::*;
//!
//! let validator = Validator::default();
//! let plain: bool = validator.is_ipv4("192.168.1.1", Plain);
//! let verbose: ValidationOutcome = validator.is_ipv4("192.168.1.1", Verbose);
//! assert_eq!(plain, verbose.is_valid);
//! ```
//!
//! The trait is sealed: these two modes are the only ones.

use crate::foundation::ValidationOutcome;

mod sealed {
    pub trait Sealed {}
}

/// Selects the shape of a validation result.
pub trait OutputMode: sealed::Sealed + Copy {
    /// What the validation call returns in this mode.
    type Output;

    /// Whether the engine needs to collect captures and messages.
    const VERBOSE: bool;

    /// Collapses a full outcome into this mode's output.
    fn finish(outcome: ValidationOutcome) -> Self::Output;

    /// Short-circuit for callers that already know the verdict and have no
    /// match data to report.
    fn verdict(is_valid: bool, outcome: impl FnOnce() -> ValidationOutcome) -> Self::Output;
}

/// Default mode: the call returns `bool`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Plain;

/// Verbose mode: the call returns a [`ValidationOutcome`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Verbose;

impl sealed::Sealed for Plain {}
impl sealed::Sealed for Verbose {}

impl OutputMode for Plain {
    type Output = bool;

    const VERBOSE: bool = false;

    #[inline]
    fn finish(outcome: ValidationOutcome) -> bool {
        outcome.is_valid
    }

    #[inline]
    fn verdict(is_valid: bool, _outcome: impl FnOnce() -> ValidationOutcome) -> bool {
        is_valid
    }
}

impl OutputMode for Verbose {
    type Output = ValidationOutcome;

    const VERBOSE: bool = true;

    #[inline]
    fn finish(outcome: ValidationOutcome) -> ValidationOutcome {
        outcome
    }

    #[inline]
    fn verdict(_is_valid: bool, outcome: impl FnOnce() -> ValidationOutcome) -> ValidationOutcome {
        outcome()
    }
}
