//! Prelude module for convenient imports.
//!
//! Provides a single `use tessera_validator::prelude::*;` import that brings
//! in the facade, both output modes, outcome and error types, and every
//! discriminator enum.
//!
//! # Examples
//!
//! ```
//! use tessera_validator::prelude::*;
//!
//! let validator = Validator::new(ValidatorConfig::new().with_timeout_ms(100));
//! assert!(validator.is_crypto_address(Coin::Ethereum.example(), Coin::Ethereum, Plain));
//! assert!(validator.is_date_format("2024-02-29", DateFormat::YyyyMmDd, Plain));
//! ```

// ============================================================================
// FACADE
// ============================================================================

pub use crate::Validator;
pub use crate::config::ValidatorConfig;

// ============================================================================
// FOUNDATION: Modes, outcomes, errors
// ============================================================================

pub use crate::foundation::{
    Captures, OutcomeKind, OutputMode, Plain, ValidationOutcome, ValidatorError, ValidatorResult,
    Verbose,
};

// ============================================================================
// RULES AND CATALOG
// ============================================================================

pub use crate::catalog::{Axis, Coin, Country, DateFormat, Format, FormatCategory, PatternCatalog};
pub use crate::policy::{PasswordPolicy, PasswordStrength, PolicyBuilder};
pub use crate::rule::{Matcher, MatchingRule};
