//! # tessera-validator
//!
//! Format validation for strings: network identifiers, numbers, naming
//! conventions, hashes, structured identifiers, postal codes, coin addresses,
//! dates and password policies.
//!
//! ## Quick Start
//!
//! ```
//! use tessera_validator::prelude::*;
//!
//! let validator = Validator::default();
//!
//! // Plain mode answers yes or no.
//! assert!(validator.is_email("user@example.com", Plain));
//! assert!(!validator.is_ipv4("256.1.1.1", Plain));
//!
//! // Verbose mode explains itself and carries the captures.
//! let outcome = validator.is_rgb_color("rgb(255, 128, 0)", Verbose);
//! assert!(outcome.is_valid);
//! assert_eq!(outcome.matches.unwrap()[1].as_deref(), Some("255"));
//! ```
//!
//! ## Layout
//!
//! - [`catalog`]: the built-in [`Format`](catalog::Format) table and the
//!   postal, coin and date sub-catalogs, compiled once per process
//! - [`policy`]: password policies and the [`PolicyBuilder`](policy::PolicyBuilder)
//! - [`engine`]: applies a rule to a value under a time budget
//! - [`composite`]: coordinates, dates with a fallback ordering, keyed lookups
//! - [`Validator`]: the facade tying it together
//!
//! Validation calls never return `Result` and never panic. Construction
//! (custom patterns, parsing keys) reports
//! [`ValidatorError`](foundation::ValidatorError).

pub mod catalog;
pub mod composite;
pub mod config;
pub mod engine;
pub mod foundation;
mod macros;
pub mod policy;
pub mod prelude;
pub mod rule;
mod validator;

pub use config::ValidatorConfig;
pub use policy::PasswordPolicy;
pub use validator::Validator;
