//! The validation facade.

use std::time::Instant;

use crate::catalog::format::for_each_format;
use crate::catalog::{Coin, Country, DateFormat, Format, PatternCatalog};
use crate::composite::CompositeValidators;
use crate::config::ValidatorConfig;
use crate::engine::MatchEngine;
use crate::foundation::{OutputMode, ValidatorResult};
use crate::macros::format_methods;
use crate::policy::{PasswordPolicy, PasswordStrength};
use crate::rule::MatchingRule;

/// Checks strings against the built-in catalog, password policies and
/// caller-supplied rules.
///
/// Every method takes an output mode: [`Plain`](crate::foundation::Plain)
/// returns `bool`, [`Verbose`](crate::foundation::Verbose) returns a
/// [`ValidationOutcome`](crate::foundation::ValidationOutcome).
///
/// ```
/// use tessera_validator::prelude::*;
///
/// let validator = Validator::default();
/// assert!(validator.is_email("user@example.com", Plain));
/// assert!(validator.is_postal_code("K1A 0B1", Country::Ca, Plain));
///
/// let outcome = validator.is_hex_color("#zzz", Verbose);
/// assert_eq!(outcome.message, "Validation failed");
/// ```
///
/// A `Validator` holds no mutable state; share it freely across threads.
#[derive(Debug, Clone, Copy)]
pub struct Validator {
    config: ValidatorConfig,
    engine: MatchEngine,
    catalog: &'static PatternCatalog,
}

impl Default for Validator {
    fn default() -> Self {
        Self::new(ValidatorConfig::default())
    }
}

impl Validator {
    /// Creates a validator with the given configuration.
    #[must_use]
    pub fn new(config: ValidatorConfig) -> Self {
        Self {
            config,
            engine: MatchEngine::new(config.timeout()),
            catalog: PatternCatalog::builtin(),
        }
    }

    /// The configuration this validator was built with.
    #[must_use]
    pub fn config(&self) -> &ValidatorConfig {
        &self.config
    }

    /// The catalog backing the per-format methods.
    #[must_use]
    pub fn catalog(&self) -> &'static PatternCatalog {
        self.catalog
    }

    /// Compiles a custom pattern with this validator's flags.
    ///
    /// # Errors
    ///
    /// Returns [`ValidatorError::InvalidPattern`](crate::foundation::ValidatorError::InvalidPattern)
    /// if the pattern does not compile.
    pub fn compile(&self, pattern: &str) -> ValidatorResult<MatchingRule> {
        MatchingRule::with_config(pattern, &self.config)
    }

    fn composite(&self) -> CompositeValidators<'static> {
        CompositeValidators::new(self.engine, self.catalog)
    }

    // ========================================================================
    // GENERIC ENTRY POINTS
    // ========================================================================

    /// Checks `value` against an arbitrary rule.
    pub fn is_valid<M: OutputMode>(&self, value: &str, rule: &MatchingRule, mode: M) -> M::Output {
        self.engine.evaluate(Instant::now(), value, rule, mode)
    }

    /// Checks `value` against a built-in format.
    ///
    /// ```
    /// use tessera_validator::prelude::*;
    ///
    /// let format: Format = "semver".parse().unwrap();
    /// assert!(Validator::default().check(format, "1.2.3-beta.1", Plain));
    /// ```
    pub fn check<M: OutputMode>(&self, format: Format, value: &str, mode: M) -> M::Output {
        self.engine
            .evaluate(Instant::now(), value, self.catalog.rule(format), mode)
    }

    // ========================================================================
    // PASSWORDS
    // ========================================================================

    /// Checks `value` against a password policy.
    ///
    /// The rule is built for this call only; the time spent building it
    /// counts against the budget.
    ///
    /// ```
    /// use tessera_validator::prelude::*;
    ///
    /// let validator = Validator::default();
    /// let relaxed = PasswordPolicy {
    ///     min_length: 6,
    ///     require_uppercase: false,
    ///     require_special_chars: false,
    ///     ..Default::default()
    /// };
    /// assert!(validator.is_strong_password("password123", relaxed, Plain));
    /// assert!(!validator.is_strong_password("short", PasswordPolicy::default(), Plain));
    /// ```
    pub fn is_strong_password<M: OutputMode>(
        &self,
        value: &str,
        policy: PasswordPolicy,
        mode: M,
    ) -> M::Output {
        let started = Instant::now();
        let rule = policy.builder().build();
        self.engine.evaluate(started, value, &rule, mode)
    }

    /// Checks `value` against a named password preset.
    pub fn is_password<M: OutputMode>(
        &self,
        value: &str,
        strength: PasswordStrength,
        mode: M,
    ) -> M::Output {
        self.is_strong_password(value, strength.policy(), mode)
    }

    // ========================================================================
    // COMPOSITES
    // ========================================================================

    /// Checks a latitude/longitude pair. Both must conform.
    pub fn is_coordinates<M: OutputMode>(
        &self,
        latitude: &str,
        longitude: &str,
        mode: M,
    ) -> M::Output {
        self.composite()
            .coordinates(Instant::now(), latitude, longitude, mode)
    }

    /// Checks a date in the ordering named by `selector`.
    ///
    /// Unrecognised selectors fall back to `DD/MM/YYYY`.
    pub fn is_date<M: OutputMode>(&self, value: &str, selector: &str, mode: M) -> M::Output {
        self.composite().date(Instant::now(), value, selector, mode)
    }

    /// Checks a date in a known ordering.
    pub fn is_date_format<M: OutputMode>(
        &self,
        value: &str,
        format: DateFormat,
        mode: M,
    ) -> M::Output {
        self.composite()
            .date_format(Instant::now(), value, format, mode)
    }

    /// Checks a postal code for a country.
    pub fn is_postal_code<M: OutputMode>(
        &self,
        value: &str,
        country: Country,
        mode: M,
    ) -> M::Output {
        self.composite()
            .postal_code(Instant::now(), value, country, mode)
    }

    /// Checks a postal code for a country given by key (`"US"`, `"gb"`).
    ///
    /// Unknown keys reject the value.
    pub fn is_postal_code_by_key<M: OutputMode>(
        &self,
        value: &str,
        country: &str,
        mode: M,
    ) -> M::Output {
        self.composite()
            .postal_code_by_key(Instant::now(), value, country, mode)
    }

    /// Checks a cryptocurrency address.
    pub fn is_crypto_address<M: OutputMode>(&self, value: &str, coin: Coin, mode: M) -> M::Output {
        self.composite()
            .crypto_address(Instant::now(), value, coin, mode)
    }

    /// Checks a cryptocurrency address for a coin given by name or ticker.
    ///
    /// Unknown keys reject the value.
    pub fn is_crypto_address_by_key<M: OutputMode>(
        &self,
        value: &str,
        coin: &str,
        mode: M,
    ) -> M::Output {
        self.composite()
            .crypto_address_by_key(Instant::now(), value, coin, mode)
    }

    // ========================================================================
    // PER-FORMAT METHODS
    // ========================================================================

    for_each_format!(format_methods);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::{OutcomeKind, Plain, ValidatorError, Verbose};

    #[test]
    fn per_format_methods_forward_to_check() {
        let validator = Validator::default();
        assert!(validator.is_ipv4("10.0.0.1", Plain));
        assert!(!validator.is_ipv4("10.0.0", Plain));
        assert_eq!(
            validator.is_uuid("550e8400-e29b-41d4-a716-446655440000", Verbose),
            validator.check(Format::Uuid, "550e8400-e29b-41d4-a716-446655440000", Verbose)
        );
    }

    #[test]
    fn compile_applies_config_flags() {
        let validator = Validator::new(ValidatorConfig::new().case_insensitive());
        let rule = validator.compile("^hello$").unwrap();
        assert!(validator.is_valid("HELLO", &rule, Plain));

        let err = validator.compile("(").unwrap_err();
        assert!(matches!(err, ValidatorError::InvalidPattern { .. }));
    }

    #[test]
    fn password_presets() {
        let validator = Validator::default();
        assert!(validator.is_password("abcdef", PasswordStrength::Weak, Plain));
        assert!(!validator.is_password("abcdef", PasswordStrength::Medium, Plain));
        let outcome = validator.is_password("Abcdefg1!", PasswordStrength::Strong, Verbose);
        assert_eq!(outcome.kind, OutcomeKind::Matched);
        assert_eq!(outcome.matched_text(), Some("Abcdefg1!"));
    }

    #[test]
    fn validator_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Validator>();
        assert_send_sync::<MatchingRule>();
        assert_send_sync::<PatternCatalog>();
    }
}
