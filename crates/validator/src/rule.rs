//! Matching rules.
//!
//! A [`MatchingRule`] is an immutable, precompiled test over a string. Rules
//! come from three places:
//!
//! - the built-in [`PatternCatalog`](crate::catalog::PatternCatalog), as
//!   compiled regular expressions;
//! - the [`PolicyBuilder`](crate::policy::PolicyBuilder), as a password
//!   policy predicate;
//! - callers, either as a pattern string or as a custom [`Matcher`].
//!
//! Cloning a rule shares the compiled program.

use std::fmt;
use std::sync::Arc;

use regex::{Regex, RegexBuilder};

use crate::config::ValidatorConfig;
use crate::foundation::{Captures, ValidatorError, ValidatorResult};
use crate::policy::PasswordPolicy;

// ============================================================================
// MATCHER TRAIT
// ============================================================================

/// A caller-defined matching strategy.
///
/// Implement this when a check cannot be expressed as a regular expression.
/// Returning `Err` reports an evaluation fault; the engine absorbs it and the
/// validation call reports the value as invalid.
///
/// # Examples
///
/// ```
/// use tessera_validator::prelude::*;
/// use tessera_validator::rule::Matcher;
///
/// #[derive(Debug)]
/// struct Palindrome;
///
/// impl Matcher for Palindrome {
///     fn captures(&self, input: &str) -> Result<Option<Captures>, ValidatorError> {
///         let reversed: String = input.chars().rev().collect();
///         Ok((input == reversed).then(|| smallvec::smallvec![Some(input.to_string())]))
///     }
/// }
///
/// let rule = MatchingRule::custom(Palindrome);
/// assert!(Validator::default().is_valid("level", &rule, Plain));
/// ```
pub trait Matcher: fmt::Debug + Send + Sync {
    /// Returns the captures of the first match, or `None` if `input` does
    /// not satisfy the matcher.
    fn captures(&self, input: &str) -> Result<Option<Captures>, ValidatorError>;

    /// Returns whether `input` satisfies the matcher.
    fn is_match(&self, input: &str) -> Result<bool, ValidatorError> {
        self.captures(input).map(|captures| captures.is_some())
    }
}

// ============================================================================
// MATCHING RULE
// ============================================================================

#[derive(Clone)]
enum RuleKind {
    Pattern(Regex),
    Policy(PasswordPolicy),
    Custom(Arc<dyn Matcher>),
}

/// An opaque, immutable matching rule.
#[derive(Clone)]
pub struct MatchingRule {
    kind: RuleKind,
}

impl MatchingRule {
    /// Compiles a pattern with default flags.
    ///
    /// Matching follows the pattern as written: anchor it with `^...$` for a
    /// whole-value match.
    pub fn new(pattern: &str) -> ValidatorResult<Self> {
        Regex::new(pattern)
            .map(Self::from_regex)
            .map_err(|e| ValidatorError::invalid_pattern(pattern, &e))
    }

    /// Compiles a pattern with the flags of a validator configuration.
    pub fn with_config(pattern: &str, config: &ValidatorConfig) -> ValidatorResult<Self> {
        RegexBuilder::new(pattern)
            .case_insensitive(!config.case_sensitive)
            .multi_line(config.multiline)
            .unicode(config.unicode)
            .build()
            .map(Self::from_regex)
            .map_err(|e| ValidatorError::invalid_pattern(pattern, &e))
    }

    /// Wraps an already compiled regular expression.
    pub fn from_regex(regex: Regex) -> Self {
        Self {
            kind: RuleKind::Pattern(regex),
        }
    }

    /// Wraps a custom matcher.
    pub fn custom(matcher: impl Matcher + 'static) -> Self {
        Self {
            kind: RuleKind::Custom(Arc::new(matcher)),
        }
    }

    pub(crate) fn policy(policy: PasswordPolicy) -> Self {
        Self {
            kind: RuleKind::Policy(policy),
        }
    }

    /// The source pattern, if this rule is a regular expression.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match &self.kind {
            RuleKind::Pattern(regex) => Some(regex.as_str()),
            RuleKind::Policy(_) | RuleKind::Custom(_) => None,
        }
    }

    /// Returns whether `input` satisfies the rule.
    pub fn is_match(&self, input: &str) -> ValidatorResult<bool> {
        match &self.kind {
            RuleKind::Pattern(regex) => Ok(regex.is_match(input)),
            RuleKind::Policy(policy) => Ok(policy.is_satisfied_by(input)),
            RuleKind::Custom(matcher) => matcher.is_match(input),
        }
    }

    /// Returns the captures of the first match, or `None` if `input` does not
    /// satisfy the rule.
    pub fn captures(&self, input: &str) -> ValidatorResult<Option<Captures>> {
        match &self.kind {
            RuleKind::Pattern(regex) => Ok(regex.captures(input).map(|caps| {
                caps.iter()
                    .map(|group| group.map(|m| m.as_str().to_string()))
                    .collect()
            })),
            RuleKind::Policy(policy) => Ok(policy
                .is_satisfied_by(input)
                .then(|| smallvec::smallvec![Some(input.to_string())])),
            RuleKind::Custom(matcher) => matcher.captures(input),
        }
    }
}

impl fmt::Debug for MatchingRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            RuleKind::Pattern(regex) => f.debug_tuple("Pattern").field(&regex.as_str()).finish(),
            RuleKind::Policy(policy) => f.debug_tuple("Policy").field(policy).finish(),
            RuleKind::Custom(matcher) => f.debug_tuple("Custom").field(matcher).finish(),
        }
    }
}

impl From<Regex> for MatchingRule {
    fn from(regex: Regex) -> Self {
        Self::from_regex(regex)
    }
}

impl TryFrom<&str> for MatchingRule {
    type Error = ValidatorError;

    fn try_from(pattern: &str) -> Result<Self, Self::Error> {
        Self::new(pattern)
    }
}

// ============================================================================
// TESTS
// ============================================================================
