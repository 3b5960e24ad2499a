//! Password policies.
//!
//! A [`PasswordPolicy`] is a bag of independent requirements. The
//! [`PolicyBuilder`] turns one into a [`MatchingRule`] at call time; the rule
//! is handed straight to the engine and dropped afterwards.
//!
//! The requirements are checked as a short-circuiting conjunction: order does
//! not change the result, only whether every enabled requirement holds.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::foundation::ValidatorError;
use crate::rule::MatchingRule;

/// Characters that satisfy the special-character requirement.
pub const SPECIAL_CHARS: &str = r#"!@#$%^&*(),.?":{}|<>"#;

// ============================================================================
// PASSWORD POLICY
// ============================================================================

/// Requirements a password must meet.
///
/// Unset fields take the baseline: at least 8 characters, with an uppercase
/// letter, a digit and a special character. Override only what differs:
///
/// ```
/// use tessera_validator::PasswordPolicy;
///
/// let relaxed = PasswordPolicy {
///     min_length: 6,
///     require_uppercase: false,
///     require_special_chars: false,
///     ..Default::default()
/// };
/// assert!(relaxed.is_satisfied_by("password123"));
/// ```
///
/// A `min_length` of zero means no length requirement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PasswordPolicy {
    /// Minimum number of characters (Unicode scalar values).
    pub min_length: usize,
    /// Require at least one ASCII uppercase letter.
    pub require_uppercase: bool,
    /// Require at least one ASCII digit.
    pub require_numbers: bool,
    /// Require at least one character from [`SPECIAL_CHARS`].
    pub require_special_chars: bool,
}

impl Default for PasswordPolicy {
    fn default() -> Self {
        PasswordStrength::Strong.policy()
    }
}

impl PasswordPolicy {
    /// Returns whether `password` meets every enabled requirement.
    ///
    /// Line terminators are never accepted: the length requirement counts
    /// characters on a single line.
    #[must_use]
    pub fn is_satisfied_by(&self, password: &str) -> bool {
        if password.chars().any(is_line_terminator) {
            return false;
        }
        if self.require_uppercase && !password.chars().any(|c| c.is_ascii_uppercase()) {
            return false;
        }
        if self.require_numbers && !password.chars().any(|c| c.is_ascii_digit()) {
            return false;
        }
        if self.require_special_chars && !password.chars().any(|c| SPECIAL_CHARS.contains(c)) {
            return false;
        }
        // Counting stops as soon as the minimum is reached.
        self.min_length == 0 || password.chars().nth(self.min_length - 1).is_some()
    }

    /// Returns a builder seeded with this policy.
    #[must_use]
    pub fn builder(self) -> PolicyBuilder {
        PolicyBuilder { policy: self }
    }
}

fn is_line_terminator(c: char) -> bool {
    matches!(c, '\n' | '\r' | '\u{2028}' | '\u{2029}')
}

// ============================================================================
// STRENGTH PRESETS
// ============================================================================

/// Named password policies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PasswordStrength {
    /// At least 6 characters, no character requirements.
    Weak,
    /// At least 8 characters with an uppercase letter and a digit.
    Medium,
    /// At least 8 characters with an uppercase letter, a digit and a special
    /// character.
    #[default]
    Strong,
    /// At least 12 characters with an uppercase letter, a digit and a special
    /// character.
    VeryStrong,
}

impl PasswordStrength {
    /// All presets, weakest first.
    pub const ALL: [Self; 4] = [Self::Weak, Self::Medium, Self::Strong, Self::VeryStrong];

    /// The policy this preset stands for.
    #[must_use]
    pub const fn policy(self) -> PasswordPolicy {
        match self {
            Self::Weak => PasswordPolicy {
                min_length: 6,
                require_uppercase: false,
                require_numbers: false,
                require_special_chars: false,
            },
            Self::Medium => PasswordPolicy {
                min_length: 8,
                require_uppercase: true,
                require_numbers: true,
                require_special_chars: false,
            },
            Self::Strong => PasswordPolicy {
                min_length: 8,
                require_uppercase: true,
                require_numbers: true,
                require_special_chars: true,
            },
            Self::VeryStrong => PasswordPolicy {
                min_length: 12,
                require_uppercase: true,
                require_numbers: true,
                require_special_chars: true,
            },
        }
    }

    /// Stable lowercase name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Weak => "weak",
            Self::Medium => "medium",
            Self::Strong => "strong",
            Self::VeryStrong => "very_strong",
        }
    }
}

impl FromStr for PasswordStrength {
    type Err = ValidatorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|strength| strength.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| ValidatorError::unknown_discriminator("password strength", s))
    }
}

impl From<PasswordStrength> for PasswordPolicy {
    fn from(strength: PasswordStrength) -> Self {
        strength.policy()
    }
}

// ============================================================================
// POLICY BUILDER
// ============================================================================

/// Assembles a password rule from independent toggles.
///
/// ```
/// use tessera_validator::policy::PolicyBuilder;
///
/// let rule = PolicyBuilder::new()
///     .min_length(10)
///     .require_special_chars(false)
///     .build();
/// assert!(rule.is_match("Abcdefghi1").unwrap());
/// assert!(!rule.is_match("Abcdefgh1").unwrap());
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct PolicyBuilder {
    policy: PasswordPolicy,
}

impl PolicyBuilder {
    /// Starts from the baseline policy.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the minimum length.
    #[must_use = "builder methods must be chained or built"]
    pub fn min_length(mut self, min_length: usize) -> Self {
        self.policy.min_length = min_length;
        self
    }

    /// Toggles the uppercase requirement.
    #[must_use = "builder methods must be chained or built"]
    pub fn require_uppercase(mut self, required: bool) -> Self {
        self.policy.require_uppercase = required;
        self
    }

    /// Toggles the digit requirement.
    #[must_use = "builder methods must be chained or built"]
    pub fn require_numbers(mut self, required: bool) -> Self {
        self.policy.require_numbers = required;
        self
    }

    /// Toggles the special-character requirement.
    #[must_use = "builder methods must be chained or built"]
    pub fn require_special_chars(mut self, required: bool) -> Self {
        self.policy.require_special_chars = required;
        self
    }

    /// The policy assembled so far.
    #[must_use]
    pub fn policy(&self) -> PasswordPolicy {
        self.policy
    }

    /// Produces a fresh rule for this policy.
    #[must_use]
    pub fn build(self) -> MatchingRule {
        MatchingRule::policy(self.policy)
    }
}

impl From<PasswordPolicy> for PolicyBuilder {
    fn from(policy: PasswordPolicy) -> Self {
        policy.builder()
    }
}

// ============================================================================
// TESTS
// ============================================================================
