//! Error types for rule construction and evaluation.
//!
//! Validation itself never returns these: a value that does not match, a
//! spent time budget, or a faulting rule all surface through the return
//! value of the validation call. `ValidatorError` is what callers see when
//! they *build* something (a custom pattern, a discriminator parsed from a
//! string) and what custom [`Matcher`](crate::rule::Matcher) implementations
//! return when they fail mid-evaluation.

/// Error type for building rules and resolving discriminators.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidatorError {
    /// A caller-supplied pattern failed to compile.
    #[error("invalid pattern `{pattern}`: {reason}")]
    InvalidPattern { pattern: String, reason: String },

    /// A string key does not name a member of a parameterized family
    /// (postal region, coin, password strength).
    #[error("unsupported {family} `{key}`")]
    UnknownDiscriminator { family: &'static str, key: String },

    /// A rule faulted while evaluating a value.
    #[error("rule evaluation failed: {reason}")]
    EvaluationFault { reason: String },
}

impl ValidatorError {
    /// Creates an [`InvalidPattern`](Self::InvalidPattern) error from a
    /// regex compilation failure.
    pub fn invalid_pattern(pattern: impl Into<String>, source: &regex::Error) -> Self {
        Self::InvalidPattern {
            pattern: pattern.into(),
            reason: source.to_string(),
        }
    }

    /// Creates an [`UnknownDiscriminator`](Self::UnknownDiscriminator) error.
    pub fn unknown_discriminator(family: &'static str, key: impl Into<String>) -> Self {
        Self::UnknownDiscriminator {
            family,
            key: key.into(),
        }
    }

    /// Creates an [`EvaluationFault`](Self::EvaluationFault) error.
    pub fn evaluation_fault(reason: impl Into<String>) -> Self {
        Self::EvaluationFault {
            reason: reason.into(),
        }
    }

    /// Broad error category for grouping in logs.
    #[must_use]
    pub fn category(&self) -> &'static str {
        match self {
            Self::InvalidPattern { .. } => "construction",
            Self::UnknownDiscriminator { .. } => "lookup",
            Self::EvaluationFault { .. } => "evaluation",
        }
    }

    /// Machine-readable error code for programmatic handling.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidPattern { .. } => "VALIDATOR_INVALID_PATTERN",
            Self::UnknownDiscriminator { .. } => "VALIDATOR_UNKNOWN_DISCRIMINATOR",
            Self::EvaluationFault { .. } => "VALIDATOR_EVALUATION_FAULT",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_pattern_keeps_regex_reason() {
        let source = regex::Regex::new("(unclosed").unwrap_err();
        let err = ValidatorError::invalid_pattern("(unclosed", &source);

        assert_eq!(err.code(), "VALIDATOR_INVALID_PATTERN");
        assert_eq!(err.category(), "construction");
        assert!(err.to_string().starts_with("invalid pattern `(unclosed`"));
    }

    #[test]
    fn unknown_discriminator_display() {
        let err = ValidatorError::unknown_discriminator("postal region", "XX");
        assert_eq!(err.to_string(), "unsupported postal region `XX`");
        assert_eq!(err.category(), "lookup");
    }

    #[test]
    fn evaluation_fault_display() {
        let err = ValidatorError::evaluation_fault("backend unavailable");
        assert_eq!(err.to_string(), "rule evaluation failed: backend unavailable");
        assert_eq!(err.code(), "VALIDATOR_EVALUATION_FAULT");
    }
}
