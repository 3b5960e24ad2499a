//! Structured result of a verbose validation call.
//!
//! All string fields use `Cow<'static, str>` so the fixed success / failure
//! messages never allocate.

use std::borrow::Cow;
use std::fmt;

use serde::Serialize;
use smallvec::SmallVec;

/// Capture sequence of a successful match: the whole match first, then each
/// capture group in order. Groups that did not participate are `None`.
///
/// Stored inline for the common case of patterns with at most three groups.
pub type Captures = SmallVec<[Option<String>; 4]>;

pub(crate) const MATCHED_MESSAGE: &str = "Validation successful";
pub(crate) const NO_MATCH_MESSAGE: &str = "Validation failed";
pub(crate) const TIMEOUT_MESSAGE: &str = "Validation timed out";

/// Why a verbose validation call produced the result it did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OutcomeKind {
    /// The value satisfied the rule.
    Matched,
    /// The value did not satisfy the rule.
    NoMatch,
    /// The time budget was spent before evaluation started.
    Timeout,
    /// The rule itself failed while evaluating.
    Fault,
    /// A string discriminator did not name a known sub-rule.
    InvalidDiscriminator,
}

/// Diagnostic returned by every validation call made in
/// [`Verbose`](crate::foundation::Verbose) mode.
///
/// # Examples
///
/// ```
/// use tessera_validator::prelude::*;
///
/// let outcome = Validator::default().is_uuid("550e8400-e29b-41d4-a716-446655440000", Verbose);
/// assert!(outcome.is_valid);
/// assert_eq!(outcome.kind, OutcomeKind::Matched);
/// assert!(outcome.matches.is_some());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationOutcome {
    /// Whether the value conforms.
    pub is_valid: bool,

    /// Human-readable description of the result.
    pub message: Cow<'static, str>,

    /// Captured match data on success, `None` otherwise.
    pub matches: Option<Captures>,

    /// Machine-readable reason for the result.
    pub kind: OutcomeKind,
}

impl ValidationOutcome {
    /// A successful match carrying its captures.
    pub fn matched(captures: Captures) -> Self {
        Self {
            is_valid: true,
            message: Cow::Borrowed(MATCHED_MESSAGE),
            matches: Some(captures),
            kind: OutcomeKind::Matched,
        }
    }

    /// A value that did not satisfy its rule.
    pub fn no_match() -> Self {
        Self::rejected(OutcomeKind::NoMatch, NO_MATCH_MESSAGE)
    }

    /// The budget was spent before evaluation.
    pub fn timeout() -> Self {
        Self::rejected(OutcomeKind::Timeout, TIMEOUT_MESSAGE)
    }

    /// The rule faulted; `reason` is appended to the message.
    pub fn fault(reason: impl fmt::Display) -> Self {
        Self::rejected(OutcomeKind::Fault, format!("Validation error: {reason}"))
    }

    /// A string discriminator did not resolve.
    pub fn invalid_discriminator(family: &str, key: &str) -> Self {
        Self::rejected(
            OutcomeKind::InvalidDiscriminator,
            format!("Unsupported {family} '{key}'"),
        )
    }

    /// A failed outcome of the given kind.
    pub fn rejected(kind: OutcomeKind, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            is_valid: false,
            message: message.into(),
            matches: None,
            kind,
        }
    }

    /// Replaces the message, keeping validity, matches and kind.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_message(mut self, message: impl Into<Cow<'static, str>>) -> Self {
        self.message = message.into();
        self
    }

    /// The whole matched text, if the outcome is a match.
    #[must_use]
    pub fn matched_text(&self) -> Option<&str> {
        self.matches
            .as_ref()
            .and_then(|captures| captures.first())
            .and_then(Option::as_deref)
    }

    /// Converts the outcome to a JSON value.
    pub fn to_json_value(&self) -> serde_json::Value {
        serde_json::json!({
            "isValid": self.is_valid,
            "message": self.message,
            "matches": self.matches.as_ref().map(|c| c.to_vec()),
            "kind": self.kind,
        })
    }
}

impl fmt::Display for ValidationOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)?;
        if let Some(text) = self.matched_text() {
            write!(f, " (matched: {text})")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use smallvec::smallvec;

    #[test]
    fn matched_outcome_exposes_whole_match() {
        let outcome = ValidationOutcome::matched(smallvec![Some("abc".to_string()), None]);
        assert!(outcome.is_valid);
        assert_eq!(outcome.matched_text(), Some("abc"));
        assert_eq!(outcome.to_string(), "Validation successful (matched: abc)");
    }

    #[test]
    fn static_messages_do_not_allocate() {
        assert!(matches!(ValidationOutcome::no_match().message, Cow::Borrowed(_)));
        assert!(matches!(ValidationOutcome::timeout().message, Cow::Borrowed(_)));
    }

    #[test]
    fn fault_message_includes_reason() {
        let outcome = ValidationOutcome::fault("boom");
        assert!(!outcome.is_valid);
        assert_eq!(outcome.kind, OutcomeKind::Fault);
        assert_eq!(outcome.message, "Validation error: boom");
        assert!(outcome.matches.is_none());
    }

    #[test]
    fn json_uses_camel_case_keys() {
        let value = ValidationOutcome::no_match().to_json_value();
        assert_eq!(value["isValid"], serde_json::json!(false));
        assert_eq!(value["kind"], serde_json::json!("no_match"));
        assert!(value["matches"].is_null());
    }

    #[test]
    fn serialize_matches_to_json_value() {
        let outcome = ValidationOutcome::matched(smallvec![Some("1".to_string())]);
        let serialized = serde_json::to_value(&outcome).unwrap();
        assert_eq!(serialized, outcome.to_json_value());
    }
}
