//! The match engine.
//!
//! Applies one [`MatchingRule`] to one value under a time budget and renders
//! the result in the caller's [`OutputMode`].
//!
//! The budget is checked once, immediately before evaluation, against the
//! instant the validation call started. Evaluation itself is never
//! interrupted; `regex` matching runs in time linear in the input.

use std::time::{Duration, Instant};

use crate::foundation::{OutputMode, ValidationOutcome};
use crate::rule::MatchingRule;

/// Evaluates rules against values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchEngine {
    timeout: Duration,
}

impl MatchEngine {
    /// Creates an engine with the given budget.
    #[must_use]
    pub const fn new(timeout: Duration) -> Self {
        Self { timeout }
    }

    /// The budget each call is allowed before evaluation starts.
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Whether a call started at `started` has spent its budget.
    ///
    /// Elapsed time is truncated to whole milliseconds, the unit the budget
    /// is configured in: a zero budget only trips once a full millisecond has
    /// passed.
    #[must_use]
    pub fn is_expired(&self, started: Instant) -> bool {
        let elapsed_ms = started.elapsed().as_millis();
        let budget_ms = self.timeout.as_millis();
        if elapsed_ms > budget_ms {
            tracing::debug!(
                elapsed_ms,
                budget_ms,
                "validation budget exhausted before evaluation"
            );
            return true;
        }
        false
    }

    /// Checks the budget, then applies `rule` to `value`.
    ///
    /// Never fails: a spent budget or a faulting rule is reported through the
    /// returned value, as `false` in [`Plain`](crate::foundation::Plain) mode.
    pub fn evaluate<M: OutputMode>(
        &self,
        started: Instant,
        value: &str,
        rule: &MatchingRule,
        mode: M,
    ) -> M::Output {
        if self.is_expired(started) {
            return M::verdict(false, ValidationOutcome::timeout);
        }
        self.apply(value, rule, mode)
    }

    /// Applies `rule` to `value` without consulting the budget.
    pub(crate) fn apply<M: OutputMode>(&self, value: &str, rule: &MatchingRule, _mode: M) -> M::Output {
        if M::VERBOSE {
            return M::finish(outcome(value, rule));
        }

        match rule.is_match(value) {
            Ok(is_valid) => M::verdict(is_valid, || outcome(value, rule)),
            Err(e) => {
                tracing::warn!(rule = ?rule, error = %e, "rule evaluation failed");
                M::verdict(false, || ValidationOutcome::fault(e))
            }
        }
    }
}

fn outcome(value: &str, rule: &MatchingRule) -> ValidationOutcome {
    match rule.captures(value) {
        Ok(Some(captures)) => ValidationOutcome::matched(captures),
        Ok(None) => ValidationOutcome::no_match(),
        Err(e) => {
            tracing::warn!(rule = ?rule, error = %e, "rule evaluation failed");
            ValidationOutcome::fault(e)
        }
    }
}

impl Default for MatchEngine {
    fn default() -> Self {
        Self::new(Duration::from_millis(crate::config::DEFAULT_TIMEOUT_MS))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::{Captures, OutcomeKind, Plain, ValidatorError, Verbose};
    use crate::rule::Matcher;

    #[derive(Debug)]
    struct Faulty;

    impl Matcher for Faulty {
        fn captures(&self, _input: &str) -> Result<Option<Captures>, ValidatorError> {
            Err(ValidatorError::evaluation_fault("backend unavailable"))
        }
    }

    fn long_ago() -> Instant {
        Instant::now()
            .checked_sub(Duration::from_secs(60))
            .unwrap_or_else(Instant::now)
    }

    #[test]
    fn plain_mode_reports_match() {
        let engine = MatchEngine::default();
        let rule = MatchingRule::new("^a+$").unwrap();
        assert!(engine.evaluate(Instant::now(), "aaa", &rule, Plain));
        assert!(!engine.evaluate(Instant::now(), "aab", &rule, Plain));
    }

    #[test]
    fn verbose_mode_reports_captures() {
        let engine = MatchEngine::default();
        let rule = MatchingRule::new(r"^(\w+)@(\w+)$").unwrap();

        let outcome = engine.evaluate(Instant::now(), "me@host", &rule, Verbose);
        assert_eq!(outcome.kind, OutcomeKind::Matched);
        assert_eq!(outcome.message, "Validation successful");
        let matches = outcome.matches.unwrap();
        assert_eq!(matches[1].as_deref(), Some("me"));
        assert_eq!(matches[2].as_deref(), Some("host"));

        let outcome = engine.evaluate(Instant::now(), "me", &rule, Verbose);
        assert_eq!(outcome.kind, OutcomeKind::NoMatch);
        assert_eq!(outcome.message, "Validation failed");
        assert!(outcome.matches.is_none());
    }

    #[test]
    fn expired_budget_short_circuits() {
        let engine = MatchEngine::new(Duration::from_millis(1));
        let rule = MatchingRule::new("^a$").unwrap();

        assert!(!engine.evaluate(long_ago(), "a", &rule, Plain));
        let outcome = engine.evaluate(long_ago(), "a", &rule, Verbose);
        assert!(!outcome.is_valid);
        assert_eq!(outcome.kind, OutcomeKind::Timeout);
        assert_eq!(outcome.message, "Validation timed out");
    }

    #[test]
    fn generous_budget_is_not_expired() {
        let engine = MatchEngine::new(Duration::from_secs(3_600));
        assert!(!engine.is_expired(long_ago()));
        assert!(MatchEngine::new(Duration::ZERO).is_expired(long_ago()));
    }

    #[test]
    fn zero_budget_counts_whole_milliseconds() {
        let engine = MatchEngine::new(Duration::ZERO);
        let rule = MatchingRule::new("^a$").unwrap();
        assert!(!engine.is_expired(Instant::now()));
        assert!(engine.evaluate(Instant::now(), "a", &rule, Plain));
        assert_eq!(
            engine.evaluate(Instant::now(), "a", &rule, Verbose).kind,
            OutcomeKind::Matched
        );
    }

    #[test]
    fn plain_verdict_matches_verbose_outcome() {
        let engine = MatchEngine::default();
        let rule = MatchingRule::new("^(a)+$").unwrap();
        for value in ["aa", "ab", ""] {
            let plain = engine.apply(value, &rule, Plain);
            let verbose = engine.apply(value, &rule, Verbose);
            assert_eq!(plain, verbose.is_valid, "{value:?}");
            assert_eq!(verbose.matches.is_some(), verbose.is_valid);
        }
    }

    #[test]
    fn faults_are_absorbed() {
        let engine = MatchEngine::default();
        let rule = MatchingRule::custom(Faulty);

        assert!(!engine.evaluate(Instant::now(), "x", &rule, Plain));
        let outcome = engine.evaluate(Instant::now(), "x", &rule, Verbose);
        assert_eq!(outcome.kind, OutcomeKind::Fault);
        assert_eq!(
            outcome.message,
            "Validation error: rule evaluation failed: backend unavailable"
        );
    }
}
