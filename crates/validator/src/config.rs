//! Validator configuration.
//!
//! Fixed when a [`Validator`](crate::Validator) is built and never mutated
//! afterwards; every call reads the same snapshot.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Default evaluation budget in milliseconds.
pub const DEFAULT_TIMEOUT_MS: u64 = 5_000;

/// Options recognised by [`Validator::new`](crate::Validator::new).
///
/// Every field is optional when deserializing; missing fields take their
/// defaults:
///
/// ```
/// use tessera_validator::ValidatorConfig;
///
/// let config: ValidatorConfig = serde_json::from_str(r#"{"timeout": 250}"#).unwrap();
/// assert_eq!(config.timeout_ms, 250);
/// assert!(config.case_sensitive);
/// ```
///
/// `case_sensitive`, `multiline` and `unicode` are advisory for the built-in
/// catalog, whose patterns carry their own flags. They are applied to
/// patterns compiled through [`Validator::compile`](crate::Validator::compile).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ValidatorConfig {
    /// Maximum time a call may spend before evaluation starts (default: 5000).
    #[serde(rename = "timeout")]
    pub timeout_ms: u64,
    /// Match letters case-sensitively (default: true).
    pub case_sensitive: bool,
    /// `^` and `$` match at line boundaries (default: false).
    pub multiline: bool,
    /// Unicode-aware character classes (default: true).
    pub unicode: bool,
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            timeout_ms: DEFAULT_TIMEOUT_MS,
            case_sensitive: true,
            multiline: false,
            unicode: true,
        }
    }
}

impl ValidatorConfig {
    /// Returns the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the evaluation budget in milliseconds.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    /// Compile custom patterns case-insensitively.
    #[must_use = "builder methods must be chained or built"]
    pub fn case_insensitive(mut self) -> Self {
        self.case_sensitive = false;
        self
    }

    /// Compile custom patterns in multi-line mode.
    #[must_use = "builder methods must be chained or built"]
    pub fn multiline(mut self) -> Self {
        self.multiline = true;
        self
    }

    /// Compile custom patterns with ASCII-only character classes.
    #[must_use = "builder methods must be chained or built"]
    pub fn ascii_only(mut self) -> Self {
        self.unicode = false;
        self
    }

    /// The evaluation budget as a [`Duration`].
    #[must_use]
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}
