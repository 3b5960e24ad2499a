//! The pattern catalog.
//!
//! Holds one precompiled [`MatchingRule`] per built-in format, postal region,
//! coin and date ordering. The built-in catalog is compiled on first use and
//! shared read-only by every [`Validator`](crate::Validator) in the process.

pub mod date;
pub mod format;
pub mod regional;

use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

pub use date::DateFormat;
pub use format::{Format, FormatCategory};
pub use regional::{Coin, Country};

use crate::foundation::ValidatorResult;
use crate::rule::MatchingRule;

static BUILTIN: LazyLock<PatternCatalog> =
    LazyLock::new(|| PatternCatalog::compile().expect("built-in patterns compile"));

/// One axis of a coordinate pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    /// -90 to 90.
    Latitude,
    /// -180 to 180.
    Longitude,
}

impl Axis {
    /// The catalog format that checks this axis.
    #[must_use]
    pub const fn format(self) -> Format {
        match self {
            Self::Latitude => Format::Latitude,
            Self::Longitude => Format::Longitude,
        }
    }
}

/// Precompiled rules, indexed by their enum discriminant.
#[derive(Debug, Clone)]
pub struct PatternCatalog {
    formats: Vec<MatchingRule>,
    postal_codes: Vec<MatchingRule>,
    crypto_addresses: Vec<MatchingRule>,
    dates: Vec<MatchingRule>,
}

impl PatternCatalog {
    /// The process-wide built-in catalog.
    pub fn builtin() -> &'static Self {
        &BUILTIN
    }

    /// Compiles every built-in pattern.
    ///
    /// Prefer [`PatternCatalog::builtin`], which compiles once per process.
    pub fn compile() -> ValidatorResult<Self> {
        Ok(Self {
            formats: compile_all(Format::ALL.iter().map(|f| f.pattern()))?,
            postal_codes: compile_all(Country::ALL.iter().map(|c| c.pattern()))?,
            crypto_addresses: compile_all(Coin::ALL.iter().map(|c| c.pattern()))?,
            dates: compile_all(DateFormat::ALL.iter().map(|d| d.pattern()))?,
        })
    }

    /// Rule for a fixed-pattern format.
    #[must_use]
    pub fn rule(&self, format: Format) -> &MatchingRule {
        &self.formats[format.index()]
    }

    /// Postal code rule for a country.
    #[must_use]
    pub fn postal_code(&self, country: Country) -> &MatchingRule {
        &self.postal_codes[country.index()]
    }

    /// Address rule for a coin.
    #[must_use]
    pub fn crypto_address(&self, coin: Coin) -> &MatchingRule {
        &self.crypto_addresses[coin.index()]
    }

    /// Rule for a date ordering.
    #[must_use]
    pub fn date(&self, format: DateFormat) -> &MatchingRule {
        &self.dates[format.index()]
    }

    /// Rule for one coordinate axis.
    #[must_use]
    pub fn axis(&self, axis: Axis) -> &MatchingRule {
        self.rule(axis.format())
    }

    /// Total number of compiled rules.
    #[must_use]
    pub fn len(&self) -> usize {
        self.formats.len() + self.postal_codes.len() + self.crypto_addresses.len() + self.dates.len()
    }

    /// Whether the catalog holds no rules.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn compile_all<'a>(patterns: impl Iterator<Item = &'a str>) -> ValidatorResult<Vec<MatchingRule>> {
    patterns.map(MatchingRule::new).collect()
}
