//! Date orderings.
//!
//! Day and month are range-checked by shape only (`01`-`31`, `01`-`12`);
//! `31/02/2023` conforms.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::foundation::ValidatorError;

/// Field ordering and separator of a date value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum DateFormat {
    /// `DD/MM/YYYY`.
    #[default]
    #[serde(rename = "DD/MM/YYYY")]
    DdMmYyyy,
    /// `MM/DD/YYYY`.
    #[serde(rename = "MM/DD/YYYY")]
    MmDdYyyy,
    /// `YYYY-MM-DD`.
    #[serde(rename = "YYYY-MM-DD")]
    YyyyMmDd,
    /// `DD-MM-YYYY`.
    #[serde(rename = "DD-MM-YYYY")]
    DdMmYyyyDash,
}

impl DateFormat {
    /// Family name used in diagnostics.
    pub const FAMILY: &'static str = "date format";

    /// Every ordering, in table order.
    pub const ALL: [Self; 4] = [
        Self::DdMmYyyy,
        Self::MmDdYyyy,
        Self::YyyyMmDd,
        Self::DdMmYyyyDash,
    ];

    /// The selector spelling, e.g. `"YYYY-MM-DD"`.
    #[must_use]
    pub const fn selector(self) -> &'static str {
        match self {
            Self::DdMmYyyy => "DD/MM/YYYY",
            Self::MmDdYyyy => "MM/DD/YYYY",
            Self::YyyyMmDd => "YYYY-MM-DD",
            Self::DdMmYyyyDash => "DD-MM-YYYY",
        }
    }

    /// Source of the date pattern. Groups capture the fields in the order
    /// they appear.
    #[must_use]
    pub const fn pattern(self) -> &'static str {
        match self {
            Self::DdMmYyyy => r"^(0[1-9]|[12][0-9]|3[01])/(0[1-9]|1[0-2])/([0-9]{4})$",
            Self::MmDdYyyy => r"^(0[1-9]|1[0-2])/(0[1-9]|[12][0-9]|3[01])/([0-9]{4})$",
            Self::YyyyMmDd => r"^([0-9]{4})-(0[1-9]|1[0-2])-(0[1-9]|[12][0-9]|3[01])$",
            Self::DdMmYyyyDash => r"^(0[1-9]|[12][0-9]|3[01])-(0[1-9]|1[0-2])-([0-9]{4})$",
        }
    }

    /// A date that conforms.
    #[must_use]
    pub const fn example(self) -> &'static str {
        match self {
            Self::DdMmYyyy => "31/12/2023",
            Self::MmDdYyyy => "12/31/2023",
            Self::YyyyMmDd => "2023-12-31",
            Self::DdMmYyyyDash => "31-12-2023",
        }
    }

    /// Resolves a selector, falling back to [`DateFormat::DdMmYyyy`] for
    /// anything that is not one of the four spellings.
    ///
    /// ```
    /// use tessera_validator::prelude::*;
    ///
    /// assert_eq!(DateFormat::from_selector("YYYY-MM-DD"), DateFormat::YyyyMmDd);
    /// assert_eq!(DateFormat::from_selector("BAD-FORMAT"), DateFormat::DdMmYyyy);
    /// ```
    #[must_use]
    pub fn from_selector(selector: &str) -> Self {
        selector.parse().unwrap_or_else(|_| {
            tracing::debug!(
                selector,
                fallback = Self::DdMmYyyy.selector(),
                "unknown date selector, using default"
            );
            Self::DdMmYyyy
        })
    }

    #[inline]
    pub(crate) const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for DateFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.selector())
    }
}

impl FromStr for DateFormat {
    type Err = ValidatorError;

    /// Strict counterpart of [`DateFormat::from_selector`]: selectors are
    /// matched exactly.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|format| format.selector() == s)
            .ok_or_else(|| ValidatorError::unknown_discriminator(Self::FAMILY, s))
    }
}
