//! Keyed sub-catalogs: postal codes by country and addresses by coin.
//!
//! Both families are closed enums, so the typed entry points cannot be
//! handed an unknown key. String keys go through [`FromStr`], which rejects
//! anything outside the table.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::foundation::ValidatorError;

// ============================================================================
// POSTAL CODES
// ============================================================================

/// Country whose postal code shape is known.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Country {
    /// United States: ZIP or ZIP+4.
    #[serde(rename = "US")]
    Us,
    /// United Kingdom: outward and inward code, optional space.
    #[serde(rename = "UK", alias = "GB")]
    Uk,
    /// Canada: `A1A 1A1`.
    #[serde(rename = "CA")]
    Ca,
    /// Germany: five digits.
    #[serde(rename = "DE")]
    De,
    /// France: five digits, department 01-98.
    #[serde(rename = "FR")]
    Fr,
    /// Japan: `123-4567`.
    #[serde(rename = "JP")]
    Jp,
    /// India: six digits, not starting with zero.
    #[serde(rename = "IN")]
    In,
    /// Australia: four digits.
    #[serde(rename = "AU")]
    Au,
    /// Brazil: `12345-678`, hyphen optional.
    #[serde(rename = "BR")]
    Br,
    /// Netherlands: `1234 AB`, space optional.
    #[serde(rename = "NL")]
    Nl,
}

impl Country {
    /// Family name used in diagnostics.
    pub const FAMILY: &'static str = "postal region";

    /// Every supported country, in table order.
    pub const ALL: [Self; 10] = [
        Self::Us,
        Self::Uk,
        Self::Ca,
        Self::De,
        Self::Fr,
        Self::Jp,
        Self::In,
        Self::Au,
        Self::Br,
        Self::Nl,
    ];

    /// Two-letter key.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Us => "US",
            Self::Uk => "UK",
            Self::Ca => "CA",
            Self::De => "DE",
            Self::Fr => "FR",
            Self::Jp => "JP",
            Self::In => "IN",
            Self::Au => "AU",
            Self::Br => "BR",
            Self::Nl => "NL",
        }
    }

    /// Source of the postal code pattern.
    #[must_use]
    pub const fn pattern(self) -> &'static str {
        match self {
            Self::Us => r"^[0-9]{5}(?:-[0-9]{4})?$",
            Self::Uk => r"^[A-Za-z]{1,2}[0-9][A-Za-z0-9]? ?[0-9][A-Za-z]{2}$",
            Self::Ca => r"^[ABCEGHJ-NPRSTVXY][0-9][ABCEGHJ-NPRSTV-Z] ?[0-9][ABCEGHJ-NPRSTV-Z][0-9]$",
            Self::De => r"^[0-9]{5}$",
            Self::Fr => r"^(?:0[1-9]|[1-8][0-9]|9[0-8])[0-9]{3}$",
            Self::Jp => r"^[0-9]{3}-[0-9]{4}$",
            Self::In => r"^[1-9][0-9]{5}$",
            Self::Au => r"^[0-9]{4}$",
            Self::Br => r"^[0-9]{5}-?[0-9]{3}$",
            Self::Nl => r"^[1-9][0-9]{3} ?[A-Za-z]{2}$",
        }
    }

    /// A postal code that conforms.
    #[must_use]
    pub const fn example(self) -> &'static str {
        match self {
            Self::Us => "94105-1804",
            Self::Uk => "SW1A 1AA",
            Self::Ca => "K1A 0B1",
            Self::De => "10115",
            Self::Fr => "75008",
            Self::Jp => "100-0001",
            Self::In => "110001",
            Self::Au => "2000",
            Self::Br => "01310-100",
            Self::Nl => "1012 JS",
        }
    }

    #[inline]
    pub(crate) const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Country {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Country {
    type Err = ValidatorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim();
        if key.eq_ignore_ascii_case("GB") {
            return Ok(Self::Uk);
        }
        Self::ALL
            .into_iter()
            .find(|country| country.code().eq_ignore_ascii_case(key))
            .ok_or_else(|| ValidatorError::unknown_discriminator(Self::FAMILY, s))
    }
}

// ============================================================================
// CRYPTO ADDRESSES
// ============================================================================

/// Coin whose address shape is known.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Coin {
    /// Legacy (`1...`, `3...`) and bech32 (`bc1...`) addresses.
    Bitcoin,
    /// `0x` followed by 40 hex digits.
    Ethereum,
    /// Legacy (`L...`, `M...`, `3...`) and bech32 (`ltc1...`) addresses.
    Litecoin,
    /// `D...` base58 addresses.
    Dogecoin,
    /// `r...` base58 addresses.
    Ripple,
}

impl Coin {
    /// Family name used in diagnostics.
    pub const FAMILY: &'static str = "coin";

    /// Every supported coin, in table order.
    pub const ALL: [Self; 5] = [
        Self::Bitcoin,
        Self::Ethereum,
        Self::Litecoin,
        Self::Dogecoin,
        Self::Ripple,
    ];

    /// Lowercase coin name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Bitcoin => "bitcoin",
            Self::Ethereum => "ethereum",
            Self::Litecoin => "litecoin",
            Self::Dogecoin => "dogecoin",
            Self::Ripple => "ripple",
        }
    }

    /// Ticker symbol.
    #[must_use]
    pub const fn ticker(self) -> &'static str {
        match self {
            Self::Bitcoin => "BTC",
            Self::Ethereum => "ETH",
            Self::Litecoin => "LTC",
            Self::Dogecoin => "DOGE",
            Self::Ripple => "XRP",
        }
    }

    /// Source of the address pattern.
    #[must_use]
    pub const fn pattern(self) -> &'static str {
        match self {
            Self::Bitcoin => r"^(?:[13][a-km-zA-HJ-NP-Z1-9]{25,34}|bc1[a-z0-9]{39,59})$",
            Self::Ethereum => r"^0x[a-fA-F0-9]{40}$",
            Self::Litecoin => r"^(?:[LM3][a-km-zA-HJ-NP-Z1-9]{26,33}|ltc1[a-z0-9]{39,59})$",
            Self::Dogecoin => r"^D[5-9A-HJ-NP-U][1-9A-HJ-NP-Za-km-z]{32}$",
            Self::Ripple => r"^r[1-9A-HJ-NP-Za-km-z]{24,34}$",
        }
    }

    /// An address that conforms.
    #[must_use]
    pub const fn example(self) -> &'static str {
        match self {
            Self::Bitcoin => "1A1zP1eP5QGefi2DMPTfTL5SLmv7DivfNa",
            Self::Ethereum => "0x742d35Cc6634C0532925a3b844Bc454e4438f44e",
            Self::Litecoin => "LdP8Qox1VAhCzLJNqrr74YovaWYyNBUWvL",
            Self::Dogecoin => "DH5yaieqoZN36fDVciNyRueRGvGLR3mr7L",
            Self::Ripple => "rHb9CJAWyB4rj91VRWn96DkukG4bwdtyTh",
        }
    }

    #[inline]
    pub(crate) const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Coin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Coin {
    type Err = ValidatorError;

    /// Accepts the coin name or its ticker, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim();
        Self::ALL
            .into_iter()
            .find(|coin| {
                coin.name().eq_ignore_ascii_case(key) || coin.ticker().eq_ignore_ascii_case(key)
            })
            .ok_or_else(|| ValidatorError::unknown_discriminator(Self::FAMILY, s))
    }
}
