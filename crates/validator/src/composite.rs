//! Validators that combine catalog rules or pick one by discriminator.

use std::time::Instant;

use smallvec::smallvec;

use crate::catalog::{Axis, Coin, Country, DateFormat, PatternCatalog};
use crate::engine::MatchEngine;
use crate::foundation::{OutcomeKind, OutputMode, Plain, ValidationOutcome};

pub(crate) const COORDINATES_VALID: &str = "Valid coordinates";
pub(crate) const COORDINATES_INVALID: &str =
    "Invalid coordinates: latitude must be between -90 and 90 and longitude between -180 and 180";

/// Catalog lookups plus the engine that evaluates them.
#[derive(Debug, Clone, Copy)]
pub struct CompositeValidators<'a> {
    engine: MatchEngine,
    catalog: &'a PatternCatalog,
}

impl<'a> CompositeValidators<'a> {
    /// Binds an engine to a catalog.
    #[must_use]
    pub const fn new(engine: MatchEngine, catalog: &'a PatternCatalog) -> Self {
        Self { engine, catalog }
    }

    /// Both axes must conform. The verbose message does not say which axis
    /// failed.
    ///
    /// The budget is checked once for the pair; both axes are evaluated
    /// after it passes.
    pub fn coordinates<M: OutputMode>(
        &self,
        started: Instant,
        latitude: &str,
        longitude: &str,
        _mode: M,
    ) -> M::Output {
        if self.engine.is_expired(started) {
            return M::verdict(false, ValidationOutcome::timeout);
        }
        let lat_ok = self
            .engine
            .apply(latitude, self.catalog.axis(Axis::Latitude), Plain);
        // Skip the second axis once the first has failed.
        let is_valid = lat_ok
            && self
                .engine
                .apply(longitude, self.catalog.axis(Axis::Longitude), Plain);

        M::verdict(is_valid, || {
            if is_valid {
                ValidationOutcome::matched(smallvec![
                    Some(latitude.to_string()),
                    Some(longitude.to_string())
                ])
                .with_message(COORDINATES_VALID)
            } else {
                ValidationOutcome::rejected(OutcomeKind::NoMatch, COORDINATES_INVALID)
            }
        })
    }

    /// Date in the ordering named by `selector`, or `DD/MM/YYYY` if the
    /// selector is not recognised.
    pub fn date<M: OutputMode>(
        &self,
        started: Instant,
        value: &str,
        selector: &str,
        mode: M,
    ) -> M::Output {
        self.date_format(started, value, DateFormat::from_selector(selector), mode)
    }

    /// Date in a known ordering.
    pub fn date_format<M: OutputMode>(
        &self,
        started: Instant,
        value: &str,
        format: DateFormat,
        mode: M,
    ) -> M::Output {
        self.engine
            .evaluate(started, value, self.catalog.date(format), mode)
    }

    /// Postal code for a country.
    pub fn postal_code<M: OutputMode>(
        &self,
        started: Instant,
        value: &str,
        country: Country,
        mode: M,
    ) -> M::Output {
        self.engine
            .evaluate(started, value, self.catalog.postal_code(country), mode)
    }

    /// Postal code for a country named by string; unknown keys fail closed.
    pub fn postal_code_by_key<M: OutputMode>(
        &self,
        started: Instant,
        value: &str,
        key: &str,
        mode: M,
    ) -> M::Output {
        match key.parse::<Country>() {
            Ok(country) => self.postal_code(started, value, country, mode),
            Err(e) => fail_closed::<M>(Country::FAMILY, key, &e),
        }
    }

    /// Address for a coin.
    pub fn crypto_address<M: OutputMode>(
        &self,
        started: Instant,
        value: &str,
        coin: Coin,
        mode: M,
    ) -> M::Output {
        self.engine
            .evaluate(started, value, self.catalog.crypto_address(coin), mode)
    }

    /// Address for a coin named by string; unknown keys fail closed.
    pub fn crypto_address_by_key<M: OutputMode>(
        &self,
        started: Instant,
        value: &str,
        key: &str,
        mode: M,
    ) -> M::Output {
        match key.parse::<Coin>() {
            Ok(coin) => self.crypto_address(started, value, coin, mode),
            Err(e) => fail_closed::<M>(Coin::FAMILY, key, &e),
        }
    }
}

fn fail_closed<M: OutputMode>(
    family: &'static str,
    key: &str,
    error: &crate::foundation::ValidatorError,
) -> M::Output {
    tracing::debug!(family, key, error = %error, "unknown discriminator, rejecting value");
    M::verdict(false, || ValidationOutcome::invalid_discriminator(family, key))
}
