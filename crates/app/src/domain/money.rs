//! Money

use std::{
    fmt::{Debug, Display, Formatter, Result as FmtResult},
    str::FromStr,
};

use rust_decimal::Decimal;
use rusty_money::{Findable, iso::Currency};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoneyError {
    #[error("unknown ISO-4217 currency code: {0:?}")]
    UnknownCurrency(String),
}

/// An ISO-4217 currency.
#[derive(Clone, Copy)]
pub struct CurrencyUnit(&'static Currency);

impl CurrencyUnit {
    /// Parse a three letter ISO-4217 code. Lookup is case-insensitive.
    ///
    /// # Errors
    ///
    /// Returns [`MoneyError::UnknownCurrency`] when the code is malformed or not a known currency.
    pub fn parse(code: &str) -> Result<Self, MoneyError> {
        let unknown = || MoneyError::UnknownCurrency(code.to_owned());

        if code.len() != 3 || !code.bytes().all(|byte| byte.is_ascii_alphabetic()) {
            return Err(unknown());
        }

        Currency::find(&code.to_ascii_uppercase())
            .map(Self)
            .ok_or_else(unknown)
    }

    /// Canonical upper-case ISO code, e.g. `"USD"`.
    #[must_use]
    pub fn code(&self) -> &'static str {
        self.0.iso_alpha_code
    }
}

impl FromStr for CurrencyUnit {
    type Err = MoneyError;

    fn from_str(code: &str) -> Result<Self, Self::Err> {
        Self::parse(code)
    }
}

impl PartialEq for CurrencyUnit {
    fn eq(&self, other: &Self) -> bool {
        self.code() == other.code()
    }
}

impl Eq for CurrencyUnit {}

impl Debug for CurrencyUnit {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_tuple("CurrencyUnit").field(&self.code()).finish()
    }
}

impl Display for CurrencyUnit {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.code())
    }
}

/// An exact decimal amount in a given currency.
///
/// The amount carries no sign or range restriction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Money {
    pub amount: Decimal,
    pub currency: CurrencyUnit,
}

impl Money {
    /// Build a money value from an amount and an ISO currency code.
    ///
    /// # Errors
    ///
    /// Returns [`MoneyError::UnknownCurrency`] when `currency` is not a valid ISO-4217 code.
    pub fn new(amount: Decimal, currency: &str) -> Result<Self, MoneyError> {
        Ok(Self {
            amount,
            currency: CurrencyUnit::parse(currency)?,
        })
    }
}
