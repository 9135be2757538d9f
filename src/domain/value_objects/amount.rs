//! Monetary amount value object
//!
//! Prices are stored as whole cents so totals and discounts add up exactly.
//! There is a single implicit currency; the symbol only matters for display.

use std::fmt;
use std::iter::Sum;
use std::ops::Add;

use serde::{Deserialize, Serialize, Serializer};

use crate::error::{TallyError, TallyResult};

/// A non-negative amount of money in cents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Amount(u64);

impl Amount {
    pub const ZERO: Amount = Amount(0);

    pub const fn from_cents(cents: u64) -> Self {
        Self(cents)
    }

    /// Whole units, saturating at the largest representable amount.
    pub const fn from_units(units: u64) -> Self {
        Self(units.saturating_mul(100))
    }

    /// Whole units as written in a document; out of range is an error.
    pub fn checked_units(units: u64) -> TallyResult<Self> {
        units
            .checked_mul(100)
            .map(Self)
            .ok_or_else(|| TallyError::InvalidAmount {
                value: units.to_string(),
                reason: "amount is too large".to_string(),
            })
    }

    /// Convert a decimal number (as written in TOML) into cents.
    pub fn from_decimal(value: f64) -> TallyResult<Self> {
        if !value.is_finite() {
            return Err(TallyError::InvalidAmount {
                value: value.to_string(),
                reason: "not a finite number".to_string(),
            });
        }
        if value < 0.0 {
            return Err(TallyError::InvalidAmount {
                value: value.to_string(),
                reason: "amounts cannot be negative".to_string(),
            });
        }
        let cents = (value * 100.0).round();
        if cents >= u64::MAX as f64 {
            return Err(TallyError::InvalidAmount {
                value: value.to_string(),
                reason: "amount is too large".to_string(),
            });
        }
        Ok(Self(cents as u64))
    }

    /// Parse a decimal string such as `23`, `23.5` or `23,50`.
    pub fn parse(raw: &str) -> TallyResult<Self> {
        let normalized = raw.trim().replace(',', ".");
        let value: f64 = normalized.parse().map_err(|_| TallyError::InvalidAmount {
            value: raw.to_string(),
            reason: "not a number".to_string(),
        })?;
        Self::from_decimal(value)
    }

    pub fn cents(&self) -> u64 {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }

    pub fn saturating_sub(self, other: Amount) -> Amount {
        Amount(self.0.saturating_sub(other.0))
    }

    fn as_f64(&self) -> f64 {
        self.0 as f64 / 100.0
    }
}

impl Add for Amount {
    type Output = Amount;

    fn add(self, rhs: Amount) -> Amount {
        Amount(self.0.saturating_add(rhs.0))
    }
}

impl Sum for Amount {
    fn sum<I: Iterator<Item = Amount>>(iter: I) -> Amount {
        iter.fold(Amount::ZERO, Add::add)
    }
}

impl<'a> Sum<&'a Amount> for Amount {
    fn sum<I: Iterator<Item = &'a Amount>>(iter: I) -> Amount {
        iter.copied().sum()
    }
}

/// Whole amounts print without decimals (`23`), fractional ones with the
/// shortest exact form (`23.5`, `23.05`).
impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let units = self.0 / 100;
        let cents = self.0 % 100;
        if cents == 0 {
            write!(f, "{}", units)
        } else if cents % 10 == 0 {
            write!(f, "{}.{}", units, cents / 10)
        } else {
            write!(f, "{}.{:02}", units, cents)
        }
    }
}

impl Serialize for Amount {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        if self.0 % 100 == 0 {
            serializer.serialize_u64(self.0 / 100)
        } else {
            serializer.serialize_f64(self.as_f64())
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum AmountDe {
    Integer(u64),
    Float(f64),
    Text(String),
}

impl<'de> Deserialize<'de> for Amount {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let parsed = match AmountDe::deserialize(deserializer)? {
            AmountDe::Integer(units) => Amount::checked_units(units),
            AmountDe::Float(value) => Amount::from_decimal(value),
            AmountDe::Text(raw) => Amount::parse(&raw),
        };
        parsed.map_err(serde::de::Error::custom)
    }
}
