//! Commission rate parsing for comma-decimal percentage text

use bigdecimal::BigDecimal;
use std::fmt;
use std::str::FromStr;
use tracing::warn;

/// Commission rate text that does not match `digits[,digits]%`
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RateParseError {
    #[error("empty commission rate")]
    Empty,
    #[error("commission rate '{0}' is missing the '%' marker")]
    MissingPercent(String),
    #[error("commission rate '{0}' is not a comma-decimal number")]
    InvalidNumber(String),
    #[error("commission rate '{0}' exceeds 100%")]
    OutOfRange(String),
}

/// Commission rate as a ratio in `[0, 1]`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CommissionRate {
    ratio: BigDecimal,
}

impl CommissionRate {
    /// Build a rate from a ratio already in `[0, 1]`
    pub fn from_ratio(ratio: BigDecimal) -> Result<Self, RateParseError> {
        if ratio < BigDecimal::from(0) || ratio > BigDecimal::from(1) {
            return Err(RateParseError::OutOfRange(ratio.to_string()));
        }
        Ok(Self { ratio })
    }

    pub fn ratio(&self) -> &BigDecimal {
        &self.ratio
    }

    pub fn into_ratio(self) -> BigDecimal {
        self.ratio
    }
}

impl FromStr for CommissionRate {
    type Err = RateParseError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(RateParseError::Empty);
        }

        let number = trimmed
            .strip_suffix('%')
            .ok_or_else(|| RateParseError::MissingPercent(text.to_string()))?
            .trim_end();

        let (integer, fraction) = match number.split_once(',') {
            Some((integer, fraction)) => (integer, fraction),
            None => (number, ""),
        };

        let is_digits = |part: &str| part.chars().all(|c| c.is_ascii_digit());
        let valid = !integer.is_empty()
            && is_digits(integer)
            && is_digits(fraction)
            && !(number.contains(',') && fraction.is_empty());
        if !valid {
            return Err(RateParseError::InvalidNumber(text.to_string()));
        }

        let percent = BigDecimal::from_str(&format!("{integer}.{fraction}0"))
            .map_err(|_| RateParseError::InvalidNumber(text.to_string()))?;

        // percent / 100 without going through division
        let ratio = percent * BigDecimal::new(1.into(), 2);
        if ratio > BigDecimal::from(1) {
            return Err(RateParseError::OutOfRange(text.to_string()));
        }

        Ok(Self { ratio })
    }
}

impl fmt::Display for CommissionRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&crate::format::percent(&self.ratio))
    }
}

/// Parse a locale percentage such as `"2,50%"` into the ratio `0.025`.
///
/// Only used for the refund-commission reversal; commission fields supplied
/// by the data source are never re-derived from it.
pub fn effective_commission_rate(text: &str) -> Result<BigDecimal, RateParseError> {
    text.parse::<CommissionRate>()
        .map(CommissionRate::into_ratio)
        .inspect_err(|error| warn!(rate = text, %error, "commission rate text rejected"))
}
