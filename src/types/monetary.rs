use crate::types::errors::MonetaryError;
use rust_decimal::Decimal;
use serde::{de, Deserialize, Deserializer};
use std::fmt;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

const DECIMAL_PLACES: u32 = 2;

/// An amount of money with cent precision.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Ord, PartialOrd)]
pub struct Monetary(Decimal);

impl Monetary {
    pub fn new() -> Self {
        Monetary(Decimal::ZERO)
    }

    pub fn is_positive(&self) -> bool {
        self.0 > Decimal::ZERO
    }

    pub fn checked_add(self, rhs: Monetary) -> Option<Monetary> {
        self.0.checked_add(rhs.0).map(Monetary)
    }

    pub fn checked_sub(self, rhs: Monetary) -> Option<Monetary> {
        self.0.checked_sub(rhs.0).map(Monetary)
    }
}

impl From<Decimal> for Monetary {
    fn from(value: Decimal) -> Self {
        Monetary(value)
    }
}

impl From<u32> for Monetary {
    fn from(value: u32) -> Self {
        Monetary(Decimal::from(value))
    }
}

impl Display for Monetary {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        let mut value = self.0.round_dp(DECIMAL_PLACES);
        value.rescale(DECIMAL_PLACES);
        write!(formatter, "{value}")
    }
}

impl FromStr for Monetary {
    type Err = MonetaryError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let value = value.trim();

        if value.is_empty() {
            return Err(MonetaryError::InvalidFormat("Value is an empty string".to_string()));
        }

        let decimal = Decimal::from_str(value)?;

        if decimal.normalize().scale() > DECIMAL_PLACES {
            return Err(MonetaryError::InvalidFormat("Value has too many decimal places".to_string()));
        }

        Ok(Monetary(decimal))
    }
}

impl<'de> Deserialize<'de> for Monetary {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        Monetary::from_str(&value).map_err(de::Error::custom)
    }
}
