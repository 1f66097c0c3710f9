use serde::{Deserialize, Serialize};

use crate::EngineError;

/// Currency used to display amounts.
///
/// Tally never converts between currencies: the currency only decides the
/// symbol, the digit grouping and how many fraction digits user input may
/// carry.
///
/// ## Minor units
///
/// Amounts are stored as an `i64` number of **minor units** (see `Money`).
/// `minor_units()` returns how many decimal digits are used when converting
/// between:
/// - major units (human input/output, e.g. `10.50`)
/// - minor units (stored integers, e.g. `1050`)
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    #[default]
    Usd,
    Eur,
    Inr,
}

impl Currency {
    /// Canonical currency code.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Currency::Usd => "USD",
            Currency::Eur => "EUR",
            Currency::Inr => "INR",
        }
    }

    /// Symbol placed before formatted amounts.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Currency::Usd => "$",
            Currency::Eur => "€",
            Currency::Inr => "₹",
        }
    }

    /// Number of fraction digits used when formatting/parsing amounts.
    #[must_use]
    pub const fn minor_units(self) -> u8 {
        match self {
            Currency::Usd | Currency::Eur | Currency::Inr => 2,
        }
    }

    /// Whether the integer part uses the Indian lakh/crore grouping
    /// (`1,23,456`) instead of groups of three (`123,456`).
    #[must_use]
    pub const fn indian_grouping(self) -> bool {
        matches!(self, Currency::Inr)
    }
}

impl core::fmt::Display for Currency {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.code())
    }
}

impl TryFrom<&str> for Currency {
    type Error = EngineError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim().to_ascii_uppercase().as_str() {
            "USD" => Ok(Currency::Usd),
            "EUR" => Ok(Currency::Eur),
            "INR" => Ok(Currency::Inr),
            other => Err(EngineError::UnsupportedCurrency(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!(Currency::try_from("usd").unwrap(), Currency::Usd);
        assert_eq!(Currency::try_from(" Inr ").unwrap(), Currency::Inr);
        assert_eq!(
            Currency::try_from("gbp"),
            Err(EngineError::UnsupportedCurrency("GBP".to_string()))
        );
    }
}
