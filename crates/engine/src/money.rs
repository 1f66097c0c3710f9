use std::{
    fmt,
    iter::Sum,
    ops::{Add, AddAssign, Sub},
};

use serde::{Deserialize, Serialize};

use crate::{Currency, EngineError, ResultEngine};

/// Signed money amount represented as integer **minor units** (cents).
///
/// Use this type for **all** monetary values in the engine (transaction
/// amounts, totals, budget ceilings) so sums stay exact and independent of
/// the order they are taken in.
///
/// Transaction amounts are always positive; the sign only shows up in derived
/// values such as a balance.
///
/// # Examples
///
/// ```rust
/// use engine::{Currency, Money};
///
/// let amount = Money::new(12_34);
/// assert_eq!(amount.minor(), 1234);
/// assert_eq!(amount.format(Currency::Usd), "$12.34");
/// ```
///
/// Parsing from user input (accepts `.` or `,` as decimal separator; rejects
/// more decimals than the currency carries):
///
/// ```rust
/// use engine::{Currency, Money};
///
/// assert_eq!(Money::parse_major("10", Currency::Usd).unwrap().minor(), 1000);
/// assert_eq!(Money::parse_major("10,5", Currency::Usd).unwrap().minor(), 1050);
/// assert!(Money::parse_major("12.345", Currency::Usd).is_err());
/// ```
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
#[repr(transparent)]
pub struct Money(i64);

impl Money {
    pub const ZERO: Money = Money(0);

    /// Creates a new amount from integer minor units.
    #[must_use]
    pub const fn new(minor: i64) -> Self {
        Self(minor)
    }

    /// Creates an amount from whole major units (`Money::from_major(5)` is
    /// five dollars).
    #[must_use]
    pub const fn from_major(major: i64, currency: Currency) -> Self {
        Self(major * scale(currency) as i64)
    }

    /// Returns the raw value in minor units.
    #[must_use]
    pub const fn minor(self) -> i64 {
        self.0
    }

    /// Returns `true` if the amount is 0.
    #[must_use]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Returns `true` if the amount is positive.
    #[must_use]
    pub const fn is_positive(self) -> bool {
        self.0 > 0
    }

    /// Returns `true` if the amount is negative.
    #[must_use]
    pub const fn is_negative(self) -> bool {
        self.0 < 0
    }

    /// Returns `pct` percent of this amount, rounded half up to the nearest
    /// minor unit.
    #[must_use]
    pub fn percent_of(self, pct: u32) -> Money {
        let scaled = i128::from(self.0) * i128::from(pct);
        let rounded = if scaled >= 0 {
            (scaled + 50) / 100
        } else {
            (scaled - 50) / 100
        };
        Money(rounded as i64)
    }

    /// Expresses this amount as a percentage of `whole`.
    ///
    /// A zero `whole` yields `0.0` instead of a NaN/infinite ratio.
    #[must_use]
    pub fn ratio_percent(self, whole: Money) -> f64 {
        if whole.is_zero() {
            return 0.0;
        }
        self.0 as f64 / whole.0 as f64 * 100.0
    }

    /// Parses a decimal string in major units into minor units.
    ///
    /// Accepts `.` or `,` as decimal separator and an optional leading `+`/`-`.
    ///
    /// Validation rules:
    /// - at most `currency.minor_units()` fractional digits
    /// - the whole part may be omitted when a fraction follows (`.50`)
    /// - rejects empty/invalid strings
    pub fn parse_major(s: &str, currency: Currency) -> ResultEngine<Self> {
        let empty = || EngineError::InvalidAmount("empty amount".to_string());
        let invalid = || EngineError::InvalidAmount(format!("\"{}\" is not a number", s.trim()));
        let overflow = || EngineError::InvalidAmount("amount too large".to_string());

        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(empty());
        }

        let (negative, rest) = if let Some(stripped) = trimmed.strip_prefix('-') {
            (true, stripped)
        } else if let Some(stripped) = trimmed.strip_prefix('+') {
            (false, stripped)
        } else {
            (false, trimmed)
        };

        let rest = rest.trim();
        if rest.is_empty() {
            return Err(empty());
        }

        let rest = rest.replace(',', ".");
        let mut parts = rest.split('.');
        let major_str = parts.next().ok_or_else(invalid)?;
        let fraction_str = parts.next();

        if parts.next().is_some() {
            return Err(invalid());
        }

        let has_fraction = fraction_str.is_some_and(|frac| !frac.is_empty());
        let digits_only = major_str.chars().all(|c| c.is_ascii_digit());
        if !digits_only || (major_str.is_empty() && !has_fraction) {
            return Err(invalid());
        }

        let major: i64 = if major_str.is_empty() {
            0
        } else {
            major_str.parse().map_err(|_| overflow())?
        };

        let digits = usize::from(currency.minor_units());
        let fraction: i64 = match fraction_str {
            None | Some("") => 0,
            Some(frac) => {
                if !frac.chars().all(|c| c.is_ascii_digit()) {
                    return Err(invalid());
                }
                if frac.len() > digits {
                    return Err(EngineError::InvalidAmount(format!(
                        "at most {digits} decimals allowed"
                    )));
                }
                let padded = format!("{frac:0<digits$}");
                padded.parse::<i64>().map_err(|_| invalid())?
            }
        };

        let total = major
            .checked_mul(scale(currency) as i64)
            .and_then(|v| v.checked_add(fraction))
            .ok_or_else(overflow)?;

        let signed = if negative {
            total.checked_neg().ok_or_else(overflow)?
        } else {
            total
        };

        Ok(Money(signed))
    }

    /// Formats the amount with the currency symbol, digit grouping and all
    /// fraction digits, e.g. `$1,234.50` or `-₹1,23,456.00`.
    #[must_use]
    pub fn format(self, currency: Currency) -> String {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        let scale = scale(currency);
        let grouped = group_digits(abs / scale, currency.indian_grouping());
        let digits = usize::from(currency.minor_units());
        if digits == 0 {
            return format!("{sign}{}{grouped}", currency.symbol());
        }
        let fraction = abs % scale;
        format!("{sign}{}{grouped}.{fraction:0digits$}", currency.symbol())
    }

    /// Formats the amount rounded to whole major units, e.g. `$250`.
    #[must_use]
    pub fn format_whole(self, currency: Currency) -> String {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        let scale = scale(currency);
        let whole = (abs + scale / 2) / scale;
        let grouped = group_digits(whole, currency.indian_grouping());
        format!("{sign}{}{grouped}", currency.symbol())
    }
}

const fn scale(currency: Currency) -> u64 {
    10u64.pow(currency.minor_units() as u32)
}

fn group_digits(value: u64, indian: bool) -> String {
    let digits = value.to_string();
    if digits.len() <= 3 {
        return digits;
    }

    let (head, tail) = digits.split_at(digits.len() - 3);
    let group = if indian { 2 } else { 3 };

    let mut groups: Vec<&str> = Vec::new();
    let mut end = head.len();
    while end > group {
        groups.push(&head[end - group..end]);
        end -= group;
    }
    groups.push(&head[..end]);
    groups.reverse();

    format!("{},{tail}", groups.join(","))
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        write!(f, "{sign}{}.{:02}", abs / 100, abs % 100)
    }
}

// Arithmetic saturates at the `i64` bounds so totals never panic.

impl Add for Money {
    type Output = Money;

    fn add(self, rhs: Money) -> Self::Output {
        Money(self.0.saturating_add(rhs.0))
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, rhs: Money) {
        *self = *self + rhs;
    }
}

impl Sub for Money {
    type Output = Money;

    fn sub(self, rhs: Money) -> Self::Output {
        Money(self.0.saturating_sub(rhs.0))
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::ZERO, Add::add)
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_uses_symbol_and_grouping() {
        assert_eq!(Money::new(0).format(Currency::Usd), "$0.00");
        assert_eq!(Money::new(1).format(Currency::Usd), "$0.01");
        assert_eq!(Money::new(1050).format(Currency::Usd), "$10.50");
        assert_eq!(Money::new(-1050).format(Currency::Usd), "-$10.50");
        assert_eq!(Money::new(123_456_789).format(Currency::Usd), "$1,234,567.89");
        assert_eq!(Money::new(12_345_600).format(Currency::Inr), "₹1,23,456.00");
        assert_eq!(Money::new(1_234_567_800).format(Currency::Inr), "₹1,23,45,678.00");
        assert_eq!(Money::new(99_900).format(Currency::Eur), "€999.00");
    }

    #[test]
    fn format_whole_rounds_half_up() {
        assert_eq!(Money::new(25_000).format_whole(Currency::Usd), "$250");
        assert_eq!(Money::new(450).format_whole(Currency::Usd), "$5");
        assert_eq!(Money::new(449).format_whole(Currency::Usd), "$4");
    }

    #[test]
    fn parse_accepts_dot_or_comma() {
        let usd = Currency::Usd;
        assert_eq!(Money::parse_major("10", usd).unwrap().minor(), 1000);
        assert_eq!(Money::parse_major("10.5", usd).unwrap().minor(), 1050);
        assert_eq!(Money::parse_major("10,50", usd).unwrap().minor(), 1050);
        assert_eq!(Money::parse_major("-0.01", usd).unwrap().minor(), -1);
        assert_eq!(Money::parse_major("+1.00", usd).unwrap().minor(), 100);
        assert_eq!(Money::parse_major("  2.30 ", usd).unwrap().minor(), 230);
        assert_eq!(Money::parse_major("4.", usd).unwrap().minor(), 400);
        assert_eq!(Money::parse_major(".50", usd).unwrap().minor(), 50);
        assert_eq!(Money::parse_major(",5", usd).unwrap().minor(), 50);
    }

    #[test]
    fn parse_rejects_garbage_and_extra_decimals() {
        let usd = Currency::Usd;
        assert!(Money::parse_major("12.345", usd).is_err());
        assert!(Money::parse_major("", usd).is_err());
        assert!(Money::parse_major("-", usd).is_err());
        assert!(Money::parse_major("abc", usd).is_err());
        assert!(Money::parse_major("1.2.3", usd).is_err());
        assert!(Money::parse_major(".", usd).is_err());
        assert!(Money::parse_major("-.", usd).is_err());
        assert!(Money::parse_major("99999999999999999999", usd).is_err());
    }

    #[test]
    fn percent_of_rounds_to_nearest_cent() {
        assert_eq!(Money::new(26_250).percent_of(40), Money::new(10_500));
        assert_eq!(Money::new(1_250).percent_of(15), Money::new(188));
        assert_eq!(Money::ZERO.percent_of(20), Money::ZERO);
    }

    #[test]
    fn ratio_percent_handles_zero_whole() {
        assert_eq!(Money::new(250).ratio_percent(Money::ZERO), 0.0);
        assert_eq!(Money::new(25_000).ratio_percent(Money::new(50_000)), 50.0);
    }

    #[test]
    fn sum_is_exact() {
        let total: Money = [Money::new(10), Money::new(20), Money::new(-5)]
            .iter()
            .sum();
        assert_eq!(total, Money::new(25));
    }

    #[test]
    fn sums_saturate_instead_of_overflowing() {
        let huge = Money::new(i64::MAX - 1);
        let total: Money = [huge, huge, Money::new(5)].into_iter().sum();
        assert_eq!(total, Money::new(i64::MAX));
        assert_eq!(Money::new(i64::MIN) - Money::new(1), Money::new(i64::MIN));
    }
}
