//! Money type for representing monetary values.
//!
//! Uses cents-based integer representation. The backend serializes prices as
//! decimal strings ("1299.00"), which are parsed exactly rather than through
//! a float.

use crate::CommerceError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Supported currencies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Currency {
    /// Bangladeshi taka, the store's default.
    #[default]
    BDT,
    /// Indian rupee.
    INR,
}

impl Currency {
    /// Get the currency code (e.g., "BDT").
    pub fn code(&self) -> &'static str {
        match self {
            Currency::BDT => "BDT",
            Currency::INR => "INR",
        }
    }

    /// Get the currency symbol (e.g., "৳").
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::BDT => "\u{09f3}",
            Currency::INR => "\u{20b9}",
        }
    }

    /// Get the number of decimal places for this currency.
    pub fn decimal_places(&self) -> u32 {
        match self {
            Currency::BDT | Currency::INR => 2,
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A monetary value with currency.
///
/// Amounts are stored in the smallest unit of the currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct Money {
    /// Amount in smallest currency unit (e.g., poisha for BDT).
    pub amount_cents: i64,
    /// The currency.
    pub currency: Currency,
}

impl Money {
    /// Create a new Money value from cents.
    pub fn new(amount_cents: i64, currency: Currency) -> Self {
        Self {
            amount_cents,
            currency,
        }
    }

    /// Create a zero amount in the given currency.
    pub fn zero(currency: Currency) -> Self {
        Self::new(0, currency)
    }

    /// Parse a decimal string such as `"49.99"` or `"-3.5"`.
    ///
    /// Fractional digits beyond the currency's precision are rejected rather
    /// than rounded.
    pub fn parse_decimal(input: &str, currency: Currency) -> Result<Self, CommerceError> {
        let invalid = || CommerceError::InvalidPrice(input.to_string());
        let s = input.trim();
        let (negative, digits) = match s.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, s),
        };

        let (whole, frac) = digits.split_once('.').unwrap_or((digits, ""));
        if whole.is_empty() && frac.is_empty() {
            return Err(invalid());
        }
        let all_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
        if !all_digits(whole) || !all_digits(frac) {
            return Err(invalid());
        }

        let places = currency.decimal_places() as usize;
        if frac.len() > places {
            return Err(invalid());
        }

        let whole: i64 = if whole.is_empty() {
            0
        } else {
            whole.parse().map_err(|_| invalid())?
        };
        let frac_padded = format!("{frac:0<places$}");
        let frac: i64 = if frac_padded.is_empty() {
            0
        } else {
            frac_padded.parse().map_err(|_| invalid())?
        };

        let cents = whole
            .checked_mul(10_i64.pow(places as u32))
            .and_then(|w| w.checked_add(frac))
            .ok_or_else(invalid)?;

        Ok(Self::new(if negative { -cents } else { cents }, currency))
    }

    /// Check if this is zero.
    pub fn is_zero(&self) -> bool {
        self.amount_cents == 0
    }

    /// Format as a display string (e.g., "৳49.99").
    pub fn display(&self) -> String {
        format!("{}{}", self.currency.symbol(), self.display_amount())
    }

    /// Format as a display string without symbol (e.g., "49.99").
    pub fn display_amount(&self) -> String {
        let places = self.currency.decimal_places();
        let sign = if self.amount_cents < 0 { "-" } else { "" };
        let abs = self.amount_cents.unsigned_abs();
        let divisor = 10_u64.pow(places);
        format!(
            "{sign}{}.{:0width$}",
            abs / divisor,
            abs % divisor,
            width = places as usize
        )
    }

    /// Try to add another Money value, returning None if currencies don't
    /// match or the sum overflows.
    pub fn try_add(&self, other: &Money) -> Option<Money> {
        if self.currency != other.currency {
            return None;
        }
        self.amount_cents
            .checked_add(other.amount_cents)
            .map(|sum| Money::new(sum, self.currency))
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_decimal() {
        let m = Money::parse_decimal("49.99", Currency::BDT).unwrap();
        assert_eq!(m.amount_cents, 4999);

        let m = Money::parse_decimal("1299", Currency::BDT).unwrap();
        assert_eq!(m.amount_cents, 129_900);

        let m = Money::parse_decimal("3.5", Currency::INR).unwrap();
        assert_eq!(m.amount_cents, 350);

        let m = Money::parse_decimal(" -0.25 ", Currency::INR).unwrap();
        assert_eq!(m.amount_cents, -25);

        let m = Money::parse_decimal(".5", Currency::BDT).unwrap();
        assert_eq!(m.amount_cents, 50);
    }

    #[test]
    fn test_parse_decimal_rejects_garbage() {
        assert!(Money::parse_decimal("", Currency::BDT).is_err());
        assert!(Money::parse_decimal(".", Currency::BDT).is_err());
        assert!(Money::parse_decimal("12.345", Currency::BDT).is_err());
        assert!(Money::parse_decimal("abc", Currency::BDT).is_err());
        assert!(Money::parse_decimal("1e3", Currency::BDT).is_err());
        assert!(Money::parse_decimal("99999999999999999999", Currency::BDT).is_err());
    }

    #[test]
    fn test_money_display() {
        assert_eq!(Money::new(4999, Currency::INR).display(), "\u{20b9}49.99");
        assert_eq!(Money::new(129_900, Currency::BDT).display(), "\u{09f3}1299.00");
        assert_eq!(Money::new(5, Currency::INR).display_amount(), "0.05");
        assert_eq!(Money::new(-250, Currency::BDT).display_amount(), "-2.50");
    }

    #[test]
    fn test_money_addition() {
        let a = Money::new(1000, Currency::BDT);
        let b = Money::new(500, Currency::BDT);
        assert_eq!(a.try_add(&b).map(|m| m.amount_cents), Some(1500));
    }

    #[test]
    fn test_money_currency_mismatch() {
        let bdt = Money::new(1000, Currency::BDT);
        let inr = Money::new(1000, Currency::INR);
        assert!(bdt.try_add(&inr).is_none());
    }
}
