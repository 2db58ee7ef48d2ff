//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Integer Paise
//! All monetary values in the system are held in integer paise (i64).
//! 0.1 + 0.2 style float drift can never reach a stored price or a
//! printed total.
//!
//! ## Text Contract
//! `Money` round-trips through text at the system boundary:
//! - parsing accepts decimal form text with at most two fractional
//!   digits: `"8"`, `"8.5"`, `"8.25"`
//! - display renders the minimal decimal form with at least one
//!   fractional digit: `8.0`, `8.5`, `8.25`
//!
//! The display format is the stable numeric format used by the invoice
//! payload: a whole-rupee total of 16 always renders as `16.0`.
//!
//! ## Usage
//! ```rust
//! use zaiqa_core::money::Money;
//!
//! let price = Money::from_paise(825); // Rs 8.25
//! assert_eq!(price.to_string(), "8.25");
//!
//! let total = price * 2;
//! assert_eq!(total.paise(), 1650);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};
use std::str::FromStr;
use thiserror::Error;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in the smallest currency unit (paise).
///
/// ## Design
/// - **i64 (signed)**: arithmetic stays closed under subtraction
/// - **Single field tuple struct**: zero-cost abstraction over i64
/// - **Serde**: serializes as the raw paise integer
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::Type))]
#[cfg_attr(feature = "sqlx", sqlx(transparent))]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from paise (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use zaiqa_core::money::Money;
    ///
    /// let price = Money::from_paise(1099); // Rs 10.99
    /// assert_eq!(price.paise(), 1099);
    /// ```
    #[inline]
    pub const fn from_paise(paise: i64) -> Self {
        Money(paise)
    }

    /// Returns the value in paise.
    #[inline]
    pub const fn paise(&self) -> i64 {
        self.0
    }

    /// Returns the whole-rupee portion.
    #[inline]
    pub const fn rupees(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the paise portion (always 0-99).
    #[inline]
    pub const fn paise_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Multiplies money by a quantity.
    ///
    /// ## Example
    /// ```rust
    /// use zaiqa_core::money::Money;
    ///
    /// let unit_price = Money::from_paise(800); // Rs 8.00
    /// let line_total = unit_price.multiply_quantity(2);
    /// assert_eq!(line_total.paise(), 1600); // Rs 16.00
    /// ```
    #[inline]
    pub const fn multiply_quantity(&self, qty: i64) -> Self {
        Money(self.0 * qty)
    }
}

// =============================================================================
// Parsing
// =============================================================================

/// Error produced when decimal form text is not a valid money amount.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid amount '{input}': {reason}")]
pub struct ParseMoneyError {
    /// The rejected input, as submitted.
    pub input: String,
    /// What was wrong with it.
    pub reason: &'static str,
}

impl ParseMoneyError {
    fn new(input: &str, reason: &'static str) -> Self {
        ParseMoneyError {
            input: input.to_string(),
            reason,
        }
    }
}

/// Parses decimal form text into paise.
///
/// Accepted shapes: `"8"`, `"8."`, `"8.5"`, `"8.25"`, `".5"`, each with an
/// optional leading minus. More than two fractional digits is an error, as
/// is anything non-numeric. Range validation (negative prices) is the
/// validation layer's job, not the parser's.
impl FromStr for Money {
    type Err = ParseMoneyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ParseMoneyError::new(s, "empty"));
        }

        let (negative, digits) = match trimmed.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, trimmed),
        };

        let (whole, frac) = match digits.split_once('.') {
            Some((w, f)) => (w, f),
            None => (digits, ""),
        };

        if whole.is_empty() && frac.is_empty() {
            return Err(ParseMoneyError::new(s, "no digits"));
        }
        if !whole.chars().all(|c| c.is_ascii_digit())
            || !frac.chars().all(|c| c.is_ascii_digit())
        {
            return Err(ParseMoneyError::new(s, "not a number"));
        }
        if frac.len() > 2 {
            return Err(ParseMoneyError::new(s, "at most two decimal places"));
        }

        let whole_part: i64 = if whole.is_empty() {
            0
        } else {
            whole
                .parse()
                .map_err(|_| ParseMoneyError::new(s, "out of range"))?
        };

        let frac_part: i64 = match frac.len() {
            0 => 0,
            1 => frac
                .parse::<i64>()
                .map_err(|_| ParseMoneyError::new(s, "not a number"))?
                * 10,
            _ => frac
                .parse::<i64>()
                .map_err(|_| ParseMoneyError::new(s, "not a number"))?,
        };

        let paise = whole_part
            .checked_mul(100)
            .and_then(|p| p.checked_add(frac_part))
            .ok_or_else(|| ParseMoneyError::new(s, "out of range"))?;

        Ok(Money(if negative { -paise } else { paise }))
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Renders the minimal decimal form with at least one fractional digit.
///
/// This is the stable numeric format of the invoice payload: trailing
/// zeros in the paise part are dropped, but the decimal point and one
/// digit always remain. `1600` paise renders as `16.0`, `825` as `8.25`,
/// `850` as `8.5`.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.abs();
        let (rupees, paise) = (abs / 100, abs % 100);

        if paise == 0 {
            write!(f, "{}{}.0", sign, rupees)
        } else if paise % 10 == 0 {
            write!(f, "{}{}.{}", sign, rupees, paise / 10)
        } else {
            write!(f, "{}{}.{:02}", sign, rupees, paise)
        }
    }
}

/// Default money is zero.
impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

/// Addition of two Money values.
impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

/// Addition assignment (+=).
impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

/// Subtraction of two Money values.
impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

/// Subtraction assignment (-=).
impl SubAssign for Money {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

/// Multiplication by i64 (for quantity calculations).
impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i64) -> Self {
        Money(self.0 * qty)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_paise() {
        let money = Money::from_paise(1099);
        assert_eq!(money.paise(), 1099);
        assert_eq!(money.rupees(), 10);
        assert_eq!(money.paise_part(), 99);
    }

    #[test]
    fn test_parse_whole_and_fractional() {
        assert_eq!("8".parse::<Money>().unwrap().paise(), 800);
        assert_eq!("8.5".parse::<Money>().unwrap().paise(), 850);
        assert_eq!("8.25".parse::<Money>().unwrap().paise(), 825);
        assert_eq!("0".parse::<Money>().unwrap().paise(), 0);
        assert_eq!("10.0".parse::<Money>().unwrap().paise(), 1000);
        // Bare trailing point and bare leading point both carry digits
        assert_eq!("8.".parse::<Money>().unwrap().paise(), 800);
        assert_eq!(".5".parse::<Money>().unwrap().paise(), 50);
        // Sign is the parser's business; range checks are validation's
        assert_eq!("-5.5".parse::<Money>().unwrap().paise(), -550);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!("".parse::<Money>().is_err());
        assert!("   ".parse::<Money>().is_err());
        assert!(".".parse::<Money>().is_err());
        assert!("-".parse::<Money>().is_err());
        assert!("abc".parse::<Money>().is_err());
        assert!("8.255".parse::<Money>().is_err());
        assert!("8,50".parse::<Money>().is_err());
        assert!("1e3".parse::<Money>().is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(Money::from_paise(1600).to_string(), "16.0");
        assert_eq!(Money::from_paise(800).to_string(), "8.0");
        assert_eq!(Money::from_paise(850).to_string(), "8.5");
        assert_eq!(Money::from_paise(825).to_string(), "8.25");
        assert_eq!(Money::from_paise(0).to_string(), "0.0");
        assert_eq!(Money::from_paise(5).to_string(), "0.05");
        assert_eq!(Money::from_paise(-550).to_string(), "-5.5");
    }

    #[test]
    fn test_display_parse_round_trip() {
        for paise in [0, 5, 50, 400, 825, 850, 1000, 123456] {
            let money = Money::from_paise(paise);
            let back: Money = money.to_string().parse().unwrap();
            assert_eq!(back, money);
        }
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_paise(1000);
        let b = Money::from_paise(500);

        assert_eq!((a + b).paise(), 1500);
        assert_eq!((a - b).paise(), 500);
        assert_eq!((a * 3).paise(), 3000);
    }

    #[test]
    fn test_multiply_quantity() {
        let unit_price = Money::from_paise(800);
        assert_eq!(unit_price.multiply_quantity(2).paise(), 1600);
        assert_eq!(unit_price.multiply_quantity(1).paise(), 800);
    }

    #[test]
    fn test_zero_and_checks() {
        let zero = Money::zero();
        assert!(zero.is_zero());
        assert!(!zero.is_negative());

        assert!(Money::from_paise(-100).is_negative());
        assert_eq!(Money::default(), Money::zero());
    }
}
