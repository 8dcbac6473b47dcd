//! Peso amounts and their storefront formatting.
//!
//! Catalog prices are whole Colombian pesos, so amounts are plain integers:
//! there are no fractional pesos to carry and no rounding to get wrong.
//! Formatting follows the es-CO convention the storefront displays
//! everywhere: `$` symbol, a space, and digits grouped in threes with `.`
//! as the thousands separator.

use core::fmt;
use core::iter::Sum;
use core::ops::{Add, Mul};

use serde::{Deserialize, Serialize};

/// An amount of money in whole Colombian pesos.
///
/// ## Examples
///
/// ```
/// use palanca_core::Money;
///
/// let price = Money::new(300_000);
/// assert_eq!(price.to_string(), "$ 300.000");
/// assert_eq!((price * 2).to_string(), "$ 600.000");
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Zero pesos.
    pub const ZERO: Self = Self(0);

    /// Create an amount from whole pesos.
    #[must_use]
    pub const fn new(pesos: i64) -> Self {
        Self(pesos)
    }

    /// Get the amount in whole pesos.
    #[must_use]
    pub const fn as_pesos(&self) -> i64 {
        self.0
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

/// Line totals: unit price times quantity.
impl Mul<u32> for Money {
    type Output = Self;

    fn mul(self, rhs: u32) -> Self {
        Self(self.0 * i64::from(rhs))
    }
}

/// Cart totals: sum over line totals.
impl Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{sign}$ {}", group_thousands(self.0.unsigned_abs()))
    }
}

/// Insert `.` separators between groups of three digits, from the right.
fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    let mut remaining = digits.len();
    for digit in digits.chars() {
        out.push(digit);
        remaining -= 1;
        if remaining > 0 && remaining % 3 == 0 {
            out.push('.');
        }
    }
    out
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_format_small_amounts() {
        assert_eq!(Money::ZERO.to_string(), "$ 0");
        assert_eq!(Money::new(7).to_string(), "$ 7");
        assert_eq!(Money::new(999).to_string(), "$ 999");
    }

    #[test]
    fn test_format_grouped_amounts() {
        assert_eq!(Money::new(1_000).to_string(), "$ 1.000");
        assert_eq!(Money::new(250_000).to_string(), "$ 250.000");
        assert_eq!(Money::new(300_000).to_string(), "$ 300.000");
        assert_eq!(Money::new(1_234_567).to_string(), "$ 1.234.567");
    }

    #[test]
    fn test_format_negative() {
        assert_eq!(Money::new(-1_500).to_string(), "-$ 1.500");
    }

    #[test]
    fn test_arithmetic() {
        let unit = Money::new(300_000);
        assert_eq!(unit * 2, Money::new(600_000));
        assert_eq!(unit + Money::new(20_000), Money::new(320_000));

        let total: Money = [Money::new(600_000), Money::new(250_000)]
            .into_iter()
            .sum();
        assert_eq!(total, Money::new(850_000));
    }

    #[test]
    fn test_sum_of_empty_is_zero() {
        let total: Money = core::iter::empty::<Money>().sum();
        assert_eq!(total, Money::ZERO);
    }

    #[test]
    fn test_serde_transparent() {
        let json = serde_json::to_string(&Money::new(300_000)).unwrap();
        assert_eq!(json, "300000");

        let parsed: Money = serde_json::from_str("300000").unwrap();
        assert_eq!(parsed, Money::new(300_000));
    }
}
