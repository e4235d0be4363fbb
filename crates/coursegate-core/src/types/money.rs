//! Money in integer minor units (e.g. cents).
//!
//! Prices arrive as decimal major units and are rounded to the nearest minor
//! unit at the fetch boundary. Sums are exact from then on.

use std::fmt;
use std::iter::Sum;
use std::ops::Add;

use serde::{Deserialize, Serialize};

/// Minor units per major unit.
pub const MINOR_PER_MAJOR: u64 = 100;

/// A non-negative amount of money.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(u64);

impl Money {
    pub const ZERO: Money = Money(0);

    pub const fn from_minor(minor: u64) -> Self {
        Self(minor)
    }

    /// Whole major units, e.g. `Money::from_major_units(150)` is 150.00.
    pub const fn from_major_units(major: u64) -> Self {
        Self(major.saturating_mul(MINOR_PER_MAJOR))
    }

    /// Converts a decimal major-unit amount. Returns `None` for negative,
    /// NaN or infinite input, or amounts beyond `u64` minor units.
    pub fn from_major(amount: f64) -> Option<Self> {
        if !amount.is_finite() || amount < 0.0 {
            return None;
        }
        let minor = (amount * MINOR_PER_MAJOR as f64).round();
        if minor > u64::MAX as f64 {
            return None;
        }
        Some(Self(minor as u64))
    }

    pub const fn minor(self) -> u64 {
        self.0
    }

    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    pub const fn saturating_sub(self, other: Money) -> Money {
        Money(self.0.saturating_sub(other.0))
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, rhs: Money) -> Money {
        Money(self.0.saturating_add(rhs.0))
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::ZERO, Add::add)
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Money {
        iter.copied().sum()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}.{:02}",
            self.0 / MINOR_PER_MAJOR,
            self.0 % MINOR_PER_MAJOR
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_major_rounds_to_nearest_minor() {
        assert_eq!(Money::from_major(19.99), Some(Money::from_minor(1999)));
        assert_eq!(Money::from_major(0.005), Some(Money::from_minor(1)));
        assert_eq!(Money::from_major(0.0), Some(Money::ZERO));
    }

    #[test]
    fn test_from_major_rejects_invalid() {
        assert_eq!(Money::from_major(-1.0), None);
        assert_eq!(Money::from_major(f64::NAN), None);
        assert_eq!(Money::from_major(f64::INFINITY), None);
    }

    #[test]
    fn test_sum_and_display() {
        let total: Money = [Money::from_minor(150), Money::from_minor(275)].iter().sum();
        assert_eq!(total.minor(), 425);
        assert_eq!(total.to_string(), "4.25");
    }

    #[test]
    fn test_saturating_sub_floors_at_zero() {
        assert_eq!(Money::from_minor(5).saturating_sub(Money::from_minor(9)), Money::ZERO);
    }
}
