//! Monetary amounts.
//!
//! Amounts are stored in integer minor units (cents), which gives exact
//! two-decimal semantics without floating point drift. Negative amounts are
//! unrepresentable; rejecting negative user input happens at parse time.

use core::iter::Sum;
use core::ops::Add;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::value_object::ValueObject;

/// A non-negative monetary amount in minor units (cents).
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(u64);

impl Money {
    pub const fn from_cents(cents: u64) -> Self {
        Self(cents)
    }

    pub const fn zero() -> Self {
        Self(0)
    }

    pub const fn cents(&self) -> u64 {
        self.0
    }

    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Multiply by a quantity, e.g. to derive a line subtotal.
    ///
    /// Saturates at `u64::MAX` cents, far beyond any realistic cart.
    pub fn times(&self, quantity: u32) -> Self {
        Self(self.0.saturating_mul(u64::from(quantity)))
    }
}

impl ValueObject for Money {}

impl Add for Money {
    type Output = Money;

    fn add(self, rhs: Money) -> Money {
        Money(self.0.saturating_add(rhs.0))
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::zero(), Add::add)
    }
}

impl core::fmt::Display for Money {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}.{:02}", self.0 / 100, self.0 % 100)
    }
}

impl FromStr for Money {
    type Err = DomainError;

    /// Parse `"123"`, `"123.4"` or `"123.45"` into cents.
    ///
    /// Rejects negative, malformed, and more-than-two-decimal input.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(DomainError::validation("amount cannot be empty"));
        }
        if s.starts_with('-') {
            return Err(DomainError::validation("amount cannot be negative"));
        }

        let (major, minor) = match s.split_once('.') {
            Some((major, minor)) => (major, minor),
            None => (s, ""),
        };
        if minor.len() > 2 {
            return Err(DomainError::validation(
                "amount supports at most two decimal places",
            ));
        }
        if !major.bytes().all(|b| b.is_ascii_digit()) || !minor.bytes().all(|b| b.is_ascii_digit())
        {
            return Err(DomainError::validation(format!("invalid amount: {s}")));
        }

        let major: u64 = major
            .parse()
            .map_err(|_| DomainError::validation(format!("invalid amount: {s}")))?;
        let minor_cents = match minor.len() {
            0 => 0,
            1 => u64::from(minor.as_bytes()[0] - b'0') * 10,
            _ => minor
                .parse::<u64>()
                .map_err(|_| DomainError::validation(format!("invalid amount: {s}")))?,
        };

        major
            .checked_mul(100)
            .and_then(|c| c.checked_add(minor_cents))
            .map(Money)
            .ok_or_else(|| DomainError::validation(format!("amount out of range: {s}")))
    }
}
