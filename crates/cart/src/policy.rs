//! Cart policy: the two knobs that distinguish purchase from sale carts.

use repairstock_core::Money;

use crate::error::{CartError, CartResult};

/// Minimum-price rule applied to candidate and edited unit prices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriceRule {
    /// Prices are entered by the operator and must be strictly positive
    /// (purchase entry).
    Positive,
    /// Prices come from the catalog and may legitimately be zero; cart
    /// lines cannot be re-priced (sale entry).
    CatalogNonNegative,
}

impl PriceRule {
    pub(crate) fn check(self, price: Money) -> CartResult<()> {
        match self {
            PriceRule::Positive if price.is_zero() => Err(CartError::InvalidPrice),
            _ => Ok(()),
        }
    }

    pub(crate) fn allows_repricing(self) -> bool {
        matches!(self, PriceRule::Positive)
    }
}

/// Stock ceiling enforcement.
///
/// Purchase carts carry no ceiling (suppliers are assumed able to deliver
/// any quantity); sale carts must not exceed the stock captured from the
/// catalog at cart-open time. The asymmetry is intentional, observed
/// behavior of both entry dialogs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StockRule {
    /// No ceiling.
    Unlimited,
    /// Per-line quantity must not exceed the line's ceiling.
    EnforceCeiling,
}

impl StockRule {
    pub(crate) fn check(self, ceiling: Option<u32>, requested: u32) -> CartResult<()> {
        match self {
            StockRule::Unlimited => Ok(()),
            StockRule::EnforceCeiling => match ceiling {
                Some(available) if requested > available => {
                    Err(CartError::StockExceeded { available })
                }
                _ => Ok(()),
            },
        }
    }
}

/// The full policy a [`crate::Cart`] is parameterized with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CartPolicy {
    pub price: PriceRule,
    pub stock: StockRule,
}

impl CartPolicy {
    /// Purchase entry: operator-entered positive prices, no stock ceiling.
    pub fn purchase() -> Self {
        Self {
            price: PriceRule::Positive,
            stock: StockRule::Unlimited,
        }
    }

    /// Sale entry: catalog prices, stock ceiling enforced per line.
    pub fn sale() -> Self {
        Self {
            price: PriceRule::CatalogNonNegative,
            stock: StockRule::EnforceCeiling,
        }
    }
}
