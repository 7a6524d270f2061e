//! The cart engine: line aggregation and total computation.

use repairstock_core::{Money, VariantId};

use crate::error::{CartError, CartResult};
use crate::line_item::{LineCandidate, LineItem};
use crate::policy::CartPolicy;

/// In-memory cart: the single source of truth for what will be submitted.
///
/// Lines are kept in insertion order (display order); edits never reorder,
/// new variants append at the end. A cart belongs to exactly one open
/// dialog: created empty when the dialog opens, discarded on submit or
/// cancel. All operations run synchronously to completion; a rejected
/// mutation leaves the cart exactly as it was.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cart {
    policy: CartPolicy,
    lines: Vec<LineItem>,
}

impl Cart {
    pub fn new(policy: CartPolicy) -> Self {
        Self {
            policy,
            lines: Vec::new(),
        }
    }

    /// Empty purchase cart (positive entered prices, no stock ceiling).
    pub fn purchase() -> Self {
        Self::new(CartPolicy::purchase())
    }

    /// Empty sale cart (catalog prices, stock ceiling enforced).
    pub fn sale() -> Self {
        Self::new(CartPolicy::sale())
    }

    pub fn policy(&self) -> CartPolicy {
        self.policy
    }

    /// Lines in display order.
    pub fn lines(&self) -> &[LineItem] {
        &self.lines
    }

    pub fn line(&self, variant_id: &VariantId) -> Option<&LineItem> {
        self.lines.iter().find(|l| l.variant_id() == *variant_id)
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Sum of line subtotals, recomputed on demand; never cached across
    /// mutations.
    pub fn total(&self) -> Money {
        self.lines.iter().map(LineItem::subtotal).sum()
    }

    /// Add a candidate line, merging into an existing line for the same
    /// variant.
    ///
    /// On a merge the quantities are summed and the unit price is replaced
    /// by the candidate's (latest entry wins). If the combined quantity
    /// would exceed the line's stock ceiling the whole merge is rejected
    /// and the existing line is untouched.
    ///
    /// On success the caller may safely reset its transient input state
    /// (selected variant, quantity, price fields).
    pub fn add_or_merge(&mut self, candidate: LineCandidate) -> CartResult<()> {
        if candidate.quantity == 0 {
            return Err(CartError::InvalidQuantity);
        }
        self.policy.price.check(candidate.unit_price)?;

        match self.position(&candidate.variant_id) {
            Some(idx) => {
                let existing = &self.lines[idx];
                let combined = existing.quantity().saturating_add(candidate.quantity);
                self.policy.stock.check(existing.stock_ceiling(), combined)?;
                self.lines[idx].merge(combined, candidate.unit_price);
            }
            None => {
                self.policy
                    .stock
                    .check(candidate.stock_ceiling, candidate.quantity)?;
                self.lines.push(LineItem::from_candidate(candidate));
            }
        }
        Ok(())
    }

    /// Change a line's quantity. Only that line is affected.
    pub fn set_quantity(&mut self, variant_id: &VariantId, new_quantity: u32) -> CartResult<()> {
        if new_quantity == 0 {
            return Err(CartError::InvalidQuantity);
        }
        let idx = self.position(variant_id).ok_or(CartError::NotFound)?;
        self.policy
            .stock
            .check(self.lines[idx].stock_ceiling(), new_quantity)?;
        self.lines[idx].set_quantity(new_quantity);
        Ok(())
    }

    /// Change a line's unit price.
    ///
    /// Rejected outright on catalog-priced (sale) carts.
    pub fn set_unit_price(&mut self, variant_id: &VariantId, new_price: Money) -> CartResult<()> {
        if !self.policy.price.allows_repricing() {
            return Err(CartError::PriceFixedByCatalog);
        }
        self.policy.price.check(new_price)?;
        let idx = self.position(variant_id).ok_or(CartError::NotFound)?;
        self.lines[idx].set_unit_price(new_price);
        Ok(())
    }

    /// Delete a line if present. Removing an absent variant is a no-op,
    /// not an error.
    pub fn remove(&mut self, variant_id: &VariantId) {
        self.lines.retain(|l| l.variant_id() != *variant_id);
    }

    /// Empty the cart unconditionally.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    fn position(&self, variant_id: &VariantId) -> Option<usize> {
        self.lines.iter().position(|l| l.variant_id() == *variant_id)
    }
}
