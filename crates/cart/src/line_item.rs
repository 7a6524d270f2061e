//! Cart lines.

use serde::{Deserialize, Serialize};

use repairstock_core::{Entity, Money, VariantId};

/// Input to [`crate::Cart::add_or_merge`]: a selected product variant plus
/// the quantity (and, for purchases, the price) entered in the dialog.
///
/// For sale carts, `unit_price` is the catalog sale price and
/// `stock_ceiling` the catalog stock at cart-open time; purchase carts
/// leave the ceiling `None`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineCandidate {
    pub variant_id: VariantId,
    pub display_name: String,
    pub brand: String,
    pub grade_label: String,
    pub unit_price: Money,
    pub quantity: u32,
    pub stock_ceiling: Option<u32>,
}

/// One row of a cart: a product variant, its quantity, and its price.
///
/// Descriptive fields are immutable once the line exists; `quantity` and
/// `unit_price` change only through the engine. The subtotal is derived on
/// read and never stored, so it cannot drift from its inputs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LineItem {
    variant_id: VariantId,
    display_name: String,
    brand: String,
    grade_label: String,
    unit_price: Money,
    quantity: u32,
    stock_ceiling: Option<u32>,
}

impl LineItem {
    pub(crate) fn from_candidate(candidate: LineCandidate) -> Self {
        Self {
            variant_id: candidate.variant_id,
            display_name: candidate.display_name,
            brand: candidate.brand,
            grade_label: candidate.grade_label,
            unit_price: candidate.unit_price,
            quantity: candidate.quantity,
            stock_ceiling: candidate.stock_ceiling,
        }
    }

    pub fn variant_id(&self) -> VariantId {
        self.variant_id
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    pub fn brand(&self) -> &str {
        &self.brand
    }

    pub fn grade_label(&self) -> &str {
        &self.grade_label
    }

    pub fn unit_price(&self) -> Money {
        self.unit_price
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    pub fn stock_ceiling(&self) -> Option<u32> {
        self.stock_ceiling
    }

    /// Always `quantity * unit_price` for the current values of both.
    pub fn subtotal(&self) -> Money {
        self.unit_price.times(self.quantity)
    }

    pub(crate) fn set_quantity(&mut self, quantity: u32) {
        self.quantity = quantity;
    }

    pub(crate) fn set_unit_price(&mut self, unit_price: Money) {
        self.unit_price = unit_price;
    }

    /// Merge semantics: combined quantity, latest price wins.
    pub(crate) fn merge(&mut self, combined_quantity: u32, latest_price: Money) {
        self.quantity = combined_quantity;
        self.unit_price = latest_price;
    }
}

impl Entity for LineItem {
    type Id = VariantId;

    fn id(&self) -> &VariantId {
        &self.variant_id
    }
}
