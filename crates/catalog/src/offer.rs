//! Flattened per-variant offers, the rows the entry dialogs select from.

use serde::{Deserialize, Serialize};

use repairstock_cart::LineCandidate;
use repairstock_core::{Money, VariantId};

use crate::product::CatalogProduct;

/// One product+grade row: everything a dialog needs to describe and price
/// a variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VariantOffer {
    pub variant_id: VariantId,
    pub product_name: String,
    pub brand_name: String,
    pub grade_name: String,
    pub sale_price: Money,
    pub stock: u32,
}

impl VariantOffer {
    /// Candidate for a sale cart: priced from the catalog, ceiling = the
    /// stock captured here at cart-open time.
    pub fn sale_candidate(&self, quantity: u32) -> LineCandidate {
        LineCandidate {
            variant_id: self.variant_id,
            display_name: self.product_name.clone(),
            brand: self.brand_name.clone(),
            grade_label: self.grade_name.clone(),
            unit_price: self.sale_price,
            quantity,
            stock_ceiling: Some(self.stock),
        }
    }

    /// Candidate for a purchase cart: operator-entered price, no ceiling.
    pub fn purchase_candidate(&self, quantity: u32, unit_price: Money) -> LineCandidate {
        LineCandidate {
            variant_id: self.variant_id,
            display_name: self.product_name.clone(),
            brand: self.brand_name.clone(),
            grade_label: self.grade_name.clone(),
            unit_price,
            quantity,
            stock_ceiling: None,
        }
    }
}

impl core::fmt::Display for VariantOffer {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "{} - {} ({})",
            self.product_name, self.brand_name, self.grade_name
        )
    }
}

/// Flatten the nested catalog into one offer per grade variant, catalog
/// order preserved.
pub fn flatten(products: &[CatalogProduct]) -> Vec<VariantOffer> {
    products
        .iter()
        .flat_map(|product| {
            product.grades.iter().map(|variant| VariantOffer {
                variant_id: variant.variant_id,
                product_name: product.name.clone(),
                brand_name: product.brand.name.clone(),
                grade_name: variant.grade.name.clone(),
                sale_price: variant.sale_price,
                stock: variant.stock,
            })
        })
        .collect()
}

/// Keep only offers with stock on hand. The sale dialog lists nothing it
/// cannot sell; the purchase dialog lists everything.
pub fn in_stock(offers: Vec<VariantOffer>) -> Vec<VariantOffer> {
    offers.into_iter().filter(|o| o.stock > 0).collect()
}
