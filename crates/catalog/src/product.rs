//! Catalog wire shapes, as fetched from the backend.

use serde::{Deserialize, Serialize};

use repairstock_core::{BrandId, GradeId, Money, ProductId, VariantId};

/// A brand (e.g. the phone maker a screen fits).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Brand {
    pub id: BrandId,
    pub name: String,
}

/// A quality grade (e.g. OLED, incell, refurbished).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Grade {
    pub id: GradeId,
    pub name: String,
}

/// One sellable variant of a product: the product in a specific grade,
/// with its catalog sale price and current stock.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GradeVariant {
    pub variant_id: VariantId,
    pub grade: Grade,
    pub sale_price: Money,
    pub stock: u32,
}

/// A catalog product with its brand and grade variants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogProduct {
    pub id: ProductId,
    pub name: String,
    pub brand: Brand,
    pub grades: Vec<GradeVariant>,
}
