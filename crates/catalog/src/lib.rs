//! `repairstock-catalog` — product catalog shapes and flattening.
//!
//! The backend returns products nested as product → brand + grade
//! variants; the entry dialogs work with a flat list of per-variant
//! offers. This crate owns those shapes, the flattening, and the
//! conversion from a selected offer into a cart [`LineCandidate`].

pub mod offer;
pub mod product;

pub use offer::{flatten, in_stock, VariantOffer};
pub use product::{Brand, CatalogProduct, Grade, GradeVariant};
