//! `repairstock-parties` — transaction counterparts.
//!
//! A purchase is made from a [`Supplier`] (required); a sale may be
//! attributed to a [`Technician`] (optional).

pub mod supplier;
pub mod technician;

pub use supplier::{ContactInfo, Supplier};
pub use technician::Technician;
