//! `repairstock-cart` — the purchase/sale cart engine.
//!
//! One parameterized [`Cart`] replaces the two near-identical cart
//! implementations the purchase and sale entry dialogs would otherwise
//! maintain. The engine owns line aggregation (merge by product variant),
//! quantity/price edits, and total computation; a [`CartPolicy`] carries the
//! two behaviors that differ between the dialogs (minimum-price rule and
//! stock ceiling enforcement).
//!
//! The engine is pure and single-owner: no I/O, no shared state. Every
//! operation either fully succeeds or leaves the cart untouched and returns
//! a typed, user-displayable [`CartError`].

pub mod engine;
pub mod error;
pub mod line_item;
pub mod policy;

pub use engine::Cart;
pub use error::{CartError, CartResult};
pub use line_item::{LineCandidate, LineItem};
pub use policy::{CartPolicy, PriceRule, StockRule};
