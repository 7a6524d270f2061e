//! `repairstock-client` — the boundary to the remote persistence API.
//!
//! The cart engine itself performs no I/O. This crate owns everything that
//! crosses the wire: the explicit [`Session`] context, the submission
//! payload mapping, the [`SubmitAdapter`] contract the dialogs call, and
//! its HTTP implementation ([`HttpBackend`]).

pub mod error;
pub mod http;
pub mod session;
pub mod submit;

pub use error::{ClientError, SubmitError};
pub use http::HttpBackend;
pub use session::Session;
pub use submit::{LinePayload, PurchaseSubmission, SaleSubmission, SubmitAdapter};
