//! Client-side error model.

use thiserror::Error;

/// Failure surfaced when submitting a finalized cart.
///
/// None of these are retried automatically; the operator corrects the
/// reported problem and re-submits, with the cart preserved.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SubmitError {
    /// Submission preconditions: the cart must hold at least one line.
    #[error("add at least one product to the cart")]
    EmptyCart,

    /// The backend rejected the submission. The message is the backend's
    /// own validation text, surfaced verbatim near the submit control.
    #[error("{0}")]
    Rejected(String),

    /// The request never completed (connectivity, timeout, TLS, ...).
    #[error("request failed: {0}")]
    Transport(String),
}

/// Failure while loading the catalog or counterpart lists.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ClientError {
    #[error("request failed: {0}")]
    Transport(String),

    /// The backend answered with a non-success status.
    #[error("unexpected response ({status}): {message}")]
    Api { status: u16, message: String },
}

impl From<reqwest::Error> for SubmitError {
    fn from(err: reqwest::Error) -> Self {
        Self::Transport(err.to_string())
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        Self::Transport(err.to_string())
    }
}
