//! Explicit session context.
//!
//! The acting user and auth token are passed into the adapter at call
//! time instead of being read from process-wide state, so the cart flow
//! has no hidden inputs.

use repairstock_core::UserId;

/// Who is acting, and with what credential.
#[derive(Clone, PartialEq, Eq)]
pub struct Session {
    user_id: UserId,
    token: String,
}

impl Session {
    pub fn new(user_id: UserId, token: impl Into<String>) -> Self {
        Self {
            user_id,
            token: token.into(),
        }
    }

    pub fn user_id(&self) -> UserId {
        self.user_id
    }

    pub fn token(&self) -> &str {
        &self.token
    }
}

// Manual impl: the bearer token must not leak into logs.
impl core::fmt::Debug for Session {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Session")
            .field("user_id", &self.user_id)
            .field("token", &"<redacted>")
            .finish()
    }
}
