//! Admin session state.
//!
//! SYSTEM CONTEXT
//! ==============
//! The admin route is gated on the presence of a token in localStorage. The
//! token is never verified here; this is a convenience gate, not a trust
//! boundary, and the external API must authorize every admin request itself.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

/// Admin gate state, provided via context from the root component.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AdminSession {
    pub token: Option<String>,
    /// Set once the browser has read localStorage. Stays `false` during SSR.
    pub checked: bool,
}

impl AdminSession {
    pub fn is_authorized(&self) -> bool {
        self.checked && has_token(self.token.as_deref())
    }
}

/// True for a present, non-blank token.
pub fn has_token(token: Option<&str>) -> bool {
    token.is_some_and(|t| !t.trim().is_empty())
}
