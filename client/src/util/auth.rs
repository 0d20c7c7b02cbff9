//! Admin token storage and the route gate.
//!
//! SYSTEM CONTEXT
//! ==============
//! The token is only a presence check; it is never decoded or verified.
//! Storage access is browser-only, and SSR paths report "no token" so the
//! server never renders admin rows.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::auth::AdminSession;

/// localStorage key holding the admin token.
pub const TOKEN_STORAGE_KEY: &str = "aether_admin_token";

/// Route the gate sends unauthorized visitors to.
pub const LOGIN_ROUTE: &str = "/admin/login";

#[cfg(feature = "hydrate")]
fn storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

/// Read the stored admin token, if any.
pub fn read_admin_token() -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        storage()?
            .get_item(TOKEN_STORAGE_KEY)
            .ok()
            .flatten()
            .filter(|t| crate::state::auth::has_token(Some(t)))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Persist the admin token. Best-effort; storage may be disabled.
pub fn store_admin_token(token: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = storage() {
            if storage.set_item(TOKEN_STORAGE_KEY, token).is_err() {
                log::warn!("admin token could not be persisted");
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
    }
}

pub fn clear_admin_token() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = storage() {
            let _ = storage.remove_item(TOKEN_STORAGE_KEY);
        }
    }
}

/// Whether a checked session without a token must leave the admin route.
pub fn should_redirect_unauth(session: &AdminSession) -> bool {
    session.checked && !session.is_authorized()
}

/// Load the stored token into `session` once mounted in the browser, then
/// redirect to the login route whenever the session is checked and empty.
pub fn install_admin_gate<F>(session: RwSignal<AdminSession>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if !session.get_untracked().checked {
            session.set(AdminSession { token: read_admin_token(), checked: true });
        }
    });
    Effect::new(move || {
        if should_redirect_unauth(&session.get()) {
            navigate(LOGIN_ROUTE, NavigateOptions::default());
        }
    });
}

/// Drop the token and mark the session checked-but-empty.
pub fn sign_out(session: RwSignal<AdminSession>) {
    clear_admin_token();
    session.set(AdminSession { token: None, checked: true });
}
