//! Admin sign-in against the external API.
//!
//! On success the returned token is stored and the visitor is sent to the
//! admin table. A visitor who already holds a token skips the form.

#[cfg(test)]
#[path = "admin_login_test.rs"]
mod admin_login_test;

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::auth::AdminSession;
use crate::util::auth::read_admin_token;

pub(crate) const ADMIN_ROUTE: &str = "/admin";

/// Trim both fields and require each to be present.
///
/// # Errors
///
/// A user-facing message when either field is blank.
pub fn validate_login_input(email: &str, password: &str) -> Result<(String, String), &'static str> {
    let email = email.trim();
    if email.is_empty() || password.trim().is_empty() {
        return Err("Enter your email and password.");
    }
    if !email.contains('@') {
        return Err("Enter a valid email address.");
    }
    Ok((email.to_owned(), password.to_owned()))
}

#[component]
pub fn AdminLoginPage() -> impl IntoView {
    let session = expect_context::<RwSignal<AdminSession>>();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    {
        let navigate = navigate.clone();
        Effect::new(move || {
            if let Some(token) = read_admin_token() {
                session.set(AdminSession { token: Some(token), checked: true });
                navigate(ADMIN_ROUTE, NavigateOptions::default());
            }
        });
    }

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let (email_value, password_value) = match validate_login_input(&email.get(), &password.get()) {
            Ok(fields) => fields,
            Err(msg) => {
                info.set(msg.to_owned());
                return;
            }
        };
        busy.set(true);
        info.set("Signing in...".to_owned());

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::admin_login(&email_value, &password_value).await {
                    Ok(token) => {
                        crate::util::auth::store_admin_token(&token);
                        session.set(AdminSession { token: Some(token), checked: true });
                        info.set(String::new());
                        navigate(ADMIN_ROUTE, NavigateOptions::default());
                    }
                    Err(e) => {
                        log::warn!("admin login failed: {e}");
                        info.set(format!("Sign-in failed: {e}"));
                    }
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (email_value, password_value, &navigate);
            busy.set(false);
        }
    };

    view! {
        <Title text="Admin sign-in | AETHER"/>
        <div class="login-page">
            <div class="login-card">
                <h1>"AETHER Admin"</h1>
                <p class="login-card__subtitle">"Sign in to view registrations"</p>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="email"
                        autocomplete="username"
                        placeholder="admin@aether.club"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        autocomplete="current-password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        "Sign in"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
            </div>
        </div>
    }
}
