//! Email + password login for either audience.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::app::AppServices;
use crate::components::field::FormField;
use crate::net::types::{Credentials, Role};
use crate::state::auth::AuthState;
use crate::util::auth::install_redirect;
use crate::util::task::spawn_browser_task;

/// Trim the email and require both fields.
///
/// # Errors
///
/// Returns the inline message when either field is blank.
pub fn validate_login_input(email: &str, password: &str) -> Result<Credentials, &'static str> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err("Enter both email and password.");
    }
    Ok(Credentials { email: email.to_owned(), password: password.to_owned() })
}

#[component]
pub fn LoginPage(audience: Role) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let services = expect_context::<AppServices>();
    let redirect = RwSignal::new(None::<&'static str>);
    install_redirect(redirect, use_navigate());

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let credentials = match validate_login_input(&email.get(), &password.get()) {
            Ok(credentials) => credentials,
            Err(message) => {
                error.set(Some(message.to_owned()));
                return;
            }
        };
        busy.set(true);
        error.set(None);

        let services = services.clone();
        spawn_browser_task(async move {
            match services.session.login(&services.api, &credentials, audience).await {
                Ok((state, _response)) => {
                    let landing = state.role().unwrap_or(audience).dashboard_path();
                    auth.set(state);
                    redirect.set(Some(landing));
                }
                Err(err) => {
                    leptos::logging::warn!("login failed: {err}");
                    error.set(Some(err.user_message("Login failed. Check your email and password.")));
                }
            }
            busy.set(false);
        });
    };

    view! {
        <div class="auth-page">
            <form class="auth-card" on:submit=on_submit>
                <h1>{format!("{audience} Login")}</h1>
                <FormField
                    label="Email"
                    input_type="email"
                    value=email
                    on_input=Callback::new(move |v| email.set(v))
                    disabled=busy
                    required=true
                />
                <FormField
                    label="Password"
                    input_type="password"
                    value=password
                    on_input=Callback::new(move |v| password.set(v))
                    disabled=busy
                    required=true
                />
                <Show when=move || error.get().is_some()>
                    <p class="message message--error">{move || error.get().unwrap_or_default()}</p>
                </Show>
                <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                    {move || if busy.get() { "Signing in..." } else { "Sign In" }}
                </button>
                <p class="auth-card__switch">
                    "No account? "
                    <a href=audience.register_path()>"Register"</a>
                </p>
            </form>
        </div>
    }
}
