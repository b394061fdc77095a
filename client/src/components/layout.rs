//! Site header with role-aware navigation.
//!
//! Logout only clears the session. Protected pages react through their
//! route guard, which sends the visitor to the matching login page; public
//! pages stay where they are.

use leptos::prelude::*;

use crate::app::AppServices;
use crate::net::types::Role;
use crate::state::auth::AuthState;

#[component]
pub fn AppHeader() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let services = expect_context::<AppServices>();
    let on_logout = move |_: leptos::ev::MouseEvent| {
        auth.set(services.session.logout());
    };

    let nav = move || {
        let state = auth.get();
        if state.loading {
            return view! { <span class="nav__status">"Loading..."</span> }.into_any();
        }
        match (state.is_authenticated(), state.role()) {
            (true, Some(role)) => view! {
                <a class="nav__link" href=role.dashboard_path()>"Dashboard"</a>
                <a class="nav__link" href=role.profile_path()>"Profile"</a>
                <span class="nav__self">
                    {state.identity.email.clone().unwrap_or_else(|| role.to_string())}
                </span>
            }
            .into_any(),
            (true, None) => view! { <span class="nav__self">"Signed in"</span> }.into_any(),
            (false, _) => view! {
                <a class="nav__link" href=Role::Patient.login_path()>"Patient Login"</a>
                <a class="nav__link" href=Role::Doctor.login_path()>"Doctor Login"</a>
                <a class="nav__link" href=Role::Patient.register_path()>"Register"</a>
            }
            .into_any(),
        }
    };

    view! {
        <header class="nav">
            <a class="nav__brand" href="/">"MedBook"</a>
            <nav class="nav__links">{nav}</nav>
            <Show when=move || auth.get().is_authenticated()>
                <button class="btn nav__logout" on:click=on_logout.clone()>
                    "Logout"
                </button>
            </Show>
        </header>
    }
}
