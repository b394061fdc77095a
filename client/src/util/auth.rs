//! Route guard shared by every authenticated page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Protected routes apply identical redirect rules: missing token goes to the
//! login page for the required audience, a wrong role goes home. Nothing
//! happens while the session is still resolving.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::types::Role;
use crate::state::auth::AuthState;

/// Decision for a resolved session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardOutcome {
    Allow,
    Redirect(&'static str),
}

/// Guard status including the unresolved phase.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardPhase {
    Unresolved,
    Allowed,
    Redirecting(&'static str),
}

/// Apply the redirect rules to a session, ignoring `loading`.
///
/// Without a required role a missing token sends the visitor to the patient
/// login. With one, an unknown or different role is a mismatch.
#[must_use]
pub fn evaluate_guard(state: &AuthState, required: Option<Role>) -> GuardOutcome {
    if !state.is_authenticated() {
        return GuardOutcome::Redirect(required.unwrap_or(Role::Patient).login_path());
    }
    match required {
        Some(role) if state.role() != Some(role) => GuardOutcome::Redirect("/"),
        _ => GuardOutcome::Allow,
    }
}

#[must_use]
pub fn guard_phase(state: &AuthState, required: Option<Role>) -> GuardPhase {
    if state.loading {
        return GuardPhase::Unresolved;
    }
    match evaluate_guard(state, required) {
        GuardOutcome::Allow => GuardPhase::Allowed,
        GuardOutcome::Redirect(to) => GuardPhase::Redirecting(to),
    }
}

/// Navigate away whenever the resolved session fails the guard.
pub fn install_role_guard<F>(auth: RwSignal<AuthState>, required: Option<Role>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if let GuardPhase::Redirecting(to) = guard_phase(&auth.get(), required) {
            leptos::logging::log!("guard: redirecting to {to}");
            navigate(to, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });
}

/// Follow a redirect requested by an async page action (a 401 from the
/// backend, for instance).
pub fn install_redirect<F>(target: RwSignal<Option<&'static str>>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if let Some(to) = target.get() {
            target.set(None);
            navigate(to, NavigateOptions::default());
        }
    });
}

/// Render `children` only for a session that passes the guard; shows a
/// loading line while the session resolves.
#[component]
pub fn RequireRole(#[prop(optional)] role: Option<Role>, children: ChildrenFn) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    install_role_guard(auth, role, use_navigate());

    let phase = move || guard_phase(&auth.get(), role);
    view! {
        <Show
            when=move || phase() == GuardPhase::Allowed
            fallback=move || {
                view! {
                    <p class="page-status">
                        {move || match phase() {
                            GuardPhase::Unresolved => "Loading...",
                            _ => "Redirecting...",
                        }}
                    </p>
                }
            }
        >
            {children()}
        </Show>
    }
}
