//! Landing page with entry points for both audiences.

use leptos::prelude::*;

use crate::net::types::Role;
use crate::state::auth::AuthState;

#[component]
pub fn HomePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();

    let entry = move || {
        let state = auth.get();
        match state.role().filter(|_| state.is_authenticated()) {
            Some(role) => view! {
                <p>
                    "Welcome back. "
                    <a class="btn btn--primary" href=role.dashboard_path()>"Go to dashboard"</a>
                </p>
            }
            .into_any(),
            None => view! {
                <div class="home__cards">
                    <AudienceCard role=Role::Patient blurb="Book and manage your appointments."/>
                    <AudienceCard role=Role::Doctor blurb="Review and complete your schedule."/>
                </div>
            }
            .into_any(),
        }
    };

    view! {
        <div class="home">
            <h1>"MedBook"</h1>
            <p class="home__lead">"Schedule medical appointments online."</p>
            {entry}
        </div>
    }
}

#[component]
fn AudienceCard(role: Role, blurb: &'static str) -> impl IntoView {
    view! {
        <section class="home__card">
            <h2>{format!("For {}s", role.as_str().to_ascii_lowercase())}</h2>
            <p>{blurb}</p>
            <a class="btn btn--primary" href=role.login_path()>"Sign in"</a>
            <a class="btn" href=role.register_path()>"Register"</a>
        </section>
    }
}
