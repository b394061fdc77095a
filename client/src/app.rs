//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::layout::AppHeader;
use crate::net::api::{ApiClient, ApiConfig};
use crate::net::types::Role;
use crate::pages::{
    doctor_dashboard::DoctorDashboardPage,
    home::HomePage,
    login::LoginPage,
    patient_dashboard::PatientDashboardPage,
    profile::{DoctorProfilePage, PatientProfilePage},
    register::{DoctorRegisterPage, PatientRegisterPage},
};
use crate::state::auth::{AuthState, SessionContext};
use crate::state::token::TokenStore;
use crate::util::claims::ClaimRules;
use crate::util::storage::BrowserStorage;

/// Session and REST client shared by every page. Both hold the same
/// [`TokenStore`], so a login is visible to the next request.
#[derive(Clone, Debug)]
pub struct AppServices {
    pub session: SessionContext<BrowserStorage>,
    pub api: ApiClient<BrowserStorage>,
}

impl AppServices {
    #[must_use]
    pub fn new(config: ApiConfig) -> Self {
        let tokens = TokenStore::new(BrowserStorage);
        Self {
            session: SessionContext::new(tokens.clone(), ClaimRules::default()),
            api: ApiClient::new(config, tokens),
        }
    }
}

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the auth snapshot and services, resolves the stored session
/// once after hydration, and sets up routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::default());
    let services = AppServices::new(ApiConfig::from_build_env());
    provide_context(auth);
    provide_context(services.clone());

    // Effects only run in the browser, where the token store is readable.
    Effect::new(move || {
        auth.set(services.session.initialize());
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/medbook.css"/>
        <Title text="MedBook"/>

        <Router>
            <AppHeader/>
            <main class="page">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route
                        path=(StaticSegment("patient"), StaticSegment("login"))
                        view=|| view! { <LoginPage audience=Role::Patient/> }
                    />
                    <Route
                        path=(StaticSegment("doctor"), StaticSegment("login"))
                        view=|| view! { <LoginPage audience=Role::Doctor/> }
                    />
                    <Route path=(StaticSegment("patient"), StaticSegment("register")) view=PatientRegisterPage/>
                    <Route path=(StaticSegment("doctor"), StaticSegment("register")) view=DoctorRegisterPage/>
                    <Route path=(StaticSegment("patient"), StaticSegment("dashboard")) view=PatientDashboardPage/>
                    <Route path=(StaticSegment("doctor"), StaticSegment("dashboard")) view=DoctorDashboardPage/>
                    <Route path=(StaticSegment("patient"), StaticSegment("profile")) view=PatientProfilePage/>
                    <Route path=(StaticSegment("doctor"), StaticSegment("profile")) view=DoctorProfilePage/>
                </Routes>
            </main>
        </Router>
    }
}
